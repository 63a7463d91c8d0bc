use serde::{Deserialize, Serialize};

/// The two shapes the remote API uses to signal task completion.
///
/// A task carries either a boolean `completed` flag or a string `state`;
/// never both. Both constructors map to the one canonical
/// [`CompletionSignal::is_complete`] projection, resolved once at ingestion
/// so the lifecycle handler never re-branches on the wire shape.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum CompletionSignal {
    Flag { completed: bool },
    State { state: String },
}

impl CompletionSignal {
    pub fn is_complete(&self) -> bool {
        match self {
            CompletionSignal::Flag { completed } => *completed,
            CompletionSignal::State { state } => state == "COMPLETED",
        }
    }
}

/// Wire shape of a task as the API sends it. Collapsed into [`TaskRecord`]
/// immediately after decode.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecordWire {
    id: String,
    name: String,
    #[serde(default)]
    completed: Option<bool>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    can_be_claimed_at: Option<serde_json::Value>,
    #[serde(default)]
    wait_time: Option<u64>,
}

/// One remote reward task.
///
/// `can_be_claimed_at` stays an opaque JSON value: the only thing that
/// matters is present-and-non-null, which signals claim eligibility
/// without a start call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "TaskRecordWire", rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    pub name: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub completion: Option<CompletionSignal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_be_claimed_at: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_time: Option<u64>,
}

impl From<TaskRecordWire> for TaskRecord {
    fn from(wire: TaskRecordWire) -> Self {
        // The flag shape wins if a payload ever carries both.
        let completion = match (wire.completed, wire.state) {
            (Some(completed), _) => Some(CompletionSignal::Flag { completed }),
            (None, Some(state)) => Some(CompletionSignal::State { state }),
            (None, None) => None,
        };
        TaskRecord {
            id: wire.id,
            name: wire.name,
            completion,
            can_be_claimed_at: wire.can_be_claimed_at,
            wait_time: wire.wait_time,
        }
    }
}

impl TaskRecord {
    pub fn is_complete(&self) -> bool {
        self.completion
            .as_ref()
            .map(CompletionSignal::is_complete)
            .unwrap_or(false)
    }

    /// A present, non-null claim marker means the task is already eligible.
    pub fn is_claimable(&self) -> bool {
        self.can_be_claimed_at.is_some()
    }

    /// The four-field projection returned by the task list endpoint.
    pub fn projected(&self) -> TaskRecord {
        TaskRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            completion: None,
            can_be_claimed_at: self.can_be_claimed_at.clone(),
            wait_time: self.wait_time,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub points: Option<serde_json::Value>,
    #[serde(default)]
    pub tickets: u64,
}

impl UserProfile {
    pub fn points_display(&self) -> String {
        match &self.points {
            Some(v) => v.to_string(),
            None => "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NextRewards {
    #[serde(default)]
    pub points: Option<u64>,
    #[serde(default)]
    pub tickets: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StreakInfo {
    #[serde(default)]
    pub streak_days_count: Option<u64>,
    #[serde(default)]
    pub next_rewards: Option<NextRewards>,
    #[serde(default)]
    pub message: Option<String>,
}

fn display_opt(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".into())
}

impl StreakInfo {
    pub fn days_display(&self) -> String {
        display_opt(self.streak_days_count)
    }

    pub fn next_points_display(&self) -> String {
        display_opt(self.next_rewards.as_ref().and_then(|r| r.points))
    }

    pub fn next_tickets_display(&self) -> String {
        display_opt(self.next_rewards.as_ref().and_then(|r| r.tickets))
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PlayReward {
    #[serde(default)]
    pub points: u64,
}
