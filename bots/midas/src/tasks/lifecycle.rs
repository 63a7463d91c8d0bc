//! Task lifecycle handler.
//!
//! Drives a single remote task to completion or a reported failure:
//!
//! ```text
//! New -> SkippedComplete                          (already done, no calls)
//!     -> ClaimedDirect                            (claim marker set, claim only)
//!     -> Started -> Waited -> ClaimedAfterWait    (full start/wait/claim)
//! ```
//!
//! Every branch returns a uniform [`TaskOutcome`]; nothing escapes the
//! handler as an error.

use crate::client::MidasClient;
use crate::models::TaskRecord;
use core_logic::{Clock, TaskOutcome};
use std::time::Duration;
use tracing::info;

/// Where a task ended up. Mostly useful for tests and diagnostics; the
/// operator-facing result is the returned [`TaskOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPhase {
    SkippedComplete,
    ClaimedDirect,
    StartFailed,
    ClaimedAfterWait,
}

/// Classifies `task` and drives it through its remaining phases.
///
/// Branches are evaluated in order:
/// 1. completion signal says done -> skip, zero network calls;
/// 2. claim marker present -> claim directly, the start call would be
///    redundant;
/// 3. otherwise start, sleep `waitTime` seconds if the task has one, claim.
pub async fn run_task(
    client: &MidasClient,
    clock: &dyn Clock,
    token: &str,
    task: &TaskRecord,
) -> (TaskPhase, TaskOutcome) {
    if task.is_complete() {
        info!(target: "account_event", "Skipped task '{}': already completed", task.name);
        return (
            TaskPhase::SkippedComplete,
            TaskOutcome::info("Task already completed"),
        );
    }

    if task.is_claimable() {
        let outcome = client.claim_task(token, &task.id).await;
        if outcome.success {
            info!(target: "account_event", "Claimed reward for task '{}'", task.name);
        } else {
            info!(
                target: "account_event",
                "Could not claim reward for task '{}': {}",
                task.name,
                outcome.error.as_deref().unwrap_or("unknown")
            );
        }
        return (TaskPhase::ClaimedDirect, outcome);
    }

    let start = client.start_task(token, &task.id).await;
    if !start.success {
        return (
            TaskPhase::StartFailed,
            TaskOutcome::failed(start.error.unwrap_or_else(|| "start failed".to_string())),
        );
    }

    if let Some(wait) = task.wait_time {
        if wait > 0 {
            info!(
                target: "account_event",
                "Waiting {} seconds for task '{}' to complete...", wait, task.name
            );
            clock.sleep(Duration::from_secs(wait)).await;
        }
    }

    let outcome = client.claim_task(token, &task.id).await;
    if outcome.success {
        info!(
            target: "account_event",
            "Task '{}' finished and reward Claimed", task.name
        );
    } else {
        info!(
            target: "account_event",
            "Could not claim reward for task '{}' after waiting: {}",
            task.name,
            outcome.error.as_deref().unwrap_or("unknown")
        );
    }
    (TaskPhase::ClaimedAfterWait, outcome)
}
