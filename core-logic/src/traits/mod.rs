use anyhow::Result;
use async_trait::async_trait;

use crate::utils::accounts::Account;

/// Per-cycle tally of account outcomes.
#[derive(Debug, Default, Clone)]
pub struct CycleStats {
    pub accounts_ok: u64,
    pub accounts_failed: u64,
}

/// A worker processes the full account list once per cycle.
#[async_trait]
pub trait Worker: Send + Sync {
    /// Runs one full pass over the account list.
    ///
    /// Must never return Err for a single misbehaving account; per-account
    /// faults are logged and counted in the stats instead.
    async fn run_cycle(
        &self,
        cancellation_token: tokio_util::sync::CancellationToken,
    ) -> Result<CycleStats>;
}

/// Uniform result of one task-related operation.
///
/// Task operations report through this value; they never raise past
/// their boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskOutcome {
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl TaskOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
            error: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Source of the account list.
pub trait AccountSource: Send + Sync {
    /// Load accounts from the source (flat file, etc.)
    fn load_accounts(&self) -> Result<Vec<Account>>;
}
