use crate::client::{MidasClient, StreakStatus};
use crate::models::TaskRecord;
use crate::tasks::run_task;
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::Colorize;
use core_logic::{Account, AccountSource, Clock, CycleStats, RunConfig, Worker};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Sequential account processor: registers each account, performs the daily
/// actions, then drives every available task through its lifecycle.
///
/// Faults are isolated per step and per account; nothing crosses
/// `run_cycle` except a failure to read the account list itself.
pub struct AccountWorker {
    client: MidasClient,
    accounts: Arc<dyn AccountSource>,
    clock: Arc<dyn Clock>,
    config: RunConfig,
}

impl AccountWorker {
    pub fn new(
        client: MidasClient,
        accounts: Arc<dyn AccountSource>,
        clock: Arc<dyn Clock>,
        config: RunConfig,
    ) -> Self {
        Self {
            client,
            accounts,
            clock,
            config,
        }
    }

    /// Full sequence for one account. `Err` means the account was abandoned
    /// (failed registration, unreadable profile); the caller logs and moves
    /// on to the next account.
    async fn process_account(&self, account: &Account) -> Result<()> {
        let token = self
            .client
            .register(account.init_data())
            .await
            .context("User registration Failed")?;

        match self.client.update_streak(&token).await {
            Ok(StreakStatus::Claimed(info)) => {
                info!(
                    target: "account_event",
                    "Streak Success on day {}: next reward {} points - {} tickets",
                    info.days_display(),
                    info.next_points_display(),
                    info.next_tickets_display()
                );
            }
            Ok(StreakStatus::AlreadyClaimed) => {
                info!(target: "account_event", "Already checked in today");
            }
            Ok(StreakStatus::Unexpected { status, message }) => {
                warn!("Unexpected streak response ({}): {}", status, message);
            }
            // Decode errors carry the raw body; not fatal for the account.
            Err(e) => warn!("Could not read streak response: {}", e),
        }

        let visited = self.client.mark_visited(&token).await;
        if visited.success {
            info!(target: "account_event", "Visit Success");
        } else {
            warn!(
                "Could not update visited status: {}",
                visited.error.as_deref().unwrap_or("Unknown error")
            );
        }

        let profile = self
            .client
            .get_user(&token)
            .await
            .context("Fetching user profile Failed")?;

        info!(target: "account_event", "Points: {}", profile.points_display());
        info!(target: "account_event", "Tickets: {}", profile.tickets);

        for played in 0..profile.tickets {
            match self.client.play(&token).await {
                Ok(reward) => {
                    info!(target: "account_event", "Play Success: earned {} points", reward.points);
                }
                Err(e) => {
                    warn!("Play Failed ({}/{}): {}", played + 1, profile.tickets, e);
                }
            }
        }

        match self.client.available_tasks(&token).await {
            Ok(tasks) => self.process_tasks(&token, &tasks).await,
            Err(e) => warn!("Could not fetch task list: {}", e),
        }

        Ok(())
    }

    async fn process_tasks(&self, token: &str, tasks: &[TaskRecord]) {
        for task in tasks {
            info!(target: "account_event", "Processing task: {}", task.name);
            let (phase, outcome) = run_task(&self.client, self.clock.as_ref(), token, task).await;
            if !outcome.success {
                info!(
                    target: "account_event",
                    "Could not complete task '{}' (requirements not met)", task.name
                );
                warn!(
                    "Task detail ({:?}): {}",
                    phase,
                    serde_json::to_string(task).unwrap_or_else(|_| format!("{:?}", task))
                );
            }
        }
    }
}

#[async_trait]
impl Worker for AccountWorker {
    async fn run_cycle(&self, cancellation_token: CancellationToken) -> Result<CycleStats> {
        let accounts = self.accounts.load_accounts()?;
        let total = accounts.len();
        let mut stats = CycleStats::default();

        for (index, account) in accounts.iter().enumerate() {
            if cancellation_token.is_cancelled() {
                info!("Worker stopping (cancelled).");
                break;
            }

            info!(target: "account_event", "{}", "~".repeat(50).yellow());
            info!(
                target: "account_event",
                "{}",
                format!("Account: {}/{}", index + 1, total).green()
            );

            match self.process_account(account).await {
                Ok(()) => stats.accounts_ok += 1,
                Err(e) => {
                    stats.accounts_failed += 1;
                    warn!(
                        target: "account_event",
                        "Account {}/{} Failed: {:#}", index + 1, total, e
                    );
                    warn!("Account {} trace: {:?}", index + 1, e);
                }
            }

            // Courtesy delay towards the remote service, success or not.
            tokio::select! {
                _ = cancellation_token.cancelled() => {
                    info!("Worker stopping (cancelled during delay).");
                    break;
                }
                _ = self.clock.sleep(self.config.account_delay()) => {}
            }
        }

        Ok(stats)
    }
}
