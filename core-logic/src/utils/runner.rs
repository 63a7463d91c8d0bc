use crate::traits::Worker;
use crate::utils::clock::Clock;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Drives one worker over the account list on a fixed interval, forever.
///
/// No jitter, no skip-if-already-run guard, no persistence of the last run;
/// a cycle that fails partway simply waits for the next interval.
pub struct CycleRunner {
    clock: Arc<dyn Clock>,
}

impl CycleRunner {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Runs until Ctrl+C.
    pub async fn run(&self, worker: Box<dyn Worker>, cycle_interval: Duration) -> Result<()> {
        let token = CancellationToken::new();
        let cloned_token = token.clone();

        tokio::spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C. Initiating graceful shutdown...");
                    cloned_token.cancel();
                }
                Err(err) => {
                    error!("Unable to listen for shutdown signal: {}", err);
                }
            }
        });

        self.run_with_token(worker, cycle_interval, token).await
    }

    /// Same loop with an externally owned cancellation token.
    pub async fn run_with_token(
        &self,
        worker: Box<dyn Worker>,
        cycle_interval: Duration,
        token: CancellationToken,
    ) -> Result<()> {
        let mut cycle: u64 = 0;

        loop {
            if token.is_cancelled() {
                info!("Runner stopping (cancelled).");
                break;
            }

            cycle += 1;
            info!(target: "account_event", "===== Cycle {} starting =====", cycle);

            match worker.run_cycle(token.clone()).await {
                Ok(stats) => {
                    info!(
                        target: "account_event",
                        "Cycle {} complete. Accounts OK: {} | Failed: {}",
                        cycle, stats.accounts_ok, stats.accounts_failed
                    );
                }
                Err(e) => {
                    // Workers isolate per-account faults; reaching here means
                    // something outside any account boundary broke.
                    error!("Cycle {} aborted: {:?}", cycle, e);
                }
            }

            info!(
                target: "account_event",
                "Sleeping {} hours before the next cycle...",
                cycle_interval.as_secs() / 3600
            );

            tokio::select! {
                _ = token.cancelled() => {
                    info!("Runner stopping (cancelled during sleep).");
                    break;
                }
                _ = self.clock.sleep(cycle_interval) => {}
            }
        }

        Ok(())
    }
}
