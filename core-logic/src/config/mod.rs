use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime settings a bot crate hands down to the shared runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub base_url: String,
    pub data_file: String,
    pub account_delay_secs: u64,
    pub cycle_hours: u64,
}

impl RunConfig {
    pub fn account_delay(&self) -> Duration {
        Duration::from_secs(self.account_delay_secs)
    }

    pub fn cycle_interval(&self) -> Duration {
        Duration::from_secs(self.cycle_hours * 3600)
    }
}
