use anyhow::Result;
use config::{Config, File};
use core_logic::{ConfigError, RunConfig};
use serde::Deserialize;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://api-tg-app.midas.app/api";

#[derive(Debug, Deserialize, Clone)]
pub struct MidasConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_account_delay")]
    pub account_delay_secs: u64,
    #[serde(default = "default_cycle_hours")]
    pub cycle_hours: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_data_file() -> String {
    "data.txt".to_string()
}

fn default_account_delay() -> u64 {
    5
}

fn default_cycle_hours() -> u64 {
    24
}

impl Default for MidasConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            data_file: default_data_file(),
            account_delay_secs: default_account_delay(),
            cycle_hours: default_cycle_hours(),
        }
    }
}

impl MidasConfig {
    /// Loads the file at `path`, erroring when it does not exist. Use for
    /// operator-supplied paths so a typo'd `--config` never silently runs
    /// against the live API on defaults.
    pub fn load(path: &str) -> Result<Self> {
        Self::read(path, true)
    }

    /// Loads `path` when present; a missing file keeps the built-in
    /// defaults. Use only for the stock config location.
    pub fn load_or_default(path: &str) -> Result<Self> {
        Self::read(path, false)
    }

    fn read(path: &str, required: bool) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(required))
            .build()?;

        let cfg: MidasConfig = settings.try_deserialize().map_err(|e| anyhow::anyhow!(e))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url).map_err(|_| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
        })?;
        if self.cycle_hours == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cycle_hours".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub fn to_run_config(&self) -> RunConfig {
        RunConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            data_file: self.data_file.clone(),
            account_delay_secs: self.account_delay_secs,
            cycle_hours: self.cycle_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_live_service() {
        let cfg = MidasConfig::default();
        assert_eq!(cfg.base_url, "https://api-tg-app.midas.app/api");
        assert_eq!(cfg.data_file, "data.txt");
        assert_eq!(cfg.account_delay_secs, 5);
        assert_eq!(cfg.cycle_hours, 24);
    }

    #[test]
    fn run_config_strips_trailing_slash() {
        let cfg = MidasConfig {
            base_url: "https://api.example.com/api/".to_string(),
            ..MidasConfig::default()
        };
        assert_eq!(cfg.to_run_config().base_url, "https://api.example.com/api");
    }

    #[test]
    fn rejects_garbage_base_url() {
        let cfg = MidasConfig {
            base_url: "not a url".to_string(),
            ..MidasConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_cycle_hours() {
        let cfg = MidasConfig {
            cycle_hours: 0,
            ..MidasConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
