use crate::error::AccountError;
use crate::traits::AccountSource;
use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// One init-data blob from the account list. Opaque to the framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account(String);

impl Account {
    pub fn new(init_data: impl Into<String>) -> Self {
        Self(init_data.into())
    }

    pub fn init_data(&self) -> &str {
        &self.0
    }
}

/// Flat-file account list: one init-data string per line.
/// Blank lines and `#` comments are skipped.
pub struct AccountFile {
    path: String,
}

impl AccountFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl AccountSource for AccountFile {
    fn load_accounts(&self) -> Result<Vec<Account>> {
        let path = Path::new(&self.path);
        if !path.exists() {
            return Err(AccountError::FileNotFound {
                path: self.path.clone(),
            }
            .into());
        }

        let content = fs::read_to_string(path).map_err(|e| AccountError::IoError {
            path: self.path.clone(),
            msg: e.to_string(),
        })?;

        let mut accounts = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            accounts.push(Account::new(line));
        }

        if accounts.is_empty() {
            warn!("{} contains no usable account lines", self.path);
            return Err(AccountError::Empty {
                path: self.path.clone(),
            }
            .into());
        }

        info!("Loaded {} accounts from {}", accounts.len(), self.path);
        Ok(accounts)
    }
}
