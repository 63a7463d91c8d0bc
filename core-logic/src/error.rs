//! # Core Error Types
//!
//! Centralized error definitions for the core-logic crate.
//! All errors implement `std::error::Error` and `std::fmt::Display`.

use thiserror::Error;

/// Unified error type for core-logic operations.
///
/// Wraps the specific category enums and provides a single
/// error interface for the application layer.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Config(ConfigError),

    #[error(transparent)]
    Account(AccountError),

    #[error(transparent)]
    Api(ApiError),

    #[error("Unknown error: {message}")]
    Unknown { message: String },
}

impl From<ConfigError> for CoreError {
    fn from(e: ConfigError) -> Self {
        CoreError::Config(e)
    }
}

impl From<AccountError> for CoreError {
    fn from(e: AccountError) -> Self {
        CoreError::Account(e)
    }
}

impl From<ApiError> for CoreError {
    fn from(e: ApiError) -> Self {
        CoreError::Api(e)
    }
}

/// Configuration-related errors
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Invalid base URL: '{url}'")]
    InvalidBaseUrl { url: String },

    #[error("Missing required configuration field: '{field}'")]
    MissingField { field: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

/// Account-list loading errors
#[derive(Error, Debug, Clone)]
pub enum AccountError {
    #[error("Account file not found: {path}")]
    FileNotFound { path: String },

    #[error("I/O error reading {path}: {msg}")]
    IoError { path: String, msg: String },

    #[error("No usable account lines in {path}")]
    Empty { path: String },
}

/// Remote API call errors.
///
/// Everything a single endpoint operation can fail with is captured
/// here as a value; nothing propagates past the account worker.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("HTTP error {status} from {endpoint}")]
    Http { status: u16, endpoint: String },

    #[error("Invalid response body from {endpoint}: {body}")]
    Decode { endpoint: String, body: String },

    #[error("Transport failure for {endpoint}: {reason}")]
    Transport { endpoint: String, reason: String },
}

impl ApiError {
    /// Status code carried by the error, if it reached the server at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
