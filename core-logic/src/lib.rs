//! # Core Logic - Shared Utilities for the Bot Framework
//!
//! This crate provides the pieces shared by every bot implementation:
//! logging setup, typed errors, the worker/cycle abstractions and the
//! flat-file account loader.
//!
//! ## Modules
//!
//! - [`config`] - Runtime configuration passed down to workers
//! - [`error`] - Typed error handling with thiserror
//! - [`traits`] - Core trait definitions (worker, account source)
//! - [`utils`] - Utility modules (logger, accounts, clock, cycle runner)

pub mod config;
pub mod error;
pub mod traits;
pub(crate) mod utils;

pub use config::RunConfig;
pub use error::{AccountError, ApiError, ConfigError, CoreError};
pub use traits::{AccountSource, CycleStats, TaskOutcome, Worker};

// Utils are pub(crate) - only export specific public utilities
pub use utils::accounts::{Account, AccountFile};
pub use utils::clock::{Clock, TokioClock};
pub use utils::logger::setup_logger;
pub use utils::runner::CycleRunner;
