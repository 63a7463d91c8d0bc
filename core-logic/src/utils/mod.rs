pub mod accounts;
pub mod clock;
pub mod logger;
pub mod runner;
