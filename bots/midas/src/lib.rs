pub mod client;
pub mod config;
pub mod models;
pub mod tasks;
pub mod worker;
