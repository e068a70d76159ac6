//! Library components of the `join-csv` benchmark join tool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
pub mod types;

pub use commands::run_join;
pub use config::JoinConfig;
