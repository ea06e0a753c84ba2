//! CLI module for TMS
//!
//! Provides command-line interface for:
//! - serve: Open the store and run the HTTP API
//! - init: Create the database schema
//! - export: One-shot document export

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, ConfigArgs};
pub use commands::{export, init, run, run_command, serve};
pub use config::{Config, HttpConfig};
pub use errors::{CliError, CliErrorCode, CliResult};
