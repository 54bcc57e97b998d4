//! Sieve CLI library.
//!
//! This library provides the core functionality for the Sieve command-line interface,
//! including configuration management, the per-user session context, command execution,
//! and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use context::SessionContext;
pub use error::{CliError, Result};
pub use output::Formatter;
