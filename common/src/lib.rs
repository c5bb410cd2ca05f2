//! Shared utilities for the Inception diagnostic tools
//!
//! This crate provides common functionality used by both binaries:
//! - Shell command execution with captured output
//! - Stack configuration from environment variables
//! - Structured logging initialization

pub mod command;
pub mod config;
pub mod logging;

pub use command::{docker_exec, mysql_query, shell, CommandOutput};
pub use config::{ConfigExt, StackConfig};
pub use logging::init_logging;
