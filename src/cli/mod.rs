//! CLI module
//!
//! Diagnostic command-line interface over [`GitHubService`](crate::service::GitHubService).
//!
//! # Commands
//!
//! - `check` - Report whether a resource exists
//! - `list` - Fetch every page of a collection and print it as JSON

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
