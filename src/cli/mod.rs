//! CLI module
//!
//! Command-line interface for the client.
//!
//! # Commands
//!
//! - `list` - Fetch every record of a type
//! - `dataset` - Fetch every row of a dataset
//! - `query` - Run a SuiteQL query
//! - `get` / `create` / `update` / `delete` - Single-record operations

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, Payload};
pub use runner::Runner;
