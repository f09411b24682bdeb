//! CLI module for siftql
//!
//! Provides the command-line interface:
//! - optimize: parse + optimize one query, print the result
//! - explain: detailed per-condition score breakdown
//! - demo: run the built-in example queries
//! - repl: read queries line by line and optimize each
//!
//! The CLI is a thin front end: it reads a query, calls into the pipeline,
//! and renders the result. Parse errors are printed, never panicked on.

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{demo, explain, optimize, repl, run, run_command};
pub use errors::{CliError, CliResult};
