//! CLI argument definitions using clap
//!
//! Commands:
//! - siftql optimize [SQL] [--profile <path>] [--json]
//! - siftql explain [SQL] [--profile <path>]
//! - siftql demo [--profile <path>]
//! - siftql repl [--profile <path>]
//!
//! When SQL is omitted, one line is read from stdin.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// siftql - a deterministic, rule-based optimizer for simple SQL SELECT queries
#[derive(Parser, Debug)]
#[command(name = "siftql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse and optimize a single query
    Optimize {
        /// SQL statement; read from stdin when omitted
        sql: Option<String>,

        /// Scoring profile JSON (built-in defaults when omitted)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Emit the result as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the per-condition score breakdown for a query
    Explain {
        /// SQL statement; read from stdin when omitted
        sql: Option<String>,

        /// Scoring profile JSON (built-in defaults when omitted)
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Optimize the built-in example queries
    Demo {
        /// Scoring profile JSON (built-in defaults when omitted)
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Read queries line by line and optimize each
    Repl {
        /// Scoring profile JSON (built-in defaults when omitted)
        #[arg(long)]
        profile: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
