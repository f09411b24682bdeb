//! siftql CLI entry point
//!
//! A minimal entrypoint: parse arguments, dispatch to the CLI module,
//! print the error and exit non-zero on failure. All logic lives in
//! `cli`.

use siftql::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
