//! Observability subsystem for siftql
//!
//! Structured JSON logging only. Logging is synchronous, one line per
//! event, with deterministic field ordering, and never affects the
//! pipeline's behavior. All log output goes to stderr: stdout is reserved
//! for query results.

mod logger;

pub use logger::{Logger, Severity};
