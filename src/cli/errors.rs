//! CLI-specific error types
//!
//! Any CliError reaching main terminates the process with a non-zero exit.

use std::fmt;
use std::io;

use crate::parser::ParseError;
use crate::scorer::ProfileError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Scoring profile could not be loaded
    ProfileError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Input SQL was rejected by the parser
    ParseRejected,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProfileError => "SIFT_CLI_PROFILE_ERROR",
            Self::IoError => "SIFT_CLI_IO_ERROR",
            Self::ParseRejected => "SIFT_CLI_PARSE_REJECTED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Profile error
    pub fn profile_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ProfileError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Parse rejection
    pub fn parse_rejected(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ParseRejected, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ProfileError> for CliError {
    fn from(e: ProfileError) -> Self {
        Self::profile_error(e.to_string())
    }
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        Self::parse_rejected(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
