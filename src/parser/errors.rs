//! Parser error types
//!
//! Every parse failure is surfaced to the caller; the pipeline never
//! attempts to optimize a partially parsed query. Variants carry the
//! offending fragment so the CLI can render a useful message.

use thiserror::Error;

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors produced while parsing a SELECT statement
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Statement does not start with `SELECT * FROM`
    #[error("unsupported statement '{0}': expected 'SELECT * FROM <table>'")]
    UnsupportedStatement(String),

    /// No table identifier after FROM
    #[error("missing table name after FROM")]
    MissingTable,

    /// Input between the table name and end of statement that is not a WHERE clause
    #[error("unexpected input after table name: '{0}'")]
    TrailingInput(String),

    /// Condition segment with no recognized comparison operator
    #[error("condition '{0}' has no recognized comparison operator")]
    MissingOperator(String),

    /// Condition segment with more than one comparison operator
    #[error("condition '{0}' contains more than one comparison operator")]
    AmbiguousCondition(String),

    /// Condition segment that does not split into column, operator and value
    #[error("condition '{0}' does not form '<column> <operator> <value>'")]
    MalformedCondition(String),
}

impl ParseError {
    /// Stable error code for logs and machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnsupportedStatement(_) => "SIFT_SQL_UNSUPPORTED_STATEMENT",
            ParseError::MissingTable => "SIFT_SQL_MISSING_TABLE",
            ParseError::TrailingInput(_) => "SIFT_SQL_TRAILING_INPUT",
            ParseError::MissingOperator(_) => "SIFT_SQL_MISSING_OPERATOR",
            ParseError::AmbiguousCondition(_) => "SIFT_SQL_AMBIGUOUS_CONDITION",
            ParseError::MalformedCondition(_) => "SIFT_SQL_MALFORMED_CONDITION",
        }
    }

    /// The offending fragment, when one exists
    pub fn fragment(&self) -> Option<&str> {
        match self {
            ParseError::UnsupportedStatement(s)
            | ParseError::TrailingInput(s)
            | ParseError::MissingOperator(s)
            | ParseError::AmbiguousCondition(s)
            | ParseError::MalformedCondition(s) => Some(s),
            ParseError::MissingTable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            ParseError::UnsupportedStatement("x".into()).code(),
            "SIFT_SQL_UNSUPPORTED_STATEMENT"
        );
        assert_eq!(ParseError::MissingTable.code(), "SIFT_SQL_MISSING_TABLE");
        assert_eq!(
            ParseError::AmbiguousCondition("a = b = c".into()).code(),
            "SIFT_SQL_AMBIGUOUS_CONDITION"
        );
    }

    #[test]
    fn test_error_carries_fragment() {
        let err = ParseError::MissingOperator("age 25".into());
        assert_eq!(err.fragment(), Some("age 25"));
        assert!(format!("{}", err).contains("age 25"));

        assert_eq!(ParseError::MissingTable.fragment(), None);
    }
}
