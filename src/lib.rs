//! siftql - a deterministic, rule-based optimizer for simple SQL SELECT queries
//!
//! The pipeline has three stages: parse a restricted
//! `SELECT * FROM <table> WHERE ...` statement into a [`ParsedQuery`],
//! score each WHERE condition's selectivity against heuristic tables, and
//! stable-sort the conditions so the most selective filters run first,
//! producing an [`OptimizedQuery`] with an execution plan and summary.
//!
//! ```
//! use siftql::{optimize, parse};
//!
//! let query = parse("SELECT * FROM users WHERE age > 25 AND country = 'US'").unwrap();
//! let optimized = optimize(&query);
//! assert_eq!(optimized.optimized_conditions[0].column, "country");
//! ```

pub mod cli;
pub mod observability;
pub mod optimizer;
pub mod parser;
pub mod scorer;

pub use optimizer::{ExplainReport, OptimizedQuery, PlanStep, QueryOptimizer};
pub use parser::{Condition, Literal, Operator, ParseError, ParsedQuery, SqlParser};
pub use scorer::{ScoredCondition, ScoringProfile, SelectivityScorer};

/// Parses a statement with the restricted SELECT grammar.
pub fn parse(sql: &str) -> Result<ParsedQuery, ParseError> {
    SqlParser::new().parse(sql)
}

/// Scores one condition against the built-in default profile.
///
/// Lower is more selective. Always succeeds.
pub fn score(condition: &Condition) -> f64 {
    SelectivityScorer::new().score(condition)
}

/// Optimizes a parsed query with the built-in default profile.
pub fn optimize(query: &ParsedQuery) -> OptimizedQuery {
    QueryOptimizer::new().optimize(query)
}
