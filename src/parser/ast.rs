//! Parsed query structures
//!
//! Defines the condition representation shared by the parser, the scorer
//! and the optimizer. All types are immutable once constructed.

use std::fmt;

use serde::Serialize;

/// Comparison operator of a WHERE condition.
///
/// Spellings are normalized at parse time: `=` and `==` become [`Operator::Eq`],
/// `!=` and `<>` become [`Operator::Ne`], `LIKE` and `ILIKE` (any case) become
/// [`Operator::Like`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    /// Equality: column = value
    Eq,
    /// Inequality: column != value
    Ne,
    /// Greater than: column > value
    Gt,
    /// Less than: column < value
    Lt,
    /// Greater than or equal: column >= value
    Ge,
    /// Less than or equal: column <= value
    Le,
    /// Pattern match: column LIKE value
    Like,
}

impl Operator {
    /// Returns true for the equality operator
    pub fn is_equality(&self) -> bool {
        matches!(self, Operator::Eq)
    }

    /// Returns true for the range operators (`>`, `<`, `>=`, `<=`)
    pub fn is_range(&self) -> bool {
        matches!(self, Operator::Gt | Operator::Lt | Operator::Ge | Operator::Le)
    }

    /// Returns true for the pattern-match operator
    pub fn is_pattern(&self) -> bool {
        matches!(self, Operator::Like)
    }

    /// Canonical SQL rendering of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Like => "LIKE",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Literal value on the right-hand side of a condition.
///
/// Quoted tokens parse as [`Literal::String`]; bare numeric tokens coerce to
/// [`Literal::Int`] or [`Literal::Float`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    String(String),
    Int(i64),
    Float(f64),
}

impl Literal {
    /// Lowercased stringified form used for value-frequency lookups.
    ///
    /// `country = 'US'` and `country = 'us'` must hit the same table entry.
    pub fn lookup_key(&self) -> String {
        match self {
            Literal::String(s) => s.to_lowercase(),
            Literal::Int(n) => n.to_string(),
            Literal::Float(x) => x.to_string(),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Int(n)
    }
}

impl From<f64> for Literal {
    fn from(x: f64) -> Self {
        Literal::Float(x)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "'{}'", s),
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Float(x) => write!(f, "{}", x),
        }
    }
}

/// A single WHERE-clause condition (column, operator, literal).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    /// Column name as written in the query
    pub column: String,
    /// Normalized comparison operator
    pub operator: Operator,
    /// Right-hand-side literal
    pub value: Literal,
}

impl Condition {
    /// Creates a condition
    pub fn new(column: impl Into<String>, operator: Operator, value: impl Into<Literal>) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
        }
    }

    /// Creates an equality condition
    pub fn eq(column: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::new(column, Operator::Eq, value)
    }

    /// Creates an inequality condition
    pub fn ne(column: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::new(column, Operator::Ne, value)
    }

    /// Creates a greater-than condition
    pub fn gt(column: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::new(column, Operator::Gt, value)
    }

    /// Creates a less-than condition
    pub fn lt(column: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::new(column, Operator::Lt, value)
    }

    /// Creates a greater-or-equal condition
    pub fn ge(column: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::new(column, Operator::Ge, value)
    }

    /// Creates a less-or-equal condition
    pub fn le(column: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::new(column, Operator::Le, value)
    }

    /// Creates a pattern-match condition
    pub fn like(column: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::new(column, Operator::Like, value)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.operator, self.value)
    }
}

/// A parsed SELECT statement: target table plus conditions in source order.
///
/// Read-only after construction; the optimizer never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedQuery {
    /// Table named after FROM
    pub table: String,
    /// WHERE conditions in the order they appear in the statement
    pub conditions: Vec<Condition>,
}

impl ParsedQuery {
    /// Creates a query with no conditions
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            conditions: Vec::new(),
        }
    }

    /// Appends a condition, preserving source order
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Returns true when the query has a WHERE clause
    pub fn has_conditions(&self) -> bool {
        !self.conditions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_classification() {
        assert!(Operator::Eq.is_equality());
        assert!(!Operator::Eq.is_range());

        for op in [Operator::Gt, Operator::Lt, Operator::Ge, Operator::Le] {
            assert!(op.is_range());
            assert!(!op.is_equality());
            assert!(!op.is_pattern());
        }

        assert!(Operator::Like.is_pattern());
        assert!(!Operator::Ne.is_equality());
        assert!(!Operator::Ne.is_range());
    }

    #[test]
    fn test_operator_rendering() {
        assert_eq!(Operator::Eq.as_str(), "=");
        assert_eq!(Operator::Ne.as_str(), "!=");
        assert_eq!(Operator::Ge.as_str(), ">=");
        assert_eq!(Operator::Le.as_str(), "<=");
        assert_eq!(Operator::Like.as_str(), "LIKE");
    }

    #[test]
    fn test_condition_display() {
        let cond = Condition::eq("country", "US");
        assert_eq!(format!("{}", cond), "country = 'US'");

        let cond = Condition::gt("age", 25);
        assert_eq!(format!("{}", cond), "age > 25");

        let cond = Condition::like("email", "%@example.com");
        assert_eq!(format!("{}", cond), "email LIKE '%@example.com'");
    }

    #[test]
    fn test_literal_lookup_key() {
        assert_eq!(Literal::from("US").lookup_key(), "us");
        assert_eq!(Literal::from(25).lookup_key(), "25");
        assert_eq!(Literal::from(4.5).lookup_key(), "4.5");
    }

    #[test]
    fn test_query_builder() {
        let query = ParsedQuery::new("users")
            .with_condition(Condition::gt("age", 25))
            .with_condition(Condition::eq("country", "US"));

        assert_eq!(query.table, "users");
        assert_eq!(query.conditions.len(), 2);
        assert!(query.has_conditions());
        assert!(!ParsedQuery::new("users").has_conditions());
    }
}
