//! Parser Grammar Tests
//!
//! Acceptance and rejection matrix for the restricted SELECT grammar:
//! - Canonical round-trip into the expected structure
//! - Longest-match-first operator tokenization
//! - Quote handling for string literals
//! - Every documented failure mode

use siftql::{parse, Condition, Literal, Operator, ParseError};

// =============================================================================
// Accepted Statements
// =============================================================================

#[test]
fn test_canonical_round_trip() {
    let query = parse("SELECT * FROM t WHERE a = 1 AND b > 2").unwrap();
    assert_eq!(query.table, "t");
    assert_eq!(
        query.conditions,
        vec![Condition::eq("a", 1), Condition::gt("b", 2)]
    );
}

#[test]
fn test_no_where_clause_is_valid() {
    let query = parse("SELECT * FROM inventory").unwrap();
    assert_eq!(query.table, "inventory");
    assert!(query.conditions.is_empty());
}

#[test]
fn test_keywords_are_case_insensitive() {
    for sql in [
        "SELECT * FROM users WHERE age > 25",
        "select * from users where age > 25",
        "Select * From users Where age > 25",
    ] {
        let query = parse(sql).unwrap();
        assert_eq!(query.table, "users");
        assert_eq!(query.conditions, vec![Condition::gt("age", 25)]);
    }
}

#[test]
fn test_whitespace_tolerance() {
    let query = parse("  SELECT   *   FROM   t   WHERE  a=1  AND  b  <  2  ").unwrap();
    assert_eq!(
        query.conditions,
        vec![Condition::eq("a", 1), Condition::lt("b", 2)]
    );
}

#[test]
fn test_every_operator_spelling() {
    let cases = [
        ("=", Operator::Eq),
        ("==", Operator::Eq),
        ("!=", Operator::Ne),
        ("<>", Operator::Ne),
        (">", Operator::Gt),
        ("<", Operator::Lt),
        (">=", Operator::Ge),
        ("<=", Operator::Le),
        ("LIKE", Operator::Like),
        ("like", Operator::Like),
        ("ILIKE", Operator::Like),
    ];

    for (spelling, expected) in cases {
        let sql = format!("SELECT * FROM t WHERE a {} 1", spelling);
        let query = parse(&sql).unwrap();
        assert_eq!(query.conditions[0].operator, expected, "spelling: {}", spelling);
    }
}

/// `>=` is one token; it must never split into `>` then `=`.
#[test]
fn test_longest_match_first_tokenization() {
    let query = parse("SELECT * FROM t WHERE price>=100 AND stock<=5").unwrap();
    assert_eq!(query.conditions[0], Condition::ge("price", 100));
    assert_eq!(query.conditions[1], Condition::le("stock", 5));
}

#[test]
fn test_string_literal_quote_styles() {
    let query = parse(r#"SELECT * FROM t WHERE a = 'one' AND b = "two""#).unwrap();
    assert_eq!(query.conditions[0].value, Literal::String("one".into()));
    assert_eq!(query.conditions[1].value, Literal::String("two".into()));
}

#[test]
fn test_numeric_literal_coercion() {
    let query = parse("SELECT * FROM t WHERE a = 10 AND b = 2.5").unwrap();
    assert_eq!(query.conditions[0].value, Literal::Int(10));
    assert_eq!(query.conditions[1].value, Literal::Float(2.5));
}

/// Operator characters inside a quoted literal are data, not tokens.
#[test]
fn test_operators_inside_quotes_are_opaque() {
    let query = parse("SELECT * FROM logs WHERE line LIKE '%a<=b%'").unwrap();
    assert_eq!(query.conditions[0].operator, Operator::Like);
    assert_eq!(query.conditions[0].value, Literal::String("%a<=b%".into()));
}

// =============================================================================
// Rejected Statements
// =============================================================================

#[test]
fn test_rejects_non_star_projection() {
    assert!(matches!(
        parse("SELECT name FROM users"),
        Err(ParseError::UnsupportedStatement(_))
    ));
}

#[test]
fn test_rejects_non_select_statements() {
    assert!(parse("DELETE FROM users").is_err());
    assert!(parse("").is_err());
    assert!(parse("complete nonsense").is_err());
}

#[test]
fn test_rejects_missing_table_name() {
    assert_eq!(parse("SELECT * FROM").unwrap_err(), ParseError::MissingTable);
    assert_eq!(parse("SELECT * FROM   ").unwrap_err(), ParseError::MissingTable);
}

#[test]
fn test_rejects_clauses_other_than_where() {
    assert!(matches!(
        parse("SELECT * FROM t ORDER BY a"),
        Err(ParseError::TrailingInput(_))
    ));
}

#[test]
fn test_rejects_operatorless_condition() {
    let err = parse("SELECT * FROM t WHERE a 1").unwrap_err();
    assert_eq!(err, ParseError::MissingOperator("a 1".into()));
}

#[test]
fn test_rejects_multi_operator_condition() {
    assert!(matches!(
        parse("SELECT * FROM t WHERE a = 1 = 2"),
        Err(ParseError::AmbiguousCondition(_))
    ));
    assert!(matches!(
        parse("SELECT * FROM t WHERE a > 1 < 2"),
        Err(ParseError::AmbiguousCondition(_))
    ));
}

#[test]
fn test_rejects_incomplete_condition() {
    assert!(matches!(
        parse("SELECT * FROM t WHERE a ="),
        Err(ParseError::MalformedCondition(_))
    ));
    assert!(matches!(
        parse("SELECT * FROM t WHERE >= 5"),
        Err(ParseError::MalformedCondition(_))
    ));
}

/// A failing condition anywhere in the chain fails the whole statement.
#[test]
fn test_rejects_bad_condition_mid_chain() {
    assert!(parse("SELECT * FROM t WHERE a = 1 AND broken AND b = 2").is_err());
}

/// Errors carry the fragment that caused them.
#[test]
fn test_errors_carry_offending_fragment() {
    let err = parse("SELECT * FROM t WHERE age 25").unwrap_err();
    assert_eq!(err.fragment(), Some("age 25"));
}
