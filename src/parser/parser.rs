//! SELECT statement parser
//!
//! Parsing is a thin front over three steps: match the `SELECT * FROM`
//! prefix, extract the table identifier, then split the WHERE clause on
//! whole-word `AND` and tokenize each segment into column/operator/value.
//!
//! Operator scanning is longest-match-first: `>=` must be recognized as one
//! token, never as `>` followed by a dangling `=`. Quoted literals are
//! opaque to the scanner, so `name LIKE 'a=b'` holds exactly one operator.

use std::sync::OnceLock;

use regex::Regex;

use super::ast::{Condition, Literal, Operator, ParsedQuery};
use super::errors::{ParseError, ParseResult};

/// Symbolic operator spellings, longest first.
///
/// Two-character spellings must come before their one-character prefixes.
const SYMBOLIC_OPERATORS: &[(&str, Operator)] = &[
    (">=", Operator::Ge),
    ("<=", Operator::Le),
    ("!=", Operator::Ne),
    ("<>", Operator::Ne),
    ("==", Operator::Eq),
    ("=", Operator::Eq),
    (">", Operator::Gt),
    ("<", Operator::Lt),
];

/// Word operator spellings, longest first.
const WORD_OPERATORS: &[(&str, Operator)] = &[("ILIKE", Operator::Like), ("LIKE", Operator::Like)];

fn select_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^SELECT\s+\*\s+FROM\b").expect("hard-coded pattern"))
}

fn where_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^WHERE\b").expect("hard-coded pattern"))
}

fn and_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\s+AND\s+").expect("hard-coded pattern"))
}

/// Parser for the restricted SELECT grammar
#[derive(Debug, Default)]
pub struct SqlParser;

impl SqlParser {
    /// Creates a parser
    pub fn new() -> Self {
        Self
    }

    /// Parses a statement into a [`ParsedQuery`].
    ///
    /// Keywords are case-insensitive and whitespace is tolerated anywhere
    /// between tokens. A single trailing semicolon is accepted. A missing
    /// WHERE clause is valid and yields an empty condition list.
    pub fn parse(&self, sql: &str) -> ParseResult<ParsedQuery> {
        let input = sql.trim();
        let input = input.strip_suffix(';').map(str::trim_end).unwrap_or(input);

        let prefix = select_prefix()
            .find(input)
            .ok_or_else(|| ParseError::UnsupportedStatement(input.to_string()))?;

        let rest = input[prefix.end()..].trim_start();
        let table: String = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        if table.is_empty() {
            return Err(ParseError::MissingTable);
        }

        let after_table = rest[table.len()..].trim();
        let conditions = if after_table.is_empty() {
            Vec::new()
        } else if let Some(keyword) = where_keyword().find(after_table) {
            self.parse_conditions(after_table[keyword.end()..].trim())?
        } else {
            return Err(ParseError::TrailingInput(after_table.to_string()));
        };

        Ok(ParsedQuery { table, conditions })
    }

    fn parse_conditions(&self, clause: &str) -> ParseResult<Vec<Condition>> {
        and_separator()
            .split(clause)
            .map(|segment| self.parse_condition(segment))
            .collect()
    }

    /// Parses one `<column> <operator> <literal>` segment.
    fn parse_condition(&self, segment: &str) -> ParseResult<Condition> {
        let segment = segment.trim();

        let found = scan_operators(segment);
        let (start, len, operator) = match found.as_slice() {
            [] => return Err(ParseError::MissingOperator(segment.to_string())),
            [only] => *only,
            _ => return Err(ParseError::AmbiguousCondition(segment.to_string())),
        };

        let column = segment[..start].trim();
        let value = segment[start + len..].trim();
        if !is_identifier(column) || value.is_empty() {
            return Err(ParseError::MalformedCondition(segment.to_string()));
        }

        Ok(Condition::new(column, operator, parse_literal(value)))
    }
}

/// Scans a condition segment for operator tokens, returning
/// `(byte offset, byte length, operator)` per match.
///
/// Longest spelling wins at each position, quoted regions never match, and
/// word operators require identifier boundaries on both sides.
fn scan_operators(segment: &str) -> Vec<(usize, usize, Operator)> {
    let bytes = segment.as_bytes();
    let mut found = Vec::new();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == q {
                quote = None;
            }
            i += 1;
            continue;
        }
        if b == b'\'' || b == b'"' {
            quote = Some(b);
            i += 1;
            continue;
        }
        if let Some((len, op)) = match_operator_at(bytes, i) {
            found.push((i, len, op));
            i += len;
            continue;
        }
        i += 1;
    }

    found
}

fn match_operator_at(bytes: &[u8], at: usize) -> Option<(usize, Operator)> {
    let rest = &bytes[at..];

    for (spelling, op) in SYMBOLIC_OPERATORS {
        let s = spelling.as_bytes();
        if rest.len() >= s.len() && &rest[..s.len()] == s {
            return Some((s.len(), *op));
        }
    }

    for (spelling, op) in WORD_OPERATORS {
        let s = spelling.as_bytes();
        let bounded = at.checked_sub(1).map_or(true, |p| !is_ident_byte(bytes[p]))
            && bytes.get(at + s.len()).map_or(true, |b| !is_ident_byte(*b));
        if bounded && rest.len() >= s.len() && rest[..s.len()].eq_ignore_ascii_case(s) {
            return Some((s.len(), *op));
        }
    }

    None
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Strips quotes from string literals and coerces bare numeric tokens.
///
/// A bare token that parses as neither integer nor float is kept as a
/// string literal.
fn parse_literal(raw: &str) -> Literal {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return Literal::String(raw[1..raw.len() - 1].to_string());
        }
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Literal::Int(n);
    }
    if let Ok(x) = raw.parse::<f64>() {
        return Literal::Float(x);
    }
    Literal::String(raw.to_string())
}
