//! CLI command implementations
//!
//! Every command follows the same shape: build the optimizer (with the
//! default or a loaded scoring profile), obtain a query, run the pipeline,
//! render. One-shot commands surface parse failures as process errors;
//! `demo` and `repl` print them and keep going.

use std::path::Path;

use crate::observability::Logger;
use crate::optimizer::QueryOptimizer;
use crate::parser::{ParseError, ParsedQuery, SqlParser};
use crate::scorer::{ScoringProfile, SelectivityScorer};

use super::args::{Cli, Command};
use super::errors::CliResult;
use super::io::{read_queries, read_query, write_json, write_prompt, write_text};

/// Example queries run by `siftql demo`
const DEMO_QUERIES: &[&str] = &[
    "SELECT * FROM users WHERE age > 25 AND country = 'US'",
    "SELECT * FROM products WHERE category = 'electronics' AND price < 1000 AND rating > 4",
    "SELECT * FROM employees WHERE department = 'IT' AND salary > 50000 AND status = 'active'",
    "SELECT * FROM orders WHERE country = 'US' AND age > 18 AND status = 'completed'",
    "SELECT * FROM customers WHERE gender = 'M' AND country = 'Canada' AND age > 30",
];

/// Parse command line arguments and dispatch
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

/// Dispatch a parsed command
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Optimize { sql, profile, json } => {
            optimize(sql.as_deref(), profile.as_deref(), json)
        }
        Command::Explain { sql, profile } => explain(sql.as_deref(), profile.as_deref()),
        Command::Demo { profile } => demo(profile.as_deref()),
        Command::Repl { profile } => repl(profile.as_deref()),
    }
}

/// Parse and optimize one query, rendering text or JSON
pub fn optimize(sql: Option<&str>, profile: Option<&Path>, json: bool) -> CliResult<()> {
    let optimizer = build_optimizer(profile)?;
    let sql = input_query(sql)?;
    let query = parse_logged(&sql)?;

    let result = optimizer.optimize(&query);
    Logger::info(
        "QUERY_OPTIMIZED",
        &[
            ("table", &result.table),
            ("reordered", &result.reordered_count().to_string()),
        ],
    );

    if json {
        write_json(&result)
    } else {
        write_text(&result.to_string())
    }
}

/// Print the per-condition score breakdown for one query
pub fn explain(sql: Option<&str>, profile: Option<&Path>) -> CliResult<()> {
    let optimizer = build_optimizer(profile)?;
    let sql = input_query(sql)?;
    let query = parse_logged(&sql)?;

    write_text(&optimizer.explain(&query).to_string())
}

/// Optimize the built-in example queries, continuing past failures
pub fn demo(profile: Option<&Path>) -> CliResult<()> {
    let optimizer = build_optimizer(profile)?;
    let parser = SqlParser::new();

    for (i, sql) in DEMO_QUERIES.iter().enumerate() {
        write_text(&format!("EXAMPLE {}", i + 1))?;
        write_text(&format!("Query: {}", sql))?;
        match parser.parse(sql) {
            Ok(query) => write_text(&format!("{}\n", optimizer.explain(&query)))?,
            Err(err) => write_text(&format!("Error: {}\n", err))?,
        }
    }

    Ok(())
}

/// Read queries line by line and optimize each; `quit`/`exit` ends the loop
pub fn repl(profile: Option<&Path>) -> CliResult<()> {
    let optimizer = build_optimizer(profile)?;
    let parser = SqlParser::new();

    write_text("Enter queries to optimize ('quit' to exit)")?;
    write_prompt("siftql> ")?;

    for line in read_queries() {
        let line = line?;
        let sql = line.trim();
        if sql.is_empty() {
            write_prompt("siftql> ")?;
            continue;
        }

        let lowered = sql.to_lowercase();
        if matches!(lowered.as_str(), "quit" | "exit" | "q") {
            break;
        }

        match parser.parse(sql) {
            Ok(query) => write_text(&optimizer.optimize(&query).to_string())?,
            Err(err) => {
                Logger::error(
                    "PARSE_REJECTED",
                    &[("code", err.code()), ("reason", &err.to_string())],
                );
                write_text(&format!("Error: {}", err))?;
            }
        }
        write_prompt("siftql> ")?;
    }

    Ok(())
}

fn build_optimizer(profile: Option<&Path>) -> CliResult<QueryOptimizer> {
    let scorer = match profile {
        Some(path) => {
            let loaded = ScoringProfile::load(path)?;
            Logger::info(
                "PROFILE_LOADED",
                &[("path", &path.display().to_string())],
            );
            SelectivityScorer::with_profile(loaded)
        }
        None => SelectivityScorer::new(),
    };
    Ok(QueryOptimizer::with_scorer(scorer))
}

fn input_query(sql: Option<&str>) -> CliResult<String> {
    match sql {
        Some(sql) => Ok(sql.to_string()),
        None => read_query(),
    }
}

fn parse_logged(sql: &str) -> Result<ParsedQuery, ParseError> {
    match SqlParser::new().parse(sql) {
        Ok(query) => {
            Logger::info(
                "QUERY_PARSED",
                &[
                    ("table", &query.table),
                    ("conditions", &query.conditions.len().to_string()),
                ],
            );
            Ok(query)
        }
        Err(err) => {
            Logger::error(
                "PARSE_REJECTED",
                &[("code", err.code()), ("reason", &err.to_string())],
            );
            Err(err)
        }
    }
}
