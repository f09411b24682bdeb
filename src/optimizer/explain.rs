//! Explain output for an optimization run
//!
//! Produces a deterministic, human-readable account of how each condition
//! was scored and what order the optimizer chose. Rendering the same report
//! twice yields byte-identical output.

use std::fmt;

use crate::scorer::ScoredCondition;

use super::optimizer::OptimizedQuery;

/// Per-condition analysis plus the optimization result it led to
#[derive(Debug, Clone)]
pub struct ExplainReport {
    /// Scored conditions in source order
    pub analysis: Vec<ScoredCondition>,
    /// The optimization result the report describes
    pub result: OptimizedQuery,
}

impl ExplainReport {
    /// Assembles a report from its parts
    pub fn from_parts(analysis: Vec<ScoredCondition>, result: OptimizedQuery) -> Self {
        Self { analysis, result }
    }
}

impl fmt::Display for ExplainReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== QUERY OPTIMIZATION ===")?;
        writeln!(f, "Table: {}", self.result.table)?;

        if self.analysis.is_empty() {
            writeln!(f)?;
            return write!(
                f,
                "No WHERE conditions to optimize. Query will perform a full table scan."
            );
        }

        writeln!(f, "Condition analysis (source order):")?;
        for (i, scored) in self.analysis.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, scored.condition)?;
            writeln!(f, "     score: {:.3}", scored.score)?;
            writeln!(f, "     reasoning: {}", scored.reasoning)?;
        }

        writeln!(f, "Execution plan (most selective first):")?;
        for step in &self.result.execution_plan {
            writeln!(f, "  Step {}: {}", step.step_number, step.description)?;
        }

        write!(f, "Summary: {}", self.result.optimization_summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::QueryOptimizer;
    use crate::parser::SqlParser;

    fn explain(sql: &str) -> ExplainReport {
        let query = SqlParser::new().parse(sql).unwrap();
        QueryOptimizer::new().explain(&query)
    }

    #[test]
    fn test_report_sections() {
        let report = explain("SELECT * FROM users WHERE age > 25 AND country = 'US'");
        let output = format!("{}", report);

        assert!(output.contains("=== QUERY OPTIMIZATION ==="));
        assert!(output.contains("Table: users"));
        assert!(output.contains("Condition analysis"));
        assert!(output.contains("reasoning:"));
        assert!(output.contains("Execution plan"));
        assert!(output.contains("Summary:"));
    }

    #[test]
    fn test_analysis_keeps_source_order() {
        let report = explain("SELECT * FROM users WHERE age > 25 AND country = 'US'");

        // Analysis lists conditions as written, not in execution order
        assert_eq!(report.analysis[0].condition.column, "age");
        assert_eq!(report.analysis[1].condition.column, "country");
        // While the plan is sorted
        assert_eq!(report.result.optimized_conditions[0].column, "country");
    }

    #[test]
    fn test_report_without_conditions() {
        let report = explain("SELECT * FROM t");
        let output = format!("{}", report);
        assert!(output.contains("full table scan"));
        assert!(!output.contains("Execution plan"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let first = format!(
            "{}",
            explain("SELECT * FROM users WHERE age > 25 AND country = 'US'")
        );
        let second = format!(
            "{}",
            explain("SELECT * FROM users WHERE age > 25 AND country = 'US'")
        );
        assert_eq!(first, second);
    }
}
