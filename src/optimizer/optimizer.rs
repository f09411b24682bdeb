//! Selectivity-based condition reordering and plan synthesis

use std::fmt;

use serde::Serialize;

use crate::parser::{Condition, ParsedQuery};
use crate::scorer::{ScoredCondition, SelectivityScorer};

use super::explain::ExplainReport;

/// One step of the execution plan
#[derive(Debug, Clone, Serialize)]
pub struct PlanStep {
    /// 1-based position in execution order
    pub step_number: usize,
    /// Rendered description of the filter application
    pub description: String,
    /// The condition this step applies
    pub condition: Condition,
}

/// Result of optimizing a parsed query. Immutable once built.
///
/// `optimized_conditions` is always a permutation of `original_conditions`,
/// and the plan has exactly one step per optimized condition.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizedQuery {
    /// Table the query targets
    pub table: String,
    /// Conditions in source order
    pub original_conditions: Vec<Condition>,
    /// Conditions in execution order (ascending score)
    pub optimized_conditions: Vec<Condition>,
    /// One filter step per optimized condition, in execution order
    pub execution_plan: Vec<PlanStep>,
    /// What the reordering changed
    pub optimization_summary: String,
}

impl OptimizedQuery {
    /// Number of conditions that moved relative to source order
    pub fn reordered_count(&self) -> usize {
        self.original_conditions
            .iter()
            .zip(&self.optimized_conditions)
            .filter(|(original, optimized)| original != optimized)
            .count()
    }
}

impl fmt::Display for OptimizedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Table: {}", self.table)?;

        if self.optimized_conditions.is_empty() {
            writeln!(f, "Conditions: none")?;
        } else {
            writeln!(f, "Optimized conditions:")?;
            for (i, condition) in self.optimized_conditions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, condition)?;
            }
            writeln!(f, "Execution plan:")?;
            for step in &self.execution_plan {
                writeln!(f, "  Step {}: {}", step.step_number, step.description)?;
            }
        }

        write!(f, "Summary: {}", self.optimization_summary)
    }
}

/// Rule-based query optimizer.
///
/// Holds a [`SelectivityScorer`] and nothing else; every optimize call is a
/// pure function of the input query and the scorer's profile.
#[derive(Debug, Default)]
pub struct QueryOptimizer {
    scorer: SelectivityScorer,
}

impl QueryOptimizer {
    /// Creates an optimizer with the built-in default profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an optimizer backed by a custom scorer
    pub fn with_scorer(scorer: SelectivityScorer) -> Self {
        Self { scorer }
    }

    /// The scorer this optimizer consults
    pub fn scorer(&self) -> &SelectivityScorer {
        &self.scorer
    }

    /// Optimizes a parsed query. Always succeeds; an empty condition list
    /// yields an empty plan.
    pub fn optimize(&self, query: &ParsedQuery) -> OptimizedQuery {
        let sorted = self.score_and_sort(&query.conditions);

        let optimized_conditions: Vec<Condition> =
            sorted.iter().map(|sc| sc.condition.clone()).collect();
        let execution_plan = build_plan(&sorted);
        let optimization_summary = build_summary(&query.conditions, &sorted);

        OptimizedQuery {
            table: query.table.clone(),
            original_conditions: query.conditions.clone(),
            optimized_conditions,
            execution_plan,
            optimization_summary,
        }
    }

    /// Optimizes a query and pairs the result with the per-condition
    /// analysis that produced it.
    pub fn explain(&self, query: &ParsedQuery) -> ExplainReport {
        let analysis: Vec<ScoredCondition> = query
            .conditions
            .iter()
            .map(|c| self.scorer.score_condition(c))
            .collect();
        ExplainReport::from_parts(analysis, self.optimize(query))
    }

    /// Scores every condition and stable-sorts ascending by score.
    ///
    /// `sort_by` is stable, so equal scores keep source order.
    fn score_and_sort(&self, conditions: &[Condition]) -> Vec<ScoredCondition> {
        let mut scored: Vec<ScoredCondition> = conditions
            .iter()
            .map(|c| self.scorer.score_condition(c))
            .collect();
        scored.sort_by(|a, b| a.score.total_cmp(&b.score));
        scored
    }
}

fn build_plan(sorted: &[ScoredCondition]) -> Vec<PlanStep> {
    sorted
        .iter()
        .enumerate()
        .map(|(i, sc)| PlanStep {
            step_number: i + 1,
            description: format!(
                "Apply filter: {} (selectivity: {:.3})",
                sc.condition, sc.score
            ),
            condition: sc.condition.clone(),
        })
        .collect()
}

fn build_summary(original: &[Condition], sorted: &[ScoredCondition]) -> String {
    let Some((first, rest)) = sorted.split_first() else {
        return "No WHERE conditions - full table scan".to_string();
    };
    let last = rest.last().unwrap_or(first);

    let moved = original
        .iter()
        .zip(sorted)
        .filter(|(o, s)| **o != s.condition)
        .count();

    if moved == 0 {
        format!(
            "Conditions already in optimal order; most selective: {}, least selective: {}",
            first.condition, last.condition
        )
    } else {
        format!(
            "Reordered {} of {} conditions; most selective: {}, least selective: {}",
            moved,
            sorted.len(),
            first.condition,
            last.condition
        )
    }
}
