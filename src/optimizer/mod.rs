//! Query optimization subsystem for siftql
//!
//! Reorders WHERE conditions by ascending selectivity score and synthesizes
//! an execution plan plus a summary of what changed. The sort is stable:
//! conditions with equal scores keep their source order, because no further
//! signal exists to break the tie.
//!
//! Optimization is total for well-formed input. Same query, same profile,
//! same plan.

mod explain;
mod optimizer;

pub use explain::ExplainReport;
pub use optimizer::{OptimizedQuery, PlanStep, QueryOptimizer};
