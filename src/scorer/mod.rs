//! Selectivity scoring subsystem for siftql
//!
//! Assigns each WHERE condition a heuristic score in `[0, 1]`; lower means
//! more selective, so ascending order is execution order. Scoring is total:
//! unknown columns and values fall back to neutral defaults instead of
//! failing, because the model is heuristic, not authoritative.
//!
//! The heuristic tables live in [`ScoringProfile`]. A built-in default
//! profile ships with the crate; a JSON file can override any subset of it.

mod profile;
mod scorer;

pub use profile::{CardinalityClass, ProfileError, ProfileResult, ScoringProfile};
pub use scorer::{ScoredCondition, SelectivityScorer};
