//! Scoring Profile Tests
//!
//! Loading heuristic tables from a JSON file:
//! - Partial override files keep built-in defaults for absent fields
//! - Invalid profiles are rejected at load time
//! - A loaded profile changes the optimizer's ordering end-to-end

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use siftql::{parse, QueryOptimizer, ScoringProfile, SelectivityScorer};

// =============================================================================
// Helper Functions
// =============================================================================

fn write_profile(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("profile.json");
    fs::write(&path, contents).unwrap();
    path
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_empty_profile_file_equals_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = write_profile(&tmp, "{}");

    let loaded = ScoringProfile::load(&path).unwrap();
    let defaults = ScoringProfile::default();

    assert_eq!(loaded.equality_score, defaults.equality_score);
    assert_eq!(loaded.pattern_score, defaults.pattern_score);
    assert_eq!(loaded.common_values, defaults.common_values);
}

#[test]
fn test_partial_override_keeps_other_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = write_profile(
        &tmp,
        r#"{"high_cardinality_columns": ["sku", "serial_number"]}"#,
    );

    let loaded = ScoringProfile::load(&path).unwrap();
    assert!(loaded.high_cardinality_columns.contains("sku"));
    assert!(!loaded.high_cardinality_columns.contains("email"));
    // Untouched fields keep their defaults
    assert!(loaded.medium_cardinality_columns.contains("country"));
    assert_eq!(loaded.range_score, ScoringProfile::default().range_score);
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(ScoringProfile::load(std::path::Path::new("/no/such/profile.json")).is_err());
}

#[test]
fn test_malformed_json_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = write_profile(&tmp, "{not json");
    assert!(ScoringProfile::load(&path).is_err());
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_out_of_range_weight_rejected_at_load() {
    let tmp = TempDir::new().unwrap();
    let path = write_profile(&tmp, r#"{"equality_score": 2.0}"#);
    assert!(ScoringProfile::load(&path).is_err());
}

#[test]
fn test_overlapping_cardinality_classes_rejected_at_load() {
    let tmp = TempDir::new().unwrap();
    let path = write_profile(
        &tmp,
        r#"{"high_cardinality_columns": ["country"]}"#,
    );
    // 'country' is also in the default medium set
    assert!(ScoringProfile::load(&path).is_err());
}

// =============================================================================
// End-to-End Effect
// =============================================================================

/// Promoting a column to high cardinality moves its condition forward.
#[test]
fn test_loaded_profile_changes_ordering() {
    let query = parse("SELECT * FROM parts WHERE sku = 'X-100' AND category = 'bolts'").unwrap();

    // Default profile: sku is unknown (+0.3), category is medium (+0.2),
    // so the category condition runs first.
    let default_result = QueryOptimizer::new().optimize(&query);
    assert_eq!(default_result.optimized_conditions[0].column, "category");

    // Profile that knows sku is nearly unique flips the order.
    let tmp = TempDir::new().unwrap();
    let path = write_profile(&tmp, r#"{"high_cardinality_columns": ["sku"]}"#);
    let profile = ScoringProfile::load(&path).unwrap();
    let optimizer = QueryOptimizer::with_scorer(SelectivityScorer::with_profile(profile));

    let tuned_result = optimizer.optimize(&query);
    assert_eq!(tuned_result.optimized_conditions[0].column, "sku");
}
