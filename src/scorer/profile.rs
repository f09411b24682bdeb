//! Scoring profile: the heuristic tables behind selectivity scoring
//!
//! Every weight and lookup set used by the scorer lives here. The built-in
//! defaults encode generic domain knowledge (an `email` column is almost
//! unique, a `gender` column is not, `'US'` is a frequent value). A profile
//! loaded from JSON may override any subset of fields; unspecified fields
//! keep their defaults, and the result is validated after deserialization.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for profile operations
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors produced while loading a scoring profile
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Profile file could not be read
    #[error("failed to read profile '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Profile file is not valid JSON for this schema
    #[error("invalid profile JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Profile contents violate a validation rule
    #[error("invalid profile: {0}")]
    Invalid(String),
}

/// Cardinality class assigned to a column name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardinalityClass {
    /// Nearly unique values (id, email)
    High,
    /// Dozens to hundreds of distinct values (country, category)
    Medium,
    /// A handful of distinct values (gender, status)
    Low,
    /// Densely repeated numeric-range values (age, salary)
    VeryLow,
    /// Column not present in any table
    Unknown,
}

impl CardinalityClass {
    /// Human-readable class name for reasoning output
    pub fn as_str(&self) -> &'static str {
        match self {
            CardinalityClass::High => "high",
            CardinalityClass::Medium => "medium",
            CardinalityClass::Low => "low",
            CardinalityClass::VeryLow => "very low",
            CardinalityClass::Unknown => "unknown",
        }
    }
}

/// Heuristic weights and lookup tables used by the scorer.
///
/// All weights are additive contributions in `[0, 1]`; the final score is
/// clamped to that interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringProfile {
    /// Base score for equality conditions
    #[serde(default = "default_equality_score")]
    pub equality_score: f64,

    /// Base score for range conditions (`>`, `<`, `>=`, `<=`)
    #[serde(default = "default_range_score")]
    pub range_score: f64,

    /// Base score for inequality conditions (`!=`)
    #[serde(default = "default_inequality_score")]
    pub inequality_score: f64,

    /// Base score for pattern-match conditions (`LIKE`)
    #[serde(default = "default_pattern_score")]
    pub pattern_score: f64,

    /// Modifier for high-cardinality columns
    #[serde(default = "default_high_cardinality_modifier")]
    pub high_cardinality_modifier: f64,

    /// Modifier for medium-cardinality columns
    #[serde(default = "default_medium_cardinality_modifier")]
    pub medium_cardinality_modifier: f64,

    /// Modifier for low-cardinality columns
    #[serde(default = "default_low_cardinality_modifier")]
    pub low_cardinality_modifier: f64,

    /// Modifier for very-low-cardinality columns
    #[serde(default = "default_very_low_cardinality_modifier")]
    pub very_low_cardinality_modifier: f64,

    /// Modifier for columns absent from every set (treated as medium-unknown)
    #[serde(default = "default_unknown_cardinality_modifier")]
    pub unknown_cardinality_modifier: f64,

    /// Columns with nearly unique values
    #[serde(default = "default_high_cardinality_columns")]
    pub high_cardinality_columns: HashSet<String>,

    /// Columns with dozens to hundreds of distinct values
    #[serde(default = "default_medium_cardinality_columns")]
    pub medium_cardinality_columns: HashSet<String>,

    /// Columns with a handful of distinct values
    #[serde(default = "default_low_cardinality_columns")]
    pub low_cardinality_columns: HashSet<String>,

    /// Columns whose values repeat densely
    #[serde(default = "default_very_low_cardinality_columns")]
    pub very_low_cardinality_columns: HashSet<String>,

    /// Values frequent enough that equality on them filters little
    #[serde(default = "default_common_values")]
    pub common_values: HashSet<String>,

    /// Added to equality conditions whose value is common
    #[serde(default = "default_common_value_penalty")]
    pub common_value_penalty: f64,

    /// Subtracted from equality conditions whose value is not common
    #[serde(default = "default_uncommon_value_bonus")]
    pub uncommon_value_bonus: f64,
}

fn default_equality_score() -> f64 {
    0.1
}
fn default_range_score() -> f64 {
    0.3
}
fn default_inequality_score() -> f64 {
    0.5
}
fn default_pattern_score() -> f64 {
    0.7
}
fn default_high_cardinality_modifier() -> f64 {
    0.1
}
fn default_medium_cardinality_modifier() -> f64 {
    0.2
}
fn default_low_cardinality_modifier() -> f64 {
    0.4
}
fn default_very_low_cardinality_modifier() -> f64 {
    0.6
}
fn default_unknown_cardinality_modifier() -> f64 {
    0.3
}
fn default_common_value_penalty() -> f64 {
    0.15
}
fn default_uncommon_value_bonus() -> f64 {
    0.05
}

fn string_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_high_cardinality_columns() -> HashSet<String> {
    string_set(&["id", "email", "username", "ssn", "phone"])
}

fn default_medium_cardinality_columns() -> HashSet<String> {
    string_set(&["country", "state", "city", "department", "category"])
}

fn default_low_cardinality_columns() -> HashSet<String> {
    string_set(&["gender", "status", "type", "level"])
}

fn default_very_low_cardinality_columns() -> HashSet<String> {
    string_set(&["age", "salary", "score", "rating"])
}

fn default_common_values() -> HashSet<String> {
    string_set(&[
        "us",
        "usa",
        "united states",
        "active",
        "enabled",
        "true",
        "1",
        "18",
        "21",
        "25",
        "30",
        "35",
        "40",
        "50",
    ])
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self {
            equality_score: default_equality_score(),
            range_score: default_range_score(),
            inequality_score: default_inequality_score(),
            pattern_score: default_pattern_score(),
            high_cardinality_modifier: default_high_cardinality_modifier(),
            medium_cardinality_modifier: default_medium_cardinality_modifier(),
            low_cardinality_modifier: default_low_cardinality_modifier(),
            very_low_cardinality_modifier: default_very_low_cardinality_modifier(),
            unknown_cardinality_modifier: default_unknown_cardinality_modifier(),
            high_cardinality_columns: default_high_cardinality_columns(),
            medium_cardinality_columns: default_medium_cardinality_columns(),
            low_cardinality_columns: default_low_cardinality_columns(),
            very_low_cardinality_columns: default_very_low_cardinality_columns(),
            common_values: default_common_values(),
            common_value_penalty: default_common_value_penalty(),
            uncommon_value_bonus: default_uncommon_value_bonus(),
        }
    }
}

impl ScoringProfile {
    /// Loads a profile from a JSON file and validates it.
    ///
    /// Fields absent from the file keep their built-in defaults.
    pub fn load(path: &Path) -> ProfileResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let profile: ScoringProfile = serde_json::from_str(&content)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Validates weight ranges and set disjointness.
    pub fn validate(&self) -> ProfileResult<()> {
        let weights = [
            ("equality_score", self.equality_score),
            ("range_score", self.range_score),
            ("inequality_score", self.inequality_score),
            ("pattern_score", self.pattern_score),
            ("high_cardinality_modifier", self.high_cardinality_modifier),
            ("medium_cardinality_modifier", self.medium_cardinality_modifier),
            ("low_cardinality_modifier", self.low_cardinality_modifier),
            (
                "very_low_cardinality_modifier",
                self.very_low_cardinality_modifier,
            ),
            (
                "unknown_cardinality_modifier",
                self.unknown_cardinality_modifier,
            ),
            ("common_value_penalty", self.common_value_penalty),
            ("uncommon_value_bonus", self.uncommon_value_bonus),
        ];
        for (name, value) in weights {
            if !(0.0..=1.0).contains(&value) {
                return Err(ProfileError::Invalid(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        let classes = [
            &self.high_cardinality_columns,
            &self.medium_cardinality_columns,
            &self.low_cardinality_columns,
            &self.very_low_cardinality_columns,
        ];
        let mut seen: HashSet<&str> = HashSet::new();
        for set in classes {
            for column in set {
                if !seen.insert(column.as_str()) {
                    return Err(ProfileError::Invalid(format!(
                        "column '{}' appears in more than one cardinality class",
                        column
                    )));
                }
            }
        }

        Ok(())
    }

    /// Classifies a column name, case-insensitively.
    pub fn classify_column(&self, column: &str) -> CardinalityClass {
        let key = column.to_lowercase();
        if self.high_cardinality_columns.contains(&key) {
            CardinalityClass::High
        } else if self.medium_cardinality_columns.contains(&key) {
            CardinalityClass::Medium
        } else if self.low_cardinality_columns.contains(&key) {
            CardinalityClass::Low
        } else if self.very_low_cardinality_columns.contains(&key) {
            CardinalityClass::VeryLow
        } else {
            CardinalityClass::Unknown
        }
    }

    /// Modifier contribution for a cardinality class
    pub fn cardinality_modifier(&self, class: CardinalityClass) -> f64 {
        match class {
            CardinalityClass::High => self.high_cardinality_modifier,
            CardinalityClass::Medium => self.medium_cardinality_modifier,
            CardinalityClass::Low => self.low_cardinality_modifier,
            CardinalityClass::VeryLow => self.very_low_cardinality_modifier,
            CardinalityClass::Unknown => self.unknown_cardinality_modifier,
        }
    }

    /// Whether a lowercased, stringified value counts as common
    pub fn is_common_value(&self, key: &str) -> bool {
        self.common_values.contains(key)
    }
}
