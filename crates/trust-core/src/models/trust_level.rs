//! Named score tiers a community defines on top of raw trust points.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named trust tier. A score reaches the tier when `score >= threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrustLevel {
    pub id: String,
    pub name: String,
    pub threshold: i64,
}

impl TrustLevel {
    pub fn new(id: impl Into<String>, name: impl Into<String>, threshold: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            threshold,
        }
    }
}

/// Highest level reached by `score`.
///
/// `levels` must be sorted by threshold ascending; scanning stops at the
/// first level above the score.
pub fn level_for_score(score: i64, levels: &[TrustLevel]) -> Option<&TrustLevel> {
    levels
        .iter()
        .take_while(|level| score >= level.threshold)
        .last()
}

/// Name of the highest level reached by `score`.
pub fn level_name(score: i64, levels: &[TrustLevel]) -> Option<&str> {
    level_for_score(score, levels).map(|level| level.name.as_str())
}

/// `"15 (Stable)"`, or just `"15"` when no level matches.
pub fn format_score(score: i64, levels: &[TrustLevel]) -> String {
    match level_name(score, levels) {
        Some(name) => format!("{score} ({name})"),
        None => score.to_string(),
    }
}

/// A minimum trust requirement, expressed either by level name or as a raw number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum TrustRequirement {
    Level(String),
    Number(i64),
}

impl TrustRequirement {
    /// Numeric threshold for this requirement. `None` when the named level
    /// does not exist.
    pub fn resolve(&self, levels: &[TrustLevel]) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Level(name) => levels
                .iter()
                .find(|level| &level.name == name)
                .map(|level| level.threshold),
        }
    }
}
