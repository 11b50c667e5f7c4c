use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::defaults::DEFAULT_ROLE_THRESHOLDS;

/// Minimum trust score per community role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleThresholds(BTreeMap<String, i64>);

/// A role that flipped between two scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleChange {
    pub role: String,
    pub threshold: i64,
    /// `true` when the new score reaches the threshold and the old one did not.
    pub granted: bool,
}

impl RoleThresholds {
    /// Thresholds containing only the given roles.
    pub fn from_map(map: BTreeMap<String, i64>) -> Self {
        Self(map)
    }

    /// Copy of `self` where each role in `overrides` takes the overriding value.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, i64>) -> Self {
        for (role, threshold) in overrides {
            self.0.insert(role.clone(), *threshold);
        }
        self
    }

    pub fn get(&self, role: &str) -> Option<i64> {
        self.0.get(role).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(role, threshold)| (role.as_str(), *threshold))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Roles whose threshold `score` reaches.
    pub fn granted_roles(&self, score: i64) -> Vec<&str> {
        self.iter()
            .filter(|(_, threshold)| score >= *threshold)
            .map(|(role, _)| role)
            .collect()
    }

    /// Whether any threshold lies between `old_score` and `new_score`.
    pub fn threshold_crossed(&self, old_score: i64, new_score: i64) -> bool {
        self.iter()
            .any(|(_, threshold)| (old_score >= threshold) != (new_score >= threshold))
    }

    /// Every role gained or lost when moving from `old_score` to `new_score`.
    pub fn role_changes(&self, old_score: i64, new_score: i64) -> Vec<RoleChange> {
        self.iter()
            .filter(|(_, threshold)| (old_score >= *threshold) != (new_score >= *threshold))
            .map(|(role, threshold)| RoleChange {
                role: role.to_string(),
                threshold,
                granted: new_score >= threshold,
            })
            .collect()
    }
}

impl Default for RoleThresholds {
    fn default() -> Self {
        Self(
            DEFAULT_ROLE_THRESHOLDS
                .iter()
                .map(|(role, threshold)| (role.to_string(), *threshold))
                .collect(),
        )
    }
}
