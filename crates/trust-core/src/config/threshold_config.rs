use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::RoleThresholds;

/// Role threshold configuration.
///
/// Only the roles listed under `[thresholds.overrides]` change; every other
/// role keeps its compiled default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub overrides: BTreeMap<String, i64>,
}

impl ThresholdConfig {
    /// Compiled defaults with the configured overrides applied.
    pub fn resolved(&self) -> RoleThresholds {
        RoleThresholds::default().with_overrides(&self.overrides)
    }
}
