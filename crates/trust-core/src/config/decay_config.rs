use serde::{Deserialize, Serialize};

use super::defaults;

/// Decay subsystem configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Whole months an endorsement keeps full weight.
    pub start_months: u32,
    /// Whole months after which an endorsement carries no weight.
    pub expiry_months: u32,
    /// Width of the window (days) in which a grantor is warned that an
    /// endorsement has started to decay.
    pub warning_window_days: u32,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            start_months: defaults::DEFAULT_DECAY_START_MONTHS,
            expiry_months: defaults::DEFAULT_DECAY_EXPIRY_MONTHS,
            warning_window_days: defaults::DEFAULT_WARNING_WINDOW_DAYS,
        }
    }
}
