use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use trust_core::config::DecayConfig;
use trust_core::constants::{DECAY_EXPIRY_MONTHS, DECAY_START_MONTHS};
use trust_core::errors::{TrustError, TrustResult};
use trust_core::models::DecayInfo;

use crate::months::months_elapsed;

/// Breakpoints of the piecewise-linear decay curve.
///
/// ```text
/// factor(m) = 1.0                                  m <= start
///           = 1.0 - (m - start) / (expiry - start)  start < m < expiry
///           = 0.0                                  m >= expiry
/// ```
///
/// `m` is whole calendar months since the last certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecayPolicy {
    start_months: u32,
    expiry_months: u32,
}

impl DecayPolicy {
    /// Create a policy. `start_months` must be below `expiry_months`.
    pub fn new(start_months: u32, expiry_months: u32) -> TrustResult<Self> {
        if start_months >= expiry_months {
            return Err(TrustError::InvalidPolicy {
                start: start_months,
                expiry: expiry_months,
            });
        }
        Ok(Self {
            start_months,
            expiry_months,
        })
    }

    pub fn from_config(config: &DecayConfig) -> TrustResult<Self> {
        Self::new(config.start_months, config.expiry_months)
    }

    pub fn start_months(&self) -> u32 {
        self.start_months
    }

    pub fn expiry_months(&self) -> u32 {
        self.expiry_months
    }

    /// Remaining weight after `months` whole months.
    pub fn factor_for_months(&self, months: u32) -> f64 {
        if months <= self.start_months {
            return 1.0;
        }
        if months >= self.expiry_months {
            return 0.0;
        }
        let span = f64::from(self.expiry_months - self.start_months);
        1.0 - f64::from(months - self.start_months) / span
    }

    /// Display summary after `months` whole months.
    pub fn info_for_months(&self, months: u32) -> DecayInfo {
        let factor = self.factor_for_months(months);
        // factor is in [0, 1], so the rounded percentage fits in 0..=100.
        let decay_percent = ((1.0 - factor) * 100.0).round() as u8;

        DecayInfo {
            decay_percent,
            months_until_expiry: self.expiry_months.saturating_sub(months),
            is_decaying: months > self.start_months && months < self.expiry_months,
            is_expired: months >= self.expiry_months,
        }
    }

    pub fn factor(&self, last_updated: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        self.factor_for_months(months_elapsed(now, last_updated))
    }

    pub fn info(&self, last_updated: DateTime<Utc>, now: DateTime<Utc>) -> DecayInfo {
        self.info_for_months(months_elapsed(now, last_updated))
    }
}

impl Default for DecayPolicy {
    fn default() -> Self {
        Self {
            start_months: DECAY_START_MONTHS,
            expiry_months: DECAY_EXPIRY_MONTHS,
        }
    }
}
