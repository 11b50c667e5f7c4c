use chrono::{DateTime, Utc};

use crate::models::{Certified, DecayInfo, Endorsement};

/// Time decay of endorsement trust.
///
/// Implementations are stateless with respect to the endorsements they
/// read; `now` is always supplied by the caller.
pub trait IDecayCalculator: Send + Sync {
    /// Whole calendar months between `past` and `reference`, never negative.
    fn months_elapsed(&self, reference: DateTime<Utc>, past: DateTime<Utc>) -> u32;

    /// Remaining weight of an endorsement certified at `last_updated`.
    /// Returns a value in [0.0, 1.0].
    fn decay_factor(&self, last_updated: DateTime<Utc>, now: DateTime<Utc>) -> f64;

    /// Display summary derived from `months_elapsed` and `decay_factor`.
    fn decay_info(&self, last_updated: DateTime<Utc>, now: DateTime<Utc>) -> DecayInfo;

    /// Sum of decay factors across `endorsements`.
    fn effective_score(&self, endorsements: &[Endorsement], now: DateTime<Utc>) -> f64 {
        endorsements
            .iter()
            .map(|e| self.decay_factor(e.last_updated(), now))
            .sum()
    }
}
