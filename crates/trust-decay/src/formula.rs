//! Decay factor and display summary for a single endorsement, using the
//! default 6/12-month policy.

use chrono::{DateTime, Utc};

use trust_core::models::DecayInfo;

use crate::policy::DecayPolicy;

/// Remaining weight of an endorsement certified at `last_updated`.
///
/// 1.0 up to six whole months, 0.0 from twelve, linear in between.
pub fn decay_factor(last_updated: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    DecayPolicy::default().factor(last_updated, now)
}

/// [`decay_factor`] against the current wall-clock time.
pub fn decay_factor_now(last_updated: DateTime<Utc>) -> f64 {
    decay_factor(last_updated, Utc::now())
}

/// Display summary consistent with [`decay_factor`] and [`months_elapsed`](crate::months_elapsed).
pub fn decay_info(last_updated: DateTime<Utc>, now: DateTime<Utc>) -> DecayInfo {
    DecayPolicy::default().info(last_updated, now)
}

/// [`decay_info`] against the current wall-clock time.
pub fn decay_info_now(last_updated: DateTime<Utc>) -> DecayInfo {
    decay_info(last_updated, Utc::now())
}
