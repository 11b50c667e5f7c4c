//! Detection of endorsements that have just started to decay.

use chrono::{DateTime, Months, TimeDelta, Utc};

use crate::policy::DecayPolicy;

/// The instant `policy.start_months()` calendar months before `now`.
///
/// Month subtraction clamps to the end of shorter months
/// (Aug 31 minus six months is Feb 28/29). `None` only when the result is
/// outside the representable range.
pub fn decay_start_cutoff(policy: &DecayPolicy, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    now.checked_sub_months(Months::new(policy.start_months()))
}

/// Whether an endorsement was last certified before the decay start cutoff.
pub fn is_past_decay_start(
    policy: &DecayPolicy,
    last_updated: DateTime<Utc>,
    now: DateTime<Utc>,
) -> bool {
    decay_start_cutoff(policy, now).is_some_and(|cutoff| last_updated < cutoff)
}

/// Whether the grantor should be warned about this endorsement now.
///
/// True for endorsements certified within `window_days` before the decay
/// start cutoff. A sweep run once per window therefore warns about each
/// endorsement exactly once. A window reaching past the earliest
/// representable instant starts there.
pub fn needs_decay_warning(
    policy: &DecayPolicy,
    last_updated: DateTime<Utc>,
    now: DateTime<Utc>,
    window_days: u32,
) -> bool {
    let Some(cutoff) = decay_start_cutoff(policy, now) else {
        return false;
    };
    let window_start = TimeDelta::try_days(i64::from(window_days))
        .and_then(|window| cutoff.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    last_updated >= window_start && last_updated < cutoff
}
