use chrono::{DateTime, Utc};

use trust_core::models::Certified;

use crate::policy::DecayPolicy;

/// Effective trust: the sum of decay factors over `endorsements`.
///
/// Empty input yields 0.0. The sum does not depend on input order.
pub fn effective_score<I>(endorsements: I, now: DateTime<Utc>) -> f64
where
    I: IntoIterator,
    I::Item: Certified,
{
    effective_score_with(&DecayPolicy::default(), endorsements, now)
}

/// [`effective_score`] against the current wall-clock time, read once.
pub fn effective_score_now<I>(endorsements: I) -> f64
where
    I: IntoIterator,
    I::Item: Certified,
{
    effective_score(endorsements, Utc::now())
}

pub(crate) fn effective_score_with<I>(
    policy: &DecayPolicy,
    endorsements: I,
    now: DateTime<Utc>,
) -> f64
where
    I: IntoIterator,
    I::Item: Certified,
{
    endorsements
        .into_iter()
        .map(|e| policy.factor(e.last_updated(), now))
        .sum()
}

/// Slack absorbed before flooring, so a sum of fractional factors that
/// should land on a whole number is not pushed one point below it.
const POINTS_EPSILON: f64 = 1e-9;

/// Stored trust points: floored peer trust plus any admin grant.
///
/// Peer trust within [`POINTS_EPSILON`] below a whole number counts as that
/// number. Admin grants are not subject to decay.
pub fn trust_points(effective_peer_trust: f64, admin_grant: i64) -> i64 {
    (effective_peer_trust + POINTS_EPSILON).floor() as i64 + admin_grant
}
