//! Grantor-side view of decay: which of my endorsements are fading, and
//! renewing them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use trust_core::models::{DecayInfo, Endorsement};

use crate::policy::DecayPolicy;
use crate::warning;

/// An endorsement past the decay start, with its current display summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayingEndorsement {
    pub endorsement: Endorsement,
    pub info: DecayInfo,
}

/// Endorsements `grantor_id` gave in `community_id` that are past the decay
/// start cutoff at `now`, in input order.
pub fn decaying_by_grantor(
    endorsements: &[Endorsement],
    community_id: &str,
    grantor_id: &str,
    now: DateTime<Utc>,
) -> Vec<DecayingEndorsement> {
    decaying_by_grantor_with(&DecayPolicy::default(), endorsements, community_id, grantor_id, now)
}

pub(crate) fn decaying_by_grantor_with(
    policy: &DecayPolicy,
    endorsements: &[Endorsement],
    community_id: &str,
    grantor_id: &str,
    now: DateTime<Utc>,
) -> Vec<DecayingEndorsement> {
    endorsements
        .iter()
        .filter(|e| e.community_id == community_id && e.from_user_id == grantor_id)
        .filter(|e| warning::is_past_decay_start(policy, e.last_updated, now))
        .map(|e| DecayingEndorsement {
            endorsement: e.clone(),
            info: policy.info(e.last_updated, now),
        })
        .collect()
}

/// Renew the endorsements `grantor_id` gave to `recipient_ids` in
/// `community_id`, setting their certification time to `now`.
///
/// Returns only the renewed endorsements. An empty recipient list renews
/// nothing.
pub fn recertify<S: AsRef<str>>(
    endorsements: &[Endorsement],
    community_id: &str,
    grantor_id: &str,
    recipient_ids: &[S],
    now: DateTime<Utc>,
) -> Vec<Endorsement> {
    if recipient_ids.is_empty() {
        return Vec::new();
    }

    endorsements
        .iter()
        .filter(|e| e.community_id == community_id && e.from_user_id == grantor_id)
        .filter(|e| recipient_ids.iter().any(|r| r.as_ref() == e.to_user_id))
        .map(|e| Endorsement {
            last_updated: now,
            ..e.clone()
        })
        .collect()
}
