use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use trust_core::config::DecayConfig;
use trust_core::errors::TrustResult;
use trust_core::models::{Certified, DecayInfo, Endorsement};
use trust_core::traits::IDecayCalculator;
use trust_observability::decay_span;

use crate::certification::{self, DecayingEndorsement};
use crate::months;
use crate::policy::DecayPolicy;
use crate::score;

/// Decay engine applying a [`DecayPolicy`] to endorsements.
///
/// The free functions in [`crate::formula`] and [`crate::score`] are this
/// engine with the default policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecayEngine {
    policy: DecayPolicy,
}

/// Per-endorsement result of [`DecayEngine::process_batch`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndorsementDecay {
    pub endorsement_id: String,
    pub months_elapsed: u32,
    pub factor: f64,
    pub info: DecayInfo,
}

impl DecayEngine {
    /// Create an engine with the default 6/12-month policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DecayPolicy) -> Self {
        Self { policy }
    }

    /// Create from config, rejecting inverted breakpoints.
    pub fn from_config(config: &DecayConfig) -> TrustResult<Self> {
        Ok(Self::with_policy(DecayPolicy::from_config(config)?))
    }

    pub fn policy(&self) -> &DecayPolicy {
        &self.policy
    }

    /// Effective trust over any collection of certified items.
    pub fn effective_score_of<I>(&self, endorsements: I, now: DateTime<Utc>) -> f64
    where
        I: IntoIterator,
        I::Item: Certified,
    {
        score::effective_score_with(&self.policy, endorsements, now)
    }

    /// The grantor's endorsements in a community that are past this
    /// policy's decay start.
    pub fn decaying_by_grantor(
        &self,
        endorsements: &[Endorsement],
        community_id: &str,
        grantor_id: &str,
        now: DateTime<Utc>,
    ) -> Vec<DecayingEndorsement> {
        certification::decaying_by_grantor_with(
            &self.policy,
            endorsements,
            community_id,
            grantor_id,
            now,
        )
    }

    /// Compute months, factor, and display info for each endorsement.
    pub fn process_batch(
        &self,
        endorsements: &[Endorsement],
        now: DateTime<Utc>,
    ) -> Vec<EndorsementDecay> {
        let span = decay_span!(endorsements.len());
        let _guard = span.enter();

        let results: Vec<EndorsementDecay> = endorsements
            .iter()
            .map(|e| {
                let months = months::months_elapsed(now, e.last_updated);
                EndorsementDecay {
                    endorsement_id: e.id.clone(),
                    months_elapsed: months,
                    factor: self.policy.factor_for_months(months),
                    info: self.policy.info_for_months(months),
                }
            })
            .collect();

        debug!(
            decaying = results.iter().filter(|r| r.info.is_decaying).count(),
            expired = results.iter().filter(|r| r.info.is_expired).count(),
            "decay batch processed"
        );
        results
    }
}

impl IDecayCalculator for DecayEngine {
    fn months_elapsed(&self, reference: DateTime<Utc>, past: DateTime<Utc>) -> u32 {
        months::months_elapsed(reference, past)
    }

    fn decay_factor(&self, last_updated: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        self.policy.factor(last_updated, now)
    }

    fn decay_info(&self, last_updated: DateTime<Utc>, now: DateTime<Utc>) -> DecayInfo {
        self.policy.info(last_updated, now)
    }

    fn effective_score(&self, endorsements: &[Endorsement], now: DateTime<Utc>) -> f64 {
        self.effective_score_of(endorsements, now)
    }
}
