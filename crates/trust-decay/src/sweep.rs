//! Periodic decay sweep.
//!
//! Given a snapshot of endorsements, stored points and admin grants, the
//! sweep decides which grantors to warn, which subjects to recalculate, and
//! which subjects need their community roles re-synced. It performs no I/O;
//! callers persist the report.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use trust_core::config::TrustConfig;
use trust_core::errors::TrustResult;
use trust_core::models::{Endorsement, RoleChange, RoleThresholds, SubjectKey};
use trust_observability::sweep_span;

use crate::engine::DecayEngine;
use crate::score::trust_points;
use crate::warning;

/// Snapshot the sweep runs over.
#[derive(Debug, Clone, Default)]
pub struct SweepInput {
    pub endorsements: Vec<Endorsement>,
    /// Admin grants per subject. Missing means 0.
    pub admin_grants: HashMap<SubjectKey, i64>,
    /// Currently stored points per subject. Missing means 0.
    pub current_points: HashMap<SubjectKey, i64>,
    /// Per-community role threshold overrides, keyed by community id.
    pub community_thresholds: HashMap<String, BTreeMap<String, i64>>,
}

/// A grantor to notify that their endorsement has started to decay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayWarning {
    pub endorsement_id: String,
    pub community_id: String,
    pub grantor_id: String,
    pub recipient_id: String,
    pub last_updated: DateTime<Utc>,
}

/// Points recalculated for a subject whose value changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsChange {
    pub subject: SubjectKey,
    pub old_points: i64,
    pub new_points: i64,
    pub effective_peer_trust: f64,
}

/// Roles to re-sync for a subject whose points crossed a threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSync {
    pub subject: SubjectKey,
    pub old_points: i64,
    pub new_points: i64,
    pub changes: Vec<RoleChange>,
    /// Every role the subject holds at `new_points`.
    pub granted_roles: Vec<String>,
}

/// Outcome of one sweep.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepReport {
    pub warnings: Vec<DecayWarning>,
    pub users_recalculated: usize,
    pub point_changes: Vec<PointsChange>,
    pub role_syncs: Vec<RoleSync>,
}

impl SweepReport {
    pub fn to_json(&self) -> TrustResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Decay sweep over a snapshot.
#[derive(Debug, Clone)]
pub struct DecaySweep {
    engine: DecayEngine,
    thresholds: RoleThresholds,
    warning_window_days: u32,
}

impl DecaySweep {
    pub fn new(engine: DecayEngine, thresholds: RoleThresholds, warning_window_days: u32) -> Self {
        Self {
            engine,
            thresholds,
            warning_window_days,
        }
    }

    pub fn from_config(config: &TrustConfig) -> TrustResult<Self> {
        config.validate()?;
        Ok(Self::new(
            DecayEngine::from_config(&config.decay)?,
            config.thresholds.resolved(),
            config.decay.warning_window_days,
        ))
    }

    pub fn engine(&self) -> &DecayEngine {
        &self.engine
    }

    /// Run the sweep at `now`.
    pub fn run(&self, input: &SweepInput, now: DateTime<Utc>) -> SweepReport {
        let span = sweep_span!(input.endorsements.len(), now);
        let _guard = span.enter();

        let mut report = SweepReport {
            warnings: self.collect_warnings(&input.endorsements, now),
            ..SweepReport::default()
        };

        for (subject, endorsements) in self.subjects_to_recalculate(&input.endorsements, now) {
            let effective = self.engine.effective_score_of(endorsements.iter().copied(), now);
            let admin_grant = input.admin_grants.get(&subject).copied().unwrap_or(0);
            let new_points = trust_points(effective, admin_grant);
            let old_points = input.current_points.get(&subject).copied().unwrap_or(0);
            report.users_recalculated += 1;

            if old_points == new_points {
                continue;
            }
            debug!(%subject, old_points, new_points, "trust points changed");

            let thresholds = self.thresholds_for(&subject.community_id, input);
            let changes = thresholds.role_changes(old_points, new_points);
            if !changes.is_empty() {
                report.role_syncs.push(RoleSync {
                    subject: subject.clone(),
                    old_points,
                    new_points,
                    changes,
                    granted_roles: thresholds
                        .granted_roles(new_points)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                });
            }

            report.point_changes.push(PointsChange {
                subject,
                old_points,
                new_points,
                effective_peer_trust: effective,
            });
        }

        info!(
            warnings = report.warnings.len(),
            users_recalculated = report.users_recalculated,
            point_changes = report.point_changes.len(),
            role_syncs = report.role_syncs.len(),
            "decay sweep completed"
        );
        report
    }

    fn collect_warnings(
        &self,
        endorsements: &[Endorsement],
        now: DateTime<Utc>,
    ) -> Vec<DecayWarning> {
        endorsements
            .iter()
            .filter(|e| {
                warning::needs_decay_warning(
                    self.engine.policy(),
                    e.last_updated,
                    now,
                    self.warning_window_days,
                )
            })
            .map(|e| DecayWarning {
                endorsement_id: e.id.clone(),
                community_id: e.community_id.clone(),
                grantor_id: e.from_user_id.clone(),
                recipient_id: e.to_user_id.clone(),
                last_updated: e.last_updated,
            })
            .collect()
    }

    /// Subjects holding at least one endorsement past the decay start, with
    /// all of their endorsements. Ordered by subject for stable reports.
    fn subjects_to_recalculate<'a>(
        &self,
        endorsements: &'a [Endorsement],
        now: DateTime<Utc>,
    ) -> BTreeMap<SubjectKey, Vec<&'a Endorsement>> {
        let mut by_subject: BTreeMap<SubjectKey, Vec<&'a Endorsement>> = BTreeMap::new();
        for endorsement in endorsements {
            by_subject
                .entry(endorsement.subject())
                .or_default()
                .push(endorsement);
        }

        by_subject.retain(|_, received| {
            received
                .iter()
                .any(|e| warning::is_past_decay_start(self.engine.policy(), e.last_updated, now))
        });
        by_subject
    }

    fn thresholds_for(&self, community_id: &str, input: &SweepInput) -> RoleThresholds {
        match input.community_thresholds.get(community_id) {
            Some(overrides) => self.thresholds.clone().with_overrides(overrides),
            None => self.thresholds.clone(),
        }
    }
}

impl Default for DecaySweep {
    fn default() -> Self {
        Self::new(
            DecayEngine::new(),
            RoleThresholds::default(),
            trust_core::config::defaults::DEFAULT_WARNING_WINDOW_DAYS,
        )
    }
}
