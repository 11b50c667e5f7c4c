//! Test fixture loader and builders for trust decay tests.
//!
//! Golden scenarios live under `data/` in this crate and are deserialized
//! with [`load_fixture`]. Builders create endorsements relative to a fixed
//! `now` so tests never depend on the wall clock.

use std::path::PathBuf;

use chrono::{DateTime, Months, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use trust_core::models::{DecayInfo, Endorsement};

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// One golden decay case: inputs and every expected output.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayScenario {
    pub name: String,
    pub last_updated: DateTime<Utc>,
    pub now: DateTime<Utc>,
    pub months_elapsed: u32,
    pub factor: f64,
    pub info: DecayInfo,
}

/// Load the golden decay scenarios.
pub fn decay_scenarios() -> Vec<DecayScenario> {
    load_fixture("decay/golden_scenarios.json")
}

/// Midnight UTC on the given date.
///
/// # Panics
/// Panics on an invalid date.
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid date {year}-{month}-{day}"))
}

/// `months` calendar months before `now`.
pub fn months_before(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months))
        .unwrap_or_else(|| panic!("{months} months before {now} is out of range"))
}

/// Endorsement with a random id.
pub fn endorsement(
    community_id: &str,
    from_user_id: &str,
    to_user_id: &str,
    last_updated: DateTime<Utc>,
) -> Endorsement {
    Endorsement {
        id: uuid::Uuid::new_v4().to_string(),
        community_id: community_id.to_string(),
        from_user_id: from_user_id.to_string(),
        to_user_id: to_user_id.to_string(),
        last_updated,
    }
}

/// Endorsement of `to_user_id` certified `months` calendar months before `now`.
pub fn endorsement_months_ago(
    community_id: &str,
    from_user_id: &str,
    to_user_id: &str,
    now: DateTime<Utc>,
    months: u32,
) -> Endorsement {
    endorsement(community_id, from_user_id, to_user_id, months_before(now, months))
}
