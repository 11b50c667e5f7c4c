use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::SubjectKey;

/// A peer endorsement: `from_user_id` vouches for `to_user_id` inside a community.
///
/// Endorsements are read-only input to decay calculations. Recertifying an
/// endorsement moves `last_updated` forward and restores its full weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Endorsement {
    pub id: String,
    pub community_id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    /// Most recent certification or recertification.
    pub last_updated: DateTime<Utc>,
}

impl Endorsement {
    /// The subject whose trust this endorsement contributes to.
    pub fn subject(&self) -> SubjectKey {
        SubjectKey::new(&self.community_id, &self.to_user_id)
    }
}

/// Anything that carries a last-certified timestamp.
pub trait Certified {
    fn last_updated(&self) -> DateTime<Utc>;
}

impl Certified for Endorsement {
    fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}

impl Certified for DateTime<Utc> {
    fn last_updated(&self) -> DateTime<Utc> {
        *self
    }
}

impl<T: Certified + ?Sized> Certified for &T {
    fn last_updated(&self) -> DateTime<Utc> {
        (**self).last_updated()
    }
}
