use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies whose trust is being computed: a user within a community.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectKey {
    pub community_id: String,
    pub user_id: String,
}

impl SubjectKey {
    pub fn new(community_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            community_id: community_id.into(),
            user_id: user_id.into(),
        }
    }
}

impl fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.community_id, self.user_id)
    }
}
