use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Display summary of how far an endorsement has decayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DecayInfo {
    /// Share of the original weight already lost, 0–100.
    pub decay_percent: u8,
    /// Whole months left before the endorsement carries no weight.
    pub months_until_expiry: u32,
    /// Strictly between the decay start and expiry.
    pub is_decaying: bool,
    pub is_expired: bool,
}
