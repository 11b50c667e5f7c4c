// Single source of truth for all default values.

use crate::constants;

// --- Decay ---
pub const DEFAULT_DECAY_START_MONTHS: u32 = constants::DECAY_START_MONTHS;
pub const DEFAULT_DECAY_EXPIRY_MONTHS: u32 = constants::DECAY_EXPIRY_MONTHS;
pub const DEFAULT_WARNING_WINDOW_DAYS: u32 = 1;

// --- Role thresholds ---
// Community defaults when a community has not configured its own minimum.
pub const DEFAULT_ROLE_THRESHOLDS: &[(&str, i64)] = &[
    ("trust_trust_viewer", 0),
    ("trust_trust_granter", 15),
    ("trust_wealth_viewer", 0),
    ("trust_wealth_creator", 10),
    ("trust_needs_viewer", 0),
    ("trust_needs_publisher", 5),
    ("trust_poll_viewer", 0),
    ("trust_poll_creator", 15),
    ("trust_dispute_viewer", 20),
    ("trust_dispute_handler", 20),
    ("trust_pool_viewer", 0),
    ("trust_pool_creator", 20),
    ("trust_council_viewer", 0),
    ("trust_council_creator", 25),
    ("trust_forum_viewer", 0),
    ("trust_forum_manager", 30),
    ("trust_thread_creator", 10),
    ("trust_attachment_uploader", 15),
    ("trust_content_flagger", 15),
    ("trust_flag_reviewer", 30),
    ("trust_item_viewer", 0),
    ("trust_item_manager", 20),
    ("trust_analytics_viewer", 20),
];

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
