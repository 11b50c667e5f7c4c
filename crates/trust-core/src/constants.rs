/// Workspace version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Months after certification during which an endorsement keeps full weight.
pub const DECAY_START_MONTHS: u32 = 6;

/// Months after certification at which an endorsement carries no weight.
pub const DECAY_EXPIRY_MONTHS: u32 = 12;

/// Environment variable read for log filtering and level overrides.
pub const LOG_ENV_VAR: &str = "TRUST_LOG";
