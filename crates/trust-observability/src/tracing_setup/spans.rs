//! Span definitions per operation: decay batch, sweep.

/// Create a decay batch span.
#[macro_export]
macro_rules! decay_span {
    ($endorsement_count:expr) => {
        tracing::info_span!("trust.decay", endorsement_count = $endorsement_count)
    };
}

/// Create a decay sweep span.
#[macro_export]
macro_rules! sweep_span {
    ($endorsement_count:expr, $now:expr) => {
        tracing::info_span!(
            "trust.sweep",
            endorsement_count = $endorsement_count,
            now = %$now
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const DECAY: &str = "trust.decay";
    pub const SWEEP: &str = "trust.sweep";
}
