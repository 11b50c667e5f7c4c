//! Configuration for trust scoring.
//! TOML-based: file > compiled defaults, with a `TRUST_LOG` env override.

pub mod decay_config;
pub mod defaults;
pub mod observability_config;
pub mod threshold_config;
pub mod trust_config;

pub use decay_config::DecayConfig;
pub use observability_config::ObservabilityConfig;
pub use threshold_config::ThresholdConfig;
pub use trust_config::TrustConfig;
