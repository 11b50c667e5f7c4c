//! Error handling for trust scoring.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod trust_error;

pub use config_error::ConfigError;
pub use trust_error::{TrustError, TrustResult};
