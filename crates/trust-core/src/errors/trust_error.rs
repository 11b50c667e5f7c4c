use super::ConfigError;

/// Top-level error for the trust workspace.
#[derive(Debug, thiserror::Error)]
pub enum TrustError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid decay policy: start {start} months must be below expiry {expiry} months")]
    InvalidPolicy { start: u32, expiry: u32 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type TrustResult<T> = Result<T, TrustError>;
