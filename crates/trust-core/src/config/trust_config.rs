//! Top-level trust configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DecayConfig, ObservabilityConfig, ThresholdConfig};
use crate::constants::LOG_ENV_VAR;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TRUST_LOG`)
/// 2. Config file passed to [`TrustConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    pub decay: DecayConfig,
    pub thresholds: ThresholdConfig,
    pub observability: ObservabilityConfig,
}

impl TrustConfig {
    /// Load configuration from a TOML file, apply environment overrides,
    /// and validate the result.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;

        let mut config: TrustConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing sections and keys
    /// fall back to defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: TrustConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decay.start_months >= self.decay.expiry_months {
            return Err(ConfigError::ValidationFailed {
                field: "decay.expiry_months".to_string(),
                message: format!(
                    "must be greater than decay.start_months ({})",
                    self.decay.start_months
                ),
            });
        }
        if self.decay.warning_window_days == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "decay.warning_window_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some((role, value)) = self.thresholds.overrides.iter().find(|(_, v)| **v < 0) {
            return Err(ConfigError::ValidationFailed {
                field: format!("thresholds.overrides.{role}"),
                message: format!("must not be negative, got {value}"),
            });
        }
        if self.observability.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Apply `TRUST_LOG` to the observability log level when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(LOG_ENV_VAR) {
            if !level.trim().is_empty() {
                self.observability.log_level = level;
            }
        }
    }
}
