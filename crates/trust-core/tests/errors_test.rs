use trust_core::errors::*;

#[test]
fn config_error_validation_carries_field_and_message() {
    let err = ConfigError::ValidationFailed {
        field: "decay.expiry_months".into(),
        message: "must be greater".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("decay.expiry_months"));
    assert!(msg.contains("must be greater"));
}

#[test]
fn invalid_policy_carries_months() {
    let err = TrustError::InvalidPolicy {
        start: 12,
        expiry: 6,
    };
    let msg = err.to_string();
    assert!(msg.contains("12"));
    assert!(msg.contains('6'));
}

// --- From impls ---

#[test]
fn config_error_converts_to_trust_error() {
    let config_err = ConfigError::FileNotFound {
        path: "trust.toml".into(),
    };
    let trust_err: TrustError = config_err.into();
    assert!(matches!(trust_err, TrustError::Config(_)));
    assert!(trust_err.to_string().contains("trust.toml"));
}

#[test]
fn serde_error_converts_to_trust_error() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let trust_err: TrustError = serde_err.into();
    assert!(matches!(trust_err, TrustError::Serialization(_)));
}
