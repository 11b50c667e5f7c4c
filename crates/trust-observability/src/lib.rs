//! # trust-observability
//!
//! Structured logging for the trust workspace: subscriber setup driven by
//! [`ObservabilityConfig`](trust_core::config::ObservabilityConfig) and the
//! span macros used by the decay engine and sweep.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing, init_tracing_with_filter};
