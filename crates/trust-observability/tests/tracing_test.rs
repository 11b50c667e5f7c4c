use std::sync::{Arc, Mutex};

use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;
use trust_core::config::ObservabilityConfig;
use trust_observability::tracing_setup::spans::names;
use trust_observability::{decay_span, init_tracing, sweep_span};

#[test]
fn init_tracing_is_idempotent() {
    let config = ObservabilityConfig::default();
    init_tracing(&config);
    init_tracing(&config);
    tracing::info!("tracing initialized twice without panicking");
}

/// Records the name of every span created under it.
#[derive(Clone, Default)]
struct SpanNames(Arc<Mutex<Vec<String>>>);

impl<S: Subscriber> Layer<S> for SpanNames {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(attrs.metadata().name().to_string());
    }
}

#[test]
fn span_macros_use_named_spans() {
    let captured = SpanNames::default();
    let subscriber = tracing_subscriber::registry().with(captured.clone());

    tracing::subscriber::with_default(subscriber, || {
        let span = decay_span!(3usize);
        let sweep = sweep_span!(3usize, "2024-07-15T00:00:00Z");

        assert_eq!(span.metadata().unwrap().name(), names::DECAY);
        assert_eq!(sweep.metadata().unwrap().name(), names::SWEEP);
    });

    assert_eq!(
        *captured.0.lock().unwrap(),
        vec![names::DECAY.to_string(), names::SWEEP.to_string()]
    );
}

#[test]
fn invalid_level_falls_back_without_panicking() {
    let config = ObservabilityConfig {
        log_level: "not a [valid directive".to_string(),
        json_logs: true,
    };
    let _filter = trust_observability::build_filter(&config);
}

#[test]
fn init_with_filter_after_init_is_noop() {
    init_tracing(&ObservabilityConfig::default());
    trust_observability::init_tracing_with_filter("trust=debug");
    tracing::debug!("still logging");
}
