use chrono::{DateTime, Duration, Utc};
use test_fixtures::{at, endorsement_months_ago};
use trust_core::config::DecayConfig;
use trust_decay::{decay_factor, decaying_by_grantor, effective_score, recertify, DecayEngine};

fn now() -> DateTime<Utc> {
    at(2024, 7, 15) + Duration::hours(12)
}

#[test]
fn decaying_list_filters_by_community_grantor_and_age() {
    let endorsements = vec![
        endorsement_months_ago("c1", "grantor", "alice", now(), 7),
        endorsement_months_ago("c1", "grantor", "bob", now(), 3),
        endorsement_months_ago("c1", "other", "carol", now(), 9),
        endorsement_months_ago("c2", "grantor", "dan", now(), 9),
        endorsement_months_ago("c1", "grantor", "erin", now(), 13),
    ];

    let decaying = decaying_by_grantor(&endorsements, "c1", "grantor", now());
    let recipients: Vec<&str> = decaying
        .iter()
        .map(|d| d.endorsement.to_user_id.as_str())
        .collect();
    assert_eq!(recipients, vec!["alice", "erin"]);

    assert!(decaying[0].info.is_decaying);
    assert_eq!(decaying[0].info.decay_percent, 17);
    assert!(decaying[1].info.is_expired);
}

#[test]
fn decaying_list_is_empty_for_fresh_endorsements() {
    let endorsements = vec![endorsement_months_ago("c1", "grantor", "alice", now(), 5)];
    assert!(decaying_by_grantor(&endorsements, "c1", "grantor", now()).is_empty());
}

#[test]
fn engine_decaying_list_uses_configured_start() {
    let engine = DecayEngine::from_config(&DecayConfig {
        start_months: 2,
        expiry_months: 4,
        ..DecayConfig::default()
    })
    .unwrap();
    let endorsements = vec![endorsement_months_ago("c1", "grantor", "alice", now(), 3)];

    let decaying = engine.decaying_by_grantor(&endorsements, "c1", "grantor", now());
    assert_eq!(decaying.len(), 1);
    assert_eq!(decaying[0].info.decay_percent, 50);
}

#[test]
fn recertify_restores_full_weight() {
    let endorsements = vec![
        endorsement_months_ago("c1", "grantor", "alice", now(), 9),
        endorsement_months_ago("c1", "grantor", "bob", now(), 13),
    ];
    assert_eq!(effective_score(&endorsements, now()), 0.5);

    let renewed = recertify(&endorsements, "c1", "grantor", &["alice", "bob"], now());
    assert_eq!(renewed.len(), 2);
    for endorsement in &renewed {
        assert_eq!(endorsement.last_updated, now());
        assert_eq!(decay_factor(endorsement.last_updated, now()), 1.0);
    }
    assert_eq!(effective_score(&renewed, now()), 2.0);
    assert!(decaying_by_grantor(&renewed, "c1", "grantor", now()).is_empty());
}

#[test]
fn recertify_touches_only_selected_recipients_of_the_grantor() {
    let endorsements = vec![
        endorsement_months_ago("c1", "grantor", "alice", now(), 9),
        endorsement_months_ago("c1", "grantor", "bob", now(), 9),
        endorsement_months_ago("c1", "other", "alice", now(), 9),
        endorsement_months_ago("c2", "grantor", "alice", now(), 9),
    ];

    let renewed = recertify(&endorsements, "c1", "grantor", &["alice".to_string()], now());
    assert_eq!(renewed.len(), 1);
    assert_eq!(renewed[0].id, endorsements[0].id);
    assert_eq!(renewed[0].to_user_id, "alice");
}

#[test]
fn recertify_with_no_recipients_renews_nothing() {
    let endorsements = vec![endorsement_months_ago("c1", "grantor", "alice", now(), 9)];
    let none: [&str; 0] = [];
    assert!(recertify(&endorsements, "c1", "grantor", &none, now()).is_empty());
}
