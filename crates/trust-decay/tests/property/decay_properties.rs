use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use trust_decay::{decay_factor, decay_info, effective_score, months_elapsed, DecayPolicy};

fn arb_instant() -> impl Strategy<Value = chrono::DateTime<Utc>> {
    // 2000-01-01 .. 2040-01-01
    (946_684_800i64..2_208_988_800i64)
        .prop_map(|secs| Utc.timestamp_opt(secs, 0).single().unwrap())
}

// ── Bounded and monotone ────────────────────────────────────────────────

proptest! {
    #[test]
    fn factor_bounded_zero_to_one(
        last_updated in arb_instant(),
        now in arb_instant(),
    ) {
        let factor = decay_factor(last_updated, now);
        prop_assert!((0.0..=1.0).contains(&factor));
    }

    #[test]
    fn factor_monotonically_non_increasing(
        last_updated in arb_instant(),
        later_days in 0i64..800,
        extra_days in 0i64..800,
    ) {
        let earlier = last_updated + Duration::days(later_days);
        let later = earlier + Duration::days(extra_days);
        prop_assert!(decay_factor(last_updated, later) <= decay_factor(last_updated, earlier));
        prop_assert!(months_elapsed(later, last_updated) >= months_elapsed(earlier, last_updated));
    }

    #[test]
    fn zero_elapsed_is_full_trust(t in arb_instant()) {
        prop_assert_eq!(decay_factor(t, t), 1.0);
    }
}

// ── Info stays consistent with factor and months ────────────────────────

proptest! {
    #[test]
    fn info_consistent_with_factor(
        last_updated in arb_instant(),
        now in arb_instant(),
    ) {
        let months = months_elapsed(now, last_updated);
        let factor = decay_factor(last_updated, now);
        let info = decay_info(last_updated, now);

        prop_assert_eq!(info.decay_percent, ((1.0 - factor) * 100.0).round() as u8);
        prop_assert_eq!(info.months_until_expiry, 12u32.saturating_sub(months));
        prop_assert_eq!(info.is_decaying, months > 6 && months < 12);
        prop_assert_eq!(info.is_expired, months >= 12);
        prop_assert!(info.decay_percent <= 100);
    }

    #[test]
    fn policy_factor_piecewise_linear(start in 0u32..24, width in 1u32..24, months in 0u32..60) {
        let policy = DecayPolicy::new(start, start + width).unwrap();
        let factor = policy.factor_for_months(months);
        if months <= start {
            prop_assert_eq!(factor, 1.0);
        } else if months >= start + width {
            prop_assert_eq!(factor, 0.0);
        } else {
            let expected = 1.0 - f64::from(months - start) / f64::from(width);
            prop_assert!((factor - expected).abs() < 1e-12);
        }
    }
}

// ── Effective score is order independent ────────────────────────────────

proptest! {
    #[test]
    fn effective_score_order_independent(
        now in arb_instant(),
        ages in proptest::collection::vec(0i64..900, 0..30),
    ) {
        let stamps: Vec<_> = ages.iter().map(|d| now - Duration::days(*d)).collect();
        let forward = effective_score(stamps.iter().copied(), now);
        let backward = effective_score(stamps.iter().rev().copied(), now);

        prop_assert!((forward - backward).abs() < 1e-9);
        prop_assert!(forward >= 0.0);
        prop_assert!(forward <= stamps.len() as f64);
    }
}
