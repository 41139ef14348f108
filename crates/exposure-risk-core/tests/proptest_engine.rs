// crates/exposure-risk-core/tests/proptest_engine.rs
// ============================================================================
// Module: Engine Property-Based Tests
// Description: Property tests for scoring, classification, and change rules.
// Purpose: Detect invariant violations across wide input ranges.
// ============================================================================

//! Property-based tests for engine invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::time::Duration;

use exposure_risk_core::ActiveTracing;
use exposure_risk_core::AttenuationBand;
use exposure_risk_core::AttenuationWeights;
use exposure_risk_core::ConfigVersion;
use exposure_risk_core::DetectionMode;
use exposure_risk_core::EvaluationRequest;
use exposure_risk_core::ExposureBucket;
use exposure_risk_core::ExposureSummary;
use exposure_risk_core::Preconditions;
use exposure_risk_core::ProviderConfiguration;
use exposure_risk_core::RiskCalculator;
use exposure_risk_core::RiskLevel;
use exposure_risk_core::ScoringConfiguration;
use exposure_risk_core::Timestamp;
use exposure_risk_core::TransmissionRiskLevel;
use exposure_risk_core::TransmissionWeights;
use exposure_risk_core::classify_score;
use exposure_risk_core::risk_level_changed;
use exposure_risk_core::score_summary;
use proptest::prelude::*;

fn risk_level_strategy() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::Unknown),
        Just(RiskLevel::Low),
        Just(RiskLevel::Increased),
    ]
}

fn band_strategy() -> impl Strategy<Value = AttenuationBand> {
    prop_oneof![
        Just(AttenuationBand::Low),
        Just(AttenuationBand::Mid),
        Just(AttenuationBand::High),
    ]
}

fn bucket_strategy() -> impl Strategy<Value = ExposureBucket> {
    (0_u32 .. 14, band_strategy(), 0_u64 .. 36_000, 1_u8 ..= 8).prop_map(
        |(day_index, band, secs, level)| ExposureBucket {
            day_index,
            band,
            duration: Duration::from_secs(secs),
            transmission_risk: TransmissionRiskLevel::new(level).unwrap(),
        },
    )
}

fn summary_strategy() -> impl Strategy<Value = ExposureSummary> {
    prop::collection::vec(bucket_strategy(), 0 .. 16)
        .prop_map(|buckets| {
            let matched = u64::try_from(buckets.len()).unwrap_or(u64::MAX);
            ExposureSummary::new(None, matched, buckets)
        })
}

fn scoring_strategy() -> impl Strategy<Value = ScoringConfiguration> {
    (
        prop::collection::vec(0.0_f64 .. 4.0, 3),
        prop::collection::vec(0.0_f64 .. 4.0, 8),
        0.0_f64 .. 100.0,
    )
        .prop_map(|(bands, transmission, threshold)| {
            let mut levels = [0.0_f64; 8];
            levels.copy_from_slice(&transmission);
            ScoringConfiguration {
                version: ConfigVersion::new("v1-prop"),
                attenuation_weights: AttenuationWeights {
                    low: bands[0],
                    mid: bands[1],
                    high: bands[2],
                },
                transmission_weights: TransmissionWeights::new(levels),
                minimum_score: 0.0,
                maximum_score: 100.0,
                increased_risk_threshold: threshold,
            }
        })
}

proptest! {
    #[test]
    fn change_rule_matches_reference_table(
        previous in prop::option::of(risk_level_strategy()),
        current in risk_level_strategy(),
    ) {
        let expected = matches!(
            (previous, current),
            (Some(RiskLevel::Low), RiskLevel::Increased)
                | (Some(RiskLevel::Increased), RiskLevel::Low)
        );
        prop_assert_eq!(risk_level_changed(previous, current), expected);
    }

    #[test]
    fn change_rule_never_fires_for_unknown(
        previous in prop::option::of(risk_level_strategy()),
        current in risk_level_strategy(),
    ) {
        if current.is_unknown() || !previous.is_some_and(RiskLevel::is_reportable) {
            prop_assert!(!risk_level_changed(previous, current));
        }
    }

    #[test]
    fn score_stays_within_configured_bounds(
        summary in summary_strategy(),
        scoring in scoring_strategy(),
    ) {
        prop_assert!(scoring.validate().is_ok());
        let outcome = score_summary(&summary, &scoring);
        prop_assert!(outcome.score.value() >= scoring.minimum_score);
        prop_assert!(outcome.score.value() <= scoring.maximum_score);
    }

    #[test]
    fn classification_is_consistent_with_cut_point(
        summary in summary_strategy(),
        scoring in scoring_strategy(),
    ) {
        let outcome = score_summary(&summary, &scoring);
        let level = classify_score(outcome.score, &scoring);
        if outcome.score.value() >= scoring.increased_risk_threshold {
            prop_assert_eq!(level, RiskLevel::Increased);
        } else {
            prop_assert_eq!(level, RiskLevel::Low);
        }
    }

    #[test]
    fn bucket_order_is_irrelevant(
        summary in summary_strategy(),
        scoring in scoring_strategy(),
    ) {
        let mut reversed = summary.buckets().to_vec();
        reversed.reverse();
        let shuffled = ExposureSummary::new(
            summary.days_since_last_exposure,
            summary.matched_key_count,
            reversed,
        );
        prop_assert_eq!(
            score_summary(&summary, &scoring),
            score_summary(&shuffled, &scoring)
        );
    }

    #[test]
    fn evaluation_is_deterministic(
        summary in summary_strategy(),
        scoring in scoring_strategy(),
        previous in prop::option::of(risk_level_strategy()),
        detected_hours_ago in 0_i64 .. 72,
        manual in any::<bool>(),
    ) {
        let provider = ProviderConfiguration {
            detection_validity: Duration::from_secs(24 * 3600),
            detection_interval: Duration::from_secs(24 * 3600),
            detection_mode: if manual { DetectionMode::Manual } else { DetectionMode::Automatic },
        };
        let now = Timestamp::from_unix_millis(1_600_000_000_000);
        let request = EvaluationRequest {
            summary,
            detected_at: Timestamp::from_unix_millis(
                now.unix_millis() - detected_hours_ago * 3600 * 1000,
            ),
            now,
            tracing: ActiveTracing::new(Duration::from_secs(48 * 3600)),
            preconditions: Preconditions::all_satisfied(),
            previous_level: previous,
        };
        let calculator = RiskCalculator::new(scoring, provider).unwrap();
        prop_assert_eq!(calculator.evaluate(&request), calculator.evaluate(&request));
    }

    #[test]
    fn longer_exposure_never_lowers_the_score(
        scoring in scoring_strategy(),
        base_secs in 0_u64 .. 18_000,
        extra_secs in 0_u64 .. 18_000,
        band in band_strategy(),
        level in 1_u8 ..= 8,
    ) {
        let single = |secs: u64| {
            ExposureSummary::new(
                None,
                1,
                vec![ExposureBucket {
                    day_index: 0,
                    band,
                    duration: Duration::from_secs(secs),
                    transmission_risk: TransmissionRiskLevel::new(level).unwrap(),
                }],
            )
        };
        let shorter = score_summary(&single(base_secs), &scoring).score.value();
        let longer = score_summary(&single(base_secs + extra_secs), &scoring).score.value();
        prop_assert!(longer >= shorter);
    }
}
