// crates/exposure-risk-config/tests/scoring_validation.rs
// ============================================================================
// Module: Scoring Section Validation Tests
// Description: Weight and threshold validation for the scoring section.
// ============================================================================
//! ## Overview
//! Ensures malformed scoring snapshots fail loudly at load time instead of
//! reaching the calculator.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic fixtures.")]
#![allow(clippy::expect_used, reason = "Tests use expect for explicit failure messages.")]

use exposure_risk_config::ConfigError;

mod common;

type TestResult = Result<(), String>;

/// Assert that a validation result is an error containing a specific substring.
fn assert_invalid(result: Result<(), ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error '{message}' did not contain '{needle}'"))
            }
        }
        Ok(()) => Err("expected invalid config".to_string()),
    }
}

// ============================================================================
// SECTION: Weights
// ============================================================================

#[test]
fn negative_attenuation_weight_rejected() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.scoring.attenuation_weights.low = -1.0;
    assert_invalid(config.validate(), "attenuation weight")?;
    Ok(())
}

#[test]
fn non_finite_transmission_weight_rejected() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.scoring.transmission_weights[3] = f64::INFINITY;
    assert_invalid(config.validate(), "transmission weight")?;
    Ok(())
}

#[test]
fn wrong_transmission_weight_count_rejected() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.scoring.transmission_weights.pop();
    assert_invalid(config.validate(), "exactly 8 entries")?;
    Ok(())
}

// ============================================================================
// SECTION: Thresholds
// ============================================================================

#[test]
fn inverted_score_bounds_rejected() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.scoring.minimum_score = 50.0;
    config.scoring.maximum_score = 10.0;
    assert_invalid(config.validate(), "minimum score")?;
    Ok(())
}

#[test]
fn threshold_above_maximum_rejected() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.scoring.increased_risk_threshold = 500.0;
    assert_invalid(config.validate(), "threshold")?;
    Ok(())
}

#[test]
fn empty_version_rejected() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.scoring.version = "  ".to_string();
    assert_invalid(config.validate(), "scoring.version")?;
    Ok(())
}
