// crates/exposure-risk-core/tests/validity_gate.rs
// ============================================================================
// Module: Validity Gate Tests
// Description: Precondition, staleness, and tracing coverage gating.
// ============================================================================
//! ## Overview
//! Validates the pre-scoring trust checks: aborts on invalid preconditions,
//! staleness handling per detection mode, and minimum tracing coverage.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic fixtures.")]
#![allow(clippy::expect_used, reason = "Tests use expect for explicit failure messages.")]

use std::time::Duration;

use exposure_risk_core::ActiveTracing;
use exposure_risk_core::DetectionMode;
use exposure_risk_core::GateDecision;
use exposure_risk_core::PreconditionFailure;
use exposure_risk_core::Preconditions;
use exposure_risk_core::ProviderConfiguration;
use exposure_risk_core::Timestamp;
use exposure_risk_core::UnknownReason;
use exposure_risk_core::inspect_validity;

/// Fixed current instant shared by the gate tests.
const NOW: Timestamp = Timestamp::from_unix_millis(1_600_000_000_000);

/// One day in seconds.
const DAY_SECS: u64 = 24 * 3600;

fn provider(mode: DetectionMode) -> ProviderConfiguration {
    ProviderConfiguration {
        detection_validity: Duration::from_secs(DAY_SECS),
        detection_interval: Duration::from_secs(DAY_SECS),
        detection_mode: mode,
    }
}

fn timestamp_hours_ago(hours: i64) -> Timestamp {
    Timestamp::from_unix_millis(NOW.unix_millis() - hours * 3600 * 1000)
}

fn full_tracing() -> ActiveTracing {
    ActiveTracing::new(Duration::from_secs(48 * 3600))
}

// ============================================================================
// SECTION: Preconditions
// ============================================================================

#[test]
fn test_invalid_preconditions_abort() {
    let preconditions = Preconditions {
        authorized: false,
        bluetooth_enabled: true,
        exposure_subsystem_active: true,
    };
    let decision = inspect_validity(
        preconditions,
        timestamp_hours_ago(1),
        NOW,
        full_tracing(),
        &provider(DetectionMode::Automatic),
    );
    assert_eq!(
        decision,
        GateDecision::Abort(PreconditionFailure::AuthorizationMissing)
    );
}

#[test]
fn test_precondition_abort_takes_precedence_over_staleness() {
    let preconditions = Preconditions {
        authorized: true,
        bluetooth_enabled: false,
        exposure_subsystem_active: true,
    };
    // Stale timestamp and invalid preconditions together still abort.
    let decision = inspect_validity(
        preconditions,
        timestamp_hours_ago(48),
        NOW,
        full_tracing(),
        &provider(DetectionMode::Automatic),
    );
    assert_eq!(decision, GateDecision::Abort(PreconditionFailure::BluetoothDisabled));
}

#[test]
fn test_verdict_reports_first_failing_fact() {
    let preconditions = Preconditions {
        authorized: true,
        bluetooth_enabled: true,
        exposure_subsystem_active: false,
    };
    let decision = inspect_validity(
        preconditions,
        timestamp_hours_ago(1),
        NOW,
        full_tracing(),
        &provider(DetectionMode::Automatic),
    );
    assert_eq!(decision, GateDecision::Abort(PreconditionFailure::SubsystemInactive));
}

// ============================================================================
// SECTION: Staleness
// ============================================================================

#[test]
fn test_fresh_detection_proceeds() {
    let decision = inspect_validity(
        Preconditions::all_satisfied(),
        timestamp_hours_ago(1),
        NOW,
        full_tracing(),
        &provider(DetectionMode::Automatic),
    );
    assert_eq!(decision, GateDecision::Proceed);
}

#[test]
fn test_stale_detection_forces_unknown_in_automatic_mode() {
    let decision = inspect_validity(
        Preconditions::all_satisfied(),
        timestamp_hours_ago(48),
        NOW,
        full_tracing(),
        &provider(DetectionMode::Automatic),
    );
    assert_eq!(decision, GateDecision::ForceUnknown(UnknownReason::StaleDetection));
}

#[test]
fn test_manual_mode_skips_staleness_check() {
    let decision = inspect_validity(
        Preconditions::all_satisfied(),
        timestamp_hours_ago(48),
        NOW,
        full_tracing(),
        &provider(DetectionMode::Manual),
    );
    assert_eq!(decision, GateDecision::Proceed);
}

#[test]
fn test_age_exactly_at_validity_is_not_stale() {
    let decision = inspect_validity(
        Preconditions::all_satisfied(),
        timestamp_hours_ago(24),
        NOW,
        full_tracing(),
        &provider(DetectionMode::Automatic),
    );
    assert_eq!(decision, GateDecision::Proceed);
}

#[test]
fn test_future_detection_timestamp_counts_as_fresh() {
    let decision = inspect_validity(
        Preconditions::all_satisfied(),
        timestamp_hours_ago(-2),
        NOW,
        full_tracing(),
        &provider(DetectionMode::Automatic),
    );
    assert_eq!(decision, GateDecision::Proceed);
}

// ============================================================================
// SECTION: Tracing Coverage
// ============================================================================

#[test]
fn test_insufficient_tracing_forces_unknown() {
    let decision = inspect_validity(
        Preconditions::all_satisfied(),
        timestamp_hours_ago(1),
        NOW,
        ActiveTracing::new(Duration::from_secs(3600)),
        &provider(DetectionMode::Automatic),
    );
    assert_eq!(
        decision,
        GateDecision::ForceUnknown(UnknownReason::InsufficientTracing)
    );
}

#[test]
fn test_coverage_equal_to_interval_proceeds() {
    let decision = inspect_validity(
        Preconditions::all_satisfied(),
        timestamp_hours_ago(1),
        NOW,
        ActiveTracing::new(Duration::from_secs(DAY_SECS)),
        &provider(DetectionMode::Automatic),
    );
    assert_eq!(decision, GateDecision::Proceed);
}

#[test]
fn test_staleness_reported_before_coverage() {
    // Both degraded conditions at once: staleness is inspected first.
    let decision = inspect_validity(
        Preconditions::all_satisfied(),
        timestamp_hours_ago(48),
        NOW,
        ActiveTracing::new(Duration::from_secs(3600)),
        &provider(DetectionMode::Automatic),
    );
    assert_eq!(decision, GateDecision::ForceUnknown(UnknownReason::StaleDetection));
}
