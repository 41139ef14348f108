// crates/exposure-risk-core/src/runtime/gate.rs
// ============================================================================
// Module: Validity Gate
// Description: Pre-scoring trust checks over the calculation inputs.
// Purpose: Decide whether inputs can support a concrete classification.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Before any scoring runs, the gate inspects preconditions, detection-result
//! age, and tracing coverage. Invalid preconditions abort the calculation
//! entirely (no result); staleness and insufficient coverage degrade the
//! outcome to `unknown`, which is itself a valid, reportable classification
//! distinct from refusing to answer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ActiveTracing;
use crate::core::DetectionMode;
use crate::core::PreconditionFailure;
use crate::core::PreconditionVerdict;
use crate::core::Preconditions;
use crate::core::ProviderConfiguration;
use crate::core::Timestamp;
use crate::core::UnknownReason;

// ============================================================================
// SECTION: Gate Decision
// ============================================================================

/// Verdict of the validity gate over one set of calculation inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Preconditions are invalid; the calculation yields no result.
    Abort(PreconditionFailure),
    /// Inputs cannot support a concrete level; the result is `unknown`.
    ForceUnknown(UnknownReason),
    /// Inputs are trustworthy; proceed to scoring.
    Proceed,
}

// ============================================================================
// SECTION: Gate Evaluation
// ============================================================================

/// Inspects the calculation inputs and decides whether scoring may run.
///
/// Checks run in a fixed order: preconditions first (the only aborting
/// check), then detection-result staleness, then tracing coverage.
///
/// - Staleness applies only in [`DetectionMode::Automatic`]; a user-triggered
///   check is always considered fresh enough. A detection timestamp in the
///   future of `now` counts as age zero.
/// - Tracing coverage must span at least one full detection interval for a
///   computed score to be trusted.
#[must_use]
pub fn inspect_validity(
    preconditions: Preconditions,
    detected_at: Timestamp,
    now: Timestamp,
    tracing: ActiveTracing,
    provider: &ProviderConfiguration,
) -> GateDecision {
    if let PreconditionVerdict::Invalid(failure) = preconditions.verdict() {
        return GateDecision::Abort(failure);
    }

    if provider.detection_mode == DetectionMode::Automatic
        && let Some(age) = now.checked_duration_since(detected_at)
        && age > provider.detection_validity
    {
        return GateDecision::ForceUnknown(UnknownReason::StaleDetection);
    }

    if tracing.interval < provider.detection_interval {
        return GateDecision::ForceUnknown(UnknownReason::InsufficientTracing);
    }

    GateDecision::Proceed
}
