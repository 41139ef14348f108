// crates/exposure-risk-core/src/runtime/calculator.rs
// ============================================================================
// Module: Risk Calculator
// Description: Orchestration of gate, scoring, and change detection.
// Purpose: Produce the final risk result for one set of inputs.
// Dependencies: crate::core, crate::runtime::{gate, score}
// ============================================================================

//! ## Overview
//! The calculator binds a validated scoring snapshot and provider policy at
//! construction, then evaluates requests as pure computations: validity gate
//! first, scoring if the gate allows it, change detection last. Each
//! evaluation is independent; the calculator holds no mutable state and may
//! be shared across threads freely.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::ActiveTracing;
use crate::core::ConfigFingerprint;
use crate::core::ExposureSummary;
use crate::core::FingerprintError;
use crate::core::Preconditions;
use crate::core::ProviderConfiguration;
use crate::core::RiskLevel;
use crate::core::RiskResult;
use crate::core::ScoringConfigError;
use crate::core::ScoringConfiguration;
use crate::core::Timestamp;
use crate::core::risk_level_changed;
use crate::runtime::gate::GateDecision;
use crate::runtime::gate::inspect_validity;
use crate::runtime::score::classify_score;
use crate::runtime::score::score_summary;

// ============================================================================
// SECTION: Evaluation Request
// ============================================================================

/// Per-calculation inputs supplied by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRequest {
    /// Aggregated result of the detection run under evaluation.
    pub summary: ExposureSummary,
    /// Instant the summary was produced.
    pub detected_at: Timestamp,
    /// Current instant, injected by the caller.
    pub now: Timestamp,
    /// Active tracing coverage within the relevant window.
    pub tracing: ActiveTracing,
    /// Environment facts required for a trustworthy calculation.
    pub preconditions: Preconditions,
    /// Level produced by the prior calculation, when one exists.
    pub previous_level: Option<RiskLevel>,
}

// ============================================================================
// SECTION: Risk Calculator
// ============================================================================

/// Stateless risk calculator bound to validated configuration snapshots.
#[derive(Debug, Clone)]
pub struct RiskCalculator {
    /// Validated scoring snapshot.
    scoring: ScoringConfiguration,
    /// Staleness and cadence policy.
    provider: ProviderConfiguration,
    /// Fingerprint of the scoring snapshot, computed once.
    fingerprint: ConfigFingerprint,
}

impl RiskCalculator {
    /// Creates a calculator, validating the scoring snapshot once.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::InvalidScoring`] when the snapshot violates
    /// its invariants and [`CalculatorError::Fingerprint`] when the snapshot
    /// cannot be canonicalized.
    pub fn new(
        scoring: ScoringConfiguration,
        provider: ProviderConfiguration,
    ) -> Result<Self, CalculatorError> {
        scoring.validate()?;
        let fingerprint = scoring.fingerprint()?;
        Ok(Self {
            scoring,
            provider,
            fingerprint,
        })
    }

    /// Returns the bound scoring snapshot.
    #[must_use]
    pub const fn scoring(&self) -> &ScoringConfiguration {
        &self.scoring
    }

    /// Returns the bound provider policy.
    #[must_use]
    pub const fn provider(&self) -> &ProviderConfiguration {
        &self.provider
    }

    /// Returns the fingerprint of the bound scoring snapshot.
    #[must_use]
    pub const fn fingerprint(&self) -> &ConfigFingerprint {
        &self.fingerprint
    }

    /// Evaluates one request into a risk result.
    ///
    /// Returns `None` when preconditions make the calculation unevaluable;
    /// callers must treat that distinctly from a present `unknown` result.
    /// Identical requests always yield identical results.
    #[must_use]
    pub fn evaluate(&self, request: &EvaluationRequest) -> Option<RiskResult> {
        match inspect_validity(
            request.preconditions,
            request.detected_at,
            request.now,
            request.tracing,
            &self.provider,
        ) {
            GateDecision::Abort(_) => None,
            GateDecision::ForceUnknown(reason) => Some(RiskResult {
                level: RiskLevel::Unknown,
                level_changed: risk_level_changed(request.previous_level, RiskLevel::Unknown),
                score: None,
                contributions: Vec::new(),
                unknown_reason: Some(reason),
                config_fingerprint: self.fingerprint.clone(),
            }),
            GateDecision::Proceed => {
                let outcome = score_summary(&request.summary, &self.scoring);
                let level = classify_score(outcome.score, &self.scoring);
                Some(RiskResult {
                    level,
                    level_changed: risk_level_changed(request.previous_level, level),
                    score: Some(outcome.score),
                    contributions: outcome.contributions,
                    unknown_reason: None,
                    config_fingerprint: self.fingerprint.clone(),
                })
            }
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when constructing a risk calculator.
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// The scoring snapshot violated its invariants.
    #[error("invalid scoring configuration: {0}")]
    InvalidScoring(#[from] ScoringConfigError),
    /// The scoring snapshot could not be fingerprinted.
    #[error("failed to fingerprint scoring configuration: {0}")]
    Fingerprint(#[from] FingerprintError),
}
