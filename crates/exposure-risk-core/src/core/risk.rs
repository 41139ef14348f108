// crates/exposure-risk-core/src/core/risk.rs
// ============================================================================
// Module: Risk Classification Types
// Description: Risk levels, scores, results, and change detection.
// Purpose: Define the classification surfaced to callers and its change rule.
// Dependencies: crate::core::{fingerprint, summary}, serde
// ============================================================================

//! ## Overview
//! A calculation ends in one of three levels: `unknown`, `low`, or
//! `increased`. Only `low` and `increased` are reportable; `unknown` records
//! an inability to evaluate, not a risk state, so transitions into or out of
//! it never count as a change. The result value carries the raw score and
//! per-bucket contributions for diagnostics along with the fingerprint of
//! the scoring snapshot that produced it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::core::fingerprint::ConfigFingerprint;
use crate::core::summary::AttenuationBand;
use crate::core::summary::TransmissionRiskLevel;

// ============================================================================
// SECTION: Risk Level
// ============================================================================

/// Risk classification surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Risk could not be determined from the available inputs.
    Unknown,
    /// Computed score below the configured cut-point.
    Low,
    /// Computed score at or above the configured cut-point.
    Increased,
}

impl RiskLevel {
    /// Returns true if the level is eligible to participate in change
    /// notifications (`low` or `increased`).
    #[must_use]
    pub const fn is_reportable(self) -> bool {
        matches!(self, Self::Low | Self::Increased)
    }

    /// Returns true if the level is `Unknown`.
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Low => "low",
            Self::Increased => "increased",
        };
        f.write_str(name)
    }
}

// ============================================================================
// SECTION: Change Detection
// ============================================================================

/// Decides whether the transition from `previous` to `current` should be
/// reported as a change.
///
/// True iff both levels are reportable and differ. An absent previous level
/// (first calculation) and any transition involving `unknown` never report a
/// change.
#[must_use]
pub const fn risk_level_changed(previous: Option<RiskLevel>, current: RiskLevel) -> bool {
    match previous {
        Some(previous) => {
            previous.is_reportable()
                && current.is_reportable()
                && !matches!(
                    (previous, current),
                    (RiskLevel::Low, RiskLevel::Low)
                        | (RiskLevel::Increased, RiskLevel::Increased)
                )
        }
        None => false,
    }
}

// ============================================================================
// SECTION: Risk Score
// ============================================================================

/// Raw scalar risk score after clamping.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(f64);

impl RiskScore {
    /// Creates a score from a raw value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw score value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Unknown Reasons
// ============================================================================

/// Why a calculation degraded to `unknown` instead of producing a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownReason {
    /// The detection result exceeded the configured validity duration.
    StaleDetection,
    /// Active tracing coverage fell below the minimum observation time.
    InsufficientTracing,
}

impl fmt::Display for UnknownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StaleDetection => "detection result stale",
            Self::InsufficientTracing => "insufficient tracing coverage",
        };
        f.write_str(name)
    }
}

// ============================================================================
// SECTION: Score Contributions
// ============================================================================

/// Weighted contribution of one exposure bucket to the raw score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreContribution {
    /// Day index of the contributing bucket.
    pub day_index: u32,
    /// Attenuation band of the contributing bucket.
    pub band: AttenuationBand,
    /// Transmission risk level of the bucket's day.
    pub transmission_risk: TransmissionRiskLevel,
    /// Exposure duration of the bucket.
    pub duration: Duration,
    /// Weighted contribution added to the raw sum.
    pub weighted_value: f64,
}

// ============================================================================
// SECTION: Risk Result
// ============================================================================

/// Outcome of one risk calculation.
///
/// # Invariants
/// - `score` and `contributions` are present iff the validity gate allowed
///   scoring; an `unknown` level carries `unknown_reason` instead.
/// - Constructed fresh on every calculation; never retained by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Computed risk level.
    pub level: RiskLevel,
    /// Whether the transition from the previous level is reportable.
    pub level_changed: bool,
    /// Clamped raw score, when scoring ran.
    pub score: Option<RiskScore>,
    /// Per-bucket score contributions in canonical order, when scoring ran.
    pub contributions: Vec<ScoreContribution>,
    /// Reason the level degraded to `unknown`, when it did.
    pub unknown_reason: Option<UnknownReason>,
    /// Fingerprint of the scoring snapshot that produced this result.
    pub config_fingerprint: ConfigFingerprint,
}
