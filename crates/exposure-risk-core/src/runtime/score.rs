// crates/exposure-risk-core/src/runtime/score.rs
// ============================================================================
// Module: Scoring Model
// Description: Weighted scoring of exposure summaries.
// Purpose: Convert a summary into a clamped scalar score and classification.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Scoring model v1: each exposure bucket contributes its duration in
//! minutes multiplied by the attenuation-band weight and the transmission
//! risk weight of its day. Contributions are summed in ascending
//! `(day_index, band, transmission_risk)` order and the sum is clamped to
//! the configured score range, which keeps results bit-reproducible for a
//! fixed snapshot. Classification against the cut-point yields only `low`
//! or `increased`; `unknown` is exclusively a validity-gate outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ExposureBucket;
use crate::core::ExposureSummary;
use crate::core::RiskLevel;
use crate::core::RiskScore;
use crate::core::ScoreContribution;
use crate::core::ScoringConfiguration;

// ============================================================================
// SECTION: Score Outcome
// ============================================================================

/// Clamped score plus the per-bucket contributions behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutcome {
    /// Clamped scalar score.
    pub score: RiskScore,
    /// Per-bucket contributions in canonical summation order.
    pub contributions: Vec<ScoreContribution>,
}

// ============================================================================
// SECTION: Scoring
// ============================================================================

/// Seconds per minute used to normalize bucket durations.
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Scores a summary under a scoring configuration snapshot.
///
/// The snapshot must already be validated; scoring assumes finite,
/// non-negative weights and ordered bounds.
#[must_use]
pub fn score_summary(
    summary: &ExposureSummary,
    scoring: &ScoringConfiguration,
) -> ScoreOutcome {
    let mut ordered: Vec<&ExposureBucket> = summary.buckets().iter().collect();
    ordered.sort_by_key(|bucket| (bucket.day_index, bucket.band, bucket.transmission_risk));

    let mut sum = 0.0_f64;
    let mut contributions = Vec::with_capacity(ordered.len());
    for bucket in ordered {
        let minutes = bucket.duration.as_secs_f64() / SECONDS_PER_MINUTE;
        let band_weight = scoring.attenuation_weights.for_band(bucket.band);
        let transmission_weight =
            scoring.transmission_weights.for_level(bucket.transmission_risk);
        let weighted_value = minutes * band_weight * transmission_weight;
        sum += weighted_value;
        contributions.push(ScoreContribution {
            day_index: bucket.day_index,
            band: bucket.band,
            transmission_risk: bucket.transmission_risk,
            duration: bucket.duration,
            weighted_value,
        });
    }

    let clamped = sum.clamp(scoring.minimum_score, scoring.maximum_score);
    ScoreOutcome {
        score: RiskScore::new(clamped),
        contributions,
    }
}

// ============================================================================
// SECTION: Classification
// ============================================================================

/// Classifies a clamped score against the configured cut-point.
///
/// Scores at or above the cut-point classify as `increased`, below as `low`.
#[must_use]
pub fn classify_score(score: RiskScore, scoring: &ScoringConfiguration) -> RiskLevel {
    if score.value() >= scoring.increased_risk_threshold {
        RiskLevel::Increased
    } else {
        RiskLevel::Low
    }
}
