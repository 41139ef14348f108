// crates/exposure-risk-core/src/core/scoring.rs
// ============================================================================
// Module: Scoring Configuration
// Description: Versioned weights and thresholds for risk scoring.
// Purpose: Model scoring coefficients as validated, fingerprintable data.
// Dependencies: crate::core::{fingerprint, summary}, serde, thiserror
// ============================================================================

//! ## Overview
//! Scoring coefficients are configuration data, not code: two configuration
//! snapshots may legitimately classify the same summary differently. A
//! snapshot is validated once at load time (finite, non-negative weights and
//! monotonic thresholds) and identified by a canonical fingerprint so that
//! persisted results remain attributable to the exact snapshot that produced
//! them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::fingerprint::ConfigFingerprint;
use crate::core::fingerprint::DEFAULT_FINGERPRINT_ALGORITHM;
use crate::core::fingerprint::FingerprintError;
use crate::core::fingerprint::fingerprint_canonical_json;
use crate::core::summary::AttenuationBand;
use crate::core::summary::TransmissionRiskLevel;

// ============================================================================
// SECTION: Configuration Version
// ============================================================================

/// Version label of a scoring configuration snapshot.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigVersion(String);

impl ConfigVersion {
    /// Creates a new configuration version label.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// Returns the version label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// SECTION: Weight Tables
// ============================================================================

/// Weights applied to exposure durations per attenuation band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttenuationWeights {
    /// Weight for the low-attenuation (closest proximity) band.
    pub low: f64,
    /// Weight for the mid-attenuation band.
    pub mid: f64,
    /// Weight for the high-attenuation (farthest proximity) band.
    pub high: f64,
}

impl AttenuationWeights {
    /// Returns the weight for an attenuation band.
    #[must_use]
    pub const fn for_band(&self, band: AttenuationBand) -> f64 {
        match band {
            AttenuationBand::Low => self.low,
            AttenuationBand::Mid => self.mid,
            AttenuationBand::High => self.high,
        }
    }
}

/// Weights applied per transmission risk level, indexed by level `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransmissionWeights([f64; 8]);

impl TransmissionWeights {
    /// Creates a weight table from one entry per transmission risk level.
    #[must_use]
    pub const fn new(weights: [f64; 8]) -> Self {
        Self(weights)
    }

    /// Returns the weight for a transmission risk level.
    #[must_use]
    pub const fn for_level(&self, level: TransmissionRiskLevel) -> f64 {
        self.0[level.weight_index()]
    }

    /// Returns the weight table entries in level order.
    #[must_use]
    pub const fn entries(&self) -> &[f64; 8] {
        &self.0
    }
}

// ============================================================================
// SECTION: Scoring Configuration
// ============================================================================

/// Versioned scoring weights and classification thresholds.
///
/// # Invariants
/// - All weights are finite and non-negative.
/// - `minimum_score <= increased_risk_threshold <= maximum_score`.
/// - Invariants are enforced by [`ScoringConfiguration::validate`], called
///   once when the snapshot is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfiguration {
    /// Version label of this snapshot.
    pub version: ConfigVersion,
    /// Per-band attenuation duration weights.
    pub attenuation_weights: AttenuationWeights,
    /// Per-level transmission risk weights.
    pub transmission_weights: TransmissionWeights,
    /// Lower clamp applied to the summed score.
    pub minimum_score: f64,
    /// Upper clamp applied to the summed score.
    pub maximum_score: f64,
    /// Cut-point separating `low` from `increased`; scores at or above it
    /// classify as increased.
    pub increased_risk_threshold: f64,
}

impl ScoringConfiguration {
    /// Validates the snapshot invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringConfigError`] when any weight or threshold violates
    /// the documented invariants.
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        for band in AttenuationBand::ALL {
            let value = self.attenuation_weights.for_band(band);
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringConfigError::InvalidAttenuationWeight {
                    band,
                    value,
                });
            }
        }

        for (index, value) in self.transmission_weights.entries().iter().enumerate() {
            if !value.is_finite() || *value < 0.0 {
                let level = index.saturating_add(1);
                return Err(ScoringConfigError::InvalidTransmissionWeight {
                    level,
                    value: *value,
                });
            }
        }

        for value in [self.minimum_score, self.maximum_score, self.increased_risk_threshold] {
            if !value.is_finite() {
                return Err(ScoringConfigError::NonFiniteBound(value));
            }
        }

        if self.minimum_score > self.maximum_score {
            return Err(ScoringConfigError::BoundsInverted {
                minimum: self.minimum_score,
                maximum: self.maximum_score,
            });
        }

        if self.increased_risk_threshold < self.minimum_score
            || self.increased_risk_threshold > self.maximum_score
        {
            return Err(ScoringConfigError::ThresholdOutsideBounds {
                threshold: self.increased_risk_threshold,
                minimum: self.minimum_score,
                maximum: self.maximum_score,
            });
        }

        Ok(())
    }

    /// Computes the canonical fingerprint of this snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`FingerprintError`] when canonicalization fails.
    pub fn fingerprint(&self) -> Result<ConfigFingerprint, FingerprintError> {
        fingerprint_canonical_json(DEFAULT_FINGERPRINT_ALGORITHM, self)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when validating a scoring configuration snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScoringConfigError {
    /// An attenuation weight was negative or non-finite.
    #[error("attenuation weight for band {band} must be finite and non-negative, got {value}")]
    InvalidAttenuationWeight {
        /// Band carrying the invalid weight.
        band: AttenuationBand,
        /// Offending weight value.
        value: f64,
    },
    /// A transmission weight was negative or non-finite.
    #[error("transmission weight for level {level} must be finite and non-negative, got {value}")]
    InvalidTransmissionWeight {
        /// One-based transmission risk level carrying the invalid weight.
        level: usize,
        /// Offending weight value.
        value: f64,
    },
    /// A score bound or threshold was non-finite.
    #[error("score bounds and threshold must be finite, got {0}")]
    NonFiniteBound(f64),
    /// The minimum score exceeded the maximum score.
    #[error("minimum score {minimum} exceeds maximum score {maximum}")]
    BoundsInverted {
        /// Configured lower clamp.
        minimum: f64,
        /// Configured upper clamp.
        maximum: f64,
    },
    /// The cut-point lay outside the clamp range.
    #[error("threshold {threshold} outside score bounds [{minimum}, {maximum}]")]
    ThresholdOutsideBounds {
        /// Configured cut-point.
        threshold: f64,
        /// Configured lower clamp.
        minimum: f64,
        /// Configured upper clamp.
        maximum: f64,
    },
}
