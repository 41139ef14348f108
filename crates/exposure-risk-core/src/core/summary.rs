// crates/exposure-risk-core/src/core/summary.rs
// ============================================================================
// Module: Exposure Summary Types
// Description: Aggregated, anonymized exposure-detection results.
// Purpose: Provide the canonical scoring input with validated magnitudes.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! An exposure summary is the aggregated result of matching locally observed
//! proximity tokens against published infection keys over one detection
//! window. It carries per-day exposure buckets (duration within an
//! attenuation band, weighted by the transmission risk reported for that
//! day) plus aggregate counters. Summaries are produced once per detection
//! run by the host and are immutable from the engine's perspective.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Transmission Risk
// ============================================================================

/// Lowest transmission risk level reported by the detection subsystem.
pub const MIN_TRANSMISSION_RISK_LEVEL: u8 = 1;
/// Highest transmission risk level reported by the detection subsystem.
pub const MAX_TRANSMISSION_RISK_LEVEL: u8 = 8;

/// Per-day transmission risk level attached to an exposure bucket.
///
/// # Invariants
/// - Always within `1..=8`; enforced at every construction boundary,
///   including deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TransmissionRiskLevel(u8);

impl TransmissionRiskLevel {
    /// Creates a transmission risk level from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::TransmissionRiskOutOfRange`] when the value
    /// lies outside `1..=8`.
    pub const fn new(level: u8) -> Result<Self, SummaryError> {
        if level < MIN_TRANSMISSION_RISK_LEVEL || level > MAX_TRANSMISSION_RISK_LEVEL {
            return Err(SummaryError::TransmissionRiskOutOfRange(level));
        }
        Ok(Self(level))
    }

    /// Returns the raw level value (always within `1..=8`).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the zero-based weight-table index for this level.
    #[must_use]
    pub const fn weight_index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for TransmissionRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for TransmissionRiskLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level = u8::deserialize(deserializer)?;
        Self::new(level).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// SECTION: Attenuation Bands
// ============================================================================

/// Attenuation band an exposure duration was observed in.
///
/// Bands partition measured signal attenuation into the ranges below,
/// between, and above the configured dB thresholds. Closer proximity maps to
/// lower attenuation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AttenuationBand {
    /// Attenuation below the lower threshold (closest proximity).
    Low,
    /// Attenuation between the thresholds.
    Mid,
    /// Attenuation above the upper threshold (farthest proximity).
    High,
}

impl AttenuationBand {
    /// All bands in canonical ascending order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Mid, Self::High];
}

impl fmt::Display for AttenuationBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        };
        f.write_str(name)
    }
}

// ============================================================================
// SECTION: Exposure Buckets
// ============================================================================

/// Single exposure magnitude: time spent in one attenuation band on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureBucket {
    /// Day index within the detection window, ascending from the oldest day.
    pub day_index: u32,
    /// Attenuation band the duration was accumulated in.
    pub band: AttenuationBand,
    /// Accumulated exposure duration within the band.
    pub duration: Duration,
    /// Transmission risk level reported for the bucket's day.
    pub transmission_risk: TransmissionRiskLevel,
}

// ============================================================================
// SECTION: Exposure Summary
// ============================================================================

/// Aggregated, anonymized result of one exposure-detection run.
///
/// # Invariants
/// - Buckets are held in canonical ascending `(day_index, band,
///   transmission_risk)` order so that scoring iterates deterministically.
///   Deserialization normalizes through [`ExposureSummary::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ExposureSummaryWire")]
pub struct ExposureSummary {
    /// Days elapsed since the most recent matched exposure, when any matched.
    pub days_since_last_exposure: Option<u32>,
    /// Number of published infection keys the device's tokens matched.
    pub matched_key_count: u64,
    /// Per-day exposure buckets in canonical order.
    buckets: Vec<ExposureBucket>,
}

impl ExposureSummary {
    /// Creates a summary, normalizing buckets into canonical order.
    #[must_use]
    pub fn new(
        days_since_last_exposure: Option<u32>,
        matched_key_count: u64,
        mut buckets: Vec<ExposureBucket>,
    ) -> Self {
        buckets.sort_by_key(|bucket| (bucket.day_index, bucket.band, bucket.transmission_risk));
        Self {
            days_since_last_exposure,
            matched_key_count,
            buckets,
        }
    }

    /// Creates a summary with no matched exposures.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            days_since_last_exposure: None,
            matched_key_count: 0,
            buckets: Vec::new(),
        }
    }

    /// Returns the exposure buckets in canonical ascending order.
    #[must_use]
    pub fn buckets(&self) -> &[ExposureBucket] {
        &self.buckets
    }
}

/// Wire form of [`ExposureSummary`] before canonical normalization.
#[derive(Deserialize)]
struct ExposureSummaryWire {
    /// Days elapsed since the most recent matched exposure, when any matched.
    days_since_last_exposure: Option<u32>,
    /// Number of published infection keys the device's tokens matched.
    matched_key_count: u64,
    /// Per-day exposure buckets in arbitrary order.
    buckets: Vec<ExposureBucket>,
}

impl From<ExposureSummaryWire> for ExposureSummary {
    fn from(wire: ExposureSummaryWire) -> Self {
        Self::new(wire.days_since_last_exposure, wire.matched_key_count, wire.buckets)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when constructing summary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SummaryError {
    /// A transmission risk level lay outside the supported range.
    #[error("transmission risk level {0} outside supported range 1..=8")]
    TransmissionRiskOutOfRange(u8),
}
