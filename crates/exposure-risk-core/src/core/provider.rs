// crates/exposure-risk-core/src/core/provider.rs
// ============================================================================
// Module: Provider Configuration
// Description: Staleness and cadence policy for detection results.
// Purpose: Control how long a detection result stays trustworthy.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The provider configuration is the policy envelope around detection runs:
//! how long a result stays valid, how far apart runs are scheduled, and
//! whether the run was triggered automatically or explicitly by the user.
//! The engine consumes it as an immutable snapshot; scheduling of runs is a
//! host responsibility.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Detection Mode
// ============================================================================

/// How the detection run producing a summary was triggered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMode {
    /// Run was scheduled by the host; staleness gating applies.
    #[default]
    Automatic,
    /// Run was explicitly triggered by the user; an explicit check is always
    /// considered fresh enough, so staleness gating is skipped.
    Manual,
}

// ============================================================================
// SECTION: Provider Configuration
// ============================================================================

/// Staleness and cadence policy for exposure detection results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfiguration {
    /// Maximum age of a detection result before it is considered stale.
    pub detection_validity: Duration,
    /// Minimum spacing between detection runs. Informational to the engine,
    /// except as the minimum tracing-coverage reference.
    pub detection_interval: Duration,
    /// Trigger mode of the detection run under evaluation.
    pub detection_mode: DetectionMode,
}
