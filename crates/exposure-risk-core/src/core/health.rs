// crates/exposure-risk-core/src/core/health.rs
// ============================================================================
// Module: Device Health Signals
// Description: Tracing coverage and precondition facts for a calculation.
// Purpose: Collapse environment facts into a single validity verdict.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A trustworthy classification needs two kinds of environment evidence:
//! preconditions (authorization granted, radio on, exposure subsystem
//! active) and tracing coverage (how long the device actually scanned within
//! the window). Both are observed by the host and passed in as values; the
//! engine only interprets them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Active Tracing
// ============================================================================

/// Duration the device actively performed exposure scanning within the
/// relevant window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTracing {
    /// Accumulated active scanning time.
    pub interval: Duration,
}

impl ActiveTracing {
    /// Creates an active tracing value from an accumulated interval.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
        }
    }
}

// ============================================================================
// SECTION: Preconditions
// ============================================================================

/// Boolean environment facts required for a trustworthy calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preconditions {
    /// Exposure-notification authorization has been granted.
    pub authorized: bool,
    /// Bluetooth radio is enabled.
    pub bluetooth_enabled: bool,
    /// OS-level exposure subsystem is active.
    pub exposure_subsystem_active: bool,
}

impl Preconditions {
    /// Returns preconditions with every fact satisfied.
    #[must_use]
    pub const fn all_satisfied() -> Self {
        Self {
            authorized: true,
            bluetooth_enabled: true,
            exposure_subsystem_active: true,
        }
    }

    /// Collapses the facts into a single validity verdict.
    ///
    /// Facts are inspected in a fixed order (authorization, Bluetooth,
    /// subsystem) and the first unsatisfied one names the failure.
    #[must_use]
    pub const fn verdict(self) -> PreconditionVerdict {
        if !self.authorized {
            return PreconditionVerdict::Invalid(PreconditionFailure::AuthorizationMissing);
        }
        if !self.bluetooth_enabled {
            return PreconditionVerdict::Invalid(PreconditionFailure::BluetoothDisabled);
        }
        if !self.exposure_subsystem_active {
            return PreconditionVerdict::Invalid(PreconditionFailure::SubsystemInactive);
        }
        PreconditionVerdict::Valid
    }
}

// ============================================================================
// SECTION: Verdicts
// ============================================================================

/// Single validity verdict derived from the precondition facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", content = "failure", rename_all = "snake_case")]
pub enum PreconditionVerdict {
    /// Every fact is satisfied; a calculation may proceed.
    Valid,
    /// At least one fact is unsatisfied; no result can be produced.
    Invalid(PreconditionFailure),
}

/// First unsatisfied precondition fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreconditionFailure {
    /// Exposure-notification authorization has not been granted.
    AuthorizationMissing,
    /// Bluetooth radio is disabled.
    BluetoothDisabled,
    /// OS-level exposure subsystem is not active.
    SubsystemInactive,
}

impl fmt::Display for PreconditionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AuthorizationMissing => "exposure notification authorization missing",
            Self::BluetoothDisabled => "bluetooth disabled",
            Self::SubsystemInactive => "exposure subsystem inactive",
        };
        f.write_str(name)
    }
}
