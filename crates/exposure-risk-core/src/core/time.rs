// crates/exposure-risk-core/src/core/time.rs
// ============================================================================
// Module: Exposure Risk Time Model
// Description: Caller-supplied instants for staleness arithmetic.
// Purpose: Keep risk calculations deterministic by injecting all time values.
// Dependencies: serde, thiserror, time
// ============================================================================

//! ## Overview
//! The risk calculator never reads wall-clock time. Hosts supply both the
//! detection timestamp and the current instant as explicit [`Timestamp`]
//! values, which keeps repeated calculations over identical inputs
//! bit-identical and makes staleness behavior directly testable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Timestamp
// ============================================================================

/// Instant in unix-epoch milliseconds.
///
/// # Invariants
/// - Values are explicitly provided by callers; the core never reads the
///   system clock.
/// - No monotonicity is assumed; callers may pass a detection timestamp that
///   lies in the future of `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from unix-epoch milliseconds.
    #[must_use]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the instant as unix-epoch milliseconds.
    #[must_use]
    pub const fn unix_millis(self) -> i64 {
        self.0
    }

    /// Returns the elapsed duration since `earlier`, or `None` when `earlier`
    /// lies in the future of `self`.
    #[must_use]
    pub const fn checked_duration_since(self, earlier: Self) -> Option<Duration> {
        let Some(delta) = self.0.checked_sub(earlier.0) else {
            return None;
        };
        if delta < 0 {
            return None;
        }
        #[allow(
            clippy::cast_sign_loss,
            reason = "Negative deltas are rejected above; the cast is lossless."
        )]
        let millis = delta as u64;
        Some(Duration::from_millis(millis))
    }

    /// Parses an RFC 3339 timestamp string into a [`Timestamp`].
    ///
    /// # Errors
    ///
    /// Returns [`TimestampParseError`] when the input is not valid RFC 3339
    /// or lies outside the representable millisecond range.
    pub fn parse_rfc3339(input: &str) -> Result<Self, TimestampParseError> {
        let parsed = OffsetDateTime::parse(input, &Rfc3339)
            .map_err(|err| TimestampParseError::Format(err.to_string()))?;
        let millis = parsed.unix_timestamp_nanos() / 1_000_000;
        let millis = i64::try_from(millis).map_err(|_| TimestampParseError::OutOfRange)?;
        Ok(Self(millis))
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when parsing caller-supplied timestamp strings.
#[derive(Debug, Error)]
pub enum TimestampParseError {
    /// The input was not a valid RFC 3339 timestamp.
    #[error("invalid rfc 3339 timestamp: {0}")]
    Format(String),
    /// The instant does not fit the unix-millisecond range.
    #[error("timestamp outside representable unix-millisecond range")]
    OutOfRange,
}
