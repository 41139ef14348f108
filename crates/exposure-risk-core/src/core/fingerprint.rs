// crates/exposure-risk-core/src/core/fingerprint.rs
// ============================================================================
// Module: Configuration Fingerprints
// Description: RFC 8785 canonical JSON digests for configuration snapshots.
// Purpose: Make persisted results attributable to the exact snapshot used.
// Dependencies: serde, serde_jcs, sha2
// ============================================================================

//! ## Overview
//! Scoring configurations are versioned snapshots; a result computed under
//! one snapshot must not be confused with one computed under another.
//! Fingerprints hash the canonical JSON form (RFC 8785 / JCS) of a snapshot
//! so the digest is stable across field ordering and serializer differences.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

// ============================================================================
// SECTION: Fingerprint Algorithm
// ============================================================================

/// Supported fingerprint digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FingerprintAlgorithm {
    /// SHA-256 digest over canonical JSON bytes.
    Sha256,
}

/// Default fingerprint algorithm for configuration snapshots.
pub const DEFAULT_FINGERPRINT_ALGORITHM: FingerprintAlgorithm = FingerprintAlgorithm::Sha256;

// ============================================================================
// SECTION: Fingerprint Value
// ============================================================================

/// Deterministic digest identifying a configuration snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFingerprint {
    /// Digest algorithm identifier.
    pub algorithm: FingerprintAlgorithm,
    /// Lowercase hex-encoded digest bytes.
    pub value: String,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when computing configuration fingerprints.
#[derive(Debug, Error)]
pub enum FingerprintError {
    /// JSON canonicalization failed.
    #[error("failed to canonicalize configuration json: {0}")]
    Canonicalization(String),
}

// ============================================================================
// SECTION: Fingerprint Computation
// ============================================================================

/// Fingerprints a serializable snapshot over its canonical JSON form.
///
/// # Errors
///
/// Returns [`FingerprintError::Canonicalization`] when serialization fails.
pub fn fingerprint_canonical_json<T: Serialize + ?Sized>(
    algorithm: FingerprintAlgorithm,
    value: &T,
) -> Result<ConfigFingerprint, FingerprintError> {
    let bytes =
        serde_jcs::to_vec(value).map_err(|err| FingerprintError::Canonicalization(err.to_string()))?;
    match algorithm {
        FingerprintAlgorithm::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(&bytes);
            let digest = hasher.finalize();
            Ok(ConfigFingerprint {
                algorithm: FingerprintAlgorithm::Sha256,
                value: hex_encode(&digest),
            })
        }
    }
}

// ============================================================================
// SECTION: Hex Encoding
// ============================================================================

/// Encodes bytes as a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}
