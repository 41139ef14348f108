// crates/exposure-risk-core/src/core/mod.rs
// ============================================================================
// Module: Exposure Risk Core Types
// Description: Canonical value types for exposure risk classification.
// Purpose: Provide stable, serializable inputs and outputs for the calculator.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define exposure summaries, scoring and provider configuration
//! snapshots, device health signals, and the risk classification result.
//! Every type is an immutable value created before a calculation and
//! discarded after it; the engine holds no state between calls.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod fingerprint;
pub mod health;
pub mod provider;
pub mod risk;
pub mod scoring;
pub mod summary;
pub mod time;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use fingerprint::ConfigFingerprint;
pub use fingerprint::DEFAULT_FINGERPRINT_ALGORITHM;
pub use fingerprint::FingerprintAlgorithm;
pub use fingerprint::FingerprintError;
pub use fingerprint::fingerprint_canonical_json;
pub use health::ActiveTracing;
pub use health::PreconditionFailure;
pub use health::PreconditionVerdict;
pub use health::Preconditions;
pub use provider::DetectionMode;
pub use provider::ProviderConfiguration;
pub use risk::RiskLevel;
pub use risk::RiskResult;
pub use risk::RiskScore;
pub use risk::ScoreContribution;
pub use risk::UnknownReason;
pub use risk::risk_level_changed;
pub use scoring::AttenuationWeights;
pub use scoring::ConfigVersion;
pub use scoring::ScoringConfigError;
pub use scoring::ScoringConfiguration;
pub use scoring::TransmissionWeights;
pub use summary::AttenuationBand;
pub use summary::ExposureBucket;
pub use summary::ExposureSummary;
pub use summary::SummaryError;
pub use summary::TransmissionRiskLevel;
pub use time::Timestamp;
pub use time::TimestampParseError;
