// crates/exposure-risk-config/tests/load_validation.rs
// ============================================================================
// Module: Config Load Tests
// Description: File loading limits and fail-closed behavior.
// ============================================================================
//! ## Overview
//! Ensures file loading enforces size limits, rejects malformed payloads,
//! and fails closed on unreadable paths.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic fixtures.")]
#![allow(clippy::expect_used, reason = "Tests use expect for explicit failure messages.")]

use std::fs;
use std::path::Path;

use exposure_risk_config::ConfigError;
use exposure_risk_config::ExposureRiskConfig;
use exposure_risk_config::config_toml_example;

// ============================================================================
// SECTION: Successful Loads
// ============================================================================

#[test]
fn test_load_example_config_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exposure-risk.toml");
    fs::write(&path, config_toml_example()).unwrap();

    let config = ExposureRiskConfig::load(Some(&path)).unwrap();
    assert!(config.scoring_configuration().is_ok());
}

#[test]
fn test_load_partial_config_applies_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exposure-risk.toml");
    fs::write(&path, "[provider]\ndetection_mode = \"manual\"\n").unwrap();

    let config = ExposureRiskConfig::load(Some(&path)).unwrap();
    assert_eq!(config.scoring.version, "v1");
    let provider = config.provider_configuration().unwrap();
    assert_eq!(provider.detection_mode, exposure_risk_core::DetectionMode::Manual);
}

// ============================================================================
// SECTION: Fail-Closed Behavior
// ============================================================================

#[test]
fn test_missing_file_fails_closed() {
    let result = ExposureRiskConfig::load(Some(Path::new("/nonexistent/exposure-risk.toml")));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_oversized_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exposure-risk.toml");
    fs::write(&path, "#".repeat(2 * 1024 * 1024)).unwrap();

    let result = ExposureRiskConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Invalid(message)) if message.contains("size limit")));
}

#[test]
fn test_malformed_toml_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exposure-risk.toml");
    fs::write(&path, "[scoring\nversion = ").unwrap();

    let result = ExposureRiskConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_invalid_values_rejected_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exposure-risk.toml");
    fs::write(&path, "[scoring]\nincreased_risk_threshold = -3.0\n").unwrap();

    let result = ExposureRiskConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_non_utf8_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exposure-risk.toml");
    fs::write(&path, [0xff_u8, 0xfe, 0x00, 0x01]).unwrap();

    let result = ExposureRiskConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Invalid(message)) if message.contains("utf-8")));
}
