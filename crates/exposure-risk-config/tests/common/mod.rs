// crates/exposure-risk-config/tests/common/mod.rs
// ============================================================================
// Module: Config Test Helpers
// Description: Shared fixtures for configuration tests.
// ============================================================================
//! ## Overview
//! Shared helpers producing minimal valid configurations for mutation-based
//! validation tests.

use exposure_risk_config::ConfigError;
use exposure_risk_config::ExposureRiskConfig;

/// Returns a minimal valid configuration built from defaults.
///
/// # Errors
///
/// Returns [`ConfigError`] when the built-in defaults fail validation.
pub fn minimal_config() -> Result<ExposureRiskConfig, ConfigError> {
    let config = ExposureRiskConfig::default();
    config.validate()?;
    Ok(config)
}
