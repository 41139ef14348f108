// crates/exposure-risk-config/src/config.rs
// ============================================================================
// Module: Exposure Risk Configuration
// Description: Configuration loading and validation for the risk engine.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: exposure-risk-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Missing or invalid configuration fails closed: a snapshot that cannot be
//! validated never reaches the calculator. Both sections carry complete
//! defaults so an empty file yields a working configuration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use exposure_risk_core::AttenuationWeights;
use exposure_risk_core::ConfigVersion;
use exposure_risk_core::DetectionMode;
use exposure_risk_core::ProviderConfiguration;
use exposure_risk_core::ScoringConfiguration;
use exposure_risk_core::TransmissionWeights;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "exposure-risk.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "EXPOSURE_RISK_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Number of transmission risk levels the weight table must cover.
pub const TRANSMISSION_WEIGHT_COUNT: usize = 8;
/// Upper bound on validity and interval windows in hours (two-week window).
pub const MAX_WINDOW_HOURS: u64 = 14 * 24;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Exposure risk engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExposureRiskConfig {
    /// Scoring snapshot section.
    #[serde(default)]
    pub scoring: ScoringSection,
    /// Provider policy section.
    #[serde(default)]
    pub provider: ProviderSection,
}

impl ExposureRiskConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit path, `EXPOSURE_RISK_CONFIG`, then
    /// `exposure-risk.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.provider.validate()?;
        Ok(())
    }

    /// Builds the validated core scoring snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the section is invalid.
    pub fn scoring_configuration(&self) -> Result<ScoringConfiguration, ConfigError> {
        self.scoring.to_core()
    }

    /// Builds the core provider policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the section is invalid.
    pub fn provider_configuration(&self) -> Result<ProviderConfiguration, ConfigError> {
        self.provider.to_core()
    }
}

// ============================================================================
// SECTION: Scoring Section
// ============================================================================

/// Scoring snapshot section of `exposure-risk.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSection {
    /// Version label of the snapshot.
    #[serde(default = "default_scoring_version")]
    pub version: String,
    /// Per-band attenuation weights.
    #[serde(default = "default_attenuation_weights")]
    pub attenuation_weights: AttenuationWeightsSection,
    /// Per-level transmission weights, one entry per level `1..=8`.
    #[serde(default = "default_transmission_weights")]
    pub transmission_weights: Vec<f64>,
    /// Lower clamp applied to the summed score.
    #[serde(default)]
    pub minimum_score: f64,
    /// Upper clamp applied to the summed score.
    #[serde(default = "default_maximum_score")]
    pub maximum_score: f64,
    /// Cut-point separating `low` from `increased`.
    #[serde(default = "default_increased_risk_threshold")]
    pub increased_risk_threshold: f64,
}

impl ScoringSection {
    /// Validates the section by building the core snapshot.
    fn validate(&self) -> Result<(), ConfigError> {
        self.to_core().map(|_| ())
    }

    /// Converts the section into the validated core snapshot.
    fn to_core(&self) -> Result<ScoringConfiguration, ConfigError> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::Invalid("scoring.version must be non-empty".to_string()));
        }
        if self.transmission_weights.len() != TRANSMISSION_WEIGHT_COUNT {
            return Err(ConfigError::Invalid(format!(
                "scoring.transmission_weights must contain exactly {TRANSMISSION_WEIGHT_COUNT} entries"
            )));
        }
        let mut levels = [0.0_f64; TRANSMISSION_WEIGHT_COUNT];
        levels.copy_from_slice(&self.transmission_weights);
        let scoring = ScoringConfiguration {
            version: ConfigVersion::new(self.version.clone()),
            attenuation_weights: AttenuationWeights {
                low: self.attenuation_weights.low,
                mid: self.attenuation_weights.mid,
                high: self.attenuation_weights.high,
            },
            transmission_weights: TransmissionWeights::new(levels),
            minimum_score: self.minimum_score,
            maximum_score: self.maximum_score,
            increased_risk_threshold: self.increased_risk_threshold,
        };
        scoring
            .validate()
            .map_err(|err| ConfigError::Invalid(format!("scoring: {err}")))?;
        Ok(scoring)
    }
}

impl Default for ScoringSection {
    fn default() -> Self {
        Self {
            version: default_scoring_version(),
            attenuation_weights: default_attenuation_weights(),
            transmission_weights: default_transmission_weights(),
            minimum_score: 0.0,
            maximum_score: default_maximum_score(),
            increased_risk_threshold: default_increased_risk_threshold(),
        }
    }
}

/// Per-band attenuation weight entries.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AttenuationWeightsSection {
    /// Weight for the low-attenuation band.
    pub low: f64,
    /// Weight for the mid-attenuation band.
    pub mid: f64,
    /// Weight for the high-attenuation band.
    pub high: f64,
}

// ============================================================================
// SECTION: Provider Section
// ============================================================================

/// Provider policy section of `exposure-risk.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSection {
    /// Maximum detection-result age in hours before it is stale.
    #[serde(default = "default_detection_validity_hours")]
    pub detection_validity_hours: u64,
    /// Minimum spacing between detection runs in hours.
    #[serde(default = "default_detection_interval_hours")]
    pub detection_interval_hours: u64,
    /// Trigger mode assumed for detection runs.
    #[serde(default)]
    pub detection_mode: DetectionMode,
}

impl ProviderSection {
    /// Validates the section bounds and cross-field rules.
    fn validate(&self) -> Result<(), ConfigError> {
        self.to_core().map(|_| ())
    }

    /// Converts the section into the core provider policy.
    fn to_core(&self) -> Result<ProviderConfiguration, ConfigError> {
        for (field, hours) in [
            ("provider.detection_validity_hours", self.detection_validity_hours),
            ("provider.detection_interval_hours", self.detection_interval_hours),
        ] {
            if hours == 0 {
                return Err(ConfigError::Invalid(format!("{field} must be at least 1")));
            }
            if hours > MAX_WINDOW_HOURS {
                return Err(ConfigError::Invalid(format!(
                    "{field} exceeds maximum of {MAX_WINDOW_HOURS} hours"
                )));
            }
        }
        if self.detection_validity_hours < self.detection_interval_hours {
            return Err(ConfigError::Invalid(
                "provider.detection_validity_hours must be >= provider.detection_interval_hours"
                    .to_string(),
            ));
        }
        Ok(ProviderConfiguration {
            detection_validity: Duration::from_secs(self.detection_validity_hours * 3600),
            detection_interval: Duration::from_secs(self.detection_interval_hours * 3600),
            detection_mode: self.detection_mode,
        })
    }
}

impl Default for ProviderSection {
    fn default() -> Self {
        Self {
            detection_validity_hours: default_detection_validity_hours(),
            detection_interval_hours: default_detection_interval_hours(),
            detection_mode: DetectionMode::default(),
        }
    }
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default scoring snapshot version label.
fn default_scoring_version() -> String {
    "v1".to_string()
}

/// Default per-band attenuation weights.
const fn default_attenuation_weights() -> AttenuationWeightsSection {
    AttenuationWeightsSection {
        low: 1.0,
        mid: 0.5,
        high: 0.0,
    }
}

/// Default per-level transmission weights.
fn default_transmission_weights() -> Vec<f64> {
    vec![0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0]
}

/// Default upper score clamp.
const fn default_maximum_score() -> f64 {
    100.0
}

/// Default cut-point separating `low` from `increased`.
const fn default_increased_risk_threshold() -> f64 {
    15.0
}

/// Default detection validity window in hours.
const fn default_detection_validity_hours() -> u64 {
    24
}

/// Default detection interval in hours.
const fn default_detection_interval_hours() -> u64 {
    24
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}
