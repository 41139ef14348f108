// crates/exposure-risk-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for the exposure risk configuration. The payload
//! mirrors the built-in defaults so tooling and docs stay in sync.

/// Returns a canonical example `exposure-risk.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[scoring]
version = "v1"
minimum_score = 0.0
maximum_score = 100.0
increased_risk_threshold = 15.0
# One weight per transmission risk level 1..=8.
transmission_weights = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0]

[scoring.attenuation_weights]
low = 1.0
mid = 0.5
high = 0.0

[provider]
detection_validity_hours = 24
detection_interval_hours = 24
detection_mode = "automatic"
"#,
    )
}
