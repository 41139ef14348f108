// crates/exposure-risk-cli/src/main.rs
// ============================================================================
// Module: Exposure Risk CLI Entry Point
// Description: Command dispatcher for offline risk evaluation.
// Purpose: Evaluate one detection result against a local config snapshot.
// Dependencies: clap, exposure-risk-config, exposure-risk-core, serde, thiserror
// ============================================================================

//! ## Overview
//! The exposure risk CLI performs a single evaluation per invocation: it
//! loads a configuration snapshot and an exposure summary from local files,
//! takes the current instant from the command line (never from the system
//! clock), and prints the outcome as JSON. An unevaluable run (invalid
//! preconditions) exits with a distinct code so callers can tell it apart
//! from a present `unknown` result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use exposure_risk_config::ConfigError;
use exposure_risk_config::ExposureRiskConfig;
use exposure_risk_config::config_toml_example;
use exposure_risk_core::ActiveTracing;
use exposure_risk_core::CalculatorError;
use exposure_risk_core::DetectionMode;
use exposure_risk_core::EvaluationRequest;
use exposure_risk_core::ExposureSummary;
use exposure_risk_core::Preconditions;
use exposure_risk_core::RiskCalculator;
use exposure_risk_core::RiskLevel;
use exposure_risk_core::RiskResult;
use exposure_risk_core::Timestamp;
use exposure_risk_core::TimestampParseError;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of an exposure summary JSON input.
const MAX_SUMMARY_BYTES: usize = 1024 * 1024;
/// Exit code signalling an unevaluable run (invalid preconditions).
const UNEVALUABLE_EXIT_CODE: u8 = 2;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Exposure risk command-line interface.
#[derive(Debug, Parser)]
#[command(name = "exposure-risk", version, about = "Deterministic exposure risk classification")]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates risk for one detection result.
    Evaluate(EvaluateCommand),
    /// Configuration inspection commands.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for the `evaluate` command.
#[derive(Debug, Args)]
struct EvaluateCommand {
    /// Path to the configuration file (defaults to resolution rules).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Path to the exposure summary JSON file.
    #[arg(long)]
    summary: PathBuf,
    /// RFC 3339 instant the summary was produced.
    #[arg(long)]
    detected_at: String,
    /// RFC 3339 current instant, injected for determinism.
    #[arg(long)]
    now: String,
    /// Active tracing coverage in hours.
    #[arg(long)]
    tracing_hours: u64,
    /// Risk level produced by the previous calculation, when one exists.
    #[arg(long, value_enum)]
    previous_level: Option<PreviousLevel>,
    /// Treat the run as user-triggered, skipping the staleness gate.
    #[arg(long)]
    manual: bool,
    /// Mark exposure-notification authorization as missing.
    #[arg(long)]
    authorization_missing: bool,
    /// Mark the Bluetooth radio as disabled.
    #[arg(long)]
    bluetooth_disabled: bool,
    /// Mark the OS exposure subsystem as inactive.
    #[arg(long)]
    subsystem_inactive: bool,
}

/// Configuration subcommands.
#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Validates a configuration file.
    Validate(ConfigValidateCommand),
    /// Prints the canonical example configuration.
    Example,
}

/// Arguments for `config validate`.
#[derive(Debug, Args)]
struct ConfigValidateCommand {
    /// Path to the configuration file (defaults to resolution rules).
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Previous risk level accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PreviousLevel {
    /// Prior calculation could not determine risk.
    Unknown,
    /// Prior calculation classified low risk.
    Low,
    /// Prior calculation classified increased risk.
    Increased,
}

impl From<PreviousLevel> for RiskLevel {
    fn from(level: PreviousLevel) -> Self {
        match level {
            PreviousLevel::Unknown => Self::Unknown,
            PreviousLevel::Low => Self::Low,
            PreviousLevel::Increased => Self::Increased,
        }
    }
}

// ============================================================================
// SECTION: Output Payloads
// ============================================================================

/// JSON payload emitted by the `evaluate` command.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
enum EvaluationOutcome {
    /// A result was produced.
    Evaluated {
        /// The computed risk result.
        result: RiskResult,
    },
    /// Preconditions made the run unevaluable; no result exists.
    Unevaluable,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error type.
#[derive(Debug, Error)]
enum CliError {
    /// Configuration loading or validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Calculator construction failed.
    #[error(transparent)]
    Calculator(#[from] CalculatorError),
    /// A timestamp argument could not be parsed.
    #[error(transparent)]
    Timestamp(#[from] TimestampParseError),
    /// Summary file could not be read.
    #[error("summary io error: {0}")]
    SummaryIo(String),
    /// Summary file could not be decoded.
    #[error("summary parse error: {0}")]
    SummaryParse(String),
    /// Writing output failed.
    #[error("output error: {0}")]
    Output(String),
}

/// Result alias for CLI command handlers.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Command::Evaluate(command) => command_evaluate(&command),
        Command::Config(command) => command_config(&command),
    }
}

// ============================================================================
// SECTION: Evaluate Command
// ============================================================================

/// Runs one risk evaluation and prints the outcome as JSON.
fn command_evaluate(command: &EvaluateCommand) -> CliResult<ExitCode> {
    let config = ExposureRiskConfig::load(command.config.as_deref())?;
    let scoring = config.scoring_configuration()?;
    let mut provider = config.provider_configuration()?;
    if command.manual {
        provider.detection_mode = DetectionMode::Manual;
    }

    let calculator = RiskCalculator::new(scoring, provider)?;
    let request = EvaluationRequest {
        summary: read_summary(&command.summary)?,
        detected_at: Timestamp::parse_rfc3339(&command.detected_at)?,
        now: Timestamp::parse_rfc3339(&command.now)?,
        tracing: ActiveTracing::new(Duration::from_secs(
            command.tracing_hours.saturating_mul(3600),
        )),
        preconditions: Preconditions {
            authorized: !command.authorization_missing,
            bluetooth_enabled: !command.bluetooth_disabled,
            exposure_subsystem_active: !command.subsystem_inactive,
        },
        previous_level: command.previous_level.map(RiskLevel::from),
    };

    match calculator.evaluate(&request) {
        Some(result) => {
            write_json(&EvaluationOutcome::Evaluated {
                result,
            })?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            write_json(&EvaluationOutcome::Unevaluable)?;
            Ok(ExitCode::from(UNEVALUABLE_EXIT_CODE))
        }
    }
}

/// Reads and decodes an exposure summary JSON file with a size limit.
fn read_summary(path: &Path) -> CliResult<ExposureSummary> {
    let bytes = fs::read(path).map_err(|err| CliError::SummaryIo(err.to_string()))?;
    if bytes.len() > MAX_SUMMARY_BYTES {
        return Err(CliError::SummaryParse("summary file exceeds size limit".to_string()));
    }
    serde_json::from_slice(&bytes).map_err(|err| CliError::SummaryParse(err.to_string()))
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches configuration subcommands.
fn command_config(command: &ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(validate) => command_config_validate(validate),
        ConfigCommand::Example => {
            write_stdout(&config_toml_example())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Validates a configuration file and reports its fingerprint.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let config = ExposureRiskConfig::load(command.config.as_deref())?;
    let scoring = config.scoring_configuration()?;
    let fingerprint = scoring.fingerprint().map_err(CalculatorError::from)?;
    write_stdout_line(&format!(
        "configuration valid: scoring {} fingerprint {}",
        scoring.version, fingerprint.value
    ))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Serializes a value as pretty JSON and writes it to stdout.
fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::Output(err.to_string()))?;
    write_stdout_line(&payload)
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}").map_err(|err| CliError::Output(err.to_string()))
}

/// Writes raw text to stdout without adding a newline.
fn write_stdout(message: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(message.as_bytes()).map_err(|err| CliError::Output(err.to_string()))
}

/// Writes an error to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let mut stderr = std::io::stderr();
    let _ = writeln!(&mut stderr, "error: {message}");
    ExitCode::FAILURE
}

// ============================================================================
// SECTION: Tests
// ============================================================================
