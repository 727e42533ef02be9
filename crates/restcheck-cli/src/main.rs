// crates/restcheck-cli/src/main.rs
// ============================================================================
// Module: Restcheck CLI Entry Point
// Description: Command dispatcher for contract check runs and config tooling.
// Purpose: Run the contract checks from the command line with clear reports.
// Dependencies: clap, restcheck-core, restcheck-verifier, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The Restcheck CLI runs the users-resource contract checks against the
//! configured service and renders the outcome as text or JSON. The exit code
//! reflects the run: success only when every selected check passed. Config
//! resolution order is compiled-in defaults, then an optional TOML file,
//! then command-line overrides.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use restcheck_core::CheckId;
use restcheck_core::CheckReport;
use restcheck_core::CheckStatus;
use restcheck_core::RunReport;
use restcheck_verifier::ContractVerifier;
use restcheck_verifier::VerifierConfig;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "restcheck", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the contract checks against the configured service.
    Check(CheckCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration for the `check` command.
#[derive(Args, Debug)]
struct CheckCommand {
    /// Optional config file path (defaults to restcheck.toml when present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Override the configured base URL.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
    /// Allow cleartext HTTP base URLs (local stubs only).
    #[arg(long, action = ArgAction::SetTrue)]
    allow_http: bool,
    /// Checks to run (defaults to all three).
    #[arg(long = "check", value_enum, value_name = "CHECK")]
    checks: Vec<CheckArg>,
    /// Report output format.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    output: OutputFormatArg,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a Restcheck configuration file.
    Validate(ConfigValidateCommand),
}

/// Configuration for the `config validate` command.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Config file path to validate.
    #[arg(long, value_name = "PATH")]
    config: PathBuf,
}

/// Check selector argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CheckArg {
    /// Read the seed record and compare it against the snapshot.
    Read,
    /// Create a record and verify the echoed payload and generated id.
    Create,
    /// Replace the seed record and verify the echoed payload.
    Update,
}

impl From<CheckArg> for CheckId {
    fn from(check: CheckArg) -> Self {
        match check {
            CheckArg::Read => Self::Read,
            CheckArg::Create => Self::Create,
            CheckArg::Update => Self::Update,
        }
    }
}

/// Report output format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormatArg {
    /// Human-readable line-per-check output.
    Text,
    /// Pretty-printed JSON run report.
    Json,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("restcheck {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Check(command) => command_check(&command),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

// ============================================================================
// SECTION: Check Command
// ============================================================================

/// Executes the `check` command.
fn command_check(command: &CheckCommand) -> CliResult<ExitCode> {
    let config = resolve_config(command)?;
    let verifier = ContractVerifier::new(config)
        .map_err(|err| CliError::new(format!("verifier init failed: {err}")))?;
    let checks = selected_checks(&command.checks);
    let report = verifier.run_checks(&checks);

    match command.output {
        OutputFormatArg::Text => render_text(&report)?,
        OutputFormatArg::Json => render_json(&report)?,
    }

    if report.all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Resolves the effective config from file and command-line overrides.
fn resolve_config(command: &CheckCommand) -> CliResult<VerifierConfig> {
    let mut config = VerifierConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(err.to_string()))?;
    if let Some(base_url) = &command.base_url {
        config.base_url = base_url.clone();
    }
    if command.allow_http {
        config.allow_http = true;
    }
    config.validate().map_err(|err| CliError::new(err.to_string()))?;
    Ok(config)
}

/// Maps check selectors to check identifiers, defaulting to all checks.
fn selected_checks(checks: &[CheckArg]) -> Vec<CheckId> {
    if checks.is_empty() {
        CheckId::ALL.to_vec()
    } else {
        checks.iter().map(|check| CheckId::from(*check)).collect()
    }
}

// ============================================================================
// SECTION: Config Command
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the `config validate` command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let config = VerifierConfig::load(Some(&command.config))
        .map_err(|err| CliError::new(err.to_string()))?;
    write_stdout_line(&format!(
        "config ok: base_url={} timeout_ms={} max_response_bytes={} allow_http={}",
        config.base_url, config.timeout_ms, config.max_response_bytes, config.allow_http
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Report Rendering
// ============================================================================

/// Renders a run report as line-per-check text.
fn render_text(report: &RunReport) -> CliResult<()> {
    for check in &report.checks {
        write_stdout_line(&render_check_line(check))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    write_stdout_line(&render_summary_line(report))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

/// Renders a run report as pretty-printed JSON.
fn render_json(report: &RunReport) -> CliResult<()> {
    let rendered = serde_json::to_string_pretty(report)
        .map_err(|err| CliError::new(format!("report serialization failed: {err}")))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

/// Renders one check outcome line.
fn render_check_line(report: &CheckReport) -> String {
    match report.status {
        CheckStatus::Passed => {
            format!("check {}: passed ({} assertions)", report.check, report.assertions_passed)
        }
        CheckStatus::Failed => {
            let detail = report
                .failure
                .as_ref()
                .map_or_else(|| "assertion failed".to_string(), ToString::to_string);
            format!(
                "check {}: failed after {} passed assertions: {detail}",
                report.check, report.assertions_passed
            )
        }
        CheckStatus::Error => {
            let detail = report.error.as_deref().unwrap_or("unknown error");
            format!("check {}: error: {detail}", report.check)
        }
    }
}

/// Renders the aggregate summary line.
fn render_summary_line(report: &RunReport) -> String {
    format!(
        "{} checks: {} passed, {} failed, {} errors",
        report.checks.len(),
        report.passed_count(),
        report.failed_count(),
        report.error_count()
    )
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output stream failure message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

/// Prints top-level help when no subcommand is given.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}
