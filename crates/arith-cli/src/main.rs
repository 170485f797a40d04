// crates/arith-cli/src/main.rs
// ============================================================================
// Module: Arith CLI Entry Point
// Description: Command dispatcher for integer arithmetic evaluation.
// Purpose: Evaluate one operation per invocation with explicit overflow rules.
// Dependencies: clap, arith-core, arith-config, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! The `arith` CLI evaluates `add`, `sub` or `mul` on two `i64` operands and
//! prints the result as text or JSON. Defaults come from `arith.toml` (or
//! `ARITH_CONFIG`) and are overridden by flags. All user-facing strings are
//! routed through the i18n catalog.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use arith_cli::i18n::Locale;
use arith_cli::i18n::set_locale;
use arith_cli::logging::LOG_ENV;
use arith_cli::logging::init_logging;
use arith_cli::t;
use arith_config::ArithConfig;
use arith_config::OutputFormat;
use arith_core::Evaluation;
use arith_core::Operation;
use arith_core::OverflowPolicy;
use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use clap::error::ErrorKind;
use thiserror::Error;
use tracing::debug;
use tracing::info;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "ARITH_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "arith", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `ARITH_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Path to the config file (overrides `ARITH_CONFIG`).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Overflow handling (overrides the config file).
    #[arg(long, value_enum, value_name = "POLICY", global = true)]
    overflow: Option<OverflowArg>,
    /// Output format (overrides the config file).
    #[arg(long, value_enum, value_name = "FORMAT", global = true)]
    format: Option<FormatArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Add two integers.
    Add(OperandArgs),
    /// Subtract the second integer from the first.
    Sub(OperandArgs),
    /// Multiply two integers.
    Mul(OperandArgs),
    /// Evaluate an operation named by label or symbol.
    Eval(EvalCommand),
    /// List supported operations.
    Ops,
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Operand pair shared by the operation subcommands.
#[derive(Args, Debug)]
struct OperandArgs {
    /// Left-hand operand.
    #[arg(allow_negative_numbers = true)]
    lhs: i64,
    /// Right-hand operand.
    #[arg(allow_negative_numbers = true)]
    rhs: i64,
}

/// Arguments for `eval`.
#[derive(Args, Debug)]
struct EvalCommand {
    /// Operation label (`add`, `sub`, `mul`) or symbol (`+`, `-`, `*`).
    #[arg(value_parser = Operation::parse)]
    operation: Operation,
    /// Operands to evaluate.
    #[command(flatten)]
    operands: OperandArgs,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Load and validate the config file.
    Validate,
}

/// CLI language selection.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

/// CLI overflow policy selection.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OverflowArg {
    /// Two's-complement wraparound.
    Wrapping,
    /// Fail on overflow.
    Checked,
    /// Clamp to `i64` bounds.
    Saturating,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(value: OverflowArg) -> Self {
        match value {
            OverflowArg::Wrapping => Self::Wrapping,
            OverflowArg::Checked => Self::Checked,
            OverflowArg::Saturating => Self::Saturating,
        }
    }
}

/// CLI output format selection.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum FormatArg {
    /// Bare result value.
    Text,
    /// JSON evaluation record.
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Effective evaluation settings after merging flags over config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settings {
    /// Overflow handling.
    overflow: OverflowPolicy,
    /// Output format.
    format: OutputFormat,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
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
    let args: Vec<OsString> = std::env::args_os().collect();
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(&err, &args),
    };
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    apply_locale(locale)?;

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let (operation, operands) = match command {
        Commands::Add(operands) => (Operation::Add, operands),
        Commands::Sub(operands) => (Operation::Sub, operands),
        Commands::Mul(operands) => (Operation::Mul, operands),
        Commands::Eval(command) => (command.operation, command.operands),
        Commands::Ops => return command_ops(),
        Commands::Config {
            command,
        } => match command {
            ConfigCommand::Validate => {
                let config = load_config(cli.config.as_deref())?;
                return command_config_validate(&config);
            }
        },
    };

    let config = load_config(cli.config.as_deref())?;
    let settings = resolve_settings(cli.overflow, cli.format, &config);
    debug!(
        overflow = %settings.overflow,
        json = matches!(settings.format, OutputFormat::Json),
        "resolved settings"
    );
    command_evaluate(operation, &operands, settings)
}

/// Handles argument errors: help and version print and succeed, the rest fail localized.
fn handle_parse_error(err: &clap::Error, args: &[OsString]) -> CliResult<ExitCode> {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        let rendered = err.render().to_string();
        write_stdout_line(rendered.trim_end())
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(lang_hint(args), env_lang.as_deref()).unwrap_or(Locale::En);
    apply_locale(locale)?;
    Err(CliError::new(t!("cli.args_invalid", error = clap_message(err))))
}

/// Sets the process locale and prints the translation disclaimer when needed.
fn apply_locale(locale: Locale) -> CliResult<()> {
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }
    Ok(())
}

/// Recovers `--lang` from raw arguments that failed to parse.
fn lang_hint(args: &[OsString]) -> Option<LangArg> {
    let mut iter = args.iter().skip(1).filter_map(|arg| arg.to_str());
    while let Some(arg) = iter.next() {
        let value = if arg == "--lang" {
            iter.next()
        } else {
            arg.strip_prefix("--lang=")
        };
        if let Some(value) = value {
            return LangArg::from_str(value, true).ok();
        }
    }
    None
}

/// Extracts the first line of a clap error without its `error:` prefix.
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).trim().to_string()
}

/// Loads config and installs logging for commands that evaluate.
fn load_config(path: Option<&Path>) -> CliResult<ArithConfig> {
    let config = ArithConfig::load(path)
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let env_filter = std::env::var(LOG_ENV).ok();
    init_logging(config.logging.level, env_filter.as_deref()).map_err(|err| {
        CliError::new(t!("logging.init_failed", filter = err.filter, error = err.message))
    })?;
    Ok(config)
}

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Resolves the active locale from the flag, then the environment.
fn resolve_locale(flag: Option<LangArg>, env_value: Option<&str>) -> CliResult<Locale> {
    if let Some(flag) = flag {
        return Ok(flag.into());
    }
    match env_value {
        None => Ok(Locale::En),
        Some(value) if value.trim().is_empty() => Ok(Locale::En),
        Some(value) => Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        }),
    }
}

/// Merges CLI flags over config defaults.
fn resolve_settings(
    overflow: Option<OverflowArg>,
    format: Option<FormatArg>,
    config: &ArithConfig,
) -> Settings {
    Settings {
        overflow: overflow.map_or(config.evaluation.overflow, Into::into),
        format: format.map_or(config.output.format, Into::into),
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Evaluates one operation and prints the result.
fn command_evaluate(
    operation: Operation,
    operands: &OperandArgs,
    settings: Settings,
) -> CliResult<ExitCode> {
    let evaluation = operation
        .evaluate(settings.overflow, operands.lhs, operands.rhs)
        .map_err(|err| CliError::new(t!("eval.failed", error = err)))?;
    info!(
        operation = operation.as_str(),
        lhs = evaluation.lhs,
        rhs = evaluation.rhs,
        result = evaluation.result,
        "evaluated"
    );
    let rendered = render_evaluation(&evaluation, settings.format)?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Lists supported operations with their symbols.
fn command_ops() -> CliResult<ExitCode> {
    for operation in Operation::ALL {
        write_stdout_line(&t!(
            "ops.entry",
            label = operation.as_str(),
            symbol = operation.symbol()
        ))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Reports the effective config after a successful load.
fn command_config_validate(config: &ArithConfig) -> CliResult<ExitCode> {
    let format = match config.output.format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
    };
    write_stdout_line(&t!(
        "config.validate.ok",
        overflow = config.evaluation.overflow,
        format = format,
        level = config.logging.level
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Output
// ============================================================================

/// Renders an evaluation in the requested format.
fn render_evaluation(evaluation: &Evaluation, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(evaluation.result.to_string()),
        OutputFormat::Json => serde_json::to_string(evaluation)
            .map_err(|err| CliError::new(t!("output.json_failed", error = err))),
    }
}

/// Prints the top-level help text.
fn show_help() -> CliResult<()> {
    let help = Cli::command().render_help().to_string();
    write_stdout_line(help.trim_end()).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
