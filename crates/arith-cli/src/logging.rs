// crates/arith-cli/src/logging.rs
// ============================================================================
// Module: CLI Logging
// Description: Installs the stderr tracing subscriber for the CLI.
// Purpose: Keep diagnostics off stdout so results stay machine-readable.
// Dependencies: tracing-subscriber, arith-config
// ============================================================================

//! ## Overview
//! Diagnostics go to stderr through a compact `fmt` subscriber. The filter
//! comes from `ARITH_LOG` when set, otherwise from the configured
//! [`LogLevel`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use arith_config::LogLevel;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable carrying an explicit filter directive.
pub const LOG_ENV: &str = "ARITH_LOG";

// ============================================================================
// SECTION: Setup
// ============================================================================

/// Logging setup failure.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct LoggingError {
    /// Directive that failed to parse.
    pub filter: String,
    /// Parser diagnostic.
    pub message: String,
}

/// Picks the filter directive: a non-blank env override wins over `level`.
#[must_use]
pub fn filter_directive(level: LogLevel, env_value: Option<&str>) -> String {
    env_value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map_or_else(|| level.as_str().to_string(), ToString::to_string)
}

/// Builds an [`EnvFilter`] from a directive string.
///
/// # Errors
///
/// Returns [`LoggingError`] when the directive does not parse.
pub fn build_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|err| LoggingError {
        filter: directive.to_string(),
        message: err.to_string(),
    })
}

/// Installs the global subscriber. Later calls are no-ops.
///
/// # Errors
///
/// Returns [`LoggingError`] when the filter directive is invalid.
pub fn init_logging(level: LogLevel, env_value: Option<&str>) -> Result<(), LoggingError> {
    let filter = build_filter(&filter_directive(level, env_value))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
