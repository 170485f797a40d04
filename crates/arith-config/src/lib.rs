// crates/arith-config/src/lib.rs
// ============================================================================
// Module: Arith Config
// Description: Configuration model and loader for the arith CLI.
// Purpose: Load TOML configuration with strict, fail-closed input guards.
// Dependencies: arith-core, serde, thiserror, toml, tracing
// ============================================================================

//! ## Overview
//! [`ArithConfig`] carries the defaults the CLI applies when flags are
//! absent: overflow policy, output format and log level. Loading resolves
//! the path from an explicit argument, then `ARITH_CONFIG`, then
//! `arith.toml` in the working directory. Only the implicit default file may
//! be missing; explicit paths must exist.
//!
//! ## Invariants
//! - Config files larger than [`MAX_CONFIG_FILE_SIZE`] are rejected.
//! - Config files must be UTF-8 TOML without unknown fields.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use arith_core::OverflowPolicy;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Default config filename looked up in the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "arith.toml";
/// Environment variable override for the config path.
pub const CONFIG_ENV_VAR: &str = "ARITH_CONFIG";
/// Maximum allowed config file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum total path length for the config path.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Arith configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArithConfig {
    /// Evaluation defaults.
    #[serde(default)]
    pub evaluation: EvaluationConfig,
    /// Output defaults.
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging defaults.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Evaluation settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluationConfig {
    /// Overflow handling for all operations.
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

/// Output settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Result rendering format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Result rendering format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Bare result value.
    #[default]
    Text,
    /// JSON evaluation record.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level emitted to stderr.
    #[serde(default)]
    pub level: LogLevel,
}

/// Log verbosity levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Informational messages.
    Info,
    /// Debug diagnostics.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Returns the filter directive for this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Path Resolution
// ============================================================================

/// Config path chosen by [`resolve_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Path to read.
    pub path: PathBuf,
    /// Whether a missing file is an error.
    pub required: bool,
}

/// Resolves the config path from an explicit argument or env override.
#[must_use]
pub fn resolve_path(explicit: Option<&Path>, env_value: Option<OsString>) -> ResolvedPath {
    if let Some(path) = explicit {
        return ResolvedPath {
            path: path.to_path_buf(),
            required: true,
        };
    }
    if let Some(value) = env_value.filter(|value| !value.is_empty()) {
        return ResolvedPath {
            path: PathBuf::from(value),
            required: true,
        };
    }
    ResolvedPath {
        path: PathBuf::from(DEFAULT_CONFIG_NAME),
        required: false,
    }
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl ArithConfig {
    /// Loads configuration, consulting `ARITH_CONFIG` when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the path is invalid, the file cannot be
    /// read, or its contents fail to parse.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_resolved(&resolve_path(path, std::env::var_os(CONFIG_ENV_VAR)))
    }

    /// Loads configuration from an already resolved path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the path is invalid, the file cannot be
    /// read, or its contents fail to parse.
    pub fn load_resolved(resolved: &ResolvedPath) -> Result<Self, ConfigError> {
        validate_path(&resolved.path)?;
        if !resolved.required && !resolved.path.exists() {
            debug!(path = %resolved.path.display(), "no config file found; using defaults");
            return Ok(Self::default());
        }
        debug!(path = %resolved.path.display(), "loading config");
        let bytes = fs::read(&resolved.path)
            .map_err(|err| ConfigError::Io(format!("{}: {err}", resolved.path.display())))?;
        Self::from_bytes(&bytes)
    }

    /// Parses configuration from raw file bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the input is oversized, not UTF-8, or
    /// not valid config TOML.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
    }
}

/// Validates config path length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.as_os_str().to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parse error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration.
    #[error("invalid config: {0}")]
    Invalid(String),
}
