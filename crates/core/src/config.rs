//! Configuration for the [`crate::Boundary`].
//!
//! Sources are layered: defaults < TOML file < `OUTCOME_*` environment
//! variables. The result is validated once and read-only afterwards.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const ENV_FORMAT: &str = "OUTCOME_FORMAT";
pub const ENV_SUCCESS_CODE: &str = "OUTCOME_SUCCESS_CODE";
pub const ENV_FAILURE_CODE: &str = "OUTCOME_FAILURE_CODE";
pub const ENV_LOG: &str = "OUTCOME_LOG";

// =============================================================================
// Output Format
// =============================================================================

/// How a settled outcome is rendered.
///
/// ```
/// use outcome_core::OutputFormat;
///
/// assert_eq!("JSON".parse::<OutputFormat>().ok(), Some(OutputFormat::Json));
/// assert_eq!(OutputFormat::default(), OutputFormat::Text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Result: …` / `Error: …` lines.
    #[default]
    Text,
    /// Compact JSON.
    Json,
    /// Indented JSON.
    Pretty,
}

impl OutputFormat {
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json | Self::Pretty)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ConfigError::invalid(
                "format",
                format!("'{s}' is not one of text, json, pretty"),
            )),
        }
    }
}

// =============================================================================
// Boundary Configuration
// =============================================================================

/// Settings for turning a terminal outcome into an external effect.
///
/// ```
/// use outcome_core::{BoundaryConfig, OutputFormat};
///
/// let config = BoundaryConfig::from_toml_str("format = \"json\"\nfailure_code = 3\n")?;
/// assert_eq!(config.format, OutputFormat::Json);
/// assert_eq!(config.failure_code, 3);
/// assert_eq!(config.success_code, 0);
/// # Ok::<(), outcome_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoundaryConfig {
    pub format: OutputFormat,
    pub success_code: u8,
    pub failure_code: u8,
    /// Emit a `tracing` event for every settled outcome.
    pub log_outcomes: bool,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            success_code: 0,
            failure_code: 1,
            log_outcomes: true,
        }
    }
}

impl BoundaryConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// `ConfigError::Parse` for malformed TOML or unknown keys,
    /// `ConfigError::Invalid` when validation fails.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(source)
            .map_err(ConfigError::from)
            .and_then(Self::validate)
    }

    /// Read, parse and validate a TOML file.
    ///
    /// # Errors
    ///
    /// `ConfigError::Read` when the file cannot be read, plus everything
    /// [`BoundaryConfig::from_toml_str`] returns.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        std::fs::read_to_string(path)
            .map_err(|e| ConfigError::read(path, e.to_string()))
            .and_then(|source| Self::from_toml_str(&source))
    }

    /// Apply `OUTCOME_*` overrides from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` when a variable holds an unparseable value or
    /// the merged config fails validation.
    pub fn with_env<F>(self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = lookup(ENV_FORMAT)
            .map(|raw| raw.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or(self.format);
        let success_code = lookup(ENV_SUCCESS_CODE)
            .map(|raw| parse_code(ENV_SUCCESS_CODE, &raw))
            .transpose()?
            .unwrap_or(self.success_code);
        let failure_code = lookup(ENV_FAILURE_CODE)
            .map(|raw| parse_code(ENV_FAILURE_CODE, &raw))
            .transpose()?
            .unwrap_or(self.failure_code);
        let log_outcomes = lookup(ENV_LOG)
            .map(|raw| parse_flag(ENV_LOG, &raw))
            .transpose()?
            .unwrap_or(self.log_outcomes);

        Self {
            format,
            success_code,
            failure_code,
            log_outcomes,
        }
        .validate()
    }

    /// [`BoundaryConfig::with_env`] against the process environment.
    ///
    /// # Errors
    ///
    /// See [`BoundaryConfig::with_env`].
    pub fn with_process_env(self) -> Result<Self, ConfigError> {
        self.with_env(|key| std::env::var(key).ok())
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` when success and failure share an exit code.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.success_code == self.failure_code {
            return Err(ConfigError::invalid(
                "failure_code",
                format!(
                    "must differ from success_code (both are {})",
                    self.success_code
                ),
            ));
        }
        Ok(self)
    }
}

fn parse_code(field: &str, raw: &str) -> Result<u8, ConfigError> {
    raw.trim()
        .parse::<u8>()
        .map_err(|e| ConfigError::invalid(field, format!("'{raw}' is not an exit code: {e}")))
}

fn parse_flag(field: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(field, format!("'{raw}' is not a boolean"))),
    }
}
