//! The single point where a terminal [`Outcome`] becomes an external effect.
//!
//! Combinators never print, log or exit. A consuming program hands its final
//! outcome to [`Boundary::settle`] once and acts on the returned
//! [`Settlement`]: write the line, exit with the code.

use std::fmt;
use std::io::{self, Write};
use std::process::ExitCode;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{BoundaryConfig, OutputFormat};
use crate::error::BoundaryError;
use crate::outcome::Outcome::{self, Failure, Success};

/// Which variant a settlement came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

/// The effect a settled outcome asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub status: Status,
    pub code: u8,
    pub line: String,
}

impl Settlement {
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code)
    }

    /// Write the rendered line followed by a newline.
    ///
    /// # Errors
    ///
    /// Propagates the writer's I/O error.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.line)
    }
}

/// Converts terminal outcomes according to a [`BoundaryConfig`].
#[derive(Debug, Clone, Default)]
pub struct Boundary {
    config: BoundaryConfig,
}

impl Boundary {
    #[must_use]
    pub const fn new(config: BoundaryConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &BoundaryConfig {
        &self.config
    }

    /// Settle a terminal outcome.
    ///
    /// Text output follows `Result: <answer:?>` / `Error: <error>`; JSON
    /// output is the serde form of the outcome.
    ///
    /// ```
    /// use outcome_core::{Boundary, Failure, Status, Success};
    ///
    /// let boundary = Boundary::default();
    ///
    /// let done = boundary.settle(Success::<f64, String>(5.0))?;
    /// assert_eq!(done.line, "Result: 5.0");
    /// assert_eq!(done.code, 0);
    ///
    /// let failed = boundary.settle(Failure::<f64, String>("division by zero".into()))?;
    /// assert_eq!(failed.line, "Error: division by zero");
    /// assert_eq!(failed.status, Status::Failure);
    /// assert_eq!(failed.code, 1);
    /// # Ok::<(), outcome_core::BoundaryError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// `BoundaryError::Render` when a payload cannot be serialized to JSON.
    pub fn settle<A, E>(&self, outcome: Outcome<A, E>) -> Result<Settlement, BoundaryError>
    where
        A: fmt::Debug + Serialize,
        E: fmt::Display + Serialize,
    {
        let line = self.render(&outcome)?;
        let (status, code) = match &outcome {
            Success(_) => (Status::Success, self.config.success_code),
            Failure(_) => (Status::Failure, self.config.failure_code),
        };

        if self.config.log_outcomes {
            match &outcome {
                Success(_) => debug!(status = status.as_str(), exit_code = code, "outcome settled"),
                Failure(error) => warn!(
                    status = status.as_str(),
                    exit_code = code,
                    error = %error,
                    "outcome settled with failure"
                ),
            }
        }

        Ok(Settlement { status, code, line })
    }

    fn render<A, E>(&self, outcome: &Outcome<A, E>) -> Result<String, BoundaryError>
    where
        A: fmt::Debug + Serialize,
        E: fmt::Display + Serialize,
    {
        match self.config.format {
            OutputFormat::Text => Ok(match outcome {
                Success(answer) => format!("Result: {answer:?}"),
                Failure(error) => format!("Error: {error}"),
            }),
            OutputFormat::Json => Ok(serde_json::to_string(outcome)?),
            OutputFormat::Pretty => Ok(serde_json::to_string_pretty(outcome)?),
        }
    }
}
