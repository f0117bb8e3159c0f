//! Error types for the ambient parts of the crate.
//!
//! Domain failures are whatever `E` a producer picks. The types here cover
//! the adapter (`Caught`) and the boundary/config plumbing, which return
//! plain `std::result::Result` so `?` works at the edges.

use std::any::Any;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const OPAQUE_PAYLOAD: &str = "opaque panic payload";

/// A panic intercepted by [`crate::safe`] and re-expressed as a domain failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct Caught {
    message: String,
}

impl Caught {
    /// Create a caught failure from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build from the payload handed back by `catch_unwind`.
    ///
    /// `&str` and `String` payloads (everything `panic!` produces) are kept
    /// verbatim; anything else is recorded as opaque.
    #[must_use]
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<String>() {
            Ok(message) => Self::new(*message),
            Err(payload) => payload
                .downcast_ref::<&'static str>()
                .map_or_else(|| Self::new(OPAQUE_PAYLOAD), |message| Self::new(*message)),
        }
    }

    /// The panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while loading or validating a [`crate::BoundaryConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("config parse error: {reason}")]
    Parse { reason: String },

    #[error("invalid config field '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Read {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    /// Create a validation error for a single field.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::parse(err.to_string())
    }
}

/// Errors raised while turning a terminal outcome into a [`crate::Settlement`].
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("failed to render outcome: {reason}")]
    Render { reason: String },
}

impl From<serde_json::Error> for BoundaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render {
            reason: err.to_string(),
        }
    }
}
