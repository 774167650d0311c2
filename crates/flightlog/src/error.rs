//! Error types for flightlog.
//!
//! This module defines all error types used throughout the flightlog crate,
//! providing enough context for the session to report a failed command and
//! carry on, or to terminate in strict mode.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flightlog operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    /// A value typed at the prompt was not an integer.
    #[error("invalid {what} '{input}': {source}")]
    InvalidInteger {
        /// What the value was supposed to be (e.g. "flight number").
        what: &'static str,
        /// The text that failed to parse.
        input: String,
        /// The underlying error.
        #[source]
        source: ParseIntError,
    },

    /// A command that needs an argument was given none.
    #[error("command '{command}' requires an argument: {usage}")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
        /// Usage line shown to the user.
        usage: &'static str,
    },

    /// Input ended while a prompt was waiting for a value.
    #[error("unexpected end of input while reading {what}")]
    UnexpectedEof {
        /// The value that was being read.
        what: &'static str,
    },

    // === Persistence Errors ===
    /// Failed to read a flight file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path of the file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a flight file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path of the file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal or other I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for flightlog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid integer error.
    #[must_use]
    pub fn invalid_integer(
        what: &'static str,
        input: impl Into<String>,
        source: ParseIntError,
    ) -> Self {
        Self::InvalidInteger {
            what,
            input: input.into(),
            source,
        }
    }

    /// Create a missing argument error.
    #[must_use]
    pub fn missing_argument(command: &'static str, usage: &'static str) -> Self {
        Self::MissingArgument { command, usage }
    }

    /// Check if this error came from malformed input (integers or JSON).
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::InvalidInteger { .. } | Self::Json(_))
    }

    /// Check if this error came from the file system or terminal.
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::Io(_)
        )
    }
}
