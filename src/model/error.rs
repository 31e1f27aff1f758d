//! Error types for the user directory.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level binary error wrapping every failure the shell can hit
//!   - [`FetchError`] - Remote page fetch failures (status, transport, body, record shape)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse/validation
//!   - [`LoggingError`](crate::logging::LoggingError) - Subscriber initialisation
//!
//! # Error Recovery Strategy
//!
//! Fetch errors are **non-fatal**: the loader stores them as the last error, leaves the
//! record store and cursor untouched, and the same action can simply be triggered again.
//! Query inputs never error; malformed values degrade to "no filter / no sort".

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level error for the `userdir` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The HTTP client could not be built or a fetch failed fatally for the shell.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Async runtime or stdout failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single remote page fetch.
///
/// Opaque to the loader: it is stored, surfaced as a message, and never inspected for
/// control flow. `Clone` so the loader can keep a copy as its last error while also
/// returning it to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The endpoint answered with a non-success status.
    #[error("HTTP {code}: {message}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// The request never produced a response (connect failure, timeout, TLS).
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The response body was not a valid collection page.
    #[error("Malformed response body: {0}")]
    Decode(String),

    /// A record in the page failed structural validation.
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] InvalidRecord),
}

impl FetchError {
    /// HTTP-status-like code for this failure, when one exists.
    pub fn code(&self) -> Option<u16> {
        match self {
            FetchError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Message surfaced to the presentation layer as `lastErrorMessage`.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Structural validation failure on a fetched record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRecord {
    /// The record carried no identity and cannot be deduplicated.
    #[error("record at position {position} has no id")]
    MissingId {
        /// Zero-based position of the record within its page.
        position: usize,
    },
}
