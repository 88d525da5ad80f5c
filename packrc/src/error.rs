//! Error types for the packrc library.
//!
//! This module provides the error hierarchy for configuration loading,
//! environment capture, and validation, using `thiserror` for ergonomic
//! error handling. Composition itself is infallible; only the edges of the
//! system (files, process environment, explicit validation) produce errors.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a packrc error.
///
/// # Examples
///
/// ```
/// use packrc::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(3000)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the packrc library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// The composed record could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error originated in validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use packrc::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "devServer.port".to_string(),
    ///     message: "must be nonzero".to_string(),
    /// };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
