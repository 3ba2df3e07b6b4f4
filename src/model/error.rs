//! Error types for folio.
//!
//! Each concern owns a `thiserror` enum; [`AppError`] wraps them so the
//! binary can propagate everything with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level failure returned from the binary
//!   - [`ContentError`] - content file missing or malformed
//!   - [`crate::config::ConfigError`] - config file unreadable or invalid
//!   - [`crate::logging::LoggingError`] - log sink could not be set up
//!   - [`crate::view::TuiError`] - terminal failures
//!
//! Failing to open a link is not here: [`crate::links::OpenError`] is shown
//! in the status bar and the screen keeps running.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Portfolio content could not be loaded.
    #[error("Failed to load content: {0}")]
    Content(#[from] ContentError),

    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup, drawing or teardown failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),

    /// `--dump` size could not be parsed.
    #[error("Invalid dump size {0:?}: expected COLSxROWS, e.g. 120x40")]
    InvalidDumpSize(String),
}

/// Errors loading a portfolio content file.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use folio::model::ContentError;
///
/// let err = ContentError::NotFound {
///     path: PathBuf::from("/tmp/missing.toml"),
/// };
/// assert!(err.to_string().contains("/tmp/missing.toml"));
/// ```
#[derive(Debug, Error)]
pub enum ContentError {
    /// An explicitly requested content file does not exist.
    #[error("Content file not found: {path}")]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("Failed to read content file {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid content TOML.
    #[error("Invalid content in {path}: {reason}")]
    Parse {
        /// Path with invalid content.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
}
