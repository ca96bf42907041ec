//! Error types for setup operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Missing model files and missing Python packages are *outcomes*, not
//!   errors; see [`crate::bootstrap::BootstrapOutcome`]
//! - Use `SetupError` for failures that abort the run
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for setup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A path that must be a directory is occupied by something else.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Model file download failed.
    #[error("Failed to download {name}: {message}")]
    Download { name: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
