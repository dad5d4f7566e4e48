//! Core error types for betterrest-core.
//!
//! This module defines the error hierarchy using thiserror. Estimation has a
//! single failure kind, [`EstimationError::ModelFailure`]; the remaining enums
//! cover configuration and input validation around it.

use std::path::PathBuf;
use thiserror::Error;

/// Fixed message shown in place of a bedtime when estimation fails.
pub const MODEL_FAILURE_MESSAGE: &str = "Sorry, there was a problem calculating your bedtime.";

/// Core error type for betterrest-core setup (logging and other I/O).
#[derive(Error, Debug)]
pub enum CoreError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a sleep model while loading or evaluating.
#[derive(Error, Debug)]
pub enum ModelError {
    /// No model artifact was configured
    #[error("no sleep model configured")]
    NotConfigured,

    /// Artifact could not be read
    #[error("Failed to load model from {path}: {message}")]
    Load { path: PathBuf, message: String },

    /// Artifact content is malformed
    #[error("Failed to parse model: {0}")]
    Parse(String),

    /// Evaluation failed or produced an unusable value
    #[error("Inference failed: {0}")]
    Inference(String),
}

/// The one way a bedtime estimation can fail.
///
/// Load and inference failures are not distinguished by callers; the source
/// is kept for logging only.
#[derive(Error, Debug)]
pub enum EstimationError {
    #[error("model failure: {0}")]
    ModelFailure(#[source] ModelError),
}

impl EstimationError {
    /// Message to display instead of a computed bedtime.
    pub fn user_message(&self) -> &'static str {
        MODEL_FAILURE_MESSAGE
    }
}

impl From<ModelError> for EstimationError {
    fn from(err: ModelError) -> Self {
        EstimationError::ModelFailure(err)
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors for user-supplied inputs.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Value outside its allowed range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: String,
        max: String,
        value: String,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
