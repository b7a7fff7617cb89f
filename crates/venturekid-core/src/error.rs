//! Core error types for venturekid-core.
//!
//! This module defines a comprehensive error hierarchy using thiserror
//! for better error handling and reporting across the library.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for venturekid-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors from the wizard flows
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Lead submission errors
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Course catalog errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Validation errors surfaced by the step validator and form controller.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A wizard step failed validation and the session may not advance.
    #[error("Step {step} is incomplete: {summary}")]
    StepBlocked { step: usize, summary: String },

    /// A single field holds a malformed value.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors from the lead persistence boundary.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// No backend endpoint configured.
    #[error("Lead backend is not configured")]
    NotConfigured,

    /// The configured endpoint URL could not be parsed.
    #[error("Invalid backend endpoint '{0}'")]
    InvalidEndpoint(String),

    /// Transport-level failure (connect, timeout, TLS).
    #[error("Could not reach the lead backend: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("Lead backend rejected the submission (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The async runtime driving the HTTP client failed to start.
    #[error("HTTP runtime error: {0}")]
    Runtime(String),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Transport(err.to_string())
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

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Stored payload could not be serialized/deserialized
    #[error("Payload serialization failed: {0}")]
    Payload(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

/// Course catalog errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog from {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    /// Catalog data could not be parsed
    #[error("Failed to parse catalog: {0}")]
    ParseFailed(String),

    /// Catalog contains no lessons
    #[error("Catalog has no lessons")]
    Empty,
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
