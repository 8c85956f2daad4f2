//! Error types for draftgen
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for draftgen operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, history persistence, provider interactions,
/// and output actions.
#[derive(Error, Debug)]
pub enum DraftgenError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider-related errors (construction, unknown provider type)
    #[error("Provider error: {0}")]
    Provider(String),

    /// History storage errors (database operations)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Output action errors (clipboard, file export)
    #[error("Output error: {0}")]
    Output(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for draftgen operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
