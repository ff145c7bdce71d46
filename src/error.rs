//! Error types for Wayfarer
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Wayfarer operations
///
/// This enum encompasses all possible errors that can occur while loading
/// configuration, requesting an itinerary from the generative API, parsing
/// its response, and persisting user preferences.
#[derive(Error, Debug)]
pub enum WayfarerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API credential is missing or still set to a placeholder value.
    /// Raised before any network call is attempted.
    #[error("Planner is not configured: {0}")]
    Unconfigured(String),

    /// The API answered with a non-success status code
    #[error("API request failed with status {status}: {body}")]
    Transport {
        /// HTTP status code returned by the API
        status: u16,
        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// A 2xx response whose text could not be parsed as an itinerary,
    /// even after stripping code fences. The raw text is carried for
    /// diagnostics and must never be surfaced to the user verbatim.
    #[error("API returned a response that is not a valid itinerary")]
    MalformedResponse {
        /// The unparseable candidate text
        raw: String,
    },

    /// Preference storage errors (database operations)
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors (connection failures, invalid URLs, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Wayfarer operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
