//! Unified error types for the Kalshi market client.
//!
//! Only the transport and configuration layers produce errors. URL parsing,
//! price extraction and outcome building are total and never fail.

use thiserror::Error;

/// Unified error type for the crate.
#[derive(Error, Debug)]
pub enum KalshiError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Marketplace API error.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors raised while talking to the Kalshi REST API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("Kalshi API returned HTTP {status} for {path}{}", detail_suffix(.detail))]
    Status {
        /// Request path (e.g. "/events").
        path: String,
        /// HTTP status code.
        status: u16,
        /// First 200 characters of the response body.
        detail: String,
    },

    /// The request never produced a response.
    #[error("Network error calling {path}: {source}")]
    Network {
        /// Request path.
        path: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON we expected.
    #[error("Invalid JSON from {path}: {reason}")]
    InvalidJson {
        /// Request path.
        path: String,
        /// Decoder message.
        reason: String,
    },

    /// A request URL could not be built from the configured base.
    #[error("invalid API url: {0}")]
    InvalidUrl(String),

    /// HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

fn detail_suffix(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!(": {detail}")
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, KalshiError>;
