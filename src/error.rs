//! Error types for the ThryveIQ client core.

/// Top-level error type for the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

/// Errors from calls against the coaching backend.
///
/// `NotFound` is deliberately separate from `Status`: a missing profile or
/// plan is a routing signal ("needs onboarding" / "no plan yet"), never an
/// alert.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure — the request never produced a response.
    #[error("Request {operation} failed: {reason}")]
    Request { operation: String, reason: String },

    /// Non-OK HTTP status. The raw body is kept for logs only.
    #[error("{operation} returned status {status}")]
    Status {
        operation: String,
        status: u16,
        body: String,
    },

    /// 404 on a fetch where absence is meaningful rather than an error.
    #[error("{what} not found")]
    NotFound { what: String },

    /// The response arrived but its body did not decode.
    #[error("Failed to decode {operation} response: {reason}")]
    Decode { operation: String, reason: String },
}

impl ApiError {
    /// Whether this error is the "resource does not exist" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for the client.
pub type Result<T> = std::result::Result<T, Error>;
