//! Error types for the Veltrix domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all Veltrix operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Chat client errors ---
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    // --- Upstream completion provider errors ---
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    // --- Mail relay errors ---
    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures observed by the chat session client against one endpoint
/// candidate. All variants are ordinary per-candidate failures: the
/// client records them and moves on to the next candidate.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Endpoint returned error: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Endpoint answered but reported failure: {0}")]
    Unsuccessful(String),

    #[error("No endpoint candidates configured")]
    NoCandidates,
}

/// Failures from the third-party completion service the backend
/// proxies chat messages to.
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by completion provider")]
    RateLimited,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Completion provider returned no content")]
    EmptyResponse,
}

/// Failures from the transactional email relay.
#[derive(Debug, Clone, Error)]
pub enum MailError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Mail relay rejected request: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Mail relay not configured: {0}")]
    NotConfigured(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_displays_correctly() {
        let err = Error::Client(ClientError::ApiError {
            status_code: 503,
            message: "Service Unavailable".into(),
        });
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("Service Unavailable"));
    }

    #[test]
    fn timeout_carries_bound() {
        let err = ClientError::Timeout(5);
        assert!(err.to_string().contains("5s"));
    }

    #[test]
    fn mail_error_displays_correctly() {
        let err = Error::Mail(MailError::NotConfigured("missing api key".into()));
        assert!(err.to_string().contains("missing api key"));
    }
}
