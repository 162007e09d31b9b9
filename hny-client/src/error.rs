//! Error types for the hny client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the hny client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A credential required by the endpoint was not configured
    #[error("No {0} configured")]
    MissingCredentials(&'static str),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Create an API error from a raw error body
    ///
    /// Bodies shaped like `{"error": "..."}` are unwrapped to their message;
    /// anything else is kept verbatim.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string());

        Self::api_error(status, message)
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_)) || matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_unwraps_error_field() {
        let err = ClientError::from_response(401, r#"{"error":"unknown API key"}"#);
        assert_eq!(err.to_string(), "API error (status 401): unknown API key");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_from_response_keeps_plain_body() {
        let err = ClientError::from_response(502, "bad gateway\n");
        assert!(matches!(err, ClientError::ApiError { ref message, .. } if message == "bad gateway"));
        assert!(err.is_server_error());
    }

    #[test]
    fn test_not_found_detection() {
        assert!(ClientError::api_error(404, "missing").is_not_found());
        assert!(ClientError::NotFound("dataset".to_string()).is_not_found());
        assert!(!ClientError::api_error(500, "boom").is_not_found());
    }
}
