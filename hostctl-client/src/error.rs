//! Error types for the hostctl client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the hosting platform API
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

    /// Could not obtain an access token
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The API answered 404
    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl ClientError {
    /// Create an error from a failed status code and the response body
    ///
    /// 404 becomes `NotFound`; every other status is kept as `ApiError`.
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        match status {
            404 => Self::NotFound(message.into()),
            _ => Self::ApiError {
                status,
                message: message.into(),
            },
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        self.is_not_found()
            || matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
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
    fn test_status_classification() {
        let missing = ClientError::api_error(404, "no such environment");
        assert!(matches!(missing, ClientError::NotFound(ref body) if body == "no such environment"));
        assert!(missing.is_not_found());
        assert!(missing.is_client_error());
        assert!(!missing.is_server_error());

        let outage = ClientError::api_error(503, "maintenance");
        assert!(outage.is_server_error());
        assert!(!outage.is_not_found());

        let forbidden = ClientError::api_error(403, "forbidden");
        assert!(forbidden.is_client_error());
        assert!(!forbidden.is_not_found());
    }
}
