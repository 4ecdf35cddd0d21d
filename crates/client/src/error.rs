//! Error types for the Aula client SDK.
//!
//! Storage failures never show up here: the session store degrades to
//! `None`/no-op and logs a warning instead. Everything that crosses the
//! network surfaces through [`ApiError`] unchanged.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by API calls.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, request build).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the server.
    #[error("Server returned {status}: {message}")]
    Status {
        status: StatusCode,
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status of the response, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

impl From<envy::Error> for ApiError {
    fn from(err: envy::Error) -> Self {
        ApiError::Config(err.to_string())
    }
}

/// Result type alias using ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            message: "Course not found".to_string(),
        };
        assert_eq!(err.to_string(), "Server returned 404 Not Found: Course not found");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_config_error_display() {
        let err = ApiError::Config("missing AULA_BASE_URL".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing AULA_BASE_URL");
        assert!(err.status().is_none());
    }
}
