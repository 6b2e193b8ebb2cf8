use std::fmt;

use thiserror::Error;

/// Failure taxonomy for backend calls.
///
/// `Status` carries the human-readable message from the error body when the
/// backend supplied one; views surface these as transient notices. Nothing is
/// retried automatically.
#[derive(Debug, Error)]
pub enum ApiError {
    Status {
        status: u16,
        message: Option<String>,
    },

    Network(#[from] reqwest::Error),

    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => write!(f, "{message}"),
            ApiError::Status {
                status,
                message: None,
            } => write!(f, "request failed with status {status}"),
            ApiError::Network(err) => write!(f, "network error: {err}"),
            ApiError::Decode(detail) => write!(f, "unexpected response shape: {detail}"),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend-supplied message, when the error body had one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefers_backend_message() {
        let err = ApiError::Status {
            status: 401,
            message: Some("Invalid credentials".into()),
        };
        assert_eq!(err.to_string(), "Invalid credentials");

        let err = ApiError::Status {
            status: 503,
            message: None,
        };
        assert_eq!(err.to_string(), "request failed with status 503");
    }
}
