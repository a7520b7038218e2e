//! Network-related error types for calls to the wellness backend.

use std::fmt;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the backend failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { endpoint: String, duration_secs: u64 },

    /// Backend answered with a non-2xx status.
    HttpStatus { status: u16, message: String },

    /// Backend answered with a body we could not decode.
    InvalidResponse { endpoint: String, message: String },

    /// Request was aborted before completion.
    Cancelled,

    /// Anything reqwest reports that does not fit the above.
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } | NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::InvalidResponse { .. }
            | NetworkError::Cancelled
            | NetworkError::Other { .. } => false,
        }
    }

    /// True when the backend itself reported the failure.
    pub fn is_server_side(&self) -> bool {
        matches!(self, NetworkError::HttpStatus { status, .. } if *status >= 500)
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Couldn't reach AURA right now.".to_string()
            }
            NetworkError::Timeout { endpoint, duration_secs } => {
                format!("{} took longer than {}s to answer.", endpoint, duration_secs)
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                400 => "The request was not accepted.".to_string(),
                401 | 403 => "You need to sign in for this.".to_string(),
                404 => "That item no longer exists.".to_string(),
                429 => "Too many requests. Please wait a moment.".to_string(),
                500..=599 => "AURA is having trouble right now.".to_string(),
                _ => format!("The server returned HTTP {}.", status),
            },
            NetworkError::InvalidResponse { .. } => {
                "Received an unexpected response.".to_string()
            }
            NetworkError::Cancelled => "The request was cancelled.".to_string(),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Cancelled => "E_NET_CANCEL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { endpoint, duration_secs } => {
                write!(f, "{} timed out after {} seconds", endpoint, duration_secs)
            }
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::InvalidResponse { endpoint, message } => {
                write!(f, "Invalid response from {}: {}", endpoint, message)
            }
            NetworkError::Cancelled => write!(f, "Request cancelled"),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a reqwest error into a NetworkError.
pub fn classify_reqwest_error(err: &reqwest::Error, endpoint: &str) -> NetworkError {
    if err.is_connect() {
        NetworkError::ConnectionFailed {
            url: endpoint.to_string(),
            message: err.to_string(),
        }
    } else if err.is_timeout() {
        NetworkError::Timeout {
            endpoint: endpoint.to_string(),
            duration_secs: crate::adapters::REQUEST_TIMEOUT_SECS,
        }
    } else if let Some(status) = err.status() {
        NetworkError::HttpStatus {
            status: status.as_u16(),
            message: err.to_string(),
        }
    } else if err.is_decode() {
        NetworkError::InvalidResponse {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        }
    } else {
        NetworkError::Other {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_is_retryable() {
        let err = NetworkError::ConnectionFailed {
            url: "http://localhost:8000".to_string(),
            message: "refused".to_string(),
        };
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "E_NET_CONN");
    }

    #[test]
    fn test_http_status_retry_rules() {
        let server = NetworkError::HttpStatus {
            status: 503,
            message: "unavailable".to_string(),
        };
        let missing = NetworkError::HttpStatus {
            status: 404,
            message: "not found".to_string(),
        };
        assert!(server.is_retryable());
        assert!(server.is_server_side());
        assert!(!missing.is_retryable());
        assert!(!missing.is_server_side());
    }

    #[test]
    fn test_user_messages_are_not_empty() {
        let errors = vec![
            NetworkError::Cancelled,
            NetworkError::Timeout {
                endpoint: "/api/resources".to_string(),
                duration_secs: 10,
            },
            NetworkError::InvalidResponse {
                endpoint: "/api/counsellors".to_string(),
                message: "eof".to_string(),
            },
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }
}
