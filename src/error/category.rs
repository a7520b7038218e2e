//! Error category classification for unified error handling.
//!
//! Categories drive the three handling paths of the app: local rejection,
//! rollback with a retry hint, and log-and-continue.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (connection, DNS, timeout).
    /// Generally transient and retryable.
    Network,

    /// Backend/server-side errors (HTTP 5xx, service unavailable).
    Server,

    /// Client-side errors (invalid state, unexpected payloads).
    Client,

    /// Rejected user input (empty message, empty post).
    /// Never sent over the wire.
    Validation,

    /// System/OS errors (filesystem, platform opener).
    System,

    /// Configuration errors (bad env values, unparsable flags).
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient
    /// and the operation can be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Validation => "validation",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your connection and press r to retry",
            ErrorCategory::Server => "The service is having trouble. Press r to retry",
            ErrorCategory::Client => "Something unexpected happened. Try again",
            ErrorCategory::Validation => "Please fill in the required text",
            ErrorCategory::System => "Check your system setup and try again",
            ErrorCategory::Configuration => "Check your AURA_* environment variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_categories() {
        assert!(ErrorCategory::Network.is_retryable());
        assert!(ErrorCategory::Server.is_retryable());
        assert!(!ErrorCategory::Validation.is_retryable());
        assert!(!ErrorCategory::Client.is_retryable());
        assert!(!ErrorCategory::System.is_retryable());
        assert!(!ErrorCategory::Configuration.is_retryable());
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ErrorCategory::Validation.to_string(), "validation");
        assert_eq!(ErrorCategory::Network.to_string(), "network");
    }
}
