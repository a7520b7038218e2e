//! System-related error types: filesystem, log files, platform opener.

use std::fmt;
use std::path::PathBuf;

/// System-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum SystemError {
    /// Permission denied for a file or directory operation.
    PermissionDenied { path: PathBuf, operation: String },

    /// Failed to create a directory (log dir).
    DirectoryCreationFailed { path: PathBuf, message: String },

    /// Generic I/O error.
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// Could not determine the data directory for log files.
    NoDataDirectory,

    /// The platform refused to open a URI (tel:, https:).
    OpenerFailed { uri: String, message: String },

    /// Environment variable set to an unusable value.
    EnvironmentError { variable: String, message: String },
}

impl SystemError {
    /// Check if this error might be transient.
    pub fn is_transient(&self) -> bool {
        matches!(self, SystemError::IoError { .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::PermissionDenied { path, operation } => {
                format!("Permission denied: cannot {} '{}'.", operation, path.display())
            }
            SystemError::DirectoryCreationFailed { path, .. } => {
                format!("Could not create directory '{}'.", path.display())
            }
            SystemError::IoError { operation, .. } => {
                format!("A system error occurred during {}.", operation)
            }
            SystemError::NoDataDirectory => {
                "Could not determine a data directory for log files.".to_string()
            }
            SystemError::OpenerFailed { uri, .. } => {
                format!("Your system could not open '{}'. Dial it manually.", uri)
            }
            SystemError::EnvironmentError { variable, message } => {
                format!("{} is invalid: {}", variable, message)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::DirectoryCreationFailed { .. } => "E_SYS_MKDIR",
            SystemError::IoError { .. } => "E_SYS_IO",
            SystemError::NoDataDirectory => "E_SYS_NODATA",
            SystemError::OpenerFailed { .. } => "E_SYS_OPEN",
            SystemError::EnvironmentError { .. } => "E_SYS_ENV",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::PermissionDenied { path, operation } => {
                write!(f, "Permission denied: {} '{}'", operation, path.display())
            }
            SystemError::DirectoryCreationFailed { path, message } => {
                write!(f, "Failed to create '{}': {}", path.display(), message)
            }
            SystemError::IoError {
                operation,
                path,
                message,
            } => match path {
                Some(p) => write!(f, "{} failed for '{}': {}", operation, p.display(), message),
                None => write!(f, "{} failed: {}", operation, message),
            },
            SystemError::NoDataDirectory => write!(f, "No data directory"),
            SystemError::OpenerFailed { uri, message } => {
                write!(f, "Failed to open '{}': {}", uri, message)
            }
            SystemError::EnvironmentError { variable, message } => {
                write!(f, "Environment variable {}: {}", variable, message)
            }
        }
    }
}

impl std::error::Error for SystemError {}

/// Classify an I/O error into a SystemError.
pub fn classify_io_error(err: std::io::Error, path: Option<PathBuf>, operation: &str) -> SystemError {
    match (err.kind(), path) {
        (std::io::ErrorKind::PermissionDenied, Some(path)) => SystemError::PermissionDenied {
            path,
            operation: operation.to_string(),
        },
        (_, path) => SystemError::IoError {
            operation: operation.to_string(),
            path,
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_permission_denied_with_path() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let classified = classify_io_error(err, Some(PathBuf::from("/var/log/aura")), "write");
        assert!(matches!(classified, SystemError::PermissionDenied { .. }));
        assert_eq!(classified.error_code(), "E_SYS_PERM");
    }

    #[test]
    fn test_classify_other_io_error() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let classified = classify_io_error(err, None, "open log");
        assert!(classified.is_transient());
        assert!(classified.to_string().contains("open log failed"));
    }

    #[test]
    fn test_opener_failure_message_mentions_uri() {
        let err = SystemError::OpenerFailed {
            uri: "tel:988".to_string(),
            message: "no handler".to_string(),
        };
        assert!(err.user_message().contains("tel:988"));
    }
}
