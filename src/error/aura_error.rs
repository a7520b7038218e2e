//! Unified error type for the AURA application.

use std::fmt;

use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::network::NetworkError;
use super::system::SystemError;
use super::ui::UiError;
use super::validation::ValidationError;

/// Unified error type for the AURA application.
///
/// Every fallible operation in the crate resolves to one of these, so the
/// App can branch on [`ErrorCategory`] alone when deciding whether to reject,
/// roll back, or just log.
#[derive(Debug)]
pub enum AuraError {
    /// Calls to the wellness backend.
    Network(NetworkError),

    /// Input rejected locally.
    Validation(ValidationError),

    /// UI/terminal errors.
    Ui(UiError),

    /// System/filesystem errors.
    System(SystemError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<AuraError>,
        context: ErrorContext,
    },
}

impl AuraError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AuraError::Network(err) => {
                if err.is_server_side() {
                    ErrorCategory::Server
                } else if matches!(err, NetworkError::InvalidResponse { .. }) {
                    ErrorCategory::Client
                } else {
                    ErrorCategory::Network
                }
            }
            AuraError::Validation(_) => ErrorCategory::Validation,
            AuraError::Ui(err) => {
                if err.is_recoverable() {
                    ErrorCategory::Client
                } else {
                    ErrorCategory::System
                }
            }
            AuraError::System(SystemError::EnvironmentError { .. }) => ErrorCategory::Configuration,
            AuraError::System(_) => ErrorCategory::System,
            AuraError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            AuraError::Network(err) => err.is_retryable(),
            AuraError::Validation(_) => false,
            AuraError::Ui(_) => false,
            AuraError::System(err) => err.is_transient(),
            AuraError::WithContext { error, .. } => error.is_retryable(),
        }
    }

    /// Optimistic local updates are rolled back only for failures that came
    /// back from (or on the way to) the backend.
    pub fn requires_rollback(&self) -> bool {
        matches!(self.inner(), AuraError::Network(_))
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuraError::Network(err) => err.user_message(),
            AuraError::Validation(err) => err.user_message(),
            AuraError::Ui(err) => err.user_message(),
            AuraError::System(err) => err.user_message(),
            AuraError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuraError::Network(err) => err.error_code(),
            AuraError::Validation(err) => err.error_code(),
            AuraError::Ui(err) => err.error_code(),
            AuraError::System(err) => err.error_code(),
            AuraError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        AuraError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            AuraError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &AuraError {
        match self {
            AuraError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }
}

impl fmt::Display for AuraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuraError::Network(err) => write!(f, "{}", err),
            AuraError::Validation(err) => write!(f, "{}", err),
            AuraError::Ui(err) => write!(f, "{}", err),
            AuraError::System(err) => write!(f, "{}", err),
            AuraError::WithContext { error, context } => write!(f, "{} ({})", error, context),
        }
    }
}

impl std::error::Error for AuraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuraError::Network(err) => Some(err),
            AuraError::Validation(err) => Some(err),
            AuraError::Ui(err) => Some(err),
            AuraError::System(err) => Some(err),
            AuraError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<NetworkError> for AuraError {
    fn from(err: NetworkError) -> Self {
        AuraError::Network(err)
    }
}

impl From<ValidationError> for AuraError {
    fn from(err: ValidationError) -> Self {
        AuraError::Validation(err)
    }
}

impl From<UiError> for AuraError {
    fn from(err: UiError) -> Self {
        AuraError::Ui(err)
    }
}

impl From<SystemError> for AuraError {
    fn from(err: SystemError) -> Self {
        AuraError::System(err)
    }
}

impl From<std::io::Error> for AuraError {
    fn from(err: std::io::Error) -> Self {
        use super::system::classify_io_error;
        AuraError::System(classify_io_error(err, None, "I/O operation"))
    }
}

impl From<serde_json::Error> for AuraError {
    fn from(err: serde_json::Error) -> Self {
        AuraError::Network(NetworkError::InvalidResponse {
            endpoint: "unknown".to_string(),
            message: err.to_string(),
        })
    }
}

impl From<reqwest::Error> for AuraError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(|u| u.path().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        AuraError::Network(super::network::classify_reqwest_error(&err, &url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_never_rolled_back() {
        let err: AuraError = ValidationError::EmptyInput { field: "post" }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.requires_rollback());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_network_errors_roll_back_even_with_context() {
        let err: AuraError = NetworkError::ConnectionFailed {
            url: "/api/community/posts/1/like".to_string(),
            message: "refused".to_string(),
        }
        .into();
        let err = err.with_context(ErrorContext::new("toggle_like").with_target("1"));

        assert!(err.requires_rollback());
        assert!(err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.context().map(|c| c.operation.as_str()), Some("toggle_like"));
    }

    #[test]
    fn test_server_side_status_category() {
        let err: AuraError = NetworkError::HttpStatus {
            status: 502,
            message: "bad gateway".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Server);
    }

    #[test]
    fn test_environment_error_is_configuration() {
        let err: AuraError = SystemError::EnvironmentError {
            variable: "AURA_SEED".to_string(),
            message: "not a number".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.error_code(), "E_SYS_ENV");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AuraError = json_err.into();
        assert!(matches!(err, AuraError::Network(NetworkError::InvalidResponse { .. })));
        assert_eq!(err.category(), ErrorCategory::Client);
    }

    #[test]
    fn test_inner_unwraps_nested_context() {
        let err: AuraError = NetworkError::Cancelled.into();
        let wrapped = err
            .with_context(ErrorContext::new("inner"))
            .with_context(ErrorContext::new("outer"));
        assert!(matches!(wrapped.inner(), AuraError::Network(NetworkError::Cancelled)));
    }
}
