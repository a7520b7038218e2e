//! Error context for enriched error information.

use chrono::{DateTime, Utc};

/// Context information attached to errors for debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Human-readable description of the operation that failed.
    pub operation: String,

    /// Modal the operation belongs to, if any.
    pub modal: Option<String>,

    /// Entity the operation targeted (post id, counsellor id, phone number).
    pub target: Option<String>,

    /// Timestamp when the error occurred.
    pub timestamp: DateTime<Utc>,

    /// Number of retry attempts made before this error.
    pub retry_count: u32,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            modal: None,
            target: None,
            timestamp: Utc::now(),
            retry_count: 0,
        }
    }

    /// Set the modal for this context.
    pub fn with_modal(mut self, modal: impl Into<String>) -> Self {
        self.modal = Some(modal.into());
        self
    }

    /// Set the target entity for this context.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the retry count for this context.
    pub fn with_retry_count(mut self, count: u32) -> Self {
        self.retry_count = count;
        self
    }

    /// Get a formatted context string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(ref modal) = self.modal {
            parts.push(format!("modal={}", modal));
        }
        if let Some(ref target) = self.target {
            parts.push(format!("target={}", target));
        }
        if self.retry_count > 0 {
            parts.push(format!("retry_count={}", self.retry_count));
        }

        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));
        parts.join(" ")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.operation)?;

        if let Some(ref modal) = self.modal {
            write!(f, " modal={}", modal)?;
        }
        if let Some(ref target) = self.target {
            write!(f, " target={}", target)?;
        }
        if self.retry_count > 0 {
            write!(f, " retry={}", self.retry_count)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let ctx = ErrorContext::new("toggle_like")
            .with_modal("community")
            .with_target("post-7")
            .with_retry_count(1);

        assert_eq!(ctx.operation, "toggle_like");
        assert_eq!(ctx.modal.as_deref(), Some("community"));
        assert_eq!(ctx.target.as_deref(), Some("post-7"));
        assert_eq!(ctx.retry_count, 1);
    }

    #[test]
    fn test_display_omits_unset_fields() {
        let ctx = ErrorContext::new("fetch_posts");
        assert_eq!(ctx.to_string(), "[fetch_posts]");
    }

    #[test]
    fn test_log_string_contains_fields() {
        let log = ErrorContext::new("book_session")
            .with_target("c-1")
            .to_log_string();
        assert!(log.contains("operation=book_session"));
        assert!(log.contains("target=c-1"));
        assert!(log.contains("timestamp="));
    }
}
