//! UI-related error types.

use std::fmt;

/// UI-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    /// Terminal initialization failed.
    TerminalInitFailed { message: String },

    /// Rendering error.
    RenderFailed { component: String, message: String },

    /// The internal message channel closed while the loop was running.
    ChannelClosed,
}

impl UiError {
    /// Check if the UI can keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, UiError::RenderFailed { .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            UiError::TerminalInitFailed { message } => {
                format!("Failed to initialize the terminal: {}", message)
            }
            UiError::RenderFailed { component, .. } => {
                format!("Failed to draw {}.", component)
            }
            UiError::ChannelClosed => "Internal event channel closed.".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::TerminalInitFailed { .. } => "E_UI_INIT",
            UiError::RenderFailed { .. } => "E_UI_RENDER",
            UiError::ChannelClosed => "E_UI_CHANNEL",
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::TerminalInitFailed { message } => write!(f, "Terminal init failed: {}", message),
            UiError::RenderFailed { component, message } => {
                write!(f, "Render failed for {}: {}", component, message)
            }
            UiError::ChannelClosed => write!(f, "Message channel closed"),
        }
    }
}

impl std::error::Error for UiError {}
