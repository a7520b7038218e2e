//! Local input validation errors.
//!
//! These never reach the network: the operation is rejected before any
//! state change or backend call.

use std::fmt;

/// Input rejected by a modal before it touches state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A text field was empty or whitespace-only.
    EmptyInput { field: &'static str },

    /// An id did not match any loaded entity.
    UnknownId { kind: &'static str, id: String },

    /// A phone string contained no digits to dial.
    UndialableNumber { phone: String },
}

impl ValidationError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::EmptyInput { field } => format!("The {} can't be empty.", field),
            ValidationError::UnknownId { kind, .. } => format!("That {} is no longer listed.", kind),
            ValidationError::UndialableNumber { phone } => {
                format!("'{}' can't be dialled from here.", phone)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput { .. } => "E_VAL_EMPTY",
            ValidationError::UnknownId { .. } => "E_VAL_UNKNOWN_ID",
            ValidationError::UndialableNumber { .. } => "E_VAL_PHONE",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyInput { field } => write!(f, "empty {}", field),
            ValidationError::UnknownId { kind, id } => write!(f, "unknown {} id '{}'", kind, id),
            ValidationError::UndialableNumber { phone } => {
                write!(f, "no digits in phone '{}'", phone)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
