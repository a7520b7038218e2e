//! Result type alias for AURA operations.

use super::aura_error::AuraError;
use super::context::ErrorContext;

/// Type alias for Results using AuraError.
pub type AuraResult<T> = Result<T, AuraError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    fn context(self, ctx: ErrorContext) -> AuraResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> AuraResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AuraError>,
{
    fn context(self, ctx: ErrorContext) -> AuraResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> AuraResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
