//! Unified error handling for AURA.
//!
//! - **Error Categories**: classification that decides how a failure is handled
//! - **Domain-specific Errors**: Network, Validation, UI and System errors
//! - **Unified Error Type**: `AuraError` consolidates all of them
//! - **Error Context**: operation/modal/target metadata for log lines
//! - **Result Type Alias**: `AuraResult<T>`
//!
//! | Category | Handling | Retryable |
//! |----------|----------|-----------|
//! | Validation | Rejected locally, no network call | No |
//! | Network | Roll back optimistic update, show retry hint | Yes |
//! | Server | Roll back optimistic update, show retry hint | Yes |
//! | Client | Logged, UI stays usable | No |
//! | System | Logged, UI stays usable | Sometimes |
//! | Configuration | Reported at startup | No |

mod aura_error;
mod category;
mod context;
mod network;
mod result;
mod system;
mod ui;
mod validation;

pub use aura_error::AuraError;
pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use network::{classify_reqwest_error, NetworkError};
pub use result::{AuraResult, ResultExt};
pub use system::{classify_io_error, SystemError};
pub use ui::UiError;
pub use validation::ValidationError;
