//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`Backend`] - The wellness REST API
//! - [`Dialer`] - Placing a phone call through the platform

pub mod backend;
pub mod dialer;

pub use backend::Backend;
pub use dialer::{tel_uri, Dialer};
