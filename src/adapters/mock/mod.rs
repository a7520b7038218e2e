//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockBackend`] - Catalogue-backed API with per-endpoint failure injection
//! - [`RecordingDialer`] - Captures dialed numbers instead of opening a handler

pub mod backend;
pub mod dialer;

pub use backend::{MockBackend, MockEndpoint};
pub use dialer::RecordingDialer;
