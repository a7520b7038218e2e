//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`HttpBackend`] - Wellness API over reqwest
//! - [`OfflineBackend`] - Built-in catalogue with simulated latency
//! - [`SystemDialer`] - `tel:` URIs through the platform opener
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockBackend`] - Failure injection and call recording
//! - [`mock::RecordingDialer`] - Captures dialed numbers

pub mod http_backend;
pub mod mock;
pub mod offline;
pub mod system_dialer;

pub use http_backend::HttpBackend;
pub use mock::{MockBackend, MockEndpoint, RecordingDialer};
pub use offline::{OfflineBackend, DEFAULT_MOCK_LATENCY};
pub use system_dialer::SystemDialer;

/// Per-request timeout for the HTTP backend
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
