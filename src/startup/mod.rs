//! Startup: configuration layering and logging initialization.
//!
//! - [`config`] - [`AppConfig`] from defaults, environment and CLI flags
//! - [`logging`] - File-backed `tracing` subscriber
//!
//! # Usage
//!
//! ```ignore
//! use aura::startup::{init_logging, AppConfig};
//!
//! let config = AppConfig::from_env().apply_cli(&overrides);
//! let log_path = init_logging(&config)?;
//! ```

pub mod config;
pub mod logging;

pub use config::{AppConfig, BackendMode};
pub use logging::{default_log_path, init_logging};
