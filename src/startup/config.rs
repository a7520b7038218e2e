//! Application configuration.
//!
//! Sources are layered lowest to highest: defaults, environment, CLI flags.

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::DEFAULT_MOCK_LATENCY;
use crate::cli::CliOverrides;
use crate::modals::DEFAULT_REPLY_DELAY;

pub const ENV_API_URL: &str = "AURA_API_URL";
pub const ENV_API_TOKEN: &str = "AURA_API_TOKEN";
pub const ENV_CHAT_DELAY_MS: &str = "AURA_CHAT_DELAY_MS";
pub const ENV_SEED: &str = "AURA_SEED";
pub const ENV_LOG: &str = "AURA_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Which [`crate::traits::Backend`] the app talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendMode {
    Http { base_url: String },
    Offline,
}

/// Runtime configuration.
///
/// Use the builder pattern to customize behavior.
///
/// # Example
///
/// ```ignore
/// use aura::startup::AppConfig;
///
/// let config = AppConfig::from_env()
///     .with_seed(Some(7))
///     .with_chat_reply_delay(Duration::from_millis(10));
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the wellness API; `None` runs offline
    pub api_base_url: Option<String>,
    /// Bearer token for API requests
    pub api_token: Option<String>,
    /// Delay before the chat assistant answers (default: 1500ms)
    pub chat_reply_delay: Duration,
    /// Simulated latency of the offline backend
    pub mock_latency: Duration,
    /// Seed for the reply picker and background layout
    pub seed: Option<u64>,
    /// `EnvFilter` directive string (default: "info")
    pub log_filter: String,
    /// Override the log file location
    pub log_file: Option<PathBuf>,
    /// Problems found while reading the environment, logged once tracing is up
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            api_token: None,
            chat_reply_delay: DEFAULT_REPLY_DELAY,
            mock_latency: DEFAULT_MOCK_LATENCY,
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: Option<String>) -> Self {
        self.api_base_url = url;
        self
    }

    pub fn with_api_token(mut self, token: Option<String>) -> Self {
        self.api_token = token;
        self
    }

    pub fn with_chat_reply_delay(mut self, delay: Duration) -> Self {
        self.chat_reply_delay = delay;
        self
    }

    pub fn with_mock_latency(mut self, latency: Duration) -> Self {
        self.mock_latency = latency;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Defaults overlaid with `AURA_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup`. Unparseable numbers keep the current
    /// value and record a warning.
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_API_URL) {
            self.api_base_url = Some(url);
        }
        if let Some(token) = non_empty(ENV_API_TOKEN) {
            self.api_token = Some(token);
        }
        if let Some(raw) = non_empty(ENV_CHAT_DELAY_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.chat_reply_delay = Duration::from_millis(ms),
                Err(_) => self
                    .warnings
                    .push(format!("{}='{}' is not a number of milliseconds", ENV_CHAT_DELAY_MS, raw)),
            }
        }
        if let Some(raw) = non_empty(ENV_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => self
                    .warnings
                    .push(format!("{}='{}' is not an unsigned integer", ENV_SEED, raw)),
            }
        }
        if let Some(filter) = non_empty(ENV_LOG) {
            self.log_filter = filter;
        }
        self
    }

    /// Overlay command-line flags; `--offline` wins over any API URL.
    pub fn apply_cli(mut self, cli: &CliOverrides) -> Self {
        if let Some(url) = &cli.api_url {
            self.api_base_url = Some(url.clone());
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if cli.offline {
            self.api_base_url = None;
        }
        self
    }

    pub fn backend_mode(&self) -> BackendMode {
        match &self.api_base_url {
            Some(url) => BackendMode::Http {
                base_url: url.clone(),
            },
            None => BackendMode::Offline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.chat_reply_delay, Duration::from_millis(1500));
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.backend_mode(), BackendMode::Offline);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_env_overlay() {
        let config = AppConfig::default().apply_env(lookup(&[
            (ENV_API_URL, "http://api.local"),
            (ENV_API_TOKEN, "tok"),
            (ENV_CHAT_DELAY_MS, "250"),
            (ENV_SEED, "9"),
            (ENV_LOG, "debug"),
        ]));
        assert_eq!(
            config.backend_mode(),
            BackendMode::Http {
                base_url: "http://api.local".to_string()
            }
        );
        assert_eq!(config.api_token.as_deref(), Some("tok"));
        assert_eq!(config.chat_reply_delay, Duration::from_millis(250));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_bad_env_numbers_warn_and_keep_defaults() {
        let config = AppConfig::default().apply_env(lookup(&[
            (ENV_CHAT_DELAY_MS, "soon"),
            (ENV_SEED, "-1"),
        ]));
        assert_eq!(config.chat_reply_delay, DEFAULT_REPLY_DELAY);
        assert!(config.seed.is_none());
        assert_eq!(config.warnings.len(), 2);
    }

    #[test]
    fn test_blank_env_ignored() {
        let config = AppConfig::default().apply_env(lookup(&[(ENV_API_URL, "  ")]));
        assert!(config.api_base_url.is_none());
    }

    #[test]
    fn test_cli_beats_env() {
        let config = AppConfig::default()
            .apply_env(lookup(&[(ENV_API_URL, "http://env"), (ENV_SEED, "1")]))
            .apply_cli(&CliOverrides {
                api_url: Some("http://cli".to_string()),
                seed: Some(2),
                offline: false,
            });
        assert_eq!(config.api_base_url.as_deref(), Some("http://cli"));
        assert_eq!(config.seed, Some(2));
    }

    #[test]
    fn test_offline_flag_clears_url() {
        let config = AppConfig::default()
            .with_api_base_url(Some("http://env".to_string()))
            .apply_cli(&CliOverrides {
                offline: true,
                ..Default::default()
            });
        assert_eq!(config.backend_mode(), BackendMode::Offline);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(ENV_CHAT_DELAY_MS, "75");
        std::env::remove_var(ENV_API_URL);
        let config = AppConfig::from_env();
        std::env::remove_var(ENV_CHAT_DELAY_MS);
        assert_eq!(config.chat_reply_delay, Duration::from_millis(75));
        assert!(config.api_base_url.is_none());
    }
}
