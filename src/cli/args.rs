//! Command-line argument parsing for AURA.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

/// Settings the command line may override on top of env and defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--api-url <url>`
    pub api_url: Option<String>,
    /// `--seed <n>`
    pub seed: Option<u64>,
    /// `--offline`: ignore any configured API URL
    pub offline: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(CliOverrides),
    /// Arguments could not be understood
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use aura::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["aura".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--offline" => overrides.offline = true,
            "--api-url" => match args.next() {
                Some(url) if !url.starts_with("--") => overrides.api_url = Some(url),
                _ => return CliCommand::Invalid("--api-url needs a value".to_string()),
            },
            "--seed" => match args.next().map(|v| v.parse::<u64>()) {
                Some(Ok(seed)) => overrides.seed = Some(seed),
                Some(Err(_)) => {
                    return CliCommand::Invalid("--seed expects an unsigned integer".to_string())
                }
                None => return CliCommand::Invalid("--seed needs a value".to_string()),
            },
            other => {
                if let Some(url) = other.strip_prefix("--api-url=") {
                    overrides.api_url = Some(url.to_string());
                } else {
                    return CliCommand::Invalid(format!("unknown argument '{}'", other));
                }
            }
        }
    }
    CliCommand::RunTui(overrides)
}

pub const USAGE: &str = "\
Usage: aura [OPTIONS]

Options:
  --api-url <URL>   Wellness API base URL (overrides AURA_API_URL)
  --offline         Use the built-in catalogue even if an API URL is set
  --seed <N>        Seed for reply selection and background layout
  -h, --help        Print this help
  -V, --version     Print version";
