//! CLI module for AURA.
//!
//! The dispatcher runs early in main(), before the terminal is touched:
//!
//! ```ignore
//! use aura::cli::{parse_args, run_cli_command};
//!
//! let overrides = match run_cli_command(parse_args(std::env::args())) {
//!     Ok(overrides) => overrides,
//!     Err(code) => std::process::exit(code),
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOverrides, USAGE};
pub use version::{handle_version_command, VERSION};

/// Handle informational commands.
///
/// Returns the overrides to start the TUI with, or the exit code when the
/// process should stop here instead.
pub fn run_cli_command(command: CliCommand) -> Result<CliOverrides, i32> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Err(0)
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            Err(2)
        }
        CliCommand::RunTui(overrides) => Ok(overrides),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_passes_overrides_through() {
        let overrides = CliOverrides {
            seed: Some(5),
            ..Default::default()
        };
        assert_eq!(
            run_cli_command(CliCommand::RunTui(overrides.clone())),
            Ok(overrides)
        );
    }

    #[test]
    fn test_invalid_exits_with_usage_code() {
        assert_eq!(
            run_cli_command(CliCommand::Invalid("bad".to_string())),
            Err(2)
        );
    }
}
