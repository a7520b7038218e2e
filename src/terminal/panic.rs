//! Panic hook for terminal restoration.
//!
//! Without it a panic would leave the user's shell in raw mode on the
//! alternate screen.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal, logs the panic and then
/// hands off to the previously installed hook (color-eyre's, in the binary).
///
/// Call it after `color_eyre::install()` and before creating the
/// `TerminalManager`.
///
/// ```no_run
/// color_eyre::install().unwrap();
/// aura::terminal::setup_panic_hook();
/// ```
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(panic = %panic_info, "application panicked");
        original_hook(panic_info);
    }));
}
