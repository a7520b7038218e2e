//! Command registry for mapping key events to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Translates key events into commands for the current context.
///
/// # Example
///
/// ```ignore
/// let registry = CommandRegistry::new();
/// if let Some(cmd) = registry.dispatch(key, &app.input_context()) {
///     app.execute_command(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeybindingConfig {
        &self.config
    }

    /// Resolve `key` in `context`; `None` means the key is unbound.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = KeyCombo::from_event(&key);

        // Ctrl+C always quits, even inside a text field
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        match context.top {
            Some(id) if context.text_entry => {
                if let Some(cmd) = self.config.get_text(id, &combo) {
                    return Some(cmd);
                }
                if let Some(cmd) = self.config.get_global(&combo) {
                    return Some(cmd);
                }
                if let KeyCode::Char(c) = key.code {
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
                    {
                        return Some(Command::TypeChar(c));
                    }
                }
                Some(Command::Noop)
            }
            Some(id) => self
                .config
                .get_modal(id, &combo)
                .or_else(|| self.config.get_header(&combo))
                .or_else(|| self.config.get_global(&combo)),
            None => self
                .config
                .get_home(&combo)
                .or_else(|| self.config.get_header(&combo))
                .or_else(|| self.config.get_global(&combo)),
        }
    }
}
