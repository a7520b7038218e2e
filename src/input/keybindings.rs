//! Default keybindings for the application.
//!
//! This module defines the default key bindings that map key combinations
//! to commands, grouped by the context in which they apply.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::state::{ModalId, NavTarget};

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Normalized combo for lookup.
    ///
    /// Terminals report Shift alongside characters that are already
    /// upper-case, and always alongside BackTab; both are dropped.
    pub fn from_event(key: &KeyEvent) -> Self {
        let mut modifiers = key.modifiers;
        if matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        Self::new(key.code, modifiers)
    }
}

type Bindings = HashMap<KeyCombo, Command>;

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active in every context
    pub global: Bindings,
    /// Header shortcuts, active whenever no text field has focus
    pub header: Bindings,
    /// Home screen (no modal open)
    pub home: Bindings,
    /// Per-modal list navigation and actions
    pub modal: HashMap<ModalId, Bindings>,
    /// Per-modal bindings while a text field has focus
    pub text: HashMap<ModalId, Bindings>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            header: HashMap::new(),
            home: HashMap::new(),
            modal: HashMap::new(),
            text: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_header_bindings();
        config.setup_home_bindings();
        config.setup_modal_bindings();
        config.setup_text_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        let g = &mut self.global;
        g.insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        g.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseTop);
        g.insert(KeyCombo::plain(KeyCode::Tab), Command::NextTab);
        g.insert(KeyCombo::plain(KeyCode::BackTab), Command::PrevTab);
    }

    fn setup_header_bindings(&mut self) {
        let h = &mut self.header;
        h.insert(KeyCombo::plain(KeyCode::Char('1')), Command::Navigate(NavTarget::Chatbot));
        h.insert(KeyCombo::plain(KeyCode::Char('2')), Command::Navigate(NavTarget::Resources));
        h.insert(KeyCombo::plain(KeyCode::Char('3')), Command::Navigate(NavTarget::Community));
        h.insert(KeyCombo::plain(KeyCode::Char('4')), Command::Navigate(NavTarget::Counsellor));
        h.insert(KeyCombo::plain(KeyCode::Char('0')), Command::Navigate(NavTarget::Home));
        h.insert(KeyCombo::plain(KeyCode::Char('h')), Command::Navigate(NavTarget::Home));
        h.insert(KeyCombo::plain(KeyCode::Char('l')), Command::Login);
        h.insert(KeyCombo::plain(KeyCode::Char('u')), Command::Signup);
        h.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
    }

    fn setup_home_bindings(&mut self) {
        let m = &mut self.home;
        m.insert(KeyCombo::plain(KeyCode::Left), Command::ShowcasePrev);
        m.insert(KeyCombo::plain(KeyCode::Right), Command::ShowcaseNext);
        m.insert(KeyCombo::plain(KeyCode::Up), Command::ShowcasePrev);
        m.insert(KeyCombo::plain(KeyCode::Down), Command::ShowcaseNext);
        m.insert(KeyCombo::plain(KeyCode::Enter), Command::ShowcaseActivate);
        m.insert(KeyCombo::plain(KeyCode::Char('e')), Command::OpenModal(ModalId::Crisis));
    }

    fn list_bindings() -> Bindings {
        let mut m = HashMap::new();
        m.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        m.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        m.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
        m.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);
        m
    }

    fn setup_modal_bindings(&mut self) {
        let mut library = Self::list_bindings();
        library.insert(KeyCombo::plain(KeyCode::Char('/')), Command::StartSearch);
        library.insert(KeyCombo::plain(KeyCode::Char('c')), Command::CycleLibraryCategory);
        library.insert(KeyCombo::plain(KeyCode::Char('d')), Command::Download);
        library.insert(KeyCombo::plain(KeyCode::Enter), Command::Download);
        self.modal.insert(ModalId::Resources, library);

        let mut community = Self::list_bindings();
        community.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::ToggleLike);
        community.insert(KeyCombo::plain(KeyCode::Enter), Command::ToggleLike);
        community.insert(KeyCombo::plain(KeyCode::Char('c')), Command::CycleFeedCategory);
        community.insert(KeyCombo::plain(KeyCode::Char('n')), Command::StartCompose);
        community.insert(KeyCombo::plain(KeyCode::Char('r')), Command::Retry);
        self.modal.insert(ModalId::Community, community);

        let mut directory = Self::list_bindings();
        directory.insert(KeyCombo::plain(KeyCode::Char('s')), Command::CycleSpecialization);
        directory.insert(KeyCombo::plain(KeyCode::Char('t')), Command::CycleSessionType);
        directory.insert(KeyCombo::plain(KeyCode::Char('o')), Command::CycleSort);
        directory.insert(KeyCombo::plain(KeyCode::Char('b')), Command::Book);
        directory.insert(KeyCombo::plain(KeyCode::Enter), Command::Book);
        self.modal.insert(ModalId::Counsellor, directory);

        let mut crisis = Self::list_bindings();
        crisis.insert(KeyCombo::plain(KeyCode::Char('c')), Command::CycleCountry);
        crisis.insert(KeyCombo::plain(KeyCode::Char('g')), Command::CycleUrgency);
        crisis.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        self.modal.insert(ModalId::Crisis, crisis);
    }

    fn setup_text_bindings(&mut self) {
        let mut chat = HashMap::new();
        chat.insert(KeyCombo::plain(KeyCode::Enter), Command::Submit);
        chat.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        chat.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        chat.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        chat.insert(KeyCombo::plain(KeyCode::PageUp), Command::PageUp);
        chat.insert(KeyCombo::plain(KeyCode::PageDown), Command::PageDown);
        chat.insert(KeyCombo::ctrl(KeyCode::Char('n')), Command::ResetChat);
        self.text.insert(ModalId::Chatbot, chat);

        let mut search = HashMap::new();
        search.insert(KeyCombo::plain(KeyCode::Enter), Command::StopEditing);
        search.insert(KeyCombo::plain(KeyCode::Esc), Command::StopEditing);
        search.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        search.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        search.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        self.text.insert(ModalId::Resources, search);

        let mut compose = HashMap::new();
        compose.insert(KeyCombo::plain(KeyCode::Enter), Command::Submit);
        compose.insert(KeyCombo::plain(KeyCode::Esc), Command::StopEditing);
        compose.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        compose.insert(KeyCombo::ctrl(KeyCode::Char('a')), Command::ToggleAnonymous);
        compose.insert(KeyCombo::ctrl(KeyCode::Char('t')), Command::CyclePostCategory);
        self.text.insert(ModalId::Community, compose);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<Command> {
        self.global.get(combo).copied()
    }

    pub fn get_header(&self, combo: &KeyCombo) -> Option<Command> {
        self.header.get(combo).copied()
    }

    pub fn get_home(&self, combo: &KeyCombo) -> Option<Command> {
        self.home.get(combo).copied()
    }

    pub fn get_modal(&self, id: ModalId, combo: &KeyCombo) -> Option<Command> {
        self.modal.get(&id).and_then(|m| m.get(combo)).copied()
    }

    pub fn get_text(&self, id: ModalId, combo: &KeyCombo) -> Option<Command> {
        self.text.get(&id).and_then(|m| m.get(combo)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    #[test]
    fn test_from_event_drops_shift_on_chars() {
        let key = KeyEvent {
            code: KeyCode::Char('A'),
            modifiers: KeyModifiers::SHIFT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(KeyCombo::from_event(&key), KeyCombo::plain(KeyCode::Char('A')));
    }

    #[test]
    fn test_backtab_normalized() {
        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_global(&KeyCombo::from_event(&key)),
            Some(Command::PrevTab)
        );
    }

    #[test]
    fn test_header_digits() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_header(&KeyCombo::plain(KeyCode::Char('3'))),
            Some(Command::Navigate(NavTarget::Community))
        );
    }

    #[test]
    fn test_every_modal_but_chat_has_list_bindings() {
        let config = KeybindingConfig::new();
        for id in [ModalId::Resources, ModalId::Community, ModalId::Counsellor, ModalId::Crisis] {
            assert_eq!(
                config.get_modal(id, &KeyCombo::plain(KeyCode::Down)),
                Some(Command::MoveDown)
            );
        }
        assert!(config.get_modal(ModalId::Chatbot, &KeyCombo::plain(KeyCode::Down)).is_none());
    }
}
