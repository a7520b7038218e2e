//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects. Which
//! commands a key can produce depends on the [`super::InputContext`].

use crate::state::{ModalId, NavTarget};

/// Every user action the app understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit (Ctrl+C anywhere, `q` outside text entry)
    Quit,
    /// Close the modal on top (Esc)
    CloseTop,

    // =========================================================================
    // Header
    // =========================================================================
    Navigate(NavTarget),
    NextTab,
    PrevTab,
    /// Placeholder intent; no authentication happens
    Login,
    /// Placeholder intent; no authentication happens
    Signup,

    // =========================================================================
    // Home screen showcase
    // =========================================================================
    ShowcasePrev,
    ShowcaseNext,
    /// Open the focused showcase card's modal directly
    ShowcaseActivate,
    OpenModal(ModalId),

    // =========================================================================
    // Lists and scrolling
    // =========================================================================
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,

    // =========================================================================
    // Text entry
    // =========================================================================
    TypeChar(char),
    Backspace,
    /// Enter in a text field
    Submit,
    /// Leave a text field without submitting
    StopEditing,

    // =========================================================================
    // Chat
    // =========================================================================
    /// Discard the conversation and start over
    ResetChat,

    // =========================================================================
    // Library
    // =========================================================================
    StartSearch,
    CycleLibraryCategory,
    Download,

    // =========================================================================
    // Community
    // =========================================================================
    ToggleLike,
    CycleFeedCategory,
    StartCompose,
    ToggleAnonymous,
    CyclePostCategory,
    Retry,

    // =========================================================================
    // Directory
    // =========================================================================
    CycleSpecialization,
    CycleSessionType,
    CycleSort,
    Book,

    // =========================================================================
    // Crisis
    // =========================================================================
    CycleCountry,
    CycleUrgency,
    /// Dial or start chat for the selected row
    Activate,

    /// Key consumed with no effect
    Noop,
}

impl Command {
    /// Commands that edit text rather than act on state
    pub fn is_text_edit(&self) -> bool {
        matches!(self, Command::TypeChar(_) | Command::Backspace)
    }
}
