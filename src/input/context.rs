//! Input context for determining which commands are available.

use crate::state::ModalId;

/// Snapshot of the state that decides how a key is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    /// Modal receiving input, `None` on the home screen
    pub top: Option<ModalId>,
    /// A text field inside `top` has focus
    pub text_entry: bool,
}

impl InputContext {
    pub fn home() -> Self {
        Self::default()
    }

    pub fn modal(id: ModalId) -> Self {
        Self {
            top: Some(id),
            text_entry: id == ModalId::Chatbot,
        }
    }

    pub fn with_text_entry(mut self, text_entry: bool) -> Self {
        self.text_entry = text_entry;
        self
    }

    pub fn is_home(&self) -> bool {
        self.top.is_none()
    }
}
