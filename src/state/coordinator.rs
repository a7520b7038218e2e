//! Root coordinator: modal visibility and navigation selection.
//!
//! All transitions go through [`RootState::reduce`], which returns the next
//! state together with the edges it produced. A navigate step closes every
//! modal and opens at most one inside the same call, so no caller can ever
//! observe two modals open as a result of navigation.

use std::fmt;

/// The five modal dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    Chatbot,
    Resources,
    Community,
    Counsellor,
    Crisis,
}

impl ModalId {
    pub const ALL: [ModalId; 5] = [
        ModalId::Chatbot,
        ModalId::Resources,
        ModalId::Community,
        ModalId::Counsellor,
        ModalId::Crisis,
    ];

    fn index(self) -> usize {
        match self {
            ModalId::Chatbot => 0,
            ModalId::Resources => 1,
            ModalId::Community => 2,
            ModalId::Counsellor => 3,
            ModalId::Crisis => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModalId::Chatbot => "chatbot",
            ModalId::Resources => "resources",
            ModalId::Community => "community",
            ModalId::Counsellor => "counsellor",
            ModalId::Crisis => "crisis",
        }
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header navigation selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavTarget {
    #[default]
    Home,
    Chatbot,
    Resources,
    Community,
    Counsellor,
}

impl NavTarget {
    /// Tab order in the header, home first
    pub const ALL: [NavTarget; 5] = [
        NavTarget::Home,
        NavTarget::Chatbot,
        NavTarget::Resources,
        NavTarget::Community,
        NavTarget::Counsellor,
    ];

    /// The modal a navigation target opens; `Home` opens none
    pub fn modal(&self) -> Option<ModalId> {
        match self {
            NavTarget::Home => None,
            NavTarget::Chatbot => Some(ModalId::Chatbot),
            NavTarget::Resources => Some(ModalId::Resources),
            NavTarget::Community => Some(ModalId::Community),
            NavTarget::Counsellor => Some(ModalId::Counsellor),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::Chatbot => "AI CHATBOT",
            NavTarget::Resources => "Resource Library",
            NavTarget::Community => "Community",
            NavTarget::Counsellor => "Counsellor Connect",
        }
    }

    pub fn next(&self) -> NavTarget {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> NavTarget {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// `ModalId -> bool` map, all false by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalVisibility([bool; 5]);

impl ModalVisibility {
    pub fn is_open(&self, id: ModalId) -> bool {
        self.0[id.index()]
    }

    fn set(&mut self, id: ModalId, open: bool) {
        self.0[id.index()] = open;
    }

    pub fn open_count(&self) -> usize {
        self.0.iter().filter(|open| **open).count()
    }

    pub fn open_modals(&self) -> impl Iterator<Item = ModalId> + '_ {
        ModalId::ALL.into_iter().filter(|id| self.is_open(*id))
    }
}

/// Intents accepted by the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenModal(ModalId),
    CloseModal(ModalId),
    Navigate(NavTarget),
    /// Close whichever modal is drawn on top
    CloseTop,
}

/// Edges produced by a single reducer step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// Modals that went closed -> open
    pub opened: Vec<ModalId>,
    /// Modals that went open -> closed
    pub closed: Vec<ModalId>,
}

impl Transition {
    pub fn is_empty(&self) -> bool {
        self.opened.is_empty() && self.closed.is_empty()
    }
}

/// Immutable root state; replace it with the output of [`RootState::reduce`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootState {
    visibility: ModalVisibility,
    nav: NavTarget,
    /// Open modals in the order they were opened; last is on top
    stack: Vec<ModalId>,
}

impl RootState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> &ModalVisibility {
        &self.visibility
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.visibility.is_open(id)
    }

    pub fn nav(&self) -> NavTarget {
        self.nav
    }

    /// The modal that receives input
    pub fn top(&self) -> Option<ModalId> {
        self.stack.last().copied()
    }

    /// Open modals in draw order, bottom first
    pub fn draw_order(&self) -> &[ModalId] {
        &self.stack
    }

    pub fn reduce(&self, action: Action) -> (RootState, Transition) {
        let mut next = self.clone();
        match action {
            Action::OpenModal(id) => next.open(id),
            Action::CloseModal(id) => next.close(id),
            Action::Navigate(target) => {
                next.nav = target;
                for id in ModalId::ALL {
                    next.close(id);
                }
                if let Some(id) = target.modal() {
                    next.open(id);
                }
            }
            Action::CloseTop => {
                if let Some(id) = next.top() {
                    next.close(id);
                }
            }
        }
        let transition = self.diff(&next);
        (next, transition)
    }

    fn open(&mut self, id: ModalId) {
        if !self.visibility.is_open(id) {
            self.visibility.set(id, true);
            self.stack.push(id);
        }
    }

    fn close(&mut self, id: ModalId) {
        self.visibility.set(id, false);
        self.stack.retain(|open| *open != id);
    }

    fn diff(&self, next: &RootState) -> Transition {
        let mut transition = Transition::default();
        for id in ModalId::ALL {
            match (self.is_open(id), next.is_open(id)) {
                (false, true) => transition.opened.push(id),
                (true, false) => transition.closed.push(id),
                _ => {}
            }
        }
        transition
    }
}
