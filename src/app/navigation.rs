//! Navigation methods for the App.

use tracing::debug;

use super::App;
use crate::state::{Action, ModalId, NavTarget, Transition};
use crate::ui::showcase::ShowcaseCard;

impl App {
    /// Run `action` through the coordinator and react to the edges it produced
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let (next, transition) = self.root.reduce(action);
        self.root = next;
        debug!(?action, opened = ?transition.opened, closed = ?transition.closed, "root transition");

        for id in &transition.closed {
            self.on_modal_closed(*id);
        }
        for id in &transition.opened {
            self.on_modal_opened(*id);
        }
        self.mark_dirty();
        transition
    }

    pub fn navigate(&mut self, target: NavTarget) -> Transition {
        self.dispatch(Action::Navigate(target))
    }

    pub fn open_modal(&mut self, id: ModalId) -> Transition {
        self.dispatch(Action::OpenModal(id))
    }

    pub fn close_modal(&mut self, id: ModalId) -> Transition {
        self.dispatch(Action::CloseModal(id))
    }

    pub fn close_top(&mut self) -> Transition {
        self.dispatch(Action::CloseTop)
    }

    pub fn next_tab(&mut self) -> Transition {
        let target = self.root.nav().next();
        self.navigate(target)
    }

    pub fn prev_tab(&mut self) -> Transition {
        let target = self.root.nav().prev();
        self.navigate(target)
    }

    pub fn showcase_next(&mut self) {
        self.showcase_index = (self.showcase_index + 1) % ShowcaseCard::ALL.len();
    }

    pub fn showcase_prev(&mut self) {
        let len = ShowcaseCard::ALL.len();
        self.showcase_index = (self.showcase_index + len - 1) % len;
    }

    /// Open the focused showcase card's modal; the nav tab is left alone
    pub fn activate_showcase(&mut self) -> Transition {
        let card = ShowcaseCard::ALL[self.showcase_index % ShowcaseCard::ALL.len()];
        self.open_modal(card.modal())
    }

    fn on_modal_opened(&mut self, id: ModalId) {
        match id {
            ModalId::Community => self.load_posts(),
            ModalId::Resources => self.load_resources(),
            ModalId::Counsellor => self.load_counsellors(),
            ModalId::Chatbot => self.chat.scroll.pin(),
            ModalId::Crisis => {}
        }
    }

    fn on_modal_closed(&mut self, id: ModalId) {
        match id {
            ModalId::Community => {
                self.community.load.reset();
                self.community.composer.active = false;
            }
            ModalId::Resources => {
                self.library.load.reset();
                self.library.editing = false;
            }
            ModalId::Counsellor => self.directory.load.reset(),
            // The chat session survives being hidden
            ModalId::Chatbot | ModalId::Crisis => {}
        }
    }
}
