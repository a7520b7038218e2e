//! Application state and logic.
//!
//! [`App`] owns the root coordinator, every modal's state and the channel
//! background tasks report back on. It is only ever mutated on the UI loop.

mod handlers;
mod messages;
mod navigation;
mod tasks;
mod types;

pub use messages::AppMessage;
pub use types::{NoticeKind, StatusNotice, NOTICE_TICKS};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::catalog;
use crate::input::{CommandRegistry, InputContext};
use crate::modals::{
    ChatState, CommunityState, CrisisState, DirectoryState, LibraryState, Responder,
};
use crate::startup::AppConfig;
use crate::state::{ModalId, RootState};
use crate::traits::{Backend, Dialer};
use crate::ui::background::Background;

/// Main application state
pub struct App {
    /// Modal visibility and navigation selection
    pub root: RootState,
    pub chat: ChatState,
    pub community: CommunityState,
    pub directory: DirectoryState,
    pub library: LibraryState,
    pub crisis: CrisisState,
    /// Particle layout behind the home screen
    pub background: Background,
    /// Focused card in the showcase grid
    pub showcase_index: usize,
    /// Message in the status bar, if any
    pub status: Option<StatusNotice>,
    /// Flag to indicate the app should quit
    pub should_quit: bool,
    /// Set when state changed since the last draw
    pub needs_redraw: bool,
    /// Tick counter for animations
    pub tick_count: u64,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Receiver for async messages (taken by the run loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    registry: CommandRegistry,
    backend: Arc<dyn Backend>,
    dialer: Arc<dyn Dialer>,
    chat_reply_delay: Duration,
    /// Pending chat reply timers, aborted on teardown
    chat_timers: Vec<JoinHandle<()>>,
}

impl App {
    pub fn new(backend: Arc<dyn Backend>, dialer: Arc<dyn Dialer>, config: &AppConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        // Reply picks and particle layout draw from separate streams of the same seed
        let background_seed = config.seed.map(|s| s.wrapping_add(1));
        Self {
            root: RootState::new(),
            chat: ChatState::new(Responder::new(config.seed)),
            community: CommunityState::new(Vec::new()),
            directory: DirectoryState::new(Vec::new()),
            library: LibraryState::new(Vec::new()),
            crisis: CrisisState::new(catalog::helplines()),
            background: Background::with_seed(background_seed),
            showcase_index: 0,
            status: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
            message_rx: Some(message_rx),
            message_tx,
            registry: CommandRegistry::new(),
            backend,
            dialer,
            chat_reply_delay: config.chat_reply_delay,
            chat_timers: Vec::new(),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations and expire the status notice
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.status.as_ref().is_some_and(|s| s.is_expired(self.tick_count)) {
            self.status = None;
            self.mark_dirty();
        }
        // Spinner and twinkle frames advance every few ticks
        if self.tick_count % 8 == 0 {
            self.mark_dirty();
        }
        self.chat_timers.retain(|h| !h.is_finished());
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    pub fn notify(&mut self, text: impl Into<String>, kind: NoticeKind) {
        self.status = Some(StatusNotice::new(text, kind, self.tick_count));
        self.mark_dirty();
    }

    /// Which key map applies right now
    pub fn input_context(&self) -> InputContext {
        match self.root.top() {
            None => InputContext::home(),
            Some(id) => {
                let text_entry = match id {
                    ModalId::Chatbot => true,
                    ModalId::Resources => self.library.editing,
                    ModalId::Community => self.community.composer.active,
                    ModalId::Counsellor | ModalId::Crisis => false,
                };
                InputContext::modal(id).with_text_entry(text_entry)
            }
        }
    }

    /// Number of chat replies still waiting on their timer
    pub fn pending_chat_timers(&self) -> usize {
        self.chat_timers.iter().filter(|h| !h.is_finished()).count()
    }

    /// Start the chat over; replies still in flight are dropped
    pub fn reset_chat(&mut self) {
        self.abort_chat_timers();
        self.chat.reset();
        self.mark_dirty();
    }

    /// Stop background work tied to the UI before exiting
    pub fn shutdown(&mut self) {
        self.abort_chat_timers();
        self.chat.reset();
    }

    pub fn quit(&mut self) {
        self.shutdown();
        self.should_quit = true;
    }

    fn abort_chat_timers(&mut self) {
        for handle in self.chat_timers.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.abort_chat_timers();
    }
}
