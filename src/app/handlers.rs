//! Message and key handling for the App.

use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use tracing::{debug, info, warn};

use super::{App, AppMessage, NoticeKind};
use crate::error::AuraError;
use crate::input::Command;
use crate::modals::{CommunityRetry, CrisisTarget, QuickAction};
use crate::state::ModalId;

/// Rows moved by PageUp / PageDown in lists
const PAGE_ROWS: usize = 5;
/// Lines scrolled per step in the chat transcript
const CHAT_SCROLL_LINES: u16 = 3;

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::PostsLoaded { generation, result } => match result {
                Ok(posts) => {
                    if self.community.load.finish(generation) {
                        debug!(count = posts.len(), "posts loaded");
                        self.community.replace_posts(posts);
                    } else {
                        debug!(generation, "dropping stale posts");
                    }
                }
                Err(e) => {
                    if self.community.load.fail(generation, e.user_message()) {
                        warn!(error = %e, "failed to load posts");
                    }
                }
            },
            AppMessage::CounsellorsLoaded { generation, result } => match result {
                Ok(counsellors) => {
                    if self.directory.load.finish(generation) {
                        debug!(count = counsellors.len(), "counsellors loaded");
                        self.directory.replace_counsellors(counsellors);
                    } else {
                        debug!(generation, "dropping stale counsellors");
                    }
                }
                Err(e) => {
                    if self.directory.load.fail(generation, e.user_message()) {
                        warn!(error = %e, "failed to load counsellors");
                    }
                }
            },
            AppMessage::ResourcesLoaded { generation, result } => match result {
                Ok(resources) => {
                    if self.library.load.finish(generation) {
                        debug!(count = resources.len(), "resources loaded");
                        self.library.replace_resources(resources);
                    } else {
                        debug!(generation, "dropping stale resources");
                    }
                }
                Err(e) => {
                    if self.library.load.fail(generation, e.user_message()) {
                        warn!(error = %e, "failed to load resources");
                    }
                }
            },
            AppMessage::ChatReplyDue(pending) => {
                if !self.chat.deliver_reply(&pending) {
                    debug!(session = pending.session, "dropping reply for a reset chat");
                }
            }
            AppMessage::LikeConfirmed { post_id } => {
                debug!(%post_id, "like recorded");
            }
            AppMessage::LikeFailed {
                post_id,
                liked,
                error,
            } => self.handle_like_failed(post_id, liked, error),
            AppMessage::PostConfirmed { post_id } => {
                info!(%post_id, "post shared");
                self.notify("Your post was shared", NoticeKind::Success);
            }
            AppMessage::PostFailed {
                post_id,
                request,
                error,
            } => {
                warn!(%post_id, error = %error, "post rejected");
                if error.requires_rollback() {
                    self.community.remove_post(&post_id);
                    self.community.retry = Some(CommunityRetry::Post(request));
                    self.notify(
                        format!("{} Press r to retry.", error.user_message()),
                        NoticeKind::Error,
                    );
                } else {
                    self.notify(error.user_message(), NoticeKind::Error);
                }
            }
            AppMessage::CallPlaced(result) => match result {
                Ok(digits) => self.notify(format!("Dialing {}", digits), NoticeKind::Success),
                Err(e) => {
                    warn!(error = %e, "call failed");
                    self.notify(e.user_message(), NoticeKind::Error);
                }
            },
            AppMessage::Notice(text) => self.notify(text, NoticeKind::Info),
        }
    }

    fn handle_like_failed(&mut self, post_id: String, liked: bool, error: AuraError) {
        warn!(%post_id, error = %error, "like rejected");
        if !error.requires_rollback() {
            return;
        }
        // A later toggle already moved the post elsewhere; leave it
        let still_optimistic = self
            .community
            .posts()
            .iter()
            .any(|p| p.id == post_id && p.liked_by_viewer == liked);
        if still_optimistic {
            self.community.toggle_like(&post_id);
        }
        self.community.retry = Some(CommunityRetry::Like { post_id });
        self.notify(
            format!("{} Press r to retry.", error.user_message()),
            NoticeKind::Error,
        );
    }

    /// Resolve a key press in the current context and run it
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let context = self.input_context();
        if let Some(cmd) = self.registry.dispatch(key, &context) {
            self.execute_command(cmd);
        }
    }

    /// Bracketed paste goes into the focused text field, newlines flattened
    pub fn handle_paste(&mut self, text: &str) {
        if !self.input_context().text_entry {
            return;
        }
        for c in text.chars() {
            match c {
                '\r' => {}
                '\n' | '\t' => self.type_char(' '),
                c if c.is_control() => {}
                c => self.type_char(c),
            }
        }
    }

    /// Wheel scrolling moves the selection in the top modal
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.execute_command(Command::MoveUp),
            MouseEventKind::ScrollDown => self.execute_command(Command::MoveDown),
            _ => {}
        }
    }

    pub fn execute_command(&mut self, cmd: Command) {
        debug!(?cmd, top = ?self.root.top(), "command");
        match cmd {
            Command::Quit => self.quit(),
            Command::CloseTop => {
                self.close_top();
            }
            Command::Navigate(target) => {
                self.navigate(target);
            }
            Command::NextTab => {
                self.next_tab();
            }
            Command::PrevTab => {
                self.prev_tab();
            }
            Command::Login | Command::Signup => {
                info!(?cmd, "account action requested");
                self.notify("Accounts are not available yet", NoticeKind::Info);
            }
            Command::ShowcasePrev => {
                self.showcase_prev();
                self.mark_dirty();
            }
            Command::ShowcaseNext => {
                self.showcase_next();
                self.mark_dirty();
            }
            Command::ShowcaseActivate => {
                self.activate_showcase();
            }
            Command::OpenModal(id) => {
                self.open_modal(id);
            }
            Command::MoveUp => self.move_selection(-1),
            Command::MoveDown => self.move_selection(1),
            Command::PageUp => self.move_selection(-(PAGE_ROWS as isize)),
            Command::PageDown => self.move_selection(PAGE_ROWS as isize),
            Command::TypeChar(c) => self.type_char(c),
            Command::Backspace => self.backspace(),
            Command::Submit => self.submit(),
            Command::StopEditing => {
                self.library.editing = false;
                self.community.composer.active = false;
                self.mark_dirty();
            }
            Command::ResetChat => {
                info!(session = self.chat.session(), "chat reset");
                self.reset_chat();
            }
            Command::StartSearch => {
                self.library.editing = true;
                self.mark_dirty();
            }
            Command::CycleLibraryCategory => {
                self.library.cycle_category();
                self.mark_dirty();
            }
            Command::Download => self.download_selected(),
            Command::ToggleLike => self.like_selected(),
            Command::CycleFeedCategory => {
                self.community.cycle_category();
                self.mark_dirty();
            }
            Command::StartCompose => {
                self.community.composer.active = true;
                self.mark_dirty();
            }
            Command::ToggleAnonymous => {
                self.community.composer.anonymous = !self.community.composer.anonymous;
                self.mark_dirty();
            }
            Command::CyclePostCategory => {
                self.community.composer.cycle_category();
                self.mark_dirty();
            }
            Command::Retry => self.retry_community(),
            Command::CycleSpecialization => {
                self.directory.cycle_specialization();
                self.mark_dirty();
            }
            Command::CycleSessionType => {
                self.directory.cycle_session_type();
                self.mark_dirty();
            }
            Command::CycleSort => {
                self.directory.cycle_sort();
                self.mark_dirty();
            }
            Command::Book => self.book_selected(),
            Command::CycleCountry => {
                self.crisis.cycle_country();
                self.mark_dirty();
            }
            Command::CycleUrgency => {
                self.crisis.cycle_urgency();
                self.mark_dirty();
            }
            Command::Activate => self.activate_crisis_row(),
            Command::Noop => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let Some(top) = self.root.top() else {
            return;
        };
        let steps = delta.unsigned_abs();
        match top {
            ModalId::Chatbot => {
                let lines = CHAT_SCROLL_LINES.saturating_mul(steps.min(u16::MAX as usize) as u16);
                if delta < 0 {
                    self.chat.scroll.up(lines);
                } else {
                    self.chat.scroll.down(lines);
                }
            }
            ModalId::Resources => {
                for _ in 0..steps {
                    if delta < 0 {
                        self.library.select_prev();
                    } else {
                        self.library.select_next();
                    }
                }
            }
            ModalId::Community => {
                for _ in 0..steps {
                    if delta < 0 {
                        self.community.select_prev();
                    } else {
                        self.community.select_next();
                    }
                }
            }
            ModalId::Counsellor => {
                for _ in 0..steps {
                    if delta < 0 {
                        self.directory.select_prev();
                    } else {
                        self.directory.select_next();
                    }
                }
            }
            ModalId::Crisis => {
                for _ in 0..steps {
                    if delta < 0 {
                        self.crisis.select_prev();
                    } else {
                        self.crisis.select_next();
                    }
                }
            }
        }
        self.mark_dirty();
    }

    fn type_char(&mut self, c: char) {
        match self.root.top() {
            Some(ModalId::Chatbot) => self.chat.input.push(c),
            Some(ModalId::Resources) => self.library.push_query(c),
            Some(ModalId::Community) => self.community.composer.content.push(c),
            _ => return,
        }
        self.mark_dirty();
    }

    fn backspace(&mut self) {
        match self.root.top() {
            Some(ModalId::Chatbot) => {
                self.chat.input.pop();
            }
            Some(ModalId::Resources) => self.library.pop_query(),
            Some(ModalId::Community) => {
                self.community.composer.content.pop();
            }
            _ => return,
        }
        self.mark_dirty();
    }

    fn submit(&mut self) {
        match self.root.top() {
            Some(ModalId::Chatbot) => {
                if let Some(pending) = self.chat.submit_input() {
                    self.chat.scroll.pin();
                    self.schedule_reply(pending);
                }
            }
            Some(ModalId::Resources) => self.library.editing = false,
            Some(ModalId::Community) => match self.community.submit_composer() {
                Ok((post_id, request)) => {
                    debug!(%post_id, category = %request.category, "posting");
                    self.send_post(post_id, request);
                }
                Err(e) => self.notify(e.user_message(), NoticeKind::Error),
            },
            _ => return,
        }
        self.mark_dirty();
    }

    fn like_selected(&mut self) {
        let Some(post_id) = self.community.selected_post().map(|p| p.id.clone()) else {
            return;
        };
        self.toggle_and_send_like(post_id);
    }

    fn toggle_and_send_like(&mut self, post_id: String) {
        if !self.community.toggle_like(&post_id) {
            return;
        }
        let liked = self
            .community
            .posts()
            .iter()
            .find(|p| p.id == post_id)
            .is_some_and(|p| p.liked_by_viewer);
        self.send_like(post_id, liked);
        self.mark_dirty();
    }

    fn retry_community(&mut self) {
        let Some(retry) = self.community.retry.take() else {
            return;
        };
        info!(?retry, "retrying community action");
        match retry {
            CommunityRetry::Like { post_id } => self.toggle_and_send_like(post_id),
            CommunityRetry::Post(request) => {
                let submitted = self
                    .community
                    .submit_post(&request.content, &request.category, request.is_anonymous)
                    .map(|p| p.id.clone());
                match submitted {
                    Ok(post_id) => self.send_post(post_id, request),
                    Err(e) => self.notify(e.user_message(), NoticeKind::Error),
                }
                self.mark_dirty();
            }
        }
    }

    fn activate_crisis_row(&mut self) {
        match self.crisis.selected_target() {
            Some(CrisisTarget::Quick(QuickAction::CrisisChat)) => self.start_crisis_chat(),
            Some(CrisisTarget::Quick(action)) => {
                if let Some(number) = action.number() {
                    self.place_call(number.to_string());
                }
            }
            Some(CrisisTarget::Helpline(phone)) => self.place_call(phone),
            None => {}
        }
    }
}
