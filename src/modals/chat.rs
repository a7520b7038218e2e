//! Chat assistant session.
//!
//! The session itself never sleeps. [`ChatState::send_message`] records the
//! user turn and hands back a [`PendingReply`]; the app delays it and feeds it
//! back through [`ChatState::deliver_reply`]. Each reset bumps the session
//! generation so replies scheduled for an older session are discarded.

use std::time::Duration;

use tracing::debug;

use super::responder::{Responder, GREETING};
use crate::models::Message;

/// Default artificial "typing" delay before the bot answers
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// A bot reply waiting for its timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub session: u64,
    pub prompt: String,
}

/// Viewport position over the transcript
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatScroll {
    /// Lines scrolled up from the newest message; 0 means pinned to bottom
    pub offset_from_bottom: u16,
}

impl ChatScroll {
    pub fn is_pinned(&self) -> bool {
        self.offset_from_bottom == 0
    }

    pub fn pin(&mut self) {
        self.offset_from_bottom = 0;
    }

    pub fn up(&mut self, lines: u16) {
        self.offset_from_bottom = self.offset_from_bottom.saturating_add(lines);
    }

    pub fn down(&mut self, lines: u16) {
        self.offset_from_bottom = self.offset_from_bottom.saturating_sub(lines);
    }
}

#[derive(Debug)]
pub struct ChatState {
    messages: Vec<Message>,
    responder: Responder,
    session: u64,
    /// Replies scheduled but not yet delivered for the current session
    pending: usize,
    pub input: String,
    pub scroll: ChatScroll,
}

impl ChatState {
    pub fn new(responder: Responder) -> Self {
        Self {
            messages: vec![Message::bot(GREETING)],
            responder,
            session: 0,
            pending: 0,
            input: String::new(),
            scroll: ChatScroll::default(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    /// True while at least one reply is pending
    pub fn is_composing(&self) -> bool {
        self.pending > 0
    }

    /// Append the user turn and schedule a reply. Blank text is ignored.
    pub fn send_message(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }
        self.push(Message::user(text));
        self.pending += 1;
        debug!(session = self.session, "chat message queued for reply");
        Some(PendingReply {
            session: self.session,
            prompt: text.to_string(),
        })
    }

    /// Send whatever is in the input box, clearing it on success
    pub fn submit_input(&mut self) -> Option<PendingReply> {
        let text = std::mem::take(&mut self.input);
        let pending = self.send_message(&text);
        if pending.is_none() {
            self.input = text;
        }
        pending
    }

    /// Append the bot answer for `reply`; returns false if the session moved on
    pub fn deliver_reply(&mut self, reply: &PendingReply) -> bool {
        if reply.session != self.session {
            debug!(
                stale = reply.session,
                current = self.session,
                "discarding reply for torn-down chat session"
            );
            return false;
        }
        let text = self.responder.reply(&reply.prompt);
        self.push(Message::bot(text));
        self.pending = self.pending.saturating_sub(1);
        true
    }

    /// Start a fresh session with only the greeting
    pub fn reset(&mut self) {
        self.session = self.session.wrapping_add(1);
        self.messages = vec![Message::bot(GREETING)];
        self.pending = 0;
        self.input.clear();
        self.scroll.pin();
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.scroll.pin();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sender;
    use crate::modals::responder::GENERIC_REPLIES;

    fn chat() -> ChatState {
        ChatState::new(Responder::new(Some(3)))
    }

    #[test]
    fn test_starts_with_greeting() {
        let chat = chat();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].sender, Sender::Bot);
        assert_eq!(chat.messages()[0].text, GREETING);
        assert!(!chat.is_composing());
    }

    #[test]
    fn test_blank_messages_ignored() {
        let mut chat = chat();
        assert!(chat.send_message("").is_none());
        assert!(chat.send_message("   ").is_none());
        assert!(chat.send_message("\n\t").is_none());
        assert_eq!(chat.messages().len(), 1);
        assert!(!chat.is_composing());
    }

    #[test]
    fn test_send_then_deliver() {
        let mut chat = chat();
        let pending = chat.send_message("hello").unwrap();
        assert_eq!(chat.messages().len(), 2);
        assert!(chat.messages()[1].is_user());
        assert!(chat.is_composing());

        assert!(chat.deliver_reply(&pending));
        assert_eq!(chat.messages().len(), 3);
        assert!(GENERIC_REPLIES.contains(&chat.messages()[2].text.as_str()));
        assert!(!chat.is_composing());
    }

    #[test]
    fn test_reply_after_reset_is_discarded() {
        let mut chat = chat();
        let pending = chat.send_message("I am anxious").unwrap();
        chat.reset();
        assert!(!chat.deliver_reply(&pending));
        assert_eq!(chat.messages().len(), 1);
        assert!(!chat.is_composing());
    }

    #[test]
    fn test_append_repins_scroll() {
        let mut chat = chat();
        chat.scroll.up(5);
        assert!(!chat.scroll.is_pinned());
        chat.send_message("hi");
        assert!(chat.scroll.is_pinned());
    }

    #[test]
    fn test_submit_input_keeps_blank_text() {
        let mut chat = chat();
        chat.input = "  ".to_string();
        assert!(chat.submit_input().is_none());
        assert_eq!(chat.input, "  ");

        chat.input = "tired".to_string();
        assert!(chat.submit_input().is_some());
        assert!(chat.input.is_empty());
    }
}
