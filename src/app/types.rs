//! Supporting types for the App.

/// How long a status notice stays up, in 16ms ticks (about four seconds)
pub const NOTICE_TICKS: u64 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// One-line message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotice {
    pub text: String,
    pub kind: NoticeKind,
    /// Tick after which the notice is cleared
    pub expires_at: u64,
}

impl StatusNotice {
    pub fn new(text: impl Into<String>, kind: NoticeKind, now_tick: u64) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: now_tick.saturating_add(NOTICE_TICKS),
        }
    }

    pub fn is_expired(&self, tick: u64) -> bool {
        tick >= self.expires_at
    }
}
