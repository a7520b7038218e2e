//! End-to-end App flows against the mock backend and recording dialer.
//!
//! Background tasks report through the App's message channel; `pump` waits
//! for the next message and feeds it back the way the run loop does.

use std::sync::Arc;
use std::time::Duration;

use aura::adapters::{MockBackend, MockEndpoint, RecordingDialer};
use aura::app::{App, AppMessage, NoticeKind};
use aura::input::Command;
use aura::modals::CommunityRetry;
use aura::startup::AppConfig;
use aura::state::{LoadState, ModalId, NavTarget};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedReceiver;

struct Harness {
    app: App,
    rx: UnboundedReceiver<AppMessage>,
    backend: MockBackend,
    dialer: RecordingDialer,
}

fn harness_with(backend: MockBackend, dialer: RecordingDialer, reply_delay: Duration) -> Harness {
    let config = AppConfig::default()
        .with_seed(Some(3))
        .with_chat_reply_delay(reply_delay);
    let mut app = App::new(Arc::new(backend.clone()), Arc::new(dialer.clone()), &config);
    let rx = app.message_rx.take().expect("receiver present on a new app");
    Harness {
        app,
        rx,
        backend,
        dialer,
    }
}

fn harness() -> Harness {
    harness_with(MockBackend::new(), RecordingDialer::new(), Duration::ZERO)
}

impl Harness {
    async fn pump(&mut self) {
        let msg = tokio::time::timeout(Duration::from_secs(2), self.rx.recv())
            .await
            .expect("timed out waiting for a background message")
            .expect("message channel closed");
        self.app.handle_message(msg);
    }

    async fn assert_quiet(&mut self) {
        let next = tokio::time::timeout(Duration::from_millis(150), self.rx.recv()).await;
        assert!(next.is_err(), "expected no message, got {:?}", next);
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.app.execute_command(Command::TypeChar(c));
        }
    }

    fn status_text(&self) -> String {
        self.app
            .status
            .as_ref()
            .map(|s| s.text.clone())
            .unwrap_or_default()
    }

    fn status_kind(&self) -> Option<NoticeKind> {
        self.app.status.as_ref().map(|s| s.kind)
    }
}

/// Poll `check` until it holds; background logging reports no message.
async fn eventually<F: Fn() -> bool>(check: F) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !check() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition never held");
}

// ============================================================================
// Navigation and loading
// ============================================================================

#[tokio::test]
async fn test_opening_community_fetches_posts() {
    let mut h = harness();
    h.app.open_modal(ModalId::Community);
    assert!(h.app.community.load.state().is_loading());
    assert!(h.app.community.posts().is_empty());

    h.pump().await;
    assert_eq!(h.app.community.load.state(), &LoadState::Ready);
    assert_eq!(h.app.community.posts().len(), 2);
    assert_eq!(h.backend.call_count(MockEndpoint::FetchPosts), 1);
}

#[tokio::test]
async fn test_result_after_close_is_dropped() {
    let mut h = harness();
    h.app.open_modal(ModalId::Resources);
    h.app.close_modal(ModalId::Resources);

    h.pump().await;
    assert_eq!(h.app.library.load.state(), &LoadState::Idle);
    assert!(h.app.library.resources().is_empty());
}

#[tokio::test]
async fn test_reopen_refetches() {
    let mut h = harness();
    h.app.open_modal(ModalId::Counsellor);
    h.pump().await;
    h.app.close_top();
    h.app.open_modal(ModalId::Counsellor);
    h.pump().await;
    assert_eq!(h.backend.call_count(MockEndpoint::FetchCounsellors), 2);
    assert_eq!(h.app.directory.counsellors().len(), 3);
}

#[tokio::test]
async fn test_failed_load_shows_message() {
    let mut h = harness_with(
        MockBackend::new().failing(MockEndpoint::FetchResources),
        RecordingDialer::new(),
        Duration::ZERO,
    );
    h.app.open_modal(ModalId::Resources);
    h.pump().await;
    assert!(matches!(h.app.library.load.state(), LoadState::Failed(_)));
}

#[tokio::test]
async fn test_navigate_replaces_direct_opens() {
    let mut h = harness();
    h.app.open_modal(ModalId::Crisis);
    h.app.open_modal(ModalId::Chatbot);
    h.app.navigate(NavTarget::Community);

    assert!(h.app.root.is_open(ModalId::Community));
    assert!(!h.app.root.is_open(ModalId::Crisis));
    assert!(!h.app.root.is_open(ModalId::Chatbot));
    assert_eq!(h.app.root.visibility().open_count(), 1);
}

#[tokio::test]
async fn test_showcase_opens_without_changing_tab() {
    let mut h = harness();
    h.app.execute_command(Command::ShowcaseNext);
    h.app.execute_command(Command::ShowcaseActivate);
    assert!(h.app.root.is_open(ModalId::Resources));
    assert_eq!(h.app.root.nav(), NavTarget::Home);
}

#[tokio::test]
async fn test_number_keys_navigate_from_home() {
    let mut h = harness();
    h.app.handle_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE));
    assert_eq!(h.app.root.top(), Some(ModalId::Chatbot));
    assert_eq!(h.app.root.nav(), NavTarget::Chatbot);

    // Inside the chat input the same key is text
    h.app.handle_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE));
    assert_eq!(h.app.chat.input, "3");
    assert_eq!(h.app.root.top(), Some(ModalId::Chatbot));
}

#[tokio::test]
async fn test_esc_closes_top_modal_only() {
    let mut h = harness();
    h.app.open_modal(ModalId::Crisis);
    h.app.open_modal(ModalId::Chatbot);
    h.app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert_eq!(h.app.root.top(), Some(ModalId::Crisis));
}

#[tokio::test]
async fn test_login_and_signup_are_placeholders() {
    let mut h = harness();
    for code in ['l', 'u'] {
        h.app.handle_key(KeyEvent::new(KeyCode::Char(code), KeyModifiers::NONE));
        assert!(h.status_text().contains("Accounts are not available yet"));
        assert_eq!(h.status_kind(), Some(NoticeKind::Info));
        assert!(h.app.root.top().is_none());
        assert_eq!(h.app.root.nav(), NavTarget::Home);
    }
    h.assert_quiet().await;
}

// ============================================================================
// Chat
// ============================================================================

#[tokio::test]
async fn test_chat_reply_arrives_after_delay() {
    let mut h = harness();
    h.app.navigate(NavTarget::Chatbot);
    h.type_text("I feel anxious about tomorrow");
    h.app.execute_command(Command::Submit);

    assert_eq!(h.app.chat.messages().len(), 2);
    assert!(h.app.chat.is_composing());
    assert!(h.app.chat.input.is_empty());

    h.pump().await;
    let messages = h.app.chat.messages();
    assert_eq!(messages.len(), 3);
    assert!(messages[2].text.contains("breathing exercise"));
    assert!(!h.app.chat.is_composing());
}

#[tokio::test]
async fn test_blank_chat_submit_sends_nothing() {
    let mut h = harness();
    h.app.navigate(NavTarget::Chatbot);
    h.type_text("   ");
    h.app.execute_command(Command::Submit);
    assert_eq!(h.app.chat.messages().len(), 1);
    assert_eq!(h.app.pending_chat_timers(), 0);
    h.assert_quiet().await;
}

#[tokio::test]
async fn test_reset_chat_cancels_pending_reply() {
    let mut h = harness_with(
        MockBackend::new(),
        RecordingDialer::new(),
        Duration::from_millis(50),
    );
    h.app.navigate(NavTarget::Chatbot);
    h.type_text("hello");
    h.app.execute_command(Command::Submit);
    assert_eq!(h.app.pending_chat_timers(), 1);

    h.app.execute_command(Command::ResetChat);
    assert_eq!(h.app.pending_chat_timers(), 0);
    assert_eq!(h.app.chat.messages().len(), 1);
    h.assert_quiet().await;
}

#[tokio::test]
async fn test_chat_survives_close_and_reopen() {
    let mut h = harness();
    h.app.navigate(NavTarget::Chatbot);
    h.type_text("thanks");
    h.app.execute_command(Command::Submit);
    h.pump().await;
    h.app.close_top();
    h.app.navigate(NavTarget::Chatbot);
    assert_eq!(h.app.chat.messages().len(), 3);
}

#[tokio::test]
async fn test_paste_goes_into_chat_input() {
    let mut h = harness();
    h.app.navigate(NavTarget::Chatbot);
    h.app.handle_paste("line one\nline two");
    assert_eq!(h.app.chat.input, "line one line two");
}

#[tokio::test]
async fn test_paste_outside_text_entry_is_ignored() {
    let mut h = harness();
    h.app.open_modal(ModalId::Crisis);
    h.app.handle_paste("911");
    assert!(h.app.chat.input.is_empty());
    assert_eq!(h.app.root.top(), Some(ModalId::Crisis));
}

// ============================================================================
// Community
// ============================================================================

async fn community_ready(h: &mut Harness) {
    h.app.open_modal(ModalId::Community);
    h.pump().await;
}

#[tokio::test]
async fn test_like_is_optimistic_and_confirmed() {
    let mut h = harness();
    community_ready(&mut h).await;
    h.app.execute_command(Command::ToggleLike);
    let post = &h.app.community.posts()[0];
    assert!(post.liked_by_viewer);
    assert_eq!(post.like_count, 25);

    h.pump().await;
    let post = &h.app.community.posts()[0];
    assert!(post.liked_by_viewer);
    assert_eq!(post.like_count, 25);
    assert!(h.app.community.retry.is_none());
}

#[tokio::test]
async fn test_failed_like_rolls_back_and_retries() {
    let mut h = harness_with(
        MockBackend::new().failing(MockEndpoint::LikePost),
        RecordingDialer::new(),
        Duration::ZERO,
    );
    community_ready(&mut h).await;
    h.app.execute_command(Command::ToggleLike);
    h.pump().await;

    let post = &h.app.community.posts()[0];
    assert!(!post.liked_by_viewer);
    assert_eq!(post.like_count, 24);
    assert_eq!(
        h.app.community.retry,
        Some(CommunityRetry::Like {
            post_id: "1".to_string()
        })
    );
    assert!(h.status_text().contains("Press r to retry"));
    assert_eq!(h.status_kind(), Some(NoticeKind::Error));

    h.backend.set_failing(MockEndpoint::LikePost, false);
    h.app.execute_command(Command::Retry);
    assert!(h.app.community.posts()[0].liked_by_viewer);
    h.pump().await;
    assert!(h.app.community.posts()[0].liked_by_viewer);
    assert!(h.app.community.retry.is_none());
    assert_eq!(h.backend.call_count(MockEndpoint::LikePost), 2);
}

#[tokio::test]
async fn test_new_post_is_prepended_and_shared() {
    let mut h = harness();
    community_ready(&mut h).await;
    h.app.execute_command(Command::StartCompose);
    h.type_text("Small wins today");
    h.app.execute_command(Command::Submit);

    let posts = h.app.community.posts();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].content, "Small wins today");
    assert_eq!(posts[0].category, "General");
    assert!(!h.app.community.composer.active);

    h.pump().await;
    assert_eq!(h.status_kind(), Some(NoticeKind::Success));
}

#[tokio::test]
async fn test_rejected_post_is_removed_and_kept_for_retry() {
    let mut h = harness_with(
        MockBackend::new().failing(MockEndpoint::CreatePost),
        RecordingDialer::new(),
        Duration::ZERO,
    );
    community_ready(&mut h).await;
    h.app.execute_command(Command::StartCompose);
    h.app.execute_command(Command::ToggleAnonymous);
    h.type_text("Anyone up?");
    h.app.execute_command(Command::Submit);
    assert_eq!(h.app.community.posts().len(), 3);

    h.pump().await;
    assert_eq!(h.app.community.posts().len(), 2);
    match &h.app.community.retry {
        Some(CommunityRetry::Post(request)) => {
            assert_eq!(request.content, "Anyone up?");
            assert!(request.is_anonymous);
        }
        other => panic!("expected a post retry, got {:?}", other),
    }

    h.backend.set_failing(MockEndpoint::CreatePost, false);
    h.app.execute_command(Command::Retry);
    assert_eq!(h.app.community.posts().len(), 3);
    h.pump().await;
    assert_eq!(h.app.community.posts().len(), 3);
    assert!(h.app.community.retry.is_none());
}

#[tokio::test]
async fn test_empty_post_never_reaches_backend() {
    let mut h = harness();
    community_ready(&mut h).await;
    h.app.execute_command(Command::StartCompose);
    h.app.execute_command(Command::Submit);
    assert_eq!(h.app.community.posts().len(), 2);
    assert_eq!(h.status_kind(), Some(NoticeKind::Error));
    h.assert_quiet().await;
    assert_eq!(h.backend.call_count(MockEndpoint::CreatePost), 0);
}

// ============================================================================
// Crisis
// ============================================================================

#[tokio::test]
async fn test_emergency_quick_action_dials_and_logs() {
    let mut h = harness();
    h.app.open_modal(ModalId::Crisis);
    h.app.execute_command(Command::Activate);
    h.pump().await;

    assert_eq!(h.dialer.dialed(), vec!["911".to_string()]);
    let backend = h.backend.clone();
    eventually(move || backend.call_count(MockEndpoint::EmergencyCall) == 1).await;
    let logged = h.backend.emergency_calls();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].phone, "911");
    assert_eq!(h.status_text(), "Dialing 911");
}

#[tokio::test]
async fn test_text_line_dials_digits_only() {
    let mut h = harness();
    h.app.open_modal(ModalId::Crisis);
    // Three quick actions, then Emergency Services, the Lifeline, the Text Line
    for _ in 0..5 {
        h.app.execute_command(Command::MoveDown);
    }
    h.app.execute_command(Command::Activate);
    h.pump().await;
    assert_eq!(h.dialer.dialed(), vec!["741741".to_string()]);
}

#[tokio::test]
async fn test_logging_failure_still_dials() {
    let mut h = harness_with(
        MockBackend::new().failing(MockEndpoint::EmergencyCall),
        RecordingDialer::new(),
        Duration::ZERO,
    );
    h.app.open_modal(ModalId::Crisis);
    h.app.execute_command(Command::MoveDown);
    h.app.execute_command(Command::Activate);
    h.pump().await;
    assert_eq!(h.dialer.dialed(), vec!["988".to_string()]);
    assert_eq!(h.status_kind(), Some(NoticeKind::Success));
}

#[tokio::test]
async fn test_hung_logging_does_not_delay_dial() {
    let mut h = harness_with(
        MockBackend::new().holding(MockEndpoint::EmergencyCall),
        RecordingDialer::new(),
        Duration::ZERO,
    );
    h.app.open_modal(ModalId::Crisis);
    h.app.execute_command(Command::Activate);
    h.pump().await;

    assert_eq!(h.dialer.dialed(), vec!["911".to_string()]);
    assert_eq!(h.status_text(), "Dialing 911");
    assert_eq!(h.backend.call_count(MockEndpoint::EmergencyCall), 0);

    h.backend.release(MockEndpoint::EmergencyCall);
    let backend = h.backend.clone();
    eventually(move || backend.call_count(MockEndpoint::EmergencyCall) == 1).await;
    assert_eq!(h.dialer.dialed().len(), 1);
}

#[tokio::test]
async fn test_broken_dialer_reports_error() {
    let mut h = harness_with(MockBackend::new(), RecordingDialer::broken(), Duration::ZERO);
    h.app.open_modal(ModalId::Crisis);
    h.app.execute_command(Command::Activate);
    h.pump().await;
    assert_eq!(h.status_kind(), Some(NoticeKind::Error));
}

#[tokio::test]
async fn test_crisis_chat_failure_points_to_hotline() {
    let mut h = harness_with(
        MockBackend::new().failing(MockEndpoint::CrisisChat),
        RecordingDialer::new(),
        Duration::ZERO,
    );
    h.app.open_modal(ModalId::Crisis);
    h.app.execute_command(Command::MoveDown);
    h.app.execute_command(Command::MoveDown);
    h.app.execute_command(Command::Activate);
    h.pump().await;
    assert!(h.status_text().contains("988"));
    assert!(h.dialer.dialed().is_empty());
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test]
async fn test_quit_stops_chat_timers() {
    let mut h = harness_with(
        MockBackend::new(),
        RecordingDialer::new(),
        Duration::from_secs(30),
    );
    h.app.navigate(NavTarget::Chatbot);
    h.type_text("one");
    h.app.execute_command(Command::Submit);
    h.type_text("two");
    h.app.execute_command(Command::Submit);
    assert_eq!(h.app.pending_chat_timers(), 2);

    h.app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(h.app.should_quit);
    assert_eq!(h.app.pending_chat_timers(), 0);
}
