// Rendering tests against ratatui's TestBackend at several terminal sizes:
// - 120x40 (wide terminal)
// - 80x24 (standard terminal)
// - 40x12 (extra small)

use std::sync::Arc;

use aura::adapters::{MockBackend, RecordingDialer};
use aura::app::App;
use aura::startup::AppConfig;
use aura::state::ModalId;
use aura::ui;
use ratatui::{backend::TestBackend, Terminal};

fn app() -> App {
    let config = AppConfig::default().with_seed(Some(1));
    App::new(
        Arc::new(MockBackend::new()),
        Arc::new(RecordingDialer::new()),
        &config,
    )
}

fn draw(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_home_screen_wide() {
    let text = draw(&app(), 120, 40);
    assert!(text.contains("Your Mental Wellness Journey"));
    assert!(text.contains("AI Bot"));
    assert!(text.contains("24/7 Crisis Support"));
    assert!(text.contains("SIH 2025 NOVANERDS"));
}

#[test]
fn test_home_screen_standard() {
    let text = draw(&app(), 80, 24);
    assert!(text.contains("Your Mental Wellness Journey"));
    assert!(text.contains("mock backend"));
}

// Opening the content modals spawns their loads
#[tokio::test]
async fn test_tiny_terminal_does_not_panic() {
    let mut app = app();
    draw(&app, 40, 12);
    for id in ModalId::ALL {
        app.open_modal(id);
    }
    draw(&app, 40, 12);
    draw(&app, 10, 4);
}

#[test]
fn test_crisis_modal_lists_quick_actions() {
    let mut app = app();
    app.open_modal(ModalId::Crisis);
    let text = draw(&app, 120, 40);
    assert!(text.contains("Call 911 Now"));
    assert!(text.contains("Call 988"));
    assert!(text.contains("Emergency Services"));
}

#[test]
fn test_chat_modal_shows_greeting_and_disclaimer() {
    let mut app = app();
    app.open_modal(ModalId::Chatbot);
    let text = draw(&app, 120, 40);
    assert!(text.contains("AI Wellness Companion"));
    assert!(text.contains("Hello!"));
}

#[test]
fn test_changing_crisis_country_shows_empty_state() {
    let mut app = app();
    app.open_modal(ModalId::Crisis);
    app.crisis.cycle_country();
    let text = draw(&app, 120, 40);
    assert!(text.contains("No helplines listed for CA"));
}
