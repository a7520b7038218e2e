//! Footer with section headings and context-sensitive key hints.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::input::InputContext;
use crate::state::ModalId;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BLUSH, COLOR_DIM};

pub const SECTIONS: [&str; 4] = ["Mental Health Services", "Resources", "Support", "About"];
pub const CREDIT: &str = "SIH 2025 NOVANERDS";
pub const LEGAL: [&str; 2] = ["Privacy Policy", "Terms of Service"];

/// Rows the footer needs at this size
pub fn height(ctx: &LayoutContext) -> u16 {
    if ctx.should_show_footer_sections() {
        2
    } else {
        1
    }
}

/// (key, action) pairs for the current input context
pub fn keybinds(context: &InputContext) -> Vec<(&'static str, &'static str)> {
    match (context.top, context.text_entry) {
        (None, _) => vec![
            ("←→", "browse"),
            ("enter", "open"),
            ("1-4", "tabs"),
            ("e", "emergency"),
            ("q", "quit"),
        ],
        (Some(ModalId::Chatbot), _) => vec![
            ("enter", "send"),
            ("↑↓", "scroll"),
            ("ctrl+n", "new chat"),
            ("esc", "close"),
        ],
        (Some(ModalId::Resources), true) => vec![("type", "search"), ("enter", "done")],
        (Some(ModalId::Resources), false) => vec![
            ("/", "search"),
            ("c", "category"),
            ("d", "download"),
            ("esc", "close"),
        ],
        (Some(ModalId::Community), true) => vec![
            ("enter", "post"),
            ("ctrl+t", "category"),
            ("ctrl+a", "anonymous"),
            ("esc", "cancel"),
        ],
        (Some(ModalId::Community), false) => vec![
            ("space", "like"),
            ("n", "new post"),
            ("c", "filter"),
            ("r", "retry"),
            ("esc", "close"),
        ],
        (Some(ModalId::Counsellor), _) => vec![
            ("s", "specialty"),
            ("t", "session"),
            ("o", "sort"),
            ("b", "book"),
            ("esc", "close"),
        ],
        (Some(ModalId::Crisis), _) => vec![
            ("enter", "call"),
            ("c", "country"),
            ("g", "urgency"),
            ("esc", "close"),
        ],
    }
}

fn keybind_line(context: &InputContext) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in keybinds(context).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(key, Style::default().fg(COLOR_BLUSH)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

fn sections_line() -> Line<'static> {
    let mut spans = Vec::new();
    for section in SECTIONS {
        spans.push(Span::styled(format!("{}   ", section), Style::default().fg(COLOR_DIM)));
    }
    spans.push(Span::styled(
        format!("{} · {} · {}", CREDIT, LEGAL[0], LEGAL[1]),
        Style::default().fg(COLOR_DIM),
    ));
    Line::from(spans)
}

pub fn render(frame: &mut Frame, area: Rect, context: &InputContext, ctx: &LayoutContext) {
    if ctx.should_show_footer_sections() && area.height >= 2 {
        let [sections, keys] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
        frame.render_widget(Paragraph::new(sections_line()), sections);
        frame.render_widget(Paragraph::new(keybind_line(context)), keys);
    } else {
        frame.render_widget(Paragraph::new(keybind_line(context)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keybinds_change_with_text_entry() {
        let browsing = keybinds(&InputContext::modal(ModalId::Resources));
        let searching = keybinds(&InputContext::modal(ModalId::Resources).with_text_entry(true));
        assert_ne!(browsing, searching);
    }

    #[test]
    fn test_home_keybinds_mention_quit() {
        assert!(keybinds(&InputContext::home()).iter().any(|(k, _)| *k == "q"));
    }
}
