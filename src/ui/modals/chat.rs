//! AI chat modal view.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::modals::ChatState;
use crate::models::Message;
use crate::ui::components::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
use crate::ui::helpers::wrap_text;
use crate::ui::theme::{COLOR_BOT_BUBBLE, COLOR_DIM, COLOR_USER_BUBBLE};

const TYPING_FRAMES: [&str; 3] = ["·  ", "·· ", "···"];

/// Transcript lines for `messages`, wrapped to `width`
pub fn transcript_lines(messages: &[Message], width: u16) -> Vec<Line<'static>> {
    let body_width = width.saturating_sub(2) as usize;
    let mut lines = Vec::new();
    for message in messages {
        let (who, color) = if message.is_user() {
            ("You", COLOR_USER_BUBBLE)
        } else {
            ("Aura", COLOR_BOT_BUBBLE)
        };
        lines.push(Line::from(vec![
            Span::styled(who, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", message.time_label()), Style::default().fg(COLOR_DIM)),
        ]));
        for row in wrap_text(&message.text, body_width) {
            lines.push(Line::from(vec![
                Span::styled("│ ", Style::default().fg(color)),
                Span::raw(row),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines
}

/// First transcript row to show given the viewport and the scroll offset
pub fn scroll_start(total: usize, viewport: usize, offset_from_bottom: usize) -> usize {
    let max_start = total.saturating_sub(viewport);
    max_start.saturating_sub(offset_from_bottom)
}

pub fn render(frame: &mut Frame, area: Rect, chat: &ChatState, focused: bool, tick: u64) {
    let [disclaimer_area, transcript_area, typing_area, input_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(INPUT_FIELD_HEIGHT),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            crate::modals::responder::DISCLAIMER,
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        )),
        disclaimer_area,
    );

    let lines = transcript_lines(chat.messages(), transcript_area.width);
    let start = scroll_start(
        lines.len(),
        transcript_area.height as usize,
        chat.scroll.offset_from_bottom as usize,
    );
    frame.render_widget(
        Paragraph::new(lines).scroll((start.min(u16::MAX as usize) as u16, 0)),
        transcript_area,
    );

    if chat.is_composing() {
        let dots = TYPING_FRAMES[(tick / 20) as usize % TYPING_FRAMES.len()];
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("Aura is typing {}", dots),
                Style::default().fg(COLOR_BOT_BUBBLE),
            )),
            typing_area,
        );
    } else if !chat.scroll.is_pinned() {
        frame.render_widget(
            Paragraph::new(Span::styled("↓ newer messages", Style::default().fg(COLOR_DIM))),
            typing_area,
        );
    }

    render_input_field(
        frame,
        input_area,
        &InputFieldConfig::new("Message", &chat.input)
            .focused(focused)
            .placeholder("Share what's on your mind…"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_start_pinned_shows_tail() {
        assert_eq!(scroll_start(30, 10, 0), 20);
    }

    #[test]
    fn test_scroll_start_clamps_at_top() {
        assert_eq!(scroll_start(30, 10, 100), 0);
        assert_eq!(scroll_start(5, 10, 0), 0);
    }

    #[test]
    fn test_transcript_has_header_per_message() {
        let messages = vec![Message::bot("hi"), Message::user("hello there")];
        let lines = transcript_lines(&messages, 40);
        // header + body + spacer for each
        assert_eq!(lines.len(), 6);
        let first: String = lines[0].spans.iter().map(|s| s.content.to_string()).collect();
        assert!(first.starts_with("Aura"));
        let user: String = lines[3].spans.iter().map(|s| s.content.to_string()).collect();
        assert!(user.starts_with("You"));
    }
}
