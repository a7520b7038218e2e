//! Modal dialog views.
//!
//! Every open modal is drawn in open order; only the last one drawn is
//! focused and shows a cursor.

mod chat;
mod community;
mod crisis;
mod directory;
mod library;

pub use chat::{scroll_start, transcript_lines};

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::app::App;
use crate::state::ModalId;
use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::theme::{COLOR_BLUSH, COLOR_DIM, COLOR_SELECTED_BG};

pub fn title(id: ModalId) -> &'static str {
    match id {
        ModalId::Chatbot => "AI Wellness Companion",
        ModalId::Resources => "Resource Library",
        ModalId::Community => "Community",
        ModalId::Counsellor => "Counsellor Connect",
        ModalId::Crisis => "24/7 Crisis Support",
    }
}

/// `spans` with a selection marker and highlight when `selected`
pub(crate) fn selectable_line(mut spans: Vec<Span<'static>>, selected: bool) -> Line<'static> {
    if selected {
        spans.insert(0, Span::styled("▶ ", Style::default().fg(COLOR_BLUSH)));
        Line::from(spans).style(Style::default().bg(COLOR_SELECTED_BG))
    } else {
        spans.insert(0, Span::raw("  "));
        Line::from(spans)
    }
}

/// Category chips with the active one highlighted
pub(crate) fn category_line(categories: &[&'static str], active: &str) -> Line<'static> {
    let mut spans = vec![Span::styled("c ", Style::default().fg(COLOR_DIM))];
    for category in categories {
        let style = if *category == active {
            Style::default().fg(COLOR_BLUSH).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(*category, style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

/// Draw modal `id` into `area`
pub fn render_modal(frame: &mut Frame, area: Rect, app: &App, id: ModalId, focused: bool) {
    let config = DialogFrameConfig::new(title(id))
        .hint("esc close")
        .focused(focused);
    let inner = render_dialog_frame(frame, area, &config);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    match id {
        ModalId::Chatbot => chat::render(frame, inner, &app.chat, focused, app.tick_count),
        ModalId::Resources => library::render(frame, inner, &app.library, focused, app.tick_count),
        ModalId::Community => {
            community::render(frame, inner, &app.community, focused, app.tick_count)
        }
        ModalId::Counsellor => directory::render(frame, inner, &app.directory, app.tick_count),
        ModalId::Crisis => crisis::render(frame, inner, &app.crisis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectable_line_marks_selection() {
        let line = selectable_line(vec![Span::raw("row")], true);
        assert_eq!(line.spans[0].content, "▶ ");
        let line = selectable_line(vec![Span::raw("row")], false);
        assert_eq!(line.spans[0].content, "  ");
    }

    #[test]
    fn test_category_line_lists_all() {
        let line = category_line(&["all", "Support"], "Support");
        let text: String = line.spans.iter().map(|s| s.content.to_string()).collect();
        assert!(text.contains("all"));
        assert!(text.contains("Support"));
    }
}
