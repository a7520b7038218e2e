//! Tab Selector Component
//!
//! A horizontal tab row. The selected tab gets a `▶` marker; compact terminals
//! switch to short labels.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BLUSH, COLOR_DIM};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Key hint shown before the label, e.g. `1`
    pub key: &'a str,
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(key: &'a str, label: &'a str) -> Self {
        Self {
            key,
            label,
            short_label: label,
        }
    }

    pub fn with_short_label(key: &'a str, label: &'a str, short_label: &'a str) -> Self {
        Self {
            key,
            label,
            short_label,
        }
    }
}

/// Render a horizontal tab selector; `selected = None` highlights nothing
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: Option<usize>,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if !ctx.is_extra_small() {
            spans.push(Span::styled(
                format!("{} ", item.key),
                Style::default().fg(COLOR_DIM),
            ));
        }

        if selected == Some(idx) {
            spans.push(Span::styled(
                "▶ ".to_string(),
                Style::default().fg(COLOR_BLUSH).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label.to_string(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(label.to_string(), Style::default().fg(COLOR_DIM)));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { " " } else { "   " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_items() -> Vec<TabItem<'static>> {
        vec![
            TabItem::with_short_label("1", "AI CHATBOT", "Chat"),
            TabItem::with_short_label("2", "Resource Library", "Library"),
        ]
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_marker_precedes_selected_label() {
        let ctx = LayoutContext::new(120, 40);
        let line = render_tab_selector(&create_test_items(), Some(1), &ctx);
        let text = text(&line);
        let marker = text.find('▶').unwrap();
        assert!(marker > text.find("AI CHATBOT").unwrap());
        assert!(marker < text.find("Resource Library").unwrap());
    }

    #[test]
    fn test_no_selection_has_no_marker() {
        let ctx = LayoutContext::new(120, 40);
        let line = render_tab_selector(&create_test_items(), None, &ctx);
        assert!(!text(&line).contains('▶'));
    }

    #[test]
    fn test_compact_uses_short_labels() {
        let ctx = LayoutContext::new(50, 14);
        let line = render_tab_selector(&create_test_items(), Some(0), &ctx);
        let text = text(&line);
        assert!(text.contains("Library"));
        assert!(!text.contains("Resource Library"));
    }
}
