//! Input Field Component
//!
//! A single-line text box with a placeholder and a visible cursor when focused.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BLUSH, COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Rows an input field occupies (border + content + border)
pub const INPUT_FIELD_HEIGHT: u16 = 3;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label drawn in the top border
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    /// Shown dimmed when `value` is empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Tail of `value` that fits in `width` columns, leaving room for the cursor
fn visible_tail(value: &str, width: usize) -> &str {
    let count = value.chars().count();
    if count < width {
        return value;
    }
    let skip = count + 1 - width;
    match value.char_indices().nth(skip) {
        Some((idx, _)) => &value[idx..],
        None => "",
    }
}

/// Render an input field into `area`; sets the terminal cursor when focused
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) {
    let border_color = if config.focused {
        COLOR_BLUSH
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.label),
            Style::default().fg(if config.focused { COLOR_BLUSH } else { COLOR_DIM }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));
    let inner = block.inner(area);

    let line = if config.value.is_empty() {
        match config.placeholder {
            Some(placeholder) => Line::from(Span::raw(placeholder.to_string()).fg(COLOR_DIM).italic()),
            None => Line::from(""),
        }
    } else {
        Line::from(visible_tail(config.value, inner.width as usize).to_string())
    };

    frame.render_widget(Paragraph::new(line).block(block), area);

    if config.focused && inner.width > 0 && inner.height > 0 {
        let typed = visible_tail(config.value, inner.width as usize).chars().count() as u16;
        frame.set_cursor_position((inner.x + typed.min(inner.width - 1), inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_tail_short_value() {
        assert_eq!(visible_tail("hello", 10), "hello");
    }

    #[test]
    fn test_visible_tail_scrolls() {
        assert_eq!(visible_tail("abcdefghij", 5), "ghij");
    }

    #[test]
    fn test_visible_tail_multibyte() {
        assert_eq!(visible_tail("ééééé", 3), "éé");
    }

    #[test]
    fn test_config_builder() {
        let config = InputFieldConfig::new("Search", "calm")
            .focused(true)
            .placeholder("Search resources");
        assert!(config.focused);
        assert_eq!(config.placeholder, Some("Search resources"));
    }
}
