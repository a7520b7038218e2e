//! Dialog Frame Component
//!
//! A modal frame with rounded borders. Clears what is underneath and returns
//! the inner area for content.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_BORDER_FOCUS, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER};

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the top border
    pub title: &'a str,
    /// Short hint shown right-aligned in the bottom border
    pub hint: Option<&'a str>,
    /// Whether this dialog receives input
    pub focused: bool,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            hint: None,
            focused: true,
        }
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// Render a dialog frame into `area` and return the inner content area
pub fn render_dialog_frame(frame: &mut Frame, area: Rect, config: &DialogFrameConfig) -> Rect {
    frame.render_widget(Clear, area);

    let border_color = if config.focused {
        COLOR_BORDER_FOCUS
    } else {
        COLOR_BORDER
    };
    let title_style = if config.focused {
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let mut block = Block::default()
        .title(Span::styled(format!(" {} ", config.title), title_style))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    if let Some(hint) = config.hint {
        block = block.title_bottom(
            Line::from(Span::styled(format!(" {} ", hint), Style::default().fg(COLOR_DIM)))
                .right_aligned(),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
