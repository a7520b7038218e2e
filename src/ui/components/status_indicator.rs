//! Status Indicator Component
//!
//! Spinner, error and empty-list lines shown inside modal bodies while their
//! content loads.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::state::LoadState;
use crate::ui::theme::{COLOR_BLUSH, COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks per spinner frame
const TICKS_PER_FRAME: u64 = 8;

/// Status indicator types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    Success { message: String },
    Error { header: String, details: Option<String> },
    /// Dim placeholder such as "No results"
    Empty { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, tick: u64) -> Self {
        Self::Spinner {
            message: message.into(),
            frame: (tick / TICKS_PER_FRAME) as usize,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(header: impl Into<String>, details: Option<String>) -> Self {
        Self::Error {
            header: header.into(),
            details,
        }
    }

    pub fn empty(message: impl Into<String>) -> Self {
        Self::Empty {
            message: message.into(),
        }
    }

    /// Indicator for a modal's load state, or `None` when content is ready.
    ///
    /// `what` names the content, e.g. "posts".
    pub fn for_load(state: &LoadState, what: &str, tick: u64) -> Option<Self> {
        match state {
            LoadState::Loading => Some(Self::spinner(format!("Loading {}…", what), tick)),
            LoadState::Failed(reason) => Some(Self::error(
                format!("Couldn't load {}", what),
                Some(reason.clone()),
            )),
            LoadState::Idle | LoadState::Ready => None,
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render a status indicator as lines
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    match indicator {
        StatusIndicatorType::Spinner { message, frame } => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("  {} ", get_spinner_char(*frame)),
                    Style::default().fg(COLOR_BLUSH),
                ),
                Span::styled(message.clone(), Style::default().fg(COLOR_BLUSH)),
            ]),
        ],
        StatusIndicatorType::Success { message } => vec![Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(COLOR_SUCCESS)),
            Span::styled(
                message.clone(),
                Style::default().fg(COLOR_SUCCESS).add_modifier(Modifier::BOLD),
            ),
        ])],
        StatusIndicatorType::Error { header, details } => {
            let mut lines = vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("  ✗ ", Style::default().fg(COLOR_ERROR)),
                    Span::styled(
                        header.clone(),
                        Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
                    ),
                ]),
            ];
            if let Some(details) = details {
                lines.push(Line::from(Span::styled(
                    format!("    {}", details),
                    Style::default().fg(COLOR_DIM),
                )));
            }
            lines.push(Line::from(Span::styled(
                "    Close and reopen to try again.",
                Style::default().fg(COLOR_DIM),
            )));
            lines
        }
        StatusIndicatorType::Empty { message } => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(COLOR_DIM),
            )),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect()
    }

    #[test]
    fn test_spinner_frames_cycle() {
        assert_eq!(get_spinner_char(0), '◐');
        assert_eq!(get_spinner_char(4), '◐');
        assert_eq!(get_spinner_char(1), '◓');
    }

    #[test]
    fn test_spinner_advances_with_ticks() {
        let a = StatusIndicatorType::spinner("x", 0);
        let b = StatusIndicatorType::spinner("x", TICKS_PER_FRAME);
        assert_ne!(a, b);
    }

    #[test]
    fn test_for_load() {
        assert!(StatusIndicatorType::for_load(&LoadState::Ready, "posts", 0).is_none());
        assert!(StatusIndicatorType::for_load(&LoadState::Idle, "posts", 0).is_none());

        let loading = StatusIndicatorType::for_load(&LoadState::Loading, "posts", 0).unwrap();
        assert!(text(&render_status_indicator(&loading)).contains("Loading posts"));

        let failed =
            StatusIndicatorType::for_load(&LoadState::Failed("timeout".into()), "posts", 0).unwrap();
        let rendered = text(&render_status_indicator(&failed));
        assert!(rendered.contains("Couldn't load posts"));
        assert!(rendered.contains("timeout"));
    }
}
