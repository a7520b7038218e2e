//! One-line status bar: the current notice, or which backend is in use.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{NoticeKind, StatusNotice};
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_SKY, COLOR_SUCCESS};

fn notice_line(notice: &StatusNotice) -> Line<'static> {
    let (icon, color) = match notice.kind {
        NoticeKind::Info => ("•", COLOR_SKY),
        NoticeKind::Success => ("✓", COLOR_SUCCESS),
        NoticeKind::Error => ("✗", COLOR_ERROR),
    };
    Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(color)),
        Span::styled(notice.text.clone(), Style::default().fg(color)),
    ])
}

fn idle_line(backend: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {} backend", backend),
        Style::default().fg(COLOR_DIM),
    ))
    .right_aligned()
}

pub fn render(frame: &mut Frame, area: Rect, notice: Option<&StatusNotice>, backend: &str) {
    let line = match notice {
        Some(notice) => notice_line(notice),
        None => idle_line(backend),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_line_text() {
        let notice = StatusNotice::new("Dialing 988", NoticeKind::Success, 0);
        let text: String = notice_line(&notice)
            .spans
            .iter()
            .map(|s| s.content.to_string())
            .collect();
        assert!(text.contains("✓"));
        assert!(text.contains("Dialing 988"));
    }
}
