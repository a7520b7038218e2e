//! Counsellor directory modal view.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::selectable_line;
use crate::modals::DirectoryState;
use crate::models::Counsellor;
use crate::ui::components::{render_status_indicator, StatusIndicatorType};
use crate::ui::helpers::{stars, truncate_string};
use crate::ui::layout::{scroll_window, LayoutContext};
use crate::ui::theme::{COLOR_BLUSH, COLOR_DIM, COLOR_RATING, COLOR_SAGE, COLOR_SKY};

const ROW_HEIGHT: u16 = 5;

fn filter_line(directory: &DirectoryState) -> Line<'static> {
    let label = |key: &str, name: &str, value: String| {
        vec![
            Span::styled(format!("{} ", key), Style::default().fg(COLOR_DIM)),
            Span::styled(format!("{}: ", name), Style::default().fg(COLOR_DIM)),
            Span::styled(value, Style::default().fg(COLOR_BLUSH)),
            Span::raw("   "),
        ]
    };
    let mut spans = label(
        "s",
        "specialty",
        directory.filter.specialization_label().to_string(),
    );
    spans.extend(label("t", "session", directory.filter.session_label().to_string()));
    spans.extend(label("o", "sort", directory.sort.label().to_string()));
    Line::from(spans)
}

fn counsellor_lines(c: &Counsellor, width: usize, selected: bool) -> Vec<Line<'static>> {
    let presence = if c.is_online {
        Span::styled(" ● online", Style::default().fg(COLOR_SAGE))
    } else {
        Span::styled(" ○ away", Style::default().fg(COLOR_DIM))
    };
    let sessions: Vec<&str> = c.session_types.iter().map(|s| s.label()).collect();

    vec![
        selectable_line(
            vec![
                Span::styled(format!("({}) ", c.avatar), Style::default().fg(COLOR_SKY)),
                Span::styled(c.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", c.title), Style::default().fg(COLOR_DIM)),
                presence,
            ],
            selected,
        ),
        Line::from(vec![
            Span::styled(format!("  {} ", stars(c.rating)), Style::default().fg(COLOR_RATING)),
            Span::styled(
                format!(
                    "{:.1} · {} yrs · {} sessions · ${}/session · {}",
                    c.rating, c.experience_years, c.total_sessions, c.price, c.location
                ),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "  {}",
                truncate_string(&c.specializations.join(", "), width.saturating_sub(2))
            ),
            Style::default().fg(COLOR_SKY),
        )),
        Line::from(Span::styled(
            format!(
                "  next: {} · {} · {}",
                c.next_available.with_timezone(&Local).format("%a %d %b %H:%M"),
                sessions.join("/"),
                c.languages.join(", ")
            ),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(""),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, directory: &DirectoryState, tick: u64) {
    let [filters_area, list_area, bio_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(filter_line(directory)), filters_area);

    if let Some(indicator) =
        StatusIndicatorType::for_load(directory.load.state(), "counsellors", tick)
    {
        frame.render_widget(Paragraph::new(render_status_indicator(&indicator)), list_area);
        return;
    }

    let visible = directory.visible();
    if visible.is_empty() {
        let empty = StatusIndicatorType::empty("No counsellors match these filters.");
        frame.render_widget(Paragraph::new(render_status_indicator(&empty)), list_area);
        return;
    }

    let rows = LayoutContext::visible_rows(list_area.height, ROW_HEIGHT);
    let first = scroll_window(directory.selected, rows);
    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .skip(first)
        .take(rows)
        .flat_map(|(i, c)| counsellor_lines(c, list_area.width as usize, i == directory.selected))
        .collect();
    frame.render_widget(Paragraph::new(lines), list_area);

    if let Some(selected) = directory.selected_counsellor() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                truncate_string(&selected.bio, bio_area.width as usize * 2),
                Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
            )))
            .wrap(ratatui::widgets::Wrap { trim: true }),
            bio_area,
        );
    }
}
