//! Crisis support modal view.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::selectable_line;
use crate::modals::{CrisisState, QuickAction};
use crate::models::{Helpline, Urgency};
use crate::ui::components::{render_status_indicator, StatusIndicatorType};
use crate::ui::helpers::truncate_string;
use crate::ui::theme::{COLOR_BLUSH, COLOR_DIM, COLOR_EMERGENCY, COLOR_SKY, COLOR_WARNING};

const BANNER: &str = "If you are in immediate danger, call 911 or go to your nearest emergency room.";

fn badge_color(kind: Urgency) -> ratatui::style::Color {
    match kind {
        Urgency::Emergency => COLOR_EMERGENCY,
        Urgency::Crisis => COLOR_WARNING,
        Urgency::Support => COLOR_SKY,
    }
}

fn helpline_lines(line: &Helpline, width: usize, selected: bool) -> Vec<Line<'static>> {
    vec![
        selectable_line(
            vec![
                Span::styled(
                    format!("[{}] ", line.kind.badge()),
                    Style::default().fg(badge_color(line.kind)).add_modifier(Modifier::BOLD),
                ),
                Span::styled(line.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", line.phone), Style::default().fg(COLOR_BLUSH)),
            ],
            selected,
        ),
        Line::from(Span::styled(
            format!(
                "  {} · {}",
                truncate_string(&line.description, width.saturating_sub(line.availability.len() + 6)),
                line.availability
            ),
            Style::default().fg(COLOR_DIM),
        )),
    ]
}

fn quick_action_line(action: QuickAction, selected: bool) -> Line<'static> {
    let color = match action {
        QuickAction::CallEmergency => COLOR_EMERGENCY,
        QuickAction::CallHotline => COLOR_BLUSH,
        QuickAction::CrisisChat => COLOR_SKY,
    };
    selectable_line(
        vec![
            Span::styled("▸ ", Style::default().fg(color)),
            Span::styled(action.label(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ],
        selected,
    )
}

pub fn render(frame: &mut Frame, area: Rect, crisis: &CrisisState) {
    let [banner_area, filters_area, quick_area, list_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(QuickAction::ALL.len() as u16 + 1),
        Constraint::Min(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            BANNER,
            Style::default().fg(COLOR_EMERGENCY).add_modifier(Modifier::BOLD),
        )))
        .wrap(ratatui::widgets::Wrap { trim: true }),
        banner_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("c ", Style::default().fg(COLOR_DIM)),
            Span::styled("country: ", Style::default().fg(COLOR_DIM)),
            Span::styled(crisis.country(), Style::default().fg(COLOR_BLUSH)),
            Span::styled("   g ", Style::default().fg(COLOR_DIM)),
            Span::styled("urgency: ", Style::default().fg(COLOR_DIM)),
            Span::styled(crisis.urgency.filter_label(), Style::default().fg(COLOR_BLUSH)),
        ])),
        filters_area,
    );

    let quick: Vec<Line> = QuickAction::ALL
        .iter()
        .enumerate()
        .map(|(i, a)| quick_action_line(*a, crisis.selected == i))
        .collect();
    frame.render_widget(Paragraph::new(quick), quick_area);

    let visible = crisis.visible();
    if visible.is_empty() {
        let empty = StatusIndicatorType::empty(format!(
            "No helplines listed for {} yet. Use the quick actions above.",
            crisis.country()
        ));
        frame.render_widget(Paragraph::new(render_status_indicator(&empty)), list_area);
        return;
    }

    let offset = QuickAction::ALL.len();
    let rows = (list_area.height / 2).max(1) as usize;
    let first = crisis.selected.saturating_sub(offset).saturating_sub(rows - 1);
    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .skip(first)
        .take(rows)
        .flat_map(|(i, h)| helpline_lines(h, list_area.width as usize, crisis.selected == i + offset))
        .collect();
    frame.render_widget(Paragraph::new(lines), list_area);
}
