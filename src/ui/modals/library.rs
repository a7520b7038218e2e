//! Resource library modal view.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{category_line, selectable_line};
use crate::catalog::LIBRARY_CATEGORIES;
use crate::modals::LibraryState;
use crate::models::Resource;
use crate::ui::components::{
    render_input_field, render_status_indicator, InputFieldConfig, StatusIndicatorType,
    INPUT_FIELD_HEIGHT,
};
use crate::ui::helpers::{format_count, stars, truncate_string};
use crate::ui::layout::{scroll_window, LayoutContext};
use crate::ui::theme::{COLOR_DIM, COLOR_RATING, COLOR_SKY};

/// Rows per resource entry
const ROW_HEIGHT: u16 = 3;

fn resource_lines(resource: &Resource, width: usize, selected: bool) -> Vec<Line<'static>> {
    let mut meta = vec![
        Span::styled(format!("  {} ", stars(resource.rating)), Style::default().fg(COLOR_RATING)),
        Span::styled(
            format!("{:.1} · {} downloads · {}", resource.rating, format_count(resource.downloads), resource.author),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    if let Some(duration) = &resource.duration {
        meta.push(Span::styled(format!(" · {}", duration), Style::default().fg(COLOR_DIM)));
    }

    vec![
        selectable_line(
            vec![
                Span::styled(format!("{} ", resource.kind.icon()), Style::default().fg(COLOR_SKY)),
                Span::styled(
                    truncate_string(&resource.title, width.saturating_sub(14)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} · {}", resource.kind.as_str(), resource.category),
                    Style::default().fg(COLOR_DIM),
                ),
            ],
            selected,
        ),
        Line::from(Span::styled(
            format!("  {}", truncate_string(&resource.description, width.saturating_sub(2))),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(meta),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, library: &LibraryState, focused: bool, tick: u64) {
    let [search_area, categories_area, list_area] = Layout::vertical([
        Constraint::Length(INPUT_FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(area);

    render_input_field(
        frame,
        search_area,
        &InputFieldConfig::new("Search", &library.query)
            .focused(focused && library.editing)
            .placeholder("/ to search titles, descriptions and tags"),
    );
    frame.render_widget(
        Paragraph::new(category_line(&LIBRARY_CATEGORIES, library.category())),
        categories_area,
    );

    if let Some(indicator) = StatusIndicatorType::for_load(library.load.state(), "resources", tick) {
        frame.render_widget(Paragraph::new(render_status_indicator(&indicator)), list_area);
        return;
    }

    let visible = library.visible();
    if visible.is_empty() {
        let empty = StatusIndicatorType::empty("No resources match your search.");
        frame.render_widget(Paragraph::new(render_status_indicator(&empty)), list_area);
        return;
    }

    let rows = LayoutContext::visible_rows(list_area.height, ROW_HEIGHT);
    let first = scroll_window(library.selected, rows);
    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .skip(first)
        .take(rows)
        .flat_map(|(i, r)| resource_lines(r, list_area.width as usize, i == library.selected))
        .collect();
    frame.render_widget(Paragraph::new(lines), list_area);
}
