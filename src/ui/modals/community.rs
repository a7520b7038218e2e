//! Community feed modal view.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{category_line, selectable_line};
use crate::catalog::COMMUNITY_CATEGORIES;
use crate::modals::CommunityState;
use crate::models::Post;
use crate::ui::components::{
    render_input_field, render_status_indicator, InputFieldConfig, StatusIndicatorType,
    INPUT_FIELD_HEIGHT,
};
use crate::ui::helpers::{relative_time, truncate_string, wrap_text};
use crate::ui::layout::{scroll_window, LayoutContext};
use crate::ui::theme::{COLOR_BLUSH, COLOR_DIM, COLOR_SAGE, COLOR_SKY};

/// Rows per post: author, two content rows, reactions, spacer
const ROW_HEIGHT: u16 = 5;
const CONTENT_ROWS: usize = 2;

fn post_lines(post: &Post, width: usize, selected: bool, now: DateTime<Utc>) -> Vec<Line<'static>> {
    let mut header = vec![
        Span::styled(
            format!("({}) ", post.author.avatar_label()),
            Style::default().fg(COLOR_SKY),
        ),
        Span::styled(post.author.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
    ];
    if post.author.is_verified {
        header.push(Span::styled(" ✓", Style::default().fg(COLOR_SAGE)));
    }
    header.push(Span::styled(
        format!("  {} · {}", relative_time(post.timestamp, now), post.category),
        Style::default().fg(COLOR_DIM),
    ));

    let mut lines = vec![selectable_line(header, selected)];
    let body = wrap_text(&post.content, width.saturating_sub(2));
    for (i, row) in body.iter().take(CONTENT_ROWS).enumerate() {
        let text = if i + 1 == CONTENT_ROWS && body.len() > CONTENT_ROWS {
            truncate_string(&format!("{} {}", row, body[i + 1]), width.saturating_sub(2))
        } else {
            row.clone()
        };
        lines.push(Line::from(format!("  {}", text)));
    }
    for _ in body.len()..CONTENT_ROWS {
        lines.push(Line::from(""));
    }

    let heart = if post.liked_by_viewer { "♥" } else { "♡" };
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {} {}", heart, post.like_count),
            Style::default().fg(if post.liked_by_viewer { COLOR_BLUSH } else { COLOR_DIM }),
        ),
        Span::styled(format!("   ✉ {}", post.comment_count), Style::default().fg(COLOR_DIM)),
    ]));
    lines.push(Line::from(""));
    lines
}

fn composer_status(community: &CommunityState) -> Line<'static> {
    let composer = &community.composer;
    let category = composer
        .category
        .map(str::to_string)
        .unwrap_or_else(|| community.category().to_string());
    let who = if composer.anonymous {
        "posting anonymously"
    } else {
        "posting as You"
    };
    Line::from(Span::styled(
        format!("  category: {} · {}", category, who),
        Style::default().fg(COLOR_DIM),
    ))
}

pub fn render(frame: &mut Frame, area: Rect, community: &CommunityState, focused: bool, tick: u64) {
    let composing = community.composer.active;
    let composer_height = if composing { INPUT_FIELD_HEIGHT + 1 } else { 0 };
    let [composer_area, categories_area, list_area] = Layout::vertical([
        Constraint::Length(composer_height),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(area);

    if composing {
        let [field, status] =
            Layout::vertical([Constraint::Length(INPUT_FIELD_HEIGHT), Constraint::Length(1)])
                .areas(composer_area);
        render_input_field(
            frame,
            field,
            &InputFieldConfig::new("New post", &community.composer.content)
                .focused(focused)
                .placeholder("Share something with the community…"),
        );
        frame.render_widget(Paragraph::new(composer_status(community)), status);
    }

    frame.render_widget(
        Paragraph::new(category_line(&COMMUNITY_CATEGORIES, community.category())),
        categories_area,
    );

    if let Some(indicator) = StatusIndicatorType::for_load(community.load.state(), "posts", tick) {
        frame.render_widget(Paragraph::new(render_status_indicator(&indicator)), list_area);
        return;
    }

    let visible = community.visible_posts();
    if visible.is_empty() {
        let empty = StatusIndicatorType::empty("No posts yet. Press n to start the conversation.");
        frame.render_widget(Paragraph::new(render_status_indicator(&empty)), list_area);
        return;
    }

    let now = Utc::now();
    let rows = LayoutContext::visible_rows(list_area.height, ROW_HEIGHT);
    let first = scroll_window(community.selected, rows);
    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .skip(first)
        .take(rows)
        .flat_map(|(i, p)| post_lines(p, list_area.width as usize, i == community.selected, now))
        .collect();
    frame.render_widget(Paragraph::new(lines), list_area);
}
