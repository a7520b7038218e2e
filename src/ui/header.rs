//! Header bar: logo, navigation tabs and the account intents.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::NavTarget;
use crate::ui::components::{render_tab_selector, TabItem};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BLUSH, COLOR_BORDER, COLOR_DIM, COLOR_SAGE, COLOR_SKY};

/// Header height in rows, including the bottom rule
pub const HEADER_HEIGHT: u16 = 2;

const LOGO_WIDTH: u16 = 9;

fn tab_items() -> Vec<TabItem<'static>> {
    vec![
        TabItem::new("0", NavTarget::Home.label()),
        TabItem::with_short_label("1", NavTarget::Chatbot.label(), "Chat"),
        TabItem::with_short_label("2", NavTarget::Resources.label(), "Library"),
        TabItem::with_short_label("3", NavTarget::Community.label(), "Community"),
        TabItem::with_short_label("4", NavTarget::Counsellor.label(), "Counsellors"),
    ]
}

fn logo() -> Line<'static> {
    Line::from(vec![
        Span::styled("AU", Style::default().fg(COLOR_BLUSH).add_modifier(Modifier::BOLD)),
        Span::styled("RA", Style::default().fg(COLOR_SAGE).add_modifier(Modifier::BOLD)),
        Span::styled(".AI", Style::default().fg(COLOR_SKY).add_modifier(Modifier::BOLD)),
    ])
}

fn account_intents(ctx: &LayoutContext) -> Line<'static> {
    if ctx.is_extra_small() {
        return Line::from("");
    }
    Line::from(vec![
        Span::styled("l ", Style::default().fg(COLOR_DIM)),
        Span::styled("Login", Style::default().fg(COLOR_BLUSH)),
        Span::raw("  "),
        Span::styled("u ", Style::default().fg(COLOR_DIM)),
        Span::styled("Sign Up", Style::default().fg(COLOR_BLUSH)),
    ])
    .right_aligned()
}

/// Render the header; the tab for `nav` is highlighted
pub fn render(frame: &mut Frame, area: Rect, nav: NavTarget, ctx: &LayoutContext) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [logo_area, tabs_area, account_area] = Layout::horizontal([
        Constraint::Length(LOGO_WIDTH + 2),
        Constraint::Min(10),
        Constraint::Length(if ctx.is_extra_small() { 0 } else { 20 }),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(logo()), logo_area);

    let selected = NavTarget::ALL.iter().position(|t| *t == nav);
    frame.render_widget(
        Paragraph::new(render_tab_selector(&tab_items(), selected, ctx)),
        tabs_area,
    );
    frame.render_widget(Paragraph::new(account_intents(ctx)), account_area);
}
