//! Feature showcase grid on the home screen.
//!
//! Each card opens its modal directly; the header tab is not changed.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::state::ModalId;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BLUSH, COLOR_BORDER, COLOR_DIM, COLOR_SAGE, COLOR_SKY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseCard {
    AiBot,
    Library,
    Community,
    Counsellor,
    Crisis,
}

impl ShowcaseCard {
    pub const ALL: [ShowcaseCard; 5] = [
        ShowcaseCard::AiBot,
        ShowcaseCard::Library,
        ShowcaseCard::Community,
        ShowcaseCard::Counsellor,
        ShowcaseCard::Crisis,
    ];

    pub fn modal(&self) -> ModalId {
        match self {
            ShowcaseCard::AiBot => ModalId::Chatbot,
            ShowcaseCard::Library => ModalId::Resources,
            ShowcaseCard::Community => ModalId::Community,
            ShowcaseCard::Counsellor => ModalId::Counsellor,
            ShowcaseCard::Crisis => ModalId::Crisis,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ShowcaseCard::AiBot => "AI Bot",
            ShowcaseCard::Library => "Resource Library",
            ShowcaseCard::Community => "Community",
            ShowcaseCard::Counsellor => "Counsellor Connect",
            ShowcaseCard::Crisis => "24/7 Crisis Support",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            ShowcaseCard::AiBot => {
                "Your AI wellness companion available 24/7 for emotional support"
            }
            ShowcaseCard::Library => {
                "Comprehensive collection of mental health resources and tools."
            }
            ShowcaseCard::Community => "Connect. Share. Heal together.",
            ShowcaseCard::Counsellor => "Professional therapy and guidance.",
            ShowcaseCard::Crisis => "Always here when you need us.",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ShowcaseCard::AiBot => "◉",
            ShowcaseCard::Library => "▤",
            ShowcaseCard::Community => "◎",
            ShowcaseCard::Counsellor => "✚",
            ShowcaseCard::Crisis => "☎",
        }
    }

    pub fn call_to_action(&self) -> &'static str {
        match self {
            ShowcaseCard::AiBot => "Chat now",
            ShowcaseCard::Library => "Get started",
            ShowcaseCard::Community | ShowcaseCard::Counsellor | ShowcaseCard::Crisis => {
                "Join now"
            }
        }
    }

    fn accent(&self) -> ratatui::style::Color {
        match self {
            ShowcaseCard::AiBot | ShowcaseCard::Counsellor => COLOR_SAGE,
            ShowcaseCard::Library | ShowcaseCard::Crisis => COLOR_SKY,
            ShowcaseCard::Community => COLOR_BLUSH,
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: ShowcaseCard, focused: bool) {
    frame.render_widget(Clear, area);
    let border = if focused { card.accent() } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));

    let title_style = Style::default()
        .fg(card.accent())
        .add_modifier(Modifier::BOLD);
    let cta_style = if focused {
        Style::default().fg(card.accent()).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", card.icon()), title_style),
            Span::styled(card.title(), title_style),
        ]),
        Line::from(Span::styled(card.tagline(), Style::default().fg(COLOR_DIM))),
        Line::from(Span::styled(format!("{} ›", card.call_to_action()), cta_style)),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Render the card grid; `focused` indexes [`ShowcaseCard::ALL`]
pub fn render(frame: &mut Frame, area: Rect, focused: usize, ctx: &LayoutContext) {
    let columns = ctx.showcase_columns();
    let rows = ShowcaseCard::ALL.len().div_ceil(columns);
    let row_areas = Layout::vertical(vec![Constraint::Min(5); rows]).split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let col_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);
        for (col, col_area) in col_areas.iter().enumerate() {
            let idx = row * columns + col;
            if let Some(card) = ShowcaseCard::ALL.get(idx) {
                render_card(frame, *col_area, *card, idx == focused);
            }
        }
    }
}
