//! Hero section: headline, tagline and the three value pillars.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BLUSH, COLOR_DIM, COLOR_SAGE, COLOR_SKY};

pub const HEADLINE: &str = "Your Mental Wellness Journey";
pub const TAGLINE: &str = "Professional support. Peaceful mind. Personal growth.";

/// (title, caption) for each pillar under the tagline
pub const PILLARS: [(&str, &str); 3] = [
    ("Compassionate Care", "Empathetic support when you need it most"),
    ("Mental Clarity", "Tools for mindfulness and focus"),
    ("Community", "Connect with others on similar journeys"),
];

fn headline() -> Line<'static> {
    // Three-tone gradient across the words
    let words: Vec<&str> = HEADLINE.split(' ').collect();
    let colors = [COLOR_BLUSH, COLOR_BLUSH, COLOR_SAGE, COLOR_SKY];
    let mut spans = Vec::with_capacity(words.len() * 2);
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            word.to_string(),
            Style::default()
                .fg(colors[i.min(colors.len() - 1)])
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn buttons() -> Line<'static> {
    Line::from(vec![
        Span::styled(" Login › ", Style::default().fg(COLOR_BLUSH).add_modifier(Modifier::REVERSED)),
        Span::raw("   "),
        Span::styled(" Sign Up ", Style::default().fg(COLOR_BLUSH)),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &LayoutContext) {
    let mut lines = vec![
        Line::from(""),
        headline(),
        Line::from(Span::styled(TAGLINE, Style::default().fg(COLOR_DIM))),
        Line::from(""),
    ];
    if !ctx.is_short() {
        lines.push(buttons());
    }
    let text_height = lines.len() as u16;

    let [text_area, pillars_area] =
        Layout::vertical([Constraint::Length(text_height), Constraint::Min(0)]).areas(area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);

    if ctx.is_short() || pillars_area.height < 2 {
        return;
    }

    let pillar_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(pillars_area);
    let accents = [COLOR_BLUSH, COLOR_SAGE, COLOR_SKY];
    for (i, (title, caption)) in PILLARS.iter().enumerate() {
        let mut pillar = vec![Line::from(Span::styled(
            *title,
            Style::default().fg(accents[i]).add_modifier(Modifier::BOLD),
        ))];
        if !ctx.is_narrow() {
            pillar.push(Line::from(Span::styled(*caption, Style::default().fg(COLOR_DIM))));
        }
        frame.render_widget(
            Paragraph::new(pillar).alignment(Alignment::Center),
            pillar_areas[i],
        );
    }
}
