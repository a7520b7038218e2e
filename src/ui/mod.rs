//! UI rendering for Aura
//!
//! The home screen is a header, a hero section over an animated particle
//! background, the feature showcase grid and a footer. Open modals are drawn
//! on top in open order.
//!
//! ## Responsive Layout System
//!
//! Render functions take a `LayoutContext` built from the frame size and use
//! it for breakpoints (`is_compact()`, `showcase_columns()`) and for placing
//! modal dialogs (`modal_rect()`).

pub mod background;
pub mod components;
mod footer;
mod header;
mod helpers;
mod hero;
mod layout;
pub mod modals;
pub mod showcase;
mod status_bar;
pub mod theme;

pub use header::HEADER_HEIGHT;
pub use helpers::{truncate_string, wrap_text};
pub use layout::{breakpoints, scroll_window, LayoutContext, SizeCategory};

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen for the current app state
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_area(area);

    let [header_area, body_area, footer_area, status_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(footer::height(&ctx)),
        Constraint::Length(1),
    ])
    .areas(area);

    header::render(frame, header_area, app.root.nav(), &ctx);

    app.background
        .render(frame.buffer_mut(), body_area, app.tick_count);

    let [hero_area, showcase_area] =
        Layout::vertical([Constraint::Length(ctx.hero_height()), Constraint::Min(0)])
            .areas(body_area);
    hero::render(frame, hero_area, &ctx);
    if showcase_area.height >= 3 {
        showcase::render(frame, showcase_area, app.showcase_index, &ctx);
    }

    footer::render(frame, footer_area, &app.input_context(), &ctx);
    status_bar::render(frame, status_area, app.status.as_ref(), app.backend_name());

    let top = app.root.top();
    for (depth, id) in app.root.draw_order().iter().enumerate() {
        let rect = ctx.modal_rect(area, depth);
        modals::render_modal(frame, rect, app, *id, top == Some(*id));
    }
}
