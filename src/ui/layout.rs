//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions the home screen and modal dialogs ask while rendering.

use ratatui::layout::Rect;

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
    /// Medium terminal height (< 40 rows)
    pub const MD_HEIGHT: u16 = 40;
}

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// Extra small (< 60 cols or < 16 rows)
    ExtraSmall,
    /// Small (< 80 cols or < 24 rows)
    Small,
    /// Medium (< 120 cols or < 40 rows)
    Medium,
    /// Large (>= 120 cols and >= 40 rows)
    Large,
}

/// Columns and rows each additional open modal is shifted by
const MODAL_CASCADE: u16 = 2;

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// let columns = ctx.showcase_columns();
/// let dialog = ctx.modal_rect(frame.area(), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_area(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    // ========================================================================
    // Percentage-Based Calculations
    // ========================================================================

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate a height as a percentage of terminal height, minimum 1.
    pub fn percent_height(&self, percentage: u16) -> u16 {
        ((self.height as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width with min/max bounds.
    ///
    /// # Example
    /// ```ignore
    /// let ctx = LayoutContext::new(200, 40);
    /// // 30% of 200 = 60, but clamped to max of 50
    /// assert_eq!(ctx.bounded_width(30, 20, 50), 50);
    /// ```
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Calculate proportional height with min/max bounds.
    pub fn bounded_height(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_height(percentage).clamp(min, max)
    }

    // ========================================================================
    // Size Category Detection
    // ========================================================================

    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    pub fn height_category(&self) -> SizeCategory {
        if self.height < breakpoints::XS_HEIGHT {
            SizeCategory::ExtraSmall
        } else if self.height < breakpoints::SM_HEIGHT {
            SizeCategory::Small
        } else if self.height < breakpoints::MD_HEIGHT {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short; UI elements should be condensed.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    // ========================================================================
    // Home Screen
    // ========================================================================

    /// Rows for the hero section; the tagline pillars drop on short terminals
    pub fn hero_height(&self) -> u16 {
        if self.is_short() {
            4
        } else {
            8
        }
    }

    /// Showcase cards per row
    pub fn showcase_columns(&self) -> usize {
        match self.width_category() {
            SizeCategory::ExtraSmall => 1,
            SizeCategory::Small => 2,
            SizeCategory::Medium | SizeCategory::Large => 3,
        }
    }

    /// Whether the footer column headings fit
    pub fn should_show_footer_sections(&self) -> bool {
        !self.is_compact()
    }

    // ========================================================================
    // Modal Dialogs
    // ========================================================================

    /// Area of the `depth`-th open modal (0 = first drawn).
    ///
    /// Dialogs take most of the screen and cascade down-right so that a
    /// stack of directly opened modals stays distinguishable.
    pub fn modal_rect(&self, area: Rect, depth: usize) -> Rect {
        let width = if self.is_extra_small() {
            area.width.saturating_sub(2)
        } else {
            self.bounded_width(80, 40, 110).min(area.width.saturating_sub(4))
        };
        let height = if self.is_short() {
            area.height.saturating_sub(2)
        } else {
            self.bounded_height(80, 14, 40).min(area.height.saturating_sub(2))
        };

        let offset = (depth as u16).saturating_mul(MODAL_CASCADE);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let max_x = area.x + area.width.saturating_sub(width);
        let max_y = area.y + area.height.saturating_sub(height);

        Rect {
            x: (x + offset).min(max_x),
            y: (y + offset).min(max_y),
            width,
            height,
        }
    }

    /// How many list rows of `row_height` fit in `rows` of space
    pub fn visible_rows(rows: u16, row_height: u16) -> usize {
        (rows / row_height.max(1)).max(1) as usize
    }
}

impl Default for LayoutContext {
    /// Returns a default layout context with standard 80x24 terminal size.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// First row to draw so that `selected` stays inside a window of `visible` rows
pub fn scroll_window(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    selected.saturating_sub(visible - 1)
}

// ============================================================================
// Tests
// ============================================================================
