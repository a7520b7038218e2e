//! Color theme constants for the Aura UI
//!
//! A soft palette of blush, sage and sky over a dark terminal.

use ratatui::style::Color;

// ============================================================================
// Brand Palette
// ============================================================================

/// Blush pink, the primary accent
pub const COLOR_BLUSH: Color = Color::Rgb(247, 197, 208);

/// Sage green, used for success and "online"
pub const COLOR_SAGE: Color = Color::Rgb(129, 163, 149);

/// Sky blue, the secondary accent
pub const COLOR_SKY: Color = Color::Rgb(184, 212, 232);

// ============================================================================
// Chrome
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the modal that receives input
pub const COLOR_BORDER_FOCUS: Color = COLOR_BLUSH;

/// Accent color for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color for the logo
pub const COLOR_HEADER: Color = COLOR_BLUSH;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(28, 24, 32);

/// Background color for modal dialogs
pub const COLOR_DIALOG_BG: Color = Color::Rgb(16, 14, 22);

/// Selected row in a list
pub const COLOR_SELECTED_BG: Color = Color::Rgb(48, 40, 52);

// ============================================================================
// Status
// ============================================================================

pub const COLOR_SUCCESS: Color = COLOR_SAGE;

pub const COLOR_ERROR: Color = Color::Rgb(229, 115, 115);

pub const COLOR_WARNING: Color = Color::Yellow;

/// Emergency badges and the crisis banner
pub const COLOR_EMERGENCY: Color = Color::Rgb(220, 70, 70);

/// Star ratings
pub const COLOR_RATING: Color = Color::Rgb(240, 200, 90);

// ============================================================================
// Chat
// ============================================================================

pub const COLOR_USER_BUBBLE: Color = COLOR_SKY;

pub const COLOR_BOT_BUBBLE: Color = COLOR_SAGE;
