//! Reusable UI Components
//!
//! Widgets shared by the modal dialogs.
//!
//! ## Components
//!
//! - `TabSelector` - Horizontal tab row with a `▶` marker
//! - `InputField` - Single-line text box with placeholder and cursor
//! - `StatusIndicator` - Spinner, error and empty-state lines
//! - `DialogFrame` - Rounded modal border that clears what is underneath

mod dialog_frame;
mod input_field;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
pub use status_indicator::{render_status_indicator, StatusIndicatorType};
pub use tab_selector::{render_tab_selector, TabItem};
