//! Application state management
//!
//! - `coordinator`: modal visibility and navigation, driven by a reducer
//! - `load`: per-modal fetch lifecycle with stale-result protection

pub mod coordinator;
pub mod load;

pub use coordinator::{Action, ModalId, ModalVisibility, NavTarget, RootState, Transition};
pub use load::{LoadState, LoadTracker};
