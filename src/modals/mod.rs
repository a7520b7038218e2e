//! Per-modal content, filters and operations.
//!
//! Each modal owns its own state and never reaches into another's. Whether a
//! modal is visible is decided by [`crate::state::RootState`], not here.

pub mod chat;
pub mod community;
pub mod crisis;
pub mod directory;
pub mod library;
pub mod responder;

pub use chat::{ChatScroll, ChatState, PendingReply, DEFAULT_REPLY_DELAY};
pub use community::{CommunityRetry, CommunityState, Composer};
pub use crisis::{call_helpline, list_helplines, CrisisState, CrisisTarget, QuickAction};
pub use directory::{list_counsellors, DirectoryFilter, DirectoryState, SortKey};
pub use library::{search, LibraryState};
pub use responder::Responder;
