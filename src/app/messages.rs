//! AppMessage enum for async communication within the application.

use crate::error::AuraError;
use crate::modals::PendingReply;
use crate::models::api::CreatePostRequest;
use crate::models::{Counsellor, Post, Resource};

/// Messages sent back to the UI loop by background tasks.
///
/// Load results carry the generation they were started with so that results
/// for a modal that has since been closed can be dropped.
#[derive(Debug)]
pub enum AppMessage {
    /// Community feed fetch finished
    PostsLoaded {
        generation: u64,
        result: Result<Vec<Post>, AuraError>,
    },
    /// Counsellor directory fetch finished
    CounsellorsLoaded {
        generation: u64,
        result: Result<Vec<Counsellor>, AuraError>,
    },
    /// Resource library fetch finished
    ResourcesLoaded {
        generation: u64,
        result: Result<Vec<Resource>, AuraError>,
    },
    /// Chat typing delay elapsed
    ChatReplyDue(PendingReply),
    /// Backend accepted a like toggle
    LikeConfirmed { post_id: String },
    /// Backend rejected a like; `liked` is the optimistic state that was sent
    LikeFailed {
        post_id: String,
        liked: bool,
        error: AuraError,
    },
    /// Backend accepted a new post
    PostConfirmed { post_id: String },
    /// Backend rejected a new post
    PostFailed {
        post_id: String,
        request: CreatePostRequest,
        error: AuraError,
    },
    /// A helpline call attempt finished; `Ok` holds the dialed digits
    CallPlaced(Result<String, AuraError>),
    /// Plain status text from a background task
    Notice(String),
}
