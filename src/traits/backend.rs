//! Wellness API trait abstraction.
//!
//! Every remote integration point of the app goes through [`Backend`], so the
//! UI can run against the real HTTP API, the built-in offline catalogue, or a
//! test double without knowing which.

use async_trait::async_trait;

use crate::error::AuraResult;
use crate::models::api::{
    Ack, AuthResponse, BookSessionRequest, CreatePostRequest, EmergencyCallRequest, LoginRequest,
    SignupRequest,
};
use crate::models::{Counsellor, Post, Resource};

#[async_trait]
pub trait Backend: Send + Sync {
    /// Short label for logs and the status line.
    fn name(&self) -> &'static str;

    /// `POST /api/auth/login`
    async fn login(&self, request: &LoginRequest) -> AuraResult<AuthResponse>;

    /// `POST /api/auth/signup`
    async fn signup(&self, request: &SignupRequest) -> AuraResult<AuthResponse>;

    /// `GET /api/community/posts`
    async fn fetch_posts(&self) -> AuraResult<Vec<Post>>;

    /// `POST /api/community/posts`
    async fn create_post(&self, request: &CreatePostRequest) -> AuraResult<Ack>;

    /// `POST /api/community/posts/{id}/like`
    async fn like_post(&self, post_id: &str) -> AuraResult<Ack>;

    /// `GET /api/counsellors`
    async fn fetch_counsellors(&self) -> AuraResult<Vec<Counsellor>>;

    /// `POST /api/sessions/book`
    async fn book_session(&self, request: &BookSessionRequest) -> AuraResult<Ack>;

    /// `GET /api/resources`
    async fn fetch_resources(&self) -> AuraResult<Vec<Resource>>;

    /// `GET /api/resources/{id}/download`, returning the byte count received.
    async fn download_resource(&self, resource_id: &str) -> AuraResult<usize>;

    /// `POST /api/crisis/emergency-call`
    async fn log_emergency_call(&self, request: &EmergencyCallRequest) -> AuraResult<()>;

    /// `POST /api/crisis/chat-support`
    async fn start_crisis_chat(&self) -> AuraResult<Ack>;
}
