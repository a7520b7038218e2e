//! Backend served from the built-in catalogue.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::catalog;
use crate::error::AuraResult;
use crate::models::api::{
    Ack, AuthResponse, BookSessionRequest, CreatePostRequest, EmergencyCallRequest, LoginRequest,
    SignupRequest, UserProfile,
};
use crate::models::{Counsellor, Post, Resource};
use crate::traits::Backend;

/// Default simulated round-trip for offline fetches
pub const DEFAULT_MOCK_LATENCY: Duration = Duration::from_millis(300);

/// Always-succeeding [`Backend`] with an artificial delay on every call.
#[derive(Debug, Clone)]
pub struct OfflineBackend {
    latency: Duration,
}

impl OfflineBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn pause(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn ack() -> Ack {
        Ack {
            success: true,
            message: None,
        }
    }

    fn auth(email: &str, name: Option<&str>) -> AuthResponse {
        AuthResponse {
            success: true,
            token: Some("offline".to_string()),
            user: Some(UserProfile {
                id: "offline-user".to_string(),
                email: email.to_string(),
                name: name.map(str::to_string),
            }),
        }
    }
}

impl Default for OfflineBackend {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_LATENCY)
    }
}

#[async_trait]
impl Backend for OfflineBackend {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn login(&self, request: &LoginRequest) -> AuraResult<AuthResponse> {
        self.pause().await;
        Ok(Self::auth(&request.email, None))
    }

    async fn signup(&self, request: &SignupRequest) -> AuraResult<AuthResponse> {
        self.pause().await;
        Ok(Self::auth(&request.email, Some(&request.name)))
    }

    async fn fetch_posts(&self) -> AuraResult<Vec<Post>> {
        self.pause().await;
        Ok(catalog::posts(Utc::now()))
    }

    async fn create_post(&self, request: &CreatePostRequest) -> AuraResult<Ack> {
        self.pause().await;
        info!(category = %request.category, anonymous = request.is_anonymous, "offline post accepted");
        Ok(Self::ack())
    }

    async fn like_post(&self, _post_id: &str) -> AuraResult<Ack> {
        self.pause().await;
        Ok(Self::ack())
    }

    async fn fetch_counsellors(&self) -> AuraResult<Vec<Counsellor>> {
        self.pause().await;
        Ok(catalog::counsellors(Utc::now()))
    }

    async fn book_session(&self, request: &BookSessionRequest) -> AuraResult<Ack> {
        self.pause().await;
        info!(counsellor = %request.counsellor_id, session_type = request.session_type.as_str(), "offline booking recorded");
        Ok(Self::ack())
    }

    async fn fetch_resources(&self) -> AuraResult<Vec<Resource>> {
        self.pause().await;
        Ok(catalog::resources())
    }

    async fn download_resource(&self, _resource_id: &str) -> AuraResult<usize> {
        self.pause().await;
        Ok(0)
    }

    async fn log_emergency_call(&self, request: &EmergencyCallRequest) -> AuraResult<()> {
        info!(phone = %request.phone, "offline emergency call log");
        Ok(())
    }

    async fn start_crisis_chat(&self) -> AuraResult<Ack> {
        self.pause().await;
        Ok(Self::ack())
    }
}
