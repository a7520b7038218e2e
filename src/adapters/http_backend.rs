//! Reqwest-based adapter for the wellness REST API.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::REQUEST_TIMEOUT_SECS;
use crate::error::{classify_reqwest_error, AuraResult, NetworkError};
use crate::models::api::{
    Ack, AuthResponse, BookSessionRequest, CreatePostRequest, EmergencyCallRequest, LoginRequest,
    SignupRequest,
};
use crate::models::{Counsellor, Post, Resource};
use crate::traits::Backend;

/// [`Backend`] talking JSON over HTTP.
///
/// Every request carries `Authorization: Bearer <token>` when a token is set.
///
/// # Example
///
/// ```ignore
/// use aura::adapters::HttpBackend;
///
/// let backend = HttpBackend::new("https://api.example.com")?.with_token(Some(token));
/// let posts = backend.fetch_posts().await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> AuraResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| NetworkError::Other {
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self::with_client(client, base_url))
    }

    /// Use a preconfigured reqwest client
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and turn transport failures and non-2xx statuses into errors
    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        path: &str,
    ) -> AuraResult<reqwest::Response> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e, path))?;

        let status = response.status();
        debug!(path, status = status.as_u16(), "backend response");
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NetworkError::HttpStatus {
                status: status.as_u16(),
                message,
            }
            .into());
        }
        Ok(response)
    }

    async fn body_text(response: reqwest::Response, path: &str) -> AuraResult<String> {
        response
            .text()
            .await
            .map_err(|e| classify_reqwest_error(&e, path).into())
    }

    fn decode<T: DeserializeOwned>(body: &str, path: &str) -> AuraResult<T> {
        serde_json::from_str(body).map_err(|e| {
            NetworkError::InvalidResponse {
                endpoint: path.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AuraResult<T> {
        let response = self.send(self.client.get(self.url(path)), path).await?;
        let body = Self::body_text(response, path).await?;
        Self::decode(&body, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> AuraResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.client.post(self.url(path)).json(body), path)
            .await?;
        let body = Self::body_text(response, path).await?;
        Self::decode(&body, path)
    }

    /// POST expecting an optional acknowledgement body
    async fn post_ack(&self, builder: reqwest::RequestBuilder, path: &str) -> AuraResult<Ack> {
        let response = self.send(builder, path).await?;
        let body = Self::body_text(response, path).await?;
        if body.trim().is_empty() {
            return Ok(Ack {
                success: true,
                message: None,
            });
        }
        Self::decode(&body, path)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn login(&self, request: &LoginRequest) -> AuraResult<AuthResponse> {
        self.post_json("/api/auth/login", request).await
    }

    async fn signup(&self, request: &SignupRequest) -> AuraResult<AuthResponse> {
        self.post_json("/api/auth/signup", request).await
    }

    async fn fetch_posts(&self) -> AuraResult<Vec<Post>> {
        self.get_json("/api/community/posts").await
    }

    async fn create_post(&self, request: &CreatePostRequest) -> AuraResult<Ack> {
        let path = "/api/community/posts";
        self.post_ack(self.client.post(self.url(path)).json(request), path)
            .await
    }

    async fn like_post(&self, post_id: &str) -> AuraResult<Ack> {
        let path = format!("/api/community/posts/{}/like", post_id);
        self.post_ack(self.client.post(self.url(&path)), &path).await
    }

    async fn fetch_counsellors(&self) -> AuraResult<Vec<Counsellor>> {
        self.get_json("/api/counsellors").await
    }

    async fn book_session(&self, request: &BookSessionRequest) -> AuraResult<Ack> {
        let path = "/api/sessions/book";
        self.post_ack(self.client.post(self.url(path)).json(request), path)
            .await
    }

    async fn fetch_resources(&self) -> AuraResult<Vec<Resource>> {
        self.get_json("/api/resources").await
    }

    async fn download_resource(&self, resource_id: &str) -> AuraResult<usize> {
        let path = format!("/api/resources/{}/download", resource_id);
        let response = self.send(self.client.get(self.url(&path)), &path).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| classify_reqwest_error(&e, &path))?;
        Ok(bytes.len())
    }

    async fn log_emergency_call(&self, request: &EmergencyCallRequest) -> AuraResult<()> {
        let path = "/api/crisis/emergency-call";
        self.send(self.client.post(self.url(path)).json(request), path)
            .await?;
        Ok(())
    }

    async fn start_crisis_chat(&self) -> AuraResult<Ack> {
        let path = "/api/crisis/chat-support";
        self.post_ack(self.client.post(self.url(path)), path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let backend = HttpBackend::with_client(reqwest::Client::new(), "http://localhost:8000/");
        assert_eq!(backend.base_url(), "http://localhost:8000");
        assert_eq!(
            backend.url("/api/resources"),
            "http://localhost:8000/api/resources"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let backend = HttpBackend::new("http://127.0.0.1:1").unwrap();
        let err = backend.fetch_posts().await.unwrap_err();
        assert!(err.requires_rollback());
    }
}
