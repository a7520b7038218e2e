//! Scriptable backend for tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Notify;

use crate::catalog;
use crate::error::{AuraError, AuraResult, NetworkError};
use crate::models::api::{
    Ack, AuthResponse, BookSessionRequest, CreatePostRequest, EmergencyCallRequest, LoginRequest,
    SignupRequest,
};
use crate::models::{Counsellor, Post, Resource};
use crate::traits::Backend;

/// Endpoints a [`MockBackend`] can be told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockEndpoint {
    Login,
    Signup,
    FetchPosts,
    CreatePost,
    LikePost,
    FetchCounsellors,
    BookSession,
    FetchResources,
    Download,
    EmergencyCall,
    CrisisChat,
}

/// Serves the catalogue, records every call, fails configured endpoints
/// with a connection error. A held endpoint does not answer until it is
/// released.
///
/// # Example
///
/// ```ignore
/// let backend = MockBackend::new().failing(MockEndpoint::LikePost);
/// assert!(backend.like_post("1").await.is_err());
/// assert_eq!(backend.calls(), vec![MockEndpoint::LikePost]);
///
/// let backend = MockBackend::new().holding(MockEndpoint::FetchPosts);
/// let pending = tokio::spawn({
///     let backend = backend.clone();
///     async move { backend.fetch_posts().await }
/// });
/// backend.release(MockEndpoint::FetchPosts);
/// assert!(pending.await.unwrap().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    failing: Arc<Mutex<HashSet<MockEndpoint>>>,
    calls: Arc<Mutex<Vec<MockEndpoint>>>,
    emergency_calls: Arc<Mutex<Vec<EmergencyCallRequest>>>,
    held: Arc<Mutex<HashMap<MockEndpoint, Arc<Notify>>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(self, endpoint: MockEndpoint) -> Self {
        self.set_failing(endpoint, true);
        self
    }

    pub fn set_failing(&self, endpoint: MockEndpoint, fail: bool) {
        let mut failing = self.failing.lock().unwrap_or_else(|e| e.into_inner());
        if fail {
            failing.insert(endpoint);
        } else {
            failing.remove(&endpoint);
        }
    }

    pub fn holding(self, endpoint: MockEndpoint) -> Self {
        self.hold(endpoint);
        self
    }

    /// Calls to `endpoint` wait until [`MockBackend::release`]
    pub fn hold(&self, endpoint: MockEndpoint) {
        self.held
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(endpoint)
            .or_insert_with(|| Arc::new(Notify::new()));
    }

    pub fn release(&self, endpoint: MockEndpoint) {
        let gate = self
            .held
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&endpoint);
        if let Some(gate) = gate {
            gate.notify_waiters();
        }
    }

    fn is_held(&self, endpoint: MockEndpoint) -> bool {
        self.held
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(&endpoint)
    }

    pub fn calls(&self) -> Vec<MockEndpoint> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self, endpoint: MockEndpoint) -> usize {
        self.calls().iter().filter(|c| **c == endpoint).count()
    }

    pub fn emergency_calls(&self) -> Vec<EmergencyCallRequest> {
        self.emergency_calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Wait out any hold on `endpoint`, then record and answer the call
    async fn serve(&self, endpoint: MockEndpoint) -> AuraResult<()> {
        loop {
            let gate = self
                .held
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .get(&endpoint)
                .cloned();
            let gate = match gate {
                Some(gate) => gate,
                None => break,
            };
            let released = gate.notified();
            // Released between the lookup and registering for the wakeup
            if !self.is_held(endpoint) {
                break;
            }
            released.await;
        }
        self.hit(endpoint)
    }

    fn hit(&self, endpoint: MockEndpoint) -> AuraResult<()> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(endpoint);
        let failing = self.failing.lock().unwrap_or_else(|e| e.into_inner());
        if failing.contains(&endpoint) {
            return Err(AuraError::Network(NetworkError::ConnectionFailed {
                url: format!("mock://{:?}", endpoint),
                message: "connection refused".to_string(),
            }));
        }
        Ok(())
    }

    fn ack() -> Ack {
        Ack {
            success: true,
            message: None,
        }
    }
}

#[async_trait]
impl Backend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn login(&self, _request: &LoginRequest) -> AuraResult<AuthResponse> {
        self.serve(MockEndpoint::Login).await?;
        Ok(AuthResponse {
            success: true,
            token: Some("mock".to_string()),
            user: None,
        })
    }

    async fn signup(&self, _request: &SignupRequest) -> AuraResult<AuthResponse> {
        self.serve(MockEndpoint::Signup).await?;
        Ok(AuthResponse {
            success: true,
            token: Some("mock".to_string()),
            user: None,
        })
    }

    async fn fetch_posts(&self) -> AuraResult<Vec<Post>> {
        self.serve(MockEndpoint::FetchPosts).await?;
        Ok(catalog::posts(Utc::now()))
    }

    async fn create_post(&self, _request: &CreatePostRequest) -> AuraResult<Ack> {
        self.serve(MockEndpoint::CreatePost).await?;
        Ok(Self::ack())
    }

    async fn like_post(&self, _post_id: &str) -> AuraResult<Ack> {
        self.serve(MockEndpoint::LikePost).await?;
        Ok(Self::ack())
    }

    async fn fetch_counsellors(&self) -> AuraResult<Vec<Counsellor>> {
        self.serve(MockEndpoint::FetchCounsellors).await?;
        Ok(catalog::counsellors(Utc::now()))
    }

    async fn book_session(&self, _request: &BookSessionRequest) -> AuraResult<Ack> {
        self.serve(MockEndpoint::BookSession).await?;
        Ok(Self::ack())
    }

    async fn fetch_resources(&self) -> AuraResult<Vec<Resource>> {
        self.serve(MockEndpoint::FetchResources).await?;
        Ok(catalog::resources())
    }

    async fn download_resource(&self, _resource_id: &str) -> AuraResult<usize> {
        self.serve(MockEndpoint::Download).await?;
        Ok(0)
    }

    async fn log_emergency_call(&self, request: &EmergencyCallRequest) -> AuraResult<()> {
        self.emergency_calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());
        self.serve(MockEndpoint::EmergencyCall).await
    }

    async fn start_crisis_chat(&self) -> AuraResult<Ack> {
        self.serve(MockEndpoint::CrisisChat).await?;
        Ok(Self::ack())
    }
}
