//! Request and response bodies exchanged with the wellness API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SessionType;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Profile returned alongside an auth token
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub content: String,
    pub category: String,
    pub is_anonymous: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookSessionRequest {
    pub counsellor_id: String,
    pub session_type: SessionType,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmergencyCallRequest {
    pub phone: String,
    pub timestamp: DateTime<Utc>,
}

/// Generic acknowledgement body; servers may omit it entirely
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_uses_camel_case() {
        let req = CreatePostRequest {
            content: "hi".to_string(),
            category: "Support".to_string(),
            is_anonymous: true,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["isAnonymous"], true);
        assert!(value.get("is_anonymous").is_none());
    }

    #[test]
    fn test_book_session_body() {
        let req = BookSessionRequest {
            counsellor_id: "1".to_string(),
            session_type: SessionType::Video,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["counsellorId"], "1");
        assert_eq!(value["sessionType"], "video");
    }

    #[test]
    fn test_auth_response_tolerates_missing_fields() {
        let resp: AuthResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.token.is_none());
        assert!(resp.user.is_none());
    }
}
