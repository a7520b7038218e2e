use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a session with a counsellor is conducted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Video,
    Audio,
    Chat,
}

impl SessionType {
    pub const ALL: [SessionType; 3] = [SessionType::Video, SessionType::Audio, SessionType::Chat];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Video => "video",
            SessionType::Audio => "audio",
            SessionType::Chat => "chat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Video => "Video",
            SessionType::Audio => "Audio",
            SessionType::Chat => "Chat",
        }
    }
}

/// A counsellor profile in the directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Counsellor {
    pub id: String,
    pub name: String,
    pub title: String,
    pub specializations: Vec<String>,
    pub rating: f32,
    /// Years in practice
    #[serde(rename = "experience")]
    pub experience_years: u32,
    pub location: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub is_online: bool,
    pub next_available: DateTime<Utc>,
    pub session_types: Vec<SessionType>,
    #[serde(default)]
    pub bio: String,
    /// Price per session in whole currency units
    pub price: u32,
    #[serde(default)]
    pub total_sessions: u32,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Counsellor {
    pub fn offers(&self, session_type: SessionType) -> bool {
        self.session_types.contains(&session_type)
    }

    pub fn specializes_in(&self, specialization: &str) -> bool {
        self.specializations.iter().any(|s| s == specialization)
    }
}
