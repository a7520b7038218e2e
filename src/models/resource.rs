use serde::{Deserialize, Serialize};

/// Media type of a library resource
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Article,
    Video,
    Audio,
    Pdf,
    Worksheet,
}

impl ResourceKind {
    /// Single-glyph marker used in list rows
    pub fn icon(&self) -> &'static str {
        match self {
            ResourceKind::Article => "≡",
            ResourceKind::Video => "▶",
            ResourceKind::Audio => "♪",
            ResourceKind::Pdf => "▤",
            ResourceKind::Worksheet => "✎",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Article => "article",
            ResourceKind::Video => "video",
            ResourceKind::Audio => "audio",
            ResourceKind::Pdf => "pdf",
            ResourceKind::Worksheet => "worksheet",
        }
    }
}

/// An entry in the resource library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub category: String,
    pub rating: f32,
    pub downloads: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Resource {
    /// Case-insensitive substring match over title, description and tags.
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}
