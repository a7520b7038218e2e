use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder identity used for anonymous posts
pub const ANONYMOUS_AUTHOR: &str = "Anonymous User";
/// Placeholder identity for the viewer's own non-anonymous posts
pub const SELF_AUTHOR: &str = "You";
/// Category stored when a post is submitted while the "all" filter is active
pub const DEFAULT_POST_CATEGORY: &str = "General";

/// Author block attached to a community post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    /// Initials shown in the avatar bubble; empty renders as `?`
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub is_verified: bool,
}

impl Author {
    pub fn anonymous() -> Self {
        Self {
            name: ANONYMOUS_AUTHOR.to_string(),
            avatar: String::new(),
            is_verified: false,
        }
    }

    pub fn viewer() -> Self {
        Self {
            name: SELF_AUTHOR.to_string(),
            avatar: "Y".to_string(),
            is_verified: false,
        }
    }

    pub fn avatar_label(&self) -> &str {
        if self.avatar.is_empty() {
            "?"
        } else {
            &self.avatar
        }
    }
}

/// A community feed entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: Author,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "likes")]
    pub like_count: u32,
    #[serde(rename = "comments", default)]
    pub comment_count: u32,
    #[serde(rename = "isLiked", default)]
    pub liked_by_viewer: bool,
    pub category: String,
    #[serde(default)]
    pub is_anonymous: bool,
}

impl Post {
    /// Flip the viewer's like and move the counter by one in the matching direction
    pub fn toggle_like(&mut self) {
        if self.liked_by_viewer {
            self.like_count = self.like_count.saturating_sub(1);
        } else {
            self.like_count += 1;
        }
        self.liked_by_viewer = !self.liked_by_viewer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post {
            id: "p".to_string(),
            author: Author::viewer(),
            content: "hello".to_string(),
            timestamp: Utc::now(),
            like_count: 3,
            comment_count: 0,
            liked_by_viewer: false,
            category: "Support".to_string(),
            is_anonymous: false,
        }
    }

    #[test]
    fn test_toggle_like_round_trip() {
        let mut post = sample();
        post.toggle_like();
        assert_eq!(post.like_count, 4);
        assert!(post.liked_by_viewer);
        post.toggle_like();
        assert_eq!(post.like_count, 3);
        assert!(!post.liked_by_viewer);
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("likes").is_some());
        assert!(value.get("isLiked").is_some());
        assert!(value.get("isAnonymous").is_some());
        assert_eq!(value["author"]["isVerified"], false);
    }

    #[test]
    fn test_anonymous_avatar_placeholder() {
        assert_eq!(Author::anonymous().avatar_label(), "?");
        assert_eq!(Author::viewer().avatar_label(), "Y");
    }
}
