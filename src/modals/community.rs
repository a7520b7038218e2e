//! Community feed state.

use chrono::Utc;

use crate::catalog::{ALL, COMMUNITY_CATEGORIES};
use crate::error::ValidationError;
use crate::models::api::CreatePostRequest;
use crate::models::{Author, Post, DEFAULT_POST_CATEGORY};
use crate::state::LoadTracker;

/// An optimistic change the backend rejected, kept so the user can retry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommunityRetry {
    Like { post_id: String },
    Post(CreatePostRequest),
}

/// The new-post form
#[derive(Debug, Clone, Default)]
pub struct Composer {
    pub content: String,
    /// `None` posts into whatever category the feed is filtered to
    pub category: Option<&'static str>,
    pub anonymous: bool,
    pub active: bool,
}

impl Composer {
    /// Cycle: follow-filter, then each concrete category
    pub fn cycle_category(&mut self) {
        let concrete = &COMMUNITY_CATEGORIES[1..];
        self.category = match self.category {
            None => concrete.first().copied(),
            Some(current) => {
                let idx = concrete.iter().position(|c| *c == current);
                idx.and_then(|i| concrete.get(i + 1)).copied()
            }
        };
    }
}

#[derive(Debug, Default)]
pub struct CommunityState {
    posts: Vec<Post>,
    category: String,
    pub composer: Composer,
    pub selected: usize,
    pub load: LoadTracker,
    pub retry: Option<CommunityRetry>,
}

impl CommunityState {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            category: ALL.to_string(),
            ..Default::default()
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.clamp_selection();
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
        self.clamp_selection();
    }

    pub fn cycle_category(&mut self) {
        let idx = COMMUNITY_CATEGORIES
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0);
        let next = COMMUNITY_CATEGORIES[(idx + 1) % COMMUNITY_CATEGORIES.len()];
        self.set_category(next);
    }

    /// Posts matching `category`; `all` matches everything
    pub fn filter_by_category(&self, category: &str) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| category == ALL || p.category == category)
            .collect()
    }

    pub fn visible_posts(&self) -> Vec<&Post> {
        self.filter_by_category(&self.category)
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.visible_posts().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible_posts().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Prepend a new post authored by the viewer.
    ///
    /// `all` is stored as [`DEFAULT_POST_CATEGORY`].
    pub fn submit_post(
        &mut self,
        content: &str,
        category: &str,
        anonymous: bool,
    ) -> Result<&Post, ValidationError> {
        if content.trim().is_empty() {
            return Err(ValidationError::EmptyInput { field: "post" });
        }
        let category = if category == ALL {
            DEFAULT_POST_CATEGORY
        } else {
            category
        };
        let author = if anonymous {
            Author::anonymous()
        } else {
            Author::viewer()
        };
        let post = Post {
            id: uuid::Uuid::new_v4().to_string(),
            author,
            content: content.to_string(),
            timestamp: Utc::now(),
            like_count: 0,
            comment_count: 0,
            liked_by_viewer: false,
            category: category.to_string(),
            is_anonymous: anonymous,
        };
        self.posts.insert(0, post);
        self.selected = 0;
        Ok(&self.posts[0])
    }

    /// Submit the composer contents; clears the form on success
    pub fn submit_composer(&mut self) -> Result<(String, CreatePostRequest), ValidationError> {
        let category = self
            .composer
            .category
            .map(str::to_string)
            .unwrap_or_else(|| self.category.clone());
        let content = self.composer.content.clone();
        let anonymous = self.composer.anonymous;
        let post = self.submit_post(&content, &category, anonymous)?;
        let result = (
            post.id.clone(),
            CreatePostRequest {
                content: post.content.clone(),
                category: post.category.clone(),
                is_anonymous: post.is_anonymous,
            },
        );
        self.composer.content.clear();
        self.composer.active = false;
        Ok(result)
    }

    /// Flip the like on `post_id`; false when the id is unknown
    pub fn toggle_like(&mut self, post_id: &str) -> bool {
        match self.posts.iter_mut().find(|p| p.id == post_id) {
            Some(post) => {
                post.toggle_like();
                true
            }
            None => false,
        }
    }

    /// Undo an optimistic post
    pub fn remove_post(&mut self, post_id: &str) -> bool {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != post_id);
        self.clamp_selection();
        self.posts.len() != before
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_posts().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::{ANONYMOUS_AUTHOR, SELF_AUTHOR};

    fn feed() -> CommunityState {
        CommunityState::new(catalog::posts(Utc::now()))
    }

    #[test]
    fn test_submit_rejects_blank() {
        let mut feed = feed();
        assert!(feed.submit_post("   ", "Support", false).is_err());
        assert_eq!(feed.posts().len(), 2);
    }

    #[test]
    fn test_submit_prepends_with_defaults() {
        let mut feed = feed();
        let post = feed.submit_post("first day", ALL, false).unwrap().clone();
        assert_eq!(feed.posts()[0].id, post.id);
        assert_eq!(post.category, DEFAULT_POST_CATEGORY);
        assert_eq!(post.author.name, SELF_AUTHOR);
        assert_eq!(post.author.avatar, "Y");
        assert_eq!(post.like_count, 0);
        assert_eq!(post.comment_count, 0);
        assert!(!post.liked_by_viewer);
    }

    #[test]
    fn test_anonymous_post_author() {
        let mut feed = feed();
        let post = feed.submit_post("quiet", "Questions", true).unwrap();
        assert_eq!(post.author.name, ANONYMOUS_AUTHOR);
        assert!(post.author.avatar.is_empty());
        assert!(post.is_anonymous);
        assert_eq!(post.category, "Questions");
    }

    #[test]
    fn test_toggle_like_twice_restores() {
        let mut feed = feed();
        let before = feed.posts()[1].clone();
        assert!(feed.toggle_like("2"));
        assert_eq!(feed.posts()[1].like_count, before.like_count - 1);
        assert!(feed.toggle_like("2"));
        assert_eq!(feed.posts()[1], before);
    }

    #[test]
    fn test_toggle_like_unknown_is_noop() {
        let mut feed = feed();
        let before: Vec<Post> = feed.posts().to_vec();
        assert!(!feed.toggle_like("missing"));
        assert_eq!(feed.posts(), before.as_slice());
    }

    #[test]
    fn test_filter_is_projection() {
        let feed = feed();
        let support = feed.filter_by_category("Support");
        assert_eq!(support.len(), 1);
        assert_eq!(support[0].id, "1");
        assert_eq!(feed.filter_by_category(ALL).len(), 2);
        assert!(feed.filter_by_category("Questions").is_empty());
        assert_eq!(feed.posts().len(), 2);
    }

    #[test]
    fn test_composer_follows_filter_by_default() {
        let mut feed = feed();
        feed.set_category("Motivation");
        feed.composer.content = "keep going".to_string();
        let (_, request) = feed.submit_composer().unwrap();
        assert_eq!(request.category, "Motivation");
        assert!(feed.composer.content.is_empty());
    }

    #[test]
    fn test_composer_category_cycle() {
        let mut composer = Composer::default();
        composer.cycle_category();
        assert_eq!(composer.category, Some("Support"));
        for _ in 0..4 {
            composer.cycle_category();
        }
        assert_eq!(composer.category, Some("Questions"));
        composer.cycle_category();
        assert_eq!(composer.category, None);
    }

    #[test]
    fn test_remove_post_rolls_back() {
        let mut feed = feed();
        let id = feed.submit_post("oops", "Support", false).unwrap().id.clone();
        assert!(feed.remove_post(&id));
        assert_eq!(feed.posts().len(), 2);
    }
}
