//! Resource library: text search and category filter.

use crate::catalog::{ALL, LIBRARY_CATEGORIES};
use crate::error::ValidationError;
use crate::models::Resource;
use crate::state::LoadTracker;

/// Resources in `category` (or any, for `all`) whose title, description or
/// tags contain `query` case-insensitively. An empty query matches all.
pub fn search<'a>(resources: &'a [Resource], query: &str, category: &str) -> Vec<&'a Resource> {
    let needle = query.to_lowercase();
    resources
        .iter()
        .filter(|r| category == ALL || r.category == category)
        .filter(|r| needle.is_empty() || r.matches_lowercase(&needle))
        .collect()
}

#[derive(Debug)]
pub struct LibraryState {
    resources: Vec<Resource>,
    pub query: String,
    category: &'static str,
    pub selected: usize,
    /// Search box has focus
    pub editing: bool,
    pub load: LoadTracker,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl LibraryState {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self {
            resources,
            query: String::new(),
            category: ALL,
            selected: 0,
            editing: false,
            load: LoadTracker::default(),
        }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn replace_resources(&mut self, resources: Vec<Resource>) {
        self.resources = resources;
        self.clamp_selection();
    }

    pub fn visible(&self) -> Vec<&Resource> {
        search(&self.resources, &self.query, self.category)
    }

    pub fn selected_resource(&self) -> Option<&Resource> {
        self.visible().get(self.selected).copied()
    }

    pub fn cycle_category(&mut self) {
        let idx = LIBRARY_CATEGORIES
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0);
        self.category = LIBRARY_CATEGORIES[(idx + 1) % LIBRARY_CATEGORIES.len()];
        self.clamp_selection();
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.clamp_selection();
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Check the id is in the library before asking the backend for it
    pub fn download(&self, resource_id: &str) -> Result<String, ValidationError> {
        if self.resources.iter().any(|r| r.id == resource_id) {
            Ok(resource_id.to_string())
        } else {
            Err(ValidationError::UnknownId {
                kind: "resource",
                id: resource_id.to_string(),
            })
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
