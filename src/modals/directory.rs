//! Counsellor directory: filtering, sorting and booking intents.

use std::cmp::Ordering;

use crate::catalog::{ALL, SPECIALIZATIONS};
use crate::error::ValidationError;
use crate::models::api::BookSessionRequest;
use crate::models::{Counsellor, SessionType};
use crate::state::LoadTracker;

/// Session type every booking is requested as
pub const BOOKING_SESSION_TYPE: SessionType = SessionType::Video;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Rating,
    Experience,
    Price,
    Availability,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Rating => "Highest Rated",
            SortKey::Experience => "Most Experienced",
            SortKey::Price => "Lowest Price",
            SortKey::Availability => "Soonest Available",
        }
    }

    pub fn next(&self) -> SortKey {
        match self {
            SortKey::Rating => SortKey::Experience,
            SortKey::Experience => SortKey::Price,
            SortKey::Price => SortKey::Availability,
            SortKey::Availability => SortKey::Rating,
        }
    }

    fn compare(&self, a: &Counsellor, b: &Counsellor) -> Ordering {
        match self {
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Experience => b.experience_years.cmp(&a.experience_years),
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Availability => a.next_available.cmp(&b.next_available),
        }
    }
}

/// Directory filter; `None` fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    pub specialization: Option<String>,
    pub session_type: Option<SessionType>,
}

impl DirectoryFilter {
    pub fn matches(&self, counsellor: &Counsellor) -> bool {
        let spec_ok = self
            .specialization
            .as_deref()
            .map_or(true, |s| counsellor.specializes_in(s));
        let session_ok = self
            .session_type
            .map_or(true, |t| counsellor.offers(t));
        spec_ok && session_ok
    }

    pub fn specialization_label(&self) -> &str {
        self.specialization.as_deref().unwrap_or(ALL)
    }

    pub fn session_label(&self) -> &'static str {
        self.session_type.map_or(ALL, |t| t.as_str())
    }

    pub fn cycle_specialization(&mut self) {
        let current = self.specialization_label().to_string();
        let idx = SPECIALIZATIONS
            .iter()
            .position(|s| *s == current)
            .unwrap_or(0);
        let next = SPECIALIZATIONS[(idx + 1) % SPECIALIZATIONS.len()];
        self.specialization = (next != ALL).then(|| next.to_string());
    }

    pub fn cycle_session_type(&mut self) {
        self.session_type = match self.session_type {
            None => Some(SessionType::Video),
            Some(SessionType::Video) => Some(SessionType::Audio),
            Some(SessionType::Audio) => Some(SessionType::Chat),
            Some(SessionType::Chat) => None,
        };
    }
}

/// Filter then stable-sort; the input slice is left untouched
pub fn list_counsellors<'a>(
    counsellors: &'a [Counsellor],
    filter: &DirectoryFilter,
    sort: SortKey,
) -> Vec<&'a Counsellor> {
    let mut listed: Vec<&Counsellor> = counsellors.iter().filter(|c| filter.matches(c)).collect();
    listed.sort_by(|a, b| sort.compare(a, b));
    listed
}

#[derive(Debug, Default)]
pub struct DirectoryState {
    counsellors: Vec<Counsellor>,
    pub filter: DirectoryFilter,
    pub sort: SortKey,
    pub selected: usize,
    pub load: LoadTracker,
}

impl DirectoryState {
    pub fn new(counsellors: Vec<Counsellor>) -> Self {
        Self {
            counsellors,
            ..Default::default()
        }
    }

    pub fn counsellors(&self) -> &[Counsellor] {
        &self.counsellors
    }

    pub fn replace_counsellors(&mut self, counsellors: Vec<Counsellor>) {
        self.counsellors = counsellors;
        self.clamp_selection();
    }

    pub fn visible(&self) -> Vec<&Counsellor> {
        list_counsellors(&self.counsellors, &self.filter, self.sort)
    }

    pub fn selected_counsellor(&self) -> Option<&Counsellor> {
        self.visible().get(self.selected).copied()
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

    pub fn cycle_specialization(&mut self) {
        self.filter.cycle_specialization();
        self.clamp_selection();
    }

    pub fn cycle_session_type(&mut self) {
        self.filter.cycle_session_type();
        self.clamp_selection();
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
    }

    /// Build the booking request for a known counsellor
    pub fn book_session(&self, counsellor_id: &str) -> Result<BookSessionRequest, ValidationError> {
        if !self.counsellors.iter().any(|c| c.id == counsellor_id) {
            return Err(ValidationError::UnknownId {
                kind: "counsellor",
                id: counsellor_id.to_string(),
            });
        }
        Ok(BookSessionRequest {
            counsellor_id: counsellor_id.to_string(),
            session_type: BOOKING_SESSION_TYPE,
        })
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use chrono::Utc;

    fn directory() -> DirectoryState {
        DirectoryState::new(catalog::counsellors(Utc::now()))
    }

    fn prices(list: &[&Counsellor]) -> Vec<u32> {
        list.iter().map(|c| c.price).collect()
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let dir = directory();
        let listed = list_counsellors(dir.counsellors(), &DirectoryFilter::default(), SortKey::Price);
        assert_eq!(prices(&listed), vec![100, 120, 150]);
    }

    #[test]
    fn test_sort_by_rating_and_experience() {
        let dir = directory();
        let all = DirectoryFilter::default();
        let by_rating = list_counsellors(dir.counsellors(), &all, SortKey::Rating);
        assert_eq!(by_rating[0].name, "Dr. Sarah Chen");
        let by_exp = list_counsellors(dir.counsellors(), &all, SortKey::Experience);
        assert_eq!(by_exp[0].name, "Dr. Michael Torres");
        let soonest = list_counsellors(dir.counsellors(), &all, SortKey::Availability);
        assert_eq!(soonest[0].id, "1");
        assert_eq!(soonest[2].id, "2");
    }

    #[test]
    fn test_filters_and_combine() {
        let dir = directory();
        let filter = DirectoryFilter {
            specialization: Some("Anxiety".to_string()),
            session_type: Some(SessionType::Chat),
        };
        let listed = list_counsellors(dir.counsellors(), &filter, SortKey::Rating);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "1");

        let audio_teens = DirectoryFilter {
            specialization: Some("Teen Counseling".to_string()),
            session_type: Some(SessionType::Audio),
        };
        assert!(list_counsellors(dir.counsellors(), &audio_teens, SortKey::Rating).is_empty());
    }

    #[test]
    fn test_base_sequence_untouched() {
        let dir = directory();
        let _ = list_counsellors(dir.counsellors(), &DirectoryFilter::default(), SortKey::Price);
        let ids: Vec<&str> = dir.counsellors().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_book_session_requests_video() {
        let dir = directory();
        let req = dir.book_session("2").unwrap();
        assert_eq!(req.session_type, SessionType::Video);
        assert!(dir.book_session("404").is_err());
    }

    #[test]
    fn test_specialization_cycle_wraps_to_all() {
        let mut filter = DirectoryFilter::default();
        for _ in 0..SPECIALIZATIONS.len() - 1 {
            filter.cycle_specialization();
            assert!(filter.specialization.is_some());
        }
        filter.cycle_specialization();
        assert!(filter.specialization.is_none());
    }
}
