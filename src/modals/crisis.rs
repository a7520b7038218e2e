//! Crisis support: helpline catalogue and call placement.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::catalog::COUNTRIES;
use crate::error::{AuraResult, ValidationError};
use crate::models::api::EmergencyCallRequest;
use crate::models::{dial_digits, Helpline, Urgency};
use crate::traits::{Backend, Dialer};

pub const EMERGENCY_NUMBER: &str = "911";
pub const CRISIS_HOTLINE_NUMBER: &str = "988";

/// Buttons above the helpline list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    CallEmergency,
    CallHotline,
    CrisisChat,
}

impl QuickAction {
    pub const ALL: [QuickAction; 3] = [
        QuickAction::CallEmergency,
        QuickAction::CallHotline,
        QuickAction::CrisisChat,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::CallEmergency => "Call 911 Now",
            QuickAction::CallHotline => "Call 988",
            QuickAction::CrisisChat => "Crisis Chat",
        }
    }

    /// Number dialed by this action, if it dials
    pub fn number(&self) -> Option<&'static str> {
        match self {
            QuickAction::CallEmergency => Some(EMERGENCY_NUMBER),
            QuickAction::CallHotline => Some(CRISIS_HOTLINE_NUMBER),
            QuickAction::CrisisChat => None,
        }
    }
}

/// Lines in `country` for the urgency filter. Only `Emergency` narrows the
/// kind; the other two values return every line in the country.
pub fn list_helplines<'a>(
    helplines: &'a [Helpline],
    country: &str,
    urgency: Urgency,
) -> Vec<&'a Helpline> {
    helplines
        .iter()
        .filter(|h| h.country == country)
        .filter(|h| urgency != Urgency::Emergency || h.kind == Urgency::Emergency)
        .collect()
}

/// Strip `phone` to digits, dial, then log the call with the backend.
///
/// Logging runs on its own task so a slow endpoint never holds the dial
/// back; a logging failure is only warned about. Must be called inside a
/// tokio runtime. Returns the digits that were dialed.
pub fn call_helpline(
    backend: Arc<dyn Backend>,
    dialer: &dyn Dialer,
    phone: &str,
) -> AuraResult<String> {
    let digits = dial_digits(phone);
    if digits.is_empty() {
        return Err(ValidationError::UndialableNumber {
            phone: phone.to_string(),
        }
        .into());
    }

    let request = EmergencyCallRequest {
        phone: digits.clone(),
        timestamp: Utc::now(),
    };
    info!(number = %digits, "dialing helpline");
    let dialed = dialer.dial(&digits);

    tokio::spawn(async move {
        if let Err(e) = backend.log_emergency_call(&request).await {
            warn!(phone = %request.phone, error = %e, "emergency call logging failed");
        }
    });

    dialed?;
    Ok(digits)
}

#[derive(Debug)]
pub struct CrisisState {
    helplines: Vec<Helpline>,
    country: usize,
    pub urgency: Urgency,
    /// Index over quick actions followed by visible helplines
    pub selected: usize,
}

impl CrisisState {
    pub fn new(helplines: Vec<Helpline>) -> Self {
        Self {
            helplines,
            country: 0,
            urgency: Urgency::default(),
            selected: 0,
        }
    }

    pub fn country(&self) -> &'static str {
        COUNTRIES[self.country % COUNTRIES.len()]
    }

    pub fn cycle_country(&mut self) {
        self.country = (self.country + 1) % COUNTRIES.len();
        self.clamp_selection();
    }

    pub fn cycle_urgency(&mut self) {
        self.urgency = self.urgency.next_filter();
        self.clamp_selection();
    }

    pub fn visible(&self) -> Vec<&Helpline> {
        list_helplines(&self.helplines, self.country(), self.urgency)
    }

    fn row_count(&self) -> usize {
        QuickAction::ALL.len() + self.visible().len()
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.row_count() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// What activating the selected row does
    pub fn selected_target(&self) -> Option<CrisisTarget> {
        if let Some(action) = QuickAction::ALL.get(self.selected) {
            return Some(CrisisTarget::Quick(*action));
        }
        self.visible()
            .get(self.selected - QuickAction::ALL.len())
            .map(|h| CrisisTarget::Helpline(h.phone.clone()))
    }

    fn clamp_selection(&mut self) {
        let rows = self.row_count();
        if self.selected >= rows {
            self.selected = rows.saturating_sub(1);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrisisTarget {
    Quick(QuickAction),
    /// Display phone string of a helpline
    Helpline(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_us_emergency_only() {
        let lines = catalog::helplines();
        let listed = list_helplines(&lines, "US", Urgency::Emergency);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Emergency Services");
    }

    #[test]
    fn test_us_support_and_crisis_return_all() {
        let lines = catalog::helplines();
        assert_eq!(list_helplines(&lines, "US", Urgency::Support).len(), 5);
        assert_eq!(list_helplines(&lines, "US", Urgency::Crisis).len(), 5);
    }

    #[test]
    fn test_other_country_empty() {
        let lines = catalog::helplines();
        assert!(list_helplines(&lines, "CA", Urgency::Support).is_empty());
    }

    #[test]
    fn test_selection_walks_quick_actions_then_lines() {
        let mut state = CrisisState::new(catalog::helplines());
        assert_eq!(
            state.selected_target(),
            Some(CrisisTarget::Quick(QuickAction::CallEmergency))
        );
        for _ in 0..3 {
            state.select_next();
        }
        assert_eq!(
            state.selected_target(),
            Some(CrisisTarget::Helpline("911".to_string()))
        );
    }

    #[test]
    fn test_country_change_clamps_selection() {
        let mut state = CrisisState::new(catalog::helplines());
        for _ in 0..10 {
            state.select_next();
        }
        assert_eq!(state.selected, 7);
        state.cycle_country();
        assert_eq!(state.country(), "CA");
        assert_eq!(state.selected, 2);
    }
}
