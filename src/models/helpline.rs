use serde::{Deserialize, Serialize};

/// Urgency class of a helpline, also the values of the urgency filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Emergency,
    Crisis,
    #[default]
    Support,
}

impl Urgency {
    /// Badge text on a helpline card
    pub fn badge(&self) -> &'static str {
        match self {
            Urgency::Emergency => "EMERGENCY",
            Urgency::Crisis => "CRISIS",
            Urgency::Support => "SUPPORT",
        }
    }

    /// Label of this value when used as a filter
    pub fn filter_label(&self) -> &'static str {
        match self {
            Urgency::Emergency => "Emergency Only",
            Urgency::Crisis => "Crisis Only",
            Urgency::Support => "All Support",
        }
    }

    /// Filter cycle order as shown in the selector
    pub fn next_filter(&self) -> Urgency {
        match self {
            Urgency::Support => Urgency::Crisis,
            Urgency::Crisis => Urgency::Emergency,
            Urgency::Emergency => Urgency::Support,
        }
    }
}

/// A crisis or support phone line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Helpline {
    pub name: String,
    /// Display form; may contain instructions like `Text HOME to 741741`
    pub phone: String,
    pub description: String,
    pub availability: String,
    #[serde(rename = "type")]
    pub kind: Urgency,
    /// ISO-ish short code: US, CA, UK, AU
    pub country: String,
}

impl Helpline {
    /// Digits-only form handed to the dialer
    pub fn dial_digits(&self) -> String {
        dial_digits(&self.phone)
    }
}

/// Strip everything but ASCII digits
pub fn dial_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dial_digits_strips_formatting() {
        assert_eq!(dial_digits("1-800-662-4357"), "18006624357");
        assert_eq!(dial_digits("Text HOME to 741741"), "741741");
        assert_eq!(dial_digits("911"), "911");
        assert_eq!(dial_digits("none"), "");
    }

    #[test]
    fn test_filter_cycle_visits_all() {
        let start = Urgency::default();
        let second = start.next_filter();
        let third = second.next_filter();
        assert_eq!(start, Urgency::Support);
        assert_eq!(second, Urgency::Crisis);
        assert_eq!(third, Urgency::Emergency);
        assert_eq!(third.next_filter(), Urgency::Support);
    }
}
