//! Built-in mock catalogue.
//!
//! Served by the offline backend. The crisis modal lists the helplines
//! directly; every other modal starts empty and loads on open.
//! Relative timestamps are computed from the `now` passed in so tests can pin
//! the clock.

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    Author, Counsellor, Helpline, Post, Resource, ResourceKind, SessionType, Urgency,
};

/// Filter value meaning "no restriction"
pub const ALL: &str = "all";

pub const COMMUNITY_CATEGORIES: [&str; 6] = [
    ALL,
    "Support",
    "Motivation",
    "Resources",
    "Success Stories",
    "Questions",
];

pub const LIBRARY_CATEGORIES: [&str; 6] = [
    ALL,
    "Anxiety",
    "Depression",
    "Meditation",
    "Self-Help",
    "Therapy",
];

pub const SPECIALIZATIONS: [&str; 7] = [
    ALL,
    "Anxiety",
    "Depression",
    "Trauma",
    "Couples Therapy",
    "Teen Counseling",
    "ADHD",
];

pub const COUNTRIES: [&str; 4] = ["US", "CA", "UK", "AU"];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            author: Author::anonymous(),
            content: "Started therapy last week and feeling hopeful for the first time in months. \
                      Anyone else have similar experiences?"
                .to_string(),
            timestamp: now - Duration::hours(2),
            like_count: 24,
            comment_count: 8,
            liked_by_viewer: false,
            category: "Support".to_string(),
            is_anonymous: true,
        },
        Post {
            id: "2".to_string(),
            author: Author {
                name: "Sarah M.".to_string(),
                avatar: "SM".to_string(),
                is_verified: true,
            },
            content: "Reminder: It's okay to have bad days. Progress isn't always linear. \
                      Be kind to yourself. 💙"
                .to_string(),
            timestamp: now - Duration::hours(4),
            like_count: 56,
            comment_count: 12,
            liked_by_viewer: true,
            category: "Motivation".to_string(),
            is_anonymous: false,
        },
    ]
}

pub fn counsellors(now: DateTime<Utc>) -> Vec<Counsellor> {
    vec![
        Counsellor {
            id: "1".to_string(),
            name: "Dr. Sarah Chen".to_string(),
            title: "Licensed Clinical Psychologist".to_string(),
            specializations: strings(&["Anxiety", "Depression", "Trauma"]),
            rating: 4.9,
            experience_years: 8,
            location: "San Francisco, CA".to_string(),
            avatar: "SC".to_string(),
            is_online: true,
            next_available: now + Duration::hours(2),
            session_types: vec![SessionType::Video, SessionType::Audio, SessionType::Chat],
            bio: "Specializing in cognitive behavioral therapy with a focus on anxiety and trauma recovery."
                .to_string(),
            price: 120,
            total_sessions: 1250,
            languages: strings(&["English", "Mandarin"]),
        },
        Counsellor {
            id: "2".to_string(),
            name: "Dr. Michael Torres".to_string(),
            title: "Licensed Marriage & Family Therapist".to_string(),
            specializations: strings(&["Couples Therapy", "Family Counseling", "Communication"]),
            rating: 4.8,
            experience_years: 12,
            location: "Austin, TX".to_string(),
            avatar: "MT".to_string(),
            is_online: false,
            next_available: now + Duration::hours(24),
            session_types: vec![SessionType::Video, SessionType::Audio],
            bio: "Helping couples and families build stronger relationships through evidence-based approaches."
                .to_string(),
            price: 150,
            total_sessions: 890,
            languages: strings(&["English", "Spanish"]),
        },
        Counsellor {
            id: "3".to_string(),
            name: "Dr. Emily Watson".to_string(),
            title: "Clinical Psychologist".to_string(),
            specializations: strings(&["Teen Counseling", "ADHD", "Self-Esteem"]),
            rating: 4.7,
            experience_years: 6,
            location: "Boston, MA".to_string(),
            avatar: "EW".to_string(),
            is_online: true,
            next_available: now + Duration::hours(4),
            session_types: vec![SessionType::Video, SessionType::Chat],
            bio: "Passionate about helping teens and young adults navigate life transitions and build confidence."
                .to_string(),
            price: 100,
            total_sessions: 650,
            languages: strings(&["English"]),
        },
    ]
}

pub fn resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "1".to_string(),
            title: "Understanding Anxiety: A Comprehensive Guide".to_string(),
            description: "Learn about anxiety disorders, symptoms, and coping strategies."
                .to_string(),
            kind: ResourceKind::Article,
            category: "Anxiety".to_string(),
            rating: 4.8,
            downloads: 1245,
            duration: None,
            author: "Dr. Sarah Wilson".to_string(),
            tags: strings(&["anxiety", "coping", "mental health"]),
        },
        Resource {
            id: "2".to_string(),
            title: "Mindful Breathing Techniques".to_string(),
            description: "Guided audio sessions for stress relief and relaxation.".to_string(),
            kind: ResourceKind::Audio,
            category: "Meditation".to_string(),
            rating: 4.9,
            downloads: 2156,
            duration: Some("15 min".to_string()),
            author: "James Miller".to_string(),
            tags: strings(&["meditation", "breathing", "relaxation"]),
        },
        Resource {
            id: "3".to_string(),
            title: "Daily Mood Tracking Worksheet".to_string(),
            description: "Track your emotional patterns and identify triggers.".to_string(),
            kind: ResourceKind::Worksheet,
            category: "Self-Help".to_string(),
            rating: 4.6,
            downloads: 987,
            duration: None,
            author: "AURA.AI Team".to_string(),
            tags: strings(&["mood tracking", "worksheet", "self-awareness"]),
        },
    ]
}

pub fn helplines() -> Vec<Helpline> {
    let line = |name: &str, phone: &str, description: &str, availability: &str, kind: Urgency| Helpline {
        name: name.to_string(),
        phone: phone.to_string(),
        description: description.to_string(),
        availability: availability.to_string(),
        kind,
        country: "US".to_string(),
    };
    vec![
        line(
            "Emergency Services",
            "911",
            "For immediate life-threatening emergencies",
            "24/7",
            Urgency::Emergency,
        ),
        line(
            "National Suicide Prevention Lifeline",
            "988",
            "Free and confidential emotional support for people in suicidal crisis",
            "24/7",
            Urgency::Crisis,
        ),
        line(
            "Crisis Text Line",
            "Text HOME to 741741",
            "Free, 24/7 support for those in crisis via text message",
            "24/7",
            Urgency::Crisis,
        ),
        line(
            "SAMHSA National Helpline",
            "1-800-662-4357",
            "Treatment referral and information service for mental health and substance abuse",
            "24/7",
            Urgency::Support,
        ),
        line(
            "National Alliance on Mental Illness (NAMI)",
            "1-800-950-6264",
            "Information, referrals and support for people with mental health conditions",
            "Monday-Friday 10am-10pm ET",
            Urgency::Support,
        ),
    ]
}
