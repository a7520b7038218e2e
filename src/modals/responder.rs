//! Rule-based reply selection for the chat assistant.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub const GREETING: &str = "Hello! I'm your AI wellness companion. I'm here to provide emotional \
support and help you navigate your mental health journey. How are you feeling today?";

pub const DISCLAIMER: &str =
    "This AI provides emotional support. For emergencies, contact a crisis helpline.";

/// Keyword groups in priority order; the first group with a hit wins
const KEYWORD_REPLIES: [(&[&str], &str); 6] = [
    (
        &["anxious", "anxiety"],
        "I understand you're feeling anxious. That's completely valid. Try this breathing \
exercise: breathe in for 4 counts, hold for 4, then breathe out for 6. Would you like me to \
guide you through some other coping strategies?",
    ),
    (
        &["sad", "depressed", "down"],
        "I hear that you're going through a difficult time. Your feelings are valid, and it's \
okay to not feel okay sometimes. Small steps can make a big difference. What's one tiny thing \
that usually brings you a moment of peace?",
    ),
    (
        &["stressed", "stress"],
        "Stress can feel overwhelming. Let's break it down - what's the main thing causing you \
stress right now? Sometimes naming it can help us find ways to manage it better.",
    ),
    (
        &["sleep", "tired"],
        "Sleep is so important for mental health. Are you having trouble falling asleep, staying \
asleep, or both? I can suggest some relaxation techniques that might help.",
    ),
    (
        &["thank", "better"],
        "I'm so glad I could help! Remember, healing isn't linear - be patient and kind with \
yourself. Is there anything else you'd like to talk about?",
    ),
    (
        &["help", "support"],
        "I'm here to support you. While I can offer coping strategies and a listening ear, please \
remember that for serious concerns, it's important to reach out to a mental health \
professional. What specific area would you like help with?",
    ),
];

pub const GENERIC_REPLIES: [&str; 5] = [
    "Thank you for sharing that with me. Can you tell me more about how you're feeling?",
    "I appreciate you opening up. What's been on your mind lately?",
    "It sounds like you're going through something. I'm here to listen and support you.",
    "That sounds important. How has this been affecting your day-to-day life?",
    "I want to understand better. What would help you feel more supported right now?",
];

/// Canned reply for the first keyword group the text hits, if any.
///
/// Matching is substring-based on the lower-cased input, so "thanks" hits
/// `thank` and "download" hits `down`.
pub fn keyword_reply(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    KEYWORD_REPLIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, reply)| *reply)
}

/// Picks replies; holds only the RNG, no conversation memory
#[derive(Debug, Clone)]
pub struct Responder {
    rng: StdRng,
}

impl Responder {
    /// Seeded for reproducible generic picks, entropy-seeded otherwise
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn reply(&mut self, text: &str) -> &'static str {
        keyword_reply(text).unwrap_or_else(|| {
            GENERIC_REPLIES
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(GENERIC_REPLIES[0])
        })
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anxiety_reply_is_deterministic() {
        let mut a = Responder::new(Some(1));
        let mut b = Responder::new(Some(99));
        let expected = KEYWORD_REPLIES[0].1;
        assert_eq!(a.reply("I feel so ANXIOUS today"), expected);
        assert_eq!(b.reply("my anxiety is bad"), expected);
    }

    #[test]
    fn test_priority_order() {
        // anxiety outranks stress
        assert_eq!(
            keyword_reply("stressed and anxious"),
            Some(KEYWORD_REPLIES[0].1)
        );
        assert_eq!(keyword_reply("so tired"), Some(KEYWORD_REPLIES[3].1));
        assert_eq!(keyword_reply("thanks, I feel better"), Some(KEYWORD_REPLIES[4].1));
        assert_eq!(keyword_reply("I need support"), Some(KEYWORD_REPLIES[5].1));
    }

    #[test]
    fn test_generic_reply_from_pool() {
        let mut responder = Responder::new(Some(7));
        for _ in 0..20 {
            let reply = responder.reply("the weather is nice");
            assert!(GENERIC_REPLIES.contains(&reply));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Responder::new(Some(42));
        let mut b = Responder::new(Some(42));
        for _ in 0..10 {
            assert_eq!(a.reply("hmm"), b.reply("hmm"));
        }
    }

    #[test]
    fn test_no_keyword_for_plain_text() {
        assert!(keyword_reply("hello there").is_none());
    }
}
