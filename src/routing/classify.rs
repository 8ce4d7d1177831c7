use serde::Serialize;

use super::keywords::{
    BASIC_INTERACTIONS, BEYOND_CAPABILITY, EMERGENCY, HEALTH_TOPICS, SMALL_TALK, UNRELATED,
};

/// Verdict of the keyword classifier for one message.
///
/// Categories are independent: a message can be both an emergency and
/// beyond capability, or unrelated and an emergency at the same time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub is_health_related: bool,
    pub is_emergency: bool,
    pub is_beyond_capability: bool,
    pub is_unrelated: bool,
    /// Greeting, thanks or help phrase. Forces `is_health_related`.
    pub is_basic_interaction: bool,
    /// Conversational phrase answered without the AI model.
    pub is_small_talk: bool,
}

impl Classification {
    /// True when the canned fallback answers this message directly, without
    /// trying the AI model first.
    pub fn answer_locally(&self) -> bool {
        !self.is_health_related
            || self.is_beyond_capability
            || self.is_emergency
            || self.is_small_talk
    }
}

/// Classify a message by case-folded substring matching.
pub fn classify(message: &str) -> Classification {
    let lower = message.to_lowercase();

    let is_basic_interaction = BASIC_INTERACTIONS.matches(&lower);
    Classification {
        is_health_related: is_basic_interaction || HEALTH_TOPICS.matches(&lower),
        is_emergency: EMERGENCY.matches(&lower),
        is_beyond_capability: BEYOND_CAPABILITY.matches(&lower),
        is_unrelated: UNRELATED.matches(&lower),
        is_basic_interaction,
        is_small_talk: SMALL_TALK.matches(&lower),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greetings_always_pass_health_gate() {
        for msg in ["hi", "Thanks!", "hey, what's the weather?", "help me buy a movie ticket"] {
            let c = classify(msg);
            assert!(c.is_health_related, "{msg}");
            assert!(c.is_basic_interaction, "{msg}");
        }
    }

    #[test]
    fn greeting_gate_does_not_clear_other_categories() {
        let c = classify("hey, what's the weather?");
        assert!(c.is_unrelated);
    }

    #[test]
    fn fever_question_goes_to_model() {
        let c = classify("I have fever, what should I do?");
        assert!(c.is_health_related);
        assert!(!c.is_beyond_capability);
        assert!(!c.is_emergency);
        assert!(!c.answer_locally());
    }

    #[test]
    fn weather_question_is_unrelated() {
        let c = classify("What's the weather today?");
        assert!(!c.is_health_related);
        assert!(c.is_unrelated);
        assert!(!c.is_emergency);
        assert!(c.answer_locally());
    }

    #[test]
    fn eating_question_goes_to_model() {
        let c = classify("What should I eat?");
        assert!(c.is_health_related);
        assert!(!c.is_unrelated);
        assert!(!c.answer_locally());
    }

    #[test]
    fn chest_pain_is_emergency_and_beyond_capability() {
        let c = classify("I have chest pain");
        assert!(c.is_health_related);
        assert!(c.is_emergency);
        assert!(c.is_beyond_capability);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("CHEST PAIN"), classify("chest pain"));
    }

    #[test]
    fn lab_matches_inside_unrelated_words() {
        // "collaborate" contains "lab"; the looseness is kept as-is.
        let c = classify("collaborate");
        assert!(c.is_health_related);
    }

    #[test]
    fn report_is_health_related() {
        assert!(classify("can you read my report").is_health_related);
    }

    #[test]
    fn how_are_you_is_small_talk_but_not_health() {
        let c = classify("how are you");
        assert!(c.is_small_talk);
        assert!(!c.is_health_related);
    }
}
