/// An immutable, ordered list of lower-case substrings for one category.
///
/// Matching is plain substring containment with no word boundaries, so
/// "lab" also matches inside "label" and "hi" inside "which".
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

impl KeywordSet {
    /// `message` must already be lower-cased.
    pub fn matches(&self, message: &str) -> bool {
        self.first_match(message).is_some()
    }

    /// First keyword (in list order) contained in `message`.
    pub fn first_match(&self, message: &str) -> Option<&'static str> {
        self.keywords.iter().copied().find(|k| message.contains(k))
    }
}

/// Always pass the health-relevance gate.
pub static BASIC_INTERACTIONS: KeywordSet = KeywordSet {
    name: "basic_interaction",
    keywords: &["hello", "hi", "hey", "thank", "thanks", "help", "what can you do"],
};

/// Phrases answered with a canned reply instead of the AI model.
pub static SMALL_TALK: KeywordSet = KeywordSet {
    name: "small_talk",
    keywords: &[
        "how are you",
        "hello",
        "hi",
        "thank you",
        "thanks",
        "what can you do",
        "help",
    ],
};

pub static HEALTH_TOPICS: KeywordSet = KeywordSet {
    name: "health",
    keywords: &[
        // symptoms and conditions
        "pain", "fever", "headache", "cough", "cold", "flu", "diarrhea", "nausea", "vomiting",
        "dizziness", "fatigue", "weakness", "rash", "itch", "swelling", "bleeding", "bruise",
        "cut", "burn", "infection", "allergy", "asthma", "diabetes", "hypertension",
        "cholesterol", "heart", "lung", "kidney", "liver", "stomach", "intestine", "bone",
        "joint", "muscle", "skin", "eye", "ear", "nose", "throat", "mouth", "tooth", "gum",
        "hair", "nail", "blood", "urine", "stool", "sweat", "mucus", "phlegm",
        // medical terms
        "symptom", "condition", "disease", "illness", "sickness", "disorder", "syndrome",
        "diagnosis", "treatment", "therapy", "medication", "medicine", "drug", "pill", "tablet",
        "capsule", "injection", "vaccine", "antibiotic", "antiviral", "prescription", "dosage",
        "side effect", "allergic", "reaction", "overdose", "withdrawal", "interaction",
        // body and nutrition
        "body", "organ", "tissue", "cell", "nerve", "vein", "artery", "gland", "hormone",
        "enzyme", "protein", "vitamin", "mineral", "nutrient", "calorie", "carbohydrate", "fat",
        "fiber", "sugar", "salt", "water", "oxygen",
        // activities
        // " eat" has a leading space so that "weather" stays out.
        "exercise", "workout", "fitness", "diet", "nutrition", "food", " eat", "drink",
        "sleep", "rest", "stress", "anxiety", "depression", "mental", "physical", "emotional",
        "psychological", "behavioral", "lifestyle", "wellness", "health",
        // procedures
        "test", "exam", "checkup", "screening", "scan", "x-ray", "mri", "ct", "ultrasound",
        "biopsy", "surgery", "operation", "procedure", "rehabilitation", "recovery", "healing",
        "wound", "injury", "trauma", "emergency",
        // professionals
        "doctor", "physician", "nurse", "pharmacist", "dentist", "therapist", "specialist",
        "surgeon", "pediatrician", "gynecologist", "cardiologist", "dermatologist",
        "neurologist", "psychiatrist", "nutritionist", "dietitian",
        // facilities
        "hospital", "clinic", "pharmacy", "laboratory", "emergency room", "urgent care",
        "medical center", "health center",
        // uploads
        "upload", "file", "report", "result", "lab", "medical", "document", "analysis",
    ],
};

pub static BEYOND_CAPABILITY: KeywordSet = KeywordSet {
    name: "beyond_capability",
    keywords: &[
        // procedures
        "surgery", "operation", "procedure", "biopsy", "transplant", "chemotherapy",
        "radiation", "dialysis", "endoscopy", "colonoscopy", "mammogram", "pap smear",
        "prostate exam", "cardiac catheterization",
        // specialties
        "oncologist", "cardiologist", "neurologist", "psychiatrist", "surgeon", "radiologist",
        "pathologist", "anesthesiologist", "orthopedic", "dermatologist", "ophthalmologist",
        "otolaryngologist",
        // complex conditions
        "cancer", "tumor", "malignant", "benign", "metastasis", "leukemia", "lymphoma",
        "melanoma", "heart attack", "stroke", "seizure", "coma", "paralysis",
        "multiple sclerosis", "parkinson", "alzheimer", "dementia", "schizophrenia", "bipolar",
        "autism", "adhd", "ocd", "ptsd",
        // emergencies
        "emergency", "ambulance", "911", "cardiac arrest", "respiratory failure", "shock",
        "bleeding", "unconscious", "not breathing", "chest pain", "severe pain", "broken bone",
        "head injury",
        // complex treatments
        "clinical trial", "experimental", "off-label", "compounded", "infusion", "injection",
        "iv", "catheter", "stent", "pacemaker", "defibrillator", "ventilator", "feeding tube",
        // legal and insurance
        "malpractice", "lawsuit", "insurance", "coverage", "preauthorization", "copay",
        "deductible", "medical billing", "coding", "prior authorization", "appeal", "denial",
        // administrative
        "schedule appointment", "make appointment", "cancel appointment", "reschedule",
        "referral", "medical records", "release form", "consent form", "advance directive",
        "power of attorney",
        // drug questions
        "dosage calculation", "drug interaction", "pharmacokinetics", "pharmacodynamics",
        "half-life", "metabolism", "clearance", "bioavailability", "therapeutic index",
        "drug monitoring",
        // lab interpretation
        "pathology report", "biopsy results", "cytology", "histology", "molecular testing",
        "genetic testing", "prenatal screening", "cancer markers", "tumor markers",
        // diagnostics
        "differential diagnosis", "rule out", "confirm diagnosis", "second opinion",
        "specialist referral", "imaging interpretation", "radiology report",
        "pathology consultation",
        // treatment planning
        "treatment plan", "care plan", "discharge planning", "rehabilitation plan",
        "palliative care", "hospice", "end of life", "advance care planning", "living will",
    ],
};

pub static EMERGENCY: KeywordSet = KeywordSet {
    name: "emergency",
    keywords: &[
        "emergency", "ambulance", "911", "cardiac arrest", "respiratory failure", "shock",
        "bleeding", "unconscious", "not breathing", "chest pain", "severe pain", "broken bone",
        "head injury", "heart attack", "stroke", "seizure", "coma", "not responding",
        "collapsed", "fainted", "severe bleeding", "uncontrollable bleeding",
        "difficulty breathing", "choking", "severe allergic reaction", "anaphylaxis",
        "poisoning", "overdose", "suicide", "self-harm",
    ],
};

pub static UNRELATED: KeywordSet = KeywordSet {
    name: "unrelated",
    keywords: &[
        "weather", "temperature", "rain", "sunny", "cloudy", "forecast",
        "restaurant", "food", "cafe", "dining", "menu", "cuisine",
        "movie", "film", "cinema", "theater", "entertainment", "show",
        "music", "song", "artist", "album", "concert", "performance",
        "sports", "game", "team", "player", "score", "match",
        "news", "politics", "election", "government", "president",
        "math", "homework", "assignment", "school", "college", "university",
        "computer", "technology", "software", "programming", "code",
        "travel", "vacation", "trip", "hotel", "flight", "booking",
        "shopping", "store", "mall", "buy", "purchase", "price",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_substring_not_word_based() {
        assert!(HEALTH_TOPICS.matches("print the label"));
        assert_eq!(HEALTH_TOPICS.first_match("collaborate"), Some("lab"));
        assert!(BASIC_INTERACTIONS.matches("which one"));
    }

    #[test]
    fn first_match_follows_list_order() {
        assert_eq!(EMERGENCY.first_match("severe bleeding"), Some("bleeding"));
    }

    #[test]
    fn emergency_terms_overlap_beyond_capability() {
        for term in ["chest pain", "911", "shock", "head injury"] {
            assert!(EMERGENCY.matches(term));
            assert!(BEYOND_CAPABILITY.matches(term));
        }
    }

    #[test]
    fn weather_question_is_not_a_health_topic() {
        assert!(!HEALTH_TOPICS.matches("what's the weather today?"));
        assert!(UNRELATED.matches("what's the weather today?"));
    }

    #[test]
    fn eat_questions_are_health_topics() {
        for msg in ["what should i eat?", "i can't eat anything", "is eating late bad?"] {
            assert!(HEALTH_TOPICS.matches(msg), "{msg}");
        }
        assert_eq!(HEALTH_TOPICS.first_match("the weather"), None);
        assert_eq!(HEALTH_TOPICS.first_match("can i eat eggs"), Some(" eat"));
    }

    #[test]
    fn keywords_are_lowercase() {
        for set in [
            &BASIC_INTERACTIONS,
            &SMALL_TALK,
            &HEALTH_TOPICS,
            &BEYOND_CAPABILITY,
            &EMERGENCY,
            &UNRELATED,
        ] {
            for kw in set.keywords {
                assert_eq!(*kw, kw.to_lowercase(), "{} in {}", kw, set.name);
            }
        }
    }
}
