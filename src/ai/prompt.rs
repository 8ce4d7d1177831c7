use serde::{Deserialize, Serialize};

use crate::context::HealthContext;

/// Kind of uploaded document sent to the model for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Medical,
    Prescription,
}

/// Sent by `test_connection`; any non-empty reply counts as success.
pub const CONNECTION_TEST_PROMPT: &str = "Hello, this is a test message.";

const HEALTH_GUIDELINES: &str = r#"**RESPONSE GUIDELINES:**

**1. Common Text Patterns (respond naturally):**
- "thanks", "thank you", "thx" → "You're welcome! 😊 I'm here to help!"
- "hello", "hi", "hey" → "Hello! 👋 I'm Medikami, your AI health assistant. How can I help?"
- "how are you" → "I'm doing great, thank you! 😊 How can I assist you with your health today?"
- "bye", "goodbye" → "Take care! 👋 Feel free to come back anytime for health advice!"

**2. Unrelated Questions (suggest health focus):**
- If user asks about weather, politics, sports, etc. → "I'm focused on health and wellness! 💪 Would you like to ask me about any health concerns, diet advice, or wellness tips?"
- If user asks about personal problems → "I'm here to help with health-related questions! 🏥 For personal advice, consider talking to a counselor or trusted friend."

**3. Serious Medical Emergencies (provide guidance):**
- If user mentions severe symptoms → "This sounds serious! 🚨 Please call emergency services (911) or visit the nearest hospital immediately. I can't provide emergency medical care."
- If user mentions self-harm → "I'm concerned about your safety. 🆘 Please call a crisis hotline or seek immediate professional help. You're not alone."

**4. Medical Queries (provide comprehensive health guidance):**

For health-related questions, provide a natural, comprehensive response that includes:

**What to cover (in a conversational flow):**
- **Symptoms:** Mention relevant symptoms they might experience
- **Medications:** Suggest appropriate OTC and prescription options (with brand names when helpful)
- **Diet:** Recommend beneficial foods and foods to avoid
- **Exercise:** Suggest helpful physical activities if applicable

**Response Style:**
- Write in a natural, conversational tone
- Flow smoothly between topics rather than rigid sections
- Include all important information (symptoms, medicines, diet, exercise)
- Be specific with recommendations
- Keep it practical and actionable

**Response Requirements:**
- For medical queries: Include symptoms, medicines, diet, and exercise in a natural flow
- For general conversation: Respond naturally and warmly
- For unrelated topics: Gently redirect to health focus
- For emergencies: Provide appropriate guidance and resources
- Include specific brand names for medications when appropriate
- Keep it conversational yet comprehensive
- Maximum 500 words total"#;

/// Prompt for a free-form health question, with the user's known
/// conditions appended when there are any.
pub fn health_prompt(query: &str, context: Option<&HealthContext>) -> String {
    let mut prompt = format!(
        "You are Medikami, a professional AI health assistant. \n\n**User Query:** {}\n\n{}",
        query, HEALTH_GUIDELINES
    );

    if let Some(ctx) = context.filter(|c| c.has_conditions()) {
        prompt.push_str(&format!(
            "\n\n**User's Health Context:** The user has the following health conditions: {}. Please consider these when providing advice.",
            ctx.joined()
        ));
    }

    prompt
}

/// Prompt for a short analysis of an uploaded report or prescription.
pub fn report_prompt(kind: ReportKind, content: &str, file_name: &str) -> String {
    match kind {
        ReportKind::Medical => format!(
            "You are Medikami, analyzing a medical report. Provide CONCISE insights.

**Report:** {file_name}
**Content:** {content}

**Requirements:**
- Keep response SHORT (max 200 words)
- Focus on KEY findings only
- Use clear headings with emojis
- Provide 2-3 main recommendations maximum
- Include brief safety note

**Format:**
**🔬 Key Findings** (2-3 bullet points)
**💊 Main Recommendations** (2-3 bullet points)
**⚠️ Safety Note** (1 sentence)

**Important:** Be direct, avoid overwhelming details, focus on actionable advice."
        ),
        ReportKind::Prescription => format!(
            "You are Medikami, analyzing a prescription. Provide CONCISE guidance.

**Prescription:** {file_name}
**Content:** {content}

**Requirements:**
- Keep response SHORT (max 200 words)
- Focus on KEY medication info only
- Use clear headings with emojis
- Provide 2-3 main points maximum
- Include brief safety note

**Format:**
**💊 Medications** (list main medications)
**🍽️ Key Interactions** (2-3 bullet points)
**⚠️ Safety Note** (1 sentence)

**Important:** Be direct, focus on essential information."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_prompt_embeds_query_and_word_cap() {
        let prompt = health_prompt("I have a headache", None);
        assert!(prompt.starts_with("You are Medikami"));
        assert!(prompt.contains("**User Query:** I have a headache"));
        assert!(prompt.contains("Maximum 500 words total"));
        assert!(!prompt.contains("User's Health Context"));
    }

    #[test]
    fn health_prompt_appends_known_conditions() {
        let ctx = HealthContext::new(["diabetes", "hypertension"]);
        let prompt = health_prompt("what should I eat", Some(&ctx));
        assert!(prompt.ends_with(
            "The user has the following health conditions: diabetes, hypertension. Please consider these when providing advice."
        ));
    }

    #[test]
    fn empty_context_is_not_appended() {
        let prompt = health_prompt("q", Some(&HealthContext::default()));
        assert!(!prompt.contains("User's Health Context"));
    }

    #[test]
    fn report_prompts_cap_at_200_words() {
        let medical = report_prompt(ReportKind::Medical, "glucose 130", "lab.txt");
        assert!(medical.contains("**Report:** lab.txt"));
        assert!(medical.contains("**Content:** glucose 130"));
        assert!(medical.contains("max 200 words"));
        assert!(medical.contains("🔬 Key Findings"));

        let rx = report_prompt(ReportKind::Prescription, "metformin", "rx.pdf");
        assert!(rx.contains("**Prescription:** rx.pdf"));
        assert!(rx.contains("🍽️ Key Interactions"));
    }
}
