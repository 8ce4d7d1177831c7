use tracing::debug;

use super::classify::{classify, Classification};
use crate::context::HealthContext;

pub const EMERGENCY_RESPONSE: &str = "🚨 **Medical Emergency**\n\nPlease contact emergency services immediately or visit the nearest emergency room.";

pub const UNRELATED_RESPONSE: &str = "I'm here to assist with health-related questions. Please ask about symptoms, nutrition, or medications.";

pub const REDIRECT_RESPONSE: &str = "Please ask about health topics like symptoms, nutrition, or medications. Type 'help' to see what I can do.";

pub const BEYOND_CAPABILITY_RESPONSE: &str = "I focus on basic health topics like symptoms, nutrition, and OTC medications. For complex medical issues, please consult a doctor.";

pub const GREETING_RESPONSE: &str =
    "Hello! I'm here to help with your health questions. How can I assist you today?";

pub const THANKS_RESPONSE: &str =
    "You're welcome! Is there anything else you'd like to know about your health?";

pub const CAPABILITIES_RESPONSE: &str = "**Health Assistant** • What I Can Help With

**💊 OTC Medications:** Fever, cold, headache, stomach problems
**🏥 Health Conditions:** Anemia, diabetes, hypertension
**🥗 Nutrition & Exercise:** Diet guidelines, workout plans

**📝 Ask:** \"I have fever, what medicine should I take?\" or \"What diet for diabetes?\"

**⚠️ Note:** I provide general health information only. Always consult healthcare professionals for medical advice.";

pub const UPLOAD_REPORT_PROMPT: &str = "Upload your medical report using the attachment button for specific analysis and recommendations.";

pub const INVITATION_RESPONSE: &str = "I'd be happy to help with your health concern! Please describe your symptoms or ask your health question.";

/// Which canned reply the fallback generator picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackKind {
    Emergency,
    Unrelated,
    Redirect,
    BeyondCapability,
    Greeting,
    Thanks,
    Capabilities,
    ReportSummary,
    UploadPrompt,
    Invitation,
}

/// Pick the reply for a message. First matching rule wins; emergencies are
/// never redirected.
pub fn select_fallback(
    message: &str,
    verdict: &Classification,
    context: Option<&HealthContext>,
) -> FallbackKind {
    let lower = message.to_lowercase();

    // Checked ahead of the health gate so that emergency terms outside the
    // beyond-capability list ("fainted", "choking") are not answered with
    // an invitation.
    if verdict.is_emergency {
        return FallbackKind::Emergency;
    }

    if !verdict.is_health_related {
        return if verdict.is_unrelated {
            FallbackKind::Unrelated
        } else {
            FallbackKind::Redirect
        };
    }

    if verdict.is_beyond_capability {
        return FallbackKind::BeyondCapability;
    }

    let has = |phrases: &[&str]| phrases.iter().any(|p| lower.contains(p));

    if has(&["how are you", "hello", "hi"]) {
        FallbackKind::Greeting
    } else if has(&["thank you", "thanks"]) {
        FallbackKind::Thanks
    } else if has(&["what can you do", "help"]) {
        FallbackKind::Capabilities
    } else if has(&["medical report", "lab report"]) {
        if context.is_some_and(HealthContext::has_conditions) {
            FallbackKind::ReportSummary
        } else {
            FallbackKind::UploadPrompt
        }
    } else {
        FallbackKind::Invitation
    }
}

impl FallbackKind {
    pub fn render(self, context: Option<&HealthContext>) -> String {
        match self {
            Self::Emergency => EMERGENCY_RESPONSE.to_string(),
            Self::Unrelated => UNRELATED_RESPONSE.to_string(),
            Self::Redirect => REDIRECT_RESPONSE.to_string(),
            Self::BeyondCapability => BEYOND_CAPABILITY_RESPONSE.to_string(),
            Self::Greeting => GREETING_RESPONSE.to_string(),
            Self::Thanks => THANKS_RESPONSE.to_string(),
            Self::Capabilities => CAPABILITIES_RESPONSE.to_string(),
            Self::ReportSummary => format!(
                "**Medical Report Analysis**\n\nMain areas to focus on: {}.\n\n**⚠️ Note:** Please consult a doctor for detailed analysis and treatment.",
                context.map(HealthContext::joined).unwrap_or_default()
            ),
            Self::UploadPrompt => UPLOAD_REPORT_PROMPT.to_string(),
            Self::Invitation => INVITATION_RESPONSE.to_string(),
        }
    }
}

/// Canned reply for a message, produced without calling the AI model.
///
/// Deterministic: the same message and context always give the same text.
pub fn fallback(message: &str, context: Option<&HealthContext>) -> String {
    let verdict = classify(message);
    let kind = select_fallback(message, &verdict, context);
    debug!(kind = ?kind, "Fallback reply selected");
    kind.render(context)
}
