use std::sync::LazyLock;

use regex::Regex;

use super::prompt::ReportKind;

pub const HEALTH_DISCLAIMER: &str = "\n\n⚠️ **Important:** This advice is general and not a substitute for professional diagnosis. Please consult a healthcare provider for personal medical advice.";

pub const REPORT_HEADING: &str = "🔬 **Medical Report Analysis Complete**";
pub const REPORT_DISCLAIMER: &str = "\n\n**⚠️ Important Note:** This analysis is based on your medical report. Always consult healthcare professionals for personalized advice.";

pub const PRESCRIPTION_HEADING: &str = "💊 **Prescription Analysis Complete**";
pub const PRESCRIPTION_DISCLAIMER: &str = "\n\n**⚠️ Important Note:** Always follow your doctor's specific instructions. This analysis is for informational purposes only.";

/// Line-leading list marker: `1.`, `2)`, `-`, `*` or `•` followed by
/// whitespace. `**bold**` has no whitespace after the first `*` and is kept.
static LIST_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:\d+[.)]|[-*•])[ \t]+").expect("valid regex")
});

/// Rewrite every list marker to a single `• ` bullet.
pub fn normalize_bullets(text: &str) -> String {
    LIST_MARKER_RE.replace_all(text, "• ").into_owned()
}

/// Post-process a free-form health answer: trim, normalise bullets and add
/// the disclaimer unless the model already points to professional guidance.
pub fn format_health_response(raw: &str) -> String {
    let mut text = normalize_bullets(raw.trim());

    let lower = text.to_lowercase();
    if !lower.contains("medical guidance") && !lower.contains("consult a doctor") {
        text.push_str(HEALTH_DISCLAIMER);
    }
    text
}

/// Post-process a report or prescription analysis: ensure the heading and
/// add the disclaimer unless the text already mentions a doctor.
pub fn format_report_response(kind: ReportKind, raw: &str) -> String {
    let (icon, heading, disclaimer) = match kind {
        ReportKind::Medical => ("🔬", REPORT_HEADING, REPORT_DISCLAIMER),
        ReportKind::Prescription => ("💊", PRESCRIPTION_HEADING, PRESCRIPTION_DISCLAIMER),
    };

    let trimmed = raw.trim();
    let mut text = if trimmed.starts_with(icon) {
        trimmed.to_string()
    } else {
        format!("{heading}\n\n{trimmed}")
    };

    let lower = text.to_lowercase();
    if !lower.contains("consult") && !lower.contains("doctor") {
        text.push_str(disclaimer);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_and_dashed_lists_become_bullets() {
        let raw = "Try this:\n1. Rest\n2) Fluids\n - Honey\n* Tea";
        assert_eq!(
            normalize_bullets(raw),
            "Try this:\n• Rest\n• Fluids\n• Honey\n• Tea"
        );
    }

    #[test]
    fn bold_markup_is_not_treated_as_a_bullet() {
        let raw = "**For relief**, try paracetamol.";
        assert_eq!(normalize_bullets(raw), raw);
    }

    #[test]
    fn decimals_at_line_start_are_kept() {
        assert_eq!(normalize_bullets("2.5 mg daily"), "2.5 mg daily");
    }

    #[test]
    fn disclaimer_added_when_missing() {
        let out = format_health_response("  Drink water.  ");
        assert!(out.starts_with("Drink water."));
        assert!(out.ends_with(HEALTH_DISCLAIMER));
    }

    #[test]
    fn disclaimer_skipped_when_model_says_consult_a_doctor() {
        let out = format_health_response("Rest well. Consult a doctor if it persists.");
        assert!(!out.contains("⚠️ **Important:**"));
    }

    #[test]
    fn report_heading_prefixed_once() {
        let out = format_report_response(ReportKind::Medical, "Glucose is high.");
        assert!(out.starts_with(REPORT_HEADING));
        assert!(out.ends_with(REPORT_DISCLAIMER));

        let already = format_report_response(ReportKind::Medical, "🔬 Findings: see your doctor");
        assert!(already.starts_with("🔬 Findings"));
        assert!(!already.contains(REPORT_DISCLAIMER));
    }

    #[test]
    fn prescription_gets_its_own_heading() {
        let out = format_report_response(ReportKind::Prescription, "Metformin twice daily.");
        assert!(out.starts_with(PRESCRIPTION_HEADING));
        assert!(out.ends_with(PRESCRIPTION_DISCLAIMER));
    }
}
