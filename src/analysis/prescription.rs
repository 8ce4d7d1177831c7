use serde::Serialize;

use crate::knowledge::{
    bullet_list, capitalize_first, DIETARY_CONSIDERATIONS, DRUG_FOOD_INTERACTIONS,
    IMPORTANT_CONTACTS, MEDICATION_GUIDELINES, MEDICATION_WARNING_SIGNS, PRESCRIPTION_NEXT_STEPS,
    PRESCRIPTION_RULES, UNDETECTED_MEDICATIONS,
};

const PRESCRIPTION_NOTE: &str = "**⚠️ Important:** Always follow your doctor's specific instructions. This analysis is based on your prescription content. Consult healthcare professionals for personalized advice.";

/// Medications and linked conditions found in a prescription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrescriptionFindings {
    pub medications: Vec<&'static str>,
    /// In rule order; may repeat when several families share a condition.
    pub conditions: Vec<&'static str>,
}

/// Substring detection of known drug families in prescription text.
pub fn detect_medications(content: &str) -> PrescriptionFindings {
    let lower = content.to_lowercase();
    let mut findings = PrescriptionFindings::default();

    for rule in PRESCRIPTION_RULES.iter().filter(|r| r.matches(&lower)) {
        findings.medications.push(rule.label);
        findings.conditions.push(rule.condition);
    }
    findings
}

/// Assemble the local prescription analysis.
pub fn build_prescription_report(findings: &PrescriptionFindings) -> String {
    let medications = if findings.medications.is_empty() {
        bullet_list(&[UNDETECTED_MEDICATIONS])
    } else {
        bullet_list(&findings.medications)
    };

    let conditions = if findings.conditions.is_empty() {
        "• General health management".to_string()
    } else {
        let names: Vec<String> = findings
            .conditions
            .iter()
            .map(|c| capitalize_first(c))
            .collect();
        bullet_list(&names)
    };

    [
        "💊 **Prescription Analysis Complete**".to_string(),
        format!("**📋 Detected Medications:**\n{medications}"),
        format!("**🏥 Associated Health Conditions:**\n{conditions}"),
        format!(
            "**💊 Medication Management Guidelines:**\n{}",
            bullet_list(MEDICATION_GUIDELINES)
        ),
        format!(
            "**🍽️ Dietary Considerations:**\n{}",
            bullet_list(DIETARY_CONSIDERATIONS)
        ),
        format!(
            "**🚨 Common Drug-Food Interactions:**\n{}",
            bullet_list(DRUG_FOOD_INTERACTIONS)
        ),
        format!(
            "**⚠️ Warning Signs to Watch For:**\n{}",
            bullet_list(MEDICATION_WARNING_SIGNS)
        ),
        format!("**📋 Next Steps:**\n{}", bullet_list(PRESCRIPTION_NEXT_STEPS)),
        format!("**📞 Important Contacts:**\n{}", bullet_list(IMPORTANT_CONTACTS)),
        PRESCRIPTION_NOTE.to_string(),
    ]
    .join("\n\n")
}
