use super::types::{InterpretedValue, LabFindings};
use crate::knowledge::{
    bullet_list, capitalize_first, condition_recommendation, value_specific_diet,
    ConditionRecommendation, GENERAL_HEALTH, GENERAL_HEALTH_BLOCK,
};

const NEXT_STEPS: &[&str] = &[
    "Schedule follow-up with your healthcare provider",
    "Consider consultation with a registered dietitian",
    "Monitor your progress regularly",
    "Keep a health journal to track improvements",
];

const REPORT_NOTE: &str = "**⚠️ Important Note:** These recommendations are based on your specific medical report analysis. Always consult with your healthcare provider for personalized advice tailored to your specific health needs and medical history.";

fn value_line(v: &InterpretedValue) -> String {
    format!(
        "• {}: {} {} ({})",
        v.test.as_str().to_uppercase(),
        v.value,
        v.unit,
        v.status.as_str().to_uppercase()
    )
}

fn value_diet_block(v: &InterpretedValue) -> String {
    format!(
        "**{} ({} {} - {}):**\n{}",
        v.test.as_str().to_uppercase(),
        v.value,
        v.unit,
        v.status.as_str().to_uppercase(),
        bullet_list(value_specific_diet(v.test, v.status))
    )
}

fn condition_block(rec: &ConditionRecommendation) -> String {
    format!(
        "**🏥 {} Management:**\n\n\
         **🥗 Dietary Recommendations:**\n{}\n\n\
         **💊 Medication & Supplement Guidance:**\n{}\n\n\
         **🏃‍♂️ Lifestyle & Exercise Recommendations:**\n{}\n\n\
         **🚨 When to Seek Immediate Medical Attention:**\n{}",
        rec.condition,
        bullet_list(rec.diet),
        bullet_list(rec.medications),
        bullet_list(rec.lifestyle),
        bullet_list(rec.warning_signs),
    )
}

/// Assemble the local medical-report analysis.
///
/// Sections, in order: indicators, abnormal values, summary, value-specific
/// diets (only if something is abnormal), one block per tabulated condition,
/// the general-health block (only if nothing specific was found), next steps
/// and the closing note.
pub fn build_medical_report(findings: &LabFindings) -> String {
    let indicators: Vec<String> = findings
        .conditions
        .iter()
        .map(|c| capitalize_first(c))
        .collect();

    let abnormal: Vec<&InterpretedValue> = findings.abnormal().collect();
    let abnormal_lines = if abnormal.is_empty() {
        "• All detected values are within normal ranges".to_string()
    } else {
        abnormal
            .iter()
            .map(|v| value_line(v))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut sections = vec![
        "🔬 **Medical Report Analysis Complete**".to_string(),
        format!("**📋 Detected Health Indicators:**\n{}", bullet_list(&indicators)),
        format!("**📊 Abnormal Test Results:**\n{abnormal_lines}"),
        "**📄 File Analysis Summary:**\nI've analyzed your medical report and identified the following health indicators. Here's personalized advice based on your specific results:".to_string(),
    ];

    if !abnormal.is_empty() {
        let diets = abnormal
            .iter()
            .map(|v| value_diet_block(v))
            .collect::<Vec<_>>()
            .join("\n\n");
        sections.push(format!(
            "**🥗 Value-Specific Dietary Recommendations:**\n\n{diets}"
        ));
    }

    sections.extend(
        findings
            .conditions
            .iter()
            .filter_map(|c| condition_recommendation(c))
            .map(condition_block),
    );

    if findings.conditions.iter().any(|c| c == GENERAL_HEALTH) {
        sections.push(GENERAL_HEALTH_BLOCK.to_string());
    }

    sections.push(format!("**📋 Next Steps:**\n{}", bullet_list(NEXT_STEPS)));
    sections.push(REPORT_NOTE.to_string());

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::interpret::analyze_lab_values;

    #[test]
    fn high_cholesterol_report_has_value_diet_and_condition_block() {
        let report = build_medical_report(&analyze_lab_values("Cholesterol Total: 250 mg/dL"));

        assert!(report.starts_with("🔬 **Medical Report Analysis Complete**"));
        assert!(report.contains("**📋 Detected Health Indicators:**\n• High cholesterol"));
        assert!(report.contains("• CHOLESTEROL: 250 mg/dL (HIGH)"));
        assert!(report.contains("**CHOLESTEROL (250 mg/dL - HIGH):**\n• 🌾 **Soluble Fiber**"));
        assert!(report.contains("**🏥 High Cholesterol Management:**"));
        assert!(report.contains("**🚨 When to Seek Immediate Medical Attention:**\n• 🚨 **Chest pain or angina**"));
        assert!(!report.contains("General Health Recommendations"));
        assert!(report.ends_with(REPORT_NOTE));
    }

    #[test]
    fn normal_report_gets_general_health_block() {
        let report = build_medical_report(&analyze_lab_values("glucose: 85 mg/dL"));
        assert!(report.contains("• General health"));
        assert!(report.contains("• All detected values are within normal ranges"));
        assert!(!report.contains("Value-Specific Dietary Recommendations"));
        assert!(report.contains("**🏥 General Health Recommendations:**"));
    }

    #[test]
    fn untabulated_condition_lists_indicator_without_block() {
        let report = build_medical_report(&analyze_lab_values("TSH: 6.5"));
        assert!(report.contains("• Thyroid function"));
        assert!(report.contains("• TSH: 6.5 mIU/L (HIGH)"));
        assert!(!report.contains("Management:**"));
        // Untabulated value diets fall back to the balanced list.
        assert!(report.contains("**TSH (6.5 mIU/L - HIGH):**\n• 🥗 **Balanced Diet**"));
    }

    #[test]
    fn section_order_is_fixed() {
        let report = build_medical_report(&analyze_lab_values(
            "glucose: 130 mg/dl\nsystolic: 150 mmhg",
        ));
        let pos = |needle: &str| report.find(needle).unwrap();
        assert!(pos("Detected Health Indicators") < pos("Abnormal Test Results"));
        assert!(pos("Abnormal Test Results") < pos("File Analysis Summary"));
        assert!(pos("File Analysis Summary") < pos("Value-Specific Dietary"));
        assert!(pos("Value-Specific Dietary") < pos("🏥 Diabetes Management"));
        assert!(pos("🏥 Diabetes Management") < pos("🏥 Hypertension (High Blood Pressure) Management"));
        assert!(pos("Hypertension (High Blood Pressure) Management") < pos("Next Steps"));
    }
}
