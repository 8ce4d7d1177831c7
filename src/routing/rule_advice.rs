//! Rule-based advice used when the AI model is unavailable or fails.
//!
//! Unlike the fallback generator this responder is keyed on condition and
//! symptom names, so a plain "I have fever" still gets a useful answer.

use tracing::debug;

use super::fallback::CAPABILITIES_RESPONSE;
use crate::knowledge::{
    bullet_list, capitalize_first, otc_guide, symptom_foods, RuleCondition, SymptomGuide,
    OTC_GUIDES, RULE_CONDITIONS, SYMPTOM_ALIASES,
};

pub const NUTRITION_GUIDE: &str = "**Nutrition** • Diet Guidelines

**🥗 Balanced Diet:**
• Fruits & Vegetables: 5-9 servings daily
• Whole Grains: Brown rice, quinoa, whole wheat
• Lean Proteins: Fish, chicken, beans
• Healthy Fats: Nuts, olive oil, avocado
• Dairy: Low-fat milk, yogurt, cheese

**💧 Hydration:**
• Drink 8-10 glasses of water daily
• Include herbal teas and coconut water

**⚠️ Note:** This is general nutrition advice. It's best to consult a doctor for personalized dietary recommendations.";

pub const EXERCISE_GUIDE: &str = "**Exercise** • Fitness Guide

**💪 Weekly Goals:**
• Cardio: 150 minutes moderate or 75 minutes vigorous
• Strength Training: 2-3 sessions per week
• Flexibility: Daily stretching

**🏃‍♂️ Activities:**
• Walking, jogging, cycling, swimming
• Sports: tennis, basketball, soccer
• Bodyweight exercises: push-ups, squats

**⚠️ Note:** Start slowly and consult a doctor before beginning a new exercise program.";

/// Answer a health question from the static tables.
///
/// Order: condition names, OTC symptom names, symptom aliases, then diet and
/// exercise topics, then the capabilities overview.
pub fn rule_advice(query: &str) -> String {
    let lower = query.to_lowercase();

    if let Some(condition) = RULE_CONDITIONS.iter().find(|c| lower.contains(c.name)) {
        debug!(condition = condition.name, "Rule advice: condition guide");
        return format_condition(condition);
    }

    if let Some(guide) = OTC_GUIDES.iter().find(|g| lower.contains(g.symptom)) {
        debug!(symptom = guide.symptom, "Rule advice: OTC guide");
        return format_medication_guide(guide);
    }

    for (aliases, symptom) in SYMPTOM_ALIASES {
        if aliases.iter().any(|a| lower.contains(a)) {
            if let Some(guide) = otc_guide(symptom) {
                debug!(symptom, "Rule advice: OTC guide via alias");
                return format_medication_guide(guide);
            }
        }
    }

    if lower.contains("diet") || lower.contains("nutrition") {
        NUTRITION_GUIDE.to_string()
    } else if lower.contains("exercise") || lower.contains("workout") {
        EXERCISE_GUIDE.to_string()
    } else {
        CAPABILITIES_RESPONSE.to_string()
    }
}

fn format_medication_guide(guide: &SymptomGuide) -> String {
    let medications = guide
        .medications
        .iter()
        .map(|med| {
            format!(
                "• {}: {} ({})\n  Timing: {}",
                med.name,
                med.dosage,
                med.brand_names.join(", "),
                med.timing
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "**{}** • OTC Medication Guide\n\n\
         **💊 Medications:**\n{}\n\n\
         **🥗 Recommended Foods:**\n{}\n\n\
         **⚠️ Note:** These are over-the-counter medications. It's best to consult a doctor for proper diagnosis and treatment.",
        capitalize_first(guide.symptom),
        medications,
        bullet_list(symptom_foods(guide.symptom)),
    )
}

fn format_condition(condition: &RuleCondition) -> String {
    // Conditions without tabulated supplements show lifestyle measures instead.
    let (heading, items) = if condition.supplements.is_empty() {
        ("**🏃‍♂️ Lifestyle:**", condition.lifestyle)
    } else {
        ("**💊 Supplements:**", condition.supplements)
    };

    format!(
        "**{}** • Management Guide\n\n\
         {}\n{}\n\n\
         **🥗 Recommended Foods:**\n{}\n\n\
         **⚠️ Note:** This is general information only. It's best to consult a doctor for proper diagnosis and treatment.",
        capitalize_first(condition.name),
        heading,
        bullet_list(items),
        bullet_list(condition.diet),
    )
}
