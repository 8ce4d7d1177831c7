/// A prescription drug family recognised by substring match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrescriptionRule {
    /// Lower-case drug names that identify this family.
    pub needles: &'static [&'static str],
    pub label: &'static str,
    /// Condition the family is usually prescribed for.
    pub condition: &'static str,
}

pub static PRESCRIPTION_RULES: &[PrescriptionRule] = &[
    PrescriptionRule {
        needles: &["metformin", "glucophage"],
        label: "Metformin (Diabetes medication)",
        condition: "diabetes",
    },
    PrescriptionRule {
        needles: &["lisinopril", "enalapril", "ramipril"],
        label: "ACE Inhibitor (Blood pressure medication)",
        condition: "hypertension",
    },
    PrescriptionRule {
        needles: &["atorvastatin", "simvastatin", "rosuvastatin"],
        label: "Statin (Cholesterol medication)",
        condition: "high cholesterol",
    },
    PrescriptionRule {
        needles: &["amlodipine", "nifedipine", "diltiazem"],
        label: "Calcium Channel Blocker (Blood pressure medication)",
        condition: "hypertension",
    },
    PrescriptionRule {
        needles: &["hydrochlorothiazide", "furosemide", "spironolactone"],
        label: "Diuretic (Water pill)",
        condition: "hypertension",
    },
    PrescriptionRule {
        needles: &["ferrous", "iron"],
        label: "Iron Supplement",
        condition: "anemia",
    },
    PrescriptionRule {
        needles: &["vitamin d", "vitamin b12"],
        label: "Vitamin Supplement",
        condition: "vitamin deficiency",
    },
];

/// Listed when no rule matched.
pub const UNDETECTED_MEDICATIONS: &str = "Prescribed medications (specific names not detected)";

impl PrescriptionRule {
    /// `content` must already be lower-cased.
    pub fn matches(&self, content: &str) -> bool {
        self.needles.iter().any(|needle| content.contains(needle))
    }
}

pub static MEDICATION_GUIDELINES: &[&str] = &[
    "**Take medications exactly as prescribed** - follow dosage and timing instructions",
    "**Don't skip doses** - set reminders if needed",
    "**Store properly** - keep in cool, dry place away from children",
    "**Check expiration dates** - discard expired medications safely",
    "**Don't share medications** - they're prescribed specifically for you",
];

pub static DIETARY_CONSIDERATIONS: &[&str] = &[
    "**Take with food** unless specifically instructed otherwise",
    "**Avoid grapefruit and grapefruit juice** (interacts with many medications)",
    "**Stay hydrated** with plenty of water (8-10 glasses daily)",
    "**Maintain balanced diet** rich in fruits, vegetables, and whole grains",
    "**Limit alcohol** - can interact with many medications",
    "**Avoid high-fat meals** with certain medications (check with pharmacist)",
];

pub static DRUG_FOOD_INTERACTIONS: &[&str] = &[
    "**Blood thinners**: Limit vitamin K foods (leafy greens)",
    "**Blood pressure meds**: Avoid high-sodium foods",
    "**Diabetes medications**: Monitor carbohydrate intake",
    "**Antibiotics**: Take on empty stomach unless directed otherwise",
    "**Iron supplements**: Take with vitamin C, avoid dairy",
];

pub static MEDICATION_WARNING_SIGNS: &[&str] = &[
    "**Allergic reactions**: Rash, swelling, difficulty breathing",
    "**Side effects**: Nausea, dizziness, unusual fatigue",
    "**Drug interactions**: New symptoms after starting medication",
    "**Overdose symptoms**: Confusion, severe drowsiness, irregular heartbeat",
];

pub static PRESCRIPTION_NEXT_STEPS: &[&str] = &[
    "**Consult your pharmacist** about specific drug-food interactions",
    "**Schedule follow-up** with your healthcare provider",
    "**Keep a medication diary** to track side effects",
    "**Ask about generic alternatives** to reduce costs",
    "**Review medications annually** with your doctor",
];

pub static IMPORTANT_CONTACTS: &[&str] = &[
    "**Your Doctor**: For medical questions and dosage adjustments",
    "**Your Pharmacist**: For drug interactions and side effects",
    "**Emergency**: 911 for severe allergic reactions or overdose",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metformin_maps_to_diabetes() {
        let hits: Vec<_> = PRESCRIPTION_RULES
            .iter()
            .filter(|r| r.matches("take metformin 500mg twice daily"))
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].condition, "diabetes");
    }

    #[test]
    fn several_families_can_match_one_prescription() {
        let content = "amlodipine 5mg, furosemide 20mg, ferrous sulfate";
        let labels: Vec<_> = PRESCRIPTION_RULES
            .iter()
            .filter(|r| r.matches(content))
            .map(|r| r.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Calcium Channel Blocker (Blood pressure medication)",
                "Diuretic (Water pill)",
                "Iron Supplement",
            ]
        );
    }

    #[test]
    fn matching_expects_lowercase_input() {
        assert!(!PRESCRIPTION_RULES[0].matches("METFORMIN"));
    }
}
