/// An over-the-counter medication suggestion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OtcMedication {
    pub name: &'static str,
    pub dosage: &'static str,
    pub timing: &'static str,
    pub max_daily: Option<&'static str>,
    pub brand_names: &'static [&'static str],
    pub warnings: &'static str,
}

/// OTC medications and foods for one symptom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymptomGuide {
    pub symptom: &'static str,
    pub medications: &'static [OtcMedication],
    pub foods: &'static [&'static str],
}

/// Symptom guides in match order.
pub static OTC_GUIDES: &[SymptomGuide] = &[
    SymptomGuide {
        symptom: "fever",
        medications: &[
            OtcMedication {
                name: "Paracetamol (Acetaminophen)",
                dosage: "500-1000mg every 4-6 hours",
                timing: "Take with or without food, every 4-6 hours as needed",
                max_daily: Some("4g/day"),
                brand_names: &["Tylenol", "Panadol"],
                warnings: "Do not exceed recommended dose",
            },
            OtcMedication {
                name: "Ibuprofen",
                dosage: "200-400mg every 4-6 hours",
                timing: "Take with food or milk, every 4-6 hours as needed",
                max_daily: Some("1200mg/day"),
                brand_names: &["Advil", "Motrin"],
                warnings: "Take with food, avoid if stomach issues",
            },
        ],
        foods: &[
            "Clear broths and soups (chicken soup, vegetable broth)",
            "Hydrating foods: watermelon, cucumber, oranges",
            "Light foods: toast, rice, bananas, applesauce",
            "Herbal teas: chamomile, peppermint, ginger tea",
            "Avoid: heavy, oily, or spicy foods",
        ],
    },
    SymptomGuide {
        symptom: "cold",
        medications: &[
            OtcMedication {
                name: "Pseudoephedrine",
                dosage: "30-60mg every 4-6 hours",
                timing: "Take in morning and afternoon, avoid in evening",
                max_daily: Some("240mg/day"),
                brand_names: &["Sudafed"],
                warnings: "May cause insomnia, avoid in evening",
            },
            OtcMedication {
                name: "Dextromethorphan",
                dosage: "15-30mg every 4-6 hours",
                timing: "Take every 4-6 hours as needed for cough",
                max_daily: Some("120mg/day"),
                brand_names: &["Robitussin DM"],
                warnings: "Do not use with MAO inhibitors",
            },
        ],
        foods: &[
            "Warm liquids: chicken soup, herbal teas, warm water with honey",
            "Vitamin C foods: citrus fruits, bell peppers, strawberries",
            "Zinc-rich foods: nuts, seeds, whole grains, legumes",
            "Garlic and onions (natural antimicrobial properties)",
            "Avoid: dairy products (may increase mucus production)",
        ],
    },
    SymptomGuide {
        symptom: "headache",
        medications: &[
            OtcMedication {
                name: "Paracetamol",
                dosage: "500-1000mg every 4-6 hours",
                timing: "Take as soon as headache starts, every 4-6 hours",
                max_daily: Some("4g/day"),
                brand_names: &["Tylenol"],
                warnings: "Safe for most people",
            },
            OtcMedication {
                name: "Ibuprofen",
                dosage: "400-600mg every 4-6 hours",
                timing: "Take with food, every 4-6 hours as needed",
                max_daily: Some("1200mg/day"),
                brand_names: &["Advil"],
                warnings: "Take with food",
            },
        ],
        foods: &[
            "Hydrating foods: water, coconut water, herbal teas",
            "Magnesium foods: nuts, seeds, dark chocolate, leafy greens",
            "Caffeine (in moderation): coffee, tea (may help some headaches)",
            "Ginger: ginger tea or fresh ginger (anti-inflammatory)",
            "Avoid: processed foods, excessive caffeine, alcohol",
        ],
    },
    SymptomGuide {
        symptom: "stomach",
        medications: &[
            OtcMedication {
                name: "Antacids",
                dosage: "As directed on package",
                timing: "Take 1-2 hours after meals or when symptoms occur",
                max_daily: None,
                brand_names: &["Tums", "Rolaids"],
                warnings: "May interact with other medications",
            },
            OtcMedication {
                name: "Loperamide",
                dosage: "2mg after each loose stool",
                timing: "Take after each loose bowel movement",
                max_daily: Some("8mg/day"),
                brand_names: &["Imodium"],
                warnings: "Stop if symptoms persist beyond 48 hours",
            },
        ],
        foods: &[
            "BRAT diet: Bananas, Rice, Applesauce, Toast",
            "Ginger: ginger tea, fresh ginger (nausea relief)",
            "Probiotic foods: yogurt, kefir, sauerkraut",
            "Bland foods: boiled potatoes, steamed vegetables",
            "Avoid: spicy, fatty, or acidic foods, dairy if intolerant",
        ],
    },
];

/// Foods suggested for a symptom with no specific entry.
pub static DEFAULT_SYMPTOM_FOODS: &[&str] = &[
    "Stay hydrated with water and clear broths",
    "Eat light, easily digestible foods",
    "Avoid heavy, oily, or spicy foods",
];

/// Secondary keywords that map onto a symptom guide.
pub static SYMPTOM_ALIASES: &[(&[&str], &str)] = &[
    (&["fever", "temperature"], "fever"),
    (&["cold", "cough"], "cold"),
    (&["headache", "head pain"], "headache"),
    (&["stomach", "nausea"], "stomach"),
];

pub fn otc_guide(symptom: &str) -> Option<&'static SymptomGuide> {
    OTC_GUIDES.iter().find(|g| g.symptom == symptom)
}

/// Foods for a symptom, falling back to the generic list.
pub fn symptom_foods(symptom: &str) -> &'static [&'static str] {
    otc_guide(symptom)
        .map(|g| g.foods)
        .unwrap_or(DEFAULT_SYMPTOM_FOODS)
}

/// A condition entry used by the rule-based advice responder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleCondition {
    pub name: &'static str,
    pub symptoms: &'static [&'static str],
    pub diet: &'static [&'static str],
    pub supplements: &'static [&'static str],
    pub lifestyle: &'static [&'static str],
    pub home_remedies: &'static [&'static str],
    pub warning_signs: &'static [&'static str],
}

pub static RULE_CONDITIONS: &[RuleCondition] = &[
    RuleCondition {
        name: "anemia",
        symptoms: &["fatigue", "weakness", "pale skin", "shortness of breath", "dizziness"],
        diet: &[
            "Iron-rich foods: red meat, spinach, lentils, beans, fortified cereals",
            "Vitamin C foods: citrus fruits, tomatoes, bell peppers, strawberries",
            "B12 foods: fish, meat, eggs, dairy, fortified plant milk",
            "Folic acid foods: leafy greens, beans, nuts, fortified grains",
            "Avoid: coffee/tea with meals (reduces iron absorption)",
        ],
        supplements: &[
            "Iron supplements: Ferrous sulfate 325mg 1-3 times daily (take on empty stomach)",
            "Vitamin B12: 1000mcg daily (if B12 deficiency)",
            "Folic acid: 400-800mcg daily",
        ],
        lifestyle: &[],
        home_remedies: &[
            "Cook in cast iron pans",
            "Eat iron-rich foods with Vitamin C",
            "Get adequate rest and sleep",
        ],
        warning_signs: &[
            "Severe fatigue affecting daily activities",
            "Chest pain or irregular heartbeat",
            "Severe shortness of breath",
            "Fainting or severe dizziness",
        ],
    },
    RuleCondition {
        name: "diabetes",
        symptoms: &[
            "frequent urination",
            "excessive thirst",
            "increased hunger",
            "weight loss",
            "fatigue",
        ],
        diet: &[
            "Low glycemic index foods: whole grains, legumes, non-starchy vegetables",
            "Complex carbohydrates: brown rice, quinoa, whole wheat bread, oats",
            "Lean proteins: fish, chicken, turkey, beans, lentils, tofu",
            "Healthy fats: nuts, olive oil, avocado, fatty fish",
            "Fiber-rich foods: vegetables, fruits, whole grains, beans",
            "Avoid: sugary foods, refined carbs, processed foods, sweetened beverages",
        ],
        supplements: &[],
        lifestyle: &[
            "Regular exercise (30 minutes daily)",
            "Blood sugar monitoring",
            "Stress management techniques",
            "Adequate sleep (7-9 hours)",
            "Foot care and regular checkups",
        ],
        home_remedies: &[],
        warning_signs: &[
            "Very high or very low blood sugar",
            "Ketones in urine",
            "Severe dehydration",
            "Confusion or altered mental status",
        ],
    },
    RuleCondition {
        name: "hypertension",
        symptoms: &[
            "headaches",
            "shortness of breath",
            "nosebleeds",
            "chest pain",
            "dizziness",
        ],
        diet: &[
            "DASH diet: fruits, vegetables, whole grains, lean proteins",
            "Low sodium: less than 2,300mg daily, avoid processed foods",
            "Potassium-rich foods: bananas, potatoes, spinach, tomatoes, avocados",
            "Calcium-rich foods: low-fat dairy, leafy greens, fortified foods",
            "Magnesium foods: nuts, seeds, whole grains, dark chocolate",
            "Avoid: high-sodium foods, processed foods, alcohol, excessive caffeine",
        ],
        supplements: &[],
        lifestyle: &[
            "Regular exercise (150 minutes/week)",
            "Stress reduction techniques",
            "Limit alcohol and caffeine",
            "Quit smoking",
            "Maintain healthy weight",
        ],
        home_remedies: &[],
        warning_signs: &[
            "Blood pressure above 180/120",
            "Severe headache with high BP",
            "Chest pain or shortness of breath",
            "Vision changes or confusion",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fever_guide_lists_paracetamol_then_ibuprofen() {
        let guide = otc_guide("fever").unwrap();
        assert_eq!(guide.medications.len(), 2);
        assert_eq!(guide.medications[0].name, "Paracetamol (Acetaminophen)");
        assert_eq!(guide.medications[0].brand_names, &["Tylenol", "Panadol"]);
        assert_eq!(guide.medications[1].name, "Ibuprofen");
    }

    #[test]
    fn unknown_symptom_uses_default_foods() {
        assert!(otc_guide("earache").is_none());
        assert_eq!(symptom_foods("earache"), DEFAULT_SYMPTOM_FOODS);
    }

    #[test]
    fn every_alias_target_has_a_guide() {
        for (_, target) in SYMPTOM_ALIASES {
            assert!(otc_guide(target).is_some(), "missing guide for {target}");
        }
    }

    #[test]
    fn every_rule_condition_has_something_to_prescribe() {
        for condition in RULE_CONDITIONS {
            assert!(
                !condition.supplements.is_empty() || !condition.lifestyle.is_empty(),
                "{} has neither supplements nor lifestyle",
                condition.name
            );
            assert!(!condition.diet.is_empty());
        }
    }
}
