use super::reference_ranges::{LabTest, ValueStatus};

const GLUCOSE_HIGH: &[&str] = &[
    "🍎 **Low Glycemic Index Foods**: Choose whole grains, legumes, and non-starchy vegetables",
    "🥗 **High Fiber Diet**: Include 25-30g of fiber daily from vegetables, fruits, and whole grains",
    "🐟 **Lean Proteins**: Fish, chicken, tofu, and legumes (2-3 servings daily)",
    "🚫 **Avoid**: Refined sugars, white bread, sugary beverages, processed foods",
    "⏰ **Meal Timing**: Eat at regular intervals, don't skip meals",
    "💧 **Hydration**: Drink 8-10 glasses of water daily",
];

const GLUCOSE_LOW: &[&str] = &[
    "🍯 **Complex Carbohydrates**: Whole grains, sweet potatoes, quinoa",
    "🥛 **Protein-Rich Foods**: Greek yogurt, eggs, lean meats",
    "🥜 **Healthy Fats**: Nuts, seeds, avocado",
    "⏰ **Frequent Small Meals**: Eat every 2-3 hours",
    "🚫 **Avoid**: Skipping meals, excessive alcohol",
];

const CHOLESTEROL_HIGH: &[&str] = &[
    "🌾 **Soluble Fiber**: Oats, barley, beans, apples (10-25g daily)",
    "🥜 **Plant Sterols**: Fortified margarines, nuts, seeds",
    "🐟 **Omega-3 Rich Fish**: Salmon, mackerel, sardines (2-3 servings/week)",
    "🥑 **Monounsaturated Fats**: Olive oil, avocados, nuts",
    "🚫 **Avoid**: Trans fats, saturated fats, fried foods, processed meats",
    "🥛 **Choose**: Low-fat dairy products over full-fat versions",
];

const HDL_LOW: &[&str] = &[
    "🐟 **Omega-3 Fatty Acids**: Fatty fish, walnuts, flaxseeds",
    "🥜 **Monounsaturated Fats**: Olive oil, avocados, nuts",
    "🏃‍♂️ **Exercise**: Regular cardio exercise to raise HDL",
    "🚫 **Avoid**: Trans fats, excessive alcohol",
    "🥛 **Choose**: Healthy fats over processed foods",
];

const LDL_HIGH: &[&str] = &[
    "🌾 **Soluble Fiber**: Oats, barley, beans, apples (10-25g daily)",
    "🥜 **Plant Sterols**: Fortified margarines, nuts, seeds",
    "🐟 **Omega-3 Rich Fish**: Salmon, mackerel, sardines (2-3 servings/week)",
    "🚫 **Avoid**: Trans fats, saturated fats, fried foods, processed meats",
    "🥛 **Choose**: Low-fat dairy products over full-fat versions",
];

const TRIGLYCERIDES_HIGH: &[&str] = &[
    "🚫 **Limit Simple Sugars**: Avoid sugary drinks, candies, desserts",
    "🌾 **Choose Complex Carbs**: Whole grains, legumes, vegetables",
    "🐟 **Omega-3 Fatty Acids**: Fatty fish, walnuts, flaxseeds",
    "🏃‍♂️ **Exercise**: Regular cardio exercise to lower triglycerides",
    "🚫 **Avoid**: Alcohol, refined carbohydrates",
];

const BLOOD_PRESSURE_HIGH: &[&str] = &[
    "🧂 **Low Sodium Diet**: Limit salt to 1,500-2,300mg daily",
    "🥬 **DASH Diet**: Rich in fruits, vegetables, and low-fat dairy",
    "🍌 **Potassium-Rich Foods**: Bananas, spinach, sweet potatoes, yogurt",
    "🥜 **Magnesium Sources**: Nuts, seeds, whole grains, dark chocolate",
    "🚫 **Avoid**: Processed foods, canned soups, deli meats, salty snacks",
    "☕ **Limit**: Caffeine and alcohol consumption",
];

const IRON_LOW: &[&str] = &[
    "🥩 **Heme Iron Sources**: Red meat, poultry, fish (2-3 servings weekly)",
    "🥬 **Non-Heme Iron**: Spinach, lentils, beans, fortified cereals",
    "🍊 **Vitamin C**: Citrus fruits, bell peppers (enhances iron absorption)",
    "🥜 **Plant-Based Iron**: Pumpkin seeds, quinoa, dark chocolate",
    "🚫 **Avoid**: Coffee/tea with meals (inhibits iron absorption)",
    "💊 **Consider**: Iron supplements as recommended by your doctor",
];

const VITAMIN_D_LOW: &[&str] = &[
    "🌞 **Vitamin D Foods**: Fatty fish, egg yolks, fortified dairy",
    "☀️ **Sunlight Exposure**: 10-30 minutes daily (with sunscreen)",
    "🥛 **Fortified Foods**: Milk, orange juice, cereals",
    "💊 **Consider**: Vitamin D supplements as recommended",
    "🏃‍♂️ **Exercise**: Regular outdoor activity",
];

const VITAMIN_B12_LOW: &[&str] = &[
    "🥩 **Animal Sources**: Meat, fish, dairy, eggs",
    "🥛 **Fortified Foods**: Plant milks, cereals, nutritional yeast",
    "💊 **Consider**: B12 supplements or injections",
    "🏥 **Medical Evaluation**: Check for absorption issues",
];

/// Suggested when a (test, status) pair has no specific entry.
pub static BALANCED_DIET: &[&str] = &[
    "🥗 **Balanced Diet**: Eat a variety of fruits, vegetables, whole grains, and lean proteins",
    "💧 **Hydration**: Drink 8-10 glasses of water daily",
    "🏃‍♂️ **Exercise**: Regular physical activity",
    "😴 **Sleep**: 7-9 hours nightly",
];

/// Specific diet for an abnormal value, if one is tabulated.
pub fn specific_diet(test: LabTest, status: ValueStatus) -> Option<&'static [&'static str]> {
    let diet = match (test, status) {
        (LabTest::Glucose, ValueStatus::High) => GLUCOSE_HIGH,
        (LabTest::Glucose, ValueStatus::Low) => GLUCOSE_LOW,
        (LabTest::Hba1c, ValueStatus::High) => GLUCOSE_HIGH,
        (LabTest::Cholesterol, ValueStatus::High) => CHOLESTEROL_HIGH,
        (LabTest::Hdl, ValueStatus::Low) => HDL_LOW,
        (LabTest::Ldl, ValueStatus::High) => LDL_HIGH,
        (LabTest::Triglycerides, ValueStatus::High) => TRIGLYCERIDES_HIGH,
        (LabTest::Systolic, ValueStatus::High) | (LabTest::Diastolic, ValueStatus::High) => {
            BLOOD_PRESSURE_HIGH
        }
        (LabTest::Hemoglobin, ValueStatus::Low) | (LabTest::Ferritin, ValueStatus::Low) => IRON_LOW,
        (LabTest::VitaminD, ValueStatus::Low) => VITAMIN_D_LOW,
        (LabTest::VitaminB12, ValueStatus::Low) => VITAMIN_B12_LOW,
        _ => return None,
    };
    Some(diet)
}

/// Diet for an abnormal value, falling back to the balanced-diet list.
pub fn value_specific_diet(test: LabTest, status: ValueStatus) -> &'static [&'static str] {
    specific_diet(test, status).unwrap_or(BALANCED_DIET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cholesterol_high_has_specific_diet() {
        let diet = value_specific_diet(LabTest::Cholesterol, ValueStatus::High);
        assert!(diet[0].contains("Soluble Fiber"));
        assert_ne!(diet, BALANCED_DIET);
    }

    #[test]
    fn blood_pressure_components_share_a_diet() {
        assert_eq!(
            value_specific_diet(LabTest::Systolic, ValueStatus::High),
            value_specific_diet(LabTest::Diastolic, ValueStatus::High)
        );
    }

    #[test]
    fn untabulated_pair_falls_back_to_balanced_diet() {
        assert!(specific_diet(LabTest::Cholesterol, ValueStatus::Low).is_none());
        assert_eq!(
            value_specific_diet(LabTest::Platelets, ValueStatus::High),
            BALANCED_DIET
        );
    }

    #[test]
    fn glucose_low_differs_from_high() {
        assert_ne!(
            value_specific_diet(LabTest::Glucose, ValueStatus::Low),
            value_specific_diet(LabTest::Glucose, ValueStatus::High)
        );
    }
}
