/// Full guidance bundle for one detected condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionRecommendation {
    /// Lower-case key matched against detected condition names.
    pub key: &'static str,
    /// Display title ("High Cholesterol").
    pub condition: &'static str,
    pub description: &'static str,
    pub diet: &'static [&'static str],
    pub medications: &'static [&'static str],
    pub lifestyle: &'static [&'static str],
    pub warning_signs: &'static [&'static str],
}

pub static CONDITION_RECOMMENDATIONS: &[ConditionRecommendation] = &[
    ConditionRecommendation {
        key: "diabetes",
        condition: "Diabetes",
        description: "🔬 **Medical Report Analysis: Diabetes Indicators Detected**\n\nBased on your medical report, I can see indicators of diabetes. Here's comprehensive management advice:",
        diet: &[
            "🍎 **Low Glycemic Index Foods**: Choose whole grains, legumes, and non-starchy vegetables",
            "🥗 **High Fiber Diet**: Include 25-30g of fiber daily from vegetables, fruits, and whole grains",
            "🐟 **Lean Proteins**: Fish, chicken, tofu, and legumes (2-3 servings daily)",
            "🥑 **Healthy Fats**: Avocados, nuts, olive oil (limit saturated fats)",
            "🚫 **Avoid**: Refined sugars, white bread, sugary beverages, processed foods",
            "⏰ **Meal Timing**: Eat at regular intervals, don't skip meals",
            "💧 **Hydration**: Drink 8-10 glasses of water daily",
        ],
        medications: &[
            "💊 **Prescription Medications**: Metformin, Sulfonylureas (as prescribed by doctor)",
            "🩸 **Blood Glucose Monitoring**: Check levels regularly as recommended",
            "📊 **HbA1c Testing**: Regular monitoring every 3-6 months",
        ],
        lifestyle: &[
            "🏃‍♂️ **Exercise**: 30 minutes daily, mix cardio and strength training",
            "😴 **Sleep**: 7-9 hours nightly for blood sugar regulation",
            "🧘‍♀️ **Stress Management**: Meditation, yoga, deep breathing",
            "👣 **Foot Care**: Daily inspection, proper footwear, regular checkups",
        ],
        warning_signs: &[
            "🚨 **Very high or very low blood sugar**",
            "🚨 **Ketones in urine**",
            "🚨 **Severe dehydration**",
            "🚨 **Confusion or altered mental status**",
        ],
    },
    ConditionRecommendation {
        key: "hypertension",
        condition: "Hypertension (High Blood Pressure)",
        description: "🔬 **Medical Report Analysis: High Blood Pressure Detected**\n\nYour medical report indicates high blood pressure. Here's comprehensive management advice:",
        diet: &[
            "🧂 **Low Sodium Diet**: Limit salt to 1,500-2,300mg daily",
            "🥬 **DASH Diet**: Rich in fruits, vegetables, and low-fat dairy",
            "🍌 **Potassium-Rich Foods**: Bananas, spinach, sweet potatoes, yogurt",
            "🥜 **Magnesium Sources**: Nuts, seeds, whole grains, dark chocolate",
            "🐟 **Omega-3 Fatty Acids**: Fatty fish 2-3 times per week",
            "🚫 **Avoid**: Processed foods, canned soups, deli meats, salty snacks",
            "☕ **Limit**: Caffeine and alcohol consumption",
        ],
        medications: &[
            "💊 **Prescription Medications**: ACE inhibitors, ARBs, Calcium channel blockers (as prescribed)",
            "💊 **Diuretics**: For fluid retention management",
            "💊 **Beta-blockers**: For heart rate control",
        ],
        lifestyle: &[
            "🏃‍♂️ **Exercise**: 150 minutes moderate exercise weekly",
            "🧘‍♀️ **Stress Reduction**: Meditation, deep breathing, yoga",
            "🚭 **Quit Smoking**: Essential for blood pressure control",
            "⚖️ **Weight Management**: Maintain healthy BMI",
        ],
        warning_signs: &[
            "🚨 **Blood pressure above 180/120**",
            "🚨 **Severe headache with high BP**",
            "🚨 **Chest pain or shortness of breath**",
            "🚨 **Vision changes or confusion**",
        ],
    },
    ConditionRecommendation {
        key: "high cholesterol",
        condition: "High Cholesterol",
        description: "🔬 **Medical Report Analysis: Elevated Cholesterol Detected**\n\nYour cholesterol levels are elevated. Here's comprehensive management advice:",
        diet: &[
            "🌾 **Soluble Fiber**: Oats, barley, beans, apples (10-25g daily)",
            "🥜 **Plant Sterols**: Fortified margarines, nuts, seeds",
            "🐟 **Omega-3 Rich Fish**: Salmon, mackerel, sardines (2-3 servings/week)",
            "🥑 **Monounsaturated Fats**: Olive oil, avocados, nuts",
            "🫐 **Antioxidant-Rich Foods**: Berries, dark chocolate, green tea",
            "🚫 **Avoid**: Trans fats, saturated fats, fried foods, processed meats",
            "🥛 **Choose**: Low-fat dairy products over full-fat versions",
        ],
        medications: &[
            "💊 **Statins**: Atorvastatin, Simvastatin (as prescribed)",
            "💊 **Other Medications**: Ezetimibe, PCSK9 inhibitors if needed",
            "📊 **Regular Monitoring**: Lipid panel every 3-6 months",
        ],
        lifestyle: &[
            "🏃‍♂️ **Cardio Exercise**: 150 minutes weekly",
            "💪 **Strength Training**: 2-3 sessions weekly",
            "🚭 **Quit Smoking**: Improves cholesterol profile",
            "⚖️ **Weight Management**: Target healthy BMI",
        ],
        warning_signs: &[
            "🚨 **Chest pain or angina**",
            "🚨 **Shortness of breath**",
            "🚨 **Pain in arms, neck, jaw**",
            "🚨 **Dizziness or fainting**",
        ],
    },
    ConditionRecommendation {
        key: "obesity",
        condition: "Obesity/Weight Management",
        description: "🔬 **Medical Report Analysis: Weight Management Concerns Detected**\n\nYour medical report suggests weight management concerns. Here's comprehensive advice:",
        diet: &[
            "🥗 **High Protein Diet**: Lean meats, fish, eggs, legumes (1.2-1.6g per kg body weight)",
            "🥬 **High Volume, Low Calorie**: Vegetables, fruits, broth-based soups",
            "🌾 **Complex Carbohydrates**: Whole grains, quinoa, brown rice (moderate portions)",
            "🥜 **Healthy Fats**: Nuts, seeds, olive oil (in moderation)",
            "🚫 **Avoid**: Sugary drinks, processed foods, large portions",
            "⏰ **Intermittent Fasting**: Consider 16:8 or 14:10 fasting windows",
            "💧 **Hydration**: Drink water before meals to reduce appetite",
        ],
        medications: &[
            "💊 **Prescription Weight Loss**: Orlistat, Phentermine (if prescribed)",
            "💊 **GLP-1 Agonists**: Semaglutide, Liraglutide (if eligible)",
            "📊 **Regular Monitoring**: Weight, BMI, waist circumference",
        ],
        lifestyle: &[
            "🏃‍♂️ **Cardio Exercise**: 150-300 minutes weekly",
            "💪 **Strength Training**: 2-3 sessions weekly",
            "🧘‍♀️ **Behavioral Therapy**: Consider weight loss programs",
            "😴 **Sleep**: 7-9 hours for metabolism regulation",
        ],
        warning_signs: &[
            "🚨 **Severe shortness of breath**",
            "🚨 **Chest pain during activity**",
            "🚨 **Joint pain limiting mobility**",
            "🚨 **Sleep apnea symptoms**",
        ],
    },
    ConditionRecommendation {
        key: "anemia",
        condition: "Anemia (Iron Deficiency)",
        description: "🔬 **Medical Report Analysis: Iron Deficiency Anemia Detected**\n\nYour blood work shows iron deficiency. Here's comprehensive management advice:",
        diet: &[
            "🥩 **Heme Iron Sources**: Red meat, poultry, fish (2-3 servings weekly)",
            "🥬 **Non-Heme Iron**: Spinach, lentils, beans, fortified cereals",
            "🍊 **Vitamin C**: Citrus fruits, bell peppers (enhances iron absorption)",
            "🥜 **Plant-Based Iron**: Pumpkin seeds, quinoa, dark chocolate",
            "🚫 **Avoid**: Coffee/tea with meals (inhibits iron absorption)",
            "💊 **Consider**: Iron supplements as recommended by your doctor",
            "🥛 **Timing**: Take iron supplements on empty stomach for better absorption",
        ],
        medications: &[
            "💊 **Iron Supplements**: Ferrous sulfate 325mg 1-3 times daily",
            "💊 **Vitamin B12**: 1000mcg daily (if B12 deficiency)",
            "💊 **Folic Acid**: 400-800mcg daily",
            "📊 **Regular Monitoring**: Complete blood count every 3 months",
        ],
        lifestyle: &[
            "😴 **Adequate Rest**: 7-9 hours sleep nightly",
            "🏃‍♂️ **Moderate Exercise**: Avoid overexertion",
            "🍳 **Cooking Methods**: Use cast iron pans",
            "⏰ **Meal Timing**: Eat iron-rich foods with Vitamin C",
        ],
        warning_signs: &[
            "🚨 **Severe fatigue affecting daily activities**",
            "🚨 **Chest pain or irregular heartbeat**",
            "🚨 **Severe shortness of breath**",
            "🚨 **Fainting or severe dizziness**",
        ],
    },
    ConditionRecommendation {
        key: "vitamin deficiency",
        condition: "Vitamin Deficiency",
        description: "🔬 **Medical Report Analysis: Vitamin Deficiencies Detected**\n\nYour medical report indicates vitamin deficiencies. Here's comprehensive management advice:",
        diet: &[
            "🌞 **Vitamin D**: Fatty fish, egg yolks, fortified dairy, sunlight exposure",
            "🥬 **Vitamin B12**: Meat, fish, dairy, fortified cereals",
            "🍊 **Vitamin C**: Citrus fruits, bell peppers, strawberries, broccoli",
            "🥜 **Vitamin E**: Nuts, seeds, vegetable oils, leafy greens",
            "🥛 **Calcium**: Dairy products, fortified plant milks, leafy greens",
            "🚫 **Avoid**: Overcooking vegetables (destroys vitamins)",
            "💊 **Consider**: Multivitamin supplements as needed",
        ],
        medications: &[
            "💊 **Vitamin D**: 1000-4000 IU daily (as prescribed)",
            "💊 **Vitamin B12**: 1000mcg daily (if deficient)",
            "💊 **Multivitamin**: Complete daily multivitamin",
            "📊 **Regular Monitoring**: Vitamin levels every 6 months",
        ],
        lifestyle: &[
            "☀️ **Sunlight Exposure**: 10-30 minutes daily (Vitamin D)",
            "🏃‍♂️ **Regular Exercise**: Improves vitamin absorption",
            "😴 **Adequate Sleep**: 7-9 hours for vitamin metabolism",
            "🚭 **Avoid Smoking**: Reduces vitamin absorption",
        ],
        warning_signs: &[
            "🚨 **Severe fatigue or weakness**",
            "🚨 **Bone pain or fractures**",
            "🚨 **Vision problems**",
            "🚨 **Neurological symptoms**",
        ],
    },
];

/// Block appended to a report when nothing abnormal was found.
pub const GENERAL_HEALTH_BLOCK: &str = "**🏥 General Health Recommendations:**

**🥗 Balanced Diet:**
• Eat a variety of fruits and vegetables (5-9 servings daily)
• Choose whole grains over refined grains
• Include lean proteins and healthy fats
• Stay hydrated with 8-10 glasses of water daily

**💊 General Supplements:**
• Consider a daily multivitamin
• Omega-3 supplements for heart health
• Vitamin D if limited sun exposure

**🏃‍♂️ Lifestyle:**
• Exercise 150 minutes weekly
• Get 7-9 hours of sleep nightly
• Manage stress through meditation or yoga
• Regular health checkups";

pub fn condition_recommendation(name: &str) -> Option<&'static ConditionRecommendation> {
    let lower = name.trim().to_lowercase();
    CONDITION_RECOMMENDATIONS.iter().find(|c| c.key == lower)
}
