use serde::{Deserialize, Serialize};

/// Lab tests recognised by report analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabTest {
    Glucose,
    Hba1c,
    Cholesterol,
    Hdl,
    Ldl,
    Triglycerides,
    Systolic,
    Diastolic,
    Hemoglobin,
    Ferritin,
    VitaminD,
    VitaminB12,
    Creatinine,
    Alt,
    Ast,
    Tsh,
    Bun,
    Egfr,
    Bilirubin,
    T3,
    T4,
    Hematocrit,
    Wbc,
    Rbc,
    Platelets,
    Folate,
    Iron,
    Calcium,
    Magnesium,
    Temperature,
    HeartRate,
    OxygenSaturation,
}

impl LabTest {
    /// Every test, in the order reports list them.
    pub const ALL: [LabTest; 32] = [
        LabTest::Glucose,
        LabTest::Hba1c,
        LabTest::Cholesterol,
        LabTest::Hdl,
        LabTest::Ldl,
        LabTest::Triglycerides,
        LabTest::Systolic,
        LabTest::Diastolic,
        LabTest::Hemoglobin,
        LabTest::Ferritin,
        LabTest::VitaminD,
        LabTest::VitaminB12,
        LabTest::Creatinine,
        LabTest::Alt,
        LabTest::Ast,
        LabTest::Tsh,
        LabTest::Bun,
        LabTest::Egfr,
        LabTest::Bilirubin,
        LabTest::T3,
        LabTest::T4,
        LabTest::Hematocrit,
        LabTest::Wbc,
        LabTest::Rbc,
        LabTest::Platelets,
        LabTest::Folate,
        LabTest::Iron,
        LabTest::Calcium,
        LabTest::Magnesium,
        LabTest::Temperature,
        LabTest::HeartRate,
        LabTest::OxygenSaturation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LabTest::Glucose => "glucose",
            LabTest::Hba1c => "hba1c",
            LabTest::Cholesterol => "cholesterol",
            LabTest::Hdl => "hdl",
            LabTest::Ldl => "ldl",
            LabTest::Triglycerides => "triglycerides",
            LabTest::Systolic => "systolic",
            LabTest::Diastolic => "diastolic",
            LabTest::Hemoglobin => "hemoglobin",
            LabTest::Ferritin => "ferritin",
            LabTest::VitaminD => "vitamin d",
            LabTest::VitaminB12 => "vitamin b12",
            LabTest::Creatinine => "creatinine",
            LabTest::Alt => "alt",
            LabTest::Ast => "ast",
            LabTest::Tsh => "tsh",
            LabTest::Bun => "bun",
            LabTest::Egfr => "egfr",
            LabTest::Bilirubin => "bilirubin",
            LabTest::T3 => "t3",
            LabTest::T4 => "t4",
            LabTest::Hematocrit => "hematocrit",
            LabTest::Wbc => "wbc",
            LabTest::Rbc => "rbc",
            LabTest::Platelets => "platelets",
            LabTest::Folate => "folate",
            LabTest::Iron => "iron",
            LabTest::Calcium => "calcium",
            LabTest::Magnesium => "magnesium",
            LabTest::Temperature => "temperature",
            LabTest::HeartRate => "heart rate",
            LabTest::OxygenSaturation => "oxygen saturation",
        }
    }

    /// Lower-case labels searched for in report text, most specific first.
    /// Matching is plain substring search, so short labels ("hb", "alt")
    /// also fire inside longer words when followed by a number.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            LabTest::Glucose => &["glucose", "blood sugar", "fasting glucose", "random glucose"],
            LabTest::Hba1c => &["hba1c", "a1c", "glycated hemoglobin"],
            LabTest::Cholesterol => &["total cholesterol", "cholesterol total"],
            LabTest::Hdl => &["hdl", "high density lipoprotein", "good cholesterol"],
            LabTest::Ldl => &["ldl", "low density lipoprotein", "bad cholesterol"],
            LabTest::Triglycerides => &["triglycerides", "trig"],
            LabTest::Systolic => &["systolic", "systolic bp", "systolic blood pressure"],
            LabTest::Diastolic => &["diastolic", "diastolic bp", "diastolic blood pressure"],
            LabTest::Hemoglobin => &["hemoglobin", "hgb", "hb"],
            LabTest::Ferritin => &["ferritin", "serum ferritin"],
            LabTest::VitaminD => &["vitamin d", "25-oh vitamin d", "25-hydroxyvitamin d"],
            LabTest::VitaminB12 => &["vitamin b12", "b12", "cobalamin"],
            LabTest::Creatinine => &["creatinine", "serum creatinine"],
            LabTest::Alt => &["alt", "alanine aminotransferase", "sgpt"],
            LabTest::Ast => &["ast", "aspartate aminotransferase", "sgot"],
            LabTest::Tsh => &["tsh", "thyroid stimulating hormone"],
            LabTest::Bun => &["bun", "blood urea nitrogen", "urea nitrogen"],
            LabTest::Egfr => &["egfr", "gfr", "estimated glomerular filtration rate"],
            LabTest::Bilirubin => &["bilirubin", "total bilirubin"],
            LabTest::T3 => &["t3", "triiodothyronine"],
            LabTest::T4 => &["t4", "thyroxine"],
            LabTest::Hematocrit => &["hematocrit", "hct"],
            LabTest::Wbc => &["wbc", "white blood cells", "leukocytes"],
            LabTest::Rbc => &["rbc", "red blood cells", "erythrocytes"],
            LabTest::Platelets => &["platelets", "thrombocytes"],
            LabTest::Folate => &["folate", "folic acid", "vitamin b9"],
            LabTest::Iron => &["iron", "serum iron"],
            LabTest::Calcium => &["calcium", "serum calcium"],
            LabTest::Magnesium => &["magnesium", "serum magnesium"],
            LabTest::Temperature => &["temperature", "temp", "fever"],
            LabTest::HeartRate => &["heart rate", "pulse", "hr", "bpm"],
            LabTest::OxygenSaturation => &["oxygen saturation", "o2 sat", "spo2"],
        }
    }

    /// The reference range for this test. `REFERENCE_RANGES` is laid out in
    /// declaration order, so the discriminant is the index.
    pub fn reference_range(&self) -> &'static ReferenceRange {
        &REFERENCE_RANGES[*self as usize]
    }
}

impl std::fmt::Display for LabTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a value falls relative to its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueStatus {
    Low,
    Normal,
    High,
}

impl ValueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueStatus::Low => "low",
            ValueStatus::Normal => "normal",
            ValueStatus::High => "high",
        }
    }
}

impl std::fmt::Display for ValueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normal bounds for one lab test (inclusive on both ends).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceRange {
    pub test: LabTest,
    pub low: f64,
    pub high: f64,
    pub unit: &'static str,
    /// Condition suggested by an out-of-range value, in either direction.
    pub condition: &'static str,
}

impl ReferenceRange {
    pub fn classify(&self, value: f64) -> ValueStatus {
        if value < self.low {
            ValueStatus::Low
        } else if value > self.high {
            ValueStatus::High
        } else {
            ValueStatus::Normal
        }
    }
}

const fn range(
    test: LabTest,
    low: f64,
    high: f64,
    unit: &'static str,
    condition: &'static str,
) -> ReferenceRange {
    ReferenceRange {
        test,
        low,
        high,
        unit,
        condition,
    }
}

pub static REFERENCE_RANGES: [ReferenceRange; 32] = [
    range(LabTest::Glucose, 70.0, 100.0, "mg/dL", "diabetes"),
    range(LabTest::Hba1c, 4.0, 5.7, "%", "diabetes"),
    range(LabTest::Cholesterol, 0.0, 200.0, "mg/dL", "high cholesterol"),
    range(LabTest::Hdl, 40.0, 60.0, "mg/dL", "low hdl"),
    range(LabTest::Ldl, 0.0, 100.0, "mg/dL", "high ldl"),
    range(LabTest::Triglycerides, 0.0, 150.0, "mg/dL", "high triglycerides"),
    range(LabTest::Systolic, 90.0, 120.0, "mmHg", "hypertension"),
    range(LabTest::Diastolic, 60.0, 80.0, "mmHg", "hypertension"),
    range(LabTest::Hemoglobin, 12.0, 16.0, "g/dL", "anemia"),
    range(LabTest::Ferritin, 20.0, 300.0, "ng/mL", "iron deficiency"),
    range(LabTest::VitaminD, 30.0, 100.0, "ng/mL", "vitamin d deficiency"),
    range(LabTest::VitaminB12, 200.0, 900.0, "pg/mL", "vitamin b12 deficiency"),
    range(LabTest::Creatinine, 0.6, 1.2, "mg/dL", "kidney function"),
    range(LabTest::Alt, 7.0, 55.0, "U/L", "liver function"),
    range(LabTest::Ast, 8.0, 48.0, "U/L", "liver function"),
    range(LabTest::Tsh, 0.4, 4.0, "mIU/L", "thyroid function"),
    range(LabTest::Bun, 7.0, 20.0, "mg/dL", "kidney function"),
    range(LabTest::Egfr, 90.0, 120.0, "mL/min/1.73m²", "kidney function"),
    range(LabTest::Bilirubin, 0.3, 1.2, "mg/dL", "liver function"),
    range(LabTest::T3, 80.0, 200.0, "ng/dL", "thyroid function"),
    range(LabTest::T4, 0.8, 1.8, "ng/dL", "thyroid function"),
    range(LabTest::Hematocrit, 36.0, 46.0, "%", "anemia"),
    range(LabTest::Wbc, 4.5, 11.0, "K/µL", "infection"),
    range(LabTest::Rbc, 4.5, 5.9, "M/µL", "anemia"),
    range(LabTest::Platelets, 150.0, 450.0, "K/µL", "bleeding disorder"),
    range(LabTest::Folate, 2.0, 20.0, "ng/mL", "folate deficiency"),
    range(LabTest::Iron, 60.0, 170.0, "µg/dL", "iron deficiency"),
    range(LabTest::Calcium, 8.5, 10.5, "mg/dL", "calcium imbalance"),
    range(LabTest::Magnesium, 1.7, 2.2, "mg/dL", "magnesium deficiency"),
    range(LabTest::Temperature, 97.0, 99.0, "°F", "fever"),
    range(LabTest::HeartRate, 60.0, 100.0, "bpm", "heart rate abnormality"),
    range(LabTest::OxygenSaturation, 95.0, 100.0, "%", "oxygen deficiency"),
];
