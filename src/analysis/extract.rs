use std::sync::LazyLock;

use regex::Regex;

use super::types::ExtractedValue;
use crate::knowledge::LabTest;

/// Units recognised directly after a value, lower-case.
const UNIT_PATTERN: &str =
    r"mg/dl|mmol/l|ng/ml|ng/dl|pg/ml|µg/dl|ug/dl|mcg/dl|g/dl|miu/l|u/l|mmhg|bpm|k/µl|m/µl|k/ul|m/ul|°f|%";

/// Per test, one pattern per label:
/// `<label> [:=]? <number> <unit>?`, tolerant of whitespace.
static LABEL_PATTERNS: LazyLock<Vec<(LabTest, Vec<Regex>)>> = LazyLock::new(|| {
    LabTest::ALL
        .iter()
        .map(|test| {
            let patterns = test
                .labels()
                .iter()
                .map(|label| {
                    let pattern = format!(
                        r"{}\s*[:=]?\s*(\d+(?:\.\d+)?)\s*({})?",
                        regex::escape(label),
                        UNIT_PATTERN
                    );
                    Regex::new(&pattern).expect("valid regex")
                })
                .collect();
            (*test, patterns)
        })
        .collect()
});

/// First value for one test: labels are tried in order and the earliest
/// occurrence of the first matching label wins.
pub fn extract_value(test: LabTest, lower_content: &str) -> Option<ExtractedValue> {
    let (_, patterns) = LABEL_PATTERNS.iter().find(|(t, _)| *t == test)?;

    patterns.iter().find_map(|re| {
        let caps = re.captures(lower_content)?;
        let value = caps.get(1)?.as_str().parse::<f64>().ok()?;
        Some(ExtractedValue {
            test,
            value,
            unit: caps.get(2).map(|m| m.as_str().to_string()),
            raw_match: caps.get(0)?.as_str().trim_end().to_string(),
        })
    })
}

/// Extract at most one value per known test, in lab-test order.
///
/// Content is lower-cased first. A test with no match is simply absent.
pub fn extract_values(content: &str) -> Vec<ExtractedValue> {
    let lower = content.to_lowercase();
    LabTest::ALL
        .iter()
        .filter_map(|test| extract_value(*test, &lower))
        .collect()
}
