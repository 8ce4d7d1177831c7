use tracing::debug;

use super::extract::extract_values;
use super::types::{ExtractedValue, InterpretedValue, LabFindings};
use crate::knowledge::GENERAL_HEALTH;

/// Judge one extracted value against its reference range. Bounds are
/// inclusive: a value equal to either bound is normal.
pub fn interpret(extracted: &ExtractedValue) -> InterpretedValue {
    let range = extracted.test.reference_range();

    // Show the tabulated spelling when the written unit is the same unit.
    let unit = match extracted.unit.as_deref() {
        Some(u) if !u.eq_ignore_ascii_case(range.unit) => u.to_string(),
        _ => range.unit.to_string(),
    };

    InterpretedValue {
        test: extracted.test,
        value: extracted.value,
        unit,
        status: range.classify(extracted.value),
        condition: range.condition,
    }
}

/// Interpret every value and collect the conditions of abnormal ones,
/// falling back to `general health` when all are normal or none were found.
pub fn aggregate(values: &[ExtractedValue]) -> LabFindings {
    let values: Vec<InterpretedValue> = values.iter().map(interpret).collect();

    let mut conditions: Vec<String> = Vec::new();
    for v in values.iter().filter(|v| v.is_abnormal()) {
        if !conditions.iter().any(|c| c == v.condition) {
            conditions.push(v.condition.to_string());
        }
    }
    if conditions.is_empty() {
        conditions.push(GENERAL_HEALTH.to_string());
    }

    let findings = LabFindings { values, conditions };
    debug!(
        values = findings.values.len(),
        abnormal = findings.abnormal().count(),
        "Lab findings aggregated"
    );
    findings
}

/// Extract and aggregate in one step.
pub fn analyze_lab_values(content: &str) -> LabFindings {
    aggregate(&extract_values(content))
}
