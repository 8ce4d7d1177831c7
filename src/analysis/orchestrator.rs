use serde::Serialize;
use tracing::{info, warn};

use super::general::build_general_report;
use super::interpret::analyze_lab_values;
use super::prescription::{build_prescription_report, detect_medications};
use super::report::build_medical_report;
use super::types::{AnalysisKind, UploadedFile};
use crate::ai::{GenerativeModel, HealthAdvisor, ReportKind};
use crate::knowledge::GENERAL_HEALTH;

/// Where the analysis text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    Model,
    Local,
}

/// Result of analysing one upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileAnalysis {
    pub kind: AnalysisKind,
    pub source: AnalysisSource,
    pub text: String,
    /// Specific conditions found by local analysis. Empty for model output
    /// and for general files.
    pub conditions: Vec<String>,
}

/// Analyse an upload: route it, try the model for reports and
/// prescriptions, and fall back to local analysis on any model failure.
///
/// Never fails: every path ends in report text.
pub fn analyze<M: GenerativeModel>(
    file: &UploadedFile,
    content: &str,
    advisor: &HealthAdvisor<M>,
) -> FileAnalysis {
    let kind = AnalysisKind::route(file);
    info!(name = %file.name, kind = ?kind, "Analysing upload");

    let report_kind = match kind {
        AnalysisKind::MedicalReport => ReportKind::Medical,
        AnalysisKind::Prescription => ReportKind::Prescription,
        AnalysisKind::General => {
            return FileAnalysis {
                kind,
                source: AnalysisSource::Local,
                text: build_general_report(file),
                conditions: Vec::new(),
            };
        }
    };

    if advisor.is_ready() {
        match advisor.analyze_report(report_kind, content, &file.name) {
            Ok(text) => {
                return FileAnalysis {
                    kind,
                    source: AnalysisSource::Model,
                    text,
                    conditions: Vec::new(),
                };
            }
            Err(e) => warn!(error = %e, "Model analysis failed, using local analysis"),
        }
    }

    let (text, conditions) = match report_kind {
        ReportKind::Medical => {
            let findings = analyze_lab_values(content);
            info!(
                abnormal = findings.abnormal().count(),
                conditions = findings.conditions.len(),
                "Local report analysis complete"
            );
            let conditions = findings
                .conditions
                .iter()
                .filter(|c| c.as_str() != GENERAL_HEALTH)
                .cloned()
                .collect();
            (build_medical_report(&findings), conditions)
        }
        ReportKind::Prescription => {
            let findings = detect_medications(content);
            info!(
                medications = findings.medications.len(),
                "Local prescription analysis complete"
            );
            let mut conditions: Vec<String> = Vec::new();
            for c in &findings.conditions {
                if !conditions.iter().any(|seen| seen == c) {
                    conditions.push(c.to_string());
                }
            }
            (build_prescription_report(&findings), conditions)
        }
    };

    FileAnalysis {
        kind,
        source: AnalysisSource::Local,
        text,
        conditions,
    }
}
