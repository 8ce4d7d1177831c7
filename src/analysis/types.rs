use serde::{Deserialize, Serialize};

use crate::knowledge::{LabTest, ValueStatus};

/// Metadata of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    /// MIME type, e.g. `text/plain`. Empty when unknown.
    pub mime_type: String,
    pub size_bytes: u64,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }
}

/// Which analysis path an upload takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    MedicalReport,
    Prescription,
    General,
}

impl AnalysisKind {
    /// Route by MIME type and file name. Checked in order: images and names
    /// containing "report" or "lab" are medical reports; PDFs and names
    /// containing "prescription" are prescriptions; anything else is general.
    pub fn route(file: &UploadedFile) -> Self {
        let name = file.name.to_lowercase();
        let mime = file.mime_type.to_lowercase();

        if mime.contains("image") || name.contains("report") || name.contains("lab") {
            Self::MedicalReport
        } else if mime.contains("pdf") || name.contains("prescription") {
            Self::Prescription
        } else {
            Self::General
        }
    }
}

/// A numeric lab value found in report text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedValue {
    pub test: LabTest,
    pub value: f64,
    /// Unit as written next to the value, if any.
    pub unit: Option<String>,
    /// The matched slice of the (lower-cased) report text.
    pub raw_match: String,
}

/// An extracted value judged against its reference range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpretedValue {
    pub test: LabTest,
    pub value: f64,
    /// Unit shown in the report.
    pub unit: String,
    pub status: ValueStatus,
    /// Condition suggested by the range; meaningful only when abnormal.
    pub condition: &'static str,
}

impl InterpretedValue {
    pub fn is_abnormal(&self) -> bool {
        self.status != ValueStatus::Normal
    }
}

/// Aggregated findings of one report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabFindings {
    /// All interpreted values, in lab-test order.
    pub values: Vec<InterpretedValue>,
    /// De-duplicated conditions of abnormal values, in first-seen order.
    /// Holds only `general health` when nothing is abnormal.
    pub conditions: Vec<String>,
}

impl LabFindings {
    pub fn abnormal(&self) -> impl Iterator<Item = &InterpretedValue> {
        self.values.iter().filter(|v| v.is_abnormal())
    }

    pub fn has_abnormal(&self) -> bool {
        self.abnormal().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_and_report_names_route_to_medical() {
        let img = UploadedFile::new("scan.png", "image/png", 10);
        assert_eq!(AnalysisKind::route(&img), AnalysisKind::MedicalReport);
        let lab = UploadedFile::new("Lab_Results.txt", "text/plain", 10);
        assert_eq!(AnalysisKind::route(&lab), AnalysisKind::MedicalReport);
    }

    #[test]
    fn report_name_wins_over_pdf_type() {
        let f = UploadedFile::new("blood_report.pdf", "application/pdf", 10);
        assert_eq!(AnalysisKind::route(&f), AnalysisKind::MedicalReport);
    }

    #[test]
    fn pdf_and_prescription_names_route_to_prescription() {
        let pdf = UploadedFile::new("scan-2024.pdf", "application/pdf", 10);
        assert_eq!(AnalysisKind::route(&pdf), AnalysisKind::Prescription);
        let rx = UploadedFile::new("my_prescription.txt", "text/plain", 10);
        assert_eq!(AnalysisKind::route(&rx), AnalysisKind::Prescription);
    }

    #[test]
    fn everything_else_is_general() {
        let f = UploadedFile::new("notes.txt", "text/plain", 10);
        assert_eq!(AnalysisKind::route(&f), AnalysisKind::General);
    }

    #[test]
    fn size_in_megabytes() {
        let f = UploadedFile::new("a", "", 1024 * 1024 * 3 / 2);
        assert!((f.size_mb() - 1.5).abs() < 1e-9);
    }
}
