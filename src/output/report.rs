//! Report structures combining score analysis and validation results

use crate::processing::scorer::{ScoreAnalysis, ScoreCategory};
use crate::processing::validator::ValidationReport;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Everything a formatter needs to present one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeReport {
    /// Name of the analyzed resume file
    pub source: String,

    /// ATS compatibility analysis
    pub analysis: ScoreAnalysis,

    /// Submission-gating validation result
    pub validation: ValidationReport,

    /// Report generation info
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Local>,
    pub tool_version: String,
}

impl ResumeReport {
    pub fn new(source: String, analysis: ScoreAnalysis, validation: ValidationReport) -> Self {
        Self {
            source,
            analysis,
            validation,
            metadata: ReportMetadata {
                generated_at: Local::now(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn category(&self) -> ScoreCategory {
        self.analysis.category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::ResumeDocument;
    use crate::processing::scorer::AtsScorer;
    use crate::processing::validator::FormValidator;

    #[test]
    fn test_report_carries_version_and_category() {
        let doc = ResumeDocument::new();
        let report = ResumeReport::new(
            "resume.json".to_string(),
            AtsScorer::new().score(&doc),
            FormValidator::new().validate(&doc),
        );

        assert_eq!(report.source, "resume.json");
        assert_eq!(report.metadata.tool_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(report.category(), ScoreCategory::Poor);
        assert!(!report.validation.valid);
    }
}
