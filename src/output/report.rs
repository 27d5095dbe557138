//! Report model shared by all output formatters

use crate::llm::strategy::LOCAL_STRATEGY;
use crate::model::{AnalysisOutcome, AnalysisRequest, AnalysisResult};
use crate::scoring::ats::AtsChecklist;
use crate::scoring::breakdown::ScoreBreakdown;
use crate::scoring::{ScoreReport, Scorer};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An analysis outcome plus the metadata needed to render it.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_id: Option<String>,
    pub metadata: ReportMetadata,
    /// Local scorer internals, rendered in detailed mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ScoreDetails>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub strategy: String,
    pub resume_name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreDetails {
    pub breakdown: ScoreBreakdown,
    pub ats: AtsChecklist,
    pub impact_statements: Vec<String>,
}

impl From<&ScoreReport> for ScoreDetails {
    fn from(report: &ScoreReport) -> Self {
        Self {
            breakdown: report.breakdown.clone(),
            ats: report.ats.clone(),
            impact_statements: report.signals.impact.impact_statements.clone(),
        }
    }
}

impl AnalysisReport {
    pub fn new(outcome: AnalysisOutcome, resume_name: &str, processing_time_ms: u64) -> Self {
        Self {
            result: outcome.result,
            analysis_id: outcome.analysis_id,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                processing_time_ms,
                strategy: outcome.strategy,
                resume_name: resume_name.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            details: None,
        }
    }

    pub fn with_details(mut self, details: ScoreDetails) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach the local breakdown. Results from remote providers are left
    /// without details, since the breakdown would not match their scores.
    pub fn with_local_details(self, request: &AnalysisRequest) -> Self {
        if self.metadata.strategy != LOCAL_STRATEGY {
            return self;
        }
        match Scorer::new().report(request) {
            Ok(report) => self.with_details(ScoreDetails::from(&report)),
            Err(_) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Roe\njane@example.com\n555-123-4567\nExperience:\n- Increased revenue by 20%";

    fn outcome(strategy: &str, request: &AnalysisRequest) -> AnalysisOutcome {
        AnalysisOutcome {
            result: Scorer::new().analyze(request).unwrap(),
            analysis_id: None,
            strategy: strategy.to_string(),
        }
    }

    #[test]
    fn test_local_result_gets_details() {
        let request = AnalysisRequest::new(RESUME);
        let report = AnalysisReport::new(outcome(LOCAL_STRATEGY, &request), "cv.txt", 5)
            .with_local_details(&request);

        let details = report.details.unwrap();
        assert_eq!(details.ats.score(), report.result.ats_score);
        assert_eq!(details.impact_statements, vec!["increased revenue by 20%"]);
    }

    #[test]
    fn test_remote_result_has_no_local_details() {
        let request = AnalysisRequest::new(RESUME);
        let report = AnalysisReport::new(outcome("openai", &request), "cv.txt", 5)
            .with_local_details(&request);
        assert!(report.details.is_none());
        assert_eq!(report.metadata.strategy, "openai");
    }
}
