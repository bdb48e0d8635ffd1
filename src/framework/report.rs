use crate::core::{RuntimeApiName, RuntimeVersion};
use crate::framework::compare::Mismatch;
use serde::Serialize;
use std::path::PathBuf;

/// Result of validating one API call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOutcome {
    pub command: usize,
    pub api: RuntimeApiName,
    pub version: RuntimeVersion,
    pub mismatches: Vec<Mismatch>,
}

impl ApiOutcome {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Passed,
    Failed,
    /// The harness itself failed: missing plugin, crash, timeout.
    Errored,
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseReport {
    pub name: String,
    pub status: CaseStatus,
    pub outcomes: Vec<ApiOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture: Option<PathBuf>,
    pub duration_ms: u64,
}

impl CaseReport {
    pub fn skipped(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CaseStatus::Skipped,
            outcomes: Vec::new(),
            error: None,
            fixture: None,
            duration_ms: 0,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, CaseStatus::Failed | CaseStatus::Errored)
    }

    pub fn failed_outcomes(&self) -> impl Iterator<Item = &ApiOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteReport {
    pub suite: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub cases: Vec<CaseReport>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn from_reports(reports: &[SuiteReport]) -> Self {
        let mut summary = Self::default();
        for case in reports.iter().flat_map(|r| &r.cases) {
            summary.total += 1;
            match case.status {
                CaseStatus::Passed => summary.passed += 1,
                CaseStatus::Failed => summary.failed += 1,
                CaseStatus::Errored => summary.errored += 1,
                CaseStatus::Skipped => summary.skipped += 1,
            }
        }
        summary
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}
