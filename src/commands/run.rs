//! Run Command
//!
//! Loads suites, executes every case and reports mismatches.

use crate::config::HarnessConfig;
use crate::error::{CompatError, Result};
use crate::framework::{CaseReport, CaseStatus, RunSummary, SuiteReport};
use crate::suite;
use crate::ui as output;
use crate::utils::machine_output;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub paths: Vec<PathBuf>,
    pub filter: Option<String>,
    pub plugin_dir: Option<PathBuf>,
    pub timeout: Option<u64>,
    pub keep_fixtures: bool,
    pub no_fail_fast: bool,
}

#[derive(Debug, Serialize)]
struct RunData<'a> {
    summary: RunSummary,
    suites: &'a [SuiteReport],
}

pub fn run(options: &RunOptions, config: &HarnessConfig) -> Result<()> {
    let mut config = config.clone();
    if let Some(dir) = &options.plugin_dir {
        config.plugin_dir = Some(dir.clone());
    }
    if let Some(secs) = options.timeout {
        if secs == 0 {
            return Err(CompatError::Settings("--timeout must be positive".to_string()));
        }
        config.timeout = Duration::from_secs(secs);
    }
    if options.keep_fixtures {
        config.keep_fixtures = true;
    }
    if options.no_fail_fast {
        config.fail_fast = false;
    }

    let filter = options
        .filter
        .as_deref()
        .map(suite::compile_filter)
        .transpose()?;

    let mut suites = suite::load_all(&options.paths)?;
    if let Some(filter) = &filter {
        for suite in &mut suites {
            suite.retain_matching(filter);
        }
        suites.retain(|s| !s.cases.is_empty());
    }

    let executor = config.executor()?;
    let human = !config.format.is_machine();
    let mut reports = Vec::with_capacity(suites.len());

    'suites: for suite in &suites {
        if human {
            output::header(&format!("{} ({} cases)", suite.name, suite.cases.len()));
        }

        let mut cases = Vec::with_capacity(suite.cases.len());
        for case in &suite.cases {
            if output::is_interrupted() {
                reports.push(suite_report(suite, cases));
                break 'suites;
            }
            let report = case.execute(&executor);
            if human {
                print_case(&report);
            }
            cases.push(report);
        }
        reports.push(suite_report(suite, cases));
    }

    let summary = RunSummary::from_reports(&reports);

    if human {
        print_summary(&summary);
    } else {
        let errors = reports
            .iter()
            .flat_map(|r| r.cases.iter().map(move |c| (r, c)))
            .filter(|(_, c)| c.is_failure())
            .map(|(r, c)| format!("{}/{}", r.suite, c.name))
            .collect();
        machine_output::emit_v1(
            "run",
            RunData {
                summary,
                suites: &reports,
            },
            Vec::new(),
            errors,
            config.format,
        )?;
    }

    if output::is_interrupted() {
        return Err(CompatError::Interrupted);
    }
    if !summary.is_success() {
        return Err(CompatError::TestsFailed {
            failed: summary.failed + summary.errored,
            total: summary.total,
        });
    }
    Ok(())
}

fn suite_report(suite: &suite::Suite, cases: Vec<CaseReport>) -> SuiteReport {
    SuiteReport {
        suite: suite.name.clone(),
        file: suite.file.clone(),
        cases,
    }
}

fn print_case(report: &CaseReport) {
    match report.status {
        CaseStatus::Passed => {
            output::success(&format!("{} ({} ms)", report.name, report.duration_ms))
        }
        CaseStatus::Skipped => output::skipped(&format!("{} (skipped)", report.name)),
        CaseStatus::Failed => {
            output::failure(&report.name);
            for outcome in report.failed_outcomes() {
                output::indent(
                    &format!(
                        "command {}: {} @ {}",
                        outcome.command + 1,
                        outcome.api,
                        outcome.version
                    ),
                    1,
                );
                for mismatch in &outcome.mismatches {
                    output::indent(&mismatch.to_string(), 2);
                }
            }
        }
        CaseStatus::Errored => {
            output::failure(&format!(
                "{}: {}",
                report.name,
                report.error.as_deref().unwrap_or("unknown error")
            ));
        }
    }

    if let Some(fixture) = &report.fixture {
        output::indent(&format!("fixture kept at {}", fixture.display()), 1);
    }
}

fn print_summary(summary: &RunSummary) {
    output::separator();
    let line = format!(
        "{} cases: {} passed, {} failed, {} errored, {} skipped",
        summary.total, summary.passed, summary.failed, summary.errored, summary.skipped
    );
    if summary.is_success() {
        output::success(&line);
    } else {
        output::failure(&line);
    }
}
