use crate::config::OutputFormat;
use crate::error::Result;
use crate::suite;
use crate::ui as output;
use crate::utils::machine_output;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct CheckedSuite {
    name: String,
    file: Option<PathBuf>,
    cases: usize,
    apis: usize,
}

/// Load and validate suites without executing anything.
pub fn run(paths: &[PathBuf], format: OutputFormat) -> Result<()> {
    let suites = suite::load_all(paths)?;

    let checked: Vec<CheckedSuite> = suites
        .iter()
        .map(|s| CheckedSuite {
            name: s.name.clone(),
            file: s.file.clone(),
            cases: s.cases.len(),
            apis: s.api_count(),
        })
        .collect();

    if format.is_machine() {
        return machine_output::emit_v1("check", checked, Vec::new(), Vec::new(), format);
    }

    output::header("Suites");
    for suite in &checked {
        output::success(&format!(
            "{}: {} cases, {} API calls",
            suite.name, suite.cases, suite.apis
        ));
    }

    let cases: usize = checked.iter().map(|s| s.cases).sum();
    output::separator();
    output::info(&format!("{} suite(s), {} case(s) valid", checked.len(), cases));
    Ok(())
}
