//! Runs test cases against the per-version test plugins.
//!
//! Each case gets its own [`Fixture`]. Commands execute in order; inside a
//! command every run of consecutive same-version APIs becomes one plugin
//! invocation (`<plugin> test --file <apis.yaml>`), and the responses it logs
//! are matched back to the APIs by name in call order.

use crate::core::{Api, ResponseLog, RuntimeVersion, parse_plugin_output};
use crate::error::{CompatError, Result};
use crate::framework::compare::validate_output;
use crate::framework::exec::run_command_with_timeout;
use crate::framework::fixture::Fixture;
use crate::framework::plugin::PluginLocator;
use crate::framework::report::{ApiOutcome, CaseReport, CaseStatus};
use crate::framework::testcase::TestCase;
use crate::ui;
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Executor {
    locator: PluginLocator,
    timeout: Duration,
    fail_fast: bool,
    keep_fixtures: bool,
    interrupted: &'static AtomicBool,
}

impl Executor {
    pub fn new(locator: PluginLocator) -> Self {
        Self {
            locator,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            fail_fast: true,
            keep_fixtures: false,
            interrupted: ui::interrupt_flag(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_keep_fixtures(mut self, keep: bool) -> Self {
        self.keep_fixtures = keep;
        self
    }

    /// Stop between plugin invocations once `flag` is set.
    pub fn with_interrupt_flag(mut self, flag: &'static AtomicBool) -> Self {
        self.interrupted = flag;
        self
    }

    pub fn run_case(&self, case: &TestCase) -> CaseReport {
        if case.skip {
            return CaseReport::skipped(&case.name);
        }

        let started = Instant::now();
        let mut outcomes = Vec::new();

        let fixture = match Fixture::create() {
            Ok(fixture) => fixture,
            Err(e) => return errored(case, outcomes, e, started),
        };
        ui::verbose(&format!("case '{}': fixture {}", case.name, fixture.path().display()));

        let result = self.run_commands(case, &fixture, &mut outcomes);

        let kept = self.keep_fixtures.then(|| fixture.keep());
        if let Some(path) = &kept {
            ui::verbose(&format!("case '{}': kept fixture {}", case.name, path.display()));
        }

        let mut report = match result {
            Ok(()) => {
                let status = if outcomes.iter().all(ApiOutcome::passed) {
                    CaseStatus::Passed
                } else {
                    CaseStatus::Failed
                };
                CaseReport {
                    name: case.name.clone(),
                    status,
                    outcomes,
                    error: None,
                    fixture: None,
                    duration_ms: elapsed_ms(started),
                }
            }
            Err(e) => errored(case, outcomes, e, started),
        };
        report.fixture = kept;
        report
    }

    fn run_commands(&self, case: &TestCase, fixture: &Fixture, outcomes: &mut Vec<ApiOutcome>) -> Result<()> {
        let mut invocation = 0;

        for (index, command) in case.commands.iter().enumerate() {
            for (version, apis) in command.version_batches() {
                if self.interrupted.load(Ordering::SeqCst) {
                    return Err(CompatError::Interrupted);
                }

                invocation += 1;
                let mut log = self.invoke(fixture, version, apis, invocation)?;

                for api in apis {
                    let response = log.next(api.name);
                    let mismatches = match &api.output {
                        Some(output) => validate_output(output, response.as_ref()),
                        None => Vec::new(),
                    };
                    let outcome = ApiOutcome {
                        command: index,
                        api: api.name,
                        version: api.version,
                        mismatches,
                    };
                    let passed = outcome.passed();
                    outcomes.push(outcome);

                    if !passed && self.fail_fast {
                        return Ok(());
                    }
                }
            }
        }

        Ok(())
    }

    /// One plugin process for one batch of same-version APIs.
    fn invoke(
        &self,
        fixture: &Fixture,
        version: RuntimeVersion,
        apis: &[Api],
        invocation: usize,
    ) -> Result<ResponseLog> {
        let input = fixture.path().join(format!("apis-{:03}.yaml", invocation));
        fs::write(&input, serde_yml::to_string(apis)?).map_err(|e| CompatError::IoError {
            path: input.clone(),
            source: e,
        })?;

        let mut cmd = self.locator.command(version)?;
        cmd.arg("--file")
            .arg(&input)
            .envs(fixture.env())
            .current_dir(fixture.path());

        let command_line = format!("{:?}", cmd);
        ui::verbose(&format!("{}: {}", version, command_line));

        let output = run_command_with_timeout(&mut cmd, self.timeout)?;
        ui::verbose(&format!("{}: exited with {}", version, output.status));

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CompatError::PluginCommandFailed {
                command: command_line,
                reason: format!("{}: {}", output.status, stderr.trim()),
            });
        }

        let log = parse_plugin_output(&String::from_utf8_lossy(&output.stdout))?;
        if log.skipped_documents() > 0 {
            ui::verbose(&format!(
                "{}: ignored {} non-response document(s)",
                version,
                log.skipped_documents()
            ));
        }
        Ok(log)
    }
}

fn errored(case: &TestCase, outcomes: Vec<ApiOutcome>, error: CompatError, started: Instant) -> CaseReport {
    CaseReport {
        name: case.name.clone(),
        status: CaseStatus::Errored,
        outcomes,
        error: Some(error.to_string()),
        fixture: None,
        duration_ms: elapsed_ms(started),
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
