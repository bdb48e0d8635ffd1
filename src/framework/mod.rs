//! Test case execution against the per-version test plugins.

pub mod compare;
mod exec;
pub mod executor;
pub mod fixture;
pub mod plugin;
pub mod report;
pub mod testcase;

pub use compare::{Mismatch, MismatchKind, compare, validate_output};
pub use executor::{DEFAULT_TIMEOUT_SECS, Executor};
pub use fixture::Fixture;
pub use plugin::PluginLocator;
pub use report::{ApiOutcome, CaseReport, CaseStatus, RunSummary, SuiteReport};
pub use testcase::TestCase;
