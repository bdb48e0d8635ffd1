//! Declarative test suites stored as YAML files.
//!
//! ```yaml
//! name: env-interop
//! cases:
//!   - name: latest writes, v0.25.4 reads
//!     commands:
//!       - apis:
//!           - name: SetEnv
//!             version: latest
//!             arguments: { key: EDITOR, value: vim }
//!       - - name: GetEnv
//!           version: v0.25.4
//!           arguments: { key: EDITOR }
//!           output: { result: success, content: vim }
//! ```
//!
//! Every API is checked against the compatibility rules of its runtime
//! version when the file is loaded.

use crate::compat::check_api;
use crate::core::{Api, Command};
use crate::error::{CompatError, Result};
use crate::framework::TestCase;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Suite {
    pub name: String,
    pub file: Option<PathBuf>,
    pub cases: Vec<TestCase>,
}

impl Suite {
    /// Keep only cases whose `suite/case` name matches `filter`.
    pub fn retain_matching(&mut self, filter: &Regex) {
        let suite = self.name.clone();
        self.cases
            .retain(|case| filter.is_match(&format!("{}/{}", suite, case.name)));
    }

    pub fn api_count(&self) -> usize {
        self.cases.iter().map(TestCase::api_count).sum()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SuiteFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    cases: Vec<CaseSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseSpec {
    name: String,
    #[serde(default)]
    skip: bool,
    #[serde(default)]
    commands: Vec<Value>,
}

/// A command is either a bare list of APIs or a mapping with an `apis` list.
fn parse_command(value: Value) -> std::result::Result<Command, String> {
    let apis = match value {
        Value::Object(mut map) => {
            let apis = map
                .remove("apis")
                .ok_or_else(|| "command mapping has no `apis` list".to_string())?;
            if let Some(key) = map.keys().next() {
                return Err(format!("unknown command field `{}`, expected `apis`", key));
            }
            apis
        }
        list @ Value::Array(_) => list,
        other => {
            return Err(format!(
                "expected a list of APIs or a mapping with `apis`, got {}",
                other
            ));
        }
    };
    let apis: Vec<Api> = serde_json::from_value(apis).map_err(|e| e.to_string())?;
    Ok(Command { apis })
}

pub fn parse_suite(content: &str, origin: &str) -> Result<Suite> {
    let parse_error = |message: String| CompatError::SuiteParse {
        file: origin.to_string(),
        message,
    };

    let file: SuiteFile = serde_yml::from_str(content).map_err(|e| parse_error(e.to_string()))?;

    let name = file.name.unwrap_or_else(|| {
        Path::new(origin)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| origin.to_string())
    });

    let mut seen = HashSet::new();
    let mut cases = Vec::with_capacity(file.cases.len());

    for spec in file.cases {
        if !seen.insert(spec.name.clone()) {
            return Err(parse_error(format!("duplicate case name '{}'", spec.name)));
        }

        let commands = spec
            .commands
            .into_iter()
            .enumerate()
            .map(|(c_idx, value)| {
                parse_command(value).map_err(|e| {
                    parse_error(format!("case '{}', command {}: {}", spec.name, c_idx + 1, e))
                })
            })
            .collect::<Result<Vec<Command>>>()?;
        for (c_idx, command) in commands.iter().enumerate() {
            for (a_idx, api) in command.apis.iter().enumerate() {
                check_api(api).map_err(|e| {
                    parse_error(format!(
                        "case '{}', command {}, api {} ({}): {}",
                        spec.name,
                        c_idx + 1,
                        a_idx + 1,
                        api.name,
                        e
                    ))
                })?;
            }
        }

        cases.push(TestCase {
            name: spec.name,
            commands,
            skip: spec.skip,
        });
    }

    Ok(Suite {
        name,
        file: None,
        cases,
    })
}

pub fn load_file(path: &Path) -> Result<Suite> {
    let content = fs::read_to_string(path).map_err(|e| CompatError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut suite = parse_suite(&content, &path.display().to_string())?;
    suite.file = Some(path.to_path_buf());
    Ok(suite)
}

/// Suite files under `paths`. Directories are walked recursively; the result is sorted.
pub fn discover(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for path in paths {
        let meta = fs::metadata(path).map_err(|e| CompatError::IoError {
            path: path.clone(),
            source: e,
        })?;
        if meta.is_dir() {
            walk(path, &mut found)?;
        } else {
            found.push(path.clone());
        }
    }
    found.sort();
    found.dedup();
    Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| CompatError::IoError {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            walk(&path, found)?;
        } else if is_suite_file(&path) {
            found.push(path);
        }
    }
    Ok(())
}

fn is_suite_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

pub fn load_all(paths: &[PathBuf]) -> Result<Vec<Suite>> {
    discover(paths)?.iter().map(|p| load_file(p)).collect()
}

pub fn compile_filter(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| CompatError::InvalidRegex(format!("{}: {}", pattern, e)))
}
