//! Structural comparison of expected and actual API results.
//!
//! `strict` is exact equality. `lenient` is a subset match: every expected
//! key must be present and match, an expected `null` stands for an absent
//! field, and array elements match distinct actual elements in any order.
//! Numbers always compare numerically, so `1` and `1.0` are equal.

use crate::compat::errors::{ERR_NOT_FOUND, is_not_found};
use crate::core::{ApiResponse, ApiResult, Output, ValidationStrategy};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MismatchKind {
    /// Expected field absent from the actual value.
    Missing,
    /// Actual field the strict comparison did not expect.
    Unexpected,
    Different,
    /// No distinct actual array element matched the expected one.
    Unmatched,
    /// Success where an error was expected, or the reverse.
    WrongResult,
    /// The plugin logged no response for the API.
    NoResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    pub path: String,
    pub kind: MismatchKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
}

impl Mismatch {
    fn new(path: &str, kind: MismatchKind, expected: Option<&Value>, actual: Option<&Value>) -> Self {
        Self {
            path: path.to_string(),
            kind,
            expected: expected.cloned(),
            actual: actual.cloned(),
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: &Option<Value>| v.as_ref().map(render).unwrap_or_else(|| "nothing".into());
        match self.kind {
            MismatchKind::Missing => write!(f, "{}: missing, expected {}", self.path, show(&self.expected)),
            MismatchKind::Unexpected => {
                write!(f, "{}: unexpected value {}", self.path, show(&self.actual))
            }
            MismatchKind::Unmatched => {
                write!(f, "{}: no element matches {}", self.path, show(&self.expected))
            }
            MismatchKind::NoResponse => write!(
                f,
                "{}: plugin logged no response, expected {}",
                self.path,
                show(&self.expected)
            ),
            MismatchKind::Different | MismatchKind::WrongResult => write!(
                f,
                "{}: expected {}, got {}",
                self.path,
                show(&self.expected),
                show(&self.actual)
            ),
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{:?}", s),
        other => other.to_string(),
    }
}

/// Compare `actual` against `expected`, returning every difference found.
pub fn compare(expected: &Value, actual: &Value, strategy: ValidationStrategy) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    match strategy {
        ValidationStrategy::Strict => strict("$", expected, actual, &mut mismatches),
        ValidationStrategy::Lenient => lenient("$", expected, actual, &mut mismatches),
    }
    mismatches
}

/// Check one plugin response against the expected output of an API.
pub fn validate_output(output: &Output, response: Option<&ApiResponse>) -> Vec<Mismatch> {
    let Some(response) = response else {
        let expected = Value::String(result_label(output.result).to_string());
        return vec![Mismatch::new("$", MismatchKind::NoResponse, Some(&expected), None)];
    };

    match output.result {
        ApiResult::Failed => {
            let expected = match &output.content {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            match response.error_message() {
                None => vec![Mismatch::new(
                    "$",
                    MismatchKind::WrongResult,
                    Some(&Value::String(format!("error: {}", expected))),
                    Some(&response.response_body),
                )],
                Some(actual) if error_matches(&expected, &actual) => Vec::new(),
                Some(actual) => vec![Mismatch::new(
                    "$",
                    MismatchKind::Different,
                    Some(&Value::String(expected)),
                    Some(&Value::String(actual)),
                )],
            }
        }
        ApiResult::Success => {
            if let Some(error) = response.error_message() {
                return vec![Mismatch::new(
                    "$",
                    MismatchKind::WrongResult,
                    Some(&Value::String("success".to_string())),
                    Some(&Value::String(format!("error: {}", error))),
                )];
            }
            if output.content.is_null() {
                return Vec::new();
            }
            compare(&output.content, &response.body(), output.validation_strategy)
        }
    }
}

fn result_label(result: ApiResult) -> &'static str {
    match result {
        ApiResult::Success => "success",
        ApiResult::Failed => "error",
    }
}

fn error_matches(expected: &str, actual: &str) -> bool {
    if expected == ERR_NOT_FOUND {
        is_not_found(actual)
    } else {
        expected == actual
    }
}

fn child_path(path: &str, key: &str) -> String {
    if !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        format!("{}.{}", path, key)
    } else {
        format!("{}[{:?}]", path, key)
    }
}

fn index_path(path: &str, index: usize) -> String {
    format!("{}[{}]", path, index)
}

fn scalars_equal(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(e), Value::Number(a)) => {
            if let (Some(e), Some(a)) = (e.as_i64(), a.as_i64()) {
                e == a
            } else if let (Some(e), Some(a)) = (e.as_u64(), a.as_u64()) {
                e == a
            } else {
                e.as_f64() == a.as_f64()
            }
        }
        _ => expected == actual,
    }
}

fn strict(path: &str, expected: &Value, actual: &Value, out: &mut Vec<Mismatch>) {
    match (expected, actual) {
        (Value::Object(e), Value::Object(a)) => {
            for (key, e_val) in e {
                match a.get(key) {
                    Some(a_val) => strict(&child_path(path, key), e_val, a_val, out),
                    None => out.push(Mismatch::new(
                        &child_path(path, key),
                        MismatchKind::Missing,
                        Some(e_val),
                        None,
                    )),
                }
            }
            for (key, a_val) in a {
                if !e.contains_key(key) {
                    out.push(Mismatch::new(
                        &child_path(path, key),
                        MismatchKind::Unexpected,
                        None,
                        Some(a_val),
                    ));
                }
            }
        }
        (Value::Array(e), Value::Array(a)) if e.len() == a.len() => {
            for (i, (e_val, a_val)) in e.iter().zip(a).enumerate() {
                strict(&index_path(path, i), e_val, a_val, out);
            }
        }
        _ if scalars_equal(expected, actual) => {}
        _ => out.push(Mismatch::new(path, MismatchKind::Different, Some(expected), Some(actual))),
    }
}

fn lenient(path: &str, expected: &Value, actual: &Value, out: &mut Vec<Mismatch>) {
    match (expected, actual) {
        (Value::Object(e), Value::Object(a)) => lenient_object(path, e, a, out),
        (Value::Array(e), Value::Array(a)) => lenient_array(path, e, a, out),
        _ if scalars_equal(expected, actual) => {}
        _ => out.push(Mismatch::new(path, MismatchKind::Different, Some(expected), Some(actual))),
    }
}

fn lenient_object(path: &str, expected: &Map<String, Value>, actual: &Map<String, Value>, out: &mut Vec<Mismatch>) {
    for (key, e_val) in expected {
        let key_path = child_path(path, key);
        match (e_val, actual.get(key)) {
            (Value::Null, None | Some(Value::Null)) => {}
            (Value::Null, Some(a_val)) => {
                out.push(Mismatch::new(&key_path, MismatchKind::Unexpected, None, Some(a_val)))
            }
            (_, None) => out.push(Mismatch::new(&key_path, MismatchKind::Missing, Some(e_val), None)),
            (_, Some(a_val)) => lenient(&key_path, e_val, a_val, out),
        }
    }
}

fn lenient_matches(expected: &Value, actual: &Value) -> bool {
    let mut scratch = Vec::new();
    lenient("$", expected, actual, &mut scratch);
    scratch.is_empty()
}

/// Pair every expected element with a distinct actual element.
fn lenient_array(path: &str, expected: &[Value], actual: &[Value], out: &mut Vec<Mismatch>) {
    let candidates: Vec<Vec<usize>> = expected
        .iter()
        .map(|e| {
            actual
                .iter()
                .enumerate()
                .filter(|(_, a)| lenient_matches(e, a))
                .map(|(i, _)| i)
                .collect()
        })
        .collect();

    let mut owner: Vec<Option<usize>> = vec![None; actual.len()];
    for e_idx in 0..expected.len() {
        let mut seen = vec![false; actual.len()];
        if !assign(e_idx, &candidates, &mut owner, &mut seen) {
            out.push(Mismatch::new(
                &index_path(path, e_idx),
                MismatchKind::Unmatched,
                Some(&expected[e_idx]),
                None,
            ));
        }
    }
}

fn assign(e_idx: usize, candidates: &[Vec<usize>], owner: &mut [Option<usize>], seen: &mut [bool]) -> bool {
    for &a_idx in &candidates[e_idx] {
        if seen[a_idx] {
            continue;
        }
        seen[a_idx] = true;
        let free = match owner[a_idx] {
            None => true,
            Some(other) => assign(other, candidates, owner, seen),
        };
        if free {
            owner[a_idx] = Some(e_idx);
            return true;
        }
    }
    false
}
