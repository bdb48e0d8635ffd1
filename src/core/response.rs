//! Plugin response records
//!
//! Test plugins report each API result as a YAML log record on stdout:
//!
//! ```yaml
//! GetContext:
//!   - responseType: map
//!     responseBody:
//!       name: ctx
//! ---
//! GetEnv:
//!   responseType: err
//!   responseBody: not found
//! ```
//!
//! Documents are separated by `---` lines. Anything that is not a mapping
//! of API names to responses is treated as plain log output and skipped.

use crate::core::RuntimeApiName;
use crate::error::{CompatError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Map,
    Str,
    Bool,
    Int,
    Nil,
    Err,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub response_type: ResponseType,
    #[serde(default)]
    pub response_body: Value,
}

impl ApiResponse {
    pub fn is_error(&self) -> bool {
        self.response_type == ResponseType::Err
    }

    /// Error text of an `err` response.
    pub fn error_message(&self) -> Option<String> {
        if !self.is_error() {
            return None;
        }
        Some(match &self.response_body {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
    }

    /// Body read according to `responseType`.
    ///
    /// YAML resolves unquoted scalars like `8080` or `true`, so a `str` body
    /// of that shape is turned back into the string the plugin printed.
    pub fn body(&self) -> Value {
        match (self.response_type, &self.response_body) {
            (ResponseType::Str, Value::Number(n)) => Value::String(n.to_string()),
            (ResponseType::Str, Value::Bool(b)) => Value::String(b.to_string()),
            (ResponseType::Nil, _) => Value::Null,
            (_, body) => body.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<ApiResponse>),
    One(ApiResponse),
}

/// Responses captured from one plugin invocation, queued per API name.
#[derive(Debug, Default)]
pub struct ResponseLog {
    entries: HashMap<RuntimeApiName, VecDeque<ApiResponse>>,
    skipped_documents: usize,
}

impl ResponseLog {
    /// Take the next response recorded for `api`, in call order.
    pub fn next(&mut self, api: RuntimeApiName) -> Option<ApiResponse> {
        self.entries.get_mut(&api).and_then(VecDeque::pop_front)
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Documents ignored as plain log output.
    pub fn skipped_documents(&self) -> usize {
        self.skipped_documents
    }

    fn push(&mut self, api: RuntimeApiName, response: ApiResponse) {
        self.entries.entry(api).or_default().push_back(response);
    }
}

/// Parse plugin stdout into a [`ResponseLog`].
///
/// A document keyed by a known API name whose value is not a valid response
/// is an error: the plugin tried to report and got the shape wrong.
pub fn parse_plugin_output(stdout: &str) -> Result<ResponseLog> {
    let mut log = ResponseLog::default();

    for document in split_documents(stdout) {
        let parsed: Value = match serde_yml::from_str(&document) {
            Ok(value) => value,
            Err(_) => {
                log.skipped_documents += 1;
                continue;
            }
        };

        let Value::Object(record) = parsed else {
            if !parsed.is_null() {
                log.skipped_documents += 1;
            }
            continue;
        };

        let mut recognized = false;
        for (key, value) in record {
            let Ok(api) = key.parse::<RuntimeApiName>() else {
                continue;
            };
            recognized = true;
            let responses: OneOrMany = serde_json::from_value(value).map_err(|e| {
                CompatError::MalformedOutput(format!("invalid response for {}: {}", api, e))
            })?;
            match responses {
                OneOrMany::Many(list) => {
                    for response in list {
                        log.push(api, response);
                    }
                }
                OneOrMany::One(response) => log.push(api, response),
            }
        }

        if !recognized {
            log.skipped_documents += 1;
        }
    }

    Ok(log)
}

fn split_documents(stdout: &str) -> Vec<String> {
    let mut documents = Vec::new();
    let mut current = String::new();

    for line in stdout.lines() {
        if line.trim_end() == "---" {
            if !current.trim().is_empty() {
                documents.push(std::mem::take(&mut current));
            }
            current.clear();
            continue;
        }
        current.push_str(line);
        current.push('\n');
    }

    if !current.trim().is_empty() {
        documents.push(current);
    }

    documents
}

#[cfg(test)]
mod tests;
