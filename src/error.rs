use crate::core::{RuntimeApiName, RuntimeVersion};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompatError {
    #[error("Invalid options for {api} ({version}): {reason}")]
    InvalidOptions {
        api: String,
        version: RuntimeVersion,
        reason: String,
    },

    #[error("{api} is not available in runtime {version} (introduced in {since})")]
    UnsupportedApi {
        api: RuntimeApiName,
        version: RuntimeVersion,
        since: RuntimeVersion,
    },

    #[error("Unknown runtime version '{0}'. Valid versions: {1}")]
    UnknownVersion(String, String),

    #[error("Unknown runtime API '{0}'")]
    UnknownApi(String),

    #[error("Parsing error in '{file}': {message}")]
    SuiteParse { file: String, message: String },

    #[error("Test plugin for runtime {version} not found (looked for '{binary}')")]
    PluginNotFound {
        version: RuntimeVersion,
        binary: String,
    },

    #[error("Plugin command '{command}' failed: {reason}")]
    PluginCommandFailed { command: String, reason: String },

    #[error("Malformed plugin output: {0}")]
    MalformedOutput(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error("KDL parse error: {0}")]
    KdlError(#[from] kdl::KdlError),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    YamlError(#[from] serde_yml::Error),

    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error("{failed} of {total} test case(s) failed")]
    TestsFailed { failed: usize, total: usize },

    #[error("{0}")]
    Other(String),
}

impl CompatError {
    pub fn invalid(api: impl ToString, version: RuntimeVersion, reason: impl Into<String>) -> Self {
        CompatError::InvalidOptions {
            api: api.to_string(),
            version,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CompatError>;
