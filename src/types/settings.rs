//! Metadata shapes and shared field checks for key/value APIs.

use crate::core::RuntimeVersion;
use crate::error::{CompatError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchStrategy {
    Replace,
    Merge,
}

impl fmt::Display for PatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace => f.write_str("replace"),
            Self::Merge => f.write_str("merge"),
        }
    }
}

/// The metadata document as returned by `GetConfigMetadata`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMetadata {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub patch_strategy: BTreeMap<String, PatchStrategy>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub settings: BTreeMap<String, String>,
}

pub(crate) fn require_non_empty(
    subject: &str,
    version: RuntimeVersion,
    field: &str,
    value: &str,
) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CompatError::invalid(
            subject,
            version,
            format!("{} is required", field),
        ));
    }
    Ok(())
}
