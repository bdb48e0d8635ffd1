use crate::core::RuntimeVersion;
use crate::types::settings::require_non_empty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IsFeatureEnabledInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub plugin: String,
    pub key: String,
}

impl IsFeatureEnabledInput {
    pub fn new(version: RuntimeVersion, plugin: &str, key: &str) -> Self {
        Self {
            runtime_version: version,
            plugin: plugin.to_string(),
            key: key.to_string(),
        }
    }
}

api_input!(IsFeatureEnabledInput => IsFeatureEnabled, |input| {
    require_non_empty("IsFeatureEnabled", input.runtime_version, "plugin", &input.plugin)?;
    require_non_empty("IsFeatureEnabled", input.runtime_version, "key", &input.key)
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetFeatureInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub plugin: String,
    pub key: String,
    #[serde(default)]
    pub value: bool,
}

impl SetFeatureInput {
    pub fn new(version: RuntimeVersion, plugin: &str, key: &str, value: bool) -> Self {
        Self {
            runtime_version: version,
            plugin: plugin.to_string(),
            key: key.to_string(),
            value,
        }
    }
}

api_input!(SetFeatureInput => SetFeature, |input| {
    require_non_empty("SetFeature", input.runtime_version, "plugin", &input.plugin)?;
    require_non_empty("SetFeature", input.runtime_version, "key", &input.key)
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteFeatureInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub plugin: String,
    pub key: String,
}

impl DeleteFeatureInput {
    pub fn new(version: RuntimeVersion, plugin: &str, key: &str) -> Self {
        Self {
            runtime_version: version,
            plugin: plugin.to_string(),
            key: key.to_string(),
        }
    }
}

api_input!(DeleteFeatureInput => DeleteFeature, |input| {
    require_non_empty("DeleteFeature", input.runtime_version, "plugin", &input.plugin)?;
    require_non_empty("DeleteFeature", input.runtime_version, "key", &input.key)
});
