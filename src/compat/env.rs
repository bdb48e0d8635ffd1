use crate::core::RuntimeVersion;
use crate::types::settings::require_non_empty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetEnvInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub key: String,
}

impl GetEnvInput {
    pub fn new(version: RuntimeVersion, key: &str) -> Self {
        Self {
            runtime_version: version,
            key: key.to_string(),
        }
    }
}

api_input!(GetEnvInput => GetEnv, |input| {
    require_non_empty("GetEnv", input.runtime_version, "key", &input.key)
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetEnvInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl SetEnvInput {
    pub fn new(version: RuntimeVersion, key: &str, value: &str) -> Self {
        Self {
            runtime_version: version,
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

api_input!(SetEnvInput => SetEnv, |input| {
    require_non_empty("SetEnv", input.runtime_version, "key", &input.key)
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteEnvInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub key: String,
}

impl DeleteEnvInput {
    pub fn new(version: RuntimeVersion, key: &str) -> Self {
        Self {
            runtime_version: version,
            key: key.to_string(),
        }
    }
}

api_input!(DeleteEnvInput => DeleteEnv, |input| {
    require_non_empty("DeleteEnv", input.runtime_version, "key", &input.key)
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetEnvConfigurationsInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
}

impl GetEnvConfigurationsInput {
    pub fn new(version: RuntimeVersion) -> Self {
        Self {
            runtime_version: version,
        }
    }
}

api_input!(GetEnvConfigurationsInput => GetEnvConfigurations);
