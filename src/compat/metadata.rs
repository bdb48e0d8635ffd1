use crate::core::RuntimeVersion;
use crate::types::PatchStrategy;
use crate::types::settings::require_non_empty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetConfigMetadataInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
}

impl GetConfigMetadataInput {
    pub fn new(version: RuntimeVersion) -> Self {
        Self {
            runtime_version: version,
        }
    }
}

api_input!(GetConfigMetadataInput => GetConfigMetadata);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetConfigMetadataPatchStrategyInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
}

impl GetConfigMetadataPatchStrategyInput {
    pub fn new(version: RuntimeVersion) -> Self {
        Self {
            runtime_version: version,
        }
    }
}

api_input!(GetConfigMetadataPatchStrategyInput => GetConfigMetadataPatchStrategy);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetConfigMetadataPatchStrategyInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub key: String,
    pub value: PatchStrategy,
}

impl SetConfigMetadataPatchStrategyInput {
    pub fn new(version: RuntimeVersion, key: &str, value: PatchStrategy) -> Self {
        Self {
            runtime_version: version,
            key: key.to_string(),
            value,
        }
    }
}

api_input!(SetConfigMetadataPatchStrategyInput => SetConfigMetadataPatchStrategy, |input| {
    require_non_empty(
        "SetConfigMetadataPatchStrategy",
        input.runtime_version,
        "key",
        &input.key,
    )
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetConfigMetadataSettingsInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
}

impl GetConfigMetadataSettingsInput {
    pub fn new(version: RuntimeVersion) -> Self {
        Self {
            runtime_version: version,
        }
    }
}

api_input!(GetConfigMetadataSettingsInput => GetConfigMetadataSettings);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetConfigMetadataSettingInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub key: String,
}

impl GetConfigMetadataSettingInput {
    pub fn new(version: RuntimeVersion, key: &str) -> Self {
        Self {
            runtime_version: version,
            key: key.to_string(),
        }
    }
}

api_input!(GetConfigMetadataSettingInput => GetConfigMetadataSetting, |input| {
    require_non_empty("GetConfigMetadataSetting", input.runtime_version, "key", &input.key)
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IsConfigMetadataSettingsEnabledInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub key: String,
}

impl IsConfigMetadataSettingsEnabledInput {
    pub fn new(version: RuntimeVersion, key: &str) -> Self {
        Self {
            runtime_version: version,
            key: key.to_string(),
        }
    }
}

api_input!(IsConfigMetadataSettingsEnabledInput => IsConfigMetadataSettingsEnabled, |input| {
    require_non_empty(
        "IsConfigMetadataSettingsEnabled",
        input.runtime_version,
        "key",
        &input.key,
    )
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetConfigMetadataSettingInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl SetConfigMetadataSettingInput {
    pub fn new(version: RuntimeVersion, key: &str, value: &str) -> Self {
        Self {
            runtime_version: version,
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

api_input!(SetConfigMetadataSettingInput => SetConfigMetadataSetting, |input| {
    require_non_empty("SetConfigMetadataSetting", input.runtime_version, "key", &input.key)
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteConfigMetadataSettingInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub key: String,
}

impl DeleteConfigMetadataSettingInput {
    pub fn new(version: RuntimeVersion, key: &str) -> Self {
        Self {
            runtime_version: version,
            key: key.to_string(),
        }
    }
}

api_input!(DeleteConfigMetadataSettingInput => DeleteConfigMetadataSetting, |input| {
    require_non_empty("DeleteConfigMetadataSetting", input.runtime_version, "key", &input.key)
});
