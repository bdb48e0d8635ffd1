use crate::core::RuntimeVersion;
use crate::types::PluginDiscoveryOpts;
use crate::types::settings::require_non_empty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetCliDiscoverySourceInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub discovery_source: PluginDiscoveryOpts,
}

impl SetCliDiscoverySourceInput {
    pub fn new(version: RuntimeVersion, source: PluginDiscoveryOpts) -> Self {
        Self {
            runtime_version: version,
            discovery_source: source,
        }
    }
}

api_input!(SetCliDiscoverySourceInput => SetCliDiscoverySource, |input| {
    input.discovery_source.validate(input.runtime_version)
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetCliDiscoverySourceInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub name: String,
}

impl GetCliDiscoverySourceInput {
    pub fn new(version: RuntimeVersion, name: &str) -> Self {
        Self {
            runtime_version: version,
            name: name.to_string(),
        }
    }
}

api_input!(GetCliDiscoverySourceInput => GetCliDiscoverySource, |input| {
    require_non_empty("GetCLIDiscoverySource", input.runtime_version, "name", &input.name)
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteCliDiscoverySourceInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub name: String,
}

impl DeleteCliDiscoverySourceInput {
    pub fn new(version: RuntimeVersion, name: &str) -> Self {
        Self {
            runtime_version: version,
            name: name.to_string(),
        }
    }
}

api_input!(DeleteCliDiscoverySourceInput => DeleteCliDiscoverySource, |input| {
    require_non_empty("DeleteCLIDiscoverySource", input.runtime_version, "name", &input.name)
});
