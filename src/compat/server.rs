use crate::core::RuntimeVersion;
use crate::types::ServerOpts;
use crate::types::settings::require_non_empty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetServerInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub server: ServerOpts,
    #[serde(default)]
    pub is_current: bool,
}

impl SetServerInput {
    pub fn new(version: RuntimeVersion, server: ServerOpts) -> Self {
        Self {
            runtime_version: version,
            server,
            is_current: false,
        }
    }

    pub fn current(mut self) -> Self {
        self.is_current = true;
        self
    }
}

api_input!(SetServerInput => SetServer, |input| input.server.validate(input.runtime_version));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetServerInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub server_name: String,
}

impl GetServerInput {
    pub fn new(version: RuntimeVersion, name: &str) -> Self {
        Self {
            runtime_version: version,
            server_name: name.to_string(),
        }
    }
}

api_input!(GetServerInput => GetServer, |input| {
    require_non_empty("GetServer", input.runtime_version, "serverName", &input.server_name)
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteServerInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub server_name: String,
}

impl DeleteServerInput {
    pub fn new(version: RuntimeVersion, name: &str) -> Self {
        Self {
            runtime_version: version,
            server_name: name.to_string(),
        }
    }
}

api_input!(DeleteServerInput => DeleteServer, |input| {
    require_non_empty("DeleteServer", input.runtime_version, "serverName", &input.server_name)
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetCurrentServerInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub server_name: String,
}

impl SetCurrentServerInput {
    pub fn new(version: RuntimeVersion, name: &str) -> Self {
        Self {
            runtime_version: version,
            server_name: name.to_string(),
        }
    }
}

api_input!(SetCurrentServerInput => SetCurrentServer, |input| {
    require_non_empty("SetCurrentServer", input.runtime_version, "serverName", &input.server_name)
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetCurrentServerInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
}

impl GetCurrentServerInput {
    pub fn new(version: RuntimeVersion) -> Self {
        Self {
            runtime_version: version,
        }
    }
}

api_input!(GetCurrentServerInput => GetCurrentServer);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RemoveCurrentServerInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub server_name: String,
}

impl RemoveCurrentServerInput {
    pub fn new(version: RuntimeVersion, name: &str) -> Self {
        Self {
            runtime_version: version,
            server_name: name.to_string(),
        }
    }
}

api_input!(RemoveCurrentServerInput => RemoveCurrentServer, |input| {
    require_non_empty(
        "RemoveCurrentServer",
        input.runtime_version,
        "serverName",
        &input.server_name,
    )
});
