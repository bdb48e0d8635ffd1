use crate::core::RuntimeVersion;
use crate::error::{CompatError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Every configuration API a test plugin can be asked to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuntimeApiName {
    SetContext,
    GetContext,
    DeleteContext,
    SetCurrentContext,
    GetCurrentContext,
    RemoveCurrentContext,
    SetServer,
    GetServer,
    DeleteServer,
    SetCurrentServer,
    GetCurrentServer,
    RemoveCurrentServer,
    IsFeatureEnabled,
    SetFeature,
    DeleteFeature,
    GetEnv,
    SetEnv,
    DeleteEnv,
    GetEnvConfigurations,
    #[serde(rename = "SetCLIDiscoverySource")]
    SetCliDiscoverySource,
    #[serde(rename = "GetCLIDiscoverySource")]
    GetCliDiscoverySource,
    #[serde(rename = "DeleteCLIDiscoverySource")]
    DeleteCliDiscoverySource,
    GetConfigMetadata,
    GetConfigMetadataPatchStrategy,
    SetConfigMetadataPatchStrategy,
    GetConfigMetadataSettings,
    GetConfigMetadataSetting,
    IsConfigMetadataSettingsEnabled,
    SetConfigMetadataSetting,
    DeleteConfigMetadataSetting,
}

/// Grouping used by the matrix and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiFamily {
    Context,
    Server,
    Feature,
    Env,
    Discovery,
    Metadata,
}

impl fmt::Display for ApiFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Context => "context",
            Self::Server => "server",
            Self::Feature => "feature",
            Self::Env => "env",
            Self::Discovery => "discovery",
            Self::Metadata => "metadata",
        };
        f.write_str(name)
    }
}

impl RuntimeApiName {
    pub const ALL: [RuntimeApiName; 30] = [
        Self::SetContext,
        Self::GetContext,
        Self::DeleteContext,
        Self::SetCurrentContext,
        Self::GetCurrentContext,
        Self::RemoveCurrentContext,
        Self::SetServer,
        Self::GetServer,
        Self::DeleteServer,
        Self::SetCurrentServer,
        Self::GetCurrentServer,
        Self::RemoveCurrentServer,
        Self::IsFeatureEnabled,
        Self::SetFeature,
        Self::DeleteFeature,
        Self::GetEnv,
        Self::SetEnv,
        Self::DeleteEnv,
        Self::GetEnvConfigurations,
        Self::SetCliDiscoverySource,
        Self::GetCliDiscoverySource,
        Self::DeleteCliDiscoverySource,
        Self::GetConfigMetadata,
        Self::GetConfigMetadataPatchStrategy,
        Self::SetConfigMetadataPatchStrategy,
        Self::GetConfigMetadataSettings,
        Self::GetConfigMetadataSetting,
        Self::IsConfigMetadataSettingsEnabled,
        Self::SetConfigMetadataSetting,
        Self::DeleteConfigMetadataSetting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SetContext => "SetContext",
            Self::GetContext => "GetContext",
            Self::DeleteContext => "DeleteContext",
            Self::SetCurrentContext => "SetCurrentContext",
            Self::GetCurrentContext => "GetCurrentContext",
            Self::RemoveCurrentContext => "RemoveCurrentContext",
            Self::SetServer => "SetServer",
            Self::GetServer => "GetServer",
            Self::DeleteServer => "DeleteServer",
            Self::SetCurrentServer => "SetCurrentServer",
            Self::GetCurrentServer => "GetCurrentServer",
            Self::RemoveCurrentServer => "RemoveCurrentServer",
            Self::IsFeatureEnabled => "IsFeatureEnabled",
            Self::SetFeature => "SetFeature",
            Self::DeleteFeature => "DeleteFeature",
            Self::GetEnv => "GetEnv",
            Self::SetEnv => "SetEnv",
            Self::DeleteEnv => "DeleteEnv",
            Self::GetEnvConfigurations => "GetEnvConfigurations",
            Self::SetCliDiscoverySource => "SetCLIDiscoverySource",
            Self::GetCliDiscoverySource => "GetCLIDiscoverySource",
            Self::DeleteCliDiscoverySource => "DeleteCLIDiscoverySource",
            Self::GetConfigMetadata => "GetConfigMetadata",
            Self::GetConfigMetadataPatchStrategy => "GetConfigMetadataPatchStrategy",
            Self::SetConfigMetadataPatchStrategy => "SetConfigMetadataPatchStrategy",
            Self::GetConfigMetadataSettings => "GetConfigMetadataSettings",
            Self::GetConfigMetadataSetting => "GetConfigMetadataSetting",
            Self::IsConfigMetadataSettingsEnabled => "IsConfigMetadataSettingsEnabled",
            Self::SetConfigMetadataSetting => "SetConfigMetadataSetting",
            Self::DeleteConfigMetadataSetting => "DeleteConfigMetadataSetting",
        }
    }

    pub fn family(&self) -> ApiFamily {
        match self {
            Self::SetContext
            | Self::GetContext
            | Self::DeleteContext
            | Self::SetCurrentContext
            | Self::GetCurrentContext
            | Self::RemoveCurrentContext => ApiFamily::Context,
            Self::SetServer
            | Self::GetServer
            | Self::DeleteServer
            | Self::SetCurrentServer
            | Self::GetCurrentServer
            | Self::RemoveCurrentServer => ApiFamily::Server,
            Self::IsFeatureEnabled | Self::SetFeature | Self::DeleteFeature => ApiFamily::Feature,
            Self::GetEnv | Self::SetEnv | Self::DeleteEnv | Self::GetEnvConfigurations => {
                ApiFamily::Env
            }
            Self::SetCliDiscoverySource
            | Self::GetCliDiscoverySource
            | Self::DeleteCliDiscoverySource => ApiFamily::Discovery,
            Self::GetConfigMetadata
            | Self::GetConfigMetadataPatchStrategy
            | Self::SetConfigMetadataPatchStrategy
            | Self::GetConfigMetadataSettings
            | Self::GetConfigMetadataSetting
            | Self::IsConfigMetadataSettingsEnabled
            | Self::SetConfigMetadataSetting
            | Self::DeleteConfigMetadataSetting => ApiFamily::Metadata,
        }
    }
}

impl fmt::Display for RuntimeApiName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuntimeApiName {
    type Err = CompatError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|api| api.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CompatError::UnknownApi(wanted.to_string()))
    }
}

/// Whether the plugin is expected to succeed or return an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiResult {
    #[default]
    Success,
    Failed,
}

/// How expected content is compared with what the plugin returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStrategy {
    /// Subset match: every expected field must be present and equal.
    #[default]
    #[serde(alias = "default")]
    Lenient,
    /// Exact match.
    Strict,
}

impl fmt::Display for ValidationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => f.write_str("lenient"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Expected outcome of one API invocation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    #[serde(default)]
    pub validation_strategy: ValidationStrategy,
    #[serde(default)]
    pub result: ApiResult,
    #[serde(default)]
    pub content: Value,
}

impl Output {
    pub fn success(content: Value) -> Self {
        Self {
            result: ApiResult::Success,
            content,
            ..Default::default()
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            result: ApiResult::Failed,
            content: Value::String(error.into()),
            ..Default::default()
        }
    }

    pub fn with_strategy(mut self, strategy: ValidationStrategy) -> Self {
        self.validation_strategy = strategy;
        self
    }
}

/// A single versioned API invocation, as written to the plugin's input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Api {
    pub name: RuntimeApiName,
    pub version: RuntimeVersion,
    #[serde(default)]
    pub arguments: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Output>,
}

impl Api {
    pub fn new(name: RuntimeApiName, version: RuntimeVersion) -> Self {
        Self {
            name,
            version,
            arguments: Map::new(),
            output: None,
        }
    }

    pub fn with_argument(mut self, key: &str, value: Value) -> Self {
        self.arguments.insert(key.to_string(), value);
        self
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = Some(output);
        self
    }
}

/// An ordered group of API invocations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Command {
    pub apis: Vec<Api>,
}

impl Command {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(api: Api) -> Self {
        Self { apis: vec![api] }
    }

    pub fn add(&mut self, api: Api) -> &mut Self {
        self.apis.push(api);
        self
    }

    /// Split into runs of consecutive APIs targeting the same runtime version.
    ///
    /// Each run is sent to one plugin process; order is preserved.
    pub fn version_batches(&self) -> Vec<(RuntimeVersion, &[Api])> {
        let mut batches = Vec::new();
        let mut start = 0;
        for i in 1..=self.apis.len() {
            if i == self.apis.len() || self.apis[i].version != self.apis[start].version {
                batches.push((self.apis[start].version, &self.apis[start..i]));
                start = i;
            }
        }
        batches
    }
}
