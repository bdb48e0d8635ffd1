use crate::core::RuntimeVersion;
use crate::error::{CompatError, Result};
use crate::types::PluginDiscoveryOpts;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Context target, introduced in v0.28.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    #[serde(rename = "kubernetes", alias = "k8s")]
    Kubernetes,
    #[serde(rename = "mission-control", alias = "tmc")]
    MissionControl,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kubernetes => "kubernetes",
            Self::MissionControl => "mission-control",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = CompatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "kubernetes" | "k8s" => Ok(Self::Kubernetes),
            "mission-control" | "tmc" => Ok(Self::MissionControl),
            other => Err(CompatError::Other(format!("Unknown context target '{}'", other))),
        }
    }
}

/// Legacy context type used by v0.25.4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextType {
    K8s,
    Tmc,
}

impl ContextType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::K8s => "k8s",
            Self::Tmc => "tmc",
        }
    }
}

impl fmt::Display for ContextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Target> for ContextType {
    fn from(target: Target) -> Self {
        match target {
            Target::Kubernetes => Self::K8s,
            Target::MissionControl => Self::Tmc,
        }
    }
}

impl From<ContextType> for Target {
    fn from(ty: ContextType) -> Self {
        match ty {
            ContextType::K8s => Self::Kubernetes,
            ContextType::Tmc => Self::MissionControl,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalServerOpts {
    pub endpoint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServerOpts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_management_cluster: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextOpts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub context_type: Option<ContextType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_opts: Option<GlobalServerOpts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_opts: Option<ClusterServerOpts>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discovery_sources: Vec<PluginDiscoveryOpts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_metadata: Option<Map<String, Value>>,
}

impl ContextOpts {
    /// A context shaped the way `version` spells its kind field.
    pub fn for_version(name: &str, target: Target, version: RuntimeVersion) -> Self {
        let mut opts = Self {
            name: Some(name.to_string()),
            ..Default::default()
        };
        if version.at_least(RuntimeVersion::V0280) {
            opts.target = Some(target);
        } else {
            opts.context_type = Some(target.into());
        }
        opts
    }

    pub fn with_cluster(mut self, cluster: ClusterServerOpts) -> Self {
        self.cluster_opts = Some(cluster);
        self
    }

    pub fn with_global(mut self, endpoint: &str) -> Self {
        self.global_opts = Some(GlobalServerOpts {
            endpoint: endpoint.to_string(),
        });
        self
    }

    /// The kind of this context regardless of which field spells it.
    pub fn kind(&self) -> Option<Target> {
        self.target.or(self.context_type.map(Target::from))
    }

    pub fn validate(&self, version: RuntimeVersion) -> Result<()> {
        match &self.name {
            Some(name) if !name.trim().is_empty() => {}
            _ => return Err(CompatError::invalid("context", version, "name is required")),
        }
        self.validate_fields(version)
    }

    /// Field presence rules only; nothing is required.
    pub fn validate_fields(&self, version: RuntimeVersion) -> Result<()> {
        let subject = "context";

        if version.at_least(RuntimeVersion::V0280) {
            if self.context_type.is_some() {
                return Err(CompatError::invalid(
                    subject,
                    version,
                    "field 'type' was replaced by 'target'",
                ));
            }
        } else if self.target.is_some() {
            return Err(CompatError::invalid(
                subject,
                version,
                "field 'target' is not supported, use 'type'",
            ));
        }

        match (&self.global_opts, &self.cluster_opts) {
            (Some(_), Some(_)) => {
                return Err(CompatError::invalid(
                    subject,
                    version,
                    "only one of 'globalOpts' or 'clusterOpts' may be set",
                ));
            }
            (Some(global), None) if global.endpoint.trim().is_empty() => {
                return Err(CompatError::invalid(subject, version, "global endpoint is required"));
            }
            _ => {}
        }

        if self.additional_metadata.is_some() && !version.at_least(RuntimeVersion::V102) {
            return Err(CompatError::invalid(
                subject,
                version,
                "field 'additionalMetadata' is not supported",
            ));
        }

        for source in &self.discovery_sources {
            source.validate(version)?;
        }

        Ok(())
    }

    /// Like [`validate`](Self::validate) but also insists on the version's kind field.
    pub fn validate_for_write(&self, version: RuntimeVersion) -> Result<()> {
        self.validate(version)?;
        if self.global_opts.is_none() && self.cluster_opts.is_none() {
            return Err(CompatError::invalid(
                "context",
                version,
                "one of 'globalOpts' or 'clusterOpts' is required",
            ));
        }
        if version.at_least(RuntimeVersion::V0280) {
            if self.target.is_none() {
                return Err(CompatError::invalid("context", version, "field 'target' is required"));
            }
        } else if self.context_type.is_none() {
            return Err(CompatError::invalid("context", version, "field 'type' is required"));
        }
        Ok(())
    }
}
