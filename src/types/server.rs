use crate::core::RuntimeVersion;
use crate::error::{CompatError, Result};
use crate::types::{GlobalServerOpts, PluginDiscoveryOpts};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerType {
    ManagementCluster,
    Global,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagementClusterOpts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerOpts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub server_type: Option<ServerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_opts: Option<GlobalServerOpts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management_cluster_opts: Option<ManagementClusterOpts>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discovery_sources: Vec<PluginDiscoveryOpts>,
}

impl ServerOpts {
    pub fn management_cluster(name: &str, opts: ManagementClusterOpts) -> Self {
        Self {
            name: Some(name.to_string()),
            server_type: Some(ServerType::ManagementCluster),
            management_cluster_opts: Some(opts),
            ..Default::default()
        }
    }

    pub fn global(name: &str, endpoint: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            server_type: Some(ServerType::Global),
            global_opts: Some(GlobalServerOpts {
                endpoint: endpoint.to_string(),
            }),
            ..Default::default()
        }
    }

    pub fn validate(&self, version: RuntimeVersion) -> Result<()> {
        let subject = "server";

        match &self.name {
            Some(name) if !name.trim().is_empty() => {}
            _ => return Err(CompatError::invalid(subject, version, "name is required")),
        }

        match self.server_type {
            None => return Err(CompatError::invalid(subject, version, "field 'type' is required")),
            Some(ServerType::ManagementCluster) => {
                if self.management_cluster_opts.is_none() {
                    return Err(CompatError::invalid(
                        subject,
                        version,
                        "managementcluster servers require 'managementClusterOpts'",
                    ));
                }
                if self.global_opts.is_some() {
                    return Err(CompatError::invalid(
                        subject,
                        version,
                        "managementcluster servers cannot set 'globalOpts'",
                    ));
                }
            }
            Some(ServerType::Global) => {
                if self.global_opts.is_none() {
                    return Err(CompatError::invalid(
                        subject,
                        version,
                        "global servers require 'globalOpts'",
                    ));
                }
                if self.management_cluster_opts.is_some() {
                    return Err(CompatError::invalid(
                        subject,
                        version,
                        "global servers cannot set 'managementClusterOpts'",
                    ));
                }
            }
        }

        for source in &self.discovery_sources {
            source.validate(version)?;
        }

        Ok(())
    }
}
