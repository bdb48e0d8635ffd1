use crate::core::RuntimeVersion;
use crate::error::{CompatError, Result};
use serde::{Deserialize, Serialize};

/// Plugin discovery source attached to a context, a server, or registered
/// directly as a CLI discovery source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDiscoveryOpts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oci: Option<OciDiscoveryOpts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<LocalDiscoveryOpts>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OciDiscoveryOpts {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalDiscoveryOpts {
    pub name: String,
    pub path: String,
}

impl PluginDiscoveryOpts {
    pub fn oci(name: &str, image: &str) -> Self {
        Self {
            oci: Some(OciDiscoveryOpts {
                name: name.to_string(),
                image: image.to_string(),
            }),
            local: None,
        }
    }

    pub fn local(name: &str, path: &str) -> Self {
        Self {
            oci: None,
            local: Some(LocalDiscoveryOpts {
                name: name.to_string(),
                path: path.to_string(),
            }),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.oci
            .as_ref()
            .map(|o| o.name.as_str())
            .or_else(|| self.local.as_ref().map(|l| l.name.as_str()))
    }

    /// Local sources were dropped in v0.90.0.
    pub fn validate(&self, version: RuntimeVersion) -> Result<()> {
        let subject = "discovery source";
        match (&self.oci, &self.local) {
            (Some(_), Some(_)) => Err(CompatError::invalid(
                subject,
                version,
                "only one of 'oci' or 'local' may be set",
            )),
            (None, None) => Err(CompatError::invalid(
                subject,
                version,
                "one of 'oci' or 'local' is required",
            )),
            (Some(oci), None) => {
                if oci.name.trim().is_empty() {
                    return Err(CompatError::invalid(subject, version, "name is required"));
                }
                if oci.image.trim().is_empty() {
                    return Err(CompatError::invalid(subject, version, "oci image is required"));
                }
                Ok(())
            }
            (None, Some(local)) => {
                if version.at_least(RuntimeVersion::V090) {
                    return Err(CompatError::invalid(
                        subject,
                        version,
                        "local discovery sources are not supported",
                    ));
                }
                if local.name.trim().is_empty() {
                    return Err(CompatError::invalid(subject, version, "name is required"));
                }
                Ok(())
            }
        }
    }
}
