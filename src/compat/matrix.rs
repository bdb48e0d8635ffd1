//! Which runtime API exists in which runtime version.
//!
//! APIs are never removed once introduced, so a single "since" version per
//! API describes the whole matrix.

use crate::core::{ApiFamily, RuntimeApiName, RuntimeVersion};
use crate::error::{CompatError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

pub fn introduced_in(api: RuntimeApiName) -> RuntimeVersion {
    use RuntimeApiName::*;

    match api {
        SetServer | GetServer | DeleteServer | SetCurrentServer | GetCurrentServer => {
            RuntimeVersion::V0116
        }
        IsFeatureEnabled | SetFeature => RuntimeVersion::V0116,

        SetContext | GetContext | DeleteContext | SetCurrentContext | GetCurrentContext => {
            RuntimeVersion::V0254
        }
        GetEnv | SetEnv | DeleteEnv | GetEnvConfigurations => RuntimeVersion::V0254,
        SetCliDiscoverySource | GetCliDiscoverySource | DeleteCliDiscoverySource => {
            RuntimeVersion::V0254
        }

        RemoveCurrentContext | RemoveCurrentServer | DeleteFeature => RuntimeVersion::V0280,
        GetConfigMetadata
        | GetConfigMetadataPatchStrategy
        | SetConfigMetadataPatchStrategy
        | GetConfigMetadataSettings
        | GetConfigMetadataSetting
        | SetConfigMetadataSetting => RuntimeVersion::V0280,

        IsConfigMetadataSettingsEnabled | DeleteConfigMetadataSetting => RuntimeVersion::V090,
    }
}

pub fn supports(api: RuntimeApiName, version: RuntimeVersion) -> bool {
    version.at_least(introduced_in(api))
}

pub fn ensure_supported(api: RuntimeApiName, version: RuntimeVersion) -> Result<()> {
    if supports(api, version) {
        Ok(())
    } else {
        Err(CompatError::UnsupportedApi {
            api,
            version,
            since: introduced_in(api),
        })
    }
}

pub fn supported_apis(version: RuntimeVersion) -> Vec<RuntimeApiName> {
    RuntimeApiName::ALL
        .iter()
        .copied()
        .filter(|api| supports(*api, version))
        .collect()
}

/// One line of the printed matrix.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixRow {
    pub api: RuntimeApiName,
    pub family: ApiFamily,
    pub since: RuntimeVersion,
    pub versions: BTreeMap<RuntimeVersion, bool>,
}

pub fn rows() -> Vec<MatrixRow> {
    RuntimeApiName::ALL.iter().copied().map(row).collect()
}

pub fn row(api: RuntimeApiName) -> MatrixRow {
    MatrixRow {
        api,
        family: api.family(),
        since: introduced_in(api),
        versions: RuntimeVersion::ALL
            .iter()
            .map(|v| (*v, supports(api, *v)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contexts_arrive_in_v0_25_4() {
        assert!(!supports(RuntimeApiName::SetContext, RuntimeVersion::V0116));
        assert!(supports(RuntimeApiName::SetContext, RuntimeVersion::V0254));
        assert!(supports(RuntimeApiName::GetContext, RuntimeVersion::Latest));
    }

    #[test]
    fn remove_current_apis_arrive_in_v0_28() {
        for api in [RuntimeApiName::RemoveCurrentContext, RuntimeApiName::RemoveCurrentServer] {
            assert!(!supports(api, RuntimeVersion::V0254));
            assert!(supports(api, RuntimeVersion::V0280));
        }
    }

    #[test]
    fn unsupported_pair_reports_since_version() {
        let err = ensure_supported(RuntimeApiName::DeleteConfigMetadataSetting, RuntimeVersion::V0280)
            .unwrap_err();
        match err {
            CompatError::UnsupportedApi { since, .. } => assert_eq!(since, RuntimeVersion::V090),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn latest_supports_everything() {
        assert_eq!(supported_apis(RuntimeVersion::Latest).len(), RuntimeApiName::ALL.len());
    }

    #[test]
    fn oldest_version_only_has_servers_and_features() {
        let apis = supported_apis(RuntimeVersion::V0116);
        assert!(
            apis.iter()
                .all(|api| matches!(api.family(), ApiFamily::Server | ApiFamily::Feature))
        );
        assert!(!apis.contains(&RuntimeApiName::RemoveCurrentServer));
        assert!(!apis.contains(&RuntimeApiName::DeleteFeature));
    }

    #[test]
    fn rows_cover_every_version() {
        let row = row(RuntimeApiName::GetEnv);
        assert_eq!(row.since, RuntimeVersion::V0254);
        assert_eq!(row.versions.len(), RuntimeVersion::ALL.len());
        assert!(!row.versions[&RuntimeVersion::V0116]);
        assert!(row.versions[&RuntimeVersion::V0254]);
    }
}
