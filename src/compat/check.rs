//! Validation of APIs that arrive untyped, e.g. from suite files.

use super::*;
use crate::core::ApiResult;
use serde::de::DeserializeOwned;

/// Apply the same version rules [`build_api`] enforces to an already built [`Api`].
pub fn check_api(api: &Api) -> Result<()> {
    use RuntimeApiName::*;

    matrix::ensure_supported(api.name, api.version)?;

    match api.name {
        SetContext => check_typed::<SetContextInput, ()>(api),
        GetContext => check_typed::<GetContextInput, ContextOpts>(api),
        DeleteContext => check_typed::<DeleteContextInput, ()>(api),
        SetCurrentContext => check_typed::<SetCurrentContextInput, ()>(api),
        GetCurrentContext => check_typed::<GetCurrentContextInput, ContextOpts>(api),
        RemoveCurrentContext => check_typed::<RemoveCurrentContextInput, ()>(api),

        SetServer => check_typed::<SetServerInput, ()>(api),
        GetServer => check_typed::<GetServerInput, ServerOpts>(api),
        DeleteServer => check_typed::<DeleteServerInput, ()>(api),
        SetCurrentServer => check_typed::<SetCurrentServerInput, ()>(api),
        GetCurrentServer => check_typed::<GetCurrentServerInput, ServerOpts>(api),
        RemoveCurrentServer => check_typed::<RemoveCurrentServerInput, ()>(api),

        IsFeatureEnabled => check_typed::<IsFeatureEnabledInput, bool>(api),
        SetFeature => check_typed::<SetFeatureInput, ()>(api),
        DeleteFeature => check_typed::<DeleteFeatureInput, ()>(api),

        GetEnv => check_typed::<GetEnvInput, String>(api),
        SetEnv => check_typed::<SetEnvInput, ()>(api),
        DeleteEnv => check_typed::<DeleteEnvInput, ()>(api),
        GetEnvConfigurations => {
            check_typed::<GetEnvConfigurationsInput, BTreeMap<String, String>>(api)
        }

        SetCliDiscoverySource => check_typed::<SetCliDiscoverySourceInput, ()>(api),
        GetCliDiscoverySource => check_typed::<GetCliDiscoverySourceInput, PluginDiscoveryOpts>(api),
        DeleteCliDiscoverySource => check_typed::<DeleteCliDiscoverySourceInput, ()>(api),

        GetConfigMetadata => check_typed::<GetConfigMetadataInput, ConfigMetadata>(api),
        GetConfigMetadataPatchStrategy => check_typed::<
            GetConfigMetadataPatchStrategyInput,
            BTreeMap<String, PatchStrategy>,
        >(api),
        SetConfigMetadataPatchStrategy => {
            check_typed::<SetConfigMetadataPatchStrategyInput, ()>(api)
        }
        GetConfigMetadataSettings => {
            check_typed::<GetConfigMetadataSettingsInput, BTreeMap<String, String>>(api)
        }
        GetConfigMetadataSetting => check_typed::<GetConfigMetadataSettingInput, String>(api),
        IsConfigMetadataSettingsEnabled => {
            check_typed::<IsConfigMetadataSettingsEnabledInput, bool>(api)
        }
        SetConfigMetadataSetting => check_typed::<SetConfigMetadataSettingInput, ()>(api),
        DeleteConfigMetadataSetting => check_typed::<DeleteConfigMetadataSettingInput, ()>(api),
    }
}

fn check_typed<I, C>(api: &Api) -> Result<()>
where
    I: ApiInput + DeserializeOwned,
    C: ApiContent + DeserializeOwned,
{
    let mut input: I = serde_json::from_value(Value::Object(api.arguments.clone()))
        .map_err(|e| CompatError::invalid(api.name, api.version, format!("arguments: {}", e)))?;
    input.set_runtime_version(api.version);
    input.validate()?;

    let Some(output) = &api.output else {
        return Ok(());
    };

    match output.result {
        ApiResult::Failed => match &output.content {
            Value::String(_) => Ok(()),
            _ => Err(CompatError::invalid(
                api.name,
                api.version,
                "a failed result must carry the expected error text as content",
            )),
        },
        ApiResult::Success if output.content.is_null() => Ok(()),
        ApiResult::Success => {
            let content: C = serde_json::from_value(output.content.clone()).map_err(|e| {
                CompatError::invalid(api.name, api.version, format!("expected content: {}", e))
            })?;
            content.validate_for(api.version)
        }
    }
}
