use crate::core::{RuntimeApiName, RuntimeVersion};
use crate::error::{CompatError, Result};
use crate::types::settings::require_non_empty;
use crate::types::{ContextOpts, ContextType, Target};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetContextInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub context: ContextOpts,
    #[serde(default)]
    pub is_current: bool,
}

impl SetContextInput {
    pub fn new(version: RuntimeVersion, context: ContextOpts) -> Self {
        Self {
            runtime_version: version,
            context,
            is_current: false,
        }
    }

    pub fn current(mut self) -> Self {
        self.is_current = true;
        self
    }
}

api_input!(SetContextInput => SetContext, |input| {
    input.context.validate_for_write(input.runtime_version)
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetContextInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub context_name: String,
}

impl GetContextInput {
    pub fn new(version: RuntimeVersion, name: &str) -> Self {
        Self {
            runtime_version: version,
            context_name: name.to_string(),
        }
    }
}

api_input!(GetContextInput => GetContext, |input| {
    require_non_empty("GetContext", input.runtime_version, "contextName", &input.context_name)
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteContextInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub context_name: String,
}

impl DeleteContextInput {
    pub fn new(version: RuntimeVersion, name: &str) -> Self {
        Self {
            runtime_version: version,
            context_name: name.to_string(),
        }
    }
}

api_input!(DeleteContextInput => DeleteContext, |input| {
    require_non_empty("DeleteContext", input.runtime_version, "contextName", &input.context_name)
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetCurrentContextInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    pub context_name: String,
}

impl SetCurrentContextInput {
    pub fn new(version: RuntimeVersion, name: &str) -> Self {
        Self {
            runtime_version: version,
            context_name: name.to_string(),
        }
    }
}

api_input!(SetCurrentContextInput => SetCurrentContext, |input| {
    require_non_empty(
        "SetCurrentContext",
        input.runtime_version,
        "contextName",
        &input.context_name,
    )
});

/// Selects the current context by kind. v0.25.4 spells the kind as `type`,
/// later versions as `target`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetCurrentContextInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub context_type: Option<ContextType>,
}

impl GetCurrentContextInput {
    pub fn new(version: RuntimeVersion, target: Target) -> Self {
        let (target, context_type) = kind_fields(version, target);
        Self {
            runtime_version: version,
            target,
            context_type,
        }
    }
}

api_input!(GetCurrentContextInput => GetCurrentContext, |input| {
    validate_kind_selector(
        RuntimeApiName::GetCurrentContext,
        input.runtime_version,
        input.target,
        input.context_type,
    )
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RemoveCurrentContextInput {
    #[serde(skip)]
    pub runtime_version: RuntimeVersion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub context_type: Option<ContextType>,
}

impl RemoveCurrentContextInput {
    pub fn new(version: RuntimeVersion, target: Target) -> Self {
        let (target, context_type) = kind_fields(version, target);
        Self {
            runtime_version: version,
            target,
            context_type,
        }
    }
}

api_input!(RemoveCurrentContextInput => RemoveCurrentContext, |input| {
    validate_kind_selector(
        RuntimeApiName::RemoveCurrentContext,
        input.runtime_version,
        input.target,
        input.context_type,
    )
});

fn kind_fields(version: RuntimeVersion, target: Target) -> (Option<Target>, Option<ContextType>) {
    if version.at_least(RuntimeVersion::V0280) {
        (Some(target), None)
    } else {
        (None, Some(target.into()))
    }
}

fn validate_kind_selector(
    api: RuntimeApiName,
    version: RuntimeVersion,
    target: Option<Target>,
    context_type: Option<ContextType>,
) -> Result<()> {
    if version.at_least(RuntimeVersion::V0280) {
        if context_type.is_some() {
            return Err(CompatError::invalid(api, version, "argument 'type' was replaced by 'target'"));
        }
        if target.is_none() {
            return Err(CompatError::invalid(api, version, "argument 'target' is required"));
        }
    } else {
        if target.is_some() {
            return Err(CompatError::invalid(api, version, "argument 'target' is not supported, use 'type'"));
        }
        if context_type.is_none() {
            return Err(CompatError::invalid(api, version, "argument 'type' is required"));
        }
    }
    Ok(())
}
