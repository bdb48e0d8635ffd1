//! Per-version command builders
//!
//! Every runtime API has a typed input struct that knows its runtime version.
//! [`build_api`] turns an input plus an [`ExpectedOutput`] into a wire-level
//! [`Api`], enforcing the compatibility matrix and the field rules of that
//! version on the way.

use crate::core::{Api, Command, Output, RuntimeApiName, RuntimeVersion, ValidationStrategy};
use crate::error::{CompatError, Result};
use crate::types::{ConfigMetadata, ContextOpts, PatchStrategy, PluginDiscoveryOpts, ServerOpts};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

macro_rules! api_input {
    ($input:ty => $api:ident $(, |$s:ident| $validate:expr)?) => {
        impl $crate::compat::ApiInput for $input {
            const API: $crate::core::RuntimeApiName = $crate::core::RuntimeApiName::$api;

            fn runtime_version(&self) -> $crate::core::RuntimeVersion {
                self.runtime_version
            }

            fn set_runtime_version(&mut self, version: $crate::core::RuntimeVersion) {
                self.runtime_version = version;
            }

            $(
                fn validate(&self) -> $crate::error::Result<()> {
                    let $s = self;
                    $validate
                }
            )?
        }
    };
}

pub mod check;
pub mod context;
pub mod discovery;
pub mod env;
pub mod errors;
pub mod feature;
pub mod matrix;
pub mod metadata;
pub mod server;

pub use check::check_api;
pub use context::*;
pub use discovery::*;
pub use env::*;
pub use feature::*;
pub use metadata::*;
pub use server::*;

/// Input options of one runtime API.
///
/// The serialized form of the struct, minus its runtime version, is the
/// argument map handed to the plugin.
pub trait ApiInput: Serialize {
    const API: RuntimeApiName;

    fn runtime_version(&self) -> RuntimeVersion;

    fn set_runtime_version(&mut self, version: RuntimeVersion);

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn arguments(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(Map::new()),
            other => Err(CompatError::invalid(
                Self::API,
                self.runtime_version(),
                format!("arguments must serialize to a map, got {}", other),
            )),
        }
    }
}

/// Content a successful API call is expected to return.
pub trait ApiContent: Serialize {
    fn validate_for(&self, _version: RuntimeVersion) -> Result<()> {
        Ok(())
    }
}

impl ApiContent for () {}
impl ApiContent for bool {}
impl ApiContent for String {}
impl ApiContent for Value {}
impl ApiContent for BTreeMap<String, String> {}
impl ApiContent for BTreeMap<String, PatchStrategy> {}
impl ApiContent for ConfigMetadata {}

impl ApiContent for ContextOpts {
    fn validate_for(&self, version: RuntimeVersion) -> Result<()> {
        self.validate_fields(version)
    }
}

impl ApiContent for ServerOpts {
    fn validate_for(&self, version: RuntimeVersion) -> Result<()> {
        self.discovery_sources
            .iter()
            .try_for_each(|source| source.validate(version))
    }
}

impl ApiContent for PluginDiscoveryOpts {
    fn validate_for(&self, version: RuntimeVersion) -> Result<()> {
        if self.local.is_some() && version.at_least(RuntimeVersion::V090) {
            return Err(CompatError::invalid(
                "discovery source",
                version,
                "local discovery sources are not supported",
            ));
        }
        Ok(())
    }
}

/// What the test expects back from one API call.
#[derive(Debug, Clone)]
pub struct ExpectedOutput<T = ()> {
    pub content: Option<T>,
    pub error: Option<String>,
    pub validation_strategy: ValidationStrategy,
}

impl<T> Default for ExpectedOutput<T> {
    fn default() -> Self {
        Self {
            content: None,
            error: None,
            validation_strategy: ValidationStrategy::default(),
        }
    }
}

impl ExpectedOutput<()> {
    /// Success with no content check.
    pub fn ok() -> Self {
        Self::default()
    }
}

impl<T: ApiContent> ExpectedOutput<T> {
    pub fn success(content: T) -> Self {
        Self {
            content: Some(content),
            ..Default::default()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn strict(mut self) -> Self {
        self.validation_strategy = ValidationStrategy::Strict;
        self
    }

    fn to_output(&self, api: RuntimeApiName, version: RuntimeVersion) -> Result<Output> {
        let output = match (&self.error, &self.content) {
            (Some(_), Some(_)) => {
                return Err(CompatError::invalid(
                    api,
                    version,
                    "expected output cannot carry both content and an error",
                ));
            }
            (Some(error), None) => Output::failed(error.clone()),
            (None, Some(content)) => {
                content.validate_for(version)?;
                Output::success(serde_json::to_value(content)?)
            }
            (None, None) => Output::success(Value::Null),
        };
        Ok(output.with_strategy(self.validation_strategy))
    }
}

/// Build one API invocation from typed input and expected output.
pub fn build_api<I, T>(input: &I, expected: &ExpectedOutput<T>) -> Result<Api>
where
    I: ApiInput,
    T: ApiContent,
{
    let mut api = build_unchecked(input)?;
    api.output = Some(expected.to_output(I::API, input.runtime_version())?);
    Ok(api)
}

/// Build an API invocation whose result is not validated.
pub fn build_unchecked<I: ApiInput>(input: &I) -> Result<Api> {
    let version = input.runtime_version();
    matrix::ensure_supported(I::API, version)?;
    input.validate()?;

    Ok(Api {
        name: I::API,
        version,
        arguments: input.arguments()?,
        output: None,
    })
}

/// Single-API command, the common case in test cases.
pub fn command<I, T>(input: &I, expected: &ExpectedOutput<T>) -> Result<Command>
where
    I: ApiInput,
    T: ApiContent,
{
    Ok(Command::single(build_api(input, expected)?))
}

#[cfg(test)]
mod tests;
