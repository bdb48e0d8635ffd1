//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values:
//! binary names, environment variable names and file names shared with the
//! test plugins.

use crate::core::RuntimeVersion;

pub const BINARY_NAME: &str = "runtime-compat";
pub const STABLE_PROJECT_ID: &str = "runtime-compat";
pub const CONFIG_DIR_NAME: &str = "runtime-compat";
pub const ENV_PREFIX: &str = "RUNTIME_COMPAT";
pub const SETTINGS_FILE_BASENAME: &str = "settings.kdl";

/// Prefix of every per-version test plugin binary.
pub const PLUGIN_BINARY_PREFIX: &str = "runtime-test-plugin";
/// Subcommand the test plugins expose for executing an API batch.
pub const PLUGIN_TEST_SUBCOMMAND: &str = "test";

/// Environment variables that point plugins at the fixture's config files.
pub const CONFIG_ENV: &str = "RUNTIME_CONFIG";
pub const CONFIG_NEXT_GEN_ENV: &str = "RUNTIME_CONFIG_NEXT_GEN";
pub const CONFIG_METADATA_ENV: &str = "RUNTIME_CONFIG_METADATA";

pub const CONFIG_FILE: &str = "config.yaml";
pub const CONFIG_NEXT_GEN_FILE: &str = "config-ng.yaml";
pub const CONFIG_METADATA_FILE: &str = "config-metadata.yaml";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

pub fn plugin_binary_name(version: RuntimeVersion) -> String {
    format!("{}-{}", PLUGIN_BINARY_PREFIX, version.plugin_suffix())
}
