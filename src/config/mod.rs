//! Effective harness configuration.
//!
//! Precedence: command-line flags, then `RUNTIME_COMPAT_<KEY>` environment
//! variables, then `settings.kdl`, then built-in defaults.

pub mod settings;

use crate::error::{CompatError, Result};
use crate::framework::{Executor, PluginLocator};
use crate::project_identity;
use crate::utils::paths;
use settings::Settings;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => Err(CompatError::Settings(format!(
                "Unknown output format '{}'. Valid: table, json, yaml",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    pub fn is_machine(&self) -> bool {
        !matches!(self, Self::Table)
    }
}

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub plugin_dir: Option<PathBuf>,
    pub timeout: Duration,
    pub fail_fast: bool,
    pub keep_fixtures: bool,
    pub color: String,
    pub format: OutputFormat,
    pub launcher: String,
}

impl HarnessConfig {
    /// Settings file plus the process environment.
    pub fn load() -> Result<Self> {
        let settings = Settings::load()?;
        Self::resolve(&settings, |key| {
            std::env::var(project_identity::env_key(&key.to_uppercase())).ok()
        })
    }

    /// Merge `settings` with overrides from `env`, which maps a setting key to its value.
    pub fn resolve<F>(settings: &Settings, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| -> Result<String> {
            if let Some(raw) = env(key) {
                settings::validate_value(key, &raw).map_err(|e| {
                    CompatError::Settings(format!(
                        "{} (from {})",
                        e,
                        project_identity::env_key(&key.to_uppercase())
                    ))
                })?;
                return Ok(raw);
            }
            Ok(settings.get(key).unwrap_or_default().to_string())
        };

        let plugin_dir = value("plugin_dir")?;
        let plugin_dir = if plugin_dir.trim().is_empty() {
            None
        } else {
            Some(paths::expand_home(Path::new(plugin_dir.trim()))?)
        };

        let timeout = value("timeout")?
            .parse::<u64>()
            .map_err(|e| CompatError::Settings(format!("Invalid timeout: {}", e)))?;

        Ok(Self {
            plugin_dir,
            timeout: Duration::from_secs(timeout),
            fail_fast: value("fail_fast")? != "false",
            keep_fixtures: value("keep_fixtures")? == "true",
            color: value("color")?,
            format: OutputFormat::parse(&value("format")?)?,
            launcher: value("launcher")?,
        })
    }

    pub fn locator(&self) -> Result<PluginLocator> {
        PluginLocator::new(self.plugin_dir.clone()).with_launcher(&self.launcher)
    }

    pub fn executor(&self) -> Result<Executor> {
        Ok(Executor::new(self.locator()?)
            .with_timeout(self.timeout)
            .with_fail_fast(self.fail_fast)
            .with_keep_fixtures(self.keep_fixtures))
    }
}
