//! Lookup of the per-version test plugin binaries.

use crate::core::RuntimeVersion;
use crate::error::{CompatError, Result};
use crate::project_identity;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, Default)]
pub struct PluginLocator {
    plugin_dir: Option<PathBuf>,
    launcher: Vec<String>,
}

impl PluginLocator {
    pub fn new(plugin_dir: Option<PathBuf>) -> Self {
        Self {
            plugin_dir,
            launcher: Vec::new(),
        }
    }

    /// Prefix every plugin invocation with `launcher`, split with shell quoting.
    pub fn with_launcher(mut self, launcher: &str) -> Result<Self> {
        if launcher.trim().is_empty() {
            self.launcher.clear();
            return Ok(self);
        }
        self.launcher = shlex::split(launcher).ok_or_else(|| {
            CompatError::Settings(format!("launcher has unbalanced quoting: {}", launcher))
        })?;
        Ok(self)
    }

    pub fn plugin_dir(&self) -> Option<&Path> {
        self.plugin_dir.as_deref()
    }

    /// Plugin directory first, then `PATH`.
    pub fn resolve(&self, version: RuntimeVersion) -> Result<PathBuf> {
        let binary = project_identity::plugin_binary_name(version);

        if let Some(dir) = &self.plugin_dir {
            let candidate = dir.join(&binary);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }

        which::which(&binary).map_err(|_| CompatError::PluginNotFound { version, binary })
    }

    /// The `test` command of the plugin for `version`, without the input file argument.
    pub fn command(&self, version: RuntimeVersion) -> Result<Command> {
        let binary = self.resolve(version)?;

        let mut cmd = match self.launcher.split_first() {
            Some((program, args)) => {
                let mut cmd = Command::new(program);
                cmd.args(args).arg(&binary);
                cmd
            }
            None => Command::new(&binary),
        };
        cmd.arg(project_identity::PLUGIN_TEST_SUBCOMMAND);
        Ok(cmd)
    }
}
