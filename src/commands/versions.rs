use crate::config::HarnessConfig;
use crate::core::RuntimeVersion;
use crate::error::Result;
use crate::project_identity;
use crate::ui as output;
use crate::utils::machine_output;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: RuntimeVersion,
    binary: String,
    path: Option<PathBuf>,
    apis: usize,
}

pub fn run(config: &HarnessConfig) -> Result<()> {
    let locator = config.locator()?;

    let infos: Vec<VersionInfo> = RuntimeVersion::ALL
        .iter()
        .map(|&version| VersionInfo {
            version,
            binary: project_identity::plugin_binary_name(version),
            path: locator.resolve(version).ok(),
            apis: crate::compat::matrix::supported_apis(version).len(),
        })
        .collect();

    if config.format.is_machine() {
        let warnings = infos
            .iter()
            .filter(|i| i.path.is_none())
            .map(|i| format!("plugin {} not found", i.binary))
            .collect();
        return machine_output::emit_v1("versions", infos, warnings, Vec::new(), config.format);
    }

    output::header("Runtime versions");
    if let Some(dir) = locator.plugin_dir() {
        output::keyval("Plugin directory", &dir.display().to_string());
    }
    for info in &infos {
        let location = match &info.path {
            Some(path) => path.display().to_string().green().to_string(),
            None => "not found".yellow().to_string(),
        };
        println!(
            "  {:<8} {:>2} APIs  {:<30} {}",
            info.version.as_str().bold(),
            info.apis,
            info.binary,
            location
        );
    }
    Ok(())
}
