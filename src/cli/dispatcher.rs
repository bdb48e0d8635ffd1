//! Command dispatcher
//!
//! Routes CLI commands to their handlers.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::config::{HarnessConfig, OutputFormat};
use crate::error::Result;
use crate::ui;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    match &args.command {
        Command::Completions { shell } => commands::completions::run(*shell),
        Command::Settings { command } => {
            ui::init_colors(args.global.color.as_deref().unwrap_or("auto"));
            commands::settings::run(command)
        }
        Command::Run {
            paths,
            filter,
            plugin_dir,
            timeout,
            keep_fixtures,
            no_fail_fast,
        } => {
            let config = effective_config(args)?;
            commands::run::run(
                &commands::run::RunOptions {
                    paths: paths.clone(),
                    filter: filter.clone(),
                    plugin_dir: plugin_dir.clone(),
                    timeout: *timeout,
                    keep_fixtures: *keep_fixtures,
                    no_fail_fast: *no_fail_fast,
                },
                &config,
            )
        }
        Command::Check { paths } => {
            let config = effective_config(args)?;
            commands::check::run(paths, config.format)
        }
        Command::Matrix { api } => {
            let config = effective_config(args)?;
            commands::matrix::run(api.as_deref(), config.format)
        }
        Command::Versions { plugin_dir } => {
            let mut config = effective_config(args)?;
            if let Some(dir) = plugin_dir {
                config.plugin_dir = Some(dir.clone());
            }
            commands::versions::run(&config)
        }
    }
}

/// Settings and environment, overridden by the global flags.
fn effective_config(args: &Cli) -> Result<HarnessConfig> {
    let mut config = HarnessConfig::load()?;

    if let Some(color) = &args.global.color {
        config.color = color.clone();
    }
    if let Some(format) = &args.global.format {
        config.format = OutputFormat::parse(format)?;
    }

    ui::init_colors(&config.color);
    Ok(config)
}
