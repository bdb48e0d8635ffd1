//! Settings Command
//!
//! Manage persistent harness settings.

use crate::cli::args::SettingsCommand;
use crate::config::settings::{KEYS, Settings};
use crate::error::Result;
use crate::ui as output;

pub fn run(command: &SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Set { key, value } => {
            let mut settings = Settings::load()?;
            settings.set(key, value)?;
            output::success(&format!("Set {} = {}", key, value));
        }
        SettingsCommand::Show => {
            let settings = Settings::load()?;
            show_all_settings(&settings);
        }
        SettingsCommand::Reset { key } => {
            let mut settings = Settings::load()?;
            settings.reset(key)?;
            output::success(&format!("Reset {} to default", key));
        }
    }

    Ok(())
}

fn show_all_settings(settings: &Settings) {
    output::header("Current Settings");
    output::keyval("File", &settings.path().display().to_string());

    for key in KEYS {
        match settings.get(key) {
            Some("") | None => println!("  {}: (unset)", key),
            Some(value) => println!("  {}: {}", key, value),
        }
    }

    println!();
    output::info("Valid values:");
    println!("  plugin_dir:     <directory> (empty = PATH only)");
    println!("  timeout:        <seconds>");
    println!("  fail_fast:      true, false");
    println!("  keep_fixtures:  true, false");
    println!("  color:          auto, always, never");
    println!("  format:         table, json, yaml");
    println!("  launcher:       <command prefix>, e.g. \"env GODEBUG=1\"");
}
