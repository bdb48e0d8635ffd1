//! Settings Module
//!
//! Persistent harness settings stored as KDL:
//!
//! ```kdl
//! settings {
//!   plugin_dir "/opt/runtime-plugins"
//!   timeout "120"
//! }
//! ```

use crate::error::{CompatError, Result};
use crate::ui;
use crate::utils::paths;
use kdl::KdlDocument;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const KEYS: [&str; 7] = [
    "plugin_dir",
    "timeout",
    "fail_fast",
    "keep_fixtures",
    "color",
    "format",
    "launcher",
];

/// Settings manager
#[derive(Debug)]
pub struct Settings {
    settings_file: PathBuf,
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Load settings from the config directory, or defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::settings_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let values = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| CompatError::IoError {
                path: path.to_path_buf(),
                source: e,
            })?;
            parse_settings(&content)?
        } else {
            Self::defaults()
        };

        Ok(Self {
            settings_file: path.to_path_buf(),
            values,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Validate, store and persist a setting
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        validate_value(key, value)?;
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    /// Reset a setting to default
    pub fn reset(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        if let Some(default) = Self::defaults().remove(key) {
            self.values.insert(key.to_string(), default);
        }
        self.save()
    }

    pub fn all(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn path(&self) -> &Path {
        &self.settings_file
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_file.parent() {
            fs::create_dir_all(parent).map_err(|e| CompatError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(&self.settings_file, render_settings(&self.values)).map_err(|e| {
            CompatError::IoError {
                path: self.settings_file.clone(),
                source: e,
            }
        })
    }

    pub fn defaults() -> BTreeMap<String, String> {
        let mut defaults = BTreeMap::new();
        defaults.insert("plugin_dir".to_string(), String::new()); // empty = PATH only
        defaults.insert("timeout".to_string(), "60".to_string());
        defaults.insert("fail_fast".to_string(), "true".to_string());
        defaults.insert("keep_fixtures".to_string(), "false".to_string());
        defaults.insert("color".to_string(), "auto".to_string());
        defaults.insert("format".to_string(), "table".to_string());
        defaults.insert("launcher".to_string(), String::new());
        defaults
    }
}

pub fn validate_key(key: &str) -> Result<()> {
    if !KEYS.contains(&key) {
        return Err(CompatError::Settings(format!(
            "Unknown setting: '{}'. Valid settings: {}",
            key,
            KEYS.join(", ")
        )));
    }
    Ok(())
}

pub fn validate_value(key: &str, value: &str) -> Result<()> {
    let one_of = |valid: &[&str]| {
        if valid.contains(&value) {
            Ok(())
        } else {
            Err(CompatError::Settings(format!(
                "Invalid value for '{}': '{}'. Valid: {}",
                key,
                value,
                valid.join(", ")
            )))
        }
    };

    match key {
        "color" => one_of(&["auto", "always", "never"]),
        "format" => one_of(&["table", "json", "yaml"]),
        "fail_fast" | "keep_fixtures" => one_of(&["true", "false"]),
        "timeout" => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(()),
            _ => Err(CompatError::Settings(format!(
                "Invalid value for 'timeout': '{}'. Expected a positive number of seconds",
                value
            ))),
        },
        "launcher" => {
            if shlex::split(value).is_none() {
                return Err(CompatError::Settings(format!(
                    "Invalid value for 'launcher': '{}'. Unbalanced quoting",
                    value
                )));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn parse_settings(content: &str) -> Result<BTreeMap<String, String>> {
    let doc = KdlDocument::parse(content)?;
    let mut values = Settings::defaults();

    for node in doc.nodes() {
        if node.name().value() != "settings" {
            continue;
        }
        let Some(children) = node.children() else {
            continue;
        };

        for child in children.nodes() {
            let key = child.name().value();
            if validate_key(key).is_err() {
                ui::warning(&format!("Ignoring unknown setting '{}'", key));
                continue;
            }

            let value = child
                .entries()
                .first()
                .map(|entry| match entry.value().as_string() {
                    Some(s) => s.to_string(),
                    None => entry
                        .value()
                        .as_bool()
                        .map(|b| b.to_string())
                        .unwrap_or_else(|| entry.value().to_string()),
                })
                .unwrap_or_default();

            validate_value(key, &value)?;
            values.insert(key.to_string(), value);
        }
    }

    Ok(values)
}

fn render_settings(values: &BTreeMap<String, String>) -> String {
    let mut content = String::from("// runtime-compat settings\n\nsettings {\n");
    for (key, value) in values {
        content.push_str(&format!("  {} {:?}\n", key, value));
    }
    content.push_str("}\n");
    content
}

#[cfg(test)]
mod tests;
