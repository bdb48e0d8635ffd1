use crate::error::{CompatError, Result};
use crate::project_identity;
use directories::{ProjectDirs, UserDirs};
use std::path::{Path, PathBuf};

pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let user_dirs = UserDirs::new()
        .ok_or_else(|| CompatError::Other("Could not determine user home directory".to_string()))?;

    let home = user_dirs.home_dir();

    if path_str == "~" {
        return Ok(home.to_path_buf());
    }

    let stripped = path_str
        .strip_prefix("~/")
        .ok_or_else(|| CompatError::Other(format!("Invalid path format: {}", path_str)))?;

    Ok(home.join(stripped))
}

/// Settings directory; `RUNTIME_COMPAT_CONFIG_DIR` overrides the platform default.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(project_identity::env_key("CONFIG_DIR"))
        && !dir.is_empty()
    {
        return expand_home(Path::new(&dir));
    }

    let proj = ProjectDirs::from("dev", project_identity::STABLE_PROJECT_ID, project_identity::CONFIG_DIR_NAME)
        .ok_or_else(|| CompatError::Other("Could not determine config directory".to_string()))?;
    Ok(proj.config_dir().to_path_buf())
}

pub fn settings_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(project_identity::SETTINGS_FILE_BASENAME))
}

#[cfg(test)]
mod tests;
