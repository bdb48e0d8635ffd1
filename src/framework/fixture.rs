//! Per-test-case configuration fixture.

use crate::error::{CompatError, Result};
use crate::project_identity::{
    CONFIG_ENV, CONFIG_FILE, CONFIG_METADATA_ENV, CONFIG_METADATA_FILE, CONFIG_NEXT_GEN_ENV,
    CONFIG_NEXT_GEN_FILE,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding the three empty config files every plugin
/// process of one test case shares. Removed on drop.
#[derive(Debug)]
pub struct Fixture {
    dir: TempDir,
    config: PathBuf,
    config_next_gen: PathBuf,
    config_metadata: PathBuf,
}

impl Fixture {
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("runtime-compat-")
            .tempdir()
            .map_err(CompatError::StdIoError)?;

        let config = touch(dir.path(), CONFIG_FILE)?;
        let config_next_gen = touch(dir.path(), CONFIG_NEXT_GEN_FILE)?;
        let config_metadata = touch(dir.path(), CONFIG_METADATA_FILE)?;

        Ok(Self {
            dir,
            config,
            config_next_gen,
            config_metadata,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Environment handed to each plugin process.
    pub fn env(&self) -> [(&'static str, &Path); 3] {
        [
            (CONFIG_ENV, self.config.as_path()),
            (CONFIG_NEXT_GEN_ENV, self.config_next_gen.as_path()),
            (CONFIG_METADATA_ENV, self.config_metadata.as_path()),
        ]
    }

    /// Leave the directory on disk and return its path.
    pub fn keep(self) -> PathBuf {
        self.dir.keep()
    }
}

fn touch(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, "").map_err(|e| CompatError::IoError {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_empty_config_files() {
        let fixture = Fixture::create().unwrap();
        for (_, path) in fixture.env() {
            assert!(path.starts_with(fixture.path()));
            assert_eq!(fs::read_to_string(path).unwrap(), "");
        }
    }

    #[test]
    fn removed_on_drop() {
        let fixture = Fixture::create().unwrap();
        let root = fixture.path().to_path_buf();
        drop(fixture);
        assert!(!root.exists());
    }

    #[test]
    fn keep_leaves_directory() {
        let root = Fixture::create().unwrap().keep();
        assert!(root.join(CONFIG_FILE).exists());
        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn fixtures_are_distinct() {
        let a = Fixture::create().unwrap();
        let b = Fixture::create().unwrap();
        assert_ne!(a.path(), b.path());
    }
}
