//! Application config directory resolution
//!
//! The app persists exactly one key (the selected role) in a YAML file under
//! the platform config directory. `WORKR_CONFIG_DIR` overrides the location,
//! which is also what the integration tests lean on.

use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;

use crate::core::role::FileStorage;

/// Name of the YAML file holding the persisted key
const CONFIG_FILE: &str = "config.yaml";

/// Errors locating the config directory
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
}

/// Resolved config location
#[derive(Debug, Clone)]
pub struct Config {
    dir: PathBuf,
}

impl Config {
    /// Resolve the config directory: explicit override, else platform default
    pub fn locate(override_dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(dir) = override_dir {
            return Ok(Self { dir });
        }
        let dirs = ProjectDirs::from("", "", "workr").ok_or(ConfigError::NoConfigDir)?;
        Ok(Self {
            dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Directory the config file lives in
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// Storage for the persisted role key
    pub fn role_storage(&self) -> FileStorage {
        FileStorage::new(self.dir.join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_dir_wins() {
        let config = Config::locate(Some(PathBuf::from("/tmp/workr-test"))).unwrap();
        assert_eq!(config.dir(), std::path::Path::new("/tmp/workr-test"));
        assert!(config
            .role_storage()
            .path()
            .ends_with("workr-test/config.yaml"));
    }
}
