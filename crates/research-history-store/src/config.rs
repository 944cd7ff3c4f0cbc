//! Location of the history backing file

use std::path::{Path, PathBuf};

/// Backing file name, relative to the working directory at call time
pub const DEFAULT_HISTORY_FILE: &str = "history.json";

/// Environment variable overriding [`DEFAULT_HISTORY_FILE`]
pub const HISTORY_FILE_ENV: &str = "RESEARCH_HISTORY_FILE";

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Backing file; relative paths resolve against the current directory
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_HISTORY_FILE),
        }
    }

    /// Default config, with the path taken from `RESEARCH_HISTORY_FILE` when set
    pub fn from_env() -> Self {
        match std::env::var_os(HISTORY_FILE_ENV) {
            Some(path) if !path.is_empty() => Self {
                path: PathBuf::from(path),
            },
            _ => Self::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Absolute backing path as seen from the current working directory
    pub fn resolved_path(&self) -> std::io::Result<PathBuf> {
        resolve(&self.path)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_defaults() {
        let config = StoreConfig::new();
        assert_eq!(config.path, PathBuf::from("history.json"));
        assert!(config.path.is_relative());
    }

    #[test]
    #[serial]
    fn test_from_env_override() {
        std::env::set_var(HISTORY_FILE_ENV, "/var/tmp/research.json");
        let config = StoreConfig::from_env();
        std::env::remove_var(HISTORY_FILE_ENV);
        assert_eq!(config.path, PathBuf::from("/var/tmp/research.json"));
    }

    #[test]
    #[serial]
    fn test_from_env_empty_falls_back() {
        std::env::set_var(HISTORY_FILE_ENV, "");
        let config = StoreConfig::from_env();
        std::env::remove_var(HISTORY_FILE_ENV);
        assert_eq!(config, StoreConfig::new());
    }

    #[test]
    #[serial]
    fn test_resolved_path_uses_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let resolved = StoreConfig::new().resolved_path().unwrap();
        assert_eq!(resolved, cwd.join("history.json"));

        let absolute = StoreConfig::new().with_path("/data/h.json");
        assert_eq!(
            absolute.resolved_path().unwrap(),
            PathBuf::from("/data/h.json")
        );
    }
}
