//! # Configuration
//!
//! Tally reads an optional `config.json` from its data directory. Missing keys
//! fall back to compiled defaults; a missing file means all defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_increment` | `1` | Step used by `tally add` when `--by` is omitted |
//! | `increment_presets` | `[1, 5, 10]` | Steps the CLI offers; empty allows any |
//! | `show_ids` | `true` | Show the id badge on each counter card |
//!
//! ## Data Directory
//!
//! Resolved in priority order:
//! 1. `--data-dir <PATH>` on the command line
//! 2. `TALLY_HOME` environment variable
//! 3. The OS data directory (via the `directories` crate)

use crate::error::{Result, TallyError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const HOME_ENV: &str = "TALLY_HOME";

fn default_increment() -> i64 {
    1
}

fn default_presets() -> Vec<i64> {
    vec![1, 5, 10]
}

fn default_show_ids() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TallyConfig {
    #[serde(default = "default_increment")]
    pub default_increment: i64,

    #[serde(default = "default_presets")]
    pub increment_presets: Vec<i64>,

    #[serde(default = "default_show_ids")]
    pub show_ids: bool,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            default_increment: default_increment(),
            increment_presets: default_presets(),
            show_ids: default_show_ids(),
        }
    }
}

impl TallyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TallyError::Io)?;
        let config: TallyConfig =
            serde_json::from_str(&content).map_err(TallyError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TallyError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(TallyError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(TallyError::Io)?;
        Ok(())
    }

    /// Whether the CLI should accept `increment` as a step.
    ///
    /// Only positive steps are checked against the presets; zero and negative
    /// values are left for the store to reject with its own message.
    pub fn allows_increment(&self, increment: i64) -> bool {
        increment <= 0
            || self.increment_presets.is_empty()
            || self.increment_presets.contains(&increment)
    }

    pub fn presets_label(&self) -> String {
        self.increment_presets
            .iter()
            .map(|p| format!("+{}", p))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Picks the data directory from an explicit flag, the environment, or the
/// platform default, in that order.
pub fn resolve_data_dir(flag: Option<PathBuf>, env_home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag.or(env_home) {
        return Ok(dir);
    }
    ProjectDirs::from("com", "tally", "tally")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TallyError::Store("Could not determine data directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TallyConfig::default();
        assert_eq!(config.default_increment, 1);
        assert_eq!(config.increment_presets, vec![1, 5, 10]);
        assert!(config.show_ids);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = TallyConfig::load(dir.path()).unwrap();
        assert_eq!(config, TallyConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = TallyConfig {
            default_increment: 5,
            increment_presets: vec![5, 25],
            show_ids: false,
        };
        config.save(dir.path().join("sub")).unwrap();

        let loaded = TallyConfig::load(dir.path().join("sub")).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"show_ids": false}"#).unwrap();
        let config = TallyConfig::load(dir.path()).unwrap();
        assert!(!config.show_ids);
        assert_eq!(config.default_increment, 1);
        assert_eq!(config.increment_presets, vec![1, 5, 10]);
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{").unwrap();
        assert!(TallyConfig::load(dir.path()).is_err());
    }

    #[test]
    fn test_allows_increment() {
        let config = TallyConfig::default();
        assert!(config.allows_increment(5));
        assert!(!config.allows_increment(3));
        assert!(config.allows_increment(0));
        assert!(config.allows_increment(-1));

        let open = TallyConfig {
            increment_presets: vec![],
            ..Default::default()
        };
        assert!(open.allows_increment(3));
    }

    #[test]
    fn test_presets_label() {
        assert_eq!(TallyConfig::default().presets_label(), "+1, +5, +10");
    }

    #[test]
    fn test_data_dir_priority() {
        let flag = PathBuf::from("/flag");
        let env = PathBuf::from("/env");
        assert_eq!(
            resolve_data_dir(Some(flag.clone()), Some(env.clone())).unwrap(),
            flag
        );
        assert_eq!(resolve_data_dir(None, Some(env.clone())).unwrap(), env);
    }
}
