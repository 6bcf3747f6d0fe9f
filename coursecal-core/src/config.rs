//! User configuration at ~/.config/coursecal/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{CourseCalError, CourseCalResult};
use crate::store::{IdStrategy, StoreOptions};

static DEFAULT_DATA_FILE: &str = "~/.local/share/coursecal/session.json";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CourseCalConfig {
    /// Where the session snapshot is kept. `~` is expanded.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Re-sort the event list by date after edits, not only after inserts.
    #[serde(default)]
    pub resort_on_edit: bool,
}

impl Default for CourseCalConfig {
    fn default() -> Self {
        CourseCalConfig {
            data_file: default_data_file(),
            id_strategy: IdStrategy::default(),
            resort_on_edit: false,
        }
    }
}

impl CourseCalConfig {
    pub fn config_path() -> CourseCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CourseCalError::Config("Could not determine config directory".into()))?
            .join("coursecal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, writing a commented-out default first if there is none.
    pub fn load() -> CourseCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from a specific file. A missing file gives the defaults.
    pub fn load_from(path: &Path) -> CourseCalResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| CourseCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CourseCalError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CourseCalResult<()> {
        let contents = format!(
            "\
# coursecal configuration

# Where the schedule is saved between runs:
# data_file = \"{}\"

# Event id format, \"timestamp\" or \"uuid\":
# id_strategy = \"timestamp\"

# Keep the event list in date order after edits too:
# resort_on_edit = false
",
            DEFAULT_DATA_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CourseCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CourseCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            id_strategy: self.id_strategy,
            resort_on_edit: self.resort_on_edit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coursecal/config.toml");

        CourseCalConfig::create_default_config(&path).unwrap();
        assert_eq!(CourseCalConfig::load_from(&path).unwrap(), CourseCalConfig::default());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = CourseCalConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, CourseCalConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_file = \"/tmp/sched.json\"\nid_strategy = \"uuid\"\nresort_on_edit = true\n",
        )
        .unwrap();

        let cfg = CourseCalConfig::load_from(&path).unwrap();
        assert_eq!(cfg.data_path(), PathBuf::from("/tmp/sched.json"));
        assert_eq!(cfg.id_strategy, IdStrategy::Uuid);
        assert!(cfg.store_options().resort_on_edit);
    }

    #[test]
    fn data_path_keeps_file_location() {
        let cfg = CourseCalConfig::default();
        assert!(cfg.data_path().ends_with(".local/share/coursecal/session.json"));
    }
}
