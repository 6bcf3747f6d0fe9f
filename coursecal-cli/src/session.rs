//! Loading the planner from disk and writing it back after changes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use coursecal_core::Planner;
use coursecal_core::config::CourseCalConfig;
use coursecal_core::selection::today;
use coursecal_core::snapshot::Snapshot;

pub struct Session {
    pub planner: Planner,
    data_path: PathBuf,
}

impl Session {
    /// Load config and the saved schedule. Starts from the sample schedule if nothing
    /// has been saved yet.
    pub fn load(data_override: Option<PathBuf>) -> Result<Self> {
        let cfg = CourseCalConfig::load().context("Failed to load config")?;
        let data_path = data_override.unwrap_or_else(|| cfg.data_path());

        let snapshot = Snapshot::load(&data_path)
            .with_context(|| format!("Failed to read {}", data_path.display()))?;
        let planner = Planner::from_snapshot(snapshot, cfg.store_options(), today());

        Ok(Session { planner, data_path })
    }

    pub fn save(&self) -> Result<()> {
        self.planner
            .snapshot()
            .save(&self.data_path)
            .with_context(|| format!("Failed to write {}", self.data_path.display()))
    }
}
