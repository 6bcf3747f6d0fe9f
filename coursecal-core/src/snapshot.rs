//! Saving and restoring a session to a local JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::course::Course;
use crate::error::{CourseCalError, CourseCalResult};
use crate::event::ScheduleEvent;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub courses: Vec<Course>,
    pub events: Vec<ScheduleEvent>,
}

impl Snapshot {
    /// Read a snapshot. A missing file is `Ok(None)`.
    pub fn load(path: &Path) -> CourseCalResult<Option<Self>> {
        if !path.exists() {
            debug!(path = %path.display(), "no snapshot");
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&content).map_err(|e| {
            CourseCalError::Serialization(format!("{}: {}", path.display(), e))
        })?;

        debug!(
            path = %path.display(),
            courses = snapshot.courses.len(),
            events = snapshot.events.len(),
            "loaded snapshot"
        );
        Ok(Some(snapshot))
    }

    pub fn save(&self, path: &Path) -> CourseCalResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| CourseCalError::Serialization(e.to_string()))?;
        std::fs::write(path, content)?;

        info!(path = %path.display(), events = self.events.len(), "saved snapshot");
        Ok(())
    }
}
