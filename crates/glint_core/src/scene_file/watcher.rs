//! Polling hot reload for scene files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::loader::{load_scene, LoadResult};
use crate::scene::Scene;

/// Watches a scene file's modification time.
///
/// The watcher never touches a scene that is in use; it hands back a fresh
/// `Scene` that the caller swaps in before the next frame.
#[derive(Debug)]
pub struct SceneWatcher {
    path: PathBuf,
    last_modified: Option<SystemTime>,
}

impl SceneWatcher {
    /// Start watching `path`, using its current modification time as the baseline.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let last_modified = modified(&path).ok();
        Self {
            path,
            last_modified,
        }
    }

    /// The watched file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check the file and reload it if it changed.
    ///
    /// Returns `Ok(None)` when nothing changed. A failed reload still records
    /// the new timestamp, so the same broken file is not reported twice.
    pub fn poll(&mut self) -> LoadResult<Option<Scene>> {
        let stamp = modified(&self.path)?;
        if self.last_modified == Some(stamp) {
            return Ok(None);
        }

        self.last_modified = Some(stamp);
        log::info!("Scene file {} changed, reloading", self.path.display());
        load_scene(&self.path).map(Some)
    }
}

fn modified(path: &Path) -> std::io::Result<SystemTime> {
    fs::metadata(path)?.modified()
}
