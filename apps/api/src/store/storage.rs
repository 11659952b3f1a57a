//! Storage port — key/value persistence behind a trait so it can be swapped
//! in tests.
//!
//! The interface mirrors browser local storage: synchronous string blobs
//! under fixed keys. Read and parse failures are logged and treated as
//! absent data, never surfaced to the caller.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use crate::models::roadmap::{RoadmapSnapshot, SavedRoadmap};

/// Key holding the JSON array of saved roadmaps.
pub const ROADMAPS_KEY: &str = "career_roadmaps";
/// Key holding the in-progress roadmap snapshot.
pub const CURRENT_ROADMAP_KEY: &str = "current_roadmap";

/// The storage port. Injected into the preference store as
/// `Arc<dyn RoadmapStorage>`.
pub trait RoadmapStorage: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed storage: one `<key>.json` per key under a data directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create data dir {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl RoadmapStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read storage key '{key}'")),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)
            .with_context(|| format!("failed to write storage key '{key}'"))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("failed to remove storage key '{key}'")),
        }
    }
}

/// In-memory storage for tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, std::collections::HashMap<String, String>> {
        // String blobs cannot be left half-written, so a poisoned lock is safe
        // to recover.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RoadmapStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }
}

/// Reads and parses the saved-roadmap collection. A missing blob, a failed
/// read, or malformed JSON all degrade to an empty collection with a warning.
pub fn load_saved_roadmaps(storage: &dyn RoadmapStorage) -> Vec<SavedRoadmap> {
    let blob = match storage.read(ROADMAPS_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("failed to read '{ROADMAPS_KEY}', treating as empty: {e}");
            return Vec::new();
        }
    };
    match serde_json::from_str(&blob) {
        Ok(roadmaps) => roadmaps,
        Err(e) => {
            warn!("malformed '{ROADMAPS_KEY}' blob, treating as empty: {e}");
            Vec::new()
        }
    }
}

/// Reads and parses the in-progress roadmap snapshot with the same
/// degrade-to-absent policy.
pub fn load_current_snapshot(storage: &dyn RoadmapStorage) -> Option<RoadmapSnapshot> {
    let blob = match storage.read(CURRENT_ROADMAP_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => return None,
        Err(e) => {
            warn!("failed to read '{CURRENT_ROADMAP_KEY}', treating as absent: {e}");
            return None;
        }
    };
    match serde_json::from_str(&blob) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!("malformed '{CURRENT_ROADMAP_KEY}' blob, treating as absent: {e}");
            None
        }
    }
}
