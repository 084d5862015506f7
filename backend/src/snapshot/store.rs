use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{parse_context, read_context, write_context};

/// JSON files exchanged with the persistence layer: rosters and match
/// exports in, generated schedules and ratings out.
pub struct SnapshotStore {
    base_dir: PathBuf,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(".")
    }
}

impl SnapshotStore {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Load a required file
    pub fn load<T: for<'de> Deserialize<'de>>(&self, name: &str) -> Result<T> {
        let path = self.resolve(name);
        self.read_json_opt(&path)?
            .with_context(|| format!("No data found at {}", path.display()))
    }

    pub fn save<T: Serialize>(&self, name: &str, data: &T) -> Result<()> {
        let path = self.resolve(name);
        self.write_json(&path, data)?;
        info!("Saved data to {}", path.display());
        Ok(())
    }

    // --- Helper Methods ---

    fn resolve(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| write_context(parent))?;
        }
        let json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;
        fs::write(path, json).with_context(|| write_context(path))?;
        Ok(())
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            debug!("Nothing to load at {}", path.display());
            return Ok(None);
        }

        let json = fs::read_to_string(path).with_context(|| read_context(path))?;
        let data = serde_json::from_str(&json).with_context(|| parse_context(path, &json))?;
        Ok(Some(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Player, TournamentSnapshot};

    #[test]
    fn saves_and_loads_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        let snapshot = TournamentSnapshot {
            players: vec![Player {
                id: "p1".into(),
                name: "Marius".into(),
            }],
            ..Default::default()
        };

        store.save("exports/snapshot.json", &snapshot).unwrap();
        assert!(dir.path().join("exports/snapshot.json").exists());

        let loaded: TournamentSnapshot = store.load("exports/snapshot.json").unwrap();
        assert_eq!(loaded.players, snapshot.players);
        assert!(loaded.teams.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());

        let required: Result<Vec<Player>> = store.load("absent.json");
        assert!(required.unwrap_err().to_string().contains("No data found"));
    }

    #[test]
    fn malformed_json_reports_path_and_preview() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        let store = SnapshotStore::new(dir.path());

        let err = store.load::<Vec<Player>>("broken.json").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("broken.json"));
        assert!(message.contains("{ not json"));
    }
}
