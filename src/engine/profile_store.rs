use std::collections::BTreeMap;
#[cfg(test)]
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::model::profile::{Avatar, ProfileSnapshot};

pub const KEY_USERNAME: &str = "ecolearn-username";
pub const KEY_AVATAR: &str = "ecolearn-avatar";
pub const KEY_POINTS: &str = "ecolearn-points";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode profile store: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Flat string key-value storage. Overwrites are unconditional.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/* =========================
   In-memory store
   ========================= */

#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/* =========================
   File store
   ========================= */

/// A JSON object of string pairs on disk, written through on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

pub fn default_profile_path() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("ecolearn");
    path.push("profile.json");
    path
}

impl FileStore {
    /// Never fails: a missing or unreadable file starts an empty store.
    pub fn open(path: PathBuf) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "profile store is corrupt, using defaults");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "profile store unreadable, using defaults");
                BTreeMap::new()
            }
        };

        debug!(path = %path.display(), keys = entries.len(), "profile store opened");
        Self { path, entries }
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/* =========================
   Profile wrapper
   ========================= */

/// Typed access to the three persisted profile fields.
pub struct ProfileStore {
    store: Box<dyn KeyValueStore>,
}

impl ProfileStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::default()))
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        let defaults = ProfileSnapshot::default();

        let display_name = self
            .store
            .get(KEY_USERNAME)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(defaults.display_name);

        let avatar = self
            .store
            .get(KEY_AVATAR)
            .and_then(|raw| raw.parse::<Avatar>().ok())
            .unwrap_or(defaults.avatar);

        let total_points = self
            .store
            .get(KEY_POINTS)
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(defaults.total_points);

        ProfileSnapshot {
            display_name,
            avatar,
            total_points,
        }
    }

    pub fn set_display_name(&mut self, name: &str) -> Result<(), StoreError> {
        self.store.set(KEY_USERNAME, name.trim())
    }

    pub fn set_avatar(&mut self, avatar: Avatar) -> Result<(), StoreError> {
        self.store.set(KEY_AVATAR, avatar.token())
    }

    pub fn set_total_points(&mut self, points: u64) -> Result<(), StoreError> {
        self.store.set(KEY_POINTS, &points.to_string())
    }

    /// Returns the new total.
    pub fn add_points(&mut self, points: u32) -> Result<u64, StoreError> {
        let total = self.snapshot().total_points.saturating_add(u64::from(points));
        self.set_total_points(total)?;
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("ecolearn-test-{}-{name}", std::process::id()));
        path.push("profile.json");
        path
    }

    #[test]
    fn empty_store_yields_defaults() {
        let store = ProfileStore::in_memory();
        assert_eq!(store.snapshot(), ProfileSnapshot::default());
    }

    #[test]
    fn points_round_trip() {
        let mut store = ProfileStore::in_memory();
        for points in [0, 1, 2847, u64::from(u32::MAX) + 7, u64::MAX] {
            store.set_total_points(points).unwrap();
            assert_eq!(store.snapshot().total_points, points);
        }
    }

    #[test]
    fn writing_same_avatar_twice_is_idempotent() {
        let mut store = ProfileStore::in_memory();
        store.set_avatar(Avatar::Droplet).unwrap();
        store.set_avatar(Avatar::Droplet).unwrap();
        assert_eq!(store.snapshot().avatar, Avatar::Droplet);
    }

    #[test]
    fn garbage_values_fall_back_to_defaults() {
        let mut raw = MemoryStore::default();
        raw.set(KEY_AVATAR, "unicorn").unwrap();
        raw.set(KEY_POINTS, "lots").unwrap();
        raw.set(KEY_USERNAME, "   ").unwrap();

        let store = ProfileStore::new(Box::new(raw));
        assert_eq!(store.snapshot(), ProfileSnapshot::default());
    }

    #[test]
    fn add_points_accumulates() {
        let mut store = ProfileStore::in_memory();
        assert_eq!(store.add_points(20).unwrap(), 20);
        assert_eq!(store.add_points(80).unwrap(), 100);
        assert_eq!(store.snapshot().total_points, 100);
    }

    #[test]
    fn file_store_survives_reopen() {
        let path = temp_path("reopen");
        let _ = fs::remove_file(&path);

        {
            let mut store = ProfileStore::new(Box::new(FileStore::open(path.clone())));
            store.set_display_name("Asha").unwrap();
            store.set_avatar(Avatar::Recycle).unwrap();
            store.set_total_points(340).unwrap();
        }

        let reopened = ProfileStore::new(Box::new(FileStore::open(path.clone())));
        let snap = reopened.snapshot();
        assert_eq!(snap.display_name, "Asha");
        assert_eq!(snap.avatar, Avatar::Recycle);
        assert_eq!(snap.total_points, 340);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn corrupt_file_is_ignored() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let store = ProfileStore::new(Box::new(FileStore::open(path.clone())));
        assert_eq!(store.snapshot(), ProfileSnapshot::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
