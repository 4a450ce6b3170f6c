use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

/// A JSON key-value store backed by one `<key>.json` file per key.
///
/// All storage failures are swallowed at this boundary: reads that fail for
/// any reason behave as "no data", writes and removals log and return. The
/// in-memory session keeps working either way.
#[derive(Debug, Clone)]
pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: PathBuf) -> Self {
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!(dir = %dir.display(), error = %e, "could not create data directory");
        }
        KvStore { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read and deserialize the value stored under `key`. Returns None on a
    /// missing key; deserialization failures are logged and also map to None.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!(key, error = %e, "could not read stored value");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "stored value is not valid JSON, ignoring");
                None
            }
        }
    }

    /// Serialize `value` to JSON and store it under `key`. Failures are
    /// logged, never returned.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string_pretty(value) {
            Ok(j) => j,
            Err(e) => {
                warn!(key, error = %e, "could not serialize value");
                return;
            }
        };
        if let Err(e) = fs::write(self.key_path(key), json) {
            warn!(key, error = %e, "could not persist value");
        }
    }

    /// Delete the entry for `key`, if any.
    pub fn remove(&self, key: &str) {
        let path = self.key_path(key);
        if !path.exists() {
            return;
        }
        if let Err(e) = fs::remove_file(&path) {
            warn!(key, error = %e, "could not remove stored value");
        }
    }

    /// Whether an entry exists for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.key_path(key).exists()
    }
}

/// Default data directory, respecting XDG_DATA_HOME.
pub fn default_data_dir() -> PathBuf {
    let data_dir = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("share"));
    data_dir.join("todos")
}

/// The user's home directory.
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Config file path inside a data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_get_round_trip() {
        let dir = TempDir::new().unwrap();
        let kv = KvStore::open(dir.path().to_path_buf());
        kv.set("numbers", &vec![1u64, 2, 3]);
        let back: Vec<u64> = kv.get("numbers").unwrap();
        assert_eq!(back, vec![1, 2, 3]);
    }

    #[test]
    fn get_missing_key_returns_none() {
        let dir = TempDir::new().unwrap();
        let kv = KvStore::open(dir.path().to_path_buf());
        assert!(kv.get::<Vec<u64>>("nothing").is_none());
    }

    #[test]
    fn get_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let kv = KvStore::open(dir.path().to_path_buf());
        fs::write(dir.path().join("broken.json"), "not json {{{").unwrap();
        assert!(kv.get::<Vec<u64>>("broken").is_none());
    }

    #[test]
    fn remove_deletes_the_entry() {
        let dir = TempDir::new().unwrap();
        let kv = KvStore::open(dir.path().to_path_buf());
        kv.set("gone", &42u64);
        assert!(kv.contains("gone"));
        kv.remove("gone");
        assert!(!kv.contains("gone"));
        assert!(kv.get::<u64>("gone").is_none());
    }

    #[test]
    fn remove_missing_key_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let kv = KvStore::open(dir.path().to_path_buf());
        kv.remove("never-there");
    }
}
