// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-local token store backends.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use shelfsense_core::{ShelfError, TokenStore};
use tracing::debug;

/// Key holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "jwtToken";
/// Key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// Key holding the RFC 3339 time the session was stored.
pub const ISSUED_AT_KEY: &str = "issuedAt";

fn storage_error(e: impl std::error::Error + Send + Sync + 'static) -> ShelfError {
    ShelfError::Storage {
        source: Box::new(e),
    }
}

/// Writes `bytes` to `path`, readable by the owner only on unix.
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    use std::io::Write;

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    std::os::unix::fs::OpenOptionsExt::mode(&mut options, 0o600);

    let mut file = options.open(path)?;
    // A leftover file keeps its old mode on open.
    #[cfg(unix)]
    file.set_permissions(std::os::unix::fs::PermissionsExt::from_mode(0o600))?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn poisoned() -> ShelfError {
    ShelfError::Internal("token store lock poisoned".to_string())
}

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, ShelfError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn put_all(&self, entries: &[(&str, &str)]) -> Result<(), ShelfError> {
        let mut map = self.entries.write().map_err(|_| poisoned())?;
        for (key, value) in entries {
            map.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }

    fn remove_all(&self, keys: &[&str]) -> Result<(), ShelfError> {
        let mut map = self.entries.write().map_err(|_| poisoned())?;
        for key in keys {
            map.remove(*key);
        }
        Ok(())
    }
}

/// JSON file store.
///
/// The whole key set is rewritten on every change: the new content goes to a
/// sibling temp file which is then renamed over the original, so readers see
/// either the old or the new key set.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, ShelfError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content).map_err(storage_error),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(storage_error(e)),
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), ShelfError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(storage_error)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let content = serde_json::to_string_pretty(map).map_err(storage_error)?;
        write_private(&tmp, content.as_bytes()).map_err(storage_error)?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(storage_error(e));
        }
        debug!(path = %self.path.display(), keys = map.len(), "token store written");
        Ok(())
    }

    /// Loads the current key set, tolerating a corrupt file on write paths.
    fn current_for_write(&self) -> BTreeMap<String, String> {
        self.read_map().unwrap_or_else(|e| {
            debug!(error = %e, "discarding unreadable token store before rewrite");
            BTreeMap::new()
        })
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, ShelfError> {
        Ok(self.read_map()?.remove(key))
    }

    fn put_all(&self, entries: &[(&str, &str)]) -> Result<(), ShelfError> {
        let _guard = self.write_lock.lock().map_err(|_| poisoned())?;
        let mut map = self.current_for_write();
        for (key, value) in entries {
            map.insert((*key).to_string(), (*value).to_string());
        }
        self.write_map(&map)
    }

    fn remove_all(&self, keys: &[&str]) -> Result<(), ShelfError> {
        let _guard = self.write_lock.lock().map_err(|_| poisoned())?;
        let mut map = self.current_for_write();
        let before = map.len();
        for key in keys {
            map.remove(*key);
        }
        if map.len() == before && !self.path.exists() {
            return Ok(());
        }
        self.write_map(&map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        store
            .put_all(&[(ACCESS_TOKEN_KEY, "a"), (REFRESH_TOKEN_KEY, "r")])
            .unwrap();
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("a"));

        store.remove_all(&[ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, ISSUED_AT_KEY]).unwrap();
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(REFRESH_TOKEN_KEY).unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn file_store_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{}").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
        let mut stale = path.clone().into_os_string();
        stale.push(".tmp");
        std::fs::write(&stale, "").unwrap();
        std::fs::set_permissions(&stale, std::fs::Permissions::from_mode(0o666)).unwrap();

        FileTokenStore::new(&path)
            .put_all(&[(ACCESS_TOKEN_KEY, "a")])
            .unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert!(!std::path::Path::new(&stale).exists());
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        FileTokenStore::new(&path)
            .put_all(&[(ACCESS_TOKEN_KEY, "a"), (REFRESH_TOKEN_KEY, "r")])
            .unwrap();

        let reopened = FileTokenStore::new(&path);
        assert_eq!(reopened.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("a"));
        assert_eq!(reopened.get(REFRESH_TOKEN_KEY).unwrap().as_deref(), Some("r"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn file_store_remove_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("session.json"));
        store
            .put_all(&[(ACCESS_TOKEN_KEY, "a"), ("theme", "dark")])
            .unwrap();
        store.remove_all(&[ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY]).unwrap();
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
        store.remove_all(&[ACCESS_TOKEN_KEY]).unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = FileTokenStore::new(&path);
        assert!(matches!(
            store.get(ACCESS_TOKEN_KEY),
            Err(ShelfError::Storage { .. })
        ));

        // A fresh login overwrites the corrupt content.
        store.put_all(&[(ACCESS_TOKEN_KEY, "a")]).unwrap();
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("a"));
    }
}
