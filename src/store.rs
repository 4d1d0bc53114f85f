//! Write-through persistence for shell state.
//!
//! The shell persists three JSON lists through a [`StorageBackend`]:
//!
//! | Key                     | Value                                  |
//! |-------------------------|----------------------------------------|
//! | `mes_recent_pages`      | array of `{path, label}` entries       |
//! | `mes_pinned_tabs`       | array of `{path, label}` entries       |
//! | `mes_sidebar_open_keys` | array of expanded group keys (strings) |
//!
//! [`PersistentStore`] is the adapter on top of a backend: [`load`] answers
//! `None` for missing keys, unreadable values, and decode failures, and
//! [`save`] serializes and writes best-effort, logging failures at warn
//! level. A corrupt store can therefore never break startup, and a failed
//! write never interrupts the mutation that triggered it.
//!
//! Two backends ship with the crate: [`MemoryBackend`] for tests and
//! session-only hosts, and [`FileBackend`] (feature `file-store`) storing
//! one `<key>.json` file per key under an application data directory.
//!
//! [`load`]: PersistentStore::load
//! [`save`]: PersistentStore::save
//!
//! # Examples
//!
//! ```
//! use gpui_navshell::store::{MemoryBackend, PersistentStore};
//!
//! let mut store = PersistentStore::new(MemoryBackend::new());
//! store.save("mes_sidebar_open_keys", &vec!["master".to_string()]);
//!
//! let keys: Option<Vec<String>> = store.load("mes_sidebar_open_keys");
//! assert_eq!(keys, Some(vec!["master".to_string()]));
//! ```

use std::collections::HashMap;
use std::fmt;
#[cfg(feature = "file-store")]
use std::fs;
#[cfg(feature = "file-store")]
use std::io::ErrorKind;
#[cfg(feature = "file-store")]
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::warn_log;

// ============================================================================
// Storage Keys
// ============================================================================

/// The keys under which shell state persists.
///
/// These live as fields of the shell state object constructed at startup,
/// never as module globals, so hosts embedding several shells can give each
/// its own key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Recent pages list
    pub recent: String,

    /// Pinned tabs list
    pub pinned: String,

    /// Expanded sidebar group keys
    pub open_keys: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            recent: "mes_recent_pages".to_string(),
            pinned: "mes_pinned_tabs".to_string(),
            open_keys: "mes_sidebar_open_keys".to_string(),
        }
    }
}

// ============================================================================
// Storage Backend
// ============================================================================

/// A synchronous key-value store holding JSON strings.
///
/// Implementations decide where the strings live; [`PersistentStore`]
/// decides what goes into them.
pub trait StorageBackend {
    /// Read the raw value stored under `key`, or `None` when absent.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove the value stored under `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// In-memory backend for tests and session-only hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value under `key`, useful for reload tests.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Inspect the raw stored value under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// On-disk backend storing one `<key>.json` file per key.
///
/// The directory is created on first write. Keys are used verbatim as file
/// stems, so callers keep them path-safe.
#[cfg(feature = "file-store")]
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

#[cfg(feature = "file-store")]
impl FileBackend {
    /// Backend rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Backend under the platform data directory, e.g.
    /// `~/.local/share/<app>` on Linux.
    ///
    /// Fails with [`StoreError::NoDataDir`] when the platform reports no
    /// data directory.
    pub fn for_app(app: &str) -> StoreResult<Self> {
        let base = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self::new(base.join(app)))
    }

    /// The directory the backend reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(feature = "file-store")]
impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Some(text),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn_log!("{}", StoreError::backend(key, err));
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|err| StoreError::backend(key, err))?;
        fs::write(self.path_for(key), value).map_err(|err| StoreError::backend(key, err))
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::backend(key, err)),
        }
    }
}

// ============================================================================
// Persistent Store
// ============================================================================

/// Adapter between typed shell state and a [`StorageBackend`].
///
/// Values are encoded as JSON with `serde_json`. Failures in either
/// direction are logged and absorbed here: callers see `None` on load and
/// nothing at all on save.
pub struct PersistentStore {
    backend: Box<dyn StorageBackend>,
}

impl PersistentStore {
    /// Wrap a backend.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Store backed by a fresh [`MemoryBackend`].
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Store backed by a [`FileBackend`] under the platform data directory.
    #[cfg(feature = "file-store")]
    pub fn on_disk(app: &str) -> StoreResult<Self> {
        Ok(Self::new(FileBackend::for_app(app)?))
    }

    /// Load and decode the value stored under `key`.
    ///
    /// Missing keys, unreadable values, and decode failures all yield
    /// `None`; decode failures are additionally logged so a corrupted entry
    /// is visible without breaking startup.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.read(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn_log!("{}", StoreError::decode(key, err));
                None
            }
        }
    }

    /// Encode `value` and write it under `key`, best-effort.
    ///
    /// Any failure is logged at warn level and swallowed; the in-memory
    /// state that triggered the save stays authoritative.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                warn_log!("{}", StoreError::encode(key, err));
                return;
            }
        };
        if let Err(err) = self.backend.write(key, &raw) {
            warn_log!("{}", err);
        }
    }

    /// Remove the value stored under `key`, best-effort.
    pub fn clear(&mut self, key: &str) {
        if let Err(err) = self.backend.remove(key) {
            warn_log!("{}", err);
        }
    }
}

impl fmt::Debug for PersistentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentStore").finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
