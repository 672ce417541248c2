//! Persistent single-slot cache for the most recent analysis
//!
//! The slot survives restarts. Writes are best-effort: a failing store never
//! interrupts the interactive flow. A slot that no longer deserializes is
//! removed on read so it cannot poison every later start.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use bugwise_core::prelude::*;
use bugwise_core::{Analysis, ErrorKind};

/// Storage key of the cached analysis
pub const LAST_ANALYSIS_KEY: &str = "lastAnalysis";

/// Synchronous string key/value storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// File-backed store
// ─────────────────────────────────────────────────────────────────────────────

/// One file per key (`<dir>/<key>.json`) in a local data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<data_local_dir>/bugwise/storage`
    pub fn default_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bugwise")
            .join("storage")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(Error::cache(format!("invalid storage key '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| Error::corrupt_slot(key, e.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        // Write-then-rename so a crash never leaves a half-written slot
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory store
// ─────────────────────────────────────────────────────────────────────────────

/// Process-local store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| Error::cache("memory store lock poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PersistentCache
// ─────────────────────────────────────────────────────────────────────────────

/// The only reader and writer of the [`LAST_ANALYSIS_KEY`] slot.
pub struct PersistentCache {
    store: Box<dyn KeyValueStore>,
}

impl PersistentCache {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Cache that forgets everything on exit
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Replace the cached analysis. Failures are logged and dropped.
    pub fn save(&self, analysis: &Analysis) {
        let json = match serde_json::to_string(&analysis.core()) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize analysis for cache: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(LAST_ANALYSIS_KEY, &json) {
            warn!("Failed to persist last analysis: {}", e);
        }
    }

    /// Read the cached analysis.
    ///
    /// A slot that fails to parse is cleared and reported as empty.
    pub fn load(&self) -> Option<Analysis> {
        let raw = match self.store.get(LAST_ANALYSIS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e @ Error::CorruptSlot { .. }) => {
                warn!("{}: dropping cached analysis ({})", ErrorKind::CacheCorrupt, e);
                self.clear();
                return None;
            }
            Err(e) => {
                warn!("Failed to read cached analysis: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<Analysis>(&raw) {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                warn!("{}: dropping cached analysis ({})", ErrorKind::CacheCorrupt, e);
                self.clear();
                None
            }
        }
    }

    /// Remove the cached analysis, if any.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(LAST_ANALYSIS_KEY) {
            warn!("Failed to clear cached analysis: {}", e);
        }
    }
}

impl Default for PersistentCache {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for PersistentCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentCache")
            .field("key", &LAST_ANALYSIS_KEY)
            .finish_non_exhaustive()
    }
}
