//! Key-value storage backends for persisted state.
//!
//! The journal is a single serialized blob under a fixed key. [`FileStore`]
//! keeps one `<key>.json` file per key in a directory; [`MemoryStore`] keeps
//! everything in process.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ReadingError, ReadingResult};

/// Durable string storage addressed by key.
pub trait KeyValueStore {
    /// Read the value under `key`, if any.
    fn get(&self, key: &str) -> ReadingResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> ReadingResult<()>;
}

/// In-process storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ReadingResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ReadingResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed storage, one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store files under `dir`. The directory is created on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Backing directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> ReadingResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ReadingError::Storage(format!("read {key}: {e}"))),
        }
    }

    /// Write-replace: the value goes to a temp file that is synced and then
    /// renamed over the target, so a crash never leaves a half-written blob.
    fn set(&mut self, key: &str, value: &str) -> ReadingResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| ReadingError::Storage(format!("create {}: {e}", self.dir.display())))?;

        let target = self.path_for(key);
        let temp = target.with_extension("json.tmp");
        let mut f = fs::File::create(&temp)
            .map_err(|e| ReadingError::Storage(format!("create temp file: {e}")))?;
        f.write_all(value.as_bytes())
            .map_err(|e| ReadingError::Storage(format!("write temp file: {e}")))?;
        f.sync_all()
            .map_err(|e| ReadingError::Storage(format!("sync temp file: {e}")))?;
        drop(f);

        fs::rename(&temp, &target)
            .map_err(|e| ReadingError::Storage(format!("replace {}: {e}", target.display())))?;
        Ok(())
    }
}
