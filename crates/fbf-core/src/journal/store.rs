//! Journal persistence on top of a [`KeyValueStore`].

use tracing::{debug, warn};

use super::entry::JournalEntry;
use super::log::Journal;
use crate::error::ReadingResult;
use crate::storage::KeyValueStore;

/// Storage key for the journal blob.
pub const DEFAULT_JOURNAL_KEY: &str = "divination-journal";

/// Suffix of the key a corrupt blob is moved to.
pub const CORRUPT_SUFFIX: &str = ".corrupt";

/// A journal bound to the storage it persists to.
///
/// Every append rewrites the whole journal under the key.
#[derive(Debug)]
pub struct JournalStore<S> {
    storage: S,
    key: String,
    journal: Journal,
}

impl<S: KeyValueStore> JournalStore<S> {
    /// Load the journal under [`DEFAULT_JOURNAL_KEY`].
    pub fn load(storage: S) -> ReadingResult<Self> {
        Self::load_with_key(storage, DEFAULT_JOURNAL_KEY)
    }

    /// Load the journal under `key`.
    ///
    /// A missing blob yields an empty journal. A blob that does not parse is
    /// copied to `<key>.corrupt` and the journal starts empty, whether or not
    /// the copy could be written. Only a failed read is an error.
    pub fn load_with_key(mut storage: S, key: impl Into<String>) -> ReadingResult<Self> {
        let key = key.into();
        let journal = match storage.get(&key)? {
            None => Journal::new(),
            Some(raw) => match serde_json::from_str::<Journal>(&raw) {
                Ok(journal) => journal,
                Err(e) => {
                    let backup = format!("{key}{CORRUPT_SUFFIX}");
                    warn!(key = %key, backup = %backup, error = %e, "journal is corrupt, starting empty");
                    if let Err(e) = storage.set(&backup, &raw) {
                        warn!(backup = %backup, error = %e, "could not back up corrupt journal");
                    }
                    Journal::new()
                }
            },
        };
        debug!(key = %key, entries = journal.len(), "loaded journal");
        Ok(Self {
            storage,
            key,
            journal,
        })
    }

    /// Record an entry and persist the full journal.
    pub fn append(&mut self, entry: JournalEntry) -> ReadingResult<()> {
        self.journal.record(entry);
        self.save()
    }

    /// Serialize and write the whole journal.
    pub fn save(&mut self) -> ReadingResult<()> {
        let json = serde_json::to_string(&self.journal)?;
        self.storage.set(&self.key, &json)?;
        debug!(key = %self.key, entries = self.journal.len(), bytes = json.len(), "saved journal");
        Ok(())
    }

    /// The in-memory journal.
    pub fn all(&self) -> &Journal {
        &self.journal
    }

    /// Storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
