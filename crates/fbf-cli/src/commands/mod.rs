pub mod deck;
pub mod draw;
pub mod export;
pub mod journal;
pub mod meaning;
pub mod session;
pub mod topics;

use std::path::PathBuf;

use fbf_core::storage::{FileStore, KeyValueStore, MemoryStore};
use fbf_core::{JournalStore, ReadingConfig, ReadingResult, ReadingSession, Topic};

/// Where the journal lives, from the global CLI flags.
pub struct StoreOptions {
    pub journal_dir: PathBuf,
    pub ephemeral: bool,
}

impl StoreOptions {
    fn open(&self) -> Store {
        if self.ephemeral {
            Store::Memory(MemoryStore::new())
        } else {
            Store::File(FileStore::new(&self.journal_dir))
        }
    }
}

/// Storage chosen at runtime.
pub enum Store {
    File(FileStore),
    Memory(MemoryStore),
}

impl KeyValueStore for Store {
    fn get(&self, key: &str) -> ReadingResult<Option<String>> {
        match self {
            Self::File(s) => s.get(key),
            Self::Memory(s) => s.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> ReadingResult<()> {
        match self {
            Self::File(s) => s.set(key, value),
            Self::Memory(s) => s.set(key, value),
        }
    }
}

/// Load the journal for read-only commands.
fn load_journal(opts: &StoreOptions) -> Result<JournalStore<Store>, String> {
    JournalStore::load(opts.open()).map_err(|e| format!("cannot load journal: {e}"))
}

/// Start a reading session over the configured storage.
fn open_session(opts: &StoreOptions, seed: Option<u64>) -> Result<ReadingSession<Store>, String> {
    let mut config = ReadingConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    ReadingSession::new(opts.open(), config).map_err(|e| format!("failed to start session: {e}"))
}

fn parse_topic(s: &str) -> Result<Topic, String> {
    Topic::parse(s).ok_or_else(|| {
        format!("unknown topic '{s}', use: health, money, relationships, spirituality")
    })
}
