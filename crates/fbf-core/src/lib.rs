//! Focus-Block-Flow Lenormand reading engine.
//!
//! Provides the 20-card Lenormand catalog, per-topic meaning tables for the
//! three spread positions, draws without replacement, a reading workflow with
//! per-card reveal, and a journal persisted through a key-value store.

pub mod config;
pub mod deck;
pub mod draw;
pub mod error;
pub mod journal;
pub mod meaning;
pub mod position;
pub mod reading;
pub mod session;
pub mod storage;
pub mod topic;

pub use config::ReadingConfig;
pub use deck::{Card, Deck};
pub use draw::{SPREAD_SIZE, draw, draw_spread};
pub use error::{ReadingError, ReadingResult};
pub use journal::{Journal, JournalEntry, JournalStore};
pub use meaning::{MeaningTable, fallback_meaning, resolve_meaning};
pub use position::Position;
pub use reading::{CardSlot, Reading};
pub use session::{ReadingSession, SessionState};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use topic::Topic;
