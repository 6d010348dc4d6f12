//! Journal of past readings and its persistence.

pub mod entry;
pub mod log;
pub mod store;

pub use entry::JournalEntry;
pub use log::Journal;
pub use store::{DEFAULT_JOURNAL_KEY, JournalStore};
