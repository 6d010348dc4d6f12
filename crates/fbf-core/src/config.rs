//! Configuration for a reading session.

use crate::journal::store::DEFAULT_JOURNAL_KEY;

/// Configuration for a reading session.
#[derive(Debug, Clone)]
pub struct ReadingConfig {
    /// RNG seed for reproducible draws. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Storage key the journal blob lives under.
    pub journal_key: String,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            seed: None,
            journal_key: DEFAULT_JOURNAL_KEY.to_string(),
        }
    }
}

impl ReadingConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the journal storage key. Blank keys are ignored.
    pub fn with_journal_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if !key.trim().is_empty() {
            self.journal_key = key;
        }
        self
    }
}
