//! In-memory journal and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;
use crate::topic::Topic;

/// Past readings, newest first.
///
/// Serializes as a bare JSON array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading as the newest entry.
    pub fn record(&mut self, entry: JournalEntry) {
        self.entries.insert(0, entry);
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&JournalEntry> {
        self.entries.first()
    }

    /// Up to `n` most recent entries.
    pub fn recent(&self, n: usize) -> &[JournalEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Entries drawn under a topic, newest first.
    pub fn by_topic(&self, topic: Topic) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter().filter(move |e| e.topic == topic)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Reading Journal\n\n");
        for entry in &self.entries {
            out.push_str(&format!("## {}\n\n", entry.question));
            out.push_str(&format!(
                "*{}* | **{}**\n\n",
                entry.date_string(),
                entry.topic.display_name()
            ));
            for (position, card, meaning) in entry.slots() {
                out.push_str(&format!(
                    "- **{}**: {} ({})\n",
                    position.title(),
                    card.name,
                    meaning
                ));
            }
            out.push('\n');
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Reading Journal\n===============\n\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "{} [{}]\n",
                entry.date_string(),
                entry.topic.display_name()
            ));
            out.push_str(&format!("Q: {}\n", entry.question));
            for (position, card, meaning) in entry.slots() {
                out.push_str(&format!("  {:<5} {}: {}\n", position.title(), card.name, meaning));
            }
            out.push('\n');
        }
        out
    }
}
