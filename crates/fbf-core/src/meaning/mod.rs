//! Meaning-table lookup.
//!
//! A [`MeaningTable`] maps `(topic, position, card id)` to a meaning string.
//! Every entry remembers the card name it was written for, so a card that
//! reuses an id under another name counts as a gap. Lookups never fail: a gap
//! resolves to a synthetic "`<card> in <position> position for <topic>`" line
//! instead.

pub mod tables;

use std::borrow::Cow;
use std::collections::HashMap;

use crate::deck::{Card, Deck};
use crate::error::{ReadingError, ReadingResult};
use crate::position::Position;
use crate::topic::Topic;

/// Composite key into a meaning table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeaningKey {
    /// Topic sub-table.
    pub topic: Topic,
    /// Spread position.
    pub position: Position,
    /// Card number.
    pub card: u32,
}

impl MeaningKey {
    /// Create a key.
    pub fn new(topic: Topic, position: Position, card: u32) -> Self {
        Self {
            topic,
            position,
            card,
        }
    }
}

#[derive(Debug, Clone)]
struct Meaning {
    card: String,
    text: Cow<'static, str>,
}

/// Per-topic, per-position card meanings.
#[derive(Debug, Clone, Default)]
pub struct MeaningTable {
    entries: HashMap<MeaningKey, Meaning>,
}

impl MeaningTable {
    /// A table with no entries. Every lookup falls back.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The full table for the bundled Lenormand catalog.
    ///
    /// Rows in [`tables`] follow catalog order.
    pub fn standard() -> Self {
        let deck = Deck::lenormand();
        let mut table = Self::empty();
        for topic in Topic::ALL {
            for position in Position::ALL {
                for (card, text) in deck.cards().iter().zip(tables::row(topic, position)) {
                    table.insert(topic, position, card, *text);
                }
            }
        }
        table
    }

    /// Add or replace the meaning of `card`.
    pub fn insert(
        &mut self,
        topic: Topic,
        position: Position,
        card: &Card,
        text: impl Into<Cow<'static, str>>,
    ) {
        self.entries.insert(
            MeaningKey::new(topic, position, card.id),
            Meaning {
                card: card.name.clone(),
                text: text.into(),
            },
        );
    }

    /// Exact-match lookup. `None` on a table gap, including an entry under
    /// the same id that was written for a differently named card.
    pub fn lookup(&self, topic: Topic, position: Position, card: &Card) -> Option<&str> {
        self.entries
            .get(&MeaningKey::new(topic, position, card.id))
            .filter(|m| m.card == card.name)
            .map(|m| m.text.as_ref())
    }

    /// Resolve the meaning of a card in a position, falling back on a gap.
    pub fn resolve(&self, topic: Topic, position: Position, card: &Card) -> String {
        match self.lookup(topic, position, card) {
            Some(text) => text.to_string(),
            None => fallback_meaning(card, position, topic),
        }
    }

    /// Number of configured meanings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The synthetic meaning used when a table has no entry.
pub fn fallback_meaning(card: &Card, position: Position, topic: Topic) -> String {
    format!(
        "{} in {} position for {}",
        card.name,
        position.id(),
        topic.id()
    )
}

/// Resolve the meaning for a draw index (0 = focus, 1 = block, 2 = flow).
pub fn resolve_meaning(
    table: &MeaningTable,
    topic: Topic,
    index: usize,
    card: &Card,
) -> ReadingResult<String> {
    let position = Position::from_index(index).ok_or(ReadingError::InvalidPosition(index))?;
    Ok(table.resolve(topic, position, card))
}
