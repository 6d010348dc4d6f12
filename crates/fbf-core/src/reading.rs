//! The result of one draw.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::deck::Card;
use crate::draw::SPREAD_SIZE;
use crate::journal::entry::JournalEntry;
use crate::position::Position;
use crate::topic::Topic;

/// Prompts shown alongside a fully revealed reading.
pub const REFLECTION_QUESTIONS: [&str; 4] = [
    "How can you actively implement the Focus guidance in your daily life?",
    "What practical steps can you take to address the Block?",
    "Which aspects of the Flow advice resonate most with your situation?",
    "How do these three cards create a story that relates to your question?",
];

/// Combine the focus, block, and flow meanings into one paragraph.
pub fn synthesis(topic: Topic, meanings: [&str; SPREAD_SIZE]) -> String {
    let [focus, block, flow] = meanings.map(str::to_lowercase);
    format!(
        "For your {} question, focus on {focus} While being aware that {block} \
         To move forward effectively, {flow}",
        topic.id()
    )
}

/// One positioned card of a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSlot {
    /// Spread position.
    pub position: Position,
    /// The drawn card.
    pub card: Card,
    /// Meaning resolved for the reading's topic.
    pub meaning: String,
    /// Whether the card has been turned face up.
    pub revealed: bool,
}

/// Three positioned cards for a topic and question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Topic the reading was drawn under.
    pub topic: Topic,
    /// The question, verbatim.
    pub question: String,
    /// When the cards were drawn.
    pub date: DateTime<Utc>,
    slots: [CardSlot; SPREAD_SIZE],
}

impl Reading {
    /// Build a reading from cards and meanings in draw order. All slots start hidden.
    pub fn new(
        topic: Topic,
        question: impl Into<String>,
        date: DateTime<Utc>,
        cards: [Card; SPREAD_SIZE],
        meanings: [String; SPREAD_SIZE],
    ) -> Self {
        let [focus, block, flow] = cards;
        let [focus_meaning, block_meaning, flow_meaning] = meanings;
        let slot = |position, card, meaning| CardSlot {
            position,
            card,
            meaning,
            revealed: false,
        };
        let slots = [
            slot(Position::Focus, focus, focus_meaning),
            slot(Position::Block, block, block_meaning),
            slot(Position::Flow, flow, flow_meaning),
        ];
        Self {
            topic,
            question: question.into(),
            date,
            slots,
        }
    }

    /// All slots in position order.
    pub fn slots(&self) -> &[CardSlot; SPREAD_SIZE] {
        &self.slots
    }

    /// The slot for a position.
    pub fn slot(&self, position: Position) -> &CardSlot {
        &self.slots[position.index()]
    }

    /// Turn one card face up. Returns the slot.
    pub fn reveal(&mut self, position: Position) -> &CardSlot {
        let slot = &mut self.slots[position.index()];
        slot.revealed = true;
        slot
    }

    /// Turn every card face up.
    pub fn reveal_all(&mut self) {
        for slot in &mut self.slots {
            slot.revealed = true;
        }
    }

    /// Whether every card is face up.
    pub fn is_fully_revealed(&self) -> bool {
        self.slots.iter().all(|s| s.revealed)
    }

    /// The three meanings read together. See [`synthesis`].
    pub fn synthesis(&self) -> String {
        synthesis(self.topic, self.slots.each_ref().map(|s| s.meaning.as_str()))
    }

    /// Snapshot as a journal entry.
    pub fn to_entry(&self) -> JournalEntry {
        JournalEntry {
            date: self.date,
            question: self.question.clone(),
            topic: self.topic,
            cards: self.slots.clone().map(|s| s.card),
            meanings: self.slots.clone().map(|s| s.meaning),
        }
    }
}
