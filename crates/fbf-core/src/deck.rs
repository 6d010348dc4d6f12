//! The Lenormand card catalog.
//!
//! The catalog is the 20-card subset of the 36-card Lenormand deck covered by
//! the meaning tables. Each card carries a generic meaning that is shown for
//! reference only; readings use the topic tables in [`crate::meaning`].

use serde::{Deserialize, Serialize};

/// A single card in the deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique card number.
    pub id: u32,
    /// Unique card name, used as the meaning-table key.
    pub name: String,
    /// Generic description of the card.
    pub meaning: String,
}

impl Card {
    /// Create a card.
    pub fn new(id: u32, name: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            meaning: meaning.into(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Card number, name, and generic meaning for the bundled catalog.
pub const LENORMAND_CARDS: &[(u32, &str, &str)] = &[
    (1, "Rider", "Messages, news, arrivals, visitors, swift movement"),
    (2, "Clover", "Luck, opportunity, small pleasures, quick fortune"),
    (3, "Ship", "Travel, distance, movement, foreign matters, commerce"),
    (4, "House", "Home, security, family matters, domestic space, foundation"),
    (5, "Tree", "Health, growth, stability, longevity, family lineage"),
    (6, "Clouds", "Confusion, uncertainty, changing conditions, ambiguity"),
    (7, "Snake", "Complications, deception, wisdom, transformation, sensuality"),
    (8, "Coffin", "Endings, transitions, release, illness, transformation"),
    (9, "Bouquet", "Gifts, compliments, beauty, appreciation, invitations"),
    (10, "Scythe", "Swift endings, decisions, danger, surgery, harvesting"),
    (11, "Whip", "Conflict, arguments, repetition, discipline, passion"),
    (12, "Birds", "Communication, conversations, gossip, partnerships, anxiety"),
    (13, "Child", "Beginnings, innocence, naivety, new projects, playfulness"),
    (14, "Fox", "Cunning, self-employment, deception, adaptability, vigilance"),
    (15, "Bear", "Power, strength, money, protection, authority"),
    (16, "Stars", "Aspirations, guidance, spirituality, clarity, inspiration"),
    (17, "Stork", "Changes, improvements, fertility, movement, relocation"),
    (18, "Dog", "Loyalty, friendship, fidelity, trustworthiness, support"),
    (19, "Tower", "Institution, isolation, authority, protection, government"),
    (20, "Garden", "Social gatherings, public reputation, community, networking"),
];

/// An immutable, ordered card catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The bundled 20-card Lenormand catalog.
    pub fn lenormand() -> Self {
        let cards = LENORMAND_CARDS
            .iter()
            .map(|(id, name, meaning)| Card::new(*id, *name, *meaning))
            .collect();
        Self { cards }
    }

    /// Build a deck from arbitrary cards.
    ///
    /// Later duplicates (by id or case-insensitive name) are dropped so the
    /// uniqueness invariant holds.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut unique: Vec<Card> = Vec::new();
        for card in cards {
            let clash = unique
                .iter()
                .any(|c| c.id == card.id || c.name.eq_ignore_ascii_case(&card.name));
            if !clash {
                unique.push(card);
            }
        }
        Self { cards: unique }
    }

    /// All cards in catalog order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card by id.
    pub fn get(&self, id: u32) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Look up a card by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&Card> {
        let name = name.trim();
        self.cards
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::lenormand()
    }
}
