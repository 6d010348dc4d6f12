//! Life topics that select which meaning sub-table applies.

use serde::{Deserialize, Serialize};

/// The life domain a question is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// Body, vitality, and healing.
    Health,
    /// Finances and career.
    Money,
    /// Partners, family, and friends.
    Relationships,
    /// Spiritual life and personal growth.
    Spirituality,
}

impl Topic {
    /// All topics in menu order.
    pub const ALL: [Self; 4] = [
        Self::Health,
        Self::Money,
        Self::Relationships,
        Self::Spirituality,
    ];

    /// Stable identifier, as stored in the journal.
    pub fn id(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Money => "money",
            Self::Relationships => "relationships",
            Self::Spirituality => "spirituality",
        }
    }

    /// Human-facing name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Money => "Money/Career",
            Self::Relationships => "Relationships",
            Self::Spirituality => "Spirituality/Personal Growth",
        }
    }

    /// Parse a topic from a user-supplied string.
    ///
    /// Accepts the id, the display name, or a short alias.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if let Some(topic) = Self::ALL
            .into_iter()
            .find(|t| t.id() == s || t.display_name().to_lowercase() == s)
        {
            return Some(topic);
        }
        match s.as_str() {
            "career" | "finance" | "finances" => Some(Self::Money),
            "love" | "relationship" => Some(Self::Relationships),
            "spiritual" | "growth" => Some(Self::Spirituality),
            _ => None,
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
