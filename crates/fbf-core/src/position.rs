//! The three fixed slots of a Focus-Block-Flow spread.

use serde::{Deserialize, Serialize};

/// A spread position. Draw order assigns cards: first Focus, then Block, then Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// What you need to concentrate on.
    Focus,
    /// What is hindering your progress.
    Block,
    /// How to move forward effectively.
    Flow,
}

impl Position {
    /// All positions in spread order.
    pub const ALL: [Self; 3] = [Self::Focus, Self::Block, Self::Flow];

    /// Map a draw index (0-2) to its position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based slot index.
    pub fn index(self) -> usize {
        match self {
            Self::Focus => 0,
            Self::Block => 1,
            Self::Flow => 2,
        }
    }

    /// Lowercase identifier used in fallback meanings.
    pub fn id(self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Block => "block",
            Self::Flow => "flow",
        }
    }

    /// Slot heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Block => "Block",
            Self::Flow => "Flow",
        }
    }

    /// What the slot answers.
    pub fn description(self) -> &'static str {
        match self {
            Self::Focus => "What you need to concentrate on",
            Self::Block => "What is hindering your progress",
            Self::Flow => "How to move forward effectively",
        }
    }

    /// Parse a position from its id or its 1-based slot number.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "focus" | "1" => Some(Self::Focus),
            "block" | "2" => Some(Self::Block),
            "flow" | "3" => Some(Self::Flow),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
