//! Error types for the reading engine.

use thiserror::Error;

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors that can occur while preparing, drawing, or journaling a reading.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// A draw was attempted before a topic was selected.
    #[error("please select a topic first")]
    MissingTopic,

    /// A draw was attempted with an empty or whitespace-only question.
    #[error("please enter a question")]
    MissingQuestion,

    /// Topic string did not match any known topic.
    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    /// Position string did not match any spread position.
    #[error("unknown position: {0}")]
    UnknownPosition(String),

    /// Position index outside the three-card spread.
    #[error("invalid position index: {0} (expected 0-2)")]
    InvalidPosition(usize),

    /// Card name not present in the deck.
    #[error("unknown card: {0}")]
    UnknownCard(String),

    /// The deck holds fewer cards than the draw asks for.
    #[error("deck has {available} cards, cannot draw {needed}")]
    DeckTooSmall {
        /// Cards requested.
        needed: usize,
        /// Cards in the deck.
        available: usize,
    },

    /// No reading has been drawn yet.
    #[error("no reading drawn yet")]
    NoReading,

    /// Invalid choice or input.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Persistent storage could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// Journal (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
