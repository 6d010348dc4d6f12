//! Journal entry type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::deck::Card;
use crate::draw::SPREAD_SIZE;
use crate::position::Position;
use crate::topic::Topic;

/// A recorded reading. Cards and meanings are snapshots taken at draw time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the reading was drawn.
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    /// The question, verbatim.
    pub question: String,
    /// Topic the reading was drawn under.
    pub topic: Topic,
    /// Drawn cards in position order.
    pub cards: [Card; SPREAD_SIZE],
    /// Resolved meanings in position order.
    pub meanings: [String; SPREAD_SIZE],
}

impl JournalEntry {
    /// Iterate `(position, card, meaning)` triples in spread order.
    pub fn slots(&self) -> impl Iterator<Item = (Position, &Card, &str)> {
        Position::ALL
            .into_iter()
            .zip(self.cards.iter())
            .zip(self.meanings.iter())
            .map(|((p, c), m)| (p, c, m.as_str()))
    }

    /// The three meanings read together.
    pub fn synthesis(&self) -> String {
        crate::reading::synthesis(self.topic, self.meanings.each_ref().map(String::as_str))
    }

    /// The date as a millisecond-precision ISO-8601 string.
    pub fn date_string(&self) -> String {
        iso_millis::format(&self.date)
    }
}

/// ISO-8601 UTC timestamps with millisecond precision and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(date: &DateTime<Utc>) -> String {
        date.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
