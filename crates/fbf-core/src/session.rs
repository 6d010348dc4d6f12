//! Reading workflow.
//!
//! `ReadingSession` holds the current topic and question, draws spreads,
//! tracks the reveal state of the current reading, and journals every draw.
//! `process` exposes the same operations as a line-based command set.

use chrono::{SubsecRound, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::config::ReadingConfig;
use crate::deck::Deck;
use crate::draw::draw_spread;
use crate::error::{ReadingError, ReadingResult};
use crate::journal::log::Journal;
use crate::journal::store::JournalStore;
use crate::meaning::MeaningTable;
use crate::position::Position;
use crate::reading::{CardSlot, Reading};
use crate::storage::KeyValueStore;
use crate::topic::Topic;

/// Where the workflow stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Topic or question missing, nothing drawn.
    Idle,
    /// Topic selected and question non-blank.
    Ready,
    /// A reading is on the table.
    Revealed,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Ready => write!(f, "Ready"),
            Self::Revealed => write!(f, "Revealed"),
        }
    }
}

/// An interactive reading session backed by a persisted journal.
pub struct ReadingSession<S: KeyValueStore> {
    deck: Deck,
    table: MeaningTable,
    topic: Option<Topic>,
    question: String,
    current: Option<Reading>,
    journal: JournalStore<S>,
    rng: StdRng,
}

impl<S: KeyValueStore> ReadingSession<S> {
    /// Start a session with the bundled deck and meaning table.
    pub fn new(storage: S, config: ReadingConfig) -> ReadingResult<Self> {
        Self::with_tables(storage, config, Deck::lenormand(), MeaningTable::standard())
    }

    /// Start a session with a custom deck and meaning table.
    pub fn with_tables(
        storage: S,
        config: ReadingConfig,
        deck: Deck,
        table: MeaningTable,
    ) -> ReadingResult<Self> {
        let journal = JournalStore::load_with_key(storage, config.journal_key)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            deck,
            table,
            topic: None,
            question: String::new(),
            current: None,
            journal,
            rng,
        })
    }

    /// Current workflow state.
    pub fn state(&self) -> SessionState {
        if self.current.is_some() {
            SessionState::Revealed
        } else if self.topic.is_some() && !self.question.trim().is_empty() {
            SessionState::Ready
        } else {
            SessionState::Idle
        }
    }

    /// Select the topic for the next draw.
    pub fn select_topic(&mut self, topic: Topic) {
        self.topic = Some(topic);
    }

    /// Deselect the topic.
    pub fn clear_topic(&mut self) {
        self.topic = None;
    }

    /// Set the question for the next draw. Stored verbatim.
    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    /// Selected topic.
    pub fn topic(&self) -> Option<Topic> {
        self.topic
    }

    /// Entered question.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The reading on the table, if any.
    pub fn current(&self) -> Option<&Reading> {
        self.current.as_ref()
    }

    /// The journal, newest first.
    pub fn journal(&self) -> &Journal {
        self.journal.all()
    }

    /// The persisted journal store.
    pub fn journal_store(&self) -> &JournalStore<S> {
        &self.journal
    }

    /// The deck in use.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The meaning table in use.
    pub fn table(&self) -> &MeaningTable {
        &self.table
    }

    /// Draw a spread for the selected topic and question, and journal it.
    ///
    /// Fails without touching any state when the topic is unset or the
    /// question is blank. If the journal cannot be written, the reading and
    /// the in-memory entry are kept and the storage error is returned.
    pub fn draw(&mut self) -> ReadingResult<&Reading> {
        let topic = self.topic.ok_or(ReadingError::MissingTopic)?;
        if self.question.trim().is_empty() {
            return Err(ReadingError::MissingQuestion);
        }

        let cards = draw_spread(self.deck.cards(), &mut self.rng)?;
        let meanings = Position::ALL.map(|p| self.table.resolve(topic, p, &cards[p.index()]));
        // Journal dates are stored at millisecond precision.
        let date = Utc::now().trunc_subsecs(3);
        let reading = Reading::new(topic, self.question.clone(), date, cards, meanings);

        info!(
            topic = topic.id(),
            focus = %reading.slot(Position::Focus).card,
            block = %reading.slot(Position::Block).card,
            flow = %reading.slot(Position::Flow).card,
            "drew reading"
        );

        let saved = self.journal.append(reading.to_entry());
        let reading = &*self.current.insert(reading);
        saved?;
        Ok(reading)
    }

    /// Turn one card of the current reading face up.
    pub fn reveal(&mut self, position: Position) -> ReadingResult<&CardSlot> {
        let reading = self.current.as_mut().ok_or(ReadingError::NoReading)?;
        Ok(reading.reveal(position))
    }

    /// Turn every card of the current reading face up.
    pub fn reveal_all(&mut self) -> ReadingResult<&Reading> {
        let reading = self.current.as_mut().ok_or(ReadingError::NoReading)?;
        reading.reveal_all();
        Ok(reading)
    }

    /// Clear the current reading. The journal is unaffected.
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> ReadingResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "topic" => self.do_topic(rest),
            "topics" => Ok(topic_menu()),
            "ask" | "question" => self.do_ask(rest),
            "draw" => self.do_draw(),
            "reveal" | "flip" => self.do_reveal(rest),
            "show" => self.do_show(),
            "reset" | "new" => self.do_reset(),
            "journal" => self.do_journal_show(rest),
            "export" => self.do_journal_export(rest),
            "status" => Ok(self.do_status()),
            "help" => Ok(help_text()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(ReadingError::UnknownCommand(other.to_string())),
        }
    }

    fn do_topic(&mut self, rest: &str) -> ReadingResult<String> {
        if rest.is_empty() {
            return Err(ReadingError::InvalidChoice(
                "usage: topic <health|money|relationships|spirituality>".to_string(),
            ));
        }
        let topic =
            Topic::parse(rest).ok_or_else(|| ReadingError::UnknownTopic(rest.to_string()))?;
        self.select_topic(topic);
        Ok(format!("Topic: {topic}"))
    }

    fn do_ask(&mut self, rest: &str) -> ReadingResult<String> {
        if rest.is_empty() {
            return Err(ReadingError::MissingQuestion);
        }
        self.set_question(rest);
        Ok(format!("Question: {rest}"))
    }

    fn do_draw(&mut self) -> ReadingResult<String> {
        let saved = match self.draw() {
            Ok(_) => Ok(()),
            Err(e @ (ReadingError::Storage(_) | ReadingError::Serialization(_))) => Err(e),
            Err(e) => return Err(e),
        };
        let reading = self.current().ok_or(ReadingError::NoReading)?;
        let mut out = format!(
            "Drew three cards for {}: {}\n",
            reading.topic, reading.question
        );
        for slot in reading.slots() {
            out.push_str(&format_slot(slot));
            out.push('\n');
        }
        out.push_str("Use 'reveal <1-3|all>' to turn the cards.");
        if let Err(e) = saved {
            out.push_str(&format!("\nWarning: reading not saved: {e}"));
        }
        Ok(out)
    }

    fn do_reveal(&mut self, rest: &str) -> ReadingResult<String> {
        if rest.is_empty() || rest.eq_ignore_ascii_case("all") {
            let reading = self.reveal_all()?;
            return Ok(format_reading(reading));
        }
        let position =
            Position::parse(rest).ok_or_else(|| ReadingError::UnknownPosition(rest.to_string()))?;
        let slot = self.reveal(position)?;
        Ok(format_slot(slot))
    }

    fn do_show(&self) -> ReadingResult<String> {
        let reading = self.current().ok_or(ReadingError::NoReading)?;
        Ok(format_reading(reading))
    }

    fn do_reset(&mut self) -> ReadingResult<String> {
        self.reset();
        Ok("Cards cleared. Ready for a new reading.".to_string())
    }

    fn do_journal_show(&self, rest: &str) -> ReadingResult<String> {
        let journal = self.journal();
        if journal.is_empty() {
            return Ok("Journal is empty.".to_string());
        }
        let limit = if rest.is_empty() {
            5
        } else {
            rest.parse::<usize>()
                .map_err(|_| ReadingError::InvalidChoice(format!("not a number: {rest}")))?
        };

        let recent = journal.recent(limit);
        let mut out = format!(
            "Journal ({} entries, showing latest {}):\n\n",
            journal.len(),
            recent.len()
        );
        // Render the slice through a throwaway journal to reuse the text export.
        let mut mini = Journal::new();
        for e in recent.iter().rev() {
            mini.record(e.clone());
        }
        out.push_str(&mini.export_text());
        Ok(out.trim_end().to_string())
    }

    fn do_journal_export(&self, format: &str) -> ReadingResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.journal().export_markdown()),
            "text" | "txt" => Ok(self.journal().export_text()),
            "json" => Ok(serde_json::to_string_pretty(self.journal())?),
            other => Err(ReadingError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text, json"
            ))),
        }
    }

    fn do_status(&self) -> String {
        let mut out = format!("State: {}\n", self.state());
        match self.topic {
            Some(t) => out.push_str(&format!("Topic: {t}\n")),
            None => out.push_str("Topic: (none)\n"),
        }
        if self.question.trim().is_empty() {
            out.push_str("Question: (none)\n");
        } else {
            out.push_str(&format!("Question: {}\n", self.question));
        }
        out.push_str(&format!("Journal: {} entries", self.journal().len()));
        out
    }
}

/// Render a slot, hiding the card until it is revealed.
pub fn format_slot(slot: &CardSlot) -> String {
    let position = slot.position;
    if slot.revealed {
        format!(
            "{}. {} ({})\n   {}: {}",
            position.index() + 1,
            position.title(),
            position.description(),
            slot.card.name,
            slot.meaning
        )
    } else {
        format!(
            "{}. {} ({})\n   [face down]",
            position.index() + 1,
            position.title(),
            position.description()
        )
    }
}

/// Render every slot, followed by the synthesis once all cards are face up.
pub fn format_reading(reading: &Reading) -> String {
    let mut lines: Vec<String> = reading.slots().iter().map(format_slot).collect();
    if reading.is_fully_revealed() {
        lines.push(format!("Synthesis: {}", reading.synthesis()));
    }
    lines.join("\n")
}

fn topic_menu() -> String {
    let lines: Vec<String> = Topic::ALL
        .iter()
        .map(|t| format!("  {:<14} {}", t.id(), t.display_name()))
        .collect();
    format!("Topics:\n{}", lines.join("\n"))
}

fn help_text() -> String {
    "\
Reading Commands:
  topic <name>                  Select a topic (health, money, relationships, spirituality)
  topics                        List topics
  ask <question>                Enter your question
  draw                          Draw Focus, Block, and Flow cards
  reveal [1-3|focus|block|flow|all]
                                Turn a card face up (default: all)
  show                          Show the current reading
  reset                         Clear the cards for a new reading
  journal [n]                   Show the latest n journal entries (default 5)
  export [markdown|text|json]   Export the full journal
  status                        Show session status
  help                          Show this help
  quit                          Exit"
        .to_string()
}
