use colored::Colorize;
use fbf_core::reading::REFLECTION_QUESTIONS;
use fbf_core::{Reading, ReadingError};

use super::StoreOptions;

pub fn run(
    opts: &StoreOptions,
    topic: Option<&str>,
    question: &str,
    seed: Option<u64>,
    hidden: bool,
) -> Result<(), String> {
    let mut session = super::open_session(opts, seed)?;
    if let Some(t) = topic {
        session.select_topic(super::parse_topic(t)?);
    }
    session.set_question(question);

    let journal_error = match session.draw() {
        Ok(_) => None,
        Err(e @ (ReadingError::Storage(_) | ReadingError::Serialization(_))) => Some(e),
        Err(e) => return Err(e.to_string()),
    };
    if !hidden {
        session.reveal_all().map_err(|e| e.to_string())?;
    }
    let reading = session.current().ok_or("no reading drawn")?;
    print_reading(reading);

    match journal_error {
        Some(e) => Err(format!("reading not saved: {e}")),
        None => {
            println!(
                "  {}",
                format!("Saved to journal ({} entries)", session.journal().len()).dimmed()
            );
            Ok(())
        }
    }
}

fn print_reading(reading: &Reading) {
    println!(
        "  {} {}",
        reading.topic.display_name().bold(),
        format!("\"{}\"", reading.question).italic()
    );
    println!();
    for slot in reading.slots() {
        let position = slot.position;
        println!(
            "  {} {}",
            format!("{}. {}", position.index() + 1, position.title())
                .bold()
                .purple(),
            position.description().dimmed()
        );
        if slot.revealed {
            println!("     {}: {}", slot.card.name.bold(), slot.meaning);
        } else {
            println!("     {}", "[face down]".dimmed());
        }
        println!();
    }

    if reading.is_fully_revealed() {
        println!("  {}", "Synthesis".bold().purple());
        println!("     {}", reading.synthesis());
        println!();
        println!("  {}", "Reflection".bold().purple());
        for question in REFLECTION_QUESTIONS {
            println!("     - {}", question.dimmed());
        }
        println!();
    }
}
