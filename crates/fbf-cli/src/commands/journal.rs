use colored::Colorize;
use fbf_core::JournalEntry;

use super::StoreOptions;

pub fn run(opts: &StoreOptions, limit: usize, topic: Option<&str>) -> Result<(), String> {
    let store = super::load_journal(opts)?;
    let journal = store.all();

    let entries: Vec<&JournalEntry> = match topic {
        Some(t) => {
            let topic = super::parse_topic(t)?;
            journal.by_topic(topic).take(limit).collect()
        }
        None => journal.recent(limit).iter().collect(),
    };

    if entries.is_empty() {
        println!("  Journal is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "  {} {}",
            entry.date_string().dimmed(),
            entry.topic.display_name().bold()
        );
        println!("  {}", entry.question);
        for (position, card, meaning) in entry.slots() {
            println!("    {:<5} {}: {}", position.title(), card.name.bold(), meaning);
        }
        println!();
    }
    println!(
        "  Showing {} of {} entries",
        entries.len(),
        journal.len()
    );

    Ok(())
}
