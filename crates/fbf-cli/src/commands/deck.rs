use comfy_table::{ContentArrangement, Table};
use fbf_core::Deck;

pub fn run() -> Result<(), String> {
    let deck = Deck::lenormand();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Card", "Meaning"]);
    for card in deck.cards() {
        table.add_row(vec![card.id.to_string(), card.name.clone(), card.meaning.clone()]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", deck.len());

    Ok(())
}
