use fbf_core::{Deck, MeaningTable, Position, ReadingError};

pub fn run(topic: &str, position: &str, card: &str) -> Result<(), String> {
    let topic = super::parse_topic(topic)?;
    let position = Position::parse(position)
        .ok_or_else(|| ReadingError::UnknownPosition(position.to_string()).to_string())?;
    let deck = Deck::lenormand();
    let card = deck
        .find(card)
        .ok_or_else(|| ReadingError::UnknownCard(card.to_string()).to_string())?;

    let meaning = MeaningTable::standard().resolve(topic, position, card);
    println!("{meaning}");
    Ok(())
}
