//! Card draws without replacement.

use rand::Rng;
use tracing::debug;

use crate::deck::Card;
use crate::error::{ReadingError, ReadingResult};

/// Number of cards in a Focus-Block-Flow spread.
pub const SPREAD_SIZE: usize = 3;

/// Draw `count` distinct cards uniformly at random.
///
/// Each step picks a uniform index over the cards still in the pool and
/// removes it, so the result is a uniformly random ordered sample (a partial
/// Fisher-Yates shuffle). Result order is draw order.
pub fn draw<R: Rng + ?Sized>(
    deck: &[Card],
    count: usize,
    rng: &mut R,
) -> ReadingResult<Vec<Card>> {
    if deck.len() < count {
        return Err(ReadingError::DeckTooSmall {
            needed: count,
            available: deck.len(),
        });
    }

    let mut pool: Vec<&Card> = deck.iter().collect();
    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        let idx = rng.random_range(0..pool.len());
        drawn.push(pool.swap_remove(idx).clone());
    }

    let names: Vec<&str> = drawn.iter().map(|c| c.name.as_str()).collect();
    debug!(count, cards = ?names, "drew cards");
    Ok(drawn)
}

/// Draw a full three-card spread.
pub fn draw_spread<R: Rng + ?Sized>(
    deck: &[Card],
    rng: &mut R,
) -> ReadingResult<[Card; SPREAD_SIZE]> {
    draw(deck, SPREAD_SIZE, rng)?
        .try_into()
        .map_err(|v: Vec<Card>| ReadingError::DeckTooSmall {
            needed: SPREAD_SIZE,
            available: v.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn draws_three_distinct() {
        let deck = Deck::lenormand();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let cards = draw(deck.cards(), 3, &mut rng).unwrap();
            assert_eq!(cards.len(), 3);
            let ids: HashSet<u32> = cards.iter().map(|c| c.id).collect();
            assert_eq!(ids.len(), 3);
            assert!(cards.iter().all(|c| deck.cards().contains(c)));
        }
    }

    #[test]
    fn seeded_draws_repeat() {
        let deck = Deck::lenormand();
        let a = draw(deck.cards(), 3, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = draw(deck.cards(), 3, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn whole_deck_is_permutation() {
        let deck = Deck::lenormand();
        let mut rng = StdRng::seed_from_u64(1);
        let cards = draw(deck.cards(), deck.len(), &mut rng).unwrap();
        let ids: HashSet<u32> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), deck.len());
    }

    #[test]
    fn deck_too_small() {
        let deck = Deck::lenormand();
        let mut rng = StdRng::seed_from_u64(0);
        let result = draw(&deck.cards()[..2], 3, &mut rng);
        assert!(matches!(
            result,
            Err(ReadingError::DeckTooSmall {
                needed: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn roughly_uniform() {
        let deck = Deck::lenormand();
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 20_000;
        let mut counts = [0u32; 21];
        for _ in 0..trials {
            for card in draw(deck.cards(), 3, &mut rng).unwrap() {
                counts[card.id as usize] += 1;
            }
        }
        // Expected 3000 per card; allow a wide band.
        for (id, &n) in counts.iter().enumerate().skip(1) {
            assert!((2600..=3400).contains(&n), "card {id} drawn {n} times");
        }
    }

    #[test]
    fn every_card_reaches_every_position() {
        let deck = Deck::lenormand();
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen: [HashSet<u32>; 3] = Default::default();
        for _ in 0..2000 {
            let spread = draw_spread(deck.cards(), &mut rng).unwrap();
            for (slot, card) in spread.iter().enumerate() {
                seen[slot].insert(card.id);
            }
        }
        for slot in &seen {
            assert_eq!(slot.len(), 20);
        }
    }

    proptest! {
        #[test]
        fn draw_invariants(seed in any::<u64>(), size in 3usize..=20, count in 0usize..=3) {
            let deck = Deck::lenormand();
            let cards = &deck.cards()[..size];
            let mut rng = StdRng::seed_from_u64(seed);
            let drawn = draw(cards, count, &mut rng).unwrap();
            prop_assert_eq!(drawn.len(), count);
            let ids: HashSet<u32> = drawn.iter().map(|c| c.id).collect();
            prop_assert_eq!(ids.len(), count);
            prop_assert!(drawn.iter().all(|c| cards.contains(c)));
        }
    }
}
