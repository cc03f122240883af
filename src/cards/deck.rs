//! Deck construction and pair bookkeeping.

use rustc_hash::FxHashMap;

use super::card::Card;
use crate::core::identifier::{CardIdentifier, IdentifierFactory};
use crate::core::rng::GameRng;
use crate::core::shuffle::shuffled;

/// Build a shuffled deck of `pair_count` pairs.
///
/// Each pair gets a fresh identifier from `factory`.
///
/// # Panics
///
/// Panics if `pair_count` is zero.
#[must_use]
pub fn deal(pair_count: usize, factory: &mut IdentifierFactory, rng: &mut GameRng) -> Vec<Card> {
    assert!(pair_count > 0, "Pair count must be at least 1");

    let ordered: Vec<Card> = (0..pair_count)
        .flat_map(|_| {
            let card = Card::new(factory);
            [card, card]
        })
        .collect();

    shuffled(ordered, rng)
}

/// Count how many cards carry each identifier.
#[must_use]
pub fn pair_counts(cards: &[Card]) -> FxHashMap<CardIdentifier, usize> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(card.identifier).or_insert(0) += 1;
    }
    counts
}

/// Does every identifier in `cards` appear exactly twice?
#[must_use]
pub fn is_well_paired(cards: &[Card]) -> bool {
    pair_counts(cards).values().all(|&count| count == 2)
}
