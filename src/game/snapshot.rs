//! Read-only view of a game for presentation layers.
//!
//! A `GameSnapshot` is a plain copy of what a renderer needs after each move:
//! the cards, the counters, and the turn phase. It serializes with serde so a
//! front end on the other side of a process or language boundary can draw it.
//! There is no way to turn a snapshot back into a running game.

use serde::{Deserialize, Serialize};

use super::engine::TurnPhase;
use crate::cards::Card;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Deck in table order.
    pub cards: Vec<Card>,
    pub flip_count: u32,
    pub score: i64,
    pub phase: TurnPhase,
    /// Pairs found so far.
    pub matched_pairs: usize,
    pub is_complete: bool,
}

impl GameSnapshot {
    /// Positions of cards a renderer should show face-up.
    pub fn face_up_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_face_up)
            .map(|(i, _)| i)
    }
}
