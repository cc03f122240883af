//! Card entity.
//!
//! A `Card` is plain data: whether it is showing, whether it has been matched,
//! and which pair it belongs to. It is `Copy`, so putting one card into two
//! deck slots yields two independent cards that share an identifier.

use serde::{Deserialize, Serialize};

use crate::core::identifier::{CardIdentifier, IdentifierFactory};

/// A single card on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Is the card's face currently revealed?
    pub is_face_up: bool,

    /// Has the card been matched? Never reset within a game.
    pub is_matched: bool,

    /// Pairing key shared with exactly one other card in the deck.
    pub identifier: CardIdentifier,
}

impl Card {
    /// Create a face-down, unmatched card with a fresh identifier.
    #[must_use]
    pub fn new(factory: &mut IdentifierFactory) -> Self {
        Self::with_identifier(factory.next_identifier())
    }

    /// Create a face-down, unmatched card with a known identifier.
    #[must_use]
    pub const fn with_identifier(identifier: CardIdentifier) -> Self {
        Self {
            is_face_up: false,
            is_matched: false,
            identifier,
        }
    }

    /// Does this card pair with `other`?
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.identifier == other.identifier
    }
}
