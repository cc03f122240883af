//! Cards and decks.
//!
//! - `Card`: a face-up/matched flag pair plus a pairing identifier
//! - `deck`: dealing shuffled decks of pairs and checking pair bookkeeping

pub mod card;
pub mod deck;

pub use card::Card;
pub use deck::{deal, is_well_paired, pair_counts};
