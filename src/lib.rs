//! # concentration
//!
//! A memory-matching ("concentration") card game engine.
//!
//! ## Design Principles
//!
//! 1. **State only**: The engine owns the deck, the counters, and the turn
//!    logic. Rendering, themes, and input mapping belong to the caller.
//!
//! 2. **Pull-based**: Mutators return nothing and fire no callbacks. Callers
//!    read `cards()`, `flip_count()` and `score()` after each move.
//!
//! 3. **Deterministic when asked**: A seeded `GameConfig` always deals the
//!    same deck, which keeps tests and replays reproducible.
//!
//! ## Rules
//!
//! - The first pick of a turn turns every card face-down, then reveals the
//!   picked card and leaves it pending.
//! - The second pick reveals another card and compares: a pair scores `+2`
//!   and both cards are matched for good, a miss scores `-1`.
//! - Revealing a face-down card counts as one flip. Matched cards ignore picks.
//!
//! ## Modules
//!
//! - `core`: Card identifiers, RNG, shuffling, configuration
//! - `cards`: The card entity and deck dealing
//! - `game`: The `Concentration` engine and render snapshots

pub mod core;
pub mod cards;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CardIdentifier, IdentifierFactory,
    GameRng, GameRngState,
    GameConfig,
    shuffled,
};

pub use crate::cards::{Card, deal, is_well_paired, pair_counts};

pub use crate::game::{Concentration, GameSnapshot, TurnPhase};
