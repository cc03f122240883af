//! Core building blocks: identifiers, RNG, shuffling, configuration.

pub mod identifier;
pub mod rng;
pub mod shuffle;
pub mod config;

pub use identifier::{CardIdentifier, IdentifierFactory};
pub use rng::{GameRng, GameRngState};
pub use shuffle::shuffled;
pub use config::GameConfig;
