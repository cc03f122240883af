//! The concentration engine.
//!
//! `Concentration` deals a shuffled deck of pairs and runs the two-pick turn:
//! the first pick goes pending, the second is compared against it. Callers
//! drive it with `choose_card` and read state back afterwards, or take a
//! `GameSnapshot` to hand to a renderer.

mod engine;
mod snapshot;

pub use engine::{Concentration, TurnPhase};
pub use snapshot::GameSnapshot;
