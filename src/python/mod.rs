//! Python bindings for the concentration engine.
//!
//! # Quick Start
//!
//! ```python
//! import concentration
//!
//! game = concentration.Concentration(pair_count=6, seed=42)
//! game.choose_card(0)
//! game.choose_card(1)
//!
//! for card in game.cards():
//!     print(card.identifier, card.is_face_up, card.is_matched)
//! print(game.flip_count, game.score)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// concentration: a memory-matching card game engine.
#[pymodule]
fn concentration(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyConcentration>()?;

    Ok(())
}
