//! Game bindings for Python.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::cards::Card;
use crate::core::GameConfig;
use crate::game::Concentration;

/// Python wrapper for Card. Read-only.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    #[getter]
    fn is_face_up(&self) -> bool {
        self.0.is_face_up
    }

    #[getter]
    fn is_matched(&self) -> bool {
        self.0.is_matched
    }

    /// Opaque pairing key.
    #[getter]
    fn identifier(&self) -> u32 {
        self.0.identifier.raw()
    }

    fn __repr__(&self) -> String {
        format!(
            "Card(identifier={}, face_up={}, matched={})",
            self.0.identifier.raw(),
            self.0.is_face_up,
            self.0.is_matched
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for the Concentration engine.
///
/// Precondition violations raise instead of panicking across the FFI boundary.
#[pyclass(name = "Concentration")]
pub struct PyConcentration {
    game: Concentration,
}

fn check_pair_count(pair_count: usize) -> PyResult<()> {
    if pair_count == 0 {
        return Err(PyErr::new::<PyValueError, _>("pair_count must be at least 1"));
    }
    Ok(())
}

#[pymethods]
impl PyConcentration {
    /// Deal a new game.
    ///
    /// # Arguments
    /// - pair_count: Number of pairs in the deck (at least 1)
    /// - seed: RNG seed for a reproducible deal; omit for a random one
    #[new]
    #[pyo3(signature = (pair_count = 6, seed = None))]
    fn new(pair_count: usize, seed: Option<u64>) -> PyResult<Self> {
        check_pair_count(pair_count)?;
        let game = match seed {
            Some(seed) => Concentration::with_config(GameConfig::new(pair_count).with_seed(seed)),
            None => Concentration::new(pair_count),
        };
        Ok(Self { game })
    }

    fn start_new_game(&mut self, pair_count: usize) -> PyResult<()> {
        check_pair_count(pair_count)?;
        self.game.start_new_game(pair_count);
        Ok(())
    }

    fn choose_card(&mut self, index: usize) -> PyResult<()> {
        if index >= self.game.cards().len() {
            return Err(PyErr::new::<PyIndexError, _>(format!(
                "card index {} out of range for deck of {}",
                index,
                self.game.cards().len()
            )));
        }
        self.game.choose_card(index);
        Ok(())
    }

    fn cards(&self) -> Vec<PyCard> {
        self.game.cards().iter().copied().map(PyCard).collect()
    }

    #[getter]
    fn flip_count(&self) -> u32 {
        self.game.flip_count()
    }

    #[getter]
    fn score(&self) -> i64 {
        self.game.score()
    }

    #[getter]
    fn pending_index(&self) -> Option<usize> {
        self.game.pending_index()
    }

    fn is_complete(&self) -> bool {
        self.game.is_complete()
    }

    fn __len__(&self) -> usize {
        self.game.cards().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Concentration(pairs={}, flips={}, score={})",
            self.game.pair_count(),
            self.game.flip_count(),
            self.game.score()
        )
    }
}
