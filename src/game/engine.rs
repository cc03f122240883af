//! The concentration game engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::snapshot::GameSnapshot;
use crate::cards::{deal, Card};
use crate::core::{GameConfig, GameRng, GameRngState, IdentifierFactory};

/// Where the engine is within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No unmatched card is waiting for a partner.
    Idle,
    /// The card at this position is face-up and waiting for a second pick.
    Pending(usize),
}

/// Memory-matching game state.
///
/// Owns the deck, the counters, and the pending-card tracker. All mutation
/// goes through [`start_new_game`](Self::start_new_game) and
/// [`choose_card`](Self::choose_card); callers read state back afterwards.
///
/// ## Scoring
///
/// - Matching the pending card: `+2`, both cards become matched
/// - Missing: `-1`
///
/// ```
/// use concentration::{Concentration, GameConfig};
///
/// let mut game = Concentration::with_config(GameConfig::new(2).with_seed(1));
/// assert_eq!(game.cards().len(), 4);
///
/// game.choose_card(0);
/// assert_eq!(game.flip_count(), 1);
/// assert_eq!(game.pending_index(), Some(0));
/// ```
#[derive(Clone, Debug)]
pub struct Concentration {
    cards: Vec<Card>,
    flip_count: u32,
    score: i64,
    pending: Option<usize>,
    identifiers: IdentifierFactory,
    rng: GameRng,
}

impl Concentration {
    /// Deal a game of `pair_count` pairs shuffled from OS entropy.
    ///
    /// # Panics
    ///
    /// Panics if `pair_count` is zero.
    #[must_use]
    pub fn new(pair_count: usize) -> Self {
        Self::with_rng(pair_count, GameRng::from_entropy())
    }

    /// Deal a deterministic game from a config.
    ///
    /// # Panics
    ///
    /// Panics if `config.pair_count` is zero.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self::with_rng(config.pair_count, GameRng::new(config.seed))
    }

    fn with_rng(pair_count: usize, rng: GameRng) -> Self {
        let mut game = Self {
            cards: Vec::new(),
            flip_count: 0,
            score: 0,
            pending: None,
            identifiers: IdentifierFactory::new(),
            rng,
        };
        game.start_new_game(pair_count);
        game
    }

    /// Throw away the current deck and deal a fresh one.
    ///
    /// Identifiers keep counting up from the previous game.
    ///
    /// # Panics
    ///
    /// Panics if `pair_count` is zero.
    pub fn start_new_game(&mut self, pair_count: usize) {
        assert!(pair_count > 0, "Pair count must be at least 1");

        self.cards = deal(pair_count, &mut self.identifiers, &mut self.rng);
        self.flip_count = 0;
        self.score = 0;
        self.pending = None;

        debug!(pair_count, seed = self.rng.seed(), "dealt new game");
    }

    /// Select the card at `index`.
    ///
    /// 1. Matched cards are inert.
    /// 2. Revealing a face-down card counts one flip.
    /// 3. With a different card pending, compare, score, and reveal.
    /// 4. Otherwise turn everything face-down and make this card pending.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn choose_card(&mut self, index: usize) {
        assert!(
            index < self.cards.len(),
            "Card index {} out of bounds for deck of {}",
            index,
            self.cards.len()
        );
        trace!(index, pending = ?self.pending, "choose card");

        if self.cards[index].is_matched {
            return;
        }

        if !self.cards[index].is_face_up {
            self.flip_count += 1;
        }

        match self.pending {
            Some(pending) if pending != index => {
                if self.cards[pending].matches(&self.cards[index]) {
                    self.cards[pending].is_matched = true;
                    self.cards[index].is_matched = true;
                    self.score += 2;
                    debug!(first = pending, second = index, score = self.score, "matched pair");
                } else {
                    self.score -= 1;
                    debug!(first = pending, second = index, score = self.score, "mismatch");
                }
                self.cards[index].is_face_up = true;
                self.pending = None;
            }
            _ => {
                for card in &mut self.cards {
                    card.is_face_up = false;
                }
                self.cards[index].is_face_up = true;
                self.pending = Some(index);
            }
        }
    }

    /// The deck, in table order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card at `index`, if there is one.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Number of face-down cards revealed so far.
    #[must_use]
    pub const fn flip_count(&self) -> u32 {
        self.flip_count
    }

    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Position of the face-up card waiting for a partner.
    #[must_use]
    pub const fn pending_index(&self) -> Option<usize> {
        self.pending
    }

    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        match self.pending {
            Some(index) => TurnPhase::Pending(index),
            None => TurnPhase::Idle,
        }
    }

    /// Number of pairs in the current deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_pair_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// Has every pair been found?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|c| c.is_matched)
    }

    /// Positions of face-up cards that are still in play.
    ///
    /// Never more than two: the pending card, or the last compared pair.
    #[must_use]
    pub fn face_up_indices(&self) -> SmallVec<[usize; 2]> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_face_up && !c.is_matched)
            .map(|(i, _)| i)
            .collect()
    }

    /// Shuffle RNG state, enough to reproduce the next deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Capture everything a presentation layer renders.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cards: self.cards.clone(),
            flip_count: self.flip_count,
            score: self.score,
            phase: self.phase(),
            matched_pairs: self.matched_pair_count(),
            is_complete: self.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::is_well_paired;
    use crate::core::CardIdentifier;

    fn game(pairs: usize) -> Concentration {
        Concentration::with_config(GameConfig::new(pairs).with_seed(42))
    }

    /// Find the partner position of the card at `index`.
    fn partner_of(game: &Concentration, index: usize) -> usize {
        let id = game.cards()[index].identifier;
        game.cards()
            .iter()
            .enumerate()
            .position(|(i, c)| i != index && c.identifier == id)
            .unwrap()
    }

    /// Find a position whose card does not pair with `index`.
    fn stranger_of(game: &Concentration, index: usize) -> usize {
        let id = game.cards()[index].identifier;
        game.cards().iter().position(|c| c.identifier != id).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let game = game(4);

        assert_eq!(game.cards().len(), 8);
        assert_eq!(game.pair_count(), 4);
        assert!(is_well_paired(game.cards()));
        assert_eq!(game.flip_count(), 0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.phase(), TurnPhase::Idle);
        assert!(game.face_up_indices().is_empty());
        assert!(!game.is_complete());
    }

    #[test]
    fn test_start_new_game_resets() {
        let mut game = game(3);
        let first = stranger_of(&game, 0);
        game.choose_card(0);
        game.choose_card(first);
        assert_ne!(game.score(), 0);

        game.start_new_game(5);

        assert_eq!(game.cards().len(), 10);
        assert_eq!(game.flip_count(), 0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.pending_index(), None);
        assert!(game.cards().iter().all(|c| !c.is_face_up && !c.is_matched));
    }

    #[test]
    fn test_identifiers_continue_across_games() {
        let mut game = game(2);
        let max_first = game.cards().iter().map(|c| c.identifier).max().unwrap();

        game.start_new_game(2);

        assert!(game.cards().iter().all(|c| c.identifier > max_first));
        assert_eq!(max_first, CardIdentifier(2));
    }

    #[test]
    #[should_panic(expected = "Pair count must be at least 1")]
    fn test_zero_pairs_panics() {
        let mut game = game(2);
        game.start_new_game(0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_panics() {
        let mut game = game(2);
        game.choose_card(4);
    }

    #[test]
    fn test_first_pick_goes_pending() {
        let mut game = game(3);
        game.choose_card(2);

        assert_eq!(game.flip_count(), 1);
        assert_eq!(game.phase(), TurnPhase::Pending(2));
        assert!(game.cards()[2].is_face_up);
        assert_eq!(game.face_up_indices().as_slice(), &[2]);
    }

    #[test]
    fn test_match_scores_two() {
        let mut game = game(3);
        let partner = partner_of(&game, 0);

        game.choose_card(0);
        game.choose_card(partner);

        assert_eq!(game.score(), 2);
        assert_eq!(game.flip_count(), 2);
        assert!(game.cards()[0].is_matched);
        assert!(game.cards()[partner].is_matched);
        assert_eq!(game.pending_index(), None);
        assert_eq!(game.matched_pair_count(), 1);
    }

    #[test]
    fn test_mismatch_costs_one() {
        let mut game = game(3);
        let other = stranger_of(&game, 0);

        game.choose_card(0);
        game.choose_card(other);

        assert_eq!(game.score(), -1);
        assert_eq!(game.flip_count(), 2);
        assert!(!game.cards()[0].is_matched);
        assert!(!game.cards()[other].is_matched);
        // Both stay face-up until the next pick
        assert!(game.cards()[0].is_face_up);
        assert!(game.cards()[other].is_face_up);
        assert_eq!(game.face_up_indices().len(), 2);
        assert_eq!(game.phase(), TurnPhase::Idle);
    }

    #[test]
    fn test_idle_pick_clears_board() {
        let mut game = game(3);
        let other = stranger_of(&game, 0);
        game.choose_card(0);
        game.choose_card(other);

        let third = (0..6).find(|&i| i != 0 && i != other).unwrap();
        game.choose_card(third);

        assert_eq!(game.face_up_indices().as_slice(), &[third]);
        assert_eq!(game.pending_index(), Some(third));
        assert_eq!(game.flip_count(), 3);
    }

    #[test]
    fn test_repeat_tap_on_pending_card() {
        let mut game = game(3);
        game.choose_card(1);
        game.choose_card(1);

        assert_eq!(game.flip_count(), 1);
        assert_eq!(game.score(), 0);
        assert_eq!(game.pending_index(), Some(1));
        assert_eq!(game.face_up_indices().as_slice(), &[1]);
    }

    #[test]
    fn test_picking_face_up_card_after_mismatch_is_free() {
        let mut game = game(3);
        let other = stranger_of(&game, 0);
        game.choose_card(0);
        game.choose_card(other);

        // Card 0 is still face-up; picking it does not count as a flip
        game.choose_card(0);

        assert_eq!(game.flip_count(), 2);
        assert_eq!(game.pending_index(), Some(0));
        assert!(!game.cards()[other].is_face_up);
    }

    #[test]
    fn test_matched_card_is_inert() {
        let mut game = game(3);
        let partner = partner_of(&game, 0);
        game.choose_card(0);
        game.choose_card(partner);

        let before = game.snapshot();
        game.choose_card(0);
        game.choose_card(partner);

        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_matched_card_ignored_while_pending() {
        let mut game = game(3);
        let partner = partner_of(&game, 0);
        game.choose_card(0);
        game.choose_card(partner);

        let next = (0..6).find(|&i| !game.cards()[i].is_matched).unwrap();
        game.choose_card(next);
        game.choose_card(0);

        assert_eq!(game.pending_index(), Some(next));
        assert_eq!(game.score(), 2);
        assert!(game.cards()[0].is_matched);
    }

    #[test]
    fn test_single_pair_game_completes() {
        let mut game = game(1);
        game.choose_card(0);
        game.choose_card(1);

        assert!(game.is_complete());
        assert_eq!(game.score(), 2);
        assert_eq!(game.snapshot().matched_pairs, 1);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = game(8);
        let b = game(8);
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn test_rng_state_advances_with_each_deal() {
        let mut game = game(4);
        let before = game.rng_state();
        assert_eq!(before.seed, 42);

        game.start_new_game(4);
        let after = game.rng_state();

        assert_eq!(after.seed, before.seed);
        assert!(after.word_pos > before.word_pos);
    }

    #[test]
    fn test_card_accessor() {
        let game = game(2);
        assert_eq!(game.card(0), game.cards().first());
        assert!(game.card(4).is_none());
    }

    #[test]
    fn test_entropy_game_is_well_formed() {
        let game = Concentration::new(6);
        assert_eq!(game.cards().len(), 12);
        assert!(is_well_paired(game.cards()));
    }
}
