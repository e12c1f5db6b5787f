//! Game state: phase, deck, selection and mismatch count.
//!
//! ## GamePhase
//!
//! `Loading --(images ready)--> Playing --(all matched)--> Ended --(restart)--> Playing`
//!
//! ## Selection
//!
//! The 0–2 card indices currently face-up and awaiting resolution.
//!
//! ## GameState
//!
//! Everything the controller owns. Fields are readable by anyone but only
//! mutated by `GameController`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Deck;

/// Coarse lifecycle stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the image pool.
    #[default]
    Loading,
    /// A deck is dealt and accepting selections.
    Playing,
    /// Every card is matched.
    Ended,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Loading => "loading",
            GamePhase::Playing => "playing",
            GamePhase::Ended => "ended",
        };
        f.write_str(name)
    }
}

/// Face-up, unresolved card indices. Never holds more than two.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    indices: SmallVec<[usize; 2]>,
}

impl Selection {
    /// Maximum number of face-up, unresolved cards.
    pub const CAPACITY: usize = 2;

    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Check if a pair is waiting to be cleared.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.indices.len() >= Self::CAPACITY
    }

    /// Check if `index` is selected.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Selected indices in selection order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// The selected pair, once two cards are up.
    #[must_use]
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self.indices.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    /// Add an index. Returns false if full or already present.
    pub(crate) fn push(&mut self, index: usize) -> bool {
        if self.is_full() || self.contains(index) {
            return false;
        }
        self.indices.push(index);
        true
    }

    pub(crate) fn clear(&mut self) {
        self.indices.clear();
    }
}

/// Complete state of one game.
///
/// Cloning is cheap: the deck is a persistent vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) phase: GamePhase,
    pub(crate) deck: Deck,
    pub(crate) selection: Selection,
    pub(crate) mismatch_count: u32,
}

impl GameState {
    /// Fresh state in the Loading phase with no deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Cards in play.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Face-up, unresolved cards.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Failed pair attempts this round.
    #[must_use]
    pub fn mismatch_count(&self) -> u32 {
        self.mismatch_count
    }

    /// Replace the deck and reset per-round counters.
    pub(crate) fn deal(&mut self, deck: Deck) {
        self.deck = deck;
        self.selection.clear();
        self.mismatch_count = 0;
        self.phase = GamePhase::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_capacity() {
        let mut sel = Selection::new();

        assert!(sel.push(3));
        assert!(!sel.push(3));
        assert_eq!(sel.len(), 1);
        assert!(sel.pair().is_none());

        assert!(sel.push(5));
        assert!(sel.is_full());
        assert_eq!(sel.pair(), Some((3, 5)));

        assert!(!sel.push(7));
        assert_eq!(sel.as_slice(), &[3, 5]);

        sel.clear();
        assert!(sel.is_empty());
    }

    #[test]
    fn test_new_state_loading() {
        let state = GameState::new();

        assert_eq!(state.phase(), GamePhase::Loading);
        assert!(state.deck().is_empty());
        assert!(state.selection().is_empty());
        assert_eq!(state.mismatch_count(), 0);
    }

    #[test]
    fn test_deal_resets_round() {
        let mut state = GameState::new();
        state.mismatch_count = 4;
        state.selection.push(1);

        state.deal(Deck::from_images(["A", "A"]));

        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.deck().len(), 2);
        assert!(state.selection().is_empty());
        assert_eq!(state.mismatch_count(), 0);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(GamePhase::Loading.to_string(), "loading");
        assert_eq!(GamePhase::Ended.to_string(), "ended");
    }
}
