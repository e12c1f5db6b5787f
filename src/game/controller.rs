//! The game controller.
//!
//! `GameController` owns a `GameState` and is the only thing that mutates it.
//! The presentation layer drives it with three calls:
//!
//! - `start` / `restart` once images are available
//! - `select_card` for every click
//! - `clear_selection` when the reveal delay for a resolved pair elapses
//!
//! Misuse (clicking a matched card, clicking during the reveal delay,
//! restarting mid-round) is ignored rather than reported as an error.
//!
//! ## Example
//!
//! ```
//! use memory_pairs::cards::Deck;
//! use memory_pairs::core::{GameConfig, GamePhase};
//! use memory_pairs::game::{GameController, SelectOutcome};
//!
//! let mut game = GameController::new(GameConfig::new().with_seed(1));
//! game.deal(Deck::from_images(["A", "B", "A", "B"]));
//!
//! assert_eq!(game.select_card(0), SelectOutcome::Revealed);
//! let outcome = game.select_card(2);
//! assert!(matches!(outcome, SelectOutcome::Matched { game_over: false, .. }));
//!
//! // Third click during the reveal delay is ignored.
//! assert!(game.select_card(1).is_ignored());
//!
//! assert!(game.clear_selection(outcome.ticket().unwrap()));
//! assert_eq!(game.phase(), GamePhase::Playing);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use super::outcome::{ClearTicket, IgnoreReason, SelectOutcome};
use super::view::{CardView, GameView};
use crate::cards::{build_deck, Deck, ImageRef};
use crate::core::{
    GameConfig, GamePhase, GameRng, GameRngState, GameState, ImageFetchError, Selection,
    MAX_PAIR_COUNT,
};

/// Progress of the one-shot image fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    /// Waiting for images.
    #[default]
    Pending,
    /// A deck has been dealt at least once.
    Ready,
    /// The image source failed; the game cannot start.
    Failed(String),
}

/// Owns and mutates the game state.
#[derive(Clone, Debug)]
pub struct GameController {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    /// Bumped on every deal and every clear. Outstanding `ClearTicket`s
    /// from an older generation are stale.
    generation: u64,
    load_status: LoadStatus,
}

impl GameController {
    /// Create a controller in the Loading phase.
    ///
    /// Uses `config.seed` if set, otherwise seeds from entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a controller with an explicit RNG.
    #[must_use]
    pub fn with_rng(config: GameConfig, rng: GameRng) -> Self {
        debug!(seed = rng.seed(), pairs = config.pair_count, "game controller created");
        Self {
            config: config.validated(),
            state: GameState::new(),
            rng,
            generation: 0,
            load_status: LoadStatus::Pending,
        }
    }

    // === Accessors ===

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the full state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.state.deck
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    #[must_use]
    pub fn mismatch_count(&self) -> u32 {
        self.state.mismatch_count
    }

    #[must_use]
    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Seed of the dealing RNG, for reproducing a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Current RNG position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Lifecycle ===

    /// Deal a fresh deck from `pool` and begin playing.
    ///
    /// Allowed from Loading or Ended. Returns false (and changes nothing)
    /// while a round is in progress, after the image fetch failed, or when
    /// `pool` is empty.
    pub fn start(&mut self, pool: &[ImageRef]) -> bool {
        if !self.accepts_deal() {
            return false;
        }
        let deck = build_deck(pool, self.config.pair_count, &mut self.rng);
        self.deal(deck)
    }

    /// Begin playing with a prepared deck.
    ///
    /// Same rules as `start`. The deck must be well formed (every image
    /// exactly twice) and hold at most `MAX_PAIR_COUNT` pairs, otherwise it
    /// is rejected and nothing changes.
    pub fn deal(&mut self, deck: Deck) -> bool {
        if !self.accepts_deal() {
            return false;
        }
        if deck.is_empty() {
            warn!("deal ignored: no cards to play with");
            return false;
        }
        if !deck.is_well_formed() || deck.pair_count() > MAX_PAIR_COUNT {
            warn!(cards = deck.len(), "deal ignored: deck is not a set of pairs");
            return false;
        }

        self.state.deal(deck);
        self.generation += 1;
        self.load_status = LoadStatus::Ready;

        info!(
            cards = self.state.deck.len(),
            generation = self.generation,
            "round started"
        );
        true
    }

    fn accepts_deal(&self) -> bool {
        if self.state.phase == GamePhase::Playing {
            trace!("deal ignored: round in progress");
            return false;
        }
        if matches!(self.load_status, LoadStatus::Failed(_)) {
            trace!("deal ignored: image fetch failed");
            return false;
        }
        true
    }

    /// Start another round after the previous one ended.
    ///
    /// Only valid in the Ended phase.
    pub fn restart(&mut self, pool: &[ImageRef]) -> bool {
        if self.state.phase != GamePhase::Ended {
            trace!(phase = %self.state.phase, "restart ignored");
            return false;
        }
        self.start(pool)
    }

    /// Record that the image source failed.
    ///
    /// Only meaningful while Loading. The game stays in Loading for good:
    /// `start` and `deal` are refused from then on.
    pub fn fail_loading(&mut self, error: &ImageFetchError) {
        if self.state.phase != GamePhase::Loading {
            return;
        }
        warn!(%error, "image fetch failed");
        self.generation += 1;
        self.load_status = LoadStatus::Failed(error.to_string());
    }

    // === Play ===

    /// Turn the card at `index` face-up.
    ///
    /// When this completes a pair, the pair is resolved immediately
    /// (matched or counted as a mismatch) and a `ClearTicket` is returned.
    /// Further selections are ignored until that ticket is redeemed.
    pub fn select_card(&mut self, index: usize) -> SelectOutcome {
        if let Err(reason) = self.check_selectable(index) {
            trace!(index, ?reason, "selection ignored");
            return SelectOutcome::Ignored(reason);
        }

        self.state.selection.push(index);

        let Some((first, second)) = self.state.selection.pair() else {
            return SelectOutcome::Revealed;
        };

        let ticket = ClearTicket {
            generation: self.generation,
        };

        let is_pair = match (self.state.deck.get(first), self.state.deck.get(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };

        if is_pair {
            self.state.deck.mark_matched(first);
            self.state.deck.mark_matched(second);
            debug!(first, second, "pair matched");
            let game_over = self.check_ended();
            SelectOutcome::Matched { ticket, game_over }
        } else {
            self.state.mismatch_count += 1;
            debug!(
                first,
                second,
                mismatches = self.state.mismatch_count,
                "pair mismatched"
            );
            SelectOutcome::Mismatched { ticket }
        }
    }

    fn check_selectable(&self, index: usize) -> Result<(), IgnoreReason> {
        if self.state.phase != GamePhase::Playing {
            return Err(IgnoreReason::NotPlaying);
        }
        let card = self.state.deck.get(index).ok_or(IgnoreReason::OutOfRange)?;
        if self.state.selection.is_full() {
            return Err(IgnoreReason::SelectionFull);
        }
        if card.matched {
            return Err(IgnoreReason::AlreadyMatched);
        }
        if self.state.selection.contains(index) {
            return Err(IgnoreReason::AlreadySelected);
        }
        Ok(())
    }

    /// End the round if every card is matched.
    ///
    /// Idempotent. Returns true when the phase is Ended.
    pub fn check_ended(&mut self) -> bool {
        if self.state.phase == GamePhase::Playing && self.state.deck.all_matched() {
            self.state.phase = GamePhase::Ended;
            info!(mismatches = self.state.mismatch_count, "round ended");
        }
        self.state.phase == GamePhase::Ended
    }

    /// Flip a resolved pair back (or leave it matched) and accept new clicks.
    ///
    /// Returns false if the ticket is stale: the controller restarted or the
    /// selection was already cleared since it was issued.
    pub fn clear_selection(&mut self, ticket: ClearTicket) -> bool {
        if ticket.generation != self.generation {
            trace!(
                ticket = ticket.generation,
                current = self.generation,
                "stale clear ticket"
            );
            return false;
        }
        self.state.selection.clear();
        self.generation += 1;
        true
    }

    /// Ticket for the pair currently waiting to be cleared, if any.
    #[must_use]
    pub fn pending_clear(&self) -> Option<ClearTicket> {
        self.state.selection.is_full().then_some(ClearTicket {
            generation: self.generation,
        })
    }

    // === Presentation ===

    /// Snapshot of everything the presentation layer draws.
    #[must_use]
    pub fn view(&self) -> GameView {
        let playing = self.state.phase == GamePhase::Playing;
        let selection_open = !self.state.selection.is_full();

        let cards = self
            .state
            .deck
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let active = self.state.selection.contains(index);
                let face_up = active || card.matched;
                CardView {
                    index,
                    image: card.image.clone(),
                    matched: card.matched,
                    active,
                    face_up,
                    selectable: playing && selection_open && !face_up,
                    label: format!("Pair #{}", index + 1),
                }
            })
            .collect();

        GameView {
            phase: self.state.phase,
            load_status: self.load_status.clone(),
            cards,
            mismatch_count: self.state.mismatch_count,
            pairs_total: self.state.deck.pair_count(),
            pairs_matched: self.state.deck.matched_pairs(),
        }
    }
}
