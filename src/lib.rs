//! # memory-pairs
//!
//! A memory-matching card game. A grid of face-down cards is revealed two
//! at a time; matching pairs stay up, mismatches flip back, and the round
//! ends when every pair is found, reporting how many guesses were wrong.
//!
//! ## Design Principles
//!
//! 1. **One owner of state**: `GameController` holds the `GameState` and
//!    is the only thing that mutates it.
//!
//! 2. **Misuse is a no-op**: Invalid clicks and out-of-phase calls are
//!    ignored and reported through return values, never as errors.
//!
//! 3. **Presentation owns time**: The reveal delay is a timer in the front
//!    end. Stale timers are detected with generation-stamped `ClearTicket`s.
//!
//! 4. **Reproducible deals**: Decks come from a seeded ChaCha8 RNG with a
//!    proper Fisher–Yates shuffle.
//!
//! ## Modules
//!
//! - `core`: State, phases, RNG, configuration, errors
//! - `cards`: Images, cards, decks and the deck builder
//! - `game`: The controller, selection outcomes and render views
//! - `images`: Image source trait with HTTP and in-memory implementations

pub mod cards;
pub mod core;
pub mod game;
pub mod images;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GamePhase, GameRng, GameRngState, GameState, ImageFetchError,
    Selection,
};

pub use crate::cards::{build_deck, Card, Deck, ImageRef};

pub use crate::game::{
    CardView, ClearTicket, GameController, GameView, IgnoreReason, LoadStatus, SelectOutcome,
};

pub use crate::images::{HttpImageSource, ImageSource, StaticImageSource};
