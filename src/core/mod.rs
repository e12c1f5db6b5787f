//! Core types: state, RNG, configuration and errors.
//!
//! Everything here is independent of how cards are shown or where their
//! images come from.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{
    GameConfig, DEFAULT_IMAGE_ENDPOINT, DEFAULT_PAIR_COUNT, DEFAULT_REVEAL_DELAY_MS,
    DEFAULT_REQUEST_TIMEOUT_SECS, MAX_PAIR_COUNT,
};
pub use error::{ConfigError, ImageFetchError};
pub use rng::{GameRng, GameRngState};
pub use state::{GamePhase, GameState, Selection};
