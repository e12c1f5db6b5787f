//! Game configuration.
//!
//! `GameConfig` collects every tunable the game has:
//! - How many pairs are dealt per round
//! - How long a resolved pair stays face-up before it is cleared
//! - Where card images come from
//! - An optional RNG seed for reproducible deals
//!
//! Configs can be built in code with the `with_*` methods or loaded from JSON.
//! Missing JSON fields fall back to the defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Pairs dealt per round when not configured otherwise.
pub const DEFAULT_PAIR_COUNT: usize = 10;

/// Largest deck the game deals: ten distinct images, twenty cards.
pub const MAX_PAIR_COUNT: usize = 10;

/// Milliseconds a resolved pair stays visible.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 500;

/// Character listing whose `results[].image` fields supply card faces.
pub const DEFAULT_IMAGE_ENDPOINT: &str = "https://rickandmortyapi.com/api/character";

/// HTTP timeout for the image request.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Distinct images per deck, between 1 and `MAX_PAIR_COUNT`.
    /// The deck holds twice as many cards.
    pub pair_count: usize,

    /// Delay before a resolved selection is cleared, in milliseconds.
    /// Zero means clear immediately.
    pub reveal_delay_ms: u64,

    /// URL of the image listing.
    pub image_endpoint: String,

    /// Timeout for the image request, in seconds.
    pub request_timeout_secs: u64,

    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            image_endpoint: DEFAULT_IMAGE_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str::<Self>(json)?.validated())
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Set the number of pairs per deck.
    #[must_use]
    pub fn with_pair_count(mut self, pairs: usize) -> Self {
        self.pair_count = pairs;
        self.validated()
    }

    /// Set the reveal delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the image listing URL.
    #[must_use]
    pub fn with_image_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.image_endpoint = endpoint.into();
        self
    }

    /// Clamp values the game cannot use.
    ///
    /// A deck needs at least one pair and holds at most `MAX_PAIR_COUNT`.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.pair_count = self.pair_count.clamp(1, MAX_PAIR_COUNT);
        self
    }

    /// Reveal delay as a `Duration`.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
