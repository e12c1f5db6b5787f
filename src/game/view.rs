//! Render snapshots for the presentation layer.

use serde::{Deserialize, Serialize};

use super::controller::LoadStatus;
use crate::cards::ImageRef;
use crate::core::GamePhase;

/// Shown while images are loading.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Shown when the image source failed.
pub const ERROR_MESSAGE: &str = "Something went wrong :(";

/// One card as the presentation should draw it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub index: usize,
    pub image: ImageRef,
    pub matched: bool,
    /// Part of the current, unresolved selection.
    pub active: bool,
    /// Show the face rather than the card back.
    pub face_up: bool,
    /// Clicking this card would do something.
    pub selectable: bool,
    /// Alt text, e.g. "Pair #3".
    pub label: String,
}

/// Everything needed to draw the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub phase: GamePhase,
    pub load_status: LoadStatus,
    pub cards: Vec<CardView>,
    pub mismatch_count: u32,
    pub pairs_total: usize,
    pub pairs_matched: usize,
}

impl GameView {
    /// Overlay text for the current phase, if any.
    ///
    /// `None` while a round is being played.
    #[must_use]
    pub fn status_message(&self) -> Option<String> {
        match (self.phase, &self.load_status) {
            (GamePhase::Loading, LoadStatus::Failed(_)) => Some(ERROR_MESSAGE.to_string()),
            (GamePhase::Loading, _) => Some(LOADING_MESSAGE.to_string()),
            (GamePhase::Ended, _) => Some(format!(
                "You were wrong {} times!",
                self.mismatch_count
            )),
            (GamePhase::Playing, _) => None,
        }
    }

    /// The restart button is offered only once a round has ended.
    #[must_use]
    pub fn can_restart(&self) -> bool {
        self.phase == GamePhase::Ended
    }
}
