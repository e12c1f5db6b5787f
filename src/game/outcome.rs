//! Results of a card selection.

use serde::{Deserialize, Serialize};

/// Permission to clear a resolved selection.
///
/// Issued when a second card is selected. The presentation holds it for
/// the reveal delay, then hands it back to `GameController::clear_selection`.
/// A ticket only works for the generation it was issued in: restarting or
/// clearing invalidates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClearTicket {
    pub(crate) generation: u64,
}

impl ClearTicket {
    /// Generation this ticket belongs to.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Why a selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No round is in progress.
    NotPlaying,
    /// Index is past the end of the deck.
    OutOfRange,
    /// The card's pair was already found.
    AlreadyMatched,
    /// The card is already face-up.
    AlreadySelected,
    /// Two cards are up and waiting to be cleared.
    SelectionFull,
}

/// What happened when a card was selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a pair turned face-up.
    Revealed,
    /// Second card matched the first. Both are now matched.
    Matched {
        ticket: ClearTicket,
        /// This pair was the last one.
        game_over: bool,
    },
    /// Second card did not match; the mismatch count went up.
    Mismatched { ticket: ClearTicket },
}

impl SelectOutcome {
    /// Clear ticket, if a pair was resolved.
    #[must_use]
    pub fn ticket(&self) -> Option<ClearTicket> {
        match self {
            SelectOutcome::Matched { ticket, .. } | SelectOutcome::Mismatched { ticket } => {
                Some(*ticket)
            }
            SelectOutcome::Ignored(_) | SelectOutcome::Revealed => None,
        }
    }

    /// Check if the selection was a no-op.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }
}
