//! Game control: selections, pair resolution, round lifecycle.
//!
//! ## Flow
//!
//! 1. Presentation calls `GameController::start` with the fetched pool
//! 2. Each click becomes `select_card(index)`
//! 3. A second card resolves the pair and yields a `ClearTicket`
//! 4. After the reveal delay the presentation calls `clear_selection(ticket)`
//! 5. When the last pair matches the phase becomes Ended; `restart` deals again
//!
//! The reveal delay is owned by the presentation. A ticket from before a
//! restart is rejected, so a late timer can never touch a newer round.

pub mod controller;
pub mod outcome;
pub mod view;

pub use controller::{GameController, LoadStatus};
pub use outcome::{ClearTicket, IgnoreReason, SelectOutcome};
pub use view::{CardView, GameView, ERROR_MESSAGE, LOADING_MESSAGE};
