//! Cards and decks.
//!
//! ## Key Types
//!
//! - `ImageRef`: Identifier (URL) of a card face
//! - `Card`: A dealt card and whether its pair has been found
//! - `Deck`: The ordered cards for one round
//! - `build_deck`: Samples, pairs and shuffles a deck from an image pool

pub mod card;
pub mod deck;

pub use card::{Card, ImageRef};
pub use deck::{build_deck, Deck};
