//! Where card faces come from.
//!
//! - `ImageSource`: the one-call seam the game depends on
//! - `HttpImageSource`: GET against a character listing, reads `results[].image`
//! - `StaticImageSource`: fixed pool, for tests and offline play

pub mod http;
pub mod source;

pub use http::{parse_character_page, HttpImageSource};
pub use source::{ImageSource, StaticImageSource, PLACEHOLDER_BASE};
