//! Card faces and card state.
//!
//! `ImageRef` identifies a face image (a URL). `Card` is one dealt card:
//! its face plus whether its pair has been found.

use serde::{Deserialize, Serialize};

/// Opaque identifier for a card face image, usually a URL.
///
/// Immutable once fetched. Two cards form a pair when their `ImageRef`s
/// are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wrap an image URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The underlying URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for ImageRef {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single dealt card.
///
/// `matched` starts false and only ever flips to true, once the card's
/// pair has been confirmed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Face image.
    pub image: ImageRef,

    /// Has this card's pair been found?
    pub matched: bool,
}

impl Card {
    /// Create an unmatched card.
    #[must_use]
    pub fn new(image: ImageRef) -> Self {
        Self {
            image,
            matched: false,
        }
    }

    /// Check whether two cards show the same face.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.image == other.image
    }
}
