//! Decks and the deck builder.
//!
//! A `Deck` is the ordered row of cards for one round. Every image in a
//! well-formed deck appears exactly twice.
//!
//! ## Building
//!
//! `build_deck` samples up to `pair_count` distinct images from a pool
//! (uniformly, without replacement), duplicates each one, and shuffles the
//! result with Fisher–Yates:
//!
//! ```
//! use memory_pairs::cards::{build_deck, ImageRef};
//! use memory_pairs::core::GameRng;
//!
//! let pool: Vec<ImageRef> = (0..20).map(|i| ImageRef::new(format!("{i}.jpeg"))).collect();
//! let deck = build_deck(&pool, 10, &mut GameRng::new(42));
//!
//! assert_eq!(deck.len(), 20);
//! assert!(deck.is_well_formed());
//! ```

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::{Card, ImageRef};
use crate::core::{GameRng, MAX_PAIR_COUNT};

/// Ordered cards for one round.
///
/// Backed by an `im::Vector` so that snapshots handed to the presentation
/// layer are O(1) clones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out unmatched cards with the given faces, in the given order.
    ///
    /// No shuffling and no pairing is done; use `build_deck` for a real deal.
    #[must_use]
    pub fn from_images<I>(images: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ImageRef>,
    {
        Self {
            cards: images.into_iter().map(|i| Card::new(i.into())).collect(),
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterate over cards in deal order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count() / 2
    }

    /// True when every card is matched. An empty deck is never complete.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.matched)
    }

    /// Check that every image appears exactly twice.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let mut counts: FxHashMap<&ImageRef, usize> = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(&card.image).or_insert(0) += 1;
        }
        counts.values().all(|&n| n == 2)
    }

    /// Mark the card at `index` as matched.
    ///
    /// Returns false if `index` is out of range.
    pub(crate) fn mark_matched(&mut self, index: usize) -> bool {
        match self.cards.get_mut(index) {
            Some(card) => {
                card.matched = true;
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Deal a shuffled, paired deck from an image pool.
///
/// - Duplicate images in `pool` are collapsed first, so pairs stay unique.
/// - Uses `min(distinct images, pair_count, MAX_PAIR_COUNT)` pairs, so a deck
///   never exceeds twenty cards and a short pool never panics.
/// - An empty pool yields an empty deck.
///
/// Pure apart from the draws taken from `rng`.
#[must_use]
pub fn build_deck(pool: &[ImageRef], pair_count: usize, rng: &mut GameRng) -> Deck {
    let mut seen = FxHashSet::default();
    let distinct: Vec<&ImageRef> = pool.iter().filter(|image| seen.insert(*image)).collect();

    let chosen = rng.sample(&distinct, pair_count.min(MAX_PAIR_COUNT));

    let mut cards: Vec<Card> = chosen
        .iter()
        .flat_map(|&image| [Card::new(image.clone()), Card::new(image.clone())])
        .collect();
    rng.shuffle(&mut cards);

    debug!(
        pool = pool.len(),
        distinct = distinct.len(),
        pairs = chosen.len(),
        "dealt deck"
    );

    Deck {
        cards: cards.into_iter().collect(),
    }
}
