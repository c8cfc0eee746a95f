//! The multi-deck shoe.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::ShoeError;

/// An ordered supply of cards dealt from the end.
///
/// The shoe owns its random number generator so that a session seeded with
/// the same value replays the same sequence of shuffles.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    threshold: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a freshly built and shuffled shoe.
    ///
    /// `threshold` is the remaining-card count below which
    /// [`needs_refill`](Self::needs_refill) reports `true`.
    #[must_use]
    pub fn new(decks: u8, threshold: usize, seed: u64) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            decks,
            threshold,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.refill();
        shoe
    }

    /// Replaces the contents so that cards are dealt in exactly the order of
    /// `draws`. Refills still rebuild a full shoe.
    #[must_use]
    pub fn with_draws(mut self, draws: &[Card]) -> Self {
        self.cards = draws.iter().rev().copied().collect();
        self
    }

    /// Rebuilds the shoe in canonical order: deck by deck, suit by suit,
    /// ace through king.
    pub fn build(&mut self) {
        self.cards.clear();
        self.cards.reserve(self.capacity());

        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    self.cards.push(Card::new(suit, rank));
                }
            }
        }
    }

    /// Shuffles the remaining cards uniformly.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Rebuilds and reshuffles the whole shoe, discarding what was left.
    pub fn refill(&mut self) {
        self.build();
        self.shuffle();
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no cards remain.
    pub fn deal_one(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Empty)
    }

    /// Returns whether fewer cards remain than the refill threshold.
    #[must_use]
    pub fn needs_refill(&self) -> bool {
        self.cards.len() < self.threshold
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards; the last element is dealt next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in a full build.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }
}
