//! Deck construction, shuffling, and drawing.
//!
//! Draw operations consume the deck and hand back the remainder, so a caller
//! never holds two views of the same cards.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered stack of cards, drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the canonical 52-card set in suit-major, rank-minor order.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a full 52-card deck in uniformly random order.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdrill::{DECK_SIZE, Deck};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::new_shuffled(&mut rng);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ordered().shuffled(rng)
    }

    /// Returns a Fisher-Yates permutation of this deck, leaving `self` as is.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consumes the deck and returns its cards in draw order.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draws the two front cards.
    ///
    /// Returns `None` if fewer than two cards remain.
    #[must_use]
    pub fn draw_pair(mut self) -> Option<([Card; 2], Self)> {
        if self.cards.len() < 2 {
            return None;
        }
        let pair = [self.cards[0], self.cards[1]];
        self.cards.drain(..2);
        Some((pair, self))
    }

    /// Draws the first ace together with the card after it.
    ///
    /// The partner wraps around to the front when the ace is the last card.
    /// Returns `None` if the deck holds no ace or fewer than two cards.
    #[must_use]
    pub fn draw_ace_pair(mut self) -> Option<([Card; 2], Self)> {
        if self.cards.len() < 2 {
            return None;
        }
        let ace_index = self.cards.iter().position(|card| card.is_ace())?;
        let partner_index = (ace_index + 1) % self.cards.len();

        let pair = [self.cards[ace_index], self.cards[partner_index]];

        // Remove the higher index first so the lower one stays valid.
        self.cards.remove(ace_index.max(partner_index));
        self.cards.remove(ace_index.min(partner_index));

        Some((pair, self))
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
