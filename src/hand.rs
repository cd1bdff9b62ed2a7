//! Hand valuation and the hand type used by the dealing engine.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// The evaluated total of a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandTotal {
    /// Best total after softening aces as needed.
    pub value: u16,
    /// Whether at least one ace is still counted as 11.
    pub soft: bool,
}

/// Evaluates a set of cards.
///
/// Every ace starts at 11. While the total is over 21 and an ace is still
/// counted as 11, that ace drops to 1. A total over 21 with no ace left to
/// soften is returned as is.
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandTotal {
    let mut value: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(u16::from(card.value()));
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    HandTotal {
        value,
        soft: aces > 0,
    }
}

/// Returns the blackjack value of a set of cards.
///
/// ```
/// use bjdrill::{Card, Rank, Suit, hand_value};
///
/// let cards = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Clubs, Rank::Nine),
/// ];
/// assert_eq!(hand_value(&cards), 21);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u16 {
    evaluate(cards).value
}

/// Returns whether the cards form a natural: exactly two cards, an ace and a
/// ten-value card.
#[must_use]
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2
        && cards.iter().any(|card| card.is_ace())
        && cards.iter().any(|card| card.is_ten_value())
}

/// A player's or dealer's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in draw order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand from cards in draw order.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card, which is the dealer's visible card.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).soft
    }

    /// Returns whether the hand is a natural.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns whether the hand is two cards of the same rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<[Card; 2]> for Hand {
    fn from(cards: [Card; 2]) -> Self {
        Self::new(cards.to_vec())
    }
}
