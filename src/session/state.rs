//! Round state types.

use crate::card::Card;
use crate::hand::Hand;
use crate::strategy::{CategoryKind, Decision};

/// The outcome of answering a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    /// The trainee's decision.
    pub chosen: Decision,
    /// The optimal decision.
    pub correct: Decision,
    /// The chart section that decided.
    pub category: CategoryKind,
}

impl Feedback {
    /// Returns whether the trainee chose the optimal decision.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.chosen == self.correct
    }
}

/// The hand currently on the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Player's hand.
    pub(super) player: Hand,
    /// Dealer's hand; the first card is the upcard.
    pub(super) dealer: Hand,
    /// Whether the dealer's hole card is shown.
    pub(super) dealer_revealed: bool,
    /// Set once the hand has been answered.
    pub(super) feedback: Option<Feedback>,
}

impl Round {
    pub(super) const fn new(player: Hand, dealer: Hand) -> Self {
        Self {
            player,
            dealer,
            dealer_revealed: false,
            feedback: None,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's full hand, including the hole card.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer's upcard.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.dealer.up_card()
    }

    /// Returns the dealer cards a trainee may see: only the upcard until the
    /// hand is answered.
    #[must_use]
    pub fn visible_dealer_cards(&self) -> &[Card] {
        if self.dealer_revealed {
            self.dealer.cards()
        } else {
            self.dealer.cards().get(..1).unwrap_or(&[])
        }
    }

    /// Returns whether the dealer's hole card is shown.
    #[must_use]
    pub const fn is_dealer_revealed(&self) -> bool {
        self.dealer_revealed
    }

    /// Returns the feedback, once the hand has been answered.
    #[must_use]
    pub const fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Returns whether the hand has been answered.
    #[must_use]
    pub const fn is_answered(&self) -> bool {
        self.feedback.is_some()
    }
}
