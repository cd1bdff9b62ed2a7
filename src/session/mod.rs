//! Training session state.

use alloc::vec::Vec;
use core::mem;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deal::{deal_initial_hands, needs_fresh_deck};
use crate::deck::Deck;
use crate::error::AnswerError;
use crate::options::TrainerOptions;
use crate::strategy::{Decision, advise};

pub mod state;
pub mod stats;

pub use state::{Feedback, Round};
pub use stats::{Stats, Tally};

/// A basic-strategy drill.
///
/// The trainer owns the deck, the hand on the table, and the running
/// statistics. Each round is dealt with [`Trainer::next_hand`] and answered
/// once with [`Trainer::answer`].
///
/// # Example
///
/// ```
/// use bjdrill::{Decision, Trainer, TrainerOptions};
///
/// let mut trainer = Trainer::new(TrainerOptions::default(), 42);
/// trainer.next_hand();
/// let feedback = trainer.answer(Decision::Stand).unwrap();
/// assert_eq!(trainer.stats().total(), 1);
/// assert_eq!(feedback.is_correct(), feedback.correct == Decision::Stand);
/// ```
#[derive(Debug, Clone)]
pub struct Trainer {
    /// Session options.
    options: TrainerOptions,
    /// Cards left for upcoming deals.
    deck: Deck,
    /// The hand on the table, if any.
    round: Option<Round>,
    /// Running statistics.
    stats: Stats,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Trainer {
    /// Creates a new session with the given seed.
    #[must_use]
    pub fn new(options: TrainerOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new_shuffled(&mut rng);

        Self {
            options,
            deck,
            round: None,
            stats: Stats::new(),
            rng,
        }
    }

    /// Deals the next hand, replacing any hand on the table.
    ///
    /// Starts from a fresh deck when fewer than
    /// [`TrainerOptions::reshuffle_threshold`] cards remain.
    pub fn next_hand(&mut self) -> &Round {
        let deck = mem::replace(&mut self.deck, Deck::from(Vec::new()));
        let deck = if needs_fresh_deck(&deck, self.options.reshuffle_threshold) {
            log::debug!("{} cards left, shuffling a fresh deck", deck.len());
            Deck::new_shuffled(&mut self.rng)
        } else {
            deck
        };

        let deal = deal_initial_hands(deck, self.options.ace_mode, &mut self.rng);
        self.deck = deal.remaining;

        self.round.insert(Round::new(deal.player, deal.dealer))
    }

    /// Answers the hand on the table.
    ///
    /// Reveals the dealer's hole card and updates the statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand has been dealt or the hand was already
    /// answered.
    pub fn answer(&mut self, decision: Decision) -> Result<Feedback, AnswerError> {
        let round = self.round.as_mut().ok_or(AnswerError::NoActiveHand)?;
        if round.is_answered() {
            return Err(AnswerError::AlreadyAnswered);
        }
        let up_card = round.up_card().ok_or(AnswerError::NoActiveHand)?;

        let advice = advise(round.player.cards(), up_card);
        let feedback = Feedback {
            chosen: decision,
            correct: advice.decision,
            category: advice.category.kind(),
        };

        round.feedback = Some(feedback);
        round.dealer_revealed = true;
        self.stats.record(&feedback);

        log::debug!(
            "answered {decision}, chart says {} ({:?})",
            advice.decision,
            advice.category
        );

        Ok(feedback)
    }

    /// Returns the hand on the table.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns the session statistics.
    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Clears the statistics without touching the deck or the current hand.
    pub fn reset_stats(&mut self) {
        self.stats = Stats::new();
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &TrainerOptions {
        &self.options
    }

    /// Returns whether ace mode is on.
    #[must_use]
    pub const fn ace_mode(&self) -> bool {
        self.options.ace_mode
    }

    /// Turns ace mode on or off for subsequent deals.
    pub const fn set_ace_mode(&mut self, ace_mode: bool) {
        self.options.ace_mode = ace_mode;
    }

    /// Flips ace mode and returns the new setting.
    pub const fn toggle_ace_mode(&mut self) -> bool {
        self.options.ace_mode = !self.options.ace_mode;
        self.options.ace_mode
    }

    /// Returns the cards left for upcoming deals.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
