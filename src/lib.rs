//! A blackjack basic-strategy drill engine with optional `no_std` support.
//!
//! The crate deals practice hands (never naturals, optionally always holding
//! an ace), evaluates them, and tells a trainee which of hit, stand, double or
//! split the basic-strategy chart prefers. [`Trainer`] wraps these pieces into
//! a scored session.
//!
//! # Example
//!
//! ```
//! use bjdrill::{Deck, deal_initial_hands, perfect_decision};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let deal = deal_initial_hands(Deck::new_shuffled(&mut rng), false, &mut rng);
//! let up_card = deal.dealer.up_card().unwrap();
//! let decision = perfect_decision(deal.player.cards(), up_card);
//! let _ = decision;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deal;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod session;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deal::{DEFAULT_RESHUFFLE_THRESHOLD, InitialDeal, deal_initial_hands, needs_fresh_deck};
pub use deck::Deck;
pub use error::{AnswerError, ParseCardError, ParseDecisionError};
pub use hand::{Hand, HandTotal, evaluate, hand_value, is_natural};
pub use options::TrainerOptions;
pub use session::{Feedback, Round, Stats, Tally, Trainer};
pub use strategy::{
    Advice, CategoryKind, Decision, HandCategory, RULES, Rule, advise, categories, lookup,
    perfect_decision,
};
