//! Constrained initial deals for practice hands.

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;

/// Remaining-card count below which a session starts from a fresh deck.
pub const DEFAULT_RESHUFFLE_THRESHOLD: usize = 10;

/// The result of an initial deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialDeal {
    /// The player's two cards.
    pub player: Hand,
    /// The dealer's two cards; the first is the upcard.
    pub dealer: Hand,
    /// Cards left after the deal.
    pub remaining: Deck,
}

/// Returns whether a caller should replace the deck before dealing.
#[must_use]
pub fn needs_fresh_deck(deck: &Deck, threshold: usize) -> bool {
    deck.len() < threshold
}

/// Deals a player hand and a dealer hand, neither of which is a natural.
///
/// In standard mode the player takes the first two cards and the dealer the
/// next two. With `ace_mode`, the player takes the first ace in the deck plus
/// the card after it; if the deck has no ace, a fresh deck is shuffled and the
/// player takes its first two cards without forcing an ace.
///
/// Whenever either hand is a natural, the whole draw restarts from a fresh
/// shuffled deck. A deck too short to complete the draw is replaced the same
/// way.
///
/// # Example
///
/// ```
/// use bjdrill::{Deck, deal_initial_hands};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let deck = Deck::new_shuffled(&mut rng);
/// let deal = deal_initial_hands(deck, false, &mut rng);
/// assert!(!deal.player.is_natural());
/// assert!(!deal.dealer.is_natural());
/// assert_eq!(deal.remaining.len(), 48);
/// ```
#[must_use]
pub fn deal_initial_hands<R: Rng + ?Sized>(deck: Deck, ace_mode: bool, rng: &mut R) -> InitialDeal {
    let mut deck = deck;

    loop {
        let Some((player, rest)) = draw_player(deck, ace_mode, rng) else {
            log::debug!("deck too short for the player's hand, starting a fresh deck");
            deck = Deck::new_shuffled(rng);
            continue;
        };

        let Some((dealer, remaining)) = rest.draw_pair() else {
            log::debug!("deck too short for the dealer's hand, starting a fresh deck");
            deck = Deck::new_shuffled(rng);
            continue;
        };

        let player = Hand::from(player);
        let dealer = Hand::from(dealer);

        if player.is_natural() || dealer.is_natural() {
            log::debug!("natural dealt, redrawing from a fresh deck");
            deck = Deck::new_shuffled(rng);
            continue;
        }

        return InitialDeal {
            player,
            dealer,
            remaining,
        };
    }
}

fn draw_player<R: Rng + ?Sized>(
    deck: Deck,
    ace_mode: bool,
    rng: &mut R,
) -> Option<([Card; 2], Deck)> {
    if !ace_mode {
        return deck.draw_pair();
    }

    if deck.cards().iter().any(|card| card.is_ace()) {
        return deck.draw_ace_pair();
    }

    log::debug!("no ace left for ace mode, starting a fresh deck");
    Deck::new_shuffled(rng).draw_pair()
}
