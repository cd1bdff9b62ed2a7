//! Dealing engine tests.

use bjdrill::{Card, DECK_SIZE, Deck, Rank, Suit, deal_initial_hands, needs_fresh_deck};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn standard_deal_follows_draw_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let deck = Deck::from(vec![
        card(Suit::Spades, Rank::Nine),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Clubs, Rank::Six),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Two),
    ]);

    let deal = deal_initial_hands(deck, false, &mut rng);
    assert_eq!(
        deal.player.cards(),
        &[card(Suit::Spades, Rank::Nine), card(Suit::Diamonds, Rank::Seven)]
    );
    assert_eq!(
        deal.dealer.cards(),
        &[card(Suit::Clubs, Rank::Six), card(Suit::Hearts, Rank::Ten)]
    );
    assert_eq!(deal.dealer.up_card(), Some(card(Suit::Clubs, Rank::Six)));
    assert_eq!(deal.remaining.cards(), &[card(Suit::Spades, Rank::Two)]);
}

#[test]
fn ace_mode_pairs_ace_with_wrapped_partner() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let deck = Deck::from(vec![
        card(Suit::Spades, Rank::Two),
        card(Suit::Spades, Rank::Three),
        card(Suit::Spades, Rank::Four),
        card(Suit::Spades, Rank::Five),
        card(Suit::Hearts, Rank::Ace),
    ]);

    let deal = deal_initial_hands(deck, true, &mut rng);
    assert_eq!(
        deal.player.cards(),
        &[card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::Two)]
    );
    assert_eq!(
        deal.dealer.cards(),
        &[card(Suit::Spades, Rank::Three), card(Suit::Spades, Rank::Four)]
    );
    assert_eq!(deal.remaining.cards(), &[card(Suit::Spades, Rank::Five)]);
}

#[test]
fn natural_forces_a_fresh_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut cards = vec![
        card(Suit::Spades, Rank::Ace),
        card(Suit::Spades, Rank::King),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Hearts, Rank::Six),
    ];
    cards.extend((0..20).map(|_| card(Suit::Clubs, Rank::Two)));
    let deck = Deck::from(cards);

    let deal = deal_initial_hands(deck, false, &mut rng);
    assert!(!deal.player.is_natural());
    assert!(!deal.dealer.is_natural());
    // Redealt from a full 52-card deck.
    assert_eq!(deal.remaining.len(), DECK_SIZE - 4);
}

#[test]
fn dealer_natural_forces_a_fresh_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let deck = Deck::from(vec![
        card(Suit::Spades, Rank::Nine),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Hearts, Rank::Queen),
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Two),
    ]);

    let deal = deal_initial_hands(deck, false, &mut rng);
    assert!(!deal.dealer.is_natural());
    assert_eq!(deal.remaining.len(), DECK_SIZE - 4);
}

#[test]
fn short_deck_is_replaced() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let deck = Deck::from(vec![
        card(Suit::Spades, Rank::Nine),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Hearts, Rank::Five),
    ]);

    let deal = deal_initial_hands(deck, false, &mut rng);
    assert_eq!(deal.player.len(), 2);
    assert_eq!(deal.dealer.len(), 2);
    assert_eq!(deal.remaining.len(), DECK_SIZE - 4);
}

#[test]
fn ace_mode_without_aces_uses_a_fresh_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let deck = Deck::from(vec![card(Suit::Clubs, Rank::Two); 12]);

    let deal = deal_initial_hands(deck, true, &mut rng);
    assert!(!deal.player.is_natural());
    assert!(!deal.dealer.is_natural());
    assert_eq!(deal.remaining.len(), DECK_SIZE - 4);
}

#[test]
fn never_deals_a_natural() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for ace_mode in [false, true] {
        for _ in 0..10_000 {
            let deck = Deck::new_shuffled(&mut rng);
            let deal = deal_initial_hands(deck, ace_mode, &mut rng);
            assert!(!deal.player.is_natural(), "player natural: {:?}", deal.player);
            assert!(!deal.dealer.is_natural(), "dealer natural: {:?}", deal.dealer);
        }
    }
}

#[test]
fn ace_mode_always_gives_the_player_an_ace() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);

    for _ in 0..2_000 {
        let deck = Deck::new_shuffled(&mut rng);
        let deal = deal_initial_hands(deck, true, &mut rng);
        assert!(deal.player.cards().iter().any(|c| c.is_ace()));
        assert_eq!(deal.player.len(), 2);
        assert_eq!(deal.dealer.len(), 2);
        assert_eq!(deal.remaining.len(), DECK_SIZE - 4);
    }
}

#[test]
fn consecutive_deals_never_repeat_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut deck = Deck::new_shuffled(&mut rng);
    let mut seen = Vec::new();

    while !needs_fresh_deck(&deck, 10) {
        let before = deck.len();
        let deal = deal_initial_hands(deck, false, &mut rng);
        if deal.remaining.len() != before - 4 {
            // A natural forced a new deck; the old cards are gone.
            seen.clear();
        }
        seen.extend_from_slice(deal.player.cards());
        seen.extend_from_slice(deal.dealer.cards());
        deck = deal.remaining;
    }

    for (i, a) in seen.iter().enumerate() {
        assert!(!seen[i + 1..].contains(a), "{a} dealt twice");
    }
}

#[test]
fn low_deck_policy() {
    let deck = Deck::from(vec![card(Suit::Clubs, Rank::Two); 9]);
    assert!(needs_fresh_deck(&deck, 10));
    assert!(!needs_fresh_deck(&deck, 9));
    assert!(!needs_fresh_deck(&Deck::ordered(), 10));
}
