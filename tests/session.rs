//! Training session tests.

use core::time::Duration;

use bjdrill::{
    AnswerError, CategoryKind, DECK_SIZE, Decision, Trainer, TrainerOptions, perfect_decision,
};

fn correct_answer(trainer: &Trainer) -> Decision {
    let round = trainer.round().unwrap();
    perfect_decision(round.player().cards(), round.up_card().unwrap())
}

fn wrong_answer(trainer: &Trainer) -> Decision {
    let correct = correct_answer(trainer);
    Decision::ALL
        .into_iter()
        .find(|&decision| decision != correct)
        .unwrap()
}

fn deck_holds_ace(trainer: &Trainer) -> bool {
    trainer.deck().cards().iter().any(|card| card.is_ace())
}

#[test]
fn options_builder_sets_fields() {
    let options = TrainerOptions::default()
        .with_ace_mode(true)
        .with_reshuffle_threshold(20)
        .with_advance_delay(Duration::from_millis(750));

    assert!(options.ace_mode);
    assert_eq!(options.reshuffle_threshold, 20);
    assert_eq!(options.advance_delay, Duration::from_millis(750));

    let defaults = TrainerOptions::default();
    assert!(!defaults.ace_mode);
    assert_eq!(defaults.reshuffle_threshold, 10);
    assert_eq!(defaults.advance_delay, Duration::from_secs(2));
}

#[test]
fn answer_errors() {
    let mut trainer = Trainer::new(TrainerOptions::default(), 1);
    assert_eq!(
        trainer.answer(Decision::Hit).unwrap_err(),
        AnswerError::NoActiveHand
    );

    trainer.next_hand();
    trainer.answer(Decision::Hit).unwrap();
    assert_eq!(
        trainer.answer(Decision::Hit).unwrap_err(),
        AnswerError::AlreadyAnswered
    );
    assert_eq!(trainer.stats().total(), 1);
}

#[test]
fn dealer_hole_card_hidden_until_answered() {
    let mut trainer = Trainer::new(TrainerOptions::default(), 2);
    let round = trainer.next_hand();
    assert!(!round.is_dealer_revealed());
    assert_eq!(round.visible_dealer_cards().len(), 1);
    assert_eq!(round.visible_dealer_cards()[0], round.up_card().unwrap());
    assert!(round.feedback().is_none());

    let decision = correct_answer(&trainer);
    trainer.answer(decision).unwrap();

    let round = trainer.round().unwrap();
    assert!(round.is_dealer_revealed());
    assert_eq!(round.visible_dealer_cards(), round.dealer().cards());
    assert!(round.is_answered());
}

#[test]
fn scoring_tracks_correct_and_wrong_answers() {
    let mut trainer = Trainer::new(TrainerOptions::default(), 3);

    trainer.next_hand();
    let decision = correct_answer(&trainer);
    let feedback = trainer.answer(decision).unwrap();
    assert!(feedback.is_correct());
    assert_eq!(feedback.chosen, feedback.correct);

    for _ in 0..2 {
        trainer.next_hand();
        let decision = wrong_answer(&trainer);
        let feedback = trainer.answer(decision).unwrap();
        assert!(!feedback.is_correct());
        assert_eq!(feedback.chosen, decision);
    }

    let stats = trainer.stats();
    assert_eq!(stats.score(), -1);
    assert_eq!(stats.correct(), 1);
    assert_eq!(stats.total(), 3);
    assert!((stats.accuracy_percent() - 33.3).abs() < 1e-9);
}

#[test]
fn accuracy_is_zero_before_any_answer() {
    let trainer = Trainer::new(TrainerOptions::default(), 4);
    assert_eq!(trainer.stats().total(), 0);
    assert!(trainer.stats().accuracy_percent().abs() < f64::EPSILON);
}

#[test]
fn category_tallies_sum_to_total() {
    let mut trainer = Trainer::new(TrainerOptions::default(), 5);

    for _ in 0..40 {
        trainer.next_hand();
        let decision = correct_answer(&trainer);
        trainer.answer(decision).unwrap();
    }

    let stats = trainer.stats();
    let sum: u32 = [CategoryKind::Pair, CategoryKind::Soft, CategoryKind::Hard]
        .into_iter()
        .map(|kind| stats.category(kind).total)
        .sum();
    assert_eq!(sum, 40);
    assert_eq!(stats.correct(), 40);
    assert_eq!(stats.score(), 40);
    assert!((stats.accuracy_percent() - 100.0).abs() < f64::EPSILON);
    assert!((stats.category(CategoryKind::Hard).accuracy_percent() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn reset_stats_keeps_the_table() {
    let mut trainer = Trainer::new(TrainerOptions::default(), 6);
    trainer.next_hand();
    trainer.answer(Decision::Stand).unwrap();

    trainer.reset_stats();
    assert_eq!(trainer.stats().total(), 0);
    assert_eq!(trainer.stats().score(), 0);
    assert!(trainer.round().is_some());
}

#[test]
fn ace_mode_toggle_applies_to_next_deal() {
    let mut trainer = Trainer::new(TrainerOptions::default(), 7);
    assert!(!trainer.ace_mode());
    assert!(trainer.toggle_ace_mode());
    assert!(trainer.options().ace_mode);

    for _ in 0..100 {
        // A deck below the threshold is replaced by a full one before dealing.
        let threshold = trainer.options().reshuffle_threshold;
        let deck_has_ace = trainer.cards_remaining() < threshold || deck_holds_ace(&trainer);

        let round = trainer.next_hand();
        if deck_has_ace {
            assert!(round.player().cards().iter().any(|card| card.is_ace()));
        }
    }

    trainer.set_ace_mode(false);
    assert!(!trainer.ace_mode());
    assert!(trainer.toggle_ace_mode());
}

#[test]
fn ace_mode_on_an_aceless_deck_starts_a_fresh_one() {
    let mut trainer = Trainer::new(TrainerOptions::default().with_ace_mode(true), 7);
    let threshold = trainer.options().reshuffle_threshold;

    let mut fallbacks = 0;
    for _ in 0..200 {
        let aceless = trainer.cards_remaining() >= threshold && !deck_holds_ace(&trainer);

        let round = trainer.next_hand();
        assert!(!round.player().is_natural());
        assert!(!round.dealer().is_natural());

        if aceless {
            fallbacks += 1;
            assert_eq!(trainer.cards_remaining(), DECK_SIZE - 4);
        }
    }
    assert!(fallbacks > 0);
}

#[test]
fn deck_is_replaced_below_threshold() {
    let mut trainer = Trainer::new(TrainerOptions::default(), 8);
    assert_eq!(trainer.cards_remaining(), DECK_SIZE);

    let mut saw_refill = false;
    let mut previous = trainer.cards_remaining();
    for _ in 0..40 {
        trainer.next_hand();
        let remaining = trainer.cards_remaining();
        assert!(remaining >= 6, "dealt from a deck below the threshold");
        assert_eq!(remaining % 4, 0);
        if remaining > previous {
            saw_refill = true;
        }
        previous = remaining;
    }
    assert!(saw_refill);
}

#[test]
fn same_seed_replays_the_same_hands() {
    let mut a = Trainer::new(TrainerOptions::default(), 99);
    let mut b = Trainer::new(TrainerOptions::default(), 99);

    for _ in 0..20 {
        assert_eq!(a.next_hand(), b.next_hand());
    }
}

#[test]
fn next_hand_replaces_an_unanswered_hand() {
    let mut trainer = Trainer::new(TrainerOptions::default(), 10);
    trainer.next_hand();
    trainer.next_hand();
    assert!(!trainer.round().unwrap().is_answered());
    assert_eq!(trainer.stats().total(), 0);
}
