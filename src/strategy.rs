//! Basic-strategy advisor for the initial two-card decision.
//!
//! The chart is a flat table of [`Rule`]s. A hand is classified into the
//! categories that apply to it (pair, soft total, hard total, in that order of
//! precedence) and the first category with a matching rule decides. A hand no
//! rule covers is hit.
//!
//! Hands of three or more cards are classified the same way, but the chart is
//! only meant for the opening decision.

use core::fmt;
use core::iter;
use core::ops::RangeInclusive;
use core::str::FromStr;

use crate::card::Card;
use crate::error::ParseDecisionError;
use crate::hand::evaluate;

use CategoryKind::{Hard, Pair, Soft};
use Decision::{Double, Hit, Split, Stand};

/// A player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet and take exactly one card.
    Double,
    /// Split a pair into two hands.
    Split,
}

impl Decision {
    /// All decisions, in button order.
    pub const ALL: [Self; 4] = [Self::Hit, Self::Stand, Self::Double, Self::Split];

    /// Returns the lower-case name of the decision.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Double => "double",
            Self::Split => "split",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Decision {
    type Err = ParseDecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|decision| {
                let name = decision.name();
                s.eq_ignore_ascii_case(name) || s.eq_ignore_ascii_case(code(*decision))
            })
            .ok_or(ParseDecisionError)
    }
}

const fn code(decision: Decision) -> &'static str {
    match decision {
        Decision::Hit => "h",
        Decision::Stand => "s",
        Decision::Double => "d",
        Decision::Split => "p",
    }
}

/// The row group of the strategy chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    /// Two cards of the same rank.
    Pair,
    /// A total with an ace still counted as 11.
    Soft,
    /// Any other total.
    Hard,
}

/// A hand classified for chart lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandCategory {
    /// A pair, keyed by the value of one of its cards (aces are 11).
    Pair(u16),
    /// A soft total.
    Soft(u16),
    /// A hard total.
    Hard(u16),
}

impl HandCategory {
    /// Returns the row group of this category.
    #[must_use]
    pub const fn kind(self) -> CategoryKind {
        match self {
            Self::Pair(_) => CategoryKind::Pair,
            Self::Soft(_) => CategoryKind::Soft,
            Self::Hard(_) => CategoryKind::Hard,
        }
    }

    /// Returns the value the chart is keyed on.
    #[must_use]
    pub const fn total(self) -> u16 {
        match self {
            Self::Pair(total) | Self::Soft(total) | Self::Hard(total) => total,
        }
    }
}

/// Returns every category that applies to the hand, highest precedence first.
///
/// A hard total is always the last entry.
pub fn categories(cards: &[Card]) -> impl Iterator<Item = HandCategory> {
    let total = evaluate(cards);
    let pair = match cards {
        [first, second] if first.rank == second.rank => {
            Some(HandCategory::Pair(u16::from(first.value())))
        }
        _ => None,
    };
    let soft = total.soft.then_some(HandCategory::Soft(total.value));

    pair.into_iter()
        .chain(soft)
        .chain(iter::once(HandCategory::Hard(total.value)))
}

/// One cell group of the chart.
///
/// A rule covers a range of player totals within one category. Against a
/// dealer upcard inside `upcards` it yields `inside`, otherwise `outside`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The row group.
    pub kind: CategoryKind,
    /// Player totals covered (pair card value for pairs).
    pub totals: RangeInclusive<u16>,
    /// Dealer upcard values (aces are 11) that select `inside`.
    pub upcards: RangeInclusive<u8>,
    /// Decision when the upcard is inside the range.
    pub inside: Decision,
    /// Decision when the upcard is outside the range.
    pub outside: Decision,
}

impl Rule {
    /// Returns whether the rule covers the category.
    #[must_use]
    pub fn applies_to(&self, category: HandCategory) -> bool {
        self.kind == category.kind() && self.totals.contains(&category.total())
    }

    /// Returns the rule's decision against a dealer upcard value.
    #[must_use]
    pub fn decide(&self, upcard: u8) -> Decision {
        if self.upcards.contains(&upcard) {
            self.inside
        } else {
            self.outside
        }
    }
}

const ANY_UPCARD: RangeInclusive<u8> = 0..=u8::MAX;

const fn rule(
    kind: CategoryKind,
    totals: RangeInclusive<u16>,
    upcards: RangeInclusive<u8>,
    inside: Decision,
    outside: Decision,
) -> Rule {
    Rule {
        kind,
        totals,
        upcards,
        inside,
        outside,
    }
}

const fn always(kind: CategoryKind, totals: RangeInclusive<u16>, decision: Decision) -> Rule {
    rule(kind, totals, ANY_UPCARD, decision, decision)
}

/// The basic-strategy chart.
///
/// Within one kind the total ranges do not overlap.
pub static RULES: [Rule; 16] = [
    // Pairs
    always(Pair, 11..=11, Split),
    always(Pair, 8..=8, Split),
    always(Pair, 5..=5, Double),
    rule(Pair, 2..=4, 2..=7, Split, Hit),
    // Soft totals
    always(Soft, 19..=21, Stand),
    rule(Soft, 18..=18, 2..=8, Stand, Hit),
    rule(Soft, 17..=17, 3..=6, Double, Hit),
    rule(Soft, 15..=16, 4..=6, Double, Hit),
    rule(Soft, 13..=14, 5..=6, Double, Hit),
    // Hard totals
    always(Hard, 17..=u16::MAX, Stand),
    always(Hard, 0..=8, Hit),
    rule(Hard, 13..=16, 2..=6, Stand, Hit),
    rule(Hard, 12..=12, 4..=6, Stand, Hit),
    always(Hard, 11..=11, Double),
    rule(Hard, 10..=10, 2..=9, Double, Hit),
    rule(Hard, 9..=9, 3..=6, Double, Hit),
];

/// Looks up a single category against a dealer upcard value.
///
/// Returns `None` when the chart has no row for the category.
#[must_use]
pub fn lookup(category: HandCategory, upcard: u8) -> Option<Decision> {
    RULES
        .iter()
        .find(|rule| rule.applies_to(category))
        .map(|rule| rule.decide(upcard))
}

/// The advisor's answer together with the category that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    /// The optimal decision.
    pub decision: Decision,
    /// The category whose row decided, or the hard total for the fallback.
    pub category: HandCategory,
}

/// Returns the optimal decision and the chart category behind it.
#[must_use]
pub fn advise(player: &[Card], dealer_up_card: Card) -> Advice {
    let upcard = dealer_up_card.value();
    let mut last = HandCategory::Hard(0);

    for category in categories(player) {
        last = category;
        if let Some(decision) = lookup(category, upcard) {
            log::trace!("{category:?} vs {upcard}: {decision}");
            return Advice { decision, category };
        }
    }

    Advice {
        decision: Decision::Hit,
        category: last,
    }
}

/// Returns the optimal decision for the player's cards against the dealer's
/// upcard.
///
/// # Example
///
/// ```
/// use bjdrill::{Card, Decision, Rank, Suit, perfect_decision};
///
/// let player = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Diamonds, Rank::Six),
/// ];
/// let dealer = Card::new(Suit::Clubs, Rank::Five);
/// assert_eq!(perfect_decision(&player, dealer), Decision::Double);
/// ```
#[must_use]
pub fn perfect_decision(player: &[Card], dealer_up_card: Card) -> Decision {
    advise(player, dealer_up_card).decision
}
