//! Running accuracy counters.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::strategy::CategoryKind;

use super::state::Feedback;

#[cfg(feature = "std")]
fn round_tenths(percent: f64) -> f64 {
    (percent * 10.0).round() / 10.0
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_tenths(percent: f64) -> f64 {
    libm::round(percent * 10.0) / 10.0
}

fn percent(correct: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_tenths(f64::from(correct) * 100.0 / f64::from(total))
}

/// Correct and total answers for one slice of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// Answers that matched the chart.
    pub correct: u32,
    /// All answers.
    pub total: u32,
}

impl Tally {
    /// Returns the accuracy in percent, rounded to one decimal.
    #[must_use]
    pub fn accuracy_percent(&self) -> f64 {
        percent(self.correct, self.total)
    }

    fn record(&mut self, is_correct: bool) {
        self.total += 1;
        if is_correct {
            self.correct += 1;
        }
    }
}

/// Session statistics.
///
/// The score gains a point for every correct answer and loses one for every
/// mistake.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stats {
    score: i64,
    overall: Tally,
    by_category: HashMap<CategoryKind, Tally>,
}

impl Stats {
    /// Creates empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answered hand.
    pub fn record(&mut self, feedback: &Feedback) {
        let is_correct = feedback.is_correct();
        self.score += if is_correct { 1 } else { -1 };
        self.overall.record(is_correct);
        self.by_category
            .entry(feedback.category)
            .or_default()
            .record(is_correct);
    }

    /// Returns the running score.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Returns the number of correct answers.
    #[must_use]
    pub const fn correct(&self) -> u32 {
        self.overall.correct
    }

    /// Returns the number of answers.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.overall.total
    }

    /// Returns the overall accuracy in percent, rounded to one decimal.
    ///
    /// Returns `0.0` before the first answer.
    #[must_use]
    pub fn accuracy_percent(&self) -> f64 {
        self.overall.accuracy_percent()
    }

    /// Returns the tally for one chart section.
    #[must_use]
    pub fn category(&self, kind: CategoryKind) -> Tally {
        self.by_category.get(&kind).copied().unwrap_or_default()
    }
}
