//! Training session configuration options.

use core::time::Duration;

use crate::deal::DEFAULT_RESHUFFLE_THRESHOLD;

/// Configuration options for a training session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use bjdrill::TrainerOptions;
///
/// let options = TrainerOptions::default()
///     .with_ace_mode(true)
///     .with_reshuffle_threshold(15)
///     .with_advance_delay(Duration::from_secs(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerOptions {
    /// Whether every player hand is forced to hold an ace.
    pub ace_mode: bool,
    /// A fresh deck is used once fewer than this many cards remain.
    pub reshuffle_threshold: usize,
    /// How long a front end shows feedback before dealing the next hand.
    pub advance_delay: Duration,
}

impl Default for TrainerOptions {
    fn default() -> Self {
        Self {
            ace_mode: false,
            reshuffle_threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            advance_delay: Duration::from_secs(2),
        }
    }
}

impl TrainerOptions {
    /// Sets whether ace mode starts enabled.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdrill::TrainerOptions;
    ///
    /// let options = TrainerOptions::default().with_ace_mode(true);
    /// assert!(options.ace_mode);
    /// ```
    #[must_use]
    pub const fn with_ace_mode(mut self, ace_mode: bool) -> Self {
        self.ace_mode = ace_mode;
        self
    }

    /// Sets the low-deck threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdrill::TrainerOptions;
    ///
    /// let options = TrainerOptions::default().with_reshuffle_threshold(20);
    /// assert_eq!(options.reshuffle_threshold, 20);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the auto-advance delay.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjdrill::TrainerOptions;
    ///
    /// let options = TrainerOptions::default().with_advance_delay(Duration::from_millis(500));
    /// assert_eq!(options.advance_delay, Duration::from_millis(500));
    /// ```
    #[must_use]
    pub const fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }
}
