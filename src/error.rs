//! Error types for parsing and session operations.

use thiserror::Error;

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input was empty.
    #[error("empty card string")]
    Empty,
    /// The trailing suit character was not recognized.
    #[error("unrecognized suit")]
    InvalidSuit,
    /// The rank label was not recognized.
    #[error("unrecognized rank")]
    InvalidRank,
}

/// Error returned when a decision name cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized decision (expected hit, stand, double or split)")]
pub struct ParseDecisionError;

/// Errors that can occur when answering a training hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// No hand has been dealt yet.
    #[error("no hand has been dealt")]
    NoActiveHand,
    /// The current hand was already answered.
    #[error("the current hand was already answered")]
    AlreadyAnswered,
}
