//! Error types for collection, deck, and game operations.

use thiserror::Error;

/// Errors that can occur when mutating a card collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Index is past the end of the collection.
    #[error("index {index} is out of bounds for a collection of {len} cards")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The collection length at the time of the call.
        len: usize,
    },
    /// Both swap positions are the same.
    #[error("cannot swap position {0} with itself")]
    SameIndex(usize),
    /// No card matched the predicate.
    #[error("no matching card in the collection")]
    NotFound,
}

/// Reasons a single deck line cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line is empty.
    #[error("line is empty")]
    Empty,
    /// The rank token is not one of A, 2-10, J, Q, K.
    #[error("unrecognized rank token")]
    UnknownRank,
    /// The line has no suit after the rank token.
    #[error("missing suit name")]
    MissingSuit,
    /// The suit name is not hearts, diamonds, clubs, or spades.
    #[error("unrecognized suit name")]
    UnknownSuit,
}

/// Errors that can occur while building a deck from a line source.
#[derive(Debug, Error)]
pub enum DeckError {
    /// A line could not be parsed into a card.
    #[error("malformed deck line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: LineError,
    },
    /// The deck file could not be opened or read.
    #[cfg(feature = "std")]
    #[error("deck source unavailable: {0}")]
    SourceUnavailable(#[from] std::io::Error),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck to fill both hands.
    #[error("not enough cards to deal: needed {needed}, deck has {available}")]
    InsufficientCards {
        /// Cards required for both hands.
        needed: usize,
        /// Cards in the deck.
        available: usize,
    },
    /// The hands have already been dealt.
    #[error("cards have already been dealt")]
    AlreadyDealt,
}

/// Errors that can occur when removing a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookError {
    /// Fewer than four cards of the rank were in the hand.
    #[error("book of rank {rank} requested but only {found} cards present")]
    InvariantViolation {
        /// The requested rank.
        rank: u8,
        /// Number of matching cards actually in the hand.
        found: usize,
    },
}

/// Errors reported when validating raw guess input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The token is not one of A, 2-10, J, Q, K.
    #[error("guess must be one of A, 2-10, J, Q, K")]
    InvalidToken,
    /// The guesser holds no card of the rank.
    #[error("you must hold at least one card of rank {0} to ask for it")]
    NotInHand(u8),
}

/// Errors that can occur while resolving a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Rank is outside 1..=13.
    #[error("rank {0} is not a valid card rank")]
    InvalidRank(u8),
    /// The guesser holds no card of the guessed rank.
    #[error("guesser holds no card of rank {0}")]
    PossessionViolation(u8),
    /// A detected book could not be removed.
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Errors that can occur while driving a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Invalid game state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Turn resolution failed.
    #[error(transparent)]
    Turn(#[from] TurnError),
    /// The guess source stopped providing guesses.
    #[error("game cancelled by the guess source")]
    Cancelled,
}
