//! Game state types.

use crate::card::{BOOK_SIZE, Card};
use crate::collection::CardCollection;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Deck is built, hands are not dealt yet.
    WaitingForDeal,
    /// Waiting for the active player's guess.
    AwaitingGuess,
    /// The match is over.
    Finished,
}

/// One of the two seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    /// Player 1, who takes the first turn.
    One,
    /// Player 2.
    Two,
}

impl PlayerId {
    /// Both players, in turn order.
    pub const BOTH: [Self; 2] = [Self::One, Self::Two];

    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Returns 0 for player 1 and 1 for player 2.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::One => f.write_str("Player 1"),
            Self::Two => f.write_str("Player 2"),
        }
    }
}

/// A player's hand and score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    /// Cards held.
    pub hand: CardCollection,
    /// Completed books.
    pub score: u8,
}

impl Player {
    /// Creates a player with an empty hand and no score.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: CardCollection::new(),
            score: 0,
        }
    }

    /// Creates a player holding the given cards.
    #[must_use]
    pub fn with_hand(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            hand: cards.into_iter().collect(),
            score: 0,
        }
    }
}

/// A completed book removed from a player's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    /// Who completed the book.
    pub player: PlayerId,
    /// The rank of the book.
    pub rank: u8,
    /// The four cards.
    pub cards: [Card; BOOK_SIZE],
}

/// A card drawn because the player's hand was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForcedDraw {
    /// Who drew.
    pub player: PlayerId,
    /// The card drawn.
    pub card: Card,
}
