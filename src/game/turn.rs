//! Turn resolution: transfer or draw, then the book check.

use crate::card::{BOOK_SIZE, Card, is_valid_rank, parse_rank};
use crate::collection::CardCollection;
use crate::error::{GuessError, TurnError};
use crate::hand::collect_book;

use super::state::Player;

/// Card movement caused by a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    /// The opponent handed over this many cards of the guessed rank.
    CardsTransferred(usize),
    /// Go Fish: the guesser drew the deck's front card, or nothing if the
    /// deck was empty.
    DrewFromPool(Option<Card>),
}

/// Outcome of a resolved guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// What moved.
    pub exchange: Exchange,
    /// Rank and cards of a book completed by the guesser this turn.
    pub book: Option<(u8, [Card; BOOK_SIZE])>,
    /// Whether the guesser plays again.
    pub keeps_turn: bool,
}

/// Parses a guess token (`A`, `2`..`10`, `J`, `Q`, `K`).
///
/// # Errors
///
/// Returns [`GuessError::InvalidToken`] for anything outside the vocabulary.
pub fn parse_guess(token: &str) -> Result<u8, GuessError> {
    parse_rank(token).ok_or(GuessError::InvalidToken)
}

/// Checks that a hand holds at least one card of `rank`.
///
/// # Errors
///
/// Returns [`GuessError::NotInHand`] otherwise.
pub fn check_possession(rank: u8, hand: &CardCollection) -> Result<(), GuessError> {
    if hand.contains_rank(rank) {
        Ok(())
    } else {
        Err(GuessError::NotInHand(rank))
    }
}

/// Resolves `guesser` asking `opponent` for `rank`.
///
/// If the opponent holds any cards of the rank they all move to the guesser
/// and the guesser keeps the turn. Otherwise the guesser draws the deck's
/// front card (nothing if the deck is empty) and the turn passes. Either way
/// the guesser's hand is then checked once for a book, which is removed and
/// scored.
///
/// # Errors
///
/// Returns [`TurnError::InvalidRank`] or [`TurnError::PossessionViolation`]
/// without touching any collection when the guess is not legal.
pub fn resolve_turn(
    guesser: &mut Player,
    opponent: &mut Player,
    rank: u8,
    deck: &mut CardCollection,
) -> Result<TurnOutcome, TurnError> {
    if !is_valid_rank(rank) {
        return Err(TurnError::InvalidRank(rank));
    }
    if !guesser.hand.contains_rank(rank) {
        return Err(TurnError::PossessionViolation(rank));
    }

    let exchange = if opponent.hand.contains_rank(rank) {
        let taken = opponent.hand.take_all(|card| card.rank == rank);
        let count = taken.len();
        guesser.hand.extend(taken);
        log::debug!("transferred {count} card(s) of rank {rank}");
        Exchange::CardsTransferred(count)
    } else {
        let drawn = deck.take_front();
        if let Some(card) = drawn {
            guesser.hand.push(card);
            log::debug!("go fish: drew {card}");
        } else {
            log::debug!("go fish: deck is empty, nothing drawn");
        }
        Exchange::DrewFromPool(drawn)
    };

    let book = collect_book(&mut guesser.hand)?;
    if let Some((book_rank, _)) = book {
        guesser.score += 1;
        log::info!("book of rank {book_rank} completed, score now {}", guesser.score);
    }

    Ok(TurnOutcome {
        exchange,
        book,
        keeps_turn: matches!(exchange, Exchange::CardsTransferred(_)),
    })
}
