//! Book detection on a player's hand.

use crate::card::{BOOK_SIZE, Card, MAX_RANK, Suit};
use crate::collection::CardCollection;
use crate::error::BookError;

/// Returns the first rank, in hand order, held at least four times.
///
/// # Example
///
/// ```
/// use gofish::{Card, CardCollection, Suit, hand::find_book};
///
/// let hand: CardCollection = [
///     Card::new(Suit::Hearts, 9),
///     Card::new(Suit::Clubs, 9),
///     Card::new(Suit::Spades, 2),
///     Card::new(Suit::Diamonds, 9),
///     Card::new(Suit::Spades, 9),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(find_book(&hand), Some(9));
/// ```
#[must_use]
pub fn find_book(hand: &CardCollection) -> Option<u8> {
    let mut counts = [0usize; MAX_RANK as usize + 1];
    for card in hand {
        if let Some(count) = counts.get_mut(usize::from(card.rank)) {
            *count += 1;
        }
    }
    hand.iter()
        .map(|card| card.rank)
        .find(|&rank| counts.get(usize::from(rank)).is_some_and(|&n| n >= BOOK_SIZE))
}

/// Removes the first four cards of `rank` from the hand, front to back.
///
/// # Errors
///
/// Returns [`BookError::InvariantViolation`] if the hand holds fewer than
/// four cards of `rank`. The hand is not modified in that case.
pub fn remove_book(
    rank: u8,
    hand: &mut CardCollection,
) -> Result<[Card; BOOK_SIZE], BookError> {
    let found = hand.count_rank(rank);
    if found < BOOK_SIZE {
        return Err(BookError::InvariantViolation { rank, found });
    }

    let mut book = [Card::new(Suit::Hearts, rank); BOOK_SIZE];
    for slot in &mut book {
        *slot = hand
            .remove_first(|card| card.rank == rank)
            .map_err(|_| BookError::InvariantViolation { rank, found })?;
    }
    Ok(book)
}

/// Finds and removes a book in one step.
///
/// Returns `Ok(None)` when the hand holds no book.
///
/// # Errors
///
/// Propagates [`BookError`] from [`remove_book`].
pub fn collect_book(
    hand: &mut CardCollection,
) -> Result<Option<(u8, [Card; BOOK_SIZE])>, BookError> {
    match find_book(hand) {
        Some(rank) => remove_book(rank, hand).map(|cards| Some((rank, cards))),
        None => Ok(None),
    }
}
