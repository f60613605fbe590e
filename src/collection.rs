//! Ordered card container backing the deck and both hands.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::CollectionError;

/// An ordered collection of cards.
///
/// The front of the collection is the top of a deck. Cards only move between
/// collections; none of these operations create or copy cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardCollection {
    cards: VecDeque<Card>,
}

impl CardCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates an empty collection with room for `capacity` cards.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a card at the tail.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Removes and returns the front card, if any.
    pub fn take_front(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<Card, CollectionError> {
        let len = self.cards.len();
        self.cards
            .remove(index)
            .ok_or(CollectionError::IndexOutOfBounds { index, len })
    }

    /// Removes and returns the first card matching `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NotFound`] if no card matches.
    pub fn remove_first<P>(&mut self, mut predicate: P) -> Result<Card, CollectionError>
    where
        P: FnMut(&Card) -> bool,
    {
        let index = self
            .cards
            .iter()
            .position(|card| predicate(card))
            .ok_or(CollectionError::NotFound)?;
        self.remove_at(index)
    }

    /// Detaches every card matching `predicate`, keeping the rest in order.
    pub fn take_all<P>(&mut self, mut predicate: P) -> Vec<Card>
    where
        P: FnMut(&Card) -> bool,
    {
        let mut taken = Vec::new();
        let mut kept = VecDeque::with_capacity(self.cards.len());
        for card in self.cards.drain(..) {
            if predicate(&card) {
                taken.push(card);
            } else {
                kept.push_back(card);
            }
        }
        self.cards = kept;
        taken
    }

    /// Exchanges the cards at positions `i` and `j`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::SameIndex`] if `i == j`, or
    /// [`CollectionError::IndexOutOfBounds`] if either index is invalid.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), CollectionError> {
        let len = self.cards.len();
        for index in [i, j] {
            if index >= len {
                return Err(CollectionError::IndexOutOfBounds { index, len });
            }
        }
        if i == j {
            return Err(CollectionError::SameIndex(i));
        }
        self.cards.swap(i, j);
        Ok(())
    }

    /// Swaps two positions the caller has already bounds-checked.
    pub(crate) fn swap_distinct(&mut self, i: usize, j: usize) {
        debug_assert!(i != j && i < self.cards.len() && j < self.cards.len());
        self.cards.swap(i, j);
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the front card without removing it.
    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards front to back.
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns whether any card has the given rank.
    #[must_use]
    pub fn contains_rank(&self, rank: u8) -> bool {
        self.cards.iter().any(|card| card.rank == rank)
    }

    /// Counts the cards of the given rank.
    #[must_use]
    pub fn count_rank(&self, rank: u8) -> usize {
        self.cards.iter().filter(|card| card.rank == rank).count()
    }

    /// Returns a snapshot of the cards, front to back.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

impl FromIterator<Card> for CardCollection {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for CardCollection {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CardCollection {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for CardCollection {
    type Item = Card;
    type IntoIter = vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
