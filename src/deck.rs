//! Deck construction, parsing, and shuffling.

#[cfg(feature = "std")]
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit, parse_rank};
use crate::collection::CardCollection;
use crate::error::{DeckError, LineError};

/// Default number of random swaps applied to a generated deck.
pub const DEFAULT_SWAPS: usize = 200;

/// Builds an ordered 52-card deck.
///
/// Cards are ordered by ascending rank, and within each rank by hearts,
/// diamonds, clubs, spades.
#[must_use]
pub fn build_standard_deck() -> CardCollection {
    let mut deck = CardCollection::with_capacity(DECK_SIZE);
    for rank in MIN_RANK..=MAX_RANK {
        for suit in Suit::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Parses one deck line of the form `<rank> <suit>`, e.g. `K diamonds`.
///
/// A trailing `\n` or `\r\n` is stripped first.
///
/// # Errors
///
/// Returns a [`LineError`] describing which part of the line is invalid.
pub fn parse_card_line(line: &str) -> Result<Card, LineError> {
    let line = line
        .strip_suffix('\n')
        .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest));
    if line.is_empty() {
        return Err(LineError::Empty);
    }

    let (token, suit) = line.split_once(' ').unwrap_or((line, ""));
    let rank = parse_rank(token).ok_or(LineError::UnknownRank)?;
    if suit.is_empty() {
        return Err(LineError::MissingSuit);
    }
    let suit = Suit::from_name(suit).ok_or(LineError::UnknownSuit)?;

    Ok(Card::new(suit, rank))
}

/// Builds a deck from a sequence of lines, one card per line.
///
/// The deck keeps the line order. A source with fewer than 52 lines yields a
/// short deck; duplicate cards are not rejected.
///
/// # Errors
///
/// Returns [`DeckError::MalformedLine`] for the first line that fails to
/// parse. No partial deck is returned.
pub fn parse_deck_from_lines<I, S>(lines: I) -> Result<CardCollection, DeckError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            parse_card_line(line.as_ref()).map_err(|reason| DeckError::MalformedLine {
                line: index + 1,
                reason,
            })
        })
        .collect()
}

/// Reads a deck file, one card per line.
///
/// # Errors
///
/// Returns [`DeckError::SourceUnavailable`] if the file cannot be opened or
/// read, or [`DeckError::MalformedLine`] if a line cannot be parsed.
#[cfg(feature = "std")]
pub fn load_deck_file(path: impl AsRef<Path>) -> Result<CardCollection, DeckError> {
    use std::io::BufRead;

    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let lines = std::io::BufReader::new(file)
        .lines()
        .collect::<Result<alloc::vec::Vec<_>, _>>()?;
    let deck = parse_deck_from_lines(&lines)?;
    log::debug!("loaded {} cards from {}", deck.len(), path.display());
    Ok(deck)
}

/// Shuffles a collection in place with `swaps` random transpositions.
///
/// Each swap picks two uniformly random positions, redrawing the second one
/// until it differs from the first. Collections with fewer than two cards are
/// left unchanged.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut CardCollection, swaps: usize, rng: &mut R) {
    let len = cards.len();
    if len < 2 {
        return;
    }

    for _ in 0..swaps {
        let i = rng.random_range(0..len);
        let mut j = rng.random_range(0..len);
        while j == i {
            j = rng.random_range(0..len);
        }
        cards.swap_distinct(i, j);
        log::trace!("swapped positions {i} and {j}");
    }
}

/// Where the game takes its deck from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeckSource {
    /// A standard deck, shuffled with the configured number of swaps.
    #[default]
    Generated,
    /// A deck file read as is, without shuffling.
    #[cfg(feature = "std")]
    FromFile(PathBuf),
}

impl DeckSource {
    /// Produces the deck described by this source.
    ///
    /// # Errors
    ///
    /// Returns a [`DeckError`] if a deck file cannot be read or parsed.
    pub fn load<R: Rng + ?Sized>(
        &self,
        swaps: usize,
        rng: &mut R,
    ) -> Result<CardCollection, DeckError> {
        match self {
            Self::Generated => {
                let mut deck = build_standard_deck();
                shuffle(&mut deck, swaps, rng);
                Ok(deck)
            }
            #[cfg(feature = "std")]
            Self::FromFile(path) => load_deck_file(path),
        }
    }
}
