//! Card types and rank helpers.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in the order a standard deck is built.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the lowercase name used in deck files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Spades => "spades",
        }
    }

    /// Parses a lowercase suit name (`"hearts"`, `"diamonds"`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|suit| suit.name() == name)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but can never be guessed.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    /// Formats the card the way deck files spell it, e.g. `10 hearts`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", rank_token(self.rank).unwrap_or("?"), self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards of one rank that make a book.
pub const BOOK_SIZE: usize = 4;

/// Lowest valid rank (Ace).
pub const MIN_RANK: u8 = 1;

/// Highest valid rank (King).
pub const MAX_RANK: u8 = 13;

const RANK_TOKENS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// Returns whether `rank` is in 1..=13.
#[must_use]
pub const fn is_valid_rank(rank: u8) -> bool {
    rank >= MIN_RANK && rank <= MAX_RANK
}

/// Returns the display token for a rank (`A`, `2`..`10`, `J`, `Q`, `K`).
#[must_use]
pub fn rank_token(rank: u8) -> Option<&'static str> {
    if is_valid_rank(rank) {
        RANK_TOKENS.get(usize::from(rank - MIN_RANK)).copied()
    } else {
        None
    }
}

/// Parses a rank token. Tokens are case-sensitive: `a` or `k` are rejected.
///
/// # Example
///
/// ```
/// use gofish::card::parse_rank;
///
/// assert_eq!(parse_rank("A"), Some(1));
/// assert_eq!(parse_rank("10"), Some(10));
/// assert_eq!(parse_rank("q"), None);
/// ```
#[must_use]
pub fn parse_rank(token: &str) -> Option<u8> {
    RANK_TOKENS
        .iter()
        .position(|candidate| *candidate == token)
        .and_then(|index| u8::try_from(index).ok())
        .map(|index| index + MIN_RANK)
}
