//! Game configuration options.

use crate::deck::DEFAULT_SWAPS;

/// Default number of cards dealt to each player.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Default score that ends the game.
pub const DEFAULT_WINNING_SCORE: u8 = 7;

/// Configuration options for a Go Fish game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use gofish::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(5)
///     .with_winning_score(4)
///     .with_shuffle_swaps(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to each player at the start.
    pub hand_size: usize,
    /// Score at which a player wins outright.
    pub winning_score: u8,
    /// Random swaps applied when generating a deck.
    pub shuffle_swaps: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            winning_score: DEFAULT_WINNING_SCORE,
            shuffle_swaps: DEFAULT_SWAPS,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the score that wins the game.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_score(4);
    /// assert_eq!(options.winning_score, 4);
    /// ```
    #[must_use]
    pub const fn with_winning_score(mut self, score: u8) -> Self {
        self.winning_score = score;
        self
    }

    /// Sets the number of random swaps used to shuffle a generated deck.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_swaps(1000);
    /// assert_eq!(options.shuffle_swaps, 1000);
    /// ```
    #[must_use]
    pub const fn with_shuffle_swaps(mut self, swaps: usize) -> Self {
        self.shuffle_swaps = swaps;
        self
    }
}
