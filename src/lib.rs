//! A two-player Go Fish game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the deck and both hands and
//! runs the turn loop: deal, guess, transfer or draw, book removal, and the
//! end-of-game checks. Guesses come from a [`GuessSource`], so prompting and
//! rendering stay with the caller.
//!
//! # Example
//!
//! ```
//! use gofish::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.deal().unwrap();
//! assert_eq!(game.cards_remaining(), 38);
//!
//! let player = game.current_player();
//! let rank = game.hand(player)[0].rank;
//! let outcome = game.guess(rank).unwrap();
//! let _ = outcome.keeps_turn;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod collection;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{BOOK_SIZE, Card, DECK_SIZE, Suit};
pub use collection::CardCollection;
pub use deck::DeckSource;
pub use error::{
    BookError, CollectionError, DealError, DeckError, GameError, GuessError, LineError, TurnError,
};
pub use game::{
    Book, Exchange, ForcedDraw, Game, GameState, GuessSource, Player, PlayerId, Step, TurnOutcome,
    TurnView,
};
pub use options::GameOptions;
pub use result::{EndReason, MatchResult};
