//! Game engine and turn flow.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::collection::CardCollection;
use crate::deck::DeckSource;
use crate::error::{DealError, DeckError, GameError, TurnError};
use crate::hand::collect_book;
use crate::options::GameOptions;
use crate::result::{EndReason, MatchResult};

mod dealer;
pub mod state;
pub mod turn;

pub use dealer::deal;
pub use state::{Book, ForcedDraw, GameState, Player, PlayerId};
pub use turn::{Exchange, TurnOutcome, check_possession, parse_guess, resolve_turn};

/// What the active player sees when asked for a guess.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// The player who must guess.
    pub player: PlayerId,
    /// The guesser's hand.
    pub hand: &'a CardCollection,
    /// Number of cards the opponent holds.
    pub opponent_cards: usize,
    /// Number of cards left in the deck.
    pub deck_cards: usize,
    /// Current scores, indexed by [`PlayerId::index`].
    pub scores: [u8; 2],
}

/// Supplies one guess per turn.
///
/// Implementations return a rank the active player holds; re-prompting on bad
/// input belongs in the implementation, not in the engine. Returning `None`
/// cancels the game.
pub trait GuessSource {
    /// Returns the rank the active player asks for.
    fn next_guess(&mut self, view: &TurnView<'_>) -> Option<u8>;
}

impl<F> GuessSource for F
where
    F: FnMut(&TurnView<'_>) -> Option<u8>,
{
    fn next_guess(&mut self, view: &TurnView<'_>) -> Option<u8> {
        self(view)
    }
}

/// One iteration of the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Players with empty hands drew from the deck instead of guessing; the
    /// turn passed to the other player.
    ForcedDraw(Vec<ForcedDraw>),
    /// A guess was resolved.
    Turn {
        /// Who guessed.
        player: PlayerId,
        /// The guessed rank.
        rank: u8,
        /// What happened.
        outcome: TurnOutcome,
    },
    /// The match is over.
    Finished(MatchResult),
}

/// A two-player Go Fish game.
///
/// The game owns the deck, both players, and every removed book. Callers only
/// ever see copies of the collections.
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    state: GameState,
    deck: CardCollection,
    players: [Player; 2],
    current: PlayerId,
    books: Vec<Book>,
    result: Option<MatchResult>,
}

fn seats(players: &mut [Player; 2], guesser: PlayerId) -> (&mut Player, &mut Player) {
    let [one, two] = players;
    match guesser {
        PlayerId::One => (one, two),
        PlayerId::Two => (two, one),
    }
}

impl Game {
    /// Creates a game with a standard deck shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut deck = crate::deck::build_standard_deck();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        crate::deck::shuffle(&mut deck, options.shuffle_swaps, &mut rng);
        Self::with_deck(options, deck)
    }

    /// Creates a game that deals from `deck` as given, front card first.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: CardCollection) -> Self {
        Self {
            options,
            state: GameState::WaitingForDeal,
            deck,
            players: [Player::new(), Player::new()],
            current: PlayerId::One,
            books: Vec::new(),
            result: None,
        }
    }

    /// Creates a game from a deck source, using `seed` for shuffling.
    ///
    /// # Errors
    ///
    /// Returns a [`DeckError`] if the source cannot be loaded.
    pub fn from_source(
        options: GameOptions,
        source: &DeckSource,
        seed: u64,
    ) -> Result<Self, DeckError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = source.load(options.shuffle_swaps, &mut rng)?;
        Ok(Self::with_deck(options, deck))
    }

    /// Builds a game from a position already in progress.
    ///
    /// The game starts in [`GameState::AwaitingGuess`] with `current` to play.
    /// Scores are taken from the players; no books are recorded.
    #[must_use]
    pub const fn resume(
        options: GameOptions,
        deck: CardCollection,
        players: [Player; 2],
        current: PlayerId,
    ) -> Self {
        Self {
            options,
            state: GameState::AwaitingGuess,
            deck,
            players,
            current,
            books: Vec::new(),
            result: None,
        }
    }

    /// Deals the opening hands and scores any book either player was dealt,
    /// player 1 first.
    ///
    /// Returns the books found in the opening hands.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::AlreadyDealt`] if called twice, or
    /// [`DealError::InsufficientCards`] if the deck is too small.
    pub fn deal(&mut self) -> Result<Vec<Book>, GameError> {
        if self.state != GameState::WaitingForDeal {
            return Err(DealError::AlreadyDealt.into());
        }

        let [one, two] = &mut self.players;
        dealer::deal(
            &mut self.deck,
            &mut one.hand,
            &mut two.hand,
            self.options.hand_size,
        )?;

        let mut opening = Vec::new();
        for id in PlayerId::BOTH {
            let player = &mut self.players[id.index()];
            if let Some((rank, cards)) = collect_book(&mut player.hand).map_err(TurnError::from)? {
                player.score += 1;
                log::info!("{id} was dealt a book of rank {rank}");
                let book = Book {
                    player: id,
                    rank,
                    cards,
                };
                self.books.push(book);
                opening.push(book);
            }
        }

        self.state = GameState::AwaitingGuess;
        if let Some(reason) = self.end_reason() {
            self.finish(reason);
        }
        Ok(opening)
    }

    /// Resolves a guess by the active player.
    ///
    /// After the guess the end conditions are checked, so a game driven only
    /// through `guess` and [`Game::draw_for_empty_hands`] still finishes.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] unless the game is waiting for a
    /// guess, or a [`TurnError`] if the guess is not legal.
    pub fn guess(&mut self, rank: u8) -> Result<TurnOutcome, GameError> {
        if self.state != GameState::AwaitingGuess {
            return Err(GameError::InvalidState);
        }

        let player = self.current;
        let (guesser, opponent) = seats(&mut self.players, player);
        let outcome = resolve_turn(guesser, opponent, rank, &mut self.deck)?;

        if let Some((rank, cards)) = outcome.book {
            self.books.push(Book {
                player,
                rank,
                cards,
            });
        }
        if !outcome.keeps_turn {
            self.current = player.opponent();
        }
        if let Some(reason) = self.end_reason() {
            self.finish(reason);
        }

        Ok(outcome)
    }

    /// Runs one iteration of the game loop.
    ///
    /// Checks whether the match is over, then either performs forced draws
    /// for players with empty hands or asks `source` for the active player's
    /// guess and resolves it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] before dealing,
    /// [`GameError::Cancelled`] if the source returns `None`, or a
    /// [`TurnError`] if the source returns an illegal guess.
    pub fn step<S>(&mut self, source: &mut S) -> Result<Step, GameError>
    where
        S: GuessSource + ?Sized,
    {
        match self.state {
            GameState::WaitingForDeal => return Err(GameError::InvalidState),
            GameState::Finished => {
                return self.result.map(Step::Finished).ok_or(GameError::InvalidState);
            }
            GameState::AwaitingGuess => {}
        }

        if let Some(reason) = self.end_reason() {
            return Ok(Step::Finished(self.finish(reason)));
        }

        let draws = self.draw_for_empty_hands()?;
        if !draws.is_empty() {
            return Ok(Step::ForcedDraw(draws));
        }

        let player = self.current;
        let rank = source
            .next_guess(&self.view())
            .ok_or(GameError::Cancelled)?;
        let outcome = self.guess(rank)?;

        Ok(Step::Turn {
            player,
            rank,
            outcome,
        })
    }

    /// Plays until the match is over, dealing first if needed.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Game::deal`] or [`Game::step`].
    pub fn run<S>(&mut self, source: &mut S) -> Result<MatchResult, GameError>
    where
        S: GuessSource + ?Sized,
    {
        if self.state == GameState::WaitingForDeal {
            self.deal()?;
        }
        loop {
            if let Step::Finished(result) = self.step(source)? {
                return Ok(result);
            }
        }
    }

    fn view(&self) -> TurnView<'_> {
        let player = self.current;
        TurnView {
            player,
            hand: &self.players[player.index()].hand,
            opponent_cards: self.players[player.opponent().index()].hand.len(),
            deck_cards: self.deck.len(),
            scores: self.scores(),
        }
    }

    fn end_reason(&self) -> Option<EndReason> {
        let [one, two] = &self.players;
        if one.score >= self.options.winning_score || two.score >= self.options.winning_score {
            return Some(EndReason::WinningScore);
        }
        if !self.deck.is_empty() {
            return None;
        }
        if one.hand.is_empty() || two.hand.is_empty() {
            return Some(EndReason::Unplayable);
        }
        let shares_rank = one.hand.iter().any(|card| two.hand.contains_rank(card.rank));
        if shares_rank {
            None
        } else {
            Some(EndReason::Stalled)
        }
    }

    /// Gives one card from the deck to each player with an empty hand,
    /// player 1 first.
    ///
    /// If anyone drew, the turn passes to the other player. Returns the draws
    /// made, which is empty when both players hold cards or the deck is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] unless the game is waiting for a
    /// guess.
    pub fn draw_for_empty_hands(&mut self) -> Result<Vec<ForcedDraw>, GameError> {
        if self.state != GameState::AwaitingGuess {
            return Err(GameError::InvalidState);
        }

        let mut draws = Vec::new();
        for id in PlayerId::BOTH {
            let player = &mut self.players[id.index()];
            if !player.hand.is_empty() {
                continue;
            }
            let Some(card) = self.deck.take_front() else {
                break;
            };
            player.hand.push(card);
            log::debug!("{id} has no cards and draws {card}");
            draws.push(ForcedDraw { player: id, card });
        }
        if !draws.is_empty() {
            self.current = self.current.opponent();
        }
        Ok(draws)
    }

    fn finish(&mut self, reason: EndReason) -> MatchResult {
        let result = MatchResult::from_scores(self.scores(), reason);
        match result.winner {
            Some(winner) => log::info!(
                "game over ({reason:?}): {winner} wins {}-{}",
                result.scores[0],
                result.scores[1]
            ),
            None => log::info!(
                "game over ({reason:?}): tie at {}-{}",
                result.scores[0],
                result.scores[1]
            ),
        }
        self.state = GameState::Finished;
        self.result = Some(result);
        result
    }

    /// Returns the options the game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Returns a copy of a player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Vec<Card> {
        self.players[player.index()].hand.to_vec()
    }

    /// Returns the number of cards a player holds.
    #[must_use]
    pub fn hand_len(&self, player: PlayerId) -> usize {
        self.players[player.index()].hand.len()
    }

    /// Returns a copy of the deck, front card first.
    #[must_use]
    pub fn deck(&self) -> Vec<Card> {
        self.deck.to_vec()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns a player's score.
    #[must_use]
    pub const fn score(&self, player: PlayerId) -> u8 {
        self.players[player.index()].score
    }

    /// Returns both scores, indexed by [`PlayerId::index`].
    #[must_use]
    pub const fn scores(&self) -> [u8; 2] {
        [self.players[0].score, self.players[1].score]
    }

    /// Returns every book removed so far, in the order they were completed.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the result once the match is over.
    #[must_use]
    pub const fn result(&self) -> Option<MatchResult> {
        self.result
    }
}
