//! CLI Go Fish example for two players sharing one terminal.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use gofish::card::rank_token;
use gofish::game::{check_possession, parse_guess};
use gofish::{
    Card, DeckSource, EndReason, Exchange, Game, GameOptions, GuessSource, MatchResult, PlayerId,
    Step, Suit, TurnView,
};

/// Play Go Fish against a friend in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Read the deck from a file (one `<rank> <suit>` per line) instead of
    /// generating and shuffling one.
    #[arg(long)]
    deck_file: Option<PathBuf>,
    /// Seed for shuffling a generated deck. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Cards dealt to each player.
    #[arg(long, default_value_t = gofish::options::DEFAULT_HAND_SIZE)]
    hand_size: usize,
    /// Books needed to win outright.
    #[arg(long, default_value_t = gofish::options::DEFAULT_WINNING_SCORE)]
    winning_score: u8,
    /// Random swaps used to shuffle a generated deck.
    #[arg(long, default_value_t = gofish::deck::DEFAULT_SWAPS)]
    swaps: usize,
}

struct Console;

impl GuessSource for Console {
    fn next_guess(&mut self, view: &TurnView<'_>) -> Option<u8> {
        println!(
            "\n{} to play | score {}-{} | opponent holds {} | deck {}",
            view.player, view.scores[0], view.scores[1], view.opponent_cards, view.deck_cards
        );
        println!("Your hand: {}", format_cards(view.hand.iter()));

        loop {
            let input = prompt_line("Ask for a rank (A, 2-10, J, Q, K, or q to quit): ")?;
            if input == "q" || input == "quit" {
                return None;
            }
            let rank = match parse_guess(&input) {
                Ok(rank) => rank,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };
            match check_possession(rank, view.hand) {
                Ok(()) => return Some(rank),
                Err(err) => println!("{err}"),
            }
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("Go Fish CLI example");

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let source = args
        .deck_file
        .map_or(DeckSource::Generated, DeckSource::FromFile);
    let options = GameOptions::default()
        .with_hand_size(args.hand_size)
        .with_winning_score(args.winning_score)
        .with_shuffle_swaps(args.swaps);

    let mut game = match Game::from_source(options, &source, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Could not load deck: {err}");
            process::exit(1);
        }
    };

    match game.deal() {
        Ok(books) => {
            for book in books {
                println!("{} was dealt a book of {}s!", book.player, label(book.rank));
            }
        }
        Err(err) => {
            eprintln!("Deal error: {err}");
            process::exit(1);
        }
    }

    let mut console = Console;
    loop {
        match game.step(&mut console) {
            Ok(Step::ForcedDraw(draws)) => {
                for draw in draws {
                    println!("{} has no cards and draws one.", draw.player);
                }
            }
            Ok(Step::Turn {
                player,
                rank,
                outcome,
            }) => {
                match outcome.exchange {
                    Exchange::CardsTransferred(count) => println!(
                        "{} hands over {count} {}(s). {player} goes again.",
                        player.opponent(),
                        label(rank)
                    ),
                    Exchange::DrewFromPool(Some(card)) => {
                        println!("Go Fish! {player} draws {}.", format_card(card));
                    }
                    Exchange::DrewFromPool(None) => {
                        println!("Go Fish! The deck is empty, nothing to draw.");
                    }
                }
                if let Some((book_rank, _)) = outcome.book {
                    println!("{player} completes a book of {}s!", label(book_rank));
                }
            }
            Ok(Step::Finished(result)) => {
                print_result(&game, result);
                break;
            }
            Err(gofish::GameError::Cancelled) => {
                println!("Goodbye.");
                break;
            }
            Err(err) => {
                println!("Game error: {err}");
                break;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn label(rank: u8) -> &'static str {
    rank_token(rank).unwrap_or("?")
}

fn suit_symbol(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "\u{2665}",
        Suit::Diamonds => "\u{2666}",
        Suit::Clubs => "\u{2663}",
        Suit::Spades => "\u{2660}",
    }
}

fn format_card(card: Card) -> String {
    format!("{}{}", label(card.rank), suit_symbol(card.suit))
}

fn format_cards<'a>(cards: impl Iterator<Item = &'a Card>) -> String {
    cards
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_result(game: &Game, result: MatchResult) {
    println!();
    for player in PlayerId::BOTH {
        println!(
            "{player}: {} book(s), hand {}",
            game.score(player),
            format_cards(game.hand(player).iter())
        );
    }
    match result.reason {
        EndReason::WinningScore => println!("A player reached the winning score."),
        EndReason::Unplayable => println!("A hand and the deck are empty."),
        EndReason::Stalled => println!("No more cards can change hands."),
    }
    match result.winner {
        Some(winner) => println!("{winner} wins {}-{}!", result.scores[0], result.scores[1]),
        None => println!("It's a tie at {}-{}.", result.scores[0], result.scores[1]),
    }
}
