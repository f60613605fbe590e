//! Card, collection, deck, and book tests.

use std::collections::HashSet;

use gofish::card::{parse_rank, rank_token};
use gofish::deck::{build_standard_deck, parse_card_line, parse_deck_from_lines, shuffle};
use gofish::hand::{collect_book, find_book, remove_book};
use gofish::{
    BookError, Card, CardCollection, CollectionError, DECK_SIZE, DeckError, LineError, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn collection(cards: &[Card]) -> CardCollection {
    cards.iter().copied().collect()
}

#[test]
fn rank_tokens_round_trip_through_parser() {
    for rank in 1..=13 {
        let token = rank_token(rank).unwrap();
        assert_eq!(parse_rank(token), Some(rank));
    }
    assert_eq!(rank_token(0), None);
    assert_eq!(rank_token(14), None);
    assert_eq!(parse_rank("1"), None);
    assert_eq!(parse_rank("j"), None);
    assert_eq!(parse_rank(""), None);
}

#[test]
fn card_displays_in_deck_file_format() {
    assert_eq!(card(Suit::Hearts, 10).to_string(), "10 hearts");
    assert_eq!(card(Suit::Spades, 1).to_string(), "A spades");
    assert_eq!(card(Suit::Diamonds, 12).to_string(), "Q diamonds");
}

#[test]
fn collection_push_take_and_remove() {
    let mut cards = CardCollection::new();
    assert!(cards.is_empty());
    assert_eq!(cards.take_front(), None);

    cards.push(card(Suit::Hearts, 2));
    cards.push(card(Suit::Clubs, 3));
    cards.push(card(Suit::Spades, 4));
    assert_eq!(cards.len(), 3);
    assert_eq!(cards.front(), Some(&card(Suit::Hearts, 2)));

    assert_eq!(cards.remove_at(1), Ok(card(Suit::Clubs, 3)));
    assert_eq!(
        cards.remove_at(5),
        Err(CollectionError::IndexOutOfBounds { index: 5, len: 2 })
    );
    assert_eq!(
        cards.remove_first(|c| c.rank == 9),
        Err(CollectionError::NotFound)
    );
    assert_eq!(
        cards.remove_first(|c| c.suit == Suit::Spades),
        Ok(card(Suit::Spades, 4))
    );
    assert_eq!(cards.take_front(), Some(card(Suit::Hearts, 2)));
    assert!(cards.is_empty());
}

#[test]
fn collection_swap_exchanges_contents() {
    let mut cards = collection(&[
        card(Suit::Hearts, 1),
        card(Suit::Diamonds, 2),
        card(Suit::Clubs, 3),
    ]);

    cards.swap(0, 2).unwrap();
    assert_eq!(
        cards.to_vec(),
        vec![
            card(Suit::Clubs, 3),
            card(Suit::Diamonds, 2),
            card(Suit::Hearts, 1)
        ]
    );

    assert_eq!(cards.swap(1, 1), Err(CollectionError::SameIndex(1)));
    assert_eq!(
        cards.swap(0, 3),
        Err(CollectionError::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(cards.len(), 3);
}

#[test]
fn take_all_keeps_remaining_order() {
    let mut cards = collection(&[
        card(Suit::Hearts, 7),
        card(Suit::Diamonds, 2),
        card(Suit::Clubs, 7),
        card(Suit::Spades, 5),
    ]);

    let taken = cards.take_all(|c| c.rank == 7);
    assert_eq!(taken, vec![card(Suit::Hearts, 7), card(Suit::Clubs, 7)]);
    assert_eq!(
        cards.to_vec(),
        vec![card(Suit::Diamonds, 2), card(Suit::Spades, 5)]
    );
    assert!(cards.take_all(|c| c.rank == 7).is_empty());
}

#[test]
fn iteration_is_restartable() {
    let cards = collection(&[card(Suit::Hearts, 4), card(Suit::Clubs, 8)]);
    let first: Vec<u8> = cards.iter().map(|c| c.rank).collect();
    let second: Vec<u8> = (&cards).into_iter().map(|c| c.rank).collect();
    assert_eq!(first, vec![4, 8]);
    assert_eq!(first, second);
    assert_eq!(cards.count_rank(8), 1);
    assert!(cards.contains_rank(4));
    assert!(!cards.contains_rank(5));
}

#[test]
fn standard_deck_order() {
    let deck = build_standard_deck().to_vec();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(
        &deck[..4],
        &[
            card(Suit::Hearts, 1),
            card(Suit::Diamonds, 1),
            card(Suit::Clubs, 1),
            card(Suit::Spades, 1),
        ]
    );
    assert_eq!(deck[4], card(Suit::Hearts, 2));
    assert_eq!(deck[51], card(Suit::Spades, 13));

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn shuffle_preserves_cards_and_changes_order() {
    let original = build_standard_deck();
    let mut deck = original.clone();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    shuffle(&mut deck, 200, &mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(deck, original);

    let before: HashSet<Card> = original.iter().copied().collect();
    let after: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(before, after);
}

#[test]
fn shuffle_is_deterministic_for_a_seed() {
    let mut a = build_standard_deck();
    let mut b = build_standard_deck();
    shuffle(&mut a, 200, &mut ChaCha8Rng::seed_from_u64(99));
    shuffle(&mut b, 200, &mut ChaCha8Rng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn shuffle_leaves_tiny_collections_alone() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let mut empty = CardCollection::new();
    shuffle(&mut empty, 200, &mut rng);
    assert!(empty.is_empty());

    let mut single = collection(&[card(Suit::Clubs, 9)]);
    shuffle(&mut single, 200, &mut rng);
    assert_eq!(single.to_vec(), vec![card(Suit::Clubs, 9)]);

    let mut untouched = build_standard_deck();
    shuffle(&mut untouched, 0, &mut rng);
    assert_eq!(untouched, build_standard_deck());
}

#[test]
fn parse_card_lines() {
    assert_eq!(parse_card_line("A hearts"), Ok(card(Suit::Hearts, 1)));
    assert_eq!(parse_card_line("10 spades\n"), Ok(card(Suit::Spades, 10)));
    assert_eq!(parse_card_line("K diamonds\r\n"), Ok(card(Suit::Diamonds, 13)));
    assert_eq!(parse_card_line("J clubs"), Ok(card(Suit::Clubs, 11)));
    assert_eq!(parse_card_line("Q hearts"), Ok(card(Suit::Hearts, 12)));

    assert_eq!(parse_card_line(""), Err(LineError::Empty));
    assert_eq!(parse_card_line("\n"), Err(LineError::Empty));
    assert_eq!(parse_card_line("Z hearts"), Err(LineError::UnknownRank));
    assert_eq!(parse_card_line("a hearts"), Err(LineError::UnknownRank));
    assert_eq!(parse_card_line("11 hearts"), Err(LineError::UnknownRank));
    assert_eq!(parse_card_line("7"), Err(LineError::MissingSuit));
    assert_eq!(parse_card_line("7 "), Err(LineError::MissingSuit));
    assert_eq!(parse_card_line("7 Hearts"), Err(LineError::UnknownSuit));
    assert_eq!(parse_card_line("7 stars"), Err(LineError::UnknownSuit));
}

#[test]
fn parse_deck_keeps_line_order() {
    let deck = parse_deck_from_lines(["8 spades", "K diamonds", "A clubs"]).unwrap();
    assert_eq!(
        deck.to_vec(),
        vec![
            card(Suit::Spades, 8),
            card(Suit::Diamonds, 13),
            card(Suit::Clubs, 1)
        ]
    );
}

#[test]
fn parse_deck_fails_whole_load_on_bad_line() {
    let err = parse_deck_from_lines(["8 spades", "", "A clubs"]).unwrap_err();
    assert!(matches!(
        err,
        DeckError::MalformedLine {
            line: 2,
            reason: LineError::Empty
        }
    ));
}

#[test]
fn load_deck_file_round_trips_standard_deck() {
    let path = std::env::temp_dir().join(format!("gofish-deck-{}.txt", std::process::id()));
    let text: String = build_standard_deck()
        .iter()
        .map(|c| format!("{c}\n"))
        .collect();
    std::fs::write(&path, text).unwrap();

    let loaded = gofish::deck::load_deck_file(&path);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.unwrap(), build_standard_deck());
}

#[test]
fn load_deck_file_reports_missing_source() {
    let path = std::env::temp_dir().join("gofish-no-such-deck-file.txt");
    let err = gofish::deck::load_deck_file(&path).unwrap_err();
    assert!(matches!(err, DeckError::SourceUnavailable(_)));
}

#[test]
fn find_book_needs_four_of_a_rank() {
    let mut hand = collection(&[
        card(Suit::Hearts, 3),
        card(Suit::Diamonds, 3),
        card(Suit::Clubs, 3),
        card(Suit::Spades, 8),
    ]);
    assert_eq!(find_book(&hand), None);

    hand.push(card(Suit::Spades, 3));
    assert_eq!(find_book(&hand), Some(3));
}

#[test]
fn remove_book_takes_exactly_four() {
    let mut hand = collection(&[
        card(Suit::Hearts, 3),
        card(Suit::Spades, 8),
        card(Suit::Diamonds, 3),
        card(Suit::Clubs, 3),
        card(Suit::Spades, 3),
    ]);

    let book = remove_book(3, &mut hand).unwrap();
    assert!(book.iter().all(|c| c.rank == 3));
    assert_eq!(hand.to_vec(), vec![card(Suit::Spades, 8)]);
    assert_eq!(hand.count_rank(3), 0);
    assert_eq!(find_book(&hand), None);
}

#[test]
fn remove_book_without_four_is_rejected_untouched() {
    let mut hand = collection(&[
        card(Suit::Hearts, 3),
        card(Suit::Diamonds, 3),
        card(Suit::Clubs, 3),
    ]);
    let before = hand.clone();

    assert_eq!(
        remove_book(3, &mut hand),
        Err(BookError::InvariantViolation { rank: 3, found: 3 })
    );
    assert_eq!(hand, before);
}

#[test]
fn collect_book_finds_and_removes() {
    let mut hand = collection(&[
        card(Suit::Hearts, 12),
        card(Suit::Diamonds, 12),
        card(Suit::Clubs, 12),
        card(Suit::Spades, 12),
        card(Suit::Spades, 2),
    ]);
    let (rank, _) = collect_book(&mut hand).unwrap().unwrap();
    assert_eq!(rank, 12);
    assert_eq!(hand.len(), 1);
    assert_eq!(collect_book(&mut hand), Ok(None));
}
