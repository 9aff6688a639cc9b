//! Card and deck tests.

use std::collections::HashSet;

use elevens::elevens::{POINT_VALUES, RANKS, SUITS};
use elevens::{Card, DECK_SIZE, Deck, DeckError, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn cards_match_on_rank_and_suit_only() {
    let a = Card::new(Rank::Three, Suit::Clubs, 3);
    let b = Card::new(Rank::Three, Suit::Clubs, 7);
    let c = Card::new(Rank::Three, Suit::Hearts, 3);

    assert!(a.matches(&b));
    assert_eq!(a, b);
    assert!(!a.matches(&c));
    assert_ne!(a, c);
}

#[test]
fn card_display() {
    let card = Card::new(Rank::Queen, Suit::Hearts, 0);
    assert_eq!(card.to_string(), "queen of hearts (point value = 0)");
    assert_eq!(
        Card::new(Rank::Ten, Suit::Spades, 10).to_string(),
        "10 of spades (point value = 10)"
    );
}

#[test]
fn rank_properties() {
    assert_eq!(Rank::Ace.ordinal(), 1);
    assert_eq!(Rank::King.ordinal(), 13);
    assert!(Rank::Jack.is_face());
    assert!(!Rank::Ten.is_face());
    assert_eq!(Rank::ALL.iter().filter(|r| r.is_face()).count(), 3);
}

#[test]
fn elevens_deck_has_every_card_once() {
    let deck = Deck::new(&RANKS, &SUITS, &POINT_VALUES).unwrap();
    assert_eq!(deck.size(), DECK_SIZE);

    let unique: HashSet<Card> = deck.undealt().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for card in deck.undealt() {
        let expected = if card.rank.is_face() {
            0
        } else {
            card.rank.ordinal()
        };
        assert_eq!(card.point_value, expected, "{card}");
    }
}

#[test]
fn deals_from_the_front_until_empty() {
    let mut deck = Deck::new(&[Rank::Two, Rank::Six], &[Suit::Hearts], &[1, 3]).unwrap();

    assert_eq!(deck.deal(), Some(Card::new(Rank::Two, Suit::Hearts, 1)));
    assert_eq!(deck.size(), 1);
    assert_eq!(deck.deal(), Some(Card::new(Rank::Six, Suit::Hearts, 3)));
    assert!(deck.is_empty());
    assert_eq!(deck.deal(), None);
    assert_eq!(deck.dealt().len(), 2);
}

#[test]
fn mismatched_tables_are_rejected() {
    let err = Deck::new(&[Rank::Two, Rank::Three, Rank::Six], &[Suit::Clubs], &[1, 2]).unwrap_err();
    assert_eq!(
        err,
        DeckError::LengthMismatch {
            ranks: 3,
            point_values: 2
        }
    );
}

#[test]
fn empty_tables_build_an_empty_deck() {
    let mut deck = Deck::new(&[], &[Suit::Spades], &[]).unwrap();
    assert!(deck.is_empty());
    assert_eq!(deck.deal(), None);
}

#[test]
fn shuffle_returns_dealt_cards() {
    let mut deck = Deck::new(&RANKS, &SUITS, &POINT_VALUES).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..20 {
        deck.deal();
    }

    deck.shuffle(&mut rng);
    assert_eq!(deck.size(), DECK_SIZE);
    assert!(deck.dealt().is_empty());
}

#[test]
fn display_lists_undealt_and_dealt() {
    let mut deck = Deck::new(&[Rank::Two, Rank::Three], &[Suit::Diamonds], &[2, 3]).unwrap();
    deck.deal();

    assert_eq!(
        deck.to_string(),
        "size = 1\n\nUndealt cards:\n  3 of diamonds (point value = 3)\n\n\
         Dealt cards:\n  2 of diamonds (point value = 2)\n"
    );
}
