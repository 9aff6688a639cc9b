//! Deck construction and dealing.

use core::fmt;

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards.
///
/// Cards are dealt from the front. Dealt cards stay owned by the deck so a
/// [`shuffle`](Self::shuffle) can gather them back for a new game.
#[derive(Debug, Clone)]
pub struct Deck {
    /// All cards, dealt ones first.
    cards: Vec<Card>,
    /// Index of the next card to deal.
    next: usize,
}

impl Deck {
    /// Builds one card per rank and suit combination, in table order.
    ///
    /// `point_values[i]` is the point value of `ranks[i]`. The deck is not
    /// shuffled; call [`shuffle`](Self::shuffle) before dealing.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::LengthMismatch`] if the rank and point value
    /// tables differ in length.
    ///
    /// # Example
    ///
    /// ```
    /// use elevens::{Deck, Rank, Suit};
    ///
    /// let deck = Deck::new(&[Rank::Ace, Rank::King], &[Suit::Clubs], &[1, 0]).unwrap();
    /// assert_eq!(deck.size(), 2);
    /// ```
    pub fn new(ranks: &[Rank], suits: &[Suit], point_values: &[u8]) -> Result<Self, DeckError> {
        if ranks.len() != point_values.len() {
            return Err(DeckError::LengthMismatch {
                ranks: ranks.len(),
                point_values: point_values.len(),
            });
        }

        let table = ranks.iter().copied().zip(point_values.iter().copied());
        Ok(Self::from_table(table, suits))
    }

    /// Builds one card per `(rank, point value)` entry and suit, in table
    /// order. The deck is not shuffled.
    #[must_use]
    pub fn from_table<I>(table: I, suits: &[Suit]) -> Self
    where
        I: IntoIterator<Item = (Rank, u8)>,
        I::IntoIter: Clone,
    {
        let table = table.into_iter();
        let mut cards = Vec::new();
        for &suit in suits {
            for (rank, point_value) in table.clone() {
                cards.push(Card::new(rank, suit, point_value));
            }
        }

        Self::from_cards(cards)
    }

    /// Creates a deck that deals `cards` in the given order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, next: 0 }
    }

    /// Returns every dealt card to the deck and shuffles it.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.next = 0;
    }

    /// Deals the next card, or `None` if the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.get(self.next).copied()?;
        self.next += 1;
        Some(card)
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the undealt cards in dealing order.
    #[must_use]
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.next..]
    }

    /// Returns the dealt cards, most recent last.
    #[must_use]
    pub fn dealt(&self) -> &[Card] {
        &self.cards[..self.next]
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size = {}", self.size())?;
        writeln!(f)?;
        writeln!(f, "Undealt cards:")?;
        for card in self.undealt() {
            writeln!(f, "  {card}")?;
        }
        writeln!(f)?;
        writeln!(f, "Dealt cards:")?;
        for card in self.dealt() {
            writeln!(f, "  {card}")?;
        }
        Ok(())
    }
}
