//! Board state and lifecycle.

use core::fmt;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::elevens::Elevens;
use crate::options::BoardOptions;
use crate::rules::Rules;

mod play;

/// A row of card slots fed from a deck, played under a rule set.
///
/// The board owns its deck and random number generator. Slots are addressed
/// by index; an index keeps naming the same slot for the whole game, and a
/// slot whose card was removed after the deck ran out stays empty.
///
/// # Example
///
/// ```
/// use elevens::{Board, BoardOptions, Elevens};
///
/// let mut board: Board<Elevens> = Board::new(BoardOptions::default(), 42);
/// assert_eq!(board.card_indexes().len(), 9);
/// while board.play_if_possible() {}
/// assert!(!board.another_play_is_possible());
/// ```
#[derive(Debug, Clone)]
pub struct Board<R: Rules = Elevens> {
    /// Rule set deciding legal groups.
    rules: R,
    /// Board options.
    options: BoardOptions,
    /// One entry per slot; `None` once the deck could not refill it.
    slots: Vec<Option<Card>>,
    /// Cards not yet on the board.
    deck: Deck,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl<R: Rules + Default> Board<R> {
    /// Creates a board with default rules, shuffles a fresh deck with the
    /// given seed and deals the opening cards.
    #[must_use]
    pub fn new(options: BoardOptions, seed: u64) -> Self {
        Self::with_rules(R::default(), options, seed)
    }
}

impl<R: Rules> Board<R> {
    /// Creates a board for `rules`, shuffles a fresh deck with the given seed
    /// and deals the opening cards.
    #[must_use]
    pub fn with_rules(rules: R, options: BoardOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Self::create_deck(&rules);
        deck.shuffle(&mut rng);
        Self::from_deck(rules, options, deck, rng)
    }

    /// Creates a board that deals from `deck` in its current order.
    ///
    /// The deck is not shuffled; `rng` is only used by
    /// [`new_game`](Self::new_game).
    #[must_use]
    pub fn from_deck(rules: R, options: BoardOptions, deck: Deck, rng: ChaCha8Rng) -> Self {
        let size = rules.board_size();
        let mut board = Self {
            rules,
            options,
            slots: alloc::vec![None; size],
            deck,
            rng,
        };
        board.deal_all();
        board
    }

    /// Builds the unshuffled deck described by the rules.
    fn create_deck(rules: &R) -> Deck {
        let table = rules
            .ranks()
            .iter()
            .map(|&rank| (rank, rules.point_value(rank)));
        Deck::from_table(table, rules.suits())
    }

    /// Fills every slot from the deck, leaving slots empty once it runs out.
    fn deal_all(&mut self) {
        for slot in &mut self.slots {
            *slot = self.deck.deal();
        }
    }

    /// Gathers every card back into the deck, reshuffles and redeals.
    pub fn new_game(&mut self) {
        self.deck.shuffle(&mut self.rng);
        self.deal_all();
    }

    /// Returns the rule set.
    pub const fn rules(&self) -> &R {
        &self.rules
    }

    /// Returns the board options.
    pub const fn options(&self) -> &BoardOptions {
        &self.options
    }

    /// Returns the number of slots.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Returns the card in the given slot, or `None` if the slot is empty or
    /// out of range.
    pub fn card_at(&self, index: usize) -> Option<&Card> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Returns every slot in index order.
    pub fn slots(&self) -> &[Option<Card>] {
        &self.slots
    }

    /// Returns the indices of occupied slots in ascending order.
    pub fn card_indexes(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.is_some().then_some(index))
            .collect()
    }

    /// Returns the number of undealt cards.
    pub fn deck_size(&self) -> usize {
        self.deck.size()
    }

    /// Returns the deck.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Returns whether the game is won: the deck and the board are both empty.
    pub fn game_is_won(&self) -> bool {
        self.deck.is_empty() && self.is_empty()
    }
}

impl<R: Rules> fmt::Display for Board<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(card) => writeln!(f, "{index}: {card}")?,
                None => writeln!(f, "{index}: (empty)")?,
            }
        }
        Ok(())
    }
}
