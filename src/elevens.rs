//! Rules of Elevens.
//!
//! Nine cards are dealt face up. A pair of non-face cards whose point values
//! add to 11, or a jack, queen and king together, may be removed and replaced
//! from the deck. The game is won when the deck and the board are both empty.

use core::fmt;

use crate::card::{Card, Rank, Suit};
use crate::rules::{Group, Rules};

/// Number of slots on an Elevens board.
pub const BOARD_SIZE: usize = 9;

/// Ranks of the Elevens deck.
pub const RANKS: [Rank; 13] = Rank::ALL;

/// Suits of the Elevens deck.
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

/// Point values parallel to [`RANKS`]. Face cards are worth nothing.
pub const POINT_VALUES: [u8; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 0, 0];

/// Point value total of a removable pair.
const PAIR_SUM: u8 = 11;

/// A group removed from an Elevens board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevensGroup {
    /// Two cards whose point values add to 11.
    PairSum11([usize; 2]),
    /// A jack, queen and king, as `[jack, queen, king]`.
    JackQueenKing([usize; 3]),
}

impl Group for ElevensGroup {
    fn indices(&self) -> &[usize] {
        match self {
            Self::PairSum11(indices) => indices.as_slice(),
            Self::JackQueenKing(indices) => indices.as_slice(),
        }
    }
}

impl fmt::Display for ElevensGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PairSum11(_) => f.write_str("11-Pair"),
            Self::JackQueenKing(_) => f.write_str("JQK-Triplet"),
        }
    }
}

/// The Elevens rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elevens;

impl Elevens {
    /// Looks for a pair of cards whose point values add to 11.
    ///
    /// Candidates are scanned in the order given and the first pair found
    /// wins, so the result depends on candidate order.
    #[must_use]
    pub fn find_pair_sum_11(
        &self,
        slots: &[Option<Card>],
        candidates: &[usize],
    ) -> Option<[usize; 2]> {
        let value = |index: usize| slots.get(index).copied().flatten().map(|c| c.point_value);

        for (i, &first) in candidates.iter().enumerate() {
            let Some(first_value) = value(first) else {
                continue;
            };
            for &second in &candidates[i + 1..] {
                if value(second).is_some_and(|v| first_value.checked_add(v) == Some(PAIR_SUM)) {
                    return Some([first, second]);
                }
            }
        }
        None
    }

    /// Looks for a jack, a queen and a king among the candidates.
    ///
    /// Returns `[jack, queen, king]`. When a rank appears more than once, the
    /// last candidate of that rank is used.
    #[must_use]
    pub fn find_jqk(&self, slots: &[Option<Card>], candidates: &[usize]) -> Option<[usize; 3]> {
        let mut jack = None;
        let mut queen = None;
        let mut king = None;

        for &index in candidates {
            match slots.get(index).copied().flatten().map(|c| c.rank) {
                Some(Rank::Jack) => jack = Some(index),
                Some(Rank::Queen) => queen = Some(index),
                Some(Rank::King) => king = Some(index),
                _ => {}
            }
        }

        Some([jack?, queen?, king?])
    }
}

impl Rules for Elevens {
    type Group = ElevensGroup;

    fn board_size(&self) -> usize {
        BOARD_SIZE
    }

    fn ranks(&self) -> &[Rank] {
        &RANKS
    }

    fn suits(&self) -> &[Suit] {
        &SUITS
    }

    fn point_value(&self, rank: Rank) -> u8 {
        POINT_VALUES[rank as usize]
    }

    fn is_legal(&self, slots: &[Option<Card>], selection: &[usize]) -> bool {
        match selection.len() {
            2 => self.find_pair_sum_11(slots, selection).is_some(),
            3 => self.find_jqk(slots, selection).is_some(),
            _ => false,
        }
    }

    fn find_group(&self, slots: &[Option<Card>], candidates: &[usize]) -> Option<ElevensGroup> {
        self.find_pair_sum_11(slots, candidates)
            .map(ElevensGroup::PairSum11)
            .or_else(|| {
                self.find_jqk(slots, candidates)
                    .map(ElevensGroup::JackQueenKing)
            })
    }
}
