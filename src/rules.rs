//! Pluggable legality rules for a board.

use core::fmt;

use crate::card::{Card, Rank, Suit};

/// A group of slots that a rule set allows to be removed.
///
/// The `Display` output is used in the notice logged after an auto-play,
/// as `"{group} removed."`.
pub trait Group: fmt::Display {
    /// Returns the slot indices covered by the group.
    fn indices(&self) -> &[usize];
}

/// The rule set of a board game played over a fixed row of card slots.
///
/// A [`Board`](crate::Board) owns the slots and the deck. The rules decide
/// which cards go into the deck, how many slots there are and which
/// selections may be removed.
///
/// Slot slices passed to the rules always have [`board_size`](Self::board_size)
/// entries. Callers guarantee that `selection` and `candidates` only name
/// occupied slots, but implementations should treat an empty slot as never
/// matching rather than panic.
pub trait Rules {
    /// The kind of group these rules remove.
    type Group: Group;

    /// Number of slots on the board.
    fn board_size(&self) -> usize;

    /// Ranks used to build the deck.
    fn ranks(&self) -> &[Rank];

    /// Suits used to build the deck.
    fn suits(&self) -> &[Suit];

    /// Point value of a card of the given rank.
    fn point_value(&self, rank: Rank) -> u8;

    /// Returns whether `selection` is a legal group to remove.
    fn is_legal(&self, slots: &[Option<Card>], selection: &[usize]) -> bool;

    /// Finds a removable group among `candidates`, if any.
    fn find_group(&self, slots: &[Option<Card>], candidates: &[usize]) -> Option<Self::Group>;

    /// Returns whether any removable group exists among `candidates`.
    fn another_play_is_possible(&self, slots: &[Option<Card>], candidates: &[usize]) -> bool {
        self.find_group(slots, candidates).is_some()
    }
}
