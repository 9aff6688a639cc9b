//! Error types for deck and board operations.

use thiserror::Error;

/// Errors that can occur while building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The rank and point value tables have different lengths.
    #[error("{ranks} ranks but {point_values} point values")]
    LengthMismatch {
        /// Number of ranks supplied.
        ranks: usize,
        /// Number of point values supplied.
        point_values: usize,
    },
}

/// Errors that can occur when playing or replacing a selection of slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Index is past the end of the board.
    #[error("slot {index} is out of range for a board of {size}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of slots on the board.
        size: usize,
    },
    /// Slot holds no card.
    #[error("slot {0} is empty")]
    EmptySlot(usize),
    /// Same slot selected more than once.
    #[error("slot {0} selected more than once")]
    DuplicateIndex(usize),
    /// The selection is not a legal group.
    #[error("selection is not a legal group")]
    NotLegal,
}
