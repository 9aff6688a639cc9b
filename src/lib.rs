//! An Elevens solitaire board engine with optional `no_std` support.
//!
//! The crate provides a [`Board`] that holds a row of card slots fed from a
//! shuffled [`Deck`]. Legality is supplied by a [`Rules`] implementation;
//! [`Elevens`] removes pairs of non-face cards adding to 11 and
//! jack-queen-king triplets.
//!
//! # Example
//!
//! ```
//! use elevens::{Board, BoardOptions, Elevens};
//!
//! let mut board: Board<Elevens> = Board::new(BoardOptions::default().quiet(), 7);
//! while board.play_if_possible() {}
//! println!("won: {}", board.game_is_won());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod card;
pub mod deck;
pub mod elevens;
pub mod error;
pub mod options;
pub mod rules;

// Re-export main types
pub use board::Board;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use elevens::{BOARD_SIZE, Elevens, ElevensGroup};
pub use error::{DeckError, SelectionError};
pub use options::BoardOptions;
pub use rules::{Group, Rules};
