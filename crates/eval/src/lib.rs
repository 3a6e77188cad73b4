// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker hand evaluator.
//!
//! Poker hand evaluator for hands of 5 or more cards. A hand evaluates to a
//! [HandValue] made of the hand category ([HandRank]) and the tie-break ranks
//! that order two hands of the same category, values compare with the usual
//! poker rules:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = ["Ts", "Js", "Qs", "Ks", "As", "2d", "2c"]
//!     .map(|c| c.parse::<Card>().unwrap());
//!
//! let royal = HandValue::best_hand(&cards).unwrap();
//! assert_eq!(royal.rank(), HandRank::RoyalFlush);
//!
//! let pair = HandValue::eval(&[cards[0], cards[1], cards[2], cards[5], cards[6]]);
//! assert_eq!(pair.rank(), HandRank::OnePair);
//! assert!(royal > pair);
//! ```
//!
//! Two players hands are compared at showdown with [showdown]:
//!
//! ```
//! # use showdown_eval::*;
//! let parse = |s: &str| s.parse::<Card>().unwrap();
//! let board = ["2h", "7d", "9c", "Js", "Kh"].map(parse);
//! let aces = ["Ah", "Ad"].map(parse);
//! let kings = ["Ks", "Kd"].map(parse);
//!
//! assert_eq!(showdown(&kings, &aces, &board).unwrap(), Showdown::A);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue, Tiebreak};

mod showdown;
pub use showdown::{Showdown, showdown};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};

/// Evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A hand needs at least 5 cards.
    #[error("a hand needs at least 5 cards, got {0}")]
    NotEnoughCards(usize),
    /// A board has at most 5 cards.
    #[error("a board has at most 5 cards, got {0}")]
    InvalidBoard(usize),
}

/// Evaluation result type.
pub type Result<T> = std::result::Result<T, Error>;
