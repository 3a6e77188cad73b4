// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "Td".parse::<Card>().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! Dealing never reintroduces a card, a card drawn from the deck is removed
//! from it and drawing more cards than the deck holds is an error:
//!
//! ```
//! # use showdown_cards::{Deck, Error};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hole = deck.draw(2).unwrap();
//! assert_eq!(deck.count(), Deck::SIZE - 2);
//! assert!(hole.iter().all(|c| !deck.contains(*c)));
//!
//! let err = deck.draw(51).unwrap_err();
//! assert_eq!(err, Error::EmptyDeck { requested: 51, available: 50 });
//! ```
//!
//! To iterate through all k-cards hands:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(2, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 1_326);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

/// Cards and deck errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The deck has fewer cards than requested.
    #[error("cannot draw {requested} cards from a deck with {available} cards")]
    EmptyDeck {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        available: usize,
    },
    /// A string that doesn't parse to a card.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
    /// The same card was found twice.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Cards result type.
pub type Result<T> = std::result::Result<T, Error>;
