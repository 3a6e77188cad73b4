// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads-up hand played street by street.
use ahash::AHashSet;
use anyhow::Result;
use log::debug;
use rand::prelude::*;
use std::fmt;

use showdown_eval::{HandValue, Showdown, showdown};

use crate::{Card, Deck, Decision, Strategy, StreetView};

/// A betting street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    /// No community cards.
    PreFlop,
    /// Three community cards.
    Flop,
    /// Four community cards.
    Turn,
    /// Five community cards.
    River,
}

impl Street {
    /// Number of community cards visible at this street.
    pub fn board_len(self) -> usize {
        match self {
            Street::PreFlop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// Returns an iterator over the streets in dealing order.
    pub fn streets() -> impl DoubleEndedIterator<Item = Street> {
        [Street::PreFlop, Street::Flop, Street::Turn, Street::River].into_iter()
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::PreFlop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };

        write!(f, "{s}")
    }
}

/// How a hand ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandOutcome {
    /// The hero folded at a street.
    Folded {
        /// The street of the fold.
        street: Street,
    },
    /// The hero reached the showdown.
    Showdown {
        /// The result from the hero point of view.
        result: Showdown,
        /// The hero best hand.
        hero: HandValue,
        /// The villain best hand.
        villain: HandValue,
    },
}

/// The cards of a heads-up hand.
#[derive(Debug, Clone)]
pub struct Hand {
    hero: [Card; 2],
    villain: [Card; 2],
    board: [Card; 5],
}

impl Hand {
    /// Deals the hole cards and the board from a shuffled deck.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut deck = Deck::new_and_shuffled(rng);
        let hero = [deck.deal()?, deck.deal()?];
        let villain = [deck.deal()?, deck.deal()?];

        let mut board = [hero[0]; 5];
        for card in &mut board {
            *card = deck.deal()?;
        }

        Ok(Self {
            hero,
            villain,
            board,
        })
    }

    /// Creates a hand from known cards, returns an error if a card is
    /// repeated.
    pub fn new(hero: [Card; 2], villain: [Card; 2], board: [Card; 5]) -> Result<Self> {
        let mut seen = AHashSet::with_capacity(9);
        for &card in hero.iter().chain(&villain).chain(&board) {
            if !seen.insert(card) {
                return Err(showdown_cards::Error::DuplicateCard(card).into());
            }
        }

        Ok(Self {
            hero,
            villain,
            board,
        })
    }

    /// The hero hole cards.
    pub fn hero(&self) -> &[Card; 2] {
        &self.hero
    }

    /// The villain hole cards.
    pub fn villain(&self) -> &[Card; 2] {
        &self.villain
    }

    /// The full board.
    pub fn board(&self) -> &[Card; 5] {
        &self.board
    }

    /// Plays the hand asking the strategy for a decision at each street.
    ///
    /// The strategy sees its hole cards, the board dealt so far, and the
    /// cards it has not seen, which include the villain hole cards.
    pub fn play<S: Strategy + ?Sized>(&self, strategy: &mut S) -> Result<HandOutcome> {
        for street in Street::streets() {
            let board = &self.board[..street.board_len()];

            let mut known = self.hero.to_vec();
            known.extend_from_slice(board);
            let deck = Deck::without(&known)?;

            let view = StreetView {
                street,
                hole: &self.hero,
                board,
                deck: &deck,
            };

            if strategy.decide(&view)? == Decision::Fold {
                debug!("Hero folds at {street}");
                return Ok(HandOutcome::Folded { street });
            }
        }

        let result = showdown(&self.hero, &self.villain, &self.board)?;

        let mut cards = self.hero.to_vec();
        cards.extend_from_slice(&self.board);
        let hero = HandValue::best_hand(&cards)?;

        let mut cards = self.villain.to_vec();
        cards.extend_from_slice(&self.board);
        let villain = HandValue::best_hand(&cards)?;

        debug!("Showdown {result:?} hero {hero} villain {villain}");

        Ok(HandOutcome::Showdown {
            result,
            hero,
            villain,
        })
    }
}

/// Deals a new hand and plays it with the given strategy.
pub fn play_hand<S, R>(strategy: &mut S, rng: &mut R) -> Result<HandOutcome>
where
    S: Strategy + ?Sized,
    R: Rng + ?Sized,
{
    Hand::deal(rng)?.play(strategy)
}
