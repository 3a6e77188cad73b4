// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads-up showdown.
use crate::{Card, Error, HandValue, Result};

/// The showdown winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Showdown {
    /// The first player wins.
    A,
    /// The second player wins.
    B,
    /// The players split the pot.
    Tie,
}

impl Showdown {
    /// The result with the players swapped.
    pub fn swap(self) -> Self {
        match self {
            Showdown::A => Showdown::B,
            Showdown::B => Showdown::A,
            Showdown::Tie => Showdown::Tie,
        }
    }
}

/// Compares two players hole cards given the community cards.
///
/// Each player plays the best five cards out of its hole cards and the
/// board, the board must have between 3 and 5 cards.
pub fn showdown(hole_a: &[Card; 2], hole_b: &[Card; 2], board: &[Card]) -> Result<Showdown> {
    if board.len() > 5 {
        return Err(Error::InvalidBoard(board.len()));
    }

    // Copy the board to the end of the evaluation array.
    let mut hand = [hole_a[0]; 7];
    let hand_len = 2 + board.len();
    hand[2..hand_len].copy_from_slice(board);

    hand[..2].copy_from_slice(hole_a);
    let a = HandValue::best_hand(&hand[..hand_len])?;

    hand[..2].copy_from_slice(hole_b);
    let b = HandValue::best_hand(&hand[..hand_len])?;

    Ok(match a.cmp(&b) {
        std::cmp::Ordering::Greater => Showdown::A,
        std::cmp::Ordering::Less => Showdown::B,
        std::cmp::Ordering::Equal => Showdown::Tie,
    })
}
