// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Monte Carlo tree search.
//!
//! Estimates the probability that a heads-up hand wins at showdown against an
//! unknown opponent hand and the unseen community cards. The search builds a
//! tree rooted at the current street, each child completes the board with a
//! random draw from the remaining deck, random rollouts deal the opponent hand
//! and score the showdown, results are backpropagated to the root.
//!
//! The search is anytime, it runs iterations until the time budget expires and
//! always runs at least one iteration:
//!
//! ```
//! # use std::time::Duration;
//! # use rand::prelude::*;
//! # use showdown_mcts::*;
//! let parse = |s: &str| s.parse::<Card>().unwrap();
//! let hero = ["As", "Ks"].map(parse);
//! let board = ["Qs", "Js", "Ts"].map(parse);
//!
//! let mut known = hero.to_vec();
//! known.extend_from_slice(&board);
//! let state = GameState::new(hero, &board, Deck::without(&known).unwrap()).unwrap();
//!
//! let config = Config {
//!     budget: Duration::from_millis(10),
//!     ..Config::default()
//! };
//!
//! let estimate = Mcts::new(config, StdRng::seed_from_u64(1)).search(state).unwrap();
//! assert!(estimate.iterations >= 1);
//! assert!(estimate.win_probability > 0.95);
//! ```
//!
//! The **`parallel`** feature enables [par_search] that runs independent
//! searches on a number of tasks and combines their root statistics.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod search;
pub use search::{Config, Estimate, Mcts, search};

mod state;
pub use state::GameState;

pub mod tree;
pub use tree::{Node, NodeId, Tree, ucb1};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_search;

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};

/// Search errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid cards or not enough cards in the deck.
    #[error(transparent)]
    Cards(#[from] showdown_cards::Error),
    /// Hand evaluation failure.
    #[error(transparent)]
    Eval(#[from] showdown_eval::Error),
}

/// Search result type.
pub type Result<T> = std::result::Result<T, Error>;
