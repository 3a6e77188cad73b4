// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Bot.
//!
//! A heads-up bot that decides at each street whether to continue or fold by
//! estimating its win probability with a Monte Carlo tree search:
//!
//! ```
//! # use std::time::Duration;
//! # use showdown_bot::*;
//! let parse = |s: &str| s.parse::<Card>().unwrap();
//! let hole = ["As", "Ks"].map(parse);
//! let board = ["Qs", "Js", "Ts"].map(parse);
//!
//! let mut known = hole.to_vec();
//! known.extend_from_slice(&board);
//! let deck = Deck::without(&known).unwrap();
//!
//! let decision = decide(hole, &board, deck, Duration::from_millis(10)).unwrap();
//! assert_eq!(decision, Decision::Continue);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use log::info;
use rand::prelude::*;
use std::{fmt, time::Duration};

use showdown_mcts::{Estimate, GameState, Mcts, par_search};

pub mod game;
pub use game::{Hand, HandOutcome, Street, play_hand};

// Reexport core types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
pub use showdown_eval::{HandValue, Showdown};

/// The win probability below which the bot folds.
pub const FOLD_THRESHOLD: f64 = 0.5;

/// A bot decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Stay in the hand.
    Continue,
    /// Give up the hand.
    Fold,
}

impl Decision {
    /// Folds if the win probability is below the threshold.
    pub fn from_probability(win_probability: f64, threshold: f64) -> Self {
        if win_probability < threshold {
            Decision::Fold
        } else {
            Decision::Continue
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Continue => write!(f, "continue"),
            Decision::Fold => write!(f, "fold"),
        }
    }
}

/// What the bot knows at a street.
#[derive(Debug)]
pub struct StreetView<'a> {
    /// The current street.
    pub street: Street,
    /// The bot hole cards.
    pub hole: &'a [Card; 2],
    /// The visible community cards.
    pub board: &'a [Card],
    /// The cards the bot has not seen.
    pub deck: &'a Deck,
}

/// A bot strategy.
pub trait Strategy {
    /// Decides whether to continue or fold at a street.
    fn decide(&mut self, view: &StreetView<'_>) -> Result<Decision>;
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The search budget for each decision.
    pub budget: Duration,
    /// The fold threshold.
    pub threshold: f64,
    /// Number of parallel search tasks.
    pub tasks: usize,
    /// Seed for reproducible decisions.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            budget: Duration::from_secs(1),
            threshold: FOLD_THRESHOLD,
            tasks: 1,
            seed: None,
        }
    }
}

/// A strategy that searches a new tree at each street.
#[derive(Debug)]
pub struct MctsStrategy {
    config: Config,
    rng: StdRng,
    last_estimate: Option<Estimate>,
}

impl MctsStrategy {
    /// Creates a strategy with the given configuration.
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            config,
            rng,
            last_estimate: None,
        }
    }

    /// The estimate behind the last decision.
    pub fn last_estimate(&self) -> Option<&Estimate> {
        self.last_estimate.as_ref()
    }
}

impl Strategy for MctsStrategy {
    fn decide(&mut self, view: &StreetView<'_>) -> Result<Decision> {
        let state = GameState::new(*view.hole, view.board, view.deck.clone())?;
        let config = showdown_mcts::Config {
            budget: self.config.budget,
            ..Default::default()
        };

        let estimate = if self.config.tasks > 1 {
            let seed = self.config.seed.map(|_| self.rng.random());
            par_search(&config, &state, self.config.tasks, seed)?
        } else {
            Mcts::new(config, &mut self.rng).search(state)?
        };

        let decision = Decision::from_probability(estimate.win_probability, self.config.threshold);
        info!(
            "{} {}{} [{}] win {:.3} ({} iterations) {decision}",
            view.street,
            view.hole[0],
            view.hole[1],
            view.board
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" "),
            estimate.win_probability,
            estimate.iterations,
        );

        self.last_estimate = Some(estimate);
        Ok(decision)
    }
}

/// Decides whether to continue or fold given the bot hole cards, the known
/// community cards, and the cards the bot has not seen.
///
/// Builds a new search tree and runs it for the given budget.
pub fn decide(hole: [Card; 2], board: &[Card], deck: Deck, budget: Duration) -> Result<Decision> {
    let state = GameState::new(hole, board, deck)?;
    let estimate = showdown_mcts::search(state, budget)?;
    Ok(Decision::from_probability(
        estimate.win_probability,
        FOLD_THRESHOLD,
    ))
}
