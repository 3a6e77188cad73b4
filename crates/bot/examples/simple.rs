// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A simple example bot strategy.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;

use showdown_bot::{Decision, HandOutcome, Strategy, StreetView, play_hand};

/// Continues with pairs and high cards, folds everything else preflop.
struct PairsAndBroadways;

impl Strategy for PairsAndBroadways {
    fn decide(&mut self, view: &StreetView<'_>) -> Result<Decision> {
        let [c1, c2] = *view.hole;
        let pair = c1.rank() == c2.rank();
        let broadway = c1.rank().value() >= 10 && c2.rank().value() >= 10;

        // Some randomness.
        if view.board.is_empty() && !pair && !broadway && rand::random::<f64>() > 0.1 {
            Ok(Decision::Fold)
        } else {
            Ok(Decision::Continue)
        }
    }
}

#[derive(Debug, Parser)]
struct Cli {
    /// Number of hands to play.
    #[clap(long, short = 'n', default_value_t = 1000)]
    hands: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    let mut folds = 0;
    let mut wins = 0;
    for _ in 0..cli.hands {
        match play_hand(&mut PairsAndBroadways, &mut rng)? {
            HandOutcome::Folded { .. } => folds += 1,
            HandOutcome::Showdown { result, .. } => {
                if result == showdown_bot::Showdown::A {
                    wins += 1;
                }
            }
        }
    }

    println!("{} hands: {folds} folds, {wins} wins", cli.hands);
    Ok(())
}
