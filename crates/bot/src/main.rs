// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Bot.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;
use rand::prelude::*;
use std::time::{Duration, Instant};

use showdown_bot::{Config, HandOutcome, MctsStrategy, Showdown, play_hand};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of hands to play.
    #[clap(long, short = 'n', default_value_t = 10)]
    hands: usize,
    /// The search budget for each decision in milliseconds.
    #[clap(long, short, default_value_t = 1000)]
    budget_ms: u64,
    /// Fold when the win probability is below this value.
    #[clap(long, default_value_t = showdown_bot::FOLD_THRESHOLD)]
    threshold: f64,
    /// Number of parallel search tasks.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Seed for a reproducible session.
    #[clap(long)]
    seed: Option<u64>,
}

#[derive(Debug, Default)]
struct Summary {
    folds: usize,
    wins: usize,
    ties: usize,
    losses: usize,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = Config {
        budget: Duration::from_millis(cli.budget_ms),
        threshold: cli.threshold,
        tasks: cli.tasks as usize,
        seed: cli.seed,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut strategy = MctsStrategy::new(config);
    let mut summary = Summary::default();
    let start = Instant::now();

    for hand in 1..=cli.hands {
        match play_hand(&mut strategy, &mut rng)? {
            HandOutcome::Folded { street } => {
                info!("Hand {hand}: folded at {street}");
                summary.folds += 1;
            }
            HandOutcome::Showdown {
                result,
                hero,
                villain,
            } => {
                info!("Hand {hand}: {result:?} with {hero} against {villain}");
                match result {
                    Showdown::A => summary.wins += 1,
                    Showdown::Tie => summary.ties += 1,
                    Showdown::B => summary.losses += 1,
                }
            }
        }
    }

    println!(
        "{} hands in {:.1}s: {} folds, {} wins, {} ties, {} losses",
        cli.hands,
        start.elapsed().as_secs_f64(),
        summary.folds,
        summary.wins,
        summary.ties,
        summary.losses
    );

    Ok(())
}
