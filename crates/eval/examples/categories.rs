// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example categories -- --samples 1000000
// ...
// Total hands      1000000
// Elapsed:         0.912s
// Hands/sec:       1096491
//
// High Card:       174172
// One Pair:        438495
// ...
// ```
use clap::Parser;
use rand::prelude::*;
use std::time::Instant;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of random 7 cards hands to evaluate.
    #[clap(long, short, default_value_t = 1_000_000)]
    samples: usize,
    /// Seed for reproducible runs.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let now = Instant::now();
    let mut counts = [0usize; 11];
    let deck = Deck::default();

    for _ in 0..cli.samples {
        let hand = deck
            .cards()
            .choose_multiple(&mut rng, 7)
            .copied()
            .collect::<Vec<_>>();
        let value = HandValue::best_hand(&hand)?;
        counts[value.rank() as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        let label = format!("{rank}:");
        println!("{label:<17}{}", counts[rank as usize]);
    }

    Ok(())
}
