// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel search.
use log::debug;
use parking_lot::Mutex;
use rand::prelude::*;
use std::{thread, time::Instant};

use crate::{Config, Estimate, GameState, Mcts, Result};

/// Root statistics accumulated by the search tasks.
#[derive(Debug, Default)]
struct Totals {
    wins: f64,
    iterations: u64,
    nodes: usize,
}

/// Runs `num_tasks` independent searches from the same state and combines
/// their root statistics into a single estimate.
///
/// Each task owns its tree and random generator, tasks generators are seeded
/// from `seed + task_id` when a seed is given. All tasks share the same time
/// budget.
///
/// Panics if `num_tasks` is zero.
pub fn par_search(
    config: &Config,
    state: &GameState,
    num_tasks: usize,
    seed: Option<u64>,
) -> Result<Estimate> {
    assert!(num_tasks > 0);

    let start = Instant::now();
    let totals = Mutex::new(Totals::default());

    thread::scope(|s| {
        let tasks = (0..num_tasks)
            .map(|task_id| {
                let totals = &totals;
                s.spawn(move || -> Result<()> {
                    let rng = match seed {
                        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
                        None => SmallRng::from_os_rng(),
                    };

                    let estimate = Mcts::new(config.clone(), rng).search(state.clone())?;

                    let mut totals = totals.lock();
                    totals.wins += estimate.wins;
                    totals.iterations += estimate.iterations;
                    totals.nodes += estimate.nodes;
                    Ok(())
                })
            })
            .collect::<Vec<_>>();

        tasks.into_iter().try_for_each(|task| {
            task.join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
        })
    })?;

    let totals = totals.into_inner();
    let estimate = Estimate {
        win_probability: totals.wins / totals.iterations as f64,
        wins: totals.wins,
        iterations: totals.iterations,
        nodes: totals.nodes,
        elapsed: start.elapsed(),
    };

    debug!(
        "Parallel search {:.3} win rate, {} tasks, {} iterations in {:?}",
        estimate.win_probability, num_tasks, estimate.iterations, estimate.elapsed
    );

    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, Deck};
    use std::time::Duration;

    #[test]
    fn parallel_search() {
        let hero = ["Ah", "Ad"].map(|c| c.parse::<Card>().unwrap());
        let state = GameState::new(hero, &[], Deck::without(&hero).unwrap()).unwrap();

        let config = Config {
            budget: Duration::from_secs(60),
            max_iterations: Some(500),
            ..Config::default()
        };

        let estimate = par_search(&config, &state, 4, Some(9)).unwrap();
        assert_eq!(estimate.iterations, 2_000);
        assert_eq!(estimate.nodes, 4 * 501);
        assert!(estimate.win_probability > 0.75, "{estimate:?}");
    }

    #[test]
    fn parallel_search_single_iteration() {
        let hero = ["7h", "2c"].map(|c| c.parse::<Card>().unwrap());
        let state = GameState::new(hero, &[], Deck::without(&hero).unwrap()).unwrap();

        let config = Config {
            budget: Duration::ZERO,
            ..Config::default()
        };

        let estimate = par_search(&config, &state, 2, None).unwrap();
        assert_eq!(estimate.iterations, 2);
    }
}
