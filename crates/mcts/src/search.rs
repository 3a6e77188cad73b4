// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo tree search.
use log::debug;
use rand::prelude::*;
use std::time::{Duration, Instant};

use crate::{
    GameState, Result,
    tree::{NodeId, Tree},
};

/// Search configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of children expanded for each node.
    pub fanout: usize,
    /// The UCB1 exploration constant.
    pub exploration: f64,
    /// The search wall clock budget.
    pub budget: Duration,
    /// Optional cap on the number of iterations.
    pub max_iterations: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fanout: 2048,
            exploration: 1.41,
            budget: Duration::from_secs(1),
            max_iterations: None,
        }
    }
}

/// A search win probability estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// The root win rate in [0, 1].
    pub win_probability: f64,
    /// The sum of the rollouts outcomes at the root.
    pub wins: f64,
    /// Number of completed iterations.
    pub iterations: u64,
    /// Number of nodes in the search tree.
    pub nodes: usize,
    /// The search time.
    pub elapsed: Duration,
}

/// Monte Carlo tree search engine.
#[derive(Debug)]
pub struct Mcts<R> {
    config: Config,
    rng: R,
}

impl<R: Rng> Mcts<R> {
    /// Creates a new search engine.
    pub fn new(config: Config, rng: R) -> Self {
        Self { config, rng }
    }

    /// The search configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Estimates the hero win probability from the given state.
    ///
    /// Iterations run until the budget expires, the elapsed time is checked
    /// after each iteration so at least one iteration always completes. A new
    /// tree is built for each call.
    pub fn search(&mut self, root: GameState) -> Result<Estimate> {
        let start = Instant::now();
        let mut tree = Tree::new(root);
        let mut iterations = 0;

        loop {
            self.iterate(&mut tree)?;
            iterations += 1;

            let capped = self
                .config
                .max_iterations
                .is_some_and(|max| iterations >= max);
            if capped || start.elapsed() >= self.config.budget {
                break;
            }
        }

        let root = tree.root();
        let estimate = Estimate {
            win_probability: root.wins() / root.visits() as f64,
            wins: root.wins(),
            iterations,
            nodes: tree.len(),
            elapsed: start.elapsed(),
        };

        debug!(
            "Search {:.3} win rate, {} iterations, {} nodes in {:?}",
            estimate.win_probability, estimate.iterations, estimate.nodes, estimate.elapsed
        );

        Ok(estimate)
    }

    /// Runs one selection, expansion, rollout, and backpropagation step.
    fn iterate(&mut self, tree: &mut Tree) -> Result<()> {
        let leaf = self.tree_policy(tree)?;
        let outcome = tree[leaf].state().rollout(&mut self.rng)?;
        tree.backpropagate(leaf, outcome);
        Ok(())
    }

    /// Descends from the root expanding the first node with room for more
    /// children, or stops at a terminal node.
    fn tree_policy(&mut self, tree: &mut Tree) -> Result<NodeId> {
        let mut id = Tree::ROOT;

        while !tree[id].state().is_terminal() {
            if tree[id].children().len() < self.config.fanout {
                return self.expand(tree, id);
            }

            match tree.best_child(id, self.config.exploration) {
                Some(child) => id = child,
                None => break,
            }
        }

        Ok(id)
    }

    /// Adds a child with a randomly completed board.
    fn expand(&mut self, tree: &mut Tree, id: NodeId) -> Result<NodeId> {
        let state = tree[id].state().complete_board(&mut self.rng)?;
        Ok(tree.add_child(id, state))
    }
}

/// Estimates the hero win probability within the given time budget using the
/// default configuration and the thread local random generator.
pub fn search(state: GameState, budget: Duration) -> Result<Estimate> {
    let config = Config {
        budget,
        ..Config::default()
    };

    Mcts::new(config, rand::rng()).search(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, Deck};

    fn state(hero: &str, board: &str) -> GameState {
        let parse = |s: &str| {
            s.split_whitespace()
                .map(|c| c.parse::<Card>().unwrap())
                .collect::<Vec<_>>()
        };

        let hero = parse(hero);
        let board = parse(board);

        let mut known = hero.clone();
        known.extend_from_slice(&board);
        let deck = Deck::without(&known).unwrap();

        GameState::new(hero.try_into().unwrap(), &board, deck).unwrap()
    }

    fn config(iterations: u64) -> Config {
        Config {
            budget: Duration::from_secs(60),
            max_iterations: Some(iterations),
            ..Config::default()
        }
    }

    #[test]
    fn royal_flush_on_the_river() {
        let root = state("As Ks", "Qs Js Ts 4d 9c");
        assert!(root.is_terminal());

        let mut mcts = Mcts::new(config(500), StdRng::seed_from_u64(11));
        let estimate = mcts.search(root).unwrap();

        assert_eq!(estimate.iterations, 500);
        // Terminal roots are never expanded.
        assert_eq!(estimate.nodes, 1);
        assert!(estimate.win_probability > 0.95);
    }

    #[test]
    fn zero_budget_runs_one_iteration() {
        let root = state("7h 2c", "");
        let config = Config {
            budget: Duration::ZERO,
            ..Config::default()
        };

        let estimate = Mcts::new(config, StdRng::seed_from_u64(1))
            .search(root)
            .unwrap();
        assert_eq!(estimate.iterations, 1);
        assert_eq!(estimate.nodes, 2);
        assert!((0.0..=1.0).contains(&estimate.win_probability));
    }

    #[test]
    fn fanout_cap() {
        let root = state("Ah Ad", "2c 7d 9s");
        let config = Config {
            fanout: 8,
            ..config(100)
        };

        let mut mcts = Mcts::new(config, StdRng::seed_from_u64(2));
        let mut tree = Tree::new(root);
        for _ in 0..100 {
            mcts.iterate(&mut tree).unwrap();
        }

        // The root has reached the cap and its children are terminal.
        assert_eq!(tree.len(), 9);
        assert_eq!(tree.root().children().len(), 8);
        assert_eq!(tree.root().visits(), 100);

        let visits = tree
            .root()
            .children()
            .iter()
            .map(|&c| {
                let child = &tree[c];
                assert!(child.state().is_terminal());
                assert_eq!(child.state().hero(), tree.root().state().hero());
                assert_eq!(&child.state().board()[..3], tree.root().state().board());
                child.visits()
            })
            .sum::<u32>();
        assert_eq!(visits, 100);
    }

    #[test]
    fn estimates_are_ordered() {
        let mut mcts = Mcts::new(config(2_000), StdRng::seed_from_u64(3));

        let aces = mcts.search(state("Ah Ad", "")).unwrap();
        let trash = mcts.search(state("7h 2c", "")).unwrap();

        // Pocket aces win about 85% heads-up, seven deuce offsuit about 35%.
        assert!(aces.win_probability > 0.75, "{aces:?}");
        assert!(trash.win_probability < 0.45, "{trash:?}");
    }

    #[test]
    fn search_with_budget() {
        let estimate = search(state("Kh Kd", "Ks 7c 2d"), Duration::from_millis(50)).unwrap();
        assert!(estimate.iterations >= 1);
        assert!(estimate.win_probability > 0.8);
    }
}
