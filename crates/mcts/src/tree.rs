// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Search tree.
//!
//! Nodes are stored in a single arena owned by the [Tree] and addressed by
//! [NodeId] handles, each node keeps its children ids and its parent id so
//! that results can walk back from a leaf to the root.
use std::ops::Index;

use crate::GameState;

/// A node handle in a [Tree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// A search tree node.
#[derive(Debug)]
pub struct Node {
    state: GameState,
    wins: f64,
    visits: u32,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Node {
    fn new(state: GameState, parent: Option<NodeId>) -> Self {
        Self {
            state,
            wins: 0.0,
            visits: 0,
            children: Vec::new(),
            parent,
        }
    }

    /// The node game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The sum of the rollouts outcomes through this node.
    pub fn wins(&self) -> f64 {
        self.wins
    }

    /// The number of rollouts through this node.
    pub fn visits(&self) -> u32 {
        self.visits
    }

    /// The node children in creation order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The parent node, none for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The average outcome, none if the node has not been visited.
    pub fn win_rate(&self) -> Option<f64> {
        (self.visits > 0).then(|| self.wins / self.visits as f64)
    }
}

/// An arena of search nodes rooted at [Tree::ROOT].
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// The root node id.
    pub const ROOT: NodeId = NodeId(0);

    /// Creates a tree with a root node for the given state.
    pub fn new(root: GameState) -> Self {
        Self {
            nodes: vec![Node::new(root, None)],
        }
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.nodes[Self::ROOT.0]
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Adds a child with the given state to a node and returns its id.
    pub fn add_child(&mut self, parent: NodeId, state: GameState) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(state, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Adds a rollout outcome to a node and all its ancestors.
    pub fn backpropagate(&mut self, leaf: NodeId, outcome: f64) {
        let mut next = Some(leaf);
        while let Some(id) = next {
            let node = &mut self.nodes[id.0];
            node.visits += 1;
            node.wins += outcome;
            next = node.parent;
        }
    }

    /// Returns the child with the highest UCB1 score, the first one on ties.
    ///
    /// Returns none if the node has no children.
    pub fn best_child(&self, id: NodeId, exploration: f64) -> Option<NodeId> {
        let parent = &self[id];

        let mut best = None;
        let mut best_score = f64::NEG_INFINITY;
        for &child in parent.children() {
            let score = ucb1(parent.visits, &self[child], exploration);
            if best.is_none() || score > best_score {
                best = Some(child);
                best_score = score;
            }
        }

        best
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

/// The UCB1 score of a child node.
///
/// Unvisited children score infinity so that they are always tried first.
pub fn ucb1(parent_visits: u32, child: &Node, exploration: f64) -> f64 {
    if child.visits == 0 {
        return f64::INFINITY;
    }

    let visits = child.visits as f64;
    let exploit = child.wins / visits;
    let explore = (2.0 * (parent_visits as f64).ln() / visits).sqrt();
    exploit + exploration * explore
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;
    use showdown_cards::Card;

    fn root_state() -> GameState {
        let hero = ["Ah", "Kh"].map(|c| c.parse::<Card>().unwrap());
        GameState::new(hero, &[], Deck::without(&hero).unwrap()).unwrap()
    }

    #[test]
    fn add_and_backpropagate() {
        let mut tree = Tree::new(root_state());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root().parent(), None);
        assert_eq!(tree.root().win_rate(), None);

        let c1 = tree.add_child(Tree::ROOT, root_state());
        let c2 = tree.add_child(Tree::ROOT, root_state());
        let g1 = tree.add_child(c1, root_state());
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.root().children(), &[c1, c2]);
        assert_eq!(tree[g1].parent(), Some(c1));

        tree.backpropagate(g1, 1.0);
        tree.backpropagate(c2, 0.5);
        tree.backpropagate(g1, 0.0);

        assert_eq!(tree.root().visits(), 3);
        assert_eq!(tree.root().wins(), 1.5);
        assert_eq!(tree[c1].visits(), 2);
        assert_eq!(tree[c1].wins(), 1.0);
        assert_eq!(tree[c2].win_rate(), Some(0.5));
        assert_eq!(tree[g1].visits(), 2);
    }

    #[test]
    fn ucb1_score() {
        let mut tree = Tree::new(root_state());
        let c1 = tree.add_child(Tree::ROOT, root_state());
        let c2 = tree.add_child(Tree::ROOT, root_state());

        for _ in 0..3 {
            tree.backpropagate(c1, 1.0);
        }
        tree.backpropagate(c2, 0.0);

        let expected = 1.0 + 1.41 * (2.0 * 4f64.ln() / 3.0).sqrt();
        assert!((ucb1(4, &tree[c1], 1.41) - expected).abs() < 1e-12);

        // With no exploration the score is the win rate.
        assert_eq!(ucb1(4, &tree[c2], 0.0), 0.0);
    }

    #[test]
    fn unvisited_child_first() {
        let mut tree = Tree::new(root_state());
        let c1 = tree.add_child(Tree::ROOT, root_state());
        let c2 = tree.add_child(Tree::ROOT, root_state());
        let c3 = tree.add_child(Tree::ROOT, root_state());

        for _ in 0..100 {
            tree.backpropagate(c1, 1.0);
        }

        assert_eq!(ucb1(tree.root().visits(), &tree[c2], 1.41), f64::INFINITY);
        assert!(ucb1(tree.root().visits(), &tree[c1], 1.41).is_finite());

        // The first unvisited child wins the tie.
        assert_eq!(tree.best_child(Tree::ROOT, 1.41), Some(c2));

        tree.backpropagate(c2, 0.0);
        assert_eq!(tree.best_child(Tree::ROOT, 1.41), Some(c3));

        // Once all children are visited the best score wins.
        for _ in 0..100 {
            tree.backpropagate(c3, 0.0);
        }
        for _ in 0..99 {
            tree.backpropagate(c2, 0.0);
        }
        assert_eq!(tree.best_child(Tree::ROOT, 1.41), Some(c1));
        assert_eq!(tree.best_child(c1, 1.41), None);
    }
}
