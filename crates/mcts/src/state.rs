// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Search node game state.
use ahash::AHashSet;
use rand::prelude::*;

use showdown_eval::{Showdown, showdown};

use crate::{Card, Deck, Error, Result};

/// The known cards at a search node and the cards left to deal.
///
/// The hero, villain, board and deck cards are disjoint, a card known to be
/// held by a player or visible on the board is never dealt again.
#[derive(Debug, Clone)]
pub struct GameState {
    hero: [Card; 2],
    villain: Option<[Card; 2]>,
    board: Vec<Card>,
    deck: Deck,
}

impl GameState {
    /// The number of community cards at showdown.
    pub const BOARD_SIZE: usize = 5;

    /// Creates a state for the hero hole cards, the known board and the
    /// remaining deck, the villain cards are unknown.
    pub fn new(hero: [Card; 2], board: &[Card], deck: Deck) -> Result<Self> {
        Self::with_villain(hero, None, board, deck)
    }

    /// Creates a state with optionally known villain cards.
    ///
    /// Returns an error if the board has more than 5 cards, if a card appears
    /// twice, or if the deck doesn't have enough cards to complete the board
    /// and the villain hand.
    pub fn with_villain(
        hero: [Card; 2],
        villain: Option<[Card; 2]>,
        board: &[Card],
        deck: Deck,
    ) -> Result<Self> {
        if board.len() > Self::BOARD_SIZE {
            return Err(showdown_eval::Error::InvalidBoard(board.len()).into());
        }

        let mut seen = AHashSet::with_capacity(Deck::SIZE);
        let known = hero.iter().chain(villain.iter().flatten()).chain(board);
        for &card in known.chain(deck.cards()) {
            if !seen.insert(card) {
                return Err(showdown_cards::Error::DuplicateCard(card).into());
            }
        }

        let state = Self {
            hero,
            villain,
            board: board.to_vec(),
            deck,
        };

        let needed = state.cards_to_deal();
        if state.deck.count() < needed {
            return Err(showdown_cards::Error::EmptyDeck {
                requested: needed,
                available: state.deck.count(),
            }
            .into());
        }

        Ok(state)
    }

    /// The hero hole cards.
    pub fn hero(&self) -> &[Card; 2] {
        &self.hero
    }

    /// The villain hole cards if known.
    pub fn villain(&self) -> Option<&[Card; 2]> {
        self.villain.as_ref()
    }

    /// The community cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The cards not assigned to a player or the board.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// A state is terminal when the board is complete.
    pub fn is_terminal(&self) -> bool {
        self.board.len() == Self::BOARD_SIZE
    }

    /// Returns a new state with the board completed by cards dealt from a
    /// shuffled copy of the deck, the hole cards are unchanged.
    pub fn complete_board<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GameState> {
        let mut deck = self.deck.clone();
        deck.shuffle(rng);

        let mut board = self.board.clone();
        board.extend(deck.draw(Self::BOARD_SIZE - self.board.len())?);

        Ok(GameState {
            hero: self.hero,
            villain: self.villain,
            board,
            deck,
        })
    }

    /// Plays a random showdown from this state.
    ///
    /// Deals the villain cards if unknown and the missing board cards from
    /// the deck without replacement, and returns the hero outcome: 1 for a
    /// win, 0.5 for a tie, and 0 for a loss.
    pub fn rollout<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        let needed = self.cards_to_deal();
        let mut sample = self.deck.cards().choose_multiple(rng, needed).copied();
        let mut deal = || {
            sample.next().ok_or(showdown_cards::Error::EmptyDeck {
                requested: needed,
                available: self.deck.count(),
            })
        };

        let villain = match self.villain {
            Some(villain) => villain,
            None => [deal()?, deal()?],
        };

        let mut board = [self.hero[0]; Self::BOARD_SIZE];
        board[..self.board.len()].copy_from_slice(&self.board);
        for card in &mut board[self.board.len()..] {
            *card = deal()?;
        }

        let outcome = match showdown(&self.hero, &villain, &board)? {
            Showdown::A => 1.0,
            Showdown::Tie => 0.5,
            Showdown::B => 0.0,
        };

        Ok(outcome)
    }

    /// Number of cards needed to complete the board and the villain hand.
    fn cards_to_deal(&self) -> usize {
        let villain = if self.villain.is_some() { 0 } else { 2 };
        Self::BOARD_SIZE - self.board.len() + villain
    }
}
