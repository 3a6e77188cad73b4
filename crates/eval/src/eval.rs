// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A five cards hand is classified by checking the categories from the
//! strongest to the weakest, the first matching category wins. Each category
//! carries the ranks needed to break ties between hands of the same category,
//! so that comparing two [HandValue]s compares the category first and then the
//! tie-break ranks in order.
//!
//! Hands with more than five cards are evaluated with [HandValue::best_hand]
//! that evaluates every five cards subset and keeps the best value.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Card, Error, Rank, Result};

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl HandRank {
    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{rank}")
    }
}

/// The ranks that break ties between hands of the same category.
///
/// Ranks are stored in priority order and compare lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tiebreak {
    ranks: [Rank; 5],
    len: u8,
}

impl Tiebreak {
    /// An empty tiebreak.
    pub const EMPTY: Tiebreak = Tiebreak {
        ranks: [Rank::Deuce; 5],
        len: 0,
    };

    fn new(ranks: &[Rank]) -> Self {
        debug_assert!(ranks.len() <= 5);

        let mut tb = Self::EMPTY;
        tb.ranks[..ranks.len()].copy_from_slice(ranks);
        tb.len = ranks.len() as u8;
        tb
    }

    /// The tiebreak ranks in priority order.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }
}

impl PartialOrd for Tiebreak {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tiebreak {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ranks().cmp(other.ranks())
    }
}

/// A hand value used to compare hands.
///
/// Values are ordered by category and then by tie-break ranks, two hands
/// with equal values split the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tiebreak: Tiebreak,
}

impl HandValue {
    /// Evaluates a five cards hand.
    pub fn eval(hand: &[Card; 5]) -> HandValue {
        let is_flush = hand.iter().all(|c| c.suit() == hand[0].suit());

        let mut ranks = hand.map(|c| c.rank());
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        // Group ranks by (count, rank) descending, so that KKKQQ has the
        // kings group first and QQQKK the queens group first.
        let mut counts = [0u8; 15];
        for rank in ranks {
            counts[rank as usize] += 1;
        }

        let mut groups = [(0u8, Rank::Deuce); 5];
        let mut num_groups = 0;
        for rank in Rank::ranks().rev() {
            let count = counts[rank as usize];
            if count > 0 {
                groups[num_groups] = (count, rank);
                num_groups += 1;
            }
        }

        let groups = &mut groups[..num_groups];
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let straight = if num_groups < 5 {
            None
        } else if ranks[0].value() - ranks[4].value() == 4 {
            Some(ranks[0])
        } else if ranks == [Rank::Ace, Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce] {
            // The wheel plays the ace low.
            Some(Rank::Five)
        } else {
            None
        };

        let group_ranks = |n: usize| groups.iter().take(n).map(|g| g.1).collect::<Vec<_>>();

        match (is_flush, straight, groups[0].0, groups.get(1).map(|g| g.0)) {
            (true, Some(Rank::Ace), _, _) => Self::new(HandRank::RoyalFlush, &[]),
            (true, Some(high), _, _) => Self::new(HandRank::StraightFlush, &[high]),
            (_, _, 4, _) => Self::new(HandRank::FourOfAKind, &group_ranks(2)),
            (_, _, 3, Some(2)) => Self::new(HandRank::FullHouse, &group_ranks(2)),
            (true, None, _, _) => Self::new(HandRank::Flush, &ranks),
            (false, Some(high), _, _) => Self::new(HandRank::Straight, &[high]),
            (_, _, 3, _) => Self::new(HandRank::ThreeOfAKind, &group_ranks(3)),
            (_, _, 2, Some(2)) => Self::new(HandRank::TwoPair, &group_ranks(3)),
            (_, _, 2, _) => Self::new(HandRank::OnePair, &group_ranks(4)),
            _ => Self::new(HandRank::HighCard, &ranks),
        }
    }

    /// Evaluates the best five cards hand out of 5 or more cards.
    ///
    /// Returns an error if there are fewer than 5 cards.
    pub fn best_hand(cards: &[Card]) -> Result<HandValue> {
        Self::eval_with_best_hand(cards).map(|(value, _)| value)
    }

    /// Evaluates the best five cards hand out of 5 or more cards and returns
    /// its value and cards.
    ///
    /// Returns an error if there are fewer than 5 cards.
    pub fn eval_with_best_hand(cards: &[Card]) -> Result<(HandValue, [Card; 5])> {
        let mut best: Option<(HandValue, [Card; 5])> = None;

        for_each_five(cards, |hand| {
            let value = Self::eval(hand);
            if best.as_ref().is_none_or(|(best, _)| value > *best) {
                best = Some((value, *hand));
            }
        });

        best.ok_or(Error::NotEnoughCards(cards.len()))
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand tie-break ranks.
    pub fn tiebreak(&self) -> &Tiebreak {
        &self.tiebreak
    }

    fn new(rank: HandRank, tiebreak: &[Rank]) -> Self {
        Self {
            rank,
            tiebreak: Tiebreak::new(tiebreak),
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)?;

        let mut ranks = self.tiebreak.ranks().iter();
        if let Some(first) = ranks.next() {
            write!(f, " ({first}")?;
            for rank in ranks {
                write!(f, " {rank}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

/// Calls `f` for each five cards subset of `cards`.
fn for_each_five<F>(cards: &[Card], mut f: F)
where
    F: FnMut(&[Card; 5]),
{
    let n = cards.len();
    if n < 5 {
        return;
    }

    for c1 in 0..n - 4 {
        for c2 in (c1 + 1)..n - 3 {
            for c3 in (c2 + 1)..n - 2 {
                for c4 in (c3 + 1)..n - 1 {
                    for c5 in (c4 + 1)..n {
                        f(&[cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]]);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;
    use rand::prelude::*;

    fn hand(cards: &str) -> [Card; 5] {
        let cards = cards
            .split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        cards.try_into().unwrap()
    }

    fn tiebreak(value: &HandValue) -> Vec<u8> {
        value.tiebreak().ranks().iter().map(|r| r.value()).collect()
    }

    #[test]
    fn royal_flush() {
        let v = HandValue::eval(&hand("Ts Js Qs Ks As"));
        assert_eq!(v.rank(), HandRank::RoyalFlush);
        assert_eq!(v.rank() as u8, 10);
        assert!(tiebreak(&v).is_empty());
    }

    #[test]
    fn wheel_straight_flush() {
        let v = HandValue::eval(&hand("Ad 2d 3d 4d 5d"));
        assert_eq!(v.rank(), HandRank::StraightFlush);
        assert_eq!(tiebreak(&v), [5]);

        // A six high straight flush beats the wheel.
        let six = HandValue::eval(&hand("2h 3h 4h 5h 6h"));
        assert!(six > v);

        // A king high straight flush is not a royal flush.
        let king = HandValue::eval(&hand("9c Tc Jc Qc Kc"));
        assert_eq!(king.rank(), HandRank::StraightFlush);
        assert_eq!(tiebreak(&king), [13]);
    }

    #[test]
    fn four_of_a_kind_beats_full_house() {
        let quads = HandValue::eval(&hand("7s 7c 7h 7d Ks"));
        assert_eq!(quads.rank(), HandRank::FourOfAKind);
        assert_eq!(tiebreak(&quads), [7, 13]);

        let boat = HandValue::eval(&hand("Ks Kc Kd Qs Qc"));
        assert_eq!(boat.rank(), HandRank::FullHouse);
        assert_eq!(tiebreak(&boat), [13, 12]);

        assert!(quads > boat);
    }

    #[test]
    fn full_house_ordering() {
        let kings_full = HandValue::eval(&hand("Ks Kc Kd Qs Qc"));
        let queens_full = HandValue::eval(&hand("Qs Qc Qd Ks Kc"));
        assert_eq!(tiebreak(&queens_full), [12, 13]);
        assert!(kings_full > queens_full);
    }

    #[test]
    fn categories() {
        let cases = [
            ("2s 5d 9c Jh Kd", HandRank::HighCard, vec![13, 11, 9, 5, 2]),
            ("9s 9d Ac 4h 2d", HandRank::OnePair, vec![9, 14, 4, 2]),
            ("4s 4d Jc Jh 8d", HandRank::TwoPair, vec![11, 4, 8]),
            ("6s 6d 6c Ah 3d", HandRank::ThreeOfAKind, vec![6, 14, 3]),
            ("5s 6d 7c 8h 9d", HandRank::Straight, vec![9]),
            ("As 2d 3c 4h 5d", HandRank::Straight, vec![5]),
            ("Ts Jd Qc Kh Ad", HandRank::Straight, vec![14]),
            ("2h 7h 9h Jh Ah", HandRank::Flush, vec![14, 11, 9, 7, 2]),
            ("3c 3d 3s 9h 9d", HandRank::FullHouse, vec![3, 9]),
            ("Qc Qd Qs Qh 2d", HandRank::FourOfAKind, vec![12, 2]),
            ("4c 5c 6c 7c 8c", HandRank::StraightFlush, vec![8]),
            ("Th Jh Qh Kh Ah", HandRank::RoyalFlush, vec![]),
        ];

        for (cards, rank, tb) in cases {
            let v = HandValue::eval(&hand(cards));
            assert_eq!(v.rank(), rank, "{cards}");
            assert_eq!(tiebreak(&v), tb, "{cards}");
        }

        // Not a straight, the ace doesn't wrap around.
        let v = HandValue::eval(&hand("Qs Kd Ac 2h 3d"));
        assert_eq!(v.rank(), HandRank::HighCard);
    }

    #[test]
    fn kickers_order() {
        let a = HandValue::eval(&hand("9s 9d Ac 4h 2d"));
        let b = HandValue::eval(&hand("9h 9c Kc Qh Jd"));
        assert!(a > b);

        let a = HandValue::eval(&hand("4s 4d Jc Jh 8d"));
        let b = HandValue::eval(&hand("4h 4c Js Jd 7d"));
        assert!(a > b);

        // Same ranks different suits split.
        let a = HandValue::eval(&hand("2s 5d 9c Jh Kd"));
        let b = HandValue::eval(&hand("2d 5c 9h Js Ks"));
        assert_eq!(a, b);
    }

    #[test]
    fn eval_is_pure() {
        let h = hand("Ks Kc Kd Qs Qc");
        assert_eq!(HandValue::eval(&h), HandValue::eval(&h));
    }

    #[test]
    fn all_five_cards_hands() {
        let mut counts = [0usize; 11];

        Deck::default().for_each(5, |cards| {
            let v = HandValue::eval(cards.try_into().unwrap());
            counts[v.rank() as usize] += 1;
        });

        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandRank::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPair as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::FourOfAKind as usize], 624);
        assert_eq!(counts[HandRank::StraightFlush as usize], 36);
        assert_eq!(counts[HandRank::RoyalFlush as usize], 4);
    }

    #[test]
    fn best_hand_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..2_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let cards = deck.draw(7).unwrap();

            let mut max = None;
            Deck::from(cards.clone()).for_each(5, |h| {
                let v = HandValue::eval(h.try_into().unwrap());
                max = max.max(Some(v));
            });

            let (best, best_cards) = HandValue::eval_with_best_hand(&cards).unwrap();
            assert_eq!(Some(best), max);
            assert_eq!(HandValue::eval(&best_cards), best);
            assert!(best_cards.iter().all(|c| cards.contains(c)));
        }
    }

    #[test]
    fn best_hand_seven_cards() {
        let cards = "2d 2c Ts Js Qs Ks As"
            .split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();

        let (v, best) = HandValue::eval_with_best_hand(&cards).unwrap();
        assert_eq!(v.rank(), HandRank::RoyalFlush);
        assert_eq!(best, hand("Ts Js Qs Ks As"));

        // The pair of deuces plays with the three best kickers.
        let v = HandValue::best_hand(&cards[..5]).unwrap();
        assert_eq!(v.rank(), HandRank::OnePair);
        assert_eq!(tiebreak(&v), [2, 12, 11, 10]);
    }

    #[test]
    fn best_hand_not_enough_cards() {
        let cards = hand("2d 2c Ts Js Qs");
        for n in 0..5 {
            assert_eq!(
                HandValue::best_hand(&cards[..n]),
                Err(Error::NotEnoughCards(n))
            );
        }
    }

    #[test]
    fn hand_value_display() {
        let v = HandValue::eval(&hand("Ks Kc Kd Qs Qc"));
        assert_eq!(v.to_string(), "Full House (K Q)");

        let v = HandValue::eval(&hand("Th Jh Qh Kh Ah"));
        assert_eq!(v.to_string(), "Royal Flush");
    }
}
