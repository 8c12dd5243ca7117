// Copyright (C) 2025 Pokerhands Developers
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification and comparison.
//!
//! A hand is first classified by the multiplicities of its ranks (pairs,
//! trips, quads), hands without repeated ranks are then checked for
//! straights and flushes. Aces are always high, so A-2-3-4-5 is not a
//! straight.
use serde::{Deserialize, Serialize};
use std::{array, cmp::Ordering, fmt};

use pokerhands_cards::{CARDS_PER_HAND, Card, Rank, Suit};

mod classify;
mod groups;
pub use groups::Groups;

/// The hand category, higher categories beat lower ones regardless of the
/// cards ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPairs,
    /// Three of a kind.
    ThreeOfAKind,
    /// Flush.
    Flush,
    /// Straight.
    Straight,
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
    /// Returns all hand ranks from the lowest to the highest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPairs,
            ThreeOfAKind,
            Flush,
            Straight,
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
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPairs => "Two Pairs",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Flush => "Flush",
            HandRank::Straight => "Straight",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// A classified five cards hand with the ranks needed to break ties.
///
/// Ranks sequences are sorted from the highest to the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    /// All ranks.
    HighCard([Rank; 5]),
    /// The pair rank and the three kickers.
    OnePair(Rank, [Rank; 3]),
    /// The high pair rank, the low pair rank, and the kicker.
    TwoPairs(Rank, Rank, Rank),
    /// The trips rank.
    ThreeOfAKind(Rank),
    /// The highest rank.
    Straight(Rank),
    /// All ranks.
    Flush([Rank; 5]),
    /// The trips rank.
    FullHouse(Rank),
    /// The quads rank.
    FourOfAKind(Rank),
    /// The highest rank.
    StraightFlush(Rank),
    /// Ten to Ace of the same suit.
    RoyalFlush,
}

impl Hand {
    /// Classifies a five cards hand, the cards order doesn't matter.
    ///
    /// Panics if the hand doesn't have five cards.
    pub fn eval(cards: &[Card]) -> Hand {
        assert_eq!(
            cards.len(),
            CARDS_PER_HAND,
            "a hand has {CARDS_PER_HAND} cards, got {cards:?}"
        );

        let ranks: [Rank; CARDS_PER_HAND] = array::from_fn(|i| cards[i].rank());
        let suits: [Suit; CARDS_PER_HAND] = array::from_fn(|i| cards[i].suit());

        match classify::multiples(&Groups::new(&ranks)) {
            Hand::HighCard(_) => classify::sequence(&ranks, &suits),
            hand => hand,
        }
    }

    /// Returns this hand category.
    pub fn rank(&self) -> HandRank {
        match self {
            Hand::HighCard(_) => HandRank::HighCard,
            Hand::OnePair(..) => HandRank::OnePair,
            Hand::TwoPairs(..) => HandRank::TwoPairs,
            Hand::ThreeOfAKind(_) => HandRank::ThreeOfAKind,
            Hand::Straight(_) => HandRank::Straight,
            Hand::Flush(_) => HandRank::Flush,
            Hand::FullHouse(_) => HandRank::FullHouse,
            Hand::FourOfAKind(_) => HandRank::FourOfAKind,
            Hand::StraightFlush(_) => HandRank::StraightFlush,
            Hand::RoyalFlush => HandRank::RoyalFlush,
        }
    }

    /// Compares two hands of the same category.
    fn tie_break(&self, other: &Hand) -> Ordering {
        use Hand::*;

        match (self, other) {
            (RoyalFlush, RoyalFlush) => Ordering::Equal,
            (StraightFlush(r1), StraightFlush(r2))
            | (FourOfAKind(r1), FourOfAKind(r2))
            | (FullHouse(r1), FullHouse(r2))
            | (Straight(r1), Straight(r2))
            | (ThreeOfAKind(r1), ThreeOfAKind(r2)) => r1.cmp(r2),
            (Flush(r1), Flush(r2)) | (HighCard(r1), HighCard(r2)) => r1.cmp(r2),
            (TwoPairs(h1, l1, k1), TwoPairs(h2, l2, k2)) => (h1, l1, k1).cmp(&(h2, l2, k2)),
            (OnePair(p1, k1), OnePair(p2, k2)) => (p1, k1).cmp(&(p2, k2)),
            _ => panic!("Internal consistency fault: cannot tie break {self:?} with {other:?}"),
        }
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.tie_break(other))
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = self.rank();
        match self {
            Hand::HighCard(r) | Hand::Flush(r) => {
                write!(f, "{rank} {} {} {} {} {}", r[0], r[1], r[2], r[3], r[4])
            }
            Hand::OnePair(p, k) => write!(f, "{rank} {p}, kickers {} {} {}", k[0], k[1], k[2]),
            Hand::TwoPairs(h, l, k) => write!(f, "{rank} {h} and {l}, kicker {k}"),
            Hand::Straight(r) | Hand::StraightFlush(r) => write!(f, "{rank} {r} high"),
            Hand::ThreeOfAKind(r) | Hand::FullHouse(r) | Hand::FourOfAKind(r) => {
                write!(f, "{rank} {r}")
            }
            Hand::RoyalFlush => write!(f, "{rank}"),
        }
    }
}
