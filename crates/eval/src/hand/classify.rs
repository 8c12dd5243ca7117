// Copyright (C) 2025 Pokerhands Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand classifiers.
use pokerhands_cards::{Rank, Suit};

use super::{Groups, Hand};

/// Classifies a hand by its ranks multiplicities.
///
/// Returns a tentative [Hand::HighCard] for hands without repeated ranks,
/// these must be checked with [sequence].
pub fn multiples(groups: &Groups) -> Hand {
    let singles = groups.ranks(1);

    match (groups.ranks(4), groups.ranks(3), groups.ranks(2)) {
        ([quads], _, _) => Hand::FourOfAKind(*quads),
        ([], [trips], []) => Hand::ThreeOfAKind(*trips),
        ([], [trips], [_]) => Hand::FullHouse(*trips),
        ([], [], [pair]) => Hand::OnePair(*pair, sorted_desc(singles)),
        ([], [], [p1, p2]) => {
            let [kicker] = sorted_desc(singles);
            Hand::TwoPairs(*p1.max(p2), *p1.min(p2), kicker)
        }
        ([], [], []) => Hand::HighCard(sorted_desc(singles)),
        _ => panic!("Internal consistency fault: invalid ranks groups {groups:?}"),
    }
}

/// Classifies a hand without repeated ranks as a straight, flush, straight
/// flush, royal flush, or high card.
pub fn sequence(ranks: &[Rank; 5], suits: &[Suit; 5]) -> Hand {
    let ranks = sorted_desc::<5>(ranks);
    let high = ranks[0];

    let is_flush = suits.iter().all(|s| *s == suits[0]);
    let is_straight = ranks
        .iter()
        .zip(0..)
        .all(|(r, i)| r.value() + i == high.value());

    match (is_flush, is_straight) {
        (false, false) => Hand::HighCard(ranks),
        (true, false) => Hand::Flush(ranks),
        (false, true) => Hand::Straight(high),
        (true, true) if high == Rank::Ace => Hand::RoyalFlush,
        (true, true) => Hand::StraightFlush(high),
    }
}

/// Copies N ranks sorted from the highest to the lowest.
fn sorted_desc<const N: usize>(ranks: &[Rank]) -> [Rank; N] {
    let mut sorted = <[Rank; N]>::try_from(ranks).unwrap_or_else(|_| {
        panic!("Internal consistency fault: expected {N} ranks, got {ranks:?}")
    });
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}
