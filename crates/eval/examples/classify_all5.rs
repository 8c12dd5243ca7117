// Copyright (C) 2025 Pokerhands Developers
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example classify_all5
// ...
// Total hands      2598960
//
// High Card:       1303560
// One Pair:        1098240
// Two Pairs:       123552
// Three of a Kind: 54912
// Flush:           5112
// Straight:        9180
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  32
// Royal Flush:     4
// ```
use std::time::Instant;

use pokerhands_eval::*;

fn main() {
    // Classify all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; 11];

    Deck::default().for_each(5, |hand| {
        let rank = Hand::eval(hand).rank();
        counts[rank as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        println!("{:<17}{}", format!("{rank}:"), counts[rank as usize]);
    }
}
