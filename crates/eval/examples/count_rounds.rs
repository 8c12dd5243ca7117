// Copyright (C) 2025 Pokerhands Developers
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example count_rounds
// ```
use std::time::Instant;

use pokerhands_eval::*;

fn main() {
    const NUM_ROUNDS: usize = 1_000_000;
    const NUM_TASKS: usize = 4;

    // Deal random rounds, skipping the rare ties.
    let mut rng = rand::rng();
    let lines = (0..NUM_ROUNDS)
        .map(|_| {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            (0..10)
                .filter_map(|_| deck.deal())
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|line| {
            let tokens = line.split(' ').collect::<Vec<_>>();
            let round = Round::new(&tokens);
            round.hand(Player::PlayerOne) != round.hand(Player::PlayerTwo)
        })
        .collect::<Vec<_>>();

    let now = Instant::now();
    let wins = count_wins(Player::PlayerOne, &lines).unwrap();
    let elapsed = now.elapsed().as_secs_f64();
    println!("Sequential:      {wins} wins in {:.3}s", elapsed);

    let now = Instant::now();
    let par_wins = par_count_wins(Player::PlayerOne, &lines, NUM_TASKS).unwrap();
    let elapsed = now.elapsed().as_secs_f64();
    println!("Parallel ({NUM_TASKS}):    {par_wins} wins in {:.3}s", elapsed);

    assert_eq!(wins, par_wins);
    println!("Rounds:          {}", lines.len());
}
