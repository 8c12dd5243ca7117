// Copyright (C) 2025 Pokerhands Developers
// SPDX-License-Identifier: Apache-2.0

//! Parallel rounds evaluation.
use std::{panic, thread};

use crate::{Player, TokenizeError, evaluate_round, tally, tokenize};

/// Counts the rounds won by a player using `num_tasks` threads.
///
/// Lines are split in contiguous chunks, one for each task. All lines are
/// tokenized first, then only the rounds before the first invalid line are
/// evaluated, so that the result and the returned error are the same as for
/// [count_wins](crate::count_wins).
///
/// Panics if `num_tasks` is zero.
pub fn par_count_wins<S>(
    player: Player,
    lines: &[S],
    num_tasks: usize,
) -> Result<usize, TokenizeError>
where
    S: AsRef<str> + Sync,
{
    assert!(num_tasks > 0);

    if lines.is_empty() {
        return Ok(0);
    }

    let lines_per_task = lines.len().div_ceil(num_tasks);

    let tokens = map_chunks(lines, lines_per_task, |chunk| {
        chunk
            .iter()
            .map(|line| tokenize(line.as_ref()))
            .collect::<Vec<_>>()
    })
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();

    // Rounds after the first invalid line are never evaluated.
    let valid = tokens.iter().position(Result::is_err).unwrap_or(tokens.len());

    let wins = map_chunks(&tokens[..valid], lines_per_task, |chunk| {
        let winners = chunk
            .iter()
            .flatten()
            .map(|tokens| evaluate_round(tokens.as_slice()));
        tally(player, winners)
    })
    .into_iter()
    .sum();

    match tokens.into_iter().nth(valid) {
        Some(Err(e)) => Err(e),
        _ => Ok(wins),
    }
}

/// Runs `f` on each chunk in its own scoped thread and returns the results
/// in chunks order.
fn map_chunks<T, R, F>(items: &[T], chunk_size: usize, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> R + Sync,
{
    if items.is_empty() {
        return Vec::new();
    }

    let f = &f;
    thread::scope(|s| {
        let tasks = items
            .chunks(chunk_size)
            .map(|chunk| s.spawn(move || f(chunk)))
            .collect::<Vec<_>>();

        tasks
            .into_iter()
            .map(|task| task.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect()
    })
}
