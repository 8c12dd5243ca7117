// Copyright (C) 2025 Pokerhands Developers
// SPDX-License-Identifier: Apache-2.0

//! Ranks grouping by multiplicity.
use ahash::AHashMap;

use pokerhands_cards::Rank;

/// Hand ranks grouped by how many times they occur.
///
/// Each count maps to the distinct ranks that occur that many times, in the
/// order they are first encountered.
#[derive(Debug, Clone, Default)]
pub struct Groups {
    by_count: AHashMap<usize, Vec<Rank>>,
}

impl Groups {
    /// Groups the given ranks.
    pub fn new(ranks: &[Rank]) -> Self {
        let mut counts = AHashMap::<Rank, usize>::with_capacity(ranks.len());
        for &rank in ranks {
            *counts.entry(rank).or_default() += 1;
        }

        let mut by_count = AHashMap::<usize, Vec<Rank>>::with_capacity(counts.len());
        for (idx, rank) in ranks.iter().enumerate() {
            if ranks[..idx].contains(rank) {
                continue;
            }

            by_count.entry(counts[rank]).or_default().push(*rank);
        }

        Self { by_count }
    }

    /// The ranks that occur `count` times.
    pub fn ranks(&self, count: usize) -> &[Rank] {
        self.by_count
            .get(&count)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
