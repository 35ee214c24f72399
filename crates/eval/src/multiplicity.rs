// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank multiplicities of a hand.
use showdown_cards::{Hand, Rank};

/// How many times each rank occurs in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiplicity {
    counts: [u8; 13],
}

impl Multiplicity {
    /// Counts the occurrences of each rank in `hand`.
    pub fn of(hand: &Hand) -> Self {
        let mut counts = [0; 13];
        for &rank in hand.ranks() {
            counts[Self::index(rank)] += 1;
        }

        Self { counts }
    }

    #[inline]
    fn index(rank: Rank) -> usize {
        (rank.value() - Rank::Deuce.value()) as usize
    }

    /// The number of times `rank` occurs.
    pub fn count(&self, rank: Rank) -> usize {
        self.counts[Self::index(rank)] as usize
    }

    /// The number of distinct ranks.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Iterates `(rank, count)` for the ranks present, lowest rank first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Rank, usize)> + '_ {
        Rank::ranks()
            .map(move |rank| (rank, self.count(rank)))
            .filter(|&(_, count)| count > 0)
    }

    /// The ranks occurring exactly `n` times, highest rank first.
    pub fn ranks_with_count(&self, n: usize) -> Vec<Rank> {
        self.iter()
            .rev()
            .filter(|&(_, count)| count == n)
            .map(|(rank, _)| rank)
            .collect()
    }

    /// The single rank occurring exactly `n` times, if there is exactly one.
    pub fn rank_with_count(&self, n: usize) -> Option<Rank> {
        match self.ranks_with_count(n).as_slice() {
            &[rank] => Some(rank),
            _ => None,
        }
    }

    /// The counts of the present ranks sorted in descending order.
    pub fn signature(&self) -> Vec<usize> {
        let mut counts = self.iter().map(|(_, count)| count).collect::<Vec<_>>();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts
    }
}

/// Returns `ranks` without any occurrence of the `removed` ranks.
///
/// The remaining ranks keep their relative order.
pub fn remove_all(ranks: &[Rank], removed: &[Rank]) -> Vec<Rank> {
    ranks
        .iter()
        .copied()
        .filter(|rank| !removed.contains(rank))
        .collect()
}
