// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ranks lists comparison.
use showdown_cards::Rank;

use crate::Verdict;

/// Returns a copy of `ranks` sorted from the highest to the lowest rank.
pub fn sort_descending(ranks: &[Rank]) -> Vec<Rank> {
    let mut sorted = ranks.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}

/// Compares two lists of ranks sorted from the highest rank.
///
/// The first position with different ranks decides the verdict, lists with
/// the same ranks at every position are a tie. Lists with different lengths
/// cannot be compared and return [Verdict::Error].
pub fn compare_descending(first: &[Rank], second: &[Rank]) -> Verdict {
    if first.len() != second.len() {
        return Verdict::Error;
    }

    first
        .iter()
        .zip(second)
        .map(|(a, b)| a.value().cmp(&b.value()))
        .find(|ord| ord.is_ne())
        .map_or(Verdict::Tie, Verdict::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::Rank::*;

    #[test]
    fn sort_ranks() {
        assert_eq!(
            sort_descending(&[Five, Ace, Deuce, Ace, Ten]),
            vec![Ace, Ace, Ten, Five, Deuce]
        );
        assert!(sort_descending(&[]).is_empty());
    }

    #[test]
    fn first_difference_decides() {
        assert_eq!(
            compare_descending(&[Ace, King, Five], &[Ace, Queen, Jack]),
            Verdict::FirstWins
        );
        assert_eq!(
            compare_descending(&[Ace, Queen, Jack], &[Ace, King, Deuce]),
            Verdict::SecondWins
        );
        assert_eq!(
            compare_descending(&[Nine, Seven, Trey], &[Nine, Seven, Deuce]),
            Verdict::FirstWins
        );
    }

    #[test]
    fn equal_lists_tie() {
        assert_eq!(
            compare_descending(&[King, Nine, Four], &[King, Nine, Four]),
            Verdict::Tie
        );
        assert_eq!(compare_descending(&[], &[]), Verdict::Tie);
    }

    #[test]
    fn different_lengths() {
        assert_eq!(compare_descending(&[Ace], &[Ace, King]), Verdict::Error);
        assert_eq!(compare_descending(&[], &[Deuce]), Verdict::Error);
    }
}
