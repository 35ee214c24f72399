// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tie breaking between hands of the same category.
//!
//! Each procedure compares the matched groups of the two hands first, and
//! when they have the same ranks compares the remaining kickers with
//! [compare_descending]. Procedures work on copies of the hands ranks, a
//! hand that doesn't have the groups of the category returns
//! [Verdict::Error].
use showdown_cards::{Hand, Rank};

use crate::{
    Category, Multiplicity, Verdict,
    compare::{compare_descending, sort_descending},
    multiplicity::remove_all,
};

/// Breaks a tie between two hands of the given category.
pub fn resolve(category: Category, first: &Hand, second: &Hand) -> Verdict {
    match category {
        Category::HighCard => high_card(first, second),
        Category::Pair => pair(first, second),
        Category::TwoPair => two_pair(first, second),
        Category::Trips => trips(first, second),
        Category::FullHouse => full_house(first, second),
        Category::FourOfKind => four_of_kind(first, second),
    }
}

/// Compares all five cards from the highest.
pub fn high_card(first: &Hand, second: &Hand) -> Verdict {
    compare_descending(
        &sort_descending(first.ranks()),
        &sort_descending(second.ranks()),
    )
}

/// Compares the pairs, then the three kickers.
pub fn pair(first: &Hand, second: &Hand) -> Verdict {
    let (Some(p1), Some(p2)) = (group(first, 2), group(second, 2)) else {
        return Verdict::Error;
    };

    Verdict::from(p1.cmp(&p2)).or_else(|| kickers(first, &[p1], second, &[p2]))
}

/// Compares the higher pairs, then the lower pairs, then the kicker.
pub fn two_pair(first: &Hand, second: &Hand) -> Verdict {
    let p1 = Multiplicity::of(first).ranks_with_count(2);
    let p2 = Multiplicity::of(second).ranks_with_count(2);
    if p1.len() != 2 || p2.len() != 2 {
        return Verdict::Error;
    }

    compare_descending(&p1, &p2).or_else(|| kickers(first, &p1, second, &p2))
}

/// Compares the three of a kind, then the two kickers.
pub fn trips(first: &Hand, second: &Hand) -> Verdict {
    let (Some(t1), Some(t2)) = (group(first, 3), group(second, 3)) else {
        return Verdict::Error;
    };

    Verdict::from(t1.cmp(&t2)).or_else(|| kickers(first, &[t1], second, &[t2]))
}

/// Compares the three of a kind, then the pairs.
pub fn full_house(first: &Hand, second: &Hand) -> Verdict {
    let (Some(t1), Some(t2)) = (group(first, 3), group(second, 3)) else {
        return Verdict::Error;
    };

    let (Some(p1), Some(p2)) = (group(first, 2), group(second, 2)) else {
        return Verdict::Error;
    };

    Verdict::from(t1.cmp(&t2)).or_else(|| Verdict::from(p1.cmp(&p2)))
}

/// Compares the four of a kind, then the kicker.
pub fn four_of_kind(first: &Hand, second: &Hand) -> Verdict {
    let (Some(q1), Some(q2)) = (group(first, 4), group(second, 4)) else {
        return Verdict::Error;
    };

    Verdict::from(q1.cmp(&q2)).or_else(|| {
        match (
            remove_all(first.ranks(), &[q1]).as_slice(),
            remove_all(second.ranks(), &[q2]).as_slice(),
        ) {
            (&[k1], &[k2]) => Verdict::from(k1.cmp(&k2)),
            _ => Verdict::Error,
        }
    })
}

/// The single rank that occurs `n` times in the hand.
fn group(hand: &Hand, n: usize) -> Option<Rank> {
    Multiplicity::of(hand).rank_with_count(n)
}

/// Compares the cards left after removing the matched groups.
fn kickers(first: &Hand, matched1: &[Rank], second: &Hand, matched2: &[Rank]) -> Verdict {
    compare_descending(
        &sort_descending(&remove_all(first.ranks(), matched1)),
        &sort_descending(&remove_all(second.ranks(), matched2)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn check<F>(f: F, first: &str, second: &str, expected: Verdict)
    where
        F: Fn(&Hand, &Hand) -> Verdict,
    {
        let (h1, h2) = (hand(first), hand(second));
        assert_eq!(f(&h1, &h2), expected, "{first} vs {second}");
        assert_eq!(f(&h2, &h1), expected.swap(), "{second} vs {first}");

        // Inputs are left untouched.
        assert_eq!(h1.to_string(), first);
        assert_eq!(h2.to_string(), second);
    }

    #[test]
    fn high_card_tiebreak() {
        check(high_card, "23457", "3456T", Verdict::SecondWins);
        check(high_card, "AKQJ9", "AKQJ8", Verdict::FirstWins);
        check(high_card, "A2345", "K6789", Verdict::FirstWins);
        check(high_card, "9T2J3", "32JT9", Verdict::Tie);
    }

    #[test]
    fn pair_tiebreak() {
        check(pair, "Q53Q4", "53QQ2", Verdict::FirstWins);
        check(pair, "53QQ2", "Q53Q2", Verdict::Tie);
        check(pair, "AA234", "KKQJ9", Verdict::FirstWins);
        check(pair, "77A23", "77K89", Verdict::FirstWins);
        check(pair, "77AK3", "77AK4", Verdict::SecondWins);
    }

    #[test]
    fn two_pair_tiebreak() {
        check(two_pair, "9922A", "9922K", Verdict::FirstWins);
        check(two_pair, "AA223", "KKQQJ", Verdict::FirstWins);
        check(two_pair, "AA33K", "AA442", Verdict::SecondWins);
        check(two_pair, "KK55A", "55KKA", Verdict::Tie);
        // Higher pair decides even when the lower pairs are ordered differently.
        check(two_pair, "QQ332", "JJTT9", Verdict::FirstWins);
        check(two_pair, "TT99A", "JJ22K", Verdict::SecondWins);
    }

    #[test]
    fn trips_tiebreak() {
        check(trips, "53888", "88857", Verdict::SecondWins);
        check(trips, "53888", "88385", Verdict::Tie);
        check(trips, "99975", "99974", Verdict::FirstWins);
        check(trips, "99975", "99965", Verdict::FirstWins);
        check(trips, "22234", "AAA23", Verdict::SecondWins);
    }

    #[test]
    fn full_house_tiebreak() {
        check(full_house, "AAAQQ", "QQAAA", Verdict::Tie);
        check(full_house, "AAAQQ", "QQQAA", Verdict::FirstWins);
        check(full_house, "99977", "77799", Verdict::FirstWins);
        check(full_house, "99922", "88866", Verdict::FirstWins);
        check(full_house, "99922", "99933", Verdict::SecondWins);
    }

    #[test]
    fn four_of_kind_tiebreak() {
        check(four_of_kind, "33337", "22228", Verdict::FirstWins);
        check(four_of_kind, "3333A", "3333K", Verdict::FirstWins);
        check(four_of_kind, "K3333", "3K333", Verdict::Tie);
    }

    #[test]
    fn wrong_category_is_error() {
        check(pair, "AKQJT", "AAKQJ", Verdict::Error);
        check(two_pair, "AAKQJ", "AAKKQ", Verdict::Error);
        check(trips, "AAKKQ", "AAAKQ", Verdict::Error);
        check(full_house, "AAAKQ", "AAAKK", Verdict::Error);
        check(four_of_kind, "AAAKK", "AAAAK", Verdict::Error);
        check(four_of_kind, "AAAAA", "KKKKA", Verdict::Error);
    }

    #[test]
    fn resolve_dispatches() {
        let (h1, h2) = (hand("AAAQQ"), hand("QQQAA"));
        assert_eq!(resolve(Category::FullHouse, &h1, &h2), Verdict::FirstWins);

        // High card ordering on the same hands.
        assert_eq!(resolve(Category::HighCard, &h1, &h2), Verdict::FirstWins);

        let (h1, h2) = (hand("99752"), hand("99742"));
        assert_eq!(resolve(Category::Pair, &h1, &h2), Verdict::FirstWins);
    }
}
