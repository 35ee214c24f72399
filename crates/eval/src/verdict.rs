// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The outcome of comparing two hands.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// The outcome of comparing a first hand with a second hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Both hands have the same value.
    Tie,
    /// The first hand is higher.
    FirstWins,
    /// The second hand is higher.
    SecondWins,
    /// The hands could not be compared.
    Error,
}

impl Verdict {
    /// The numeric code of this verdict, -1 for [Verdict::Error].
    pub fn code(self) -> i8 {
        match self {
            Verdict::Tie => 0,
            Verdict::FirstWins => 1,
            Verdict::SecondWins => 2,
            Verdict::Error => -1,
        }
    }

    /// The message shown to players.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Tie => "It's a tie!",
            Verdict::FirstWins => "First hand wins!",
            Verdict::SecondWins => "Second hand wins!",
            Verdict::Error => "Game Error",
        }
    }

    /// The verdict with the hands swapped.
    pub fn swap(self) -> Verdict {
        match self {
            Verdict::FirstWins => Verdict::SecondWins,
            Verdict::SecondWins => Verdict::FirstWins,
            v => v,
        }
    }

    /// Returns this verdict if it is decisive or an error, otherwise calls `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Verdict
    where
        F: FnOnce() -> Verdict,
    {
        match self {
            Verdict::Tie => f(),
            v => v,
        }
    }
}

/// Maps the ordering of the first hand relative to the second.
impl From<Ordering> for Verdict {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Verdict::FirstWins,
            Ordering::Less => Verdict::SecondWins,
            Ordering::Equal => Verdict::Tie,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_codes_and_messages() {
        assert_eq!(Verdict::Tie.code(), 0);
        assert_eq!(Verdict::FirstWins.code(), 1);
        assert_eq!(Verdict::SecondWins.code(), 2);
        assert_eq!(Verdict::Error.code(), -1);

        assert_eq!(Verdict::Tie.to_string(), "It's a tie!");
        assert_eq!(Verdict::FirstWins.to_string(), "First hand wins!");
        assert_eq!(Verdict::SecondWins.to_string(), "Second hand wins!");
        assert_eq!(Verdict::Error.to_string(), "Game Error");
    }

    #[test]
    fn verdict_swap() {
        assert_eq!(Verdict::FirstWins.swap(), Verdict::SecondWins);
        assert_eq!(Verdict::SecondWins.swap(), Verdict::FirstWins);
        assert_eq!(Verdict::Tie.swap(), Verdict::Tie);
        assert_eq!(Verdict::Error.swap(), Verdict::Error);
    }

    #[test]
    fn verdict_or_else() {
        assert_eq!(Verdict::Tie.or_else(|| Verdict::SecondWins), Verdict::SecondWins);
        assert_eq!(Verdict::FirstWins.or_else(|| Verdict::SecondWins), Verdict::FirstWins);
        assert_eq!(Verdict::Error.or_else(|| Verdict::Tie), Verdict::Error);
        assert_eq!(Verdict::from(5.cmp(&3)), Verdict::FirstWins);
        assert_eq!(Verdict::from(3.cmp(&5)), Verdict::SecondWins);
        assert_eq!(Verdict::from(3.cmp(&3)), Verdict::Tie);
    }
}
