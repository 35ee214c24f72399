// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand combination categories.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::Hand;

use crate::{EvalError, Multiplicity};

/// A hand combination category, ordered from the lowest to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Five distinct ranks.
    HighCard = 1,
    /// One pair and three distinct kickers.
    Pair,
    /// Two pairs and a kicker.
    TwoPair,
    /// Three of a kind and two distinct kickers.
    Trips,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind and a kicker.
    FourOfKind,
}

impl Category {
    /// The code used for hands that have no category.
    pub const INVALID_CODE: i8 = -1;

    /// Returns all categories.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [HighCard, Pair, TwoPair, Trips, FullHouse, FourOfKind].into_iter()
    }

    /// Classifies a hand by its ranks multiplicities.
    ///
    /// Fails for hands that match none of the categories, such as five
    /// cards of the same rank.
    pub fn classify(hand: &Hand) -> Result<Category, EvalError> {
        let signature = Multiplicity::of(hand).signature();
        let category = match signature.as_slice() {
            [4, 1] => Some(Category::FourOfKind),
            [3, 2] => Some(Category::FullHouse),
            [3, 1, 1] => Some(Category::Trips),
            [2, 2, 1] => Some(Category::TwoPair),
            [2, 1, 1, 1] => Some(Category::Pair),
            [1, 1, 1, 1, 1] => Some(Category::HighCard),
            _ => None,
        };

        category.ok_or(EvalError::UnclassifiableMultiplicity { signature })
    }

    /// The category ordinal, from 1 for high card to 6 for four of a kind.
    pub fn code(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two pair",
            Category::Trips => "Three of a kind",
            Category::FullHouse => "Full house",
            Category::FourOfKind => "Four of a kind",
        };

        write!(f, "{name}")
    }
}
