// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Suitless poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The recognized rank symbols, lowest to highest.
pub const RANK_SYMBOLS: &str = "23456789TJQKA";

/// Errors building ranks and hands from their symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    /// The symbol is not one of the thirteen rank symbols.
    #[error("unknown rank symbol {0:?}")]
    UnknownRank(char),
    /// A hand does not have exactly five cards.
    #[error("a hand must have {size} cards, got {len}", size = Hand::SIZE)]
    WrongLength {
        /// The number of cards found.
        len: usize,
    },
    /// A hand contains a symbol that is not a rank.
    #[error("invalid card {symbol:?} at position {position}")]
    InvalidRank {
        /// The offending symbol.
        symbol: char,
        /// The symbol position in the hand.
        position: usize,
    },
}

/// Card rank.
///
/// The discriminant is the face value, so the derived ordering is the
/// ordering by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The face value, from 2 for a deuce to 14 for an ace.
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Parses an upper case rank symbol.
    pub fn from_symbol(symbol: char) -> Result<Rank, CardError> {
        let rank = match symbol {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(CardError::UnknownRank(symbol)),
        };

        Ok(rank)
    }

    /// The rank symbol.
    pub fn symbol(self) -> char {
        match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = CardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Rank::from_symbol(symbol)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Checks if `symbol` is one of the upper case rank symbols.
pub fn is_valid_rank(symbol: char) -> bool {
    Rank::from_symbol(symbol).is_ok()
}

/// Returns the face value of a rank symbol.
pub fn rank_value(symbol: char) -> Result<u8, CardError> {
    Rank::from_symbol(symbol).map(Rank::value)
}

/// A five cards hand.
///
/// Ranks are kept in the order they were given, duplicates are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand([Rank; Hand::SIZE]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from its ranks.
    pub const fn new(ranks: [Rank; Hand::SIZE]) -> Self {
        Self(ranks)
    }

    /// The hand ranks in input order.
    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }
}

impl FromStr for Hand {
    type Err = CardError;

    /// Parses a hand of five upper case rank symbols like `AAAQQ`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != Hand::SIZE {
            return Err(CardError::WrongLength { len });
        }

        let mut ranks = [Rank::Deuce; Hand::SIZE];
        for (position, (symbol, rank)) in s.chars().zip(ranks.iter_mut()).enumerate() {
            *rank = Rank::from_symbol(symbol)
                .map_err(|_| CardError::InvalidRank { symbol, position })?;
        }

        Ok(Self(ranks))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in &self.0 {
            write!(f, "{rank}")?;
        }

        Ok(())
    }
}
