// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Two hands showdown.
use log::debug;

use showdown_cards::{CardError, Hand};

use crate::{Category, Verdict, tiebreak};

/// Errors comparing two hands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
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
    /// The hand ranks multiplicities match no category.
    #[error("no category for rank counts {signature:?}")]
    UnclassifiableMultiplicity {
        /// The rank counts in descending order.
        signature: Vec<usize>,
    },
}

impl From<CardError> for EvalError {
    fn from(err: CardError) -> Self {
        match err {
            CardError::WrongLength { len } => EvalError::WrongLength { len },
            CardError::InvalidRank { symbol, position } => {
                EvalError::InvalidRank { symbol, position }
            }
            CardError::UnknownRank(symbol) => EvalError::InvalidRank {
                symbol,
                position: 0,
            },
        }
    }
}

/// Compares two hands.
///
/// The hand with the higher category wins, hands with the same category are
/// compared with the category tie breaking rules. The returned verdict is
/// never [Verdict::Error] unless a hand is not in its category groups.
pub fn compare_hands(first: &Hand, second: &Hand) -> Result<Verdict, EvalError> {
    let c1 = Category::classify(first)?;
    let c2 = Category::classify(second)?;
    debug!("{first}: {c1}, {second}: {c2}");

    if c1 != c2 {
        return Ok(Verdict::from(c1.cmp(&c2)));
    }

    let verdict = tiebreak::resolve(c1, first, second);
    debug!("{c1} tie break: {verdict:?}");
    Ok(verdict)
}

/// Parses and compares two hands of upper case rank symbols.
pub fn try_who_wins(first: &str, second: &str) -> Result<Verdict, EvalError> {
    let first = first.parse::<Hand>()?;
    let second = second.parse::<Hand>()?;
    compare_hands(&first, &second)
}

/// Returns which of two hands of upper case rank symbols wins.
///
/// Any invalid input returns [Verdict::Error].
///
/// ```
/// # use showdown_eval::{Verdict, who_wins};
/// assert_eq!(who_wins("AAAQQ", "QQAAA"), Verdict::Tie);
/// assert_eq!(who_wins("99922", "88866"), Verdict::FirstWins);
/// assert_eq!(who_wins("123", "45654"), Verdict::Error);
/// ```
pub fn who_wins(first: &str, second: &str) -> Verdict {
    try_who_wins(first, second).unwrap_or_else(|err| {
        debug!("{first} vs {second}: {err}");
        Verdict::Error
    })
}
