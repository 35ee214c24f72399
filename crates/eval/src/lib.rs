// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown suitless five cards hand evaluator.
//!
//! Hands have no suits, so there are no straights or flushes, and a hand
//! falls in one of six categories: high card, pair, two pair, three of a
//! kind, full house and four of a kind. A higher category always wins, hands
//! in the same category are compared by their matched groups and then by
//! their kickers.
//!
//! Use [who_wins] to compare two hands given as rank symbols:
//!
//! ```
//! # use showdown_eval::*;
//! assert_eq!(who_wins("99975", "99974"), Verdict::FirstWins);
//! assert_eq!(who_wins("QQQAA", "AAAQQ"), Verdict::SecondWins);
//! assert_eq!(who_wins("KKKK", "JJJJ"), Verdict::Error);
//! ```
//!
//! or [compare_hands] to compare parsed hands and get the reason of a
//! failure:
//!
//! ```
//! # use showdown_eval::*;
//! let first = "AAAAA".parse::<Hand>().unwrap();
//! let second = "KKKKQ".parse::<Hand>().unwrap();
//! assert!(matches!(
//!     compare_hands(&first, &second),
//!     Err(EvalError::UnclassifiableMultiplicity { .. })
//! ));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub mod compare;
pub mod multiplicity;
pub mod showdown;
pub mod tiebreak;
pub mod verdict;

pub use category::Category;
pub use multiplicity::Multiplicity;
pub use showdown::{EvalError, compare_hands, try_who_wins, who_wins};
pub use verdict::Verdict;

// Reexport cards types.
pub use showdown_cards::{CardError, Hand, Rank};
