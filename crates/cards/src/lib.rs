// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown suitless poker cards types.
//!
//! Cards have no suit, a card is just its [Rank]:
//!
//! ```
//! # use showdown_cards::Rank;
//! assert!(Rank::Ace > Rank::King);
//! assert_eq!(Rank::Ten.value(), 10);
//! assert_eq!(Rank::from_symbol('Q'), Ok(Rank::Queen));
//! ```
//!
//! and a [Hand] is five ranks, parsed from upper case symbols:
//!
//! ```
//! # use showdown_cards::{CardError, Hand};
//! let hand = "AAAQQ".parse::<Hand>().unwrap();
//! assert_eq!(hand.to_string(), "AAAQQ");
//!
//! assert_eq!("KKKK".parse::<Hand>(), Err(CardError::WrongLength { len: 4 }));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{CardError, Hand, RANK_SYMBOLS, Rank, is_valid_rank, rank_value};
