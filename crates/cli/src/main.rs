// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, tells which of two suitless poker hands wins.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::warn;

use showdown_eval::{CardError, Hand, Verdict, compare_hands};

#[derive(Debug, Parser)]
#[clap(about = "Compares two five cards poker hands without suits, e.g. AAAQQ 99922")]
struct Cli {
    /// The first hand cards, from 23456789TJQKA.
    first: String,
    /// The second hand cards, from 23456789TJQKA.
    second: String,
    /// Log each hand category.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let verdict = play(&cli.first, &cli.second)?;
    println!("{verdict}");

    Ok(())
}

/// Validates the players hands and compares them.
fn play(first: &str, second: &str) -> Result<Verdict> {
    let first = first.to_uppercase().parse::<Hand>();
    let second = second.to_uppercase().parse::<Hand>();

    // Check both hands length before checking their cards.
    for (hand, which) in [(&first, "first"), (&second, "second")] {
        if let Err(CardError::WrongLength { .. }) = hand {
            bail!("The {which} hand must contain {} cards. Please try again.", Hand::SIZE);
        }
    }

    let (first, second) = match (first, second) {
        (Ok(first), Ok(second)) => (first, second),
        (Err(_), _) => bail!("The first hand contains invalid cards"),
        (_, Err(_)) => bail!("The second hand contains invalid cards"),
    };

    match compare_hands(&first, &second) {
        Ok(verdict) => Ok(verdict),
        Err(e) => {
            warn!("Cannot compare {first} with {second}: {e}");
            Ok(Verdict::Error)
        }
    }
}
