// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random input generation.
use anyhow::Result;
use rand::Rng;
use std::io::Write;

use psychic_cards::{Card, Pack};
use psychic_eval::{Deck, Hand};

/// Writes `count` random lines, each line has a hand and a deck dealt from a
/// shuffled pack.
pub fn write_deals<W: Write, R: Rng>(out: &mut W, rng: &mut R, count: usize) -> Result<()> {
    for _ in 0..count {
        let mut pack = Pack::new_and_shuffled(rng);
        let captions = (0..Hand::SIZE + Deck::SIZE)
            .filter_map(|_| pack.deal())
            .map(|c: Card| c.to_string())
            .collect::<Vec<_>>();

        writeln!(out, "{}", captions.join(" "))?;
    }

    Ok(())
}
