// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Batch evaluation of input lines.
use anyhow::{Context, Result};
use log::{debug, error};
use serde::Serialize;
use std::io::{BufRead, Write};

use psychic_cards::Card;
use psychic_eval::{BestHand, Deck, Game, Hand, HandValue, parse_line};

/// Output options.
#[derive(Debug, Default)]
pub struct Options {
    /// Print one JSON object per line.
    pub json: bool,
    /// Print the discarded cards and the resulting hand.
    pub show_discard: bool,
}

/// Batch counters.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines evaluated.
    pub evaluated: usize,
    /// Lines that failed to parse.
    pub failed: usize,
}

/// A line evaluation.
#[derive(Debug)]
pub struct Evaluation {
    hand: Hand,
    deck: Deck,
    best: BestHand,
}

impl Evaluation {
    /// Parses a line and finds its best hand.
    pub fn from_line(line: &str) -> psychic_eval::Result<Self> {
        let (hand, deck) = parse_line(line)?;
        let best = Game::new(hand, deck).best_hand();
        Ok(Self { hand, deck, best })
    }

    /// The best value.
    pub fn value(&self) -> HandValue {
        self.best.value()
    }

    fn write_text<W: Write>(&self, out: &mut W, options: &Options) -> Result<()> {
        write!(
            out,
            "Hand: {} Deck: {} Best hand: {}",
            self.hand,
            self.deck,
            self.value()
        )?;

        if options.show_discard {
            let discarded = self.hand.discarded(self.best.discard);
            if discarded.is_empty() {
                write!(out, " Discard: none")?;
            } else {
                let captions = discarded.iter().map(Card::to_string).collect::<Vec<_>>();
                write!(out, " Discard: {}", captions.join(" "))?;
            }

            write!(out, " Result: {}", self.best.hand)?;
        }

        writeln!(out)?;
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W, options: &Options) -> Result<()> {
        #[derive(Serialize)]
        struct Report<'a> {
            hand: &'a [Card],
            deck: &'a [Card],
            best: HandValue,
            #[serde(skip_serializing_if = "Option::is_none")]
            discard: Option<Vec<Card>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            result: Option<&'a [Card]>,
        }

        let report = Report {
            hand: self.hand.cards(),
            deck: self.deck.cards(),
            best: self.value(),
            discard: options
                .show_discard
                .then(|| self.hand.discarded(self.best.discard)),
            result: options.show_discard.then(|| self.best.hand.cards()),
        };

        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
        Ok(())
    }

    /// Writes this evaluation.
    pub fn write<W: Write>(&self, out: &mut W, options: &Options) -> Result<()> {
        if options.json {
            self.write_json(out, options)
        } else {
            self.write_text(out, options)
        }
    }
}

/// Evaluates each input line and writes the results.
///
/// Lines that cannot be parsed are logged and skipped, blank lines are
/// ignored. Fails only on read or write errors.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W, options: &Options) -> Result<Summary> {
    let mut summary = Summary::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line.context("Error while reading input")?;
        if line.trim().is_empty() {
            continue;
        }

        match Evaluation::from_line(&line) {
            Ok(eval) => {
                debug!("Line {}: {} after {:?}", idx + 1, eval.value(), eval.best.discard);
                eval.write(out, options)?;
                summary.evaluated += 1;
            }
            Err(e) => {
                error!("Error while processing line {} '{line}': {e}", idx + 1);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
