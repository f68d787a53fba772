// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Psychic Poker batch evaluator.
//!
//! Reads lines with a hand and a deck and prints the best hand value that can
//! be reached by discarding cards from the hand and drawing from the deck.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

pub mod batch;
pub mod generate;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// The input file, one hand and deck per line (default: stdin).
    input: Option<PathBuf>,
    /// Print the discarded cards and the resulting hand.
    #[clap(long, short = 'd')]
    show_discard: bool,
    /// Print one JSON object per line.
    #[clap(long, short)]
    json: bool,
    /// Print N random input lines instead of evaluating.
    #[clap(long, short, value_name = "N",
           value_parser = clap::value_parser!(u32).range(1..=1_000_000))]
    generate: Option<u32>,
    /// The random seed for generated lines.
    #[clap(long, requires = "generate")]
    seed: Option<u64>,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());

    if let Some(count) = cli.generate {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        generate::write_deals(&mut out, &mut rng, count as usize)?;
    } else {
        let input: Box<dyn BufRead> = match cli.input {
            Some(path) if path.as_os_str() != "-" => {
                let file = File::open(&path)
                    .with_context(|| format!("Cannot open input file {}", path.display()))?;
                Box::new(BufReader::new(file))
            }
            _ => Box::new(io::stdin().lock()),
        };

        let options = batch::Options {
            json: cli.json,
            show_discard: cli.show_discard,
        };

        let summary = batch::run(input, &mut out, &options)?;
        if summary.failed > 0 {
            info!(
                "Evaluated {} lines, {} failed",
                summary.evaluated, summary.failed
            );
        }
    }

    out.flush().context("Error writing output")?;
    Ok(())
}
