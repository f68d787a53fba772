// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Psychic Poker hand evaluator.
//!
//! Evaluates 5 cards poker hands into one of nine [HandValue] categories, and
//! searches for the best value that can be reached by discarding any subset of
//! the hand cards and replacing them, in order, with the cards of a 5 cards
//! [Deck].
//!
//! To evaluate a hand parse it and get its value:
//!
//! ```
//! # use psychic_eval::*;
//! let hand: Hand = "2H 2S 3H 3S 3C".parse().unwrap();
//! assert_eq!(hand.value(), HandValue::FullHouse);
//! assert_eq!(hand.value().to_string(), "full-house");
//! ```
//!
//! to find the best hand given a deck create a [Game]:
//!
//! ```
//! # use psychic_eval::*;
//! let hand: Hand = "TH JH QC QD QS".parse().unwrap();
//! let deck: Deck = "QH KH AH 2S 6S".parse().unwrap();
//!
//! let game = Game::new(hand, deck);
//! assert_eq!(game.best_value(), HandValue::StraightFlush);
//!
//! let best = game.best_hand();
//! assert_eq!(best.hand.to_string(), "TH JH QH KH AH");
//! ```
//!
//! Hands with the same value compare equal, there is no tie break by kickers.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod error;
pub use error::{Error, Result};

pub mod game;
pub use game::{BestHand, Deck, Discard, Game};

pub mod hand;
pub use hand::{Hand, HandValue};

pub mod input;
pub use input::{parse_cards, parse_line};

// Reexport cards types.
pub use psychic_cards::{Card, Pack, ParseCardError, Rank, Suit};
