// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Psychic Poker cards types.
//!
//! This crate defines the types to create cards, either from a rank and a
//! suit or from a two characters caption:
//!
//! ```
//! # use psychic_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert_eq!(kd.rank(), Rank::King);
//! assert!(ah.cmp_rank(&kd).is_gt());
//! ```
//!
//! Cards compare by rank only with [Card::cmp_rank], the suit is used only to
//! check for flushes:
//!
//! ```
//! # use psychic_cards::Card;
//! let a: Card = "3S".parse().unwrap();
//! let b: Card = "3D".parse().unwrap();
//! assert!(a.cmp_rank(&b).is_eq());
//! assert_ne!(a, b);
//! ```
//!
//! and a [Pack] type for shuffling, dealing, and iterating cards in a 52
//! cards pack, for example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use psychic_cards::Pack;
//! let mut counter = 0;
//! Pack::default().for_each_hand(|hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit};

mod pack;
pub use pack::Pack;
