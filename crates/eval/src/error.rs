// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use psychic_cards::ParseCardError;
use thiserror::Error;

use crate::{Deck, Hand};

/// Errors returned when building hands and decks from input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid card caption.
    #[error(transparent)]
    Card(#[from] ParseCardError),
    /// A hand was built with the wrong number of cards.
    #[error("hand must have {size} cards, found {0}", size = Hand::SIZE)]
    HandSize(usize),
    /// A deck was built with the wrong number of cards.
    #[error("deck must have {size} cards, found {0}", size = Deck::SIZE)]
    DeckSize(usize),
    /// Malformed input text.
    #[error("{0}")]
    Format(String),
}

/// Evaluator result type.
pub type Result<T> = std::result::Result<T, Error>;
