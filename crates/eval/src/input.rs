// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text input parsing.
//!
//! Cards are written as two characters captions separated by a single space,
//! an input line has the hand cards followed by the deck cards:
//!
//! ```text
//! TH JH QC QD QS QH KH AH 2S 6S
//! ```
use std::fmt;

use psychic_cards::{Card, Rank, Suit};

use crate::{Deck, Error, Hand, Result};

/// Number of characters in 5 cards captions separated by spaces.
pub const CARDS_INPUT_LEN: usize = Hand::SIZE * (Card::CAPTION_LEN + 1) - 1;

/// Parses 5 space separated cards captions.
pub fn parse_cards(input: &str) -> Result<[Card; Hand::SIZE]> {
    let chars = input.chars().collect::<Vec<_>>();
    if chars.len() != CARDS_INPUT_LEN {
        return Err(Error::Format(format!(
            "expected {} cards separated by spaces in {CARDS_INPUT_LEN} characters, found '{input}'",
            Hand::SIZE
        )));
    }

    let mut cards = [Card::new(Rank::Deuce, Suit::Clubs); Hand::SIZE];
    for (card, chunk) in cards.iter_mut().zip(chars.chunks(Card::CAPTION_LEN + 1)) {
        let caption = chunk[..Card::CAPTION_LEN].iter().collect::<String>();
        *card = caption.parse::<Card>()?;

        match chunk.get(Card::CAPTION_LEN) {
            None | Some(' ') => {}
            Some(c) => {
                return Err(Error::Format(format!(
                    "expected a space after '{caption}', found '{c}' in '{input}'"
                )));
            }
        }
    }

    Ok(cards)
}

/// Parses an input line with the hand and the deck cards.
///
/// The hand takes the first [CARDS_INPUT_LEN] characters, followed by a
/// separator and the deck cards, leading and trailing spaces around the deck
/// are ignored.
pub fn parse_line(line: &str) -> Result<(Hand, Deck)> {
    let Some((sep, c)) = line.char_indices().nth(CARDS_INPUT_LEN) else {
        return Err(Error::Format(format!(
            "line '{line}' is too short for a hand and a deck"
        )));
    };

    if !c.is_whitespace() {
        return Err(Error::Format(format!(
            "expected a space between hand and deck, found '{c}' in '{line}'"
        )));
    }

    let hand = line[..sep].parse::<Hand>()?;
    let deck = line[sep + c.len_utf8()..].trim().parse::<Deck>()?;
    Ok((hand, deck))
}

/// Writes cards captions separated by spaces.
pub(crate) fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }

        write!(f, "{card}")?;
    }

    Ok(())
}
