// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker game with a known deck.
//!
//! A [Game] looks for the best hand value that can be reached by discarding
//! any subset of the hand cards, including the empty one, and replacing them
//! with cards from the top of the [Deck].
use std::{fmt, str::FromStr};

use psychic_cards::Card;

use crate::{Error, Hand, HandValue, Result, input};

/// The 5 cards used to replace discarded cards, in dealing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: [Card; 5],
}

impl Deck {
    /// The number of cards in a deck.
    pub const SIZE: usize = 5;

    /// Creates a deck from a slice of cards.
    ///
    /// Returns an error if the slice doesn't have exactly [Deck::SIZE] cards.
    pub fn new(cards: &[Card]) -> Result<Self> {
        let cards = cards
            .try_into()
            .map_err(|_| Error::DeckSize(cards.len()))?;
        Ok(Self { cards })
    }

    /// The deck cards in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl From<[Card; 5]> for Deck {
    fn from(cards: [Card; 5]) -> Self {
        Self { cards }
    }
}

impl FromStr for Deck {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        input::parse_cards(s).map(Deck::from)
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        input::write_cards(f, &self.cards)
    }
}

/// A set of hand positions to discard.
///
/// Bit i of the mask is set if the card at position i is discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Discard(u8);

impl Discard {
    /// Keeps all the cards.
    pub const NONE: Discard = Discard(0);

    /// All the discard subsets, ordered by number of discarded cards and then
    /// lexicographically by positions, starting with [Discard::NONE].
    pub const ALL: [Discard; 1 << Hand::SIZE] = make_discards();

    const MASK: u8 = (1 << Hand::SIZE) - 1;

    /// Creates a discard from a bit mask, bits above the hand size are ignored.
    pub const fn from_mask(mask: u8) -> Self {
        Self(mask & Self::MASK)
    }

    /// Creates a discard from a list of positions.
    ///
    /// Panics if a position is not less than [Hand::SIZE].
    pub fn from_positions(positions: &[usize]) -> Self {
        let mask = positions.iter().fold(0, |mask, &pos| {
            assert!(pos < Hand::SIZE, "discard position {pos} out of range");
            mask | (1 << pos)
        });

        Self(mask)
    }

    /// The bit mask.
    pub fn mask(&self) -> u8 {
        self.0
    }

    /// Number of discarded cards.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if no card is discarded.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Checks if a position is discarded.
    pub fn contains(&self, pos: usize) -> bool {
        pos < Hand::SIZE && self.0 & (1 << pos) != 0
    }

    /// The discarded positions in ascending order.
    pub fn positions(self) -> impl Iterator<Item = usize> {
        (0..Hand::SIZE).filter(move |&pos| self.contains(pos))
    }
}

/// Builds the discard subsets table.
///
/// For subsets of the same size, iterating masks downward with position 0 as
/// the most significant bit yields the positions in lexicographic order.
const fn make_discards() -> [Discard; 1 << Hand::SIZE] {
    let mut out = [Discard::NONE; 1 << Hand::SIZE];
    let mut n = 0;
    let mut size = 0;

    while size <= Hand::SIZE as u32 {
        let mut r = 1u8 << Hand::SIZE;
        while r > 0 {
            r -= 1;

            if r.count_ones() == size {
                let mut mask = 0u8;
                let mut pos = 0;
                while pos < Hand::SIZE {
                    if r & (1 << (Hand::SIZE - 1 - pos)) != 0 {
                        mask |= 1 << pos;
                    }
                    pos += 1;
                }

                out[n] = Discard(mask);
                n += 1;
            }
        }

        size += 1;
    }

    out
}

/// The best hand found by a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestHand {
    /// The positions discarded from the original hand.
    pub discard: Discard,
    /// The hand after replacing the discarded cards.
    pub hand: Hand,
}

impl BestHand {
    /// The best hand value.
    pub fn value(&self) -> HandValue {
        self.hand.value()
    }
}

/// A draw poker game with a hand and a known deck.
#[derive(Debug, Clone)]
pub struct Game {
    hand: Hand,
    deck: Deck,
}

impl Game {
    /// Creates a new game.
    pub fn new(hand: Hand, deck: Deck) -> Self {
        Self { hand, deck }
    }

    /// Creates a new game from hand and deck cards.
    ///
    /// Returns an error if the hand or the deck doesn't have 5 cards.
    pub fn from_cards(hand: &[Card], deck: &[Card]) -> Result<Self> {
        Ok(Self::new(Hand::new(hand)?, Deck::new(deck)?))
    }

    /// The game hand.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The game deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Iterates all the hands reachable by discarding, in [Discard::ALL] order.
    pub fn variations(&self) -> impl Iterator<Item = BestHand> + '_ {
        Discard::ALL.into_iter().map(|discard| BestHand {
            discard,
            hand: self.hand.discard(discard, &self.deck),
        })
    }

    /// Returns the best value reachable by discarding.
    pub fn best_value(&self) -> HandValue {
        self.best_hand().value()
    }

    /// Returns the first variation with the best value.
    pub fn best_hand(&self) -> BestHand {
        let keep = BestHand {
            discard: Discard::NONE,
            hand: self.hand,
        };

        self.variations()
            .fold(keep, |best, v| if v.value() > best.value() { v } else { best })
    }
}
