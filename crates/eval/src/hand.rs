// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand and its evaluation.
//!
//! A [Hand] keeps its cards sorted by rank, the evaluation relies on this
//! ordering to detect straights and to find n-of-a-kind runs by looking at the
//! middle card only: in a sorted 5 cards hand any run of 3 or 4 cards with the
//! same rank must include the card at index 2.
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{cmp::Ordering, fmt, str::FromStr};

use psychic_cards::{Card, Rank};

use crate::{Deck, Discard, Error, Result, input};

/// The value of a hand, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandValue {
    /// No other combination.
    HighestCard = 0,
    /// Two cards with the same rank.
    OnePair,
    /// Two different pairs.
    TwoPairs,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five cards with consecutive ranks.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
}

impl HandValue {
    /// Returns all values from the weakest to the strongest.
    pub fn values() -> impl DoubleEndedIterator<Item = HandValue> {
        use HandValue::*;
        [
            HighestCard,
            OnePair,
            TwoPairs,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The value caption used for output.
    pub fn caption(self) -> &'static str {
        match self {
            HandValue::HighestCard => "highest-card",
            HandValue::OnePair => "one-pair",
            HandValue::TwoPairs => "two-pairs",
            HandValue::ThreeOfAKind => "three-of-a-kind",
            HandValue::Straight => "straight",
            HandValue::Flush => "flush",
            HandValue::FullHouse => "full-house",
            HandValue::FourOfAKind => "four-of-a-kind",
            HandValue::StraightFlush => "straight-flush",
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.caption())
    }
}

impl FromStr for HandValue {
    type Err = Error;

    fn from_str(caption: &str) -> Result<Self> {
        HandValue::values()
            .find(|v| v.caption() == caption)
            .ok_or_else(|| Error::Format(format!("unknown hand value '{caption}'")))
    }
}

impl Serialize for HandValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.caption())
    }
}

impl<'de> Deserialize<'de> for HandValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let caption = String::deserialize(deserializer)?;
        caption.parse().map_err(de::Error::custom)
    }
}

/// A 5 cards hand sorted by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; 5],
    value: HandValue,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from a slice of cards.
    ///
    /// Returns an error if the slice doesn't have exactly [Hand::SIZE] cards.
    pub fn new(cards: &[Card]) -> Result<Self> {
        let cards: [Card; Hand::SIZE] = cards
            .try_into()
            .map_err(|_| Error::HandSize(cards.len()))?;
        Ok(Self::from(cards))
    }

    /// The hand cards sorted by rank.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The hand value.
    pub fn value(&self) -> HandValue {
        self.value
    }

    /// Compares two hands by value, hands with the same value are equal.
    pub fn cmp_value(&self, other: &Hand) -> Ordering {
        self.value.cmp(&other.value)
    }

    /// Creates a new hand replacing the cards at the discarded positions.
    ///
    /// Replacement cards are taken in order from the top of the deck, the
    /// first discarded position gets the first deck card and so on, so that
    /// discarding k cards always uses the first k cards of the deck.
    pub fn discard(&self, discard: Discard, deck: &Deck) -> Hand {
        let mut cards = self.cards;
        for (pos, card) in discard.positions().zip(deck.cards()) {
            cards[pos] = *card;
        }

        Hand::from(cards)
    }

    /// Returns the cards at the discarded positions.
    pub fn discarded(&self, discard: Discard) -> Vec<Card> {
        discard.positions().map(|pos| self.cards[pos]).collect()
    }

    fn eval(&self) -> HandValue {
        let is_flush = self.is_flush();
        let is_straight = self.is_straight();

        if is_flush && is_straight {
            return HandValue::StraightFlush;
        }

        if self.is_n_of_a_kind(4) {
            return HandValue::FourOfAKind;
        }

        let is_three = self.is_n_of_a_kind(3);
        let pairs = self.count_pairs();

        if is_three && pairs == 1 {
            HandValue::FullHouse
        } else if is_flush {
            HandValue::Flush
        } else if is_straight {
            HandValue::Straight
        } else if is_three {
            HandValue::ThreeOfAKind
        } else if pairs == 2 {
            HandValue::TwoPairs
        } else if pairs == 1 {
            HandValue::OnePair
        } else {
            HandValue::HighestCard
        }
    }

    /// Checks if the middle card rank appears exactly n times.
    fn is_n_of_a_kind(&self, n: usize) -> bool {
        let middle = self.cards[2].rank();
        self.cards.iter().filter(|c| c.rank() == middle).count() == n
    }

    /// Counts pairs skipping cards that are part of a three of a kind.
    fn count_pairs(&self) -> usize {
        let same = |i: usize, j: usize| self.cards[i].rank() == self.cards[j].rank();

        let mut pairs = 0;
        let mut i = 1;
        while i < Hand::SIZE - 1 {
            if same(i, i - 1) {
                if !same(i, i + 1) {
                    pairs += 1;
                }

                // Next card is either part of this run or not paired with it.
                i += 1;
            }

            i += 1;
        }

        // A pair at the end not preceded by the same rank.
        if same(3, 4) && !same(3, 2) {
            pairs += 1;
        }

        pairs
    }

    fn is_flush(&self) -> bool {
        self.cards.windows(2).all(|w| w[0].suit() == w[1].suit())
    }

    fn is_straight(&self) -> bool {
        let c = &self.cards;

        if !c[..4].windows(2).all(|w| w[1].is_next_of(&w[0])) {
            return false;
        }

        // A regular straight or the A-2-3-4-5 wheel.
        c[4].is_next_of(&c[3]) || (c[4].rank() == Rank::Ace && c[0].rank() == Rank::Deuce)
    }
}

impl From<[Card; 5]> for Hand {
    fn from(mut cards: [Card; 5]) -> Self {
        cards.sort_by(Card::cmp_rank);

        let mut hand = Hand {
            cards,
            value: HandValue::HighestCard,
        };
        hand.value = hand.eval();
        hand
    }
}

impl FromStr for Hand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        input::parse_cards(s).map(Hand::from)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        input::write_cards(f, &self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;
    use psychic_cards::Pack;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn value(s: &str) -> HandValue {
        hand(s).value()
    }

    #[test]
    fn hand_size() {
        let cards = "2H 3H 4H 5H 6H"
            .split(' ')
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();

        assert!(Hand::new(&cards).is_ok());
        assert_eq!(Hand::new(&cards[..4]), Err(Error::HandSize(4)));
        assert_eq!(Hand::new(&[]), Err(Error::HandSize(0)));

        let mut six = cards.clone();
        six.push(cards[0]);
        assert_eq!(Hand::new(&six), Err(Error::HandSize(6)));
    }

    #[test]
    fn hand_sorted() {
        let h = hand("AC 2D 9C 3S KD");
        assert_eq!(h.to_string(), "2D 3S 9C KD AC");
        assert!(h.cards().windows(2).all(|w| w[0].cmp_rank(&w[1]).is_le()));
    }

    #[test]
    fn value_order() {
        let values = HandValue::values().collect::<Vec<_>>();
        assert_eq!(values.len(), 9);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(values[0], HandValue::HighestCard);
        assert_eq!(values[8], HandValue::StraightFlush);
    }

    #[test]
    fn value_captions() {
        let captions = HandValue::values()
            .map(|v| v.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            captions,
            [
                "highest-card",
                "one-pair",
                "two-pairs",
                "three-of-a-kind",
                "straight",
                "flush",
                "full-house",
                "four-of-a-kind",
                "straight-flush"
            ]
        );

        for v in HandValue::values() {
            assert_eq!(v.caption().parse::<HandValue>().unwrap(), v);
        }

        assert!(matches!(
            "royal-flush".parse::<HandValue>(),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn value_serde() {
        let json = serde_json::to_string(&HandValue::TwoPairs).unwrap();
        assert_eq!(json, "\"two-pairs\"");

        let v = serde_json::from_str::<HandValue>("\"four-of-a-kind\"").unwrap();
        assert_eq!(v, HandValue::FourOfAKind);
    }

    #[test]
    fn straight_flush() {
        assert_eq!(value("TH JH QH KH AH"), HandValue::StraightFlush);
        assert_eq!(value("5S 6S 7S 8S 9S"), HandValue::StraightFlush);
        assert_eq!(value("AD 2D 3D 4D 5D"), HandValue::StraightFlush);
    }

    #[test]
    fn four_of_a_kind() {
        assert_eq!(value("2H 2S 2D 2C 9H"), HandValue::FourOfAKind);
        assert_eq!(value("3H AS AD AC AH"), HandValue::FourOfAKind);
    }

    #[test]
    fn full_house() {
        assert_eq!(value("2H 2S 3H 3S 3C"), HandValue::FullHouse);
        assert_eq!(value("KH KS KC 3S 3C"), HandValue::FullHouse);
    }

    #[test]
    fn flush() {
        assert_eq!(value("2H 7H 9H JH AH"), HandValue::Flush);
        assert_eq!(value("2C 4C 9C JC AC"), HandValue::Flush);
    }

    #[test]
    fn straight() {
        assert_eq!(value("2H 3D 4S 5C 6H"), HandValue::Straight);
        assert_eq!(value("TH JD QS KC AH"), HandValue::Straight);
        assert_eq!(value("9H KD JS TC QH"), HandValue::Straight);

        // The wheel.
        assert_eq!(value("2H 3D 4S 5C AH"), HandValue::Straight);
        assert_eq!(value("AH 5C 3D 4S 2H"), HandValue::Straight);
    }

    #[test]
    fn wheel_needs_deuce() {
        assert_eq!(value("2H 3H 4H 5H AH"), HandValue::StraightFlush);
        assert_eq!(value("3H 4D 5S 6C AH"), HandValue::HighestCard);
        assert_eq!(value("3H 4H 5H 6H AH"), HandValue::Flush);

        // No wrap around the ace.
        assert_eq!(value("QH KD AS 2C 3H"), HandValue::HighestCard);
    }

    #[test]
    fn three_of_a_kind() {
        assert_eq!(value("2H 2S 2D 5C 9H"), HandValue::ThreeOfAKind);
        assert_eq!(value("2H 9S 9D 9C KH"), HandValue::ThreeOfAKind);
        assert_eq!(value("2H 5S AD AC AH"), HandValue::ThreeOfAKind);
    }

    #[test]
    fn two_pairs() {
        assert_eq!(value("2H 2S 5D 9C 9H"), HandValue::TwoPairs);
        assert_eq!(value("2H 2S 5D 5C 9H"), HandValue::TwoPairs);
        assert_eq!(value("2H 5S 5D 9C 9H"), HandValue::TwoPairs);
    }

    #[test]
    fn one_pair() {
        assert_eq!(value("2H 2S 5D 8C 9H"), HandValue::OnePair);
        assert_eq!(value("2H 5S 5D 8C 9H"), HandValue::OnePair);
        assert_eq!(value("2H 5S 8D 8C 9H"), HandValue::OnePair);
        assert_eq!(value("2H 5S 8D 9C 9H"), HandValue::OnePair);
    }

    #[test]
    fn highest_card() {
        assert_eq!(value("2H 5S 8D 9C KH"), HandValue::HighestCard);
        assert_eq!(value("2H 3S 4D 5C 7H"), HandValue::HighestCard);
    }

    #[test]
    fn pairs_skip_three_of_a_kind() {
        assert_eq!(hand("2H 2S 2D 5C 9H").count_pairs(), 0);
        assert_eq!(hand("2H 5S 5D 5C 9H").count_pairs(), 0);
        assert_eq!(hand("2H 5S 9D 9C 9H").count_pairs(), 0);
        assert_eq!(hand("2H 2S 5D 9C 9H").count_pairs(), 2);
        assert_eq!(hand("2H 2S 2D 9C 9H").count_pairs(), 1);
        assert_eq!(hand("2H 2S 9D 9C 9H").count_pairs(), 1);
    }

    #[test]
    fn compare_by_value() {
        assert!(hand("TH JH QC QD QS").cmp_value(&hand("QH KH AH 2S 6S")).is_gt());
        assert!(hand("TH JH QC 2D QS").cmp_value(&hand("QH KH AH KS KD")).is_lt());
        assert!(hand("TH JH QC 2D QS").cmp_value(&hand("QH KH AH QD KD")).is_lt());
        assert!(hand("TH JH QC 2D QS").cmp_value(&hand("QH 2H AH QD KD")).is_eq());

        // No kickers.
        assert!(hand("2H 4H 6H 8H TH").cmp_value(&hand("3S 7S 9S JS AS")).is_eq());
    }

    #[test]
    fn discard_uses_deck_prefix() {
        let h = hand("2C 5D 8H JS KC");
        let deck: Deck = "AH AD AS 3C 4C".parse().unwrap();

        // Discarding positions 3 and 4 takes the first two deck cards, not
        // the deck cards at index 3 and 4.
        let d = h.discard(Discard::from_positions(&[3, 4]), &deck);
        assert_eq!(d.to_string(), "2C 5D 8H AH AD");
        assert_eq!(d.value(), HandValue::OnePair);

        let d = h.discard(Discard::from_positions(&[0, 2, 4]), &deck);
        assert_eq!(d.to_string(), "5D JS AH AD AS");
        assert_eq!(d.value(), HandValue::ThreeOfAKind);

        // The original hand is unchanged.
        assert_eq!(h.to_string(), "2C 5D 8H JS KC");
        assert_eq!(h.discard(Discard::NONE, &deck), h);
        assert_eq!(h.discarded(Discard::from_positions(&[1, 3])).len(), 2);
    }

    #[test]
    fn all_hands_distribution() {
        let mut counts = AHashMap::default();
        Pack::default().for_each_hand(|cards| {
            let v = Hand::new(cards).unwrap().value();
            *counts.entry(v).or_insert(0usize) += 1;
        });

        assert_eq!(counts[&HandValue::HighestCard], 1_302_540);
        assert_eq!(counts[&HandValue::OnePair], 1_098_240);
        assert_eq!(counts[&HandValue::TwoPairs], 123_552);
        assert_eq!(counts[&HandValue::ThreeOfAKind], 54_912);
        assert_eq!(counts[&HandValue::Straight], 10_200);
        assert_eq!(counts[&HandValue::Flush], 5_108);
        assert_eq!(counts[&HandValue::FullHouse], 3_744);
        assert_eq!(counts[&HandValue::FourOfAKind], 624);
        assert_eq!(counts[&HandValue::StraightFlush], 40);
    }
}
