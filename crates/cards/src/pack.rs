// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A 52 cards pack.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A 52 cards pack.
#[derive(Debug, Clone)]
pub struct Pack {
    cards: Vec<Card>,
}

impl Pack {
    /// The number of cards in a full pack.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled pack.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut pack = Self::default();
        pack.cards.shuffle(rng);
        pack
    }

    /// Deals a card from the pack, returns `None` if the pack is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Calls the `f` closure for each 5 cards hand in the pack.
    pub fn for_each_hand<F>(&self, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        let n = self.cards.len();
        let mut h = [Card::new(Rank::Ace, Suit::Hearts); 5];

        for c1 in 0..n {
            h[0] = self.cards[c1];

            for c2 in (c1 + 1)..n {
                h[1] = self.cards[c2];

                for c3 in (c2 + 1)..n {
                    h[2] = self.cards[c3];

                    for c4 in (c3 + 1)..n {
                        h[3] = self.cards[c4];

                        for c5 in (c4 + 1)..n {
                            h[4] = self.cards[c5];
                            f(&h);
                        }
                    }
                }
            }
        }
    }
}

impl Default for Pack {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    #[test]
    fn pack_deal_all() {
        let mut pack = Pack::new_and_shuffled(&mut rand::rng());

        let mut cards = HashSet::default();
        while let Some(card) = pack.deal() {
            cards.insert(card);
        }

        assert_eq!(cards.len(), Pack::SIZE);
        assert!(pack.deal().is_none());
    }

    #[test]
    fn pack_seeded_shuffle() {
        let deal = |seed| {
            let mut pack = Pack::new_and_shuffled(&mut StdRng::seed_from_u64(seed));
            std::iter::from_fn(|| pack.deal()).collect::<Vec<_>>()
        };

        assert_eq!(deal(7), deal(7));
        assert_ne!(deal(7), deal(8));
        assert_eq!(deal(7).len(), Pack::SIZE);
    }

    #[test]
    fn pack_for_each_hand() {
        let mut count = 0;
        let mut distinct = true;
        Pack::default().for_each_hand(|cards| {
            assert_eq!(cards.len(), 5);
            distinct &= (1..5).all(|i| !cards[..i].contains(&cards[i]));
            count += 1;
        });

        assert!(distinct);
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn pack_for_each_hand_unique() {
        // A 10 cards pack has 10 choose 5 hands.
        let mut pack = Pack::new_and_shuffled(&mut StdRng::seed_from_u64(3));
        let cards = (0..10).filter_map(|_| pack.deal()).collect::<Vec<_>>();
        let small = Pack { cards };

        let mut hands = HashSet::default();
        small.for_each_hand(|cards| {
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 252);
    }
}
