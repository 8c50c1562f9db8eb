// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{detect, hand::Hand, histogram::RankHistogram};

/// A poker hand category from the weakest to the strongest.
///
/// The discriminant is the category ordinal used as the integer part of a
/// hand [score](crate::HandValue::score).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No other category.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five ranks in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five ranks in sequence of the same suit.
    StraightFlush,
}

impl Category {
    /// The number of categories.
    pub const COUNT: usize = 9;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> + Clone {
        use Category::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category ordinal, 0 for high card up to 8 for straight flush.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the category of a hand.
    pub fn of(hand: &Hand) -> Category {
        Category::resolve(hand, &RankHistogram::new(hand))
    }

    /// Returns the category of a hand given its histogram.
    ///
    /// Categories are checked from the strongest, so the returned category is
    /// the highest one that matches.
    pub fn resolve(hand: &Hand, hist: &RankHistogram) -> Category {
        Category::categories()
            .rev()
            .find(|c| c.matches(hand, hist))
            .unwrap_or(Category::HighCard)
    }

    /// Checks if a hand has this category pattern.
    ///
    /// A straight flush also matches [Category::Flush] and [Category::Straight],
    /// use [Category::resolve] to get the hand category.
    pub fn matches(self, hand: &Hand, hist: &RankHistogram) -> bool {
        match self {
            Category::StraightFlush => detect::is_straight_flush(hand, hist),
            Category::FourOfAKind => detect::is_four_of_a_kind(hist),
            Category::FullHouse => detect::is_full_house(hist),
            Category::Flush => detect::is_flush(hand),
            Category::Straight => detect::is_straight(hist),
            Category::ThreeOfAKind => detect::is_three_of_a_kind(hist),
            Category::TwoPair => detect::is_two_pair(hist),
            Category::OnePair => detect::is_one_pair(hist),
            Category::HighCard => detect::is_high_card(hist),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivecard_cards::{Card, Deck};

    fn category(cards: &str) -> Category {
        Category::of(&cards.parse().unwrap())
    }

    #[test]
    fn ordinals() {
        let ordinals = Category::categories()
            .map(Category::ordinal)
            .collect::<Vec<_>>();
        assert_eq!(ordinals, (0..9).collect::<Vec<_>>());
        assert_eq!(Category::categories().count(), Category::COUNT);
        assert!(Category::StraightFlush > Category::FourOfAKind);
        assert!(Category::OnePair > Category::HighCard);
    }

    #[test]
    fn resolve_each_category() {
        assert_eq!(category("AH 2H 3H 4H 5H"), Category::StraightFlush);
        assert_eq!(category("TC JC QC KC AC"), Category::StraightFlush);
        assert_eq!(category("AH AD AC AS 5H"), Category::FourOfAKind);
        assert_eq!(category("3H 3D 3C JS JH"), Category::FullHouse);
        assert_eq!(category("AD 2D 8D 9D 5D"), Category::Flush);
        assert_eq!(category("AH 2D 3C 4S 5H"), Category::Straight);
        assert_eq!(category("TH JD QC KS AH"), Category::Straight);
        assert_eq!(category("QH QD QC TS 2H"), Category::ThreeOfAKind);
        assert_eq!(category("AH AD 2C 2S 3H"), Category::TwoPair);
        assert_eq!(category("AH AD 2C 3S 4H"), Category::OnePair);
        assert_eq!(category("AH 9D 3C 5S 7H"), Category::HighCard);
    }

    #[test]
    fn resolve_picks_strongest() {
        let hand = "9S TS JS QS KS".parse().unwrap();
        let hist = RankHistogram::new(&hand);
        assert!(Category::Flush.matches(&hand, &hist));
        assert!(Category::Straight.matches(&hand, &hist));
        assert!(Category::HighCard.matches(&hand, &hist));
        assert_eq!(Category::resolve(&hand, &hist), Category::StraightFlush);
    }

    #[test]
    fn permutations_have_same_category() {
        let cards = "QH QD QC TS 2H"
            .split(' ')
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();

        // Rotations and reversals of the cards.
        for shift in 0..cards.len() {
            let mut cards = cards.clone();
            cards.rotate_left(shift);
            assert_eq!(Category::of(&cards[..].try_into().unwrap()), Category::ThreeOfAKind);
            cards.reverse();
            assert_eq!(Category::of(&cards[..].try_into().unwrap()), Category::ThreeOfAKind);
        }
    }

    // Goes through all 2.6M hands, slow in debug mode.
    #[test]
    fn all_hands_category_counts() {
        let mut counts = [0usize; Category::COUNT];
        Deck::default().for_each(5, |cards| {
            let hand = Hand::try_from(cards).unwrap();
            counts[Category::of(&hand) as usize] += 1;
        });

        assert_eq!(counts[Category::HighCard as usize], 1_302_540);
        assert_eq!(counts[Category::OnePair as usize], 1_098_240);
        assert_eq!(counts[Category::TwoPair as usize], 123_552);
        assert_eq!(counts[Category::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[Category::Straight as usize], 10_200);
        assert_eq!(counts[Category::Flush as usize], 5_108);
        assert_eq!(counts[Category::FullHouse as usize], 3_744);
        assert_eq!(counts[Category::FourOfAKind as usize], 624);
        assert_eq!(counts[Category::StraightFlush as usize], 40);
    }
}
