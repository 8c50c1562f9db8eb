// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand scores.
//!
//! A hand score is a real number with the category ordinal as the integer part
//! and a fraction that ranks hands of the same category by their cards. The
//! fraction comes from the ace high rank counts read as a base 5 number:
//!
//! ```text
//!   weight = n(2) * 5^0 + n(3) * 5^1 + ... + n(K) * 5^11 + n(A) * 5^12
//!   score  = category + weight / RANK_WEIGHT_DIVISOR
//! ```
//!
//! A rank has at most 4 cards so base 5 digits never carry over into the next
//! rank, and any number of cards of a rank outweighs all cards of lower ranks.
use std::cmp::Ordering;

use fivecard_cards::Rank;

use crate::{category::Category, hand::Hand, histogram::RankHistogram};

/// The base used to weight rank counts.
pub const RANK_WEIGHT_BASE: u64 = 5;

/// Divides the rank weight to get the score fraction.
///
/// One more than the heaviest possible hand, four Aces and a King, so that
/// the fraction stays below one.
pub const RANK_WEIGHT_DIVISOR: u64 = RANK_WEIGHT_BASE.pow(11) + 4 * RANK_WEIGHT_BASE.pow(12) + 1;

/// The weight of ten to Ace, the highest straight.
const BROADWAY_WEIGHT: u64 = RANK_WEIGHT_BASE.pow(8)
    + RANK_WEIGHT_BASE.pow(9)
    + RANK_WEIGHT_BASE.pow(10)
    + RANK_WEIGHT_BASE.pow(11)
    + RANK_WEIGHT_BASE.pow(12);

/// The base 5 weight of a hand ranks with the Ace as the highest rank.
pub fn rank_weight(hist: &RankHistogram) -> u64 {
    hist.ace_high()
        .iter()
        .rev()
        .fold(0, |weight, &count| weight * RANK_WEIGHT_BASE + count as u64)
}

/// The highest card of a hand, the Ace if there is one.
pub fn highest_card(hand: &Hand) -> Rank {
    RankHistogram::new(hand).highest_rank()
}

/// The value of a hand.
///
/// Values are ordered by category and then by rank weight, the same order as
/// their [score](HandValue::score). Two hands with the same ranks in different
/// suits and the same category have equal values.
///
/// ```
/// # use fivecard_eval::*;
/// let flush = HandValue::eval(&"AD 2D 8D 9D 5D".parse().unwrap());
/// let royal = HandValue::eval(&"TC JC QC KC AC".parse().unwrap());
/// assert_eq!(flush.category(), Category::Flush);
/// assert_eq!(royal.category(), Category::StraightFlush);
/// assert!(royal > flush);
/// assert!(royal.score() > flush.score());
/// assert_eq!(royal.strength(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValue {
    category: Category,
    weight: u64,
    highest: Rank,
}

impl HandValue {
    /// The value of a royal flush, the highest value for a hand.
    pub const ROYAL_FLUSH: HandValue = HandValue {
        category: Category::StraightFlush,
        weight: BROADWAY_WEIGHT,
        highest: Rank::Ace,
    };

    /// Evaluates a hand.
    pub fn eval(hand: &Hand) -> Self {
        let hist = RankHistogram::new(hand);
        let category = Category::resolve(hand, &hist);
        Self::with_category(category, &hist)
    }

    /// Creates a value for an already resolved category.
    pub fn with_category(category: Category, hist: &RankHistogram) -> Self {
        Self {
            category,
            weight: rank_weight(hist),
            highest: hist.highest_rank(),
        }
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The hand base 5 rank weight.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// The highest card rank, the Ace if the hand has one.
    pub fn highest_card(&self) -> Rank {
        self.highest
    }

    /// The hand score, the category ordinal plus the rank weight fraction.
    pub fn score(&self) -> f64 {
        self.category.ordinal() as f64 + self.weight as f64 / RANK_WEIGHT_DIVISOR as f64
    }

    /// The hand score relative to a royal flush, in the range (0, 1].
    pub fn strength(&self) -> f64 {
        self.score() / Self::ROYAL_FLUSH.score()
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then(self.weight.cmp(&other.weight))
    }
}
