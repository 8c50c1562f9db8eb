// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Per rank cards counts.
use fivecard_cards::Rank;

use crate::{error::EvalError, hand::Hand};

/// The number of cards for each rank in a hand.
///
/// Index `r` holds the count for the rank with number `r + 1`, so the Ace is
/// at index 0 and the King at index 12. The counts always add up to five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankHistogram([u8; Rank::COUNT]);

impl RankHistogram {
    /// Builds the histogram for a hand.
    pub fn new(hand: &Hand) -> Self {
        let mut counts = [0; Rank::COUNT];
        for card in hand.iter() {
            counts[card.rank().number() as usize - 1] += 1;
        }

        Self(counts)
    }

    /// Builds a histogram from raw counts indexed by rank number minus one.
    ///
    /// Returns an error if the counts cannot come from a five cards hand.
    pub fn from_counts(counts: [u8; Rank::COUNT]) -> Result<Self, EvalError> {
        let total = counts.iter().map(|&c| c as usize).sum::<usize>();
        if total != Hand::SIZE || counts.iter().any(|&c| c > 4) {
            return Err(EvalError::InvalidCounts(counts));
        }

        Ok(Self(counts))
    }

    /// The counts indexed by rank number minus one.
    pub fn counts(&self) -> &[u8; Rank::COUNT] {
        &self.0
    }

    /// Number of cards with the given rank.
    pub fn count(&self, rank: Rank) -> u8 {
        self.0[rank.number() as usize - 1]
    }

    /// The counts with the Ace moved to the top.
    ///
    /// Index 0 holds the Deuce count, index 11 the King, and index 12 the Ace.
    pub fn ace_high(&self) -> [u8; Rank::COUNT] {
        let mut counts = self.0;
        counts.rotate_left(1);
        counts
    }

    /// Number of distinct ranks with exactly `count` cards.
    pub fn groups(&self, count: u8) -> usize {
        self.0.iter().filter(|&&c| c == count).count()
    }

    /// Ranks with exactly `count` cards, from the highest with the Ace on top.
    pub fn ranks_with(&self, count: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks_ace_high()
            .rev()
            .filter(move |&r| self.count(r) == count)
    }

    /// The highest rank in the hand, the Ace if there is one.
    pub fn highest_rank(&self) -> Rank {
        // Five cards, there is always a rank.
        Rank::ranks_ace_high()
            .rev()
            .find(|&r| self.count(r) > 0)
            .unwrap_or(Rank::Ace)
    }
}
