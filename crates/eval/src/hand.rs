// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A five cards poker hand.
use serde::{Deserialize, Serialize};
use std::{fmt, hash, str::FromStr};

use fivecard_cards::{Card, Suit};

use crate::error::EvalError;

/// A five cards hand.
///
/// A hand has exactly five distinct cards, cards keep the order they were
/// given in but two hands with the same cards in a different order are equal.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: [Card; Hand::SIZE],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand, returns an error if a card is repeated.
    pub fn new(cards: [Card; Hand::SIZE]) -> Result<Self, EvalError> {
        let mut seen = 0u64;
        for card in cards {
            let bit = 1u64 << card.id();
            if seen & bit != 0 {
                return Err(EvalError::DuplicateCard(card));
            }

            seen |= bit;
        }

        Ok(Self { cards })
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.cards
    }

    /// Iterates the hand cards.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Checks if the hand contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Number of cards of the given suit.
    pub fn suit_count(&self, suit: Suit) -> usize {
        self.iter().filter(|c| c.suit() == suit).count()
    }

    /// A bit set with one bit for each card id.
    fn mask(&self) -> u64 {
        self.iter().fold(0, |mask, c| mask | (1 << c.id()))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.mask() == other.mask()
    }
}

impl Eq for Hand {}

impl hash::Hash for Hand {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.mask().hash(state);
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = EvalError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards = <[Card; Hand::SIZE]>::try_from(cards)
            .map_err(|_| EvalError::HandSize(cards.len()))?;
        Hand::new(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = EvalError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::try_from(cards.as_slice())
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards.to_vec()
    }
}

/// Parses a hand from cards separated by spaces or commas like `AH 2H 3H 4H 5H`.
impl FromStr for Hand {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::try_from(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand({self})")
    }
}
