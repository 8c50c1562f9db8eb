// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands comparison.
use log::debug;
use std::fmt;

use crate::{error::EvalError, hand::Hand, score::HandValue};

/// The values of a set of hands and the index of the best one.
#[derive(Debug, Clone)]
pub struct Showdown {
    values: Vec<HandValue>,
    winner: usize,
}

impl Showdown {
    /// Evaluates the hands and picks the winner.
    ///
    /// The winner is the hand with the highest value, if two or more hands
    /// have the same highest value the first one wins.
    pub fn new(hands: &[Hand]) -> Result<Self, EvalError> {
        Self::from_values(hands.iter().map(HandValue::eval).collect())
    }

    /// Picks the winner from already evaluated hands.
    pub fn from_values(values: Vec<HandValue>) -> Result<Self, EvalError> {
        let mut iter = values.iter().enumerate();
        let (mut winner, mut best) = iter.next().ok_or(EvalError::NoHands)?;

        for (idx, value) in iter {
            if value > best {
                winner = idx;
                best = value;
            }
        }

        Ok(Self { values, winner })
    }

    /// The index of the winning hand.
    pub fn winner(&self) -> usize {
        self.winner
    }

    /// The value of the winning hand.
    pub fn winning_value(&self) -> &HandValue {
        &self.values[self.winner]
    }

    /// The values of all hands in input order.
    pub fn values(&self) -> &[HandValue] {
        &self.values
    }

    /// The indices of the hands that lost.
    pub fn losers(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.values.len()).filter(move |&idx| idx != self.winner)
    }

    /// Checks if other hands have the same value of the winning hand.
    pub fn is_tie(&self) -> bool {
        let best = self.winning_value();
        self.losers().any(|idx| &self.values[idx] == best)
    }
}

/// Returns the index of the best hand.
///
/// Each hand has an identifier, like a player name, used to log the result.
///
/// ```
/// # use fivecard_eval::*;
/// let hands = ["AD 2D 8D 9D 5D", "TC JC QC KC AC"]
///     .into_iter()
///     .map(|h| h.parse::<Hand>())
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(compare(&hands, &["Alice", "Bob"])?, 1);
/// # Ok::<(), EvalError>(())
/// ```
pub fn compare<T: fmt::Display>(hands: &[Hand], ids: &[T]) -> Result<usize, EvalError> {
    if hands.len() != ids.len() {
        return Err(EvalError::IdsMismatch {
            hands: hands.len(),
            ids: ids.len(),
        });
    }

    let showdown = Showdown::new(hands)?;
    let winner = showdown.winner();

    let value = showdown.winning_value();
    debug!(
        "{}'s hand is the best: {} {} ({:.6})",
        ids[winner],
        hands[winner],
        value.category(),
        value.score()
    );

    for idx in showdown.losers() {
        let value = &showdown.values()[idx];
        debug!(
            "{}'s hand loses: {} {} ({:.6})",
            ids[idx],
            hands[idx],
            value.category(),
            value.score()
        );
    }

    Ok(winner)
}
