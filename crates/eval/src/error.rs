// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;

use fivecard_cards::{Card, CardError};

/// Errors returned when building hands or comparing them.
///
/// Evaluating a valid [Hand](crate::Hand) never fails, errors are only returned at the
/// boundaries where hands and histograms are created from untrusted values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A hand must have exactly five cards.
    #[error("a hand must have 5 cards, got {0}")]
    HandSize(usize),
    /// The same card appears twice in a hand.
    #[error("duplicate card {0} in hand")]
    DuplicateCard(Card),
    /// Rank counts that cannot come from a five cards hand.
    #[error("invalid rank counts {0:?}")]
    InvalidCounts([u8; 13]),
    /// A comparison needs at least one hand.
    #[error("no hands to compare")]
    NoHands,
    /// Each compared hand needs an identifier.
    #[error("got {hands} hands but {ids} identifiers")]
    IdsMismatch {
        /// Number of hands.
        hands: usize,
        /// Number of identifiers.
        ids: usize,
    },
    /// A card could not be parsed.
    #[error(transparent)]
    Card(#[from] CardError),
}
