// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard Poker hand evaluator.
//!
//! Poker hand evaluator for 5 cards hands. A hand is classified in one of nine
//! [Category] values and gets a [score](HandValue::score) that orders it against
//! any other hand: the integer part is the category and the fraction weights
//! the hand ranks with the Ace as the highest rank, so kickers break ties
//! within a category.
//!
//! To use the evaluator create a [Hand] and use [HandValue] to evaluate it:
//!
//! ```
//! # use fivecard_eval::*;
//! // Ace low straight flush.
//! let hand = "AH 2H 3H 4H 5H".parse::<Hand>()?;
//! let value = HandValue::eval(&hand);
//! assert_eq!(value.category(), Category::StraightFlush);
//! assert_eq!(value.highest_card(), Rank::Ace);
//!
//! // Four Aces.
//! let hand = Hand::new([
//!     Card::from_numbers(1, 0)?,
//!     Card::from_numbers(1, 1)?,
//!     Card::from_numbers(1, 2)?,
//!     Card::from_numbers(1, 3)?,
//!     Card::from_numbers(5, 0)?,
//! ])?;
//! assert_eq!(Category::of(&hand), Category::FourOfAKind);
//! # Ok::<(), EvalError>(())
//! ```
//!
//! and use [compare] or [Showdown] to pick the best of a set of hands:
//!
//! ```
//! # use fivecard_eval::*;
//! let flush = "AD 2D 8D 9D 5D".parse::<Hand>()?;
//! let royal = "TC JC QC KC AC".parse::<Hand>()?;
//! assert_eq!(compare(&[flush, royal], &["Alice", "Bob"])?, 1);
//! # Ok::<(), EvalError>(())
//! ```
//!
//! The **`parallel`** feature adds `HandValue::par_eval_all` and
//! `Showdown::par_new` to evaluate large batches of hands with parallel tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub mod compare;
pub mod detect;
pub mod discard;
pub mod error;
pub mod generator;
pub mod hand;
pub mod histogram;
pub mod score;

#[cfg(feature = "parallel")]
mod parallel;

pub use category::Category;
pub use compare::{Showdown, compare};
pub use discard::{discards, discards_for};
pub use error::EvalError;
pub use generator::random_hand;
pub use hand::Hand;
pub use histogram::RankHistogram;
pub use score::{HandValue, highest_card};

// Reexport cards types.
pub use fivecard_cards::{Card, CardError, Deck, Rank, Suit};
