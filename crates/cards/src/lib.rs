// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard Poker cards types.
//!
//! This crate define types to create cards, either from typed ranks and suits:
//!
//! ```
//! # use fivecard_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(kd.to_string(), "KD");
//! ```
//!
//! or from raw `(rank, suit)` numbers and text, rejecting invalid values:
//!
//! ```
//! # use fivecard_cards::{Card, CardError, Rank, Suit};
//! // Ranks go from 1 (Ace) to 13 (King), suits from 0 to 3.
//! let ah = Card::from_numbers(1, 0).unwrap();
//! assert_eq!(ah, "AH".parse().unwrap());
//! assert!(matches!(Card::from_numbers(14, 0), Err(CardError::InvalidRank(14))));
//! ```
//!
//! and a [Deck] type for shuffling, dealing, sampling, and iterating cards in
//! the deck, for example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use fivecard_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! or to sample 10 random 5-cards hands:
//!
//! ```
//! # use fivecard_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(&mut rand::rng(), 10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardError, Deck, Rank, Suit};
