// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random hands of a given category.
use log::trace;
use rand::prelude::*;

use fivecard_cards::{Card, Rank, Suit};

use crate::{category::Category, hand::Hand};

/// Returns a random hand with the given category.
///
/// ```
/// # use fivecard_eval::*;
/// let hand = random_hand(Category::FullHouse, &mut rand::rng());
/// assert_eq!(Category::of(&hand), Category::FullHouse);
/// ```
pub fn random_hand<R: Rng>(category: Category, rng: &mut R) -> Hand {
    loop {
        let cards = match category {
            Category::StraightFlush => {
                let suit = random_suit(rng);
                straight_ranks(rng)
                    .into_iter()
                    .map(|r| Card::new(r, suit))
                    .collect::<Vec<_>>()
            }
            Category::FourOfAKind => {
                let ranks = distinct_ranks(rng, 2);
                let mut cards = Suit::suits()
                    .map(|s| Card::new(ranks[0], s))
                    .collect::<Vec<_>>();
                cards.push(Card::new(ranks[1], random_suit(rng)));
                cards
            }
            Category::FullHouse => {
                let ranks = distinct_ranks(rng, 2);
                let mut cards = of_a_kind(rng, ranks[0], 3);
                cards.extend(of_a_kind(rng, ranks[1], 2));
                cards
            }
            Category::Flush => {
                let suit = random_suit(rng);
                distinct_ranks(rng, 5)
                    .into_iter()
                    .map(|r| Card::new(r, suit))
                    .collect()
            }
            Category::Straight => straight_ranks(rng)
                .into_iter()
                .map(|r| Card::new(r, random_suit(rng)))
                .collect(),
            Category::ThreeOfAKind => {
                let ranks = distinct_ranks(rng, 3);
                let mut cards = of_a_kind(rng, ranks[0], 3);
                cards.extend(singles(rng, &ranks[1..]));
                cards
            }
            Category::TwoPair => {
                let ranks = distinct_ranks(rng, 3);
                let mut cards = of_a_kind(rng, ranks[0], 2);
                cards.extend(of_a_kind(rng, ranks[1], 2));
                cards.extend(singles(rng, &ranks[2..]));
                cards
            }
            Category::OnePair => {
                let ranks = distinct_ranks(rng, 4);
                let mut cards = of_a_kind(rng, ranks[0], 2);
                cards.extend(singles(rng, &ranks[1..]));
                cards
            }
            Category::HighCard => {
                let ranks = distinct_ranks(rng, 5);
                singles(rng, &ranks)
            }
        };

        // Straights and flushes can show up in high card, flush and straight
        // draws, draw again until the category matches.
        match Hand::try_from(cards) {
            Ok(hand) if Category::of(&hand) == category => return hand,
            Ok(hand) => trace!("Rejected {hand} for {category}"),
            Err(err) => trace!("Rejected cards for {category}: {err}"),
        }
    }
}

fn random_suit<R: Rng>(rng: &mut R) -> Suit {
    let suits = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
    suits[rng.random_range(0..Suit::COUNT)]
}

/// Returns `n` different ranks in random order.
fn distinct_ranks<R: Rng>(rng: &mut R, n: usize) -> Vec<Rank> {
    let mut ranks = Rank::ranks().collect::<Vec<_>>();
    ranks.shuffle(rng);
    ranks.truncate(n);
    ranks
}

/// Returns `n` cards of the same rank with different suits.
fn of_a_kind<R: Rng>(rng: &mut R, rank: Rank, n: usize) -> Vec<Card> {
    let mut suits = Suit::suits().collect::<Vec<_>>();
    suits.shuffle(rng);
    suits.into_iter().take(n).map(|s| Card::new(rank, s)).collect()
}

/// Returns one card for each rank with random suits.
fn singles<R: Rng>(rng: &mut R, ranks: &[Rank]) -> Vec<Card> {
    ranks
        .iter()
        .map(|&r| Card::new(r, random_suit(rng)))
        .collect()
}

/// Returns the ranks of a random straight from the wheel up to broadway.
fn straight_ranks<R: Rng>(rng: &mut R) -> Vec<Rank> {
    // Ace first so that the wheel starts at position 0.
    let ranks = Rank::ranks()
        .chain(std::iter::once(Rank::Ace))
        .collect::<Vec<_>>();
    let low = rng.random_range(0..10);
    ranks[low..low + 5].to_vec()
}
