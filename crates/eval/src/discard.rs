// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards to replace in a draw.
use fivecard_cards::{Card, Rank};

use crate::{category::Category, hand::Hand, histogram::RankHistogram};

/// Four of a kind kickers from this rank up are kept, the Ace is low.
const QUADS_MIN_KEPT_KICKER: Rank = Rank::Eight;

/// Returns the cards of a hand worth replacing, in hand order.
///
/// ```
/// # use fivecard_eval::*;
/// let hand = "AH 2H AD 3D 4C".parse::<Hand>()?;
/// let cards = discards(&hand).iter().map(|c| c.to_string()).collect::<Vec<_>>();
/// assert_eq!(cards, ["2H", "3D", "4C"]);
/// # Ok::<(), EvalError>(())
/// ```
pub fn discards(hand: &Hand) -> Vec<Card> {
    let hist = RankHistogram::new(hand);
    discards_for(hand, Category::resolve(hand, &hist), &hist)
}

/// Returns the cards worth replacing given the hand category and histogram.
///
/// - Straight flush, full house, flush and straight: none.
/// - Four of a kind: the kicker if it is lower than an Eight, an Ace kicker
///   counts as one and is discarded.
/// - Three of a kind: the two cards out of the triple.
/// - Two pair: the unpaired card.
/// - One pair: the three cards out of the pair.
/// - High card: all but the highest card.
pub fn discards_for(hand: &Hand, category: Category, hist: &RankHistogram) -> Vec<Card> {
    let unmatched = |count: u8| {
        let matched = hist.ranks_with(count).collect::<Vec<_>>();
        hand.iter()
            .filter(|c| !matched.contains(&c.rank()))
            .collect::<Vec<_>>()
    };

    match category {
        Category::StraightFlush | Category::FullHouse | Category::Flush | Category::Straight => {
            Vec::new()
        }
        Category::FourOfAKind => hist
            .ranks_with(1)
            .filter(|r| r.number() < QUADS_MIN_KEPT_KICKER.number())
            .flat_map(move |r| hand.iter().filter(move |c| c.rank() == r))
            .collect(),
        Category::ThreeOfAKind => unmatched(3),
        Category::TwoPair | Category::OnePair => unmatched(2),
        Category::HighCard => {
            let highest = hist.highest_rank();
            hand.iter().filter(|c| c.rank() != highest).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random_hand;
    use rand::{SeedableRng, rngs::StdRng};

    fn discarded(cards: &str) -> Vec<String> {
        let hand = cards.parse::<Hand>().unwrap();
        discards(&hand).iter().map(Card::to_string).collect()
    }

    #[test]
    fn made_hands_keep_all_cards() {
        assert!(discarded("AH 2H 3H 4H 5H").is_empty());
        assert!(discarded("AH 2H AD 2D AC").is_empty());
        assert!(discarded("AH 5H 2D 3C 4S").is_empty());
        assert!(discarded("AH 3H 5H 7H 9H").is_empty());

        let mut rng = StdRng::seed_from_u64(5);
        for category in [
            Category::StraightFlush,
            Category::FullHouse,
            Category::Flush,
            Category::Straight,
        ] {
            for _ in 0..100 {
                assert!(discards(&random_hand(category, &mut rng)).is_empty());
            }
        }
    }

    #[test]
    fn four_of_a_kind_kicker() {
        assert_eq!(discarded("AH 2H AD AC AS"), ["2H"]);
        assert_eq!(discarded("KH KD 7C KC KS"), ["7C"]);
        assert!(discarded("KH KD 8C KC KS").is_empty());
        assert!(discarded("3H 3D 3C 3S QS").is_empty());

        // The Ace kicker counts low.
        assert_eq!(discarded("KH KD AC KC KS"), ["AC"]);
        assert_eq!(discarded("9H 9D 9C AS 9S"), ["AS"]);
    }

    #[test]
    fn three_of_a_kind() {
        assert_eq!(discarded("AH AD AC 2S 3S"), ["2S", "3S"]);
        assert_eq!(discarded("9H KD 9C 9S 3S"), ["KD", "3S"]);
    }

    #[test]
    fn two_pair() {
        assert_eq!(discarded("AH 2H AD 2D 3C"), ["3C"]);
        assert_eq!(discarded("AH 2H 2D KD KC"), ["AH"]);
    }

    #[test]
    fn one_pair() {
        assert_eq!(discarded("AH 2H AD 3D 4C"), ["2H", "3D", "4C"]);
        assert_eq!(discarded("JH 2H 4D JD 9C"), ["2H", "4D", "9C"]);
    }

    #[test]
    fn high_card() {
        assert_eq!(discarded("AH 9H 3D 5C 7S"), ["9H", "3D", "5C", "7S"]);
        assert_eq!(discarded("2H 9H 3D QC 7S"), ["2H", "9H", "3D", "7S"]);
    }

    #[test]
    fn discards_never_break_the_pattern() {
        let mut rng = StdRng::seed_from_u64(9);
        for category in Category::categories() {
            for _ in 0..100 {
                let hand = random_hand(category, &mut rng);
                let hist = RankHistogram::new(&hand);
                let cards = discards_for(&hand, category, &hist);

                assert!(cards.len() < Hand::SIZE);
                assert!(cards.iter().all(|&c| hand.contains(c)));
                assert!(cards.iter().all(|c| hist.count(c.rank()) == 1));
            }
        }
    }
}
