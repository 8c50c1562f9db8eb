// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands patterns.
//!
//! One predicate for each hand [Category](crate::Category). The predicates are
//! mutually exclusive on a five cards hand except for the straight flush that
//! is also a flush and a straight, the [resolver](crate::Category::resolve)
//! checks them from the strongest so the first match is the hand category.
use crate::{hand::Hand, histogram::RankHistogram};

/// All five cards have the same suit.
pub fn is_flush(hand: &Hand) -> bool {
    hand.suit_count(hand.cards()[0].suit()) == Hand::SIZE
}

/// Five ranks in sequence, the Ace can start (wheel) or end (broadway) it.
pub fn is_straight(hist: &RankHistogram) -> bool {
    let counts = hist.ace_high();
    if counts.iter().any(|&c| c > 1) {
        return false;
    }

    // A 2 3 4 5 with the Ace at the top of the ace high counts.
    let wheel = counts[12] == 1 && counts[..4].iter().all(|&c| c == 1);

    // From 2 3 4 5 6 up to T J Q K A.
    wheel || counts.windows(5).any(|w| w.iter().all(|&c| c == 1))
}

/// A straight with all cards of the same suit.
pub fn is_straight_flush(hand: &Hand, hist: &RankHistogram) -> bool {
    is_flush(hand) && is_straight(hist)
}

/// Four cards of the same rank.
pub fn is_four_of_a_kind(hist: &RankHistogram) -> bool {
    hist.groups(4) == 1
}

/// Three cards of one rank and two of another.
pub fn is_full_house(hist: &RankHistogram) -> bool {
    hist.groups(3) == 1 && hist.groups(2) == 1
}

/// Three cards of the same rank and two unpaired cards.
pub fn is_three_of_a_kind(hist: &RankHistogram) -> bool {
    hist.groups(3) == 1 && !is_full_house(hist)
}

/// Two ranks with two cards each.
pub fn is_two_pair(hist: &RankHistogram) -> bool {
    hist.groups(2) == 2
}

/// A single rank with two cards.
pub fn is_one_pair(hist: &RankHistogram) -> bool {
    hist.groups(2) == 1 && !is_two_pair(hist) && !is_full_house(hist)
}

/// Every hand is at least a high card hand.
pub fn is_high_card(_hist: &RankHistogram) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist(counts: [u8; 13]) -> RankHistogram {
        RankHistogram::from_counts(counts).unwrap()
    }

    fn hand(cards: &str) -> Hand {
        cards.parse().unwrap()
    }

    #[test]
    fn flush() {
        assert!(is_flush(&hand("AH 3H 5H 7H 9H")));
        assert!(!is_flush(&hand("AD 2D 3D 4D 5C")));
        assert!(!is_flush(&hand("AD AH AC AS 5C")));
    }

    #[test]
    fn straight() {
        assert!(is_straight(&hist([0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0])));
        assert!(!is_straight(&hist([0, 0, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0])));
        assert!(!is_straight(&hist([0, 1, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0])));
        assert!(!is_straight(&hist([0, 0, 0, 0, 0, 0, 2, 0, 0, 1, 1, 1, 0])));

        // Wheel and broadway.
        assert!(is_straight(&hist([1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0])));
        assert!(is_straight(&hist([1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1])));

        // The Ace doesn't wrap around.
        assert!(!is_straight(&hist([1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1])));
        assert!(!is_straight(&hist([1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1])));

        // Nine to King.
        assert!(is_straight(&hist([0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1])));
    }

    #[test]
    fn straight_flush() {
        let h = hand("AH 2H 3H 4H 5H");
        assert!(is_straight_flush(&h, &RankHistogram::new(&h)));

        let h = hand("8D 7D 5D 9D 6D");
        assert!(is_straight_flush(&h, &RankHistogram::new(&h)));

        let h = hand("9C TC JC QC KS");
        assert!(!is_straight_flush(&h, &RankHistogram::new(&h)));

        let h = hand("AH 2H 3H 4H 6H");
        assert!(!is_straight_flush(&h, &RankHistogram::new(&h)));
    }

    #[test]
    fn four_of_a_kind() {
        assert!(is_four_of_a_kind(&hist([0, 0, 0, 4, 0, 0, 1, 0, 0, 0, 0, 0, 0])));
        assert!(is_four_of_a_kind(&hist([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4])));
        assert!(!is_four_of_a_kind(&hist([0, 0, 0, 1, 1, 0, 0, 0, 0, 3, 0, 0, 0])));
    }

    #[test]
    fn full_house() {
        assert!(is_full_house(&hist([0, 0, 3, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0])));
        assert!(!is_full_house(&hist([0, 0, 0, 0, 1, 1, 0, 0, 3, 0, 0, 0, 0])));
        assert!(!is_full_house(&hist([0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0])));
    }

    #[test]
    fn three_of_a_kind() {
        assert!(is_three_of_a_kind(&hist([0, 0, 0, 3, 0, 1, 0, 0, 0, 0, 1, 0, 0])));
        assert!(!is_three_of_a_kind(&hist([0, 0, 0, 0, 0, 2, 0, 0, 3, 0, 0, 0, 0])));
        assert!(!is_three_of_a_kind(&hist([0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 2])));
    }

    #[test]
    fn two_pair() {
        assert!(is_two_pair(&hist([0, 0, 2, 0, 0, 0, 0, 2, 0, 1, 0, 0, 0])));
        assert!(!is_two_pair(&hist([0, 0, 1, 1, 0, 0, 2, 0, 0, 1, 0, 0, 0])));
        assert!(!is_two_pair(&hist([2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])));
    }

    #[test]
    fn one_pair() {
        assert!(is_one_pair(&hist([0, 1, 0, 1, 0, 0, 1, 2, 0, 0, 0, 0, 0])));
        assert!(!is_one_pair(&hist([0, 0, 1, 0, 0, 0, 0, 2, 2, 0, 0, 0, 0])));
        assert!(!is_one_pair(&hist([0, 0, 1, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0])));
        assert!(!is_one_pair(&hist([2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])));
    }

    #[test]
    fn high_card() {
        assert!(is_high_card(&hist([0, 0, 1, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0])));
    }
}
