// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
//
// High Card:       1302540
// One Pair:        1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// ```

use std::time::Instant;

use fivecard_eval::*;

fn main() {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; Category::COUNT];
    let mut best = HandValue::eval(&"2H 3D 4C 5S 7H".parse().unwrap());

    Deck::default().for_each(Hand::SIZE, |cards| {
        let hand = Hand::try_from(cards).unwrap();
        let value = HandValue::eval(&hand);
        counts[value.category() as usize] += 1;
        best = best.max(value);
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}", total as f64 / elapsed);
    println!("Best score:      {:.9}\n", best.score());

    for category in Category::categories() {
        let label = format!("{category}:");
        println!("{label:<17}{}", counts[category as usize]);
    }
}
