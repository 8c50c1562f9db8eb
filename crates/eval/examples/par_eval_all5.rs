// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_eval_all5
// ```

use std::time::Instant;

use fivecard_eval::*;

fn main() {
    // Evaluate all 2.6M hands with 4 parallel tasks.
    const NUM_TASKS: usize = 4;

    let mut hands = Vec::with_capacity(2_598_960);
    Deck::default().for_each(Hand::SIZE, |cards| {
        hands.push(Hand::try_from(cards).unwrap());
    });

    let now = Instant::now();
    let values = HandValue::par_eval_all(&hands, NUM_TASKS);
    let elapsed = now.elapsed().as_secs_f64();

    let mut counts = [0usize; Category::COUNT];
    for value in &values {
        counts[value.category() as usize] += 1;
    }

    let showdown = Showdown::from_values(values).unwrap();

    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}", total as f64 / elapsed);
    println!("Best hand:       {}\n", hands[showdown.winner()]);

    for category in Category::categories() {
        let label = format!("{category}:");
        println!("{label:<17}{}", counts[category as usize]);
    }
}
