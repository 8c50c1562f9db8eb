// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hands evaluation.
use std::{panic, thread};

use crate::{compare::Showdown, error::EvalError, hand::Hand, score::HandValue};

impl HandValue {
    /// Evaluates hands using `num_tasks` parallel tasks.
    ///
    /// Each task evaluates a contiguous chunk of the hands, the returned values
    /// are in the same order as the hands.
    ///
    /// Panics if `num_tasks` is zero.
    pub fn par_eval_all(hands: &[Hand], num_tasks: usize) -> Vec<HandValue> {
        assert!(num_tasks > 0);

        if hands.is_empty() {
            return Vec::new();
        }

        let hands_per_task = hands.len().div_ceil(num_tasks);

        thread::scope(|s| {
            let tasks = hands
                .chunks(hands_per_task)
                .map(|chunk| {
                    s.spawn(move || chunk.iter().map(HandValue::eval).collect::<Vec<_>>())
                })
                .collect::<Vec<_>>();

            tasks
                .into_iter()
                .flat_map(|task| task.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .collect()
        })
    }
}

impl Showdown {
    /// Evaluates the hands with `num_tasks` parallel tasks and picks the winner.
    ///
    /// The winner is the same as [Showdown::new], ties go to the first hand.
    pub fn par_new(hands: &[Hand], num_tasks: usize) -> Result<Self, EvalError> {
        Self::from_values(HandValue::par_eval_all(hands, num_tasks))
    }
}
