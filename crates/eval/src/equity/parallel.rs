// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel equity simulation.
use log::debug;
use rand::prelude::*;
use std::{panic, thread};

use super::{EquityResult, Simulation};
use crate::error::EvalError;

impl Simulation {
    /// Runs `trials` trials split between `num_tasks` parallel tasks.
    ///
    /// Each task draws cards with its own generator seeded from a generator
    /// seeded with `seed`, so the result only depends on `num_tasks`, `trials`
    /// and `seed`.
    ///
    /// Returns an error if `num_tasks` or `trials` are zero.
    pub fn par_run(
        &self,
        num_tasks: usize,
        trials: usize,
        seed: u64,
    ) -> Result<EquityResult, EvalError> {
        if num_tasks == 0 {
            return Err(EvalError::NoTasks);
        }

        if trials == 0 {
            return Err(EvalError::NoTrials);
        }

        debug!("Running {trials} trials with {num_tasks} tasks seed {seed}");

        // Assign seeds before filtering out idle tasks so that a task seed
        // doesn't depend on how many tasks have work.
        let mut seeds = SmallRng::seed_from_u64(seed);
        let tasks = (0..num_tasks)
            .map(|task_id| {
                let task_trials = trials / num_tasks + usize::from(task_id < trials % num_tasks);
                (task_trials, seeds.random::<u64>())
            })
            .filter(|(task_trials, _)| *task_trials > 0)
            .collect::<Vec<_>>();

        let result = thread::scope(|s| {
            let handles = tasks
                .into_iter()
                .map(|(task_trials, task_seed)| {
                    s.spawn(move || {
                        let mut rng = SmallRng::seed_from_u64(task_seed);
                        self.run_trials(task_trials, &mut rng)
                    })
                })
                .collect::<Vec<_>>();

            // Aggregate per task counters.
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .sum::<EquityResult>()
        });

        self.log_result(&result);
        Ok(result)
    }
}
