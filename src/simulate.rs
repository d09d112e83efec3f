use std::collections::HashSet;

use rand::prelude::*;
use statrs::statistics::Statistics;

/// Draws uniformly from `1..=population` until `target` distinct values have shown up.
///
/// Returns the values seen and how many draws it took. Panics if `target > population`,
/// since the loop could never finish.
pub fn sample_distinct<R: Rng + ?Sized>(
    target: usize,
    population: usize,
    rng: &mut R,
) -> (HashSet<usize>, usize) {
    assert!(
        target <= population,
        "cannot collect {} distinct values out of {}",
        target,
        population
    );
    let mut seen = HashSet::with_capacity(target);
    let mut draws = 0;
    while seen.len() < target {
        seen.insert(rng.gen_range(1..=population));
        draws += 1;
    }
    (seen, draws)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrialSummary {
    pub trials: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl TrialSummary {
    pub fn std_error(&self) -> f64 {
        self.std_dev / (self.trials as f64).sqrt()
    }
}

/// Runs `trials` independent collections and summarizes the draw counts.
/// With a single trial the spread is undefined and reported as NaN.
pub fn mean_draws<R: Rng + ?Sized>(
    target: usize,
    population: usize,
    trials: usize,
    rng: &mut R,
) -> TrialSummary {
    let draws: Vec<f64> = (0..trials)
        .map(|_| sample_distinct(target, population, rng).1 as f64)
        .collect();
    TrialSummary {
        trials,
        mean: draws.iter().mean(),
        std_dev: draws.iter().std_dev(),
    }
}
