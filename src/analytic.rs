//! Expected number of uniform draws (with replacement) from `1..=n` until `m` distinct values
//! have been seen.
//!
//! [`expected_draws_approx`] runs a forward recurrence over a truncated Markov chain of
//! "collected count" states. It is cheap but only approximate, and drifts low as `m`
//! approaches `n`. [`expected_draws_exact`] is the closed form it can be checked against.

use ndarray::prelude::*;

/// the chain is followed for `HORIZON_FACTOR * n` draws, past which the remaining mass is dropped.
pub const HORIZON_FACTOR: usize = 4;

/// Tables of the truncated chain for one `(target, population)` pair.
#[derive(Clone, Debug)]
pub struct HittingChain {
    target: usize,
    // occupancy[[i, k]] = P(exactly k distinct values after i draws)
    occupancy: Array2<f64>,
    // hitting[i] = mass contributed by draw i towards the target
    hitting: Array1<f64>,
}

impl HittingChain {
    /// Builds both tables. Panics if `population` is zero.
    pub fn new(target: usize, population: usize) -> Self {
        let horizon = HORIZON_FACTOR * population;
        let n = population as f64;

        let mut occupancy = Array2::<f64>::zeros((horizon, horizon));
        let mut hitting = Array1::<f64>::zeros(horizon);

        // the first draw always yields one new value, but counts as a miss for targets above one
        hitting[1] = n.recip();
        occupancy[[1, 0]] = (n - 1.0) / n;
        occupancy[[1, 1]] = n.recip();

        for i in 2..horizon {
            // states at or above i are unreachable after i - 1 draws
            let mut y = 0.0;
            for k in 0..i {
                y += (i - k) as f64 / n * occupancy[[i - 1, k]];
            }
            if i >= target {
                y *= occupancy.slice(s![i - 1, i - target..]).sum();
            }
            hitting[i] = y;

            for k in 0..i {
                let stayed = occupancy[[i - 1, k]] * (1.0 - y);
                // column -1 wraps to the last column, which is never populated inside the horizon
                let advanced = if k == 0 {
                    occupancy[[i - 1, horizon - 1]] * y
                } else {
                    occupancy[[i - 1, k - 1]] * y
                };
                occupancy[[i, k]] = stayed + advanced;
            }
        }

        HittingChain {
            target,
            occupancy,
            hitting,
        }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn horizon(&self) -> usize {
        self.hitting.len()
    }

    pub fn occupancy(&self) -> ArrayView2<'_, f64> {
        self.occupancy.view()
    }

    pub fn hitting(&self) -> ArrayView1<'_, f64> {
        self.hitting.view()
    }

    /// `target` plus all hitting mass accumulated over the horizon.
    /// Targets of zero or one need exactly that many draws, whatever the tables hold.
    pub fn expectation(&self) -> f64 {
        match self.target {
            0 | 1 => self.target as f64,
            _ => self.target as f64 + self.hitting.sum(),
        }
    }
}

/// Truncated-recurrence estimate of the expected draws to collect `target` of `population`
/// values. `target` should be in `1..=population`; nothing is validated beyond that.
/// A target of zero needs no draws, so it yields `0.0` rather than any leftover chain mass.
pub fn expected_draws_approx(target: usize, population: usize) -> f64 {
    match target {
        0 => 0.0,
        // the first draw always succeeds
        1 => 1.0,
        _ => HittingChain::new(target, population).expectation(),
    }
}

/// Exact expectation: the sum of the geometric waiting times `n / (n - j)` for `j < target`.
pub fn expected_draws_exact(target: usize, population: usize) -> f64 {
    debug_assert!(target <= population);
    let n = population as f64;
    (0..target).map(|j| n / (n - j as f64)).sum()
}

/// Expected draws to see every one of `n` values: `n * H_n`.
pub fn coupon_collector_expected_draws(population: usize) -> f64 {
    let harmonic: f64 = (1..=population).map(|k| (k as f64).recip()).sum();
    population as f64 * harmonic
}
