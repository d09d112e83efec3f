use log::{debug, warn};
use rand::Rng;

use crate::analytic::{expected_draws_approx, expected_draws_exact};
use crate::config::ExperimentConfig;
use crate::simulate::{mean_draws, TrialSummary};

/// simulated means further than this from the exact value get a warning
pub const RELATIVE_TOLERANCE: f64 = 0.05;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Comparison {
    pub target: usize,
    pub simulated: TrialSummary,
    pub approx: f64,
    pub exact: f64,
}

impl Comparison {
    pub fn relative_error(&self) -> f64 {
        (self.simulated.mean - self.exact).abs() / self.exact
    }
}

/// Simulates and estimates every target from 1 to `config.max_target()`.
pub fn sweep<R: Rng + ?Sized>(config: &ExperimentConfig, rng: &mut R) -> Vec<Comparison> {
    let population = config.population;
    (1..=config.max_target())
        .map(|target| {
            let simulated = mean_draws(target, population, config.trials, rng);
            let comparison = Comparison {
                target,
                simulated,
                approx: expected_draws_approx(target, population),
                exact: expected_draws_exact(target, population),
            };
            debug!(
                "m = {}: {} trials, mean {:.3} +- {:.3}",
                target,
                simulated.trials,
                simulated.mean,
                simulated.std_error()
            );
            if comparison.relative_error() > RELATIVE_TOLERANCE {
                warn!(
                    "m = {}: simulated mean {:.3} is {:.1}% away from {:.3}",
                    target,
                    simulated.mean,
                    100.0 * comparison.relative_error(),
                    comparison.exact
                );
            }
            comparison
        })
        .collect()
}

pub fn format_table(rows: &[Comparison]) -> String {
    let mut out = format!(
        "{:>4} {:>10} {:>10} {:>10} {:>10}\n",
        "m", "simulated", "stderr", "recurrence", "exact"
    );
    for row in rows {
        out += &format!(
            "{:>4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}\n",
            row.target,
            row.simulated.mean,
            row.simulated.std_error(),
            row.approx,
            row.exact
        );
    }
    out
}
