use clap::Parser;
use log::info;

use lib::{expected_draws_approx, expected_draws_exact, make_rng, mean_draws};

/// Shows the simulated mean settling on the exact expectation as the trial count grows.
#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'n', long, default_value_t = 10)]
    population: usize,

    #[arg(short = 'm', long, default_value_t = 5)]
    target: usize,

    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 100_000)]
    max_trials: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if args.population == 0 || args.target == 0 || args.target > args.population {
        anyhow::bail!(
            "target must be between 1 and the population, got m = {}, n = {}",
            args.target,
            args.population
        );
    }

    let exact = expected_draws_exact(args.target, args.population);
    let approx = expected_draws_approx(args.target, args.population);
    info!(
        "m = {}, n = {}: exact {:.4}, truncated recurrence {:.4}",
        args.target, args.population, exact, approx
    );

    let mut rng = make_rng(args.seed);
    let mut trials = 10;
    while trials <= args.max_trials {
        let summary = mean_draws(args.target, args.population, trials, &mut rng);
        println!(
            "{:>8} trials: mean {:.4} +- {:.4}, {:+.2}% from exact",
            trials,
            summary.mean,
            summary.std_error(),
            100.0 * (summary.mean - exact) / exact
        );
        trials *= 10;
    }
    Ok(())
}
