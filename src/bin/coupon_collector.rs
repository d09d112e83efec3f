use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use lib::{comparison_plot, format_table, make_rng, sweep, Config};

/// Compares simulated and estimated draw counts for collecting m of n coupons.
#[derive(Parser, Debug)]
struct Args {
    /// TOML file with [experiment] and [plot] tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short = 'n', long)]
    population: Option<usize>,

    #[arg(short, long)]
    trials: Option<usize>,

    #[arg(short = 'm', long)]
    max_target: Option<usize>,

    #[arg(short, long)]
    seed: Option<u64>,

    /// save the plot as a PNG
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    no_window: bool,

    /// also plot the closed-form expectation
    #[arg(long)]
    exact: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        let experiment = &mut config.experiment;
        if let Some(population) = self.population {
            experiment.population = population;
        }
        if let Some(trials) = self.trials {
            experiment.trials = trials;
        }
        if self.max_target.is_some() {
            experiment.max_target = self.max_target;
        }
        if self.seed.is_some() {
            experiment.seed = self.seed;
        }
        if self.output.is_some() {
            config.plot.output = self.output;
        }
        if self.no_window {
            config.plot.show_window = false;
        }
        if self.exact {
            config.plot.show_exact = true;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config()?;
    let experiment = &config.experiment;
    info!(
        "collecting 1..={} of {} values, {} trials each",
        experiment.max_target(),
        experiment.population,
        experiment.trials
    );

    let mut rng = make_rng(experiment.seed);
    let rows = sweep(experiment, &mut rng);
    print!("{}", format_table(&rows));

    let film = comparison_plot(&rows, &config.plot).render();

    if let Some(path) = &config.plot.output {
        film.to_rgb_image()
            .save(path)
            .with_context(|| format!("failed to save plot to {}", path.display()))?;
        info!("saved plot to {}", path.display());
    }

    if config.plot.show_window {
        show(&film, experiment.population)?;
    }
    Ok(())
}

#[cfg(feature = "window")]
fn show(film: &lib::Film<u32>, population: usize) -> anyhow::Result<()> {
    lib::window::show_blocking(film, &format!("Draws to collect m of {} values", population))
}

#[cfg(not(feature = "window"))]
fn show(_film: &lib::Film<u32>, _population: usize) -> anyhow::Result<()> {
    log::warn!("built without the window feature, pass --output to save the plot instead");
    Ok(())
}
