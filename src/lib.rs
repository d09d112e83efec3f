pub mod analytic;
pub mod config;
pub mod experiment;
pub mod film;
pub mod font;
pub mod plot;
pub mod simulate;
#[cfg(feature = "window")]
pub mod window;

pub use analytic::{
    coupon_collector_expected_draws, expected_draws_approx, expected_draws_exact, HittingChain,
};
pub use config::{Config, ExperimentConfig, PlotConfig};
pub use experiment::{format_table, sweep, Comparison};
pub use film::{rgb_to_u32, u32_to_rgb, Film};
pub use plot::{Marker, ScatterPlot, Series};
pub use simulate::{mean_draws, sample_distinct, TrialSummary};

use rand::prelude::*;

/// seeded runs are reproducible, unseeded ones draw from entropy
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Builds the comparison plot: simulated means ("True") against the recurrence ("Expected"),
/// and optionally the closed form ("Exact").
pub fn comparison_plot(rows: &[Comparison], plot_config: &PlotConfig) -> ScatterPlot {
    let mut plot = ScatterPlot::new(plot_config.width, plot_config.height);
    plot.add_series(Series::new(
        "True",
        Marker::Circle,
        rgb_to_u32(31, 119, 180),
        column(rows, |row| row.simulated.mean),
    ))
    .add_series(Series::new(
        "Expected",
        Marker::Square,
        rgb_to_u32(255, 127, 14),
        column(rows, |row| row.approx),
    ));
    if plot_config.show_exact {
        plot.add_series(Series::new(
            "Exact",
            Marker::Cross,
            rgb_to_u32(44, 160, 44),
            column(rows, |row| row.exact),
        ));
    }
    plot
}

fn column<F: Fn(&Comparison) -> f64>(rows: &[Comparison], f: F) -> Vec<(f64, f64)> {
    rows.iter().map(|row| (row.target as f64, f(row))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let (mut a, mut b) = (make_rng(Some(1)), make_rng(Some(1)));
        for _ in 0..4 {
            assert_eq!(a.gen::<u64>(), b.gen::<u64>());
        }
    }

    #[test]
    fn plot_series_follow_config() {
        let config = Config::default();
        let rows = sweep(&config.experiment, &mut make_rng(Some(8)));
        let plot = comparison_plot(&rows, &config.plot);
        let labels: Vec<&str> = plot.series().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["True", "Expected"]);
        assert_eq!(plot.series()[0].points.len(), 10);
        assert_eq!(plot.series()[1].points[0], (1.0, 1.0));

        let mut with_exact = config.plot.clone();
        with_exact.show_exact = true;
        let plot = comparison_plot(&rows, &with_exact);
        assert_eq!(plot.series().len(), 3);
        assert_eq!(plot.series()[2].points[9].0, 10.0);
    }
}
