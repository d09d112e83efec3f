use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// values are drawn from `1..=population`
    pub population: usize,
    /// simulated collections per target
    pub trials: usize,
    /// largest target swept, the population when absent
    pub max_target: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            population: 10,
            trials: 1000,
            max_target: None,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    pub fn max_target(&self) -> usize {
        self.max_target.unwrap_or(self.population)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlotConfig {
    pub width: usize,
    pub height: usize,
    pub output: Option<PathBuf>,
    pub show_window: bool,
    pub show_exact: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            width: 800,
            height: 600,
            output: None,
            show_window: true,
            show_exact: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub experiment: ExperimentConfig,
    pub plot: PlotConfig,
}

impl Config {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("malformed config")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut buf = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut buf))
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Config::from_toml(&buf).with_context(|| format!("in {}", path.display()))
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let experiment = &self.experiment;
        if experiment.population == 0 {
            bail!("population must be at least 1");
        }
        if experiment.trials == 0 {
            bail!("trials must be at least 1");
        }
        let max_target = experiment.max_target();
        if max_target == 0 || max_target > experiment.population {
            bail!(
                "max_target must be between 1 and the population ({}), got {}",
                experiment.population,
                max_target
            );
        }
        if self.plot.width < 200 || self.plot.height < 150 {
            bail!(
                "plot must be at least 200x150, got {}x{}",
                self.plot.width,
                self.plot.height
            );
        }
        Ok(())
    }
}
