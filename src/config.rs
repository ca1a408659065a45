use serde::{Serialize, Deserialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use crate::EstimateError;

/// Observed values of the exercise; Cauchy-distributed with unknown location and unit scale.
pub const OBSERVATIONS : [f64; 5] = [-2.0, -1.0, 0.0, 1.5, 2.5];

/// Settings of an estimation run. Fields missing from a JSON file take their
/// default value, so {} is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {

    pub observations : Vec<f64>,

    /// Lower bound of the parameter grid.
    pub grid_low : f64,

    /// Upper bound of the parameter grid.
    pub grid_high : f64,

    pub grid_size : usize,

    /// Number of posterior (and therefore predictive) draws.
    pub n_samples : usize,

    /// Fixed generator seed; draws are taken from system entropy when missing.
    pub seed : Option<u64>,

    /// Bins of the posterior draws histogram, spanning the draws range.
    pub parameter_bins : usize,

    /// Bins of the predictive draws histogram, spanning predictive_percentiles.
    pub predictive_bins : usize,

    /// Percentile pair (in [0, 100]) clipping the predictive histogram.
    pub predictive_percentiles : (f64, f64)

}

impl Default for Config {

    fn default() -> Self {
        Self {
            observations : OBSERVATIONS.to_vec(),
            grid_low : 0.0,
            grid_high : 1.0,
            grid_size : 1000,
            n_samples : 1000,
            seed : None,
            parameter_bins : 10,
            predictive_bins : 100,
            predictive_percentiles : (5.0, 95.0)
        }
    }

}

impl Config {

    pub fn load_from_path(path : impl AsRef<Path>) -> Result<Self, EstimateError> {
        let f = File::open(path.as_ref())?;
        let config : Config = serde_json::from_reader(BufReader::new(f))?;
        config.validate()?;
        Ok(config)
    }

    /// Verifies the settings against the failure modes of the estimation steps.
    pub fn validate(&self) -> Result<(), EstimateError> {
        if self.observations.is_empty() {
            return Err(EstimateError::NoObservations);
        }
        if let Some(y) = self.observations.iter().find(|y| !y.is_finite() ) {
            return Err(EstimateError::Observation(*y));
        }
        if self.grid_size == 0 {
            return Err(EstimateError::EmptyGrid);
        }
        if !self.grid_low.is_finite() || !self.grid_high.is_finite() || self.grid_low > self.grid_high {
            return Err(EstimateError::GridBounds(self.grid_low, self.grid_high));
        }
        if self.n_samples == 0 {
            return Err(EstimateError::NoSamples);
        }
        let (low, high) = self.predictive_percentiles;
        if !(low >= 0.0 && high <= 100.0 && low < high) {
            return Err(EstimateError::Percentiles(low, high));
        }
        Ok(())
    }

}

#[test]
fn default_config() {
    let config = Config::default();
    assert_eq!(config.observations, vec![-2.0, -1.0, 0.0, 1.5, 2.5]);
    assert_eq!((config.grid_low, config.grid_high, config.grid_size), (0.0, 1.0, 1000));
    assert_eq!(config.n_samples, 1000);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json() {
    let config : Config = serde_json::from_str(r#"{ "grid_size" : 50, "seed" : 3 }"#).unwrap();
    assert_eq!(config.grid_size, 50);
    assert_eq!(config.seed, Some(3));
    assert_eq!(config.n_samples, 1000);
    assert_eq!(config.observations.len(), 5);
}

#[test]
fn invalid_config() {
    let mut config = Config::default();
    config.observations.clear();
    assert!(config.validate().is_err());
    let config = Config { grid_low : 2.0, grid_high : 1.0, ..Config::default() };
    assert!(config.validate().is_err());
    let config = Config { n_samples : 0, ..Config::default() };
    assert!(config.validate().is_err());
    let config = Config { predictive_percentiles : (95.0, 5.0), ..Config::default() };
    assert!(config.validate().is_err());
}
