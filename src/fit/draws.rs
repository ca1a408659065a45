use serde::{Serialize, Deserialize};
use std::path::Path;
use crate::sim::RandomSource;
use crate::config::Config;
use crate::EstimateError;
use super::{GridPosterior, Estimator};

/// Row of the draws table: a posterior draw of the location and the new observation
/// simulated from it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Draw {
    pub theta : f64,
    pub prediction : f64
}

/// Posterior draws over the grid and the posterior-predictive draws generated from them,
/// aligned by position.
#[derive(Debug, Clone)]
pub struct Draws {

    pub parameters : Vec<f64>,

    pub predictive : Vec<f64>

}

impl Draws {

    /// Takes n parameter draws from an estimated posterior, then one predictive draw per parameter.
    pub fn take(
        post : &GridPosterior,
        n : usize,
        src : &mut impl RandomSource
    ) -> Result<Self, EstimateError> {
        let parameters = post.sample_parameters(n, src)?;
        let predictive = post.sample_predictive(&parameters[..], src)?;
        Ok(Self { parameters, predictive })
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item=Draw> + '_ {
        self.parameters.iter()
            .zip(self.predictive.iter())
            .map(|(theta, prediction)| Draw { theta : *theta, prediction : *prediction } )
    }

    /// Writes one CSV row per draw, with a theta,prediction header.
    pub fn save_to_path(&self, path : impl AsRef<Path>) -> Result<(), EstimateError> {
        let mut wtr = csv::Writer::from_path(path.as_ref())?;
        for d in self.iter() {
            wtr.serialize(d)?;
        }
        wtr.flush()?;
        log::info!("Wrote {} draws to {}", self.len(), path.as_ref().display());
        Ok(())
    }

}

/// Runs the whole estimation: builds the grid posterior from the configuration,
/// estimates it and takes the posterior and predictive draws.
pub fn run(
    config : &Config,
    src : &mut impl RandomSource
) -> Result<(GridPosterior, Draws), EstimateError> {
    let mut post = GridPosterior::from_config(config)?;
    post.estimate()?;
    let draws = Draws::take(&post, config.n_samples, src)?;
    log::info!("{}", post);
    Ok((post, draws))
}
