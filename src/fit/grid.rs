use nalgebra::*;
use std::fmt;
use crate::prob::density;
use crate::approx::Grid;
use crate::sim::RandomSource;
use crate::config::Config;
use crate::EstimateError;
use super::Estimator;

/// Mass of the flat prior at any parameter value.
pub const PRIOR : f64 = 1. / 100.;

/// Flat prior over the location parameter.
pub fn prior() -> f64 {
    PRIOR
}

/// Product of the Cauchy kernel density(y, theta) over the observations.
pub fn likelihood(obs : &[f64], theta : f64) -> f64 {
    obs.iter().map(|y| density(*y, theta) ).product()
}

/// Grid approximation to the posterior of the location of a unit-scale Cauchy, under a flat prior.
/// The posterior is evaluated at each grid point and rescaled so that the entries sum to the number
/// of grid points (not to one). Sampling renormalizes the vector by its own sum, so the
/// rescaling does not change which values are drawn.
#[derive(Debug, Clone)]
pub struct GridPosterior {

    obs : Vec<f64>,

    grid : Grid,

    // Rescaled posterior, set after estimate(.).
    post : Option<DVector<f64>>

}

impl GridPosterior {

    pub fn new(obs : Vec<f64>, grid : Grid) -> Result<Self, EstimateError> {
        if obs.is_empty() {
            return Err(EstimateError::NoObservations);
        }
        if let Some(y) = obs.iter().find(|y| !y.is_finite() ) {
            return Err(EstimateError::Observation(*y));
        }
        log::debug!("Grid posterior over {} with {} observations", grid, obs.len());
        Ok(Self { obs, grid, post : None })
    }

    pub fn from_config(config : &Config) -> Result<Self, EstimateError> {
        config.validate()?;
        let grid = Grid::linspace(config.grid_low, config.grid_high, config.grid_size)?;
        Self::new(config.observations.clone(), grid)
    }

    pub fn observations(&self) -> &[f64] {
        &self.obs[..]
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn likelihood(&self, theta : f64) -> f64 {
        likelihood(&self.obs[..], theta)
    }

    pub fn prior(&self) -> f64 {
        prior()
    }

    /// Unnormalized posterior at theta.
    pub fn posterior(&self, theta : f64) -> f64 {
        self.prior() * self.likelihood(theta)
    }

    /// Grid point with the highest posterior density (first one on ties).
    pub fn mode(&self) -> Option<f64> {
        let post = self.post.as_ref()?;
        let ix = post.imax();
        self.grid.get(ix)
    }

    /// Posterior normalized to sum to one, used as the probabilities of the grid draws.
    pub fn weights(&self) -> Result<DVector<f64>, EstimateError> {
        let post = self.post.as_ref().ok_or(EstimateError::NotEstimated)?;
        let mass = post.sum();
        Ok(post.map(|p| p / mass ))
    }

    /// Draws n grid points with replacement, each with probability equal to its posterior weight.
    pub fn sample_parameters(
        &self,
        n : usize,
        src : &mut impl RandomSource
    ) -> Result<Vec<f64>, EstimateError> {
        let weights = self.weights()?;
        let ixs = src.choose_weighted(weights.as_slice(), n)?;
        let pts = self.grid.points();
        let sample : Vec<f64> = ixs.iter().map(|ix| pts[*ix] ).collect();
        log::debug!("Took {} posterior draws", sample.len());
        Ok(sample)
    }

    /// Pushes each parameter draw through the observation model: one unit-scale Cauchy
    /// variate located at each parameter value.
    pub fn sample_predictive(
        &self,
        params : &[f64],
        src : &mut impl RandomSource
    ) -> Result<Vec<f64>, EstimateError> {
        let mut preds = Vec::with_capacity(params.len());
        for theta in params {
            preds.push(src.cauchy(*theta, 1.0)?);
        }
        log::debug!("Took {} predictive draws", preds.len());
        Ok(preds)
    }

    /// Pairs (theta, density) of the rescaled posterior, the data of the density plot.
    pub fn curve(&self) -> Option<Vec<(f64, f64)>> {
        let post = self.post.as_ref()?;
        Some(self.grid.iter().cloned().zip(post.iter().cloned()).collect())
    }

}

impl Estimator<DVector<f64>> for GridPosterior {

    fn estimate<'a>(&'a mut self) -> Result<&'a DVector<f64>, EstimateError> {
        let m = self.grid.len();
        let mut post = DVector::from_iterator(m, self.grid.iter().map(|theta| self.posterior(*theta) ));
        let mass = post.sum();
        if !mass.is_finite() || mass <= 0.0 {
            return Err(EstimateError::DegeneratePosterior(mass));
        }

        // Entries sum to the grid size after this step.
        post /= mass / m as f64;
        log::info!("Estimated posterior over {} grid points (unnormalized mass {:e})", m, mass);
        self.post = Some(post);
        self.post.as_ref().ok_or(EstimateError::NotEstimated)
    }

    fn estimated<'a>(&'a self) -> Option<&'a DVector<f64>> {
        self.post.as_ref()
    }

}

impl fmt::Display for GridPosterior {

    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Posterior (Cauchy location, flat prior) at {}", self.grid)?;
        if let Some(mode) = self.mode() {
            write!(f, "; mode = {:.4}", mode)?;
        }
        Ok(())
    }

}
