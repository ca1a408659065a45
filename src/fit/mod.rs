use crate::EstimateError;

/// Grid approximation of the posterior over the Cauchy location parameter.
pub mod grid;

pub use grid::*;

/// Posterior draws over the grid and posterior-predictive draws.
pub mod draws;

pub use draws::*;

/// Trait shared by inference algorithms, parametrized by the resulting posterior representation.
/// The grid estimator is an Estimator<DVector<f64>>: its posterior is the vector of normalized
/// densities evaluated at the grid points.
pub trait Estimator<P> {

    /// Runs the inference algorithm, returning a reference to the posterior
    /// held by the estimator.
    fn estimate<'a>(&'a mut self) -> Result<&'a P, EstimateError>;

    /// If estimate(.) has been called successfully at least once, returns the current state
    /// of the posterior, whithout changing the algorithm state.
    fn estimated<'a>(&'a self) -> Option<&'a P>;

}
