/// Cauchy observation model: the unnormalized location kernel used by the likelihood
/// and a location-scale sampler used to push parameter draws into predictions.
pub mod prob;

/// Parameter grids and non-parametric representations of sampled distributions
/// (histograms and percentiles).
pub mod approx;

/// Grid-approximation estimator: flat prior times Cauchy likelihood evaluated
/// over the parameter grid, normalized, then sampled.
pub mod fit;

/// Sources of randomness injected into the estimator sampling steps.
pub mod sim;

/// Summary statistics over sample sets.
pub mod calc;

/// Estimation settings, with defaults matching the textbook exercise.
pub mod config;

/// Serializable bundle with the data behind the posterior density curve, the
/// parameter histogram and the predictive histogram.
pub mod report;

mod error;

pub use error::EstimateError;

pub use config::Config;
