use thiserror::Error;
use rand::distributions::WeightedError;

#[derive(Debug, Error)]
pub enum EstimateError {

    #[error("Parameter grid requires at least one point")]
    EmptyGrid,

    #[error("Invalid grid bounds [{0}, {1}]")]
    GridBounds(f64, f64),

    #[error("Observation set is empty")]
    NoObservations,

    #[error("Observation {0} is not a finite value")]
    Observation(f64),

    #[error("At least one draw should be requested")]
    NoSamples,

    #[error("Posterior should be estimated before sampling")]
    NotEstimated,

    #[error("Posterior mass {0} cannot be normalized")]
    DegeneratePosterior(f64),

    #[error("Invalid sampling weights ({0:?})")]
    Weights(WeightedError),

    #[error("Cauchy scale should be positive and finite (informed {0})")]
    Scale(f64),

    #[error("Invalid percentile range [{0}, {1}]")]
    Percentiles(f64, f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error)

}
