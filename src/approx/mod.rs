/// Equally-spaced parameter grids.
pub mod grid;

pub use grid::*;

/// Equal-width histograms over sampled distributions.
pub mod histogram;

pub use histogram::*;

/// Percentiles of samples by linear interpolation between order statistics.
pub mod quantile;

pub use quantile::*;
