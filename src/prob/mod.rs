/// Cauchy location-scale distribution and its unnormalized kernel.
mod cauchy;

pub use cauchy::*;
