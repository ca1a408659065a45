use rand::rngs::StdRng;
use rand::SeedableRng;
use rand::distributions::{WeightedIndex, WeightedError};
use rand_distr::Distribution;
use crate::prob::Cauchy;
use crate::EstimateError;

/// Capability consumed by the estimator whenever it needs randomness: weighted draws (with
/// replacement) over a discrete support, and Cauchy variates for predictive draws. Deterministic
/// sources (fixed seeds or mocks) can be injected in place of the entropy-seeded generator.
pub trait RandomSource {

    /// Draws n indices in 0..weights.len(), independently and with replacement, where index i
    /// is drawn with probability weights[i] / sum(weights).
    fn choose_weighted(&mut self, weights : &[f64], n : usize) -> Result<Vec<usize>, EstimateError>;

    /// Single draw from a Cauchy distribution with the informed location and scale.
    fn cauchy(&mut self, loc : f64, scale : f64) -> Result<f64, EstimateError>;

}

/// Verifies weights are valid probability masses up to a constant, so the
/// failure is reported before the generator is touched.
pub fn validate_weights(weights : &[f64]) -> Result<(), EstimateError> {
    if weights.is_empty() {
        return Err(EstimateError::Weights(WeightedError::NoItem));
    }
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0 ) {
        return Err(EstimateError::Weights(WeightedError::InvalidWeight));
    }
    if weights.iter().all(|w| *w == 0.0 ) {
        return Err(EstimateError::Weights(WeightedError::AllWeightsZero));
    }
    Ok(())
}

/// Pseudo-random source backed by the standard generator, seeded either from a
/// fixed u64 (reproducible runs) or from system entropy.
#[derive(Debug, Clone)]
pub struct SeededSource {

    rng : StdRng,

    seed : Option<u64>

}

impl SeededSource {

    pub fn new(seed : u64) -> Self {
        Self { rng : StdRng::seed_from_u64(seed), seed : Some(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng : StdRng::from_entropy(), seed : None }
    }

    /// Seeded source when a seed is informed; entropy-based source otherwise.
    pub fn from_seed(seed : Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy()
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

}

impl RandomSource for SeededSource {

    fn choose_weighted(&mut self, weights : &[f64], n : usize) -> Result<Vec<usize>, EstimateError> {
        validate_weights(weights)?;
        let index : WeightedIndex<f64> = WeightedIndex::new(weights)
            .map_err(EstimateError::Weights)?;
        Ok((0..n).map(|_| index.sample(&mut self.rng) ).collect())
    }

    fn cauchy(&mut self, loc : f64, scale : f64) -> Result<f64, EstimateError> {
        let distr = Cauchy::new(loc, scale)?;
        Ok(distr.sample(&mut self.rng))
    }

}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn same_seed_same_draws() {
        let w = [0.1, 0.4, 0.2, 0.3];
        let (mut a, mut b) = (SeededSource::new(42), SeededSource::new(42));
        assert_eq!(a.choose_weighted(&w, 100).unwrap(), b.choose_weighted(&w, 100).unwrap());
        assert_eq!(a.cauchy(0.3, 1.0).unwrap(), b.cauchy(0.3, 1.0).unwrap());
    }

    #[test]
    fn zero_weight_never_drawn() {
        let w = [0.0, 1.0, 0.0, 3.0];
        let mut src = SeededSource::new(7);
        let ixs = src.choose_weighted(&w, 500).unwrap();
        assert_eq!(ixs.len(), 500);
        assert!(ixs.iter().all(|ix| *ix == 1 || *ix == 3 ));
    }

    #[test]
    fn invalid_weights() {
        let mut src = SeededSource::new(1);
        assert!(src.choose_weighted(&[], 10).is_err());
        assert!(src.choose_weighted(&[0.0, 0.0], 10).is_err());
        assert!(src.choose_weighted(&[1.0, f64::NAN], 10).is_err());
        assert!(src.choose_weighted(&[1.0, -0.5], 10).is_err());
        assert!(src.cauchy(0.0, 0.0).is_err());
    }

}
