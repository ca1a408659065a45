use rand_distr;
use rand::Rng;
use std::f64::consts::PI;
use std::fmt;
use crate::EstimateError;

/// Unnormalized Cauchy kernel 1 / (1 + (y - theta)^2): the Cauchy density with
/// location theta and unit scale, omitting the 1/pi constant. The kernel is defined
/// over the whole real line, symmetric in (y, theta), strictly positive for finite
/// arguments and reaches its maximum of 1.0 at y == theta.
pub fn density(y : f64, theta : f64) -> f64 {
    let diff = y - theta;
    1. / (1. + diff * diff)
}

#[derive(Debug, Clone)]
pub struct Cauchy {

    loc : f64,

    scale : f64,

    sampler : rand_distr::Cauchy<f64>

}

impl Cauchy {

    pub fn new(loc : f64, scale : f64) -> Result<Self, EstimateError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(EstimateError::Scale(scale));
        }
        let sampler = rand_distr::Cauchy::new(loc, scale)
            .map_err(|_| EstimateError::Scale(scale) )?;
        Ok(Self { loc, scale, sampler })
    }

    pub fn location(&self) -> f64 {
        self.loc
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Density up to the 1/(pi*scale) constant, evaluated at y.
    pub fn kernel(&self, y : f64) -> f64 {
        density((y - self.loc) / self.scale, 0.0)
    }

    pub fn prob(&self, y : f64) -> f64 {
        self.kernel(y) / (PI * self.scale)
    }

}

impl rand_distr::Distribution<f64> for Cauchy {

    fn sample<R>(&self, rng : &mut R) -> f64
    where
        R : Rng + ?Sized
    {
        rand_distr::Distribution::sample(&self.sampler, rng)
    }

}

impl fmt::Display for Cauchy {

    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cauchy(loc = {}, scale = {})", self.loc, self.scale)
    }

}
