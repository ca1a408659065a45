use nalgebra::*;
use std::fmt;
use crate::EstimateError;

/// Discretization of a bounded scalar parameter domain into equally-spaced points, both
/// bounds included. The grid is the support of the approximated posterior: all posterior
/// draws are elements of the grid.
#[derive(Debug, Clone)]
pub struct Grid {

    low : f64,

    high : f64,

    pts : DVector<f64>

}

impl Grid {

    /// Builds n points equally spaced over [low, high]. The first point is exactly low and the
    /// last point is exactly high. A single-point grid holds only low.
    pub fn linspace(low : f64, high : f64, n : usize) -> Result<Self, EstimateError> {
        if n == 0 {
            return Err(EstimateError::EmptyGrid);
        }
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(EstimateError::GridBounds(low, high));
        }
        let pts = if n == 1 {
            DVector::from_element(1, low)
        } else {
            let step = (high - low) / (n - 1) as f64;
            let mut pts = DVector::from_fn(n, |i, _| low + (i as f64) * step );
            pts[n - 1] = high;
            pts
        };
        Ok(Self { low, high, pts })
    }

    pub fn points(&self) -> &DVector<f64> {
        &self.pts
    }

    pub fn len(&self) -> usize {
        self.pts.nrows()
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// Distance between consecutive points (zero for single-point grids).
    pub fn step(&self) -> f64 {
        if self.len() > 1 {
            (self.high - self.low) / (self.len() - 1) as f64
        } else {
            0.0
        }
    }

    pub fn get(&self, ix : usize) -> Option<f64> {
        self.pts.get(ix).cloned()
    }

    /// Exact membership test (the value must be bitwise-equal to one grid point).
    pub fn contains(&self, val : f64) -> bool {
        self.pts.iter().any(|p| *p == val )
    }

    pub fn iter(&self) -> impl Iterator<Item=&f64> {
        self.pts.iter()
    }

}

impl fmt::Display for Grid {

    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid {{ [{}, {}], n = {}, step = {} }}", self.low, self.high, self.len(), self.step())
    }

}

#[test]
fn linspace_bounds() {
    let grid = Grid::linspace(0.0, 1.0, 1000).unwrap();
    assert_eq!(grid.len(), 1000);
    assert_eq!(grid.get(0), Some(0.0));
    assert_eq!(grid.get(999), Some(1.0));
    let step = grid.step();
    assert!((step - 1. / 999.).abs() < 1E-15);
    for i in 1..grid.len() {
        assert!((grid.points()[i] - grid.points()[i-1] - step).abs() < 1E-12);
    }
}

#[test]
fn linspace_degenerate() {
    assert!(Grid::linspace(0.0, 1.0, 0).is_err());
    assert!(Grid::linspace(1.0, 0.0, 10).is_err());
    assert!(Grid::linspace(0.0, f64::INFINITY, 10).is_err());
    let single = Grid::linspace(0.3, 1.0, 1).unwrap();
    assert_eq!(single.len(), 1);
    assert!(single.contains(0.3));
    assert_eq!(single.step(), 0.0);
}
