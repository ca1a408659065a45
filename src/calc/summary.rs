use std::fmt;
use serde::{Serialize, Deserialize};
use crate::approx::{sorted, percentile_sorted};
use super::mean_variance;

/// Summary statistics of a univariate sample. Medians and the central 95% interval are
/// more informative than the mean for the predictive draws, since Cauchy variates have
/// no finite moments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub n : usize,
    pub mean : f64,
    pub stddev : f64,
    pub min : f64,
    pub low : f64,
    pub median : f64,
    pub high : f64,
    pub max : f64
}

impl Summary {

    pub fn calculate(sample : &[f64]) -> Option<Self> {
        let (mean, var) = mean_variance(sample.iter())?;
        let ord = sorted(sample);
        let n = ord.len();
        Some(Self {
            n,
            mean,
            stddev : var.sqrt(),
            min : ord[0],
            low : percentile_sorted(&ord[..], 0.025),
            median : percentile_sorted(&ord[..], 0.5),
            high : percentile_sorted(&ord[..], 0.975),
            max : ord[n-1]
        })
    }

}

impl fmt::Display for Summary {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n = {}; mean = {:.4} (sd {:.4}); median = {:.4}; 95% interval = [{:.4}, {:.4}]; range = [{:.4}, {:.4}]",
            self.n,
            self.mean,
            self.stddev,
            self.median,
            self.low,
            self.high,
            self.min,
            self.max
        )
    }

}

#[test]
fn summary() {
    let s : Vec<f64> = (0..=100).map(|i| i as f64).collect();
    let summ = Summary::calculate(&s[..]).unwrap();
    assert_eq!(summ.n, 101);
    assert_eq!(summ.median, 50.0);
    assert!((summ.low - 2.5).abs() < 1E-12);
    assert!((summ.high - 97.5).abs() < 1E-12);
    assert_eq!((summ.min, summ.max), (0.0, 100.0));
    assert!((summ.mean - 50.0).abs() < 1E-12);
    assert!(Summary::calculate(&[]).is_none());
}
