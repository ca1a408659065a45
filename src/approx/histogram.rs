use std::collections::HashMap;
use serde::{Serialize, Deserialize};

/// Equal-width histogram over a closed interval [low, high]. All bins are half-open
/// [a, b) except the last, which also holds values equal to high. Values outside the
/// interval are left out of the counts, which is how heavy-tailed samples (such as Cauchy
/// predictive draws) are clipped to a readable range.
#[derive(Debug, Clone)]
pub struct Histogram {

    low : f64,

    high : f64,

    // Size of each bin
    intv : f64,

    // Number of counted samples (those within [low, high])
    n : usize,

    // Number of samples left outside [low, high]
    n_out : usize,

    n_bins : usize,

    // Bin order as key and count of ocurrences as values. Bins without an
    // element count are missing entries.
    bins : HashMap<u64, u64>
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bin {
    pub low : f64,
    pub high : f64,
    pub count : u64,
    pub prop : f64
}

impl Histogram {

    /// Histogram spanning the full sample range [min, max].
    pub fn calculate<'a>(sample : impl Iterator<Item=&'a f64> + Clone, n_bins : usize) -> Self {
        let (mut min, mut max) = (f64::MAX, f64::MIN);
        let mut any = false;
        for s in sample.clone().filter(|s| s.is_finite() ) {
            if *s > max {
                max = *s;
            }
            if *s < min {
                min = *s;
            }
            any = true;
        }
        if !any {
            min = 0.0;
            max = 0.0;
        }
        Self::calculate_within(sample, min, max, n_bins)
    }

    /// Histogram over [low, high], ignoring sample values outside it.
    pub fn calculate_within<'a>(
        sample : impl Iterator<Item=&'a f64>,
        low : f64,
        high : f64,
        n_bins : usize
    ) -> Self {
        let n_bins = n_bins.max(1);
        let intv = (high - low) / n_bins as f64;
        let mut bins = HashMap::<u64, u64>::new();
        let (mut n, mut n_out) = (0, 0);
        for s in sample {
            if !(*s >= low && *s <= high) {
                n_out += 1;
                continue;
            }

            // Degenerate interval (low == high) allocates everything to the first bin.
            let b = if intv > 0.0 {
                (((*s - low) / intv).floor() as u64).min(n_bins as u64 - 1)
            } else {
                0
            };
            *bins.entry(b).or_insert(0) += 1;
            n += 1;
        }
        Self { low, high, intv, n, n_out, n_bins, bins }
    }

    /// Returns 0 if bin position is outside bounds or no elements are allocated to it.
    pub fn count(&self, pos : usize) -> u64 {
        *self.bins.get(&(pos as u64)).unwrap_or(&0)
    }

    /// Proportion of counted samples falling at the bin. Returns 0 if bin position is
    /// outside bounds or no elements are allocated to it.
    pub fn proportion(&self, pos : usize) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        self.count(pos) as f64 / self.n as f64
    }

    pub fn bounds(&self, pos : usize) -> Option<(f64, f64)> {
        if pos >= self.n_bins {
            return None;
        }
        let low = self.low + self.intv*(pos as f64);
        let high = if pos == self.n_bins - 1 { self.high } else { low + self.intv };
        Some((low, high))
    }

    pub fn bin(&self, pos : usize) -> Option<Bin> {
        let (low, high) = self.bounds(pos)?;
        let prop = self.proportion(pos);
        let count = self.count(pos);
        Some(Bin{ low, high, prop, count })
    }

    pub fn iter_bins(&self) -> Vec<Bin> {
        (0..self.n_bins).filter_map(|pos| self.bin(pos) ).collect()
    }

    pub fn limits(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// Number of samples allocated to some bin.
    pub fn counted(&self) -> usize {
        self.n
    }

    /// Number of samples outside the histogram limits.
    pub fn excluded(&self) -> usize {
        self.n_out
    }

    /// Bin with the highest count (first one on ties).
    pub fn mode_bin(&self) -> Option<Bin> {
        let mut best : Option<usize> = None;
        for pos in 0..self.n_bins {
            match best {
                Some(b) if self.count(b) >= self.count(pos) => { },
                _ => best = Some(pos)
            }
        }
        best.and_then(|b| self.bin(b) )
    }

}

#[test]
fn histogram() {
    let data : Vec<_> = (0..10).map(|s| s as f64).collect();
    let hist = Histogram::calculate(data.iter(), 3);
    assert_eq!(hist.limits(), (0.0, 9.0));
    assert_eq!(hist.count(0), 3);
    assert_eq!(hist.count(1), 3);

    // Maximum value falls at the closed last bin.
    assert_eq!(hist.count(2), 4);
    assert_eq!(hist.iter_bins().iter().map(|b| b.count ).sum::<u64>(), 10);
    assert!((hist.iter_bins().iter().map(|b| b.prop ).sum::<f64>() - 1.0).abs() < 1E-12);
    assert!(hist.bin(3).is_none());
}

#[test]
fn histogram_within() {
    let data = [-100.0, 0.1, 0.2, 0.6, 1.0, 250.0];
    let hist = Histogram::calculate_within(data.iter(), 0.0, 1.0, 2);
    assert_eq!(hist.counted(), 4);
    assert_eq!(hist.excluded(), 2);
    assert_eq!(hist.count(0), 2);
    assert_eq!(hist.count(1), 2);
    assert_eq!(hist.mode_bin().unwrap().low, 0.0);
}

#[test]
fn histogram_single_value() {
    let data = [0.5; 8];
    let hist = Histogram::calculate(data.iter(), 10);
    assert_eq!(hist.count(0), 8);
    assert_eq!(hist.counted(), 8);
}
