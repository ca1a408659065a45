/// Location and dispersion summaries of univariate samples.
pub mod summary;

pub use summary::*;

/// Mean and (population) variance of a sample in a single pass, using the
/// running-sum recurrence. Returns None for empty samples.
pub fn mean_variance<'a>(sample : impl Iterator<Item=&'a f64>) -> Option<(f64, f64)> {
    let (mut n, mut mean, mut m2) = (0usize, 0.0, 0.0);
    for s in sample {
        n += 1;
        let delta = *s - mean;
        mean += delta / n as f64;
        m2 += delta * (*s - mean);
    }
    if n == 0 {
        None
    } else {
        Some((mean, m2 / n as f64))
    }
}

#[test]
fn running_mean_variance() {
    let s = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let (m, v) = mean_variance(s.iter()).unwrap();
    assert!((m - 5.0).abs() < 1E-12);
    assert!((v - 4.0).abs() < 1E-12);
    let empty : [f64; 0] = [];
    assert!(mean_variance(empty.iter()).is_none());
}
