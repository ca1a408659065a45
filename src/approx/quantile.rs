use std::cmp::Ordering;

/// Sorts a copy of the sample in increasing order, placing incomparable values (NaN) as equal.
pub fn sorted(sample : &[f64]) -> Vec<f64> {
    let mut s = sample.to_vec();
    s.sort_unstable_by(|s1, s2| s1.partial_cmp(s2).unwrap_or(Ordering::Equal) );
    s
}

/// Returns the value below which a proportion q (in [0, 1]) of the sample falls, linearly
/// interpolating between the two nearest order statistics. Returns None for empty samples.
pub fn percentile(sample : &[f64], q : f64) -> Option<f64> {
    if sample.is_empty() {
        return None;
    }
    Some(percentile_sorted(&sorted(sample)[..], q))
}

/// Same as percentile, but assumes the sample is already sorted and non-empty.
pub fn percentile_sorted(ord : &[f64], q : f64) -> f64 {
    let n = ord.len();
    if n == 1 {
        return ord[0];
    }
    let pos = q.max(0.0).min(1.0) * (n - 1) as f64;
    let (lower, upper) = (pos.floor() as usize, pos.ceil() as usize);
    let frac = pos - lower as f64;
    if lower == upper {
        ord[lower]
    } else {
        ord[lower] + (ord[upper] - ord[lower]) * frac
    }
}

#[test]
fn percentile_interpolation() {
    let s = [4.0, 1.0, 3.0, 2.0, 5.0];
    assert_eq!(percentile(&s, 0.0), Some(1.0));
    assert_eq!(percentile(&s, 1.0), Some(5.0));
    assert_eq!(percentile(&s, 0.5), Some(3.0));
    assert!((percentile(&s, 0.05).unwrap() - 1.2).abs() < 1E-12);
    assert!((percentile(&s, 0.95).unwrap() - 4.8).abs() < 1E-12);
    assert_eq!(percentile(&[], 0.5), None);
}
