//! Vector helpers for object locations

/// Euclidean distance between two points of equal dimensionality
#[inline]
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Linear blend `p0 * (1 - t) + p1 * t`
#[inline]
pub fn lerp(p0: &[f64], p1: &[f64], t: f64) -> Vec<f64> {
    p0.iter()
        .zip(p1)
        .map(|(a, b)| a * (1.0 - t) + b * t)
        .collect()
}
