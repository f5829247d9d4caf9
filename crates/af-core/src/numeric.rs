/// Floating point type used throughout system
pub type Real = f64;

/// Uniformly spaced values over `[start, end]`, both ends included.
///
/// A single point yields `[start]`; zero points yield an empty vector. The
/// last value is pinned to `end` so it never drifts by accumulated rounding.
pub fn linspace(start: Real, end: Real, num_points: usize) -> Vec<Real> {
    match num_points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let delta = (end - start) / (n - 1) as Real;
            let mut points: Vec<Real> = (0..n).map(|i| start + i as Real * delta).collect();
            points[n - 1] = end;
            points
        }
    }
}

/// Largest value of a sequence, ignoring NaN. Empty input gives `-inf`.
pub fn max_value(values: &[Real]) -> Real {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(Real::NEG_INFINITY, Real::max)
}
