//! Sampling functions on a grid for plotting.

use serde::{Deserialize, Serialize};

/// One sample `(x, f(x))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Evaluate `f` at `points` evenly spaced values from `min` to `max`,
/// both ends included.
///
/// Returns an empty curve if either end is not finite.
///
/// # Example
///
/// ```rust
/// use bayesfactor::sample_curve;
///
/// let curve = sample_curve(|x| x * x, 0.0, 2.0, 3);
/// let ys: Vec<f64> = curve.iter().map(|p| p.y).collect();
/// assert_eq!(ys, vec![0.0, 1.0, 4.0]);
/// ```
pub fn sample_curve(f: impl Fn(f64) -> f64, min: f64, max: f64, points: usize) -> Vec<CurvePoint> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let step = if points > 1 {
        (max - min) / (points - 1) as f64
    } else {
        0.0
    };
    (0..points)
        .map(|i| {
            // Pin the last point so rounding never overshoots `max`.
            let x = if i + 1 == points && points > 1 {
                max
            } else {
                min + i as f64 * step
            };
            CurvePoint { x, y: f(x) }
        })
        .collect()
}
