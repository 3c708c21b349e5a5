//! Closed intervals of the parameter space.

use crate::error::BayesError;

/// A closed interval `[min, max]`; either end may be infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// `(-∞, ∞)`
    pub const REAL_LINE: Self = Self {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// `[0, 1]`, the domain of a probability.
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    /// # Errors
    /// Returns [`BayesError::InvalidInterval`] unless `min < max`.
    pub fn new(min: f64, max: f64) -> Result<Self, BayesError> {
        // Also rejects NaN.
        if !(min < max) {
            return Err(BayesError::InvalidInterval { min, max });
        }
        Ok(Self { min, max })
    }

    /// The degenerate interval `[value, value]`.
    pub fn point(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Inclusive at both ends.
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// `1.0` inside the interval, `0.0` outside.
    pub fn indicator(&self, x: f64) -> f64 {
        if self.contains(x) {
            1.0
        } else {
            0.0
        }
    }

    pub fn is_real_line(&self) -> bool {
        self.min == f64::NEG_INFINITY && self.max == f64::INFINITY
    }

    /// `[0, ∞)` or `(-∞, 0]`.
    pub fn is_half_line_at_zero(&self) -> bool {
        (self.min == 0.0 && self.max == f64::INFINITY)
            || (self.min == f64::NEG_INFINITY && self.max == 0.0)
    }

    /// The overlap of two intervals, or `None` if it has zero length.
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min < max).then_some(Interval { min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_unordered() {
        assert!(Interval::new(0.0, 1.0).is_ok());
        assert!(matches!(
            Interval::new(1.0, 1.0),
            Err(BayesError::InvalidInterval { .. })
        ));
        assert!(Interval::new(2.0, 1.0).is_err());
        assert!(Interval::new(f64::NAN, 1.0).is_err());
        assert!(Interval::new(f64::INFINITY, f64::INFINITY).is_err());
    }

    #[test]
    fn test_indicator_is_inclusive() {
        let i = Interval::new(0.0, 1.0).unwrap();
        assert_eq!(i.indicator(0.0), 1.0);
        assert_eq!(i.indicator(1.0), 1.0);
        assert_eq!(i.indicator(0.5), 1.0);
        assert_eq!(i.indicator(-1e-12), 0.0);
        assert_eq!(i.indicator(f64::NAN), 0.0);
    }

    #[test]
    fn test_shapes() {
        assert!(Interval::REAL_LINE.is_real_line());
        assert!(Interval::new(0.0, f64::INFINITY).unwrap().is_half_line_at_zero());
        assert!(Interval::new(f64::NEG_INFINITY, 0.0).unwrap().is_half_line_at_zero());
        assert!(!Interval::new(1.0, f64::INFINITY).unwrap().is_half_line_at_zero());
        assert!(!Interval::UNIT.is_half_line_at_zero());
    }

    #[test]
    fn test_intersect() {
        let half = Interval::new(0.0, f64::INFINITY).unwrap();
        assert_eq!(Interval::REAL_LINE.intersect(&half), Some(half));
        assert_eq!(Interval::UNIT.intersect(&half), Some(Interval::UNIT));

        let far = Interval::new(2.0, 3.0).unwrap();
        assert_eq!(Interval::UNIT.intersect(&far), None);
        // Touching at one point has zero length.
        let touching = Interval::new(1.0, 2.0).unwrap();
        assert_eq!(Interval::UNIT.intersect(&touching), None);
    }
}
