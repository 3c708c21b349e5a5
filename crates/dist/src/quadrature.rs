//! Adaptive Gauss–Kronrod quadrature.
//!
//! The integrator repeatedly bisects the sub-interval with the largest error
//! estimate until the summed estimate meets the tolerance. Infinite ranges
//! are mapped onto `(0, 1]`:
//!
//! - `[a, ∞)` with `x = a + (1 - t) / t`
//! - `(-∞, b]` with `x = b - (1 - t) / t`
//! - `(-∞, ∞)` folded onto `[0, ∞)` as `f(x) + f(-x)`
//!
//! Kronrod nodes never touch the ends of a segment, so the singular end of
//! each map is never evaluated.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::DistError;

/// Something that can compute a definite integral of a scalar function.
///
/// Either bound may be infinite.
pub trait Integrator {
    fn integrate(&self, f: &dyn Fn(f64) -> f64, lower: f64, upper: f64) -> f64;
}

impl<I: Integrator + ?Sized> Integrator for &I {
    fn integrate(&self, f: &dyn Fn(f64) -> f64, lower: f64, upper: f64) -> f64 {
        (**self).integrate(f, lower, upper)
    }
}

/// Tolerances and work limit for [`GaussKronrod`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadratureConfig {
    /// Absolute error target.
    pub abs_tolerance: f64,
    /// Error target relative to the magnitude of the integral.
    pub rel_tolerance: f64,
    /// Maximum number of segments before giving up on the tolerance.
    pub max_subdivisions: usize,
}

impl QuadratureConfig {
    /// # Errors
    /// Returns an error if a tolerance is negative or not finite.
    pub fn validate(&self) -> Result<(), DistError> {
        for (name, value) in [
            ("abs_tolerance", self.abs_tolerance),
            ("rel_tolerance", self.rel_tolerance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(DistError::invalid(
                    name,
                    format!("expected a finite, non-negative tolerance, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            abs_tolerance: 1e-12,
            rel_tolerance: 1e-10,
            max_subdivisions: 500,
        }
    }
}

/// Result of an integration, with its error estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integral {
    pub value: f64,
    pub abs_error: f64,
    /// Number of segments in the final partition.
    pub subdivisions: usize,
    /// Whether the error estimate met the tolerance.
    pub converged: bool,
}

impl Integral {
    fn exact(value: f64) -> Self {
        Self {
            value,
            abs_error: 0.0,
            subdivisions: 0,
            converged: true,
        }
    }
}

/// Globally adaptive 21-point Gauss–Kronrod integrator.
///
/// # Example
///
/// ```rust
/// use bayesfactor_dist::{Density, GaussKronrod, Integrator};
///
/// let normal = Density::normal(0.0, 1.0).unwrap();
/// let gk = GaussKronrod::default();
///
/// let total = gk.integrate(&|x| normal.pdf(x), f64::NEG_INFINITY, f64::INFINITY);
/// assert!((total - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GaussKronrod {
    config: QuadratureConfig,
}

impl GaussKronrod {
    pub fn new(config: QuadratureConfig) -> Self {
        Self {
            config: QuadratureConfig {
                max_subdivisions: config.max_subdivisions.max(1),
                ..config
            },
        }
    }

    pub fn config(&self) -> &QuadratureConfig {
        &self.config
    }

    /// Integrate `f` over `[lower, upper]`, reporting the error estimate.
    ///
    /// `lower > upper` gives the negated integral over `[upper, lower]`;
    /// a NaN bound gives a NaN value.
    pub fn integrate_with_error(&self, f: &dyn Fn(f64) -> f64, lower: f64, upper: f64) -> Integral {
        if lower.is_nan() || upper.is_nan() {
            return Integral {
                converged: false,
                ..Integral::exact(f64::NAN)
            };
        }
        if lower == upper {
            return Integral::exact(0.0);
        }
        if lower > upper {
            let flipped = self.integrate_with_error(f, upper, lower);
            return Integral {
                value: -flipped.value,
                ..flipped
            };
        }

        let result = match (lower.is_finite(), upper.is_finite()) {
            (true, true) => self.adapt(f, lower, upper),
            (true, false) => self.adapt(
                &|t: f64| f(lower + (1.0 - t) / t) / (t * t),
                0.0,
                1.0,
            ),
            (false, true) => self.adapt(
                &|t: f64| f(upper - (1.0 - t) / t) / (t * t),
                0.0,
                1.0,
            ),
            (false, false) => self.adapt(
                &|t: f64| {
                    let x = (1.0 - t) / t;
                    (f(x) + f(-x)) / (t * t)
                },
                0.0,
                1.0,
            ),
        };

        if result.converged {
            debug!(
                lower,
                upper,
                value = result.value,
                abs_error = result.abs_error,
                subdivisions = result.subdivisions,
                "integral converged"
            );
        } else {
            warn!(
                lower,
                upper,
                value = result.value,
                abs_error = result.abs_error,
                subdivisions = result.subdivisions,
                "integral did not reach tolerance"
            );
        }
        result
    }

    fn adapt(&self, f: &dyn Fn(f64) -> f64, lower: f64, upper: f64) -> Integral {
        let mut segments = vec![kronrod21(f, lower, upper)];

        loop {
            let value: f64 = segments.iter().map(|s| s.value).sum();
            let abs_error: f64 = segments.iter().map(|s| s.error).sum();
            let tolerance = self
                .config
                .abs_tolerance
                .max(self.config.rel_tolerance * value.abs());

            let done = |converged| Integral {
                value,
                abs_error,
                subdivisions: segments.len(),
                converged,
            };

            if abs_error <= tolerance {
                return done(true);
            }
            if segments.len() >= self.config.max_subdivisions {
                return done(false);
            }

            let worst = segments
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.error.total_cmp(&b.error))
                .map(|(i, _)| i)
                .unwrap_or(0);
            let segment = segments.swap_remove(worst);
            let mid = 0.5 * (segment.lower + segment.upper);

            // Floating point can no longer separate the ends.
            if mid <= segment.lower || mid >= segment.upper {
                segments.push(segment);
                let value: f64 = segments.iter().map(|s| s.value).sum();
                let abs_error: f64 = segments.iter().map(|s| s.error).sum();
                return Integral {
                    value,
                    abs_error,
                    subdivisions: segments.len(),
                    converged: false,
                };
            }

            segments.push(kronrod21(f, segment.lower, mid));
            segments.push(kronrod21(f, mid, segment.upper));
        }
    }
}

impl Integrator for GaussKronrod {
    fn integrate(&self, f: &dyn Fn(f64) -> f64, lower: f64, upper: f64) -> f64 {
        self.integrate_with_error(f, lower, upper).value
    }
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    lower: f64,
    upper: f64,
    value: f64,
    error: f64,
}

/// Kronrod abscissae on `[-1, 1]`, descending; odd indices are the 10-point
/// Gauss nodes.
#[allow(clippy::excessive_precision)]
const XGK: [f64; 11] = [
    0.995_657_163_025_808_080_735_527_280_689_003,
    0.973_906_528_517_171_720_077_964_012_084_452,
    0.930_157_491_355_708_226_001_207_180_059_508,
    0.865_063_366_688_984_510_732_096_688_423_493,
    0.780_817_726_586_416_897_063_717_578_345_042,
    0.679_409_568_299_024_406_234_327_365_114_874,
    0.562_757_134_668_604_683_339_000_099_272_694,
    0.433_395_394_129_247_190_799_265_943_165_784,
    0.294_392_862_701_460_198_131_126_603_103_866,
    0.148_874_338_981_631_210_884_826_001_129_720,
    0.0,
];

#[allow(clippy::excessive_precision)]
const WGK: [f64; 11] = [
    0.011_694_638_867_371_874_278_064_396_062_192,
    0.032_558_162_307_964_727_478_818_972_459_390,
    0.054_755_896_574_351_996_031_381_300_244_580,
    0.075_039_674_810_919_952_767_043_140_916_190,
    0.093_125_454_583_697_605_535_065_465_083_366,
    0.109_387_158_802_297_641_899_210_590_325_805,
    0.123_491_976_262_065_851_077_208_037_707_526,
    0.134_709_217_311_473_325_928_054_001_771_707,
    0.142_775_938_577_060_080_797_094_273_138_717,
    0.147_739_104_901_338_491_374_841_515_972_068,
    0.149_445_554_002_916_905_664_936_468_389_821,
];

/// Gauss weights for `XGK[1], XGK[3], .., XGK[9]`.
#[allow(clippy::excessive_precision)]
const WG: [f64; 5] = [
    0.066_671_344_308_688_137_593_568_809_893_332,
    0.149_451_349_150_580_593_145_776_339_657_697,
    0.219_086_362_515_982_043_995_534_934_228_163,
    0.269_266_719_309_996_355_091_226_921_569_469,
    0.295_524_224_714_752_870_173_892_994_651_338,
];

fn kronrod21(f: &dyn Fn(f64) -> f64, lower: f64, upper: f64) -> Segment {
    let center = 0.5 * (lower + upper);
    let half = 0.5 * (upper - lower);

    let mut kronrod = WGK[10] * f(center);
    let mut gauss = 0.0;
    for (k, (&x, &w)) in XGK[..10].iter().zip(WGK[..10].iter()).enumerate() {
        let dx = half * x;
        let pair = f(center - dx) + f(center + dx);
        kronrod += w * pair;
        if k % 2 == 1 {
            gauss += WG[k / 2] * pair;
        }
    }

    Segment {
        lower,
        upper,
        value: kronrod * half,
        error: ((kronrod - gauss) * half).abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::Density;
    use std::f64::consts::PI;

    fn gk() -> GaussKronrod {
        GaussKronrod::default()
    }

    #[test]
    fn test_weights_sum_to_interval_length() {
        let kronrod: f64 = 2.0 * WGK[..10].iter().sum::<f64>() + WGK[10];
        let gauss: f64 = 2.0 * WG.iter().sum::<f64>();
        assert!((kronrod - 2.0).abs() < 1e-14);
        assert!((gauss - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_polynomial_is_exact() {
        // x^5 - 3x^2 + 1 on [0, 2]: 64/6 - 8 + 2
        let result = gk().integrate_with_error(&|x| x.powi(5) - 3.0 * x * x + 1.0, 0.0, 2.0);
        assert!(result.converged);
        assert_eq!(result.subdivisions, 1);
        assert!((result.value - (64.0 / 6.0 - 6.0)).abs() < 1e-12);
    }

    #[test]
    fn test_reversed_and_empty_bounds() {
        let f = |x: f64| x * x;
        assert_eq!(gk().integrate(&f, 1.0, 1.0), 0.0);
        let forward = gk().integrate(&f, 0.0, 3.0);
        let backward = gk().integrate(&f, 3.0, 0.0);
        assert!((forward - 9.0).abs() < 1e-12);
        assert!((forward + backward).abs() < 1e-12);
        assert!(gk().integrate(&f, f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_normal_over_real_line() {
        let d = Density::normal(2.0, 0.5).unwrap();
        let total = gk().integrate(&|x| d.pdf(x), f64::NEG_INFINITY, f64::INFINITY);
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cauchy_heavy_tails() {
        let d = Density::cauchy(0.0, 1.0).unwrap();
        let total = gk().integrate(&|x| d.pdf(x), f64::NEG_INFINITY, f64::INFINITY);
        assert!((total - 1.0).abs() < 1e-8);

        // P(X >= 1) = 1/4 for the standard Cauchy.
        let tail = gk().integrate(&|x| d.pdf(x), 1.0, f64::INFINITY);
        assert!((tail - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_left_half_line() {
        // ∫_{-∞}^{0} e^{x} dx = 1
        let total = gk().integrate(&|x: f64| x.exp(), f64::NEG_INFINITY, 0.0);
        assert!((total - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_discontinuity_is_refined() {
        // Step at x = 1/π.
        let step = |x: f64| if x < 1.0 / PI { 0.0 } else { 1.0 };
        let result = gk().integrate_with_error(&step, 0.0, 1.0);
        assert!((result.value - (1.0 - 1.0 / PI)).abs() < 1e-9);
        assert!(result.subdivisions > 1);
    }

    #[test]
    fn test_subdivision_limit_reports_non_convergence() {
        let gk = GaussKronrod::new(QuadratureConfig {
            max_subdivisions: 2,
            ..QuadratureConfig::default()
        });
        let step = |x: f64| if x < 1.0 / PI { 0.0 } else { 1.0 };
        let result = gk.integrate_with_error(&step, 0.0, 1.0);
        assert!(!result.converged);
        assert!(result.subdivisions <= 2);
    }

    #[test]
    fn test_zero_max_subdivisions_is_clamped() {
        let gk = GaussKronrod::new(QuadratureConfig {
            max_subdivisions: 0,
            ..QuadratureConfig::default()
        });
        assert_eq!(gk.config().max_subdivisions, 1);
        assert!((gk.integrate(&|x| x, 0.0, 1.0) - 0.5).abs() < 1e-14);
    }

    #[test]
    fn test_by_reference() {
        fn total(i: impl Integrator) -> f64 {
            i.integrate(&|_| 1.0, 0.0, 4.0)
        }
        let gk = gk();
        assert!((total(&gk) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_config_validation() {
        assert!(QuadratureConfig::default().validate().is_ok());

        let zero_abs = QuadratureConfig {
            abs_tolerance: 0.0,
            ..QuadratureConfig::default()
        };
        assert!(zero_abs.validate().is_ok());

        for bad in [f64::NAN, -1e-12, f64::INFINITY] {
            let config = QuadratureConfig {
                rel_tolerance: bad,
                ..QuadratureConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(DistError::InvalidParameter { ref name, .. }) if name == "rel_tolerance"
            ));
        }
    }
}
