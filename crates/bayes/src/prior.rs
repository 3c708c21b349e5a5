//! Prior densities over the unknown parameter.
//!
//! Location-scale priors (Cauchy, normal, Student-t) may be truncated to an
//! interval and are renormalised so they still integrate to one:
//!
//! | truncation | normalising constant |
//! |---|---|
//! | `(-∞, ∞)` | `1` |
//! | `[0, ∞)` or `(-∞, 0]` | `2` |
//! | anything else | `1 / ∫ density` over the interval |
//!
//! The constant `2` for a half-line is exact only when the prior is centred
//! on zero. It is applied whatever the location, so a half-line prior with a
//! non-zero location does not integrate to one; callers wanting a shifted
//! one-sided prior should truncate at a non-zero bound, which goes through
//! the integrated branch. A warning is logged when this happens.
//!
//! Beta and uniform priors are normalised on their own support. A point
//! prior puts all its mass on one value and is never integrated.

use std::fmt;
use std::sync::Arc;

use bayesfactor_dist::{Density, DistError, Integrator};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::curve::{sample_curve, CurvePoint};
use crate::error::{take_params, BayesError};
use crate::family::PriorFamily;
use crate::interval::Interval;
use crate::likelihood::ParamFn;

/// A hypothesis about the parameter: a prior family and its parameters.
///
/// Truncation bounds are the trailing `min, max` parameters of the Cauchy,
/// normal and Student-t families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorSpec {
    pub family: PriorFamily,
    pub params: Vec<f64>,
}

impl PriorSpec {
    pub fn new(family: PriorFamily, params: impl Into<Vec<f64>>) -> Self {
        Self {
            family,
            params: params.into(),
        }
    }

    /// Look the family up by name.
    ///
    /// # Errors
    /// Returns [`BayesError::UnknownFamily`] for an unrecognised name.
    pub fn named(family: &str, params: impl Into<Vec<f64>>) -> Result<Self, BayesError> {
        Ok(Self::new(family.parse()?, params))
    }

    pub fn cauchy(location: f64, scale: f64, min: f64, max: f64) -> Self {
        Self::new(PriorFamily::Cauchy, [location, scale, min, max])
    }

    pub fn normal(mean: f64, sd: f64, min: f64, max: f64) -> Self {
        Self::new(PriorFamily::Normal, [mean, sd, min, max])
    }

    pub fn student_t(mean: f64, sd: f64, df: f64, min: f64, max: f64) -> Self {
        Self::new(PriorFamily::StudentT, [mean, sd, df, min, max])
    }

    pub fn beta(alpha: f64, beta: f64) -> Self {
        Self::new(PriorFamily::Beta, [alpha, beta])
    }

    pub fn uniform(lower: f64, upper: f64) -> Self {
        Self::new(PriorFamily::Uniform, [lower, upper])
    }

    pub fn point(value: f64) -> Self {
        Self::new(PriorFamily::Point, [value])
    }
}

/// How a prior was brought to unit mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// Untruncated density.
    Untruncated,
    /// Truncated to a half-line at zero; doubled.
    HalfLine,
    /// Truncated to a general interval; divided by the mass `auc` it keeps.
    Integrated { auc: f64 },
    /// Normalised on its own support (beta, uniform).
    Intrinsic,
    /// Point mass.
    Point,
}

impl Normalization {
    /// The factor applied to the raw density.
    pub fn constant(&self) -> f64 {
        match self {
            Self::HalfLine => 2.0,
            Self::Integrated { auc } => 1.0 / auc,
            Self::Untruncated | Self::Intrinsic | Self::Point => 1.0,
        }
    }
}

/// A prior density, or a point mass.
#[derive(Clone)]
pub struct Prior {
    family: PriorFamily,
    eval: ParamFn,
    support: Interval,
    normalization: Normalization,
    point: Option<f64>,
}

impl Prior {
    /// Prior density at `x`. For a point prior this is the indicator of the
    /// point, which is not a density and must not be integrated.
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.eval)(x)
    }

    pub fn family(&self) -> PriorFamily {
        self.family
    }

    /// Where the prior has mass. A single point for a point prior.
    pub fn support(&self) -> Interval {
        self.support
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// The location of a point prior; `None` for every other family.
    pub fn point_value(&self) -> Option<f64> {
        self.point
    }

    /// Sample the prior on a grid, e.g. for plotting.
    pub fn curve(&self, min: f64, max: f64, points: usize) -> Vec<CurvePoint> {
        sample_curve(|x| self.evaluate(x), min, max, points)
    }

    pub(crate) fn function(&self) -> ParamFn {
        Arc::clone(&self.eval)
    }
}

impl fmt::Debug for Prior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prior")
            .field("family", &self.family)
            .field("support", &self.support)
            .field("normalization", &self.normalization)
            .field("point", &self.point)
            .finish_non_exhaustive()
    }
}

/// Build the prior described by `spec`.
///
/// The integrator is only used for truncation intervals other than the real
/// line and the two half-lines at zero.
///
/// # Errors
///
/// - [`BayesError::MalformedParams`] if the parameter count is wrong
/// - [`BayesError::InvalidInterval`] if `min < max` does not hold
/// - [`BayesError::InvalidParameter`] if a distribution parameter is invalid
/// - [`BayesError::ZeroMass`] if the truncation interval holds no mass
///
/// # Example
///
/// ```rust
/// use bayesfactor::{build_prior, GaussKronrod, Normalization, PriorSpec};
///
/// let gk = GaussKronrod::default();
///
/// // Half-normal: doubled, no integration needed.
/// let half = build_prior(&PriorSpec::normal(0.0, 1.0, 0.0, f64::INFINITY), &gk).unwrap();
/// assert_eq!(half.normalization(), Normalization::HalfLine);
/// assert_eq!(half.evaluate(-0.1), 0.0);
///
/// // Truncated to [0, 1]: renormalised by the mass it keeps (about 0.3413).
/// let unit = build_prior(&PriorSpec::normal(0.0, 1.0, 0.0, 1.0), &gk).unwrap();
/// assert!((1.0 / unit.normalization().constant() - 0.341_344_746).abs() < 1e-8);
/// ```
pub fn build_prior(spec: &PriorSpec, integrator: &dyn Integrator) -> Result<Prior, BayesError> {
    let family = spec.family;
    let params = spec.params.as_slice();

    let prior = match family {
        PriorFamily::Cauchy => {
            let [location, scale, min, max] = take_params::<4>(family, params)?;
            let bounds = Interval::new(min, max)?;
            let density = Density::cauchy(location, scale)?;
            truncated(family, density, location, bounds, integrator)?
        }
        PriorFamily::Normal => {
            let [mean, sd, min, max] = take_params::<4>(family, params)?;
            let bounds = Interval::new(min, max)?;
            let density = Density::normal(mean, sd)?;
            truncated(family, density, mean, bounds, integrator)?
        }
        PriorFamily::StudentT => {
            let [mean, sd, df, min, max] = take_params::<5>(family, params)?;
            let bounds = Interval::new(min, max)?;
            let density = Density::student_t(mean, sd, df)?;
            truncated(family, density, mean, bounds, integrator)?
        }
        PriorFamily::Beta => {
            let [alpha, beta] = take_params::<2>(family, params)?;
            let density = Density::beta(alpha, beta)?;
            let support = Interval::UNIT;
            Prior {
                family,
                eval: Arc::new(move |x| density.pdf(x) * support.indicator(x)),
                support,
                normalization: Normalization::Intrinsic,
                point: None,
            }
        }
        PriorFamily::Uniform => {
            let [lower, upper] = take_params::<2>(family, params)?;
            let density = Density::uniform(lower, upper)?;
            Prior {
                family,
                eval: Arc::new(move |x| density.pdf(x)),
                support: Interval::new(lower, upper)?,
                normalization: Normalization::Intrinsic,
                point: None,
            }
        }
        PriorFamily::Point => {
            let [value] = take_params::<1>(family, params)?;
            if !value.is_finite() {
                return Err(DistError::InvalidParameter {
                    name: "point(value)".to_string(),
                    reason: format!("expected a finite value, got {value}"),
                }
                .into());
            }
            Prior {
                family,
                eval: Arc::new(move |x| if x == value { 1.0 } else { 0.0 }),
                support: Interval::point(value),
                normalization: Normalization::Point,
                point: Some(value),
            }
        }
    };

    debug!(
        %family,
        params = ?spec.params,
        normalization = ?prior.normalization,
        "built prior"
    );
    Ok(prior)
}

fn truncated(
    family: PriorFamily,
    density: Density,
    location: f64,
    bounds: Interval,
    integrator: &dyn Integrator,
) -> Result<Prior, BayesError> {
    if bounds.is_real_line() {
        return Ok(Prior {
            family,
            eval: Arc::new(move |x| density.pdf(x)),
            support: bounds,
            normalization: Normalization::Untruncated,
            point: None,
        });
    }

    let normalization = if bounds.is_half_line_at_zero() {
        if location != 0.0 {
            warn!(
                %family,
                location,
                min = bounds.min,
                max = bounds.max,
                "half-line prior is doubled as if centred on zero; it will not integrate to one"
            );
        }
        Normalization::HalfLine
    } else {
        let masked = |x: f64| density.pdf(x) * bounds.indicator(x);
        let auc = integrator.integrate(&masked, bounds.min, bounds.max);
        if !(auc > 0.0 && auc.is_finite()) {
            return Err(BayesError::ZeroMass {
                min: bounds.min,
                max: bounds.max,
            });
        }
        Normalization::Integrated { auc }
    };

    let k = normalization.constant();
    Ok(Prior {
        family,
        eval: Arc::new(move |x| density.pdf(x) * bounds.indicator(x) * k),
        support: bounds,
        normalization,
        point: None,
    })
}
