//! Marginal likelihood of the data under one hypothesis.
//!
//! The predictive combines a likelihood and a prior into their product and
//! integrates it over the parameter. A point prior needs no integration:
//! the marginal likelihood is the likelihood at the point.

use std::fmt;
use std::sync::Arc;

use bayesfactor_dist::Integrator;
use tracing::debug;

use crate::curve::{sample_curve, CurvePoint};
use crate::interval::Interval;
use crate::likelihood::{Likelihood, ParamFn};
use crate::prior::Prior;

/// A likelihood paired with a prior, and the evidence they give.
#[derive(Clone)]
pub struct Predictive {
    likelihood: Likelihood,
    prior: Prior,
    product: ParamFn,
    marginal_likelihood: f64,
    bounds: Option<Interval>,
}

impl Predictive {
    /// `∫ likelihood(x) · prior(x) dx`, or `likelihood(point)` for a point
    /// prior.
    pub fn marginal_likelihood(&self) -> f64 {
        self.marginal_likelihood
    }

    /// `likelihood(x) · prior(x)`.
    pub fn product(&self, x: f64) -> f64 {
        (self.product)(x)
    }

    pub fn likelihood(&self) -> &Likelihood {
        &self.likelihood
    }

    pub fn prior(&self) -> &Prior {
        &self.prior
    }

    /// The range that was integrated; `None` when no integration took place.
    pub fn bounds(&self) -> Option<Interval> {
        self.bounds
    }

    /// Sample the product on a grid, e.g. for plotting.
    pub fn curve(&self, min: f64, max: f64, points: usize) -> Vec<CurvePoint> {
        sample_curve(|x| self.product(x), min, max, points)
    }
}

impl fmt::Debug for Predictive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictive")
            .field("likelihood", &self.likelihood)
            .field("prior", &self.prior)
            .field("marginal_likelihood", &self.marginal_likelihood)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

/// Combine `likelihood` and `prior` and compute the marginal likelihood.
///
/// The product is integrated over the likelihood's domain (`[0, 1]` for a
/// binomial, the real line otherwise) restricted to the prior's support.
/// If the two do not overlap the marginal likelihood is `0`.
///
/// # Example
///
/// ```rust
/// use bayesfactor::{
///     build_likelihood, build_prior, predictive, GaussKronrod, LikelihoodSpec, PriorSpec,
/// };
///
/// let gk = GaussKronrod::default();
/// let coin = build_likelihood(&LikelihoodSpec::binomial(2.0, 10.0)).unwrap();
///
/// // A point prior is read off the likelihood.
/// let fair = build_prior(&PriorSpec::point(0.5), &gk).unwrap();
/// let null = predictive(&coin, &fair, &gk);
/// assert_eq!(null.marginal_likelihood(), coin.evaluate(0.5));
/// assert!(null.bounds().is_none());
///
/// // A flat prior on [0, 1] gives 1 / (trials + 1).
/// let flat = build_prior(&PriorSpec::beta(1.0, 1.0), &gk).unwrap();
/// let alt = predictive(&coin, &flat, &gk);
/// assert!((alt.marginal_likelihood() - 1.0 / 11.0).abs() < 1e-10);
/// ```
pub fn predictive(likelihood: &Likelihood, prior: &Prior, integrator: &dyn Integrator) -> Predictive {
    let l = likelihood.function();
    let p = prior.function();
    let product: ParamFn = Arc::new(move |x| l(x) * p(x));

    let (marginal_likelihood, bounds) = match prior.point_value() {
        Some(value) => (likelihood.evaluate(value), None),
        None => match likelihood.domain().intersect(&prior.support()) {
            Some(bounds) => {
                let f = |x: f64| product(x);
                (integrator.integrate(&f, bounds.min, bounds.max), Some(bounds))
            }
            None => (0.0, None),
        },
    };

    debug!(
        likelihood = %likelihood.family(),
        prior = %prior.family(),
        marginal_likelihood,
        bounds = ?bounds,
        "computed predictive"
    );

    Predictive {
        likelihood: likelihood.clone(),
        prior: prior.clone(),
        product,
        marginal_likelihood,
        bounds,
    }
}
