//! Likelihood functions of the unknown parameter.
//!
//! A likelihood fixes the observed data and varies the parameter: for a
//! binomial observation of 8 successes in 11 trials it is the map
//! `p ↦ P(8 of 11 | p)`. Its family decides the integration domain later.

use std::fmt;
use std::sync::Arc;

use bayesfactor_dist::{BinomialMass, Density, NoncentralT};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::{sample_curve, CurvePoint};
use crate::error::{take_params, BayesError};
use crate::family::LikelihoodFamily;
use crate::interval::Interval;

/// A reusable, thread-safe function of the unknown parameter.
pub(crate) type ParamFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Observed data: a likelihood family and its parameters.
///
/// # Example
///
/// ```rust
/// use bayesfactor::{LikelihoodFamily, LikelihoodSpec};
///
/// let by_name = LikelihoodSpec::named("binomial", [8.0, 11.0]).unwrap();
/// assert_eq!(by_name, LikelihoodSpec::binomial(8.0, 11.0));
/// assert_eq!(by_name.family, LikelihoodFamily::Binomial);
///
/// assert!(LikelihoodSpec::named("bogus", Vec::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikelihoodSpec {
    pub family: LikelihoodFamily,
    pub params: Vec<f64>,
}

impl LikelihoodSpec {
    pub fn new(family: LikelihoodFamily, params: impl Into<Vec<f64>>) -> Self {
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

    /// A normally distributed estimate with standard error `sd`.
    pub fn normal(mean: f64, sd: f64) -> Self {
        Self::new(LikelihoodFamily::Normal, [mean, sd])
    }

    pub fn student_t(mean: f64, sd: f64, df: f64) -> Self {
        Self::new(LikelihoodFamily::StudentT, [mean, sd, df])
    }

    /// An observed t statistic; the parameter is its noncentrality.
    pub fn noncentral_t(t: f64, df: f64) -> Self {
        Self::new(LikelihoodFamily::NoncentralT, [t, df])
    }

    /// An observed standardized effect size; the parameter is the true
    /// effect size.
    pub fn noncentral_d(d: f64, df: f64) -> Self {
        Self::new(LikelihoodFamily::NoncentralD, [d, df])
    }

    pub fn binomial(successes: f64, trials: f64) -> Self {
        Self::new(LikelihoodFamily::Binomial, [successes, trials])
    }
}

/// The likelihood of the observed data as a function of the parameter.
#[derive(Clone)]
pub struct Likelihood {
    family: LikelihoodFamily,
    eval: ParamFn,
}

impl Likelihood {
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.eval)(x)
    }

    pub fn family(&self) -> LikelihoodFamily {
        self.family
    }

    /// Where the parameter lives: `[0, 1]` for a binomial success
    /// probability, the real line otherwise.
    pub fn domain(&self) -> Interval {
        match self.family {
            LikelihoodFamily::Binomial => Interval::UNIT,
            _ => Interval::REAL_LINE,
        }
    }

    /// Sample the likelihood on a grid, e.g. for plotting.
    pub fn curve(&self, min: f64, max: f64, points: usize) -> Vec<CurvePoint> {
        sample_curve(|x| self.evaluate(x), min, max, points)
    }

    pub(crate) fn function(&self) -> ParamFn {
        Arc::clone(&self.eval)
    }
}

impl fmt::Debug for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Likelihood")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

/// Build the likelihood function described by `spec`.
///
/// # Errors
///
/// - [`BayesError::MalformedParams`] if the parameter count is wrong
/// - [`BayesError::InvalidParameter`] if a parameter is outside its domain
///   (non-positive sd or df, non-integral counts, more successes than
///   trials)
///
/// # Example
///
/// ```rust
/// use bayesfactor::{build_likelihood, LikelihoodSpec};
///
/// let coin = build_likelihood(&LikelihoodSpec::binomial(2.0, 10.0)).unwrap();
/// // C(10, 2) / 2^10
/// assert!((coin.evaluate(0.5) - 45.0 / 1024.0).abs() < 1e-12);
/// ```
pub fn build_likelihood(spec: &LikelihoodSpec) -> Result<Likelihood, BayesError> {
    let family = spec.family;
    let params = spec.params.as_slice();

    let eval: ParamFn = match family {
        LikelihoodFamily::Normal => {
            let [mean, sd] = take_params::<2>(family, params)?;
            let density = Density::normal(mean, sd)?;
            Arc::new(move |x| density.pdf(x))
        }
        LikelihoodFamily::StudentT => {
            let [mean, sd, df] = take_params::<3>(family, params)?;
            let density = Density::student_t(mean, sd, df)?;
            Arc::new(move |x| density.pdf(x))
        }
        LikelihoodFamily::NoncentralT => {
            let [t, df] = take_params::<2>(family, params)?;
            let nct = NoncentralT::new(df)?;
            Arc::new(move |x| nct.pdf(t, x))
        }
        LikelihoodFamily::NoncentralD => {
            let [d, df] = take_params::<2>(family, params)?;
            let nct = NoncentralT::new(df)?;
            let root = (df + 1.0).sqrt();
            let t = d * root;
            Arc::new(move |x| nct.pdf(t, root * x))
        }
        LikelihoodFamily::Binomial => {
            let [successes, trials] = take_params::<2>(family, params)?;
            let mass = BinomialMass::new(successes, trials)?;
            Arc::new(move |x| mass.pmf(x))
        }
    };

    debug!(%family, params = ?spec.params, "built likelihood");
    Ok(Likelihood { family, eval })
}
