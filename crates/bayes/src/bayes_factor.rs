//! Comparing two hypotheses about the same data.

use bayesfactor_dist::{GaussKronrod, Integrator};
use tracing::{debug, warn};

use crate::error::BayesError;
use crate::likelihood::{build_likelihood, LikelihoodSpec};
use crate::predictive::{predictive, Predictive};
use crate::prior::{build_prior, PriorSpec};

/// The evidence for the alternative hypothesis relative to the null.
///
/// Values above one favour the alternative.
#[derive(Debug, Clone)]
pub struct BayesFactor {
    alternative: Predictive,
    null: Predictive,
}

impl BayesFactor {
    /// `alternative.marginal_likelihood / null.marginal_likelihood`.
    ///
    /// May be infinite or NaN when a marginal likelihood is zero.
    pub fn value(&self) -> f64 {
        self.alternative.marginal_likelihood() / self.null.marginal_likelihood()
    }

    /// Natural log of [`Self::value`].
    pub fn ln(&self) -> f64 {
        self.alternative.marginal_likelihood().ln() - self.null.marginal_likelihood().ln()
    }

    /// The value, or an error if it is not finite.
    ///
    /// # Errors
    /// Returns [`BayesError::NonFiniteResult`] for NaN or infinite values.
    pub fn finite(&self) -> Result<f64, BayesError> {
        let value = self.value();
        if value.is_finite() {
            Ok(value)
        } else {
            Err(BayesError::NonFiniteResult { value })
        }
    }

    /// The evidence for the null relative to the alternative.
    pub fn inverse(&self) -> BayesFactor {
        BayesFactor {
            alternative: self.null.clone(),
            null: self.alternative.clone(),
        }
    }

    pub fn alternative(&self) -> &Predictive {
        &self.alternative
    }

    pub fn null(&self) -> &Predictive {
        &self.null
    }
}

/// Compare two priors for the same data with the given integrator.
///
/// The likelihood and both priors are built and validated before either
/// marginal likelihood is computed.
///
/// # Errors
///
/// Any error from [`build_likelihood`] or [`build_prior`].
pub fn compare(
    likelihood: &LikelihoodSpec,
    alternative: &PriorSpec,
    null: &PriorSpec,
    integrator: &dyn Integrator,
) -> Result<BayesFactor, BayesError> {
    let likelihood = build_likelihood(likelihood)?;
    let alt_prior = build_prior(alternative, integrator)?;
    let null_prior = build_prior(null, integrator)?;

    let bf = BayesFactor {
        alternative: predictive(&likelihood, &alt_prior, integrator),
        null: predictive(&likelihood, &null_prior, integrator),
    };

    let value = bf.value();
    if value.is_finite() {
        debug!(
            value,
            alternative = bf.alternative.marginal_likelihood(),
            null = bf.null.marginal_likelihood(),
            "computed Bayes factor"
        );
    } else {
        warn!(
            value,
            alternative = bf.alternative.marginal_likelihood(),
            null = bf.null.marginal_likelihood(),
            "Bayes factor is not finite"
        );
    }
    Ok(bf)
}

/// Bayes factor of `alternative` over `null` for the observed data, using
/// the default [`GaussKronrod`] integrator.
///
/// # Errors
///
/// Any error from [`build_likelihood`] or [`build_prior`]. A non-finite
/// ratio is returned as a value; use [`compare`] and
/// [`BayesFactor::finite`] to reject it.
///
/// # Example
///
/// ```rust
/// use bayesfactor::{bayes_factor, LikelihoodSpec, PriorSpec};
///
/// // 8 of 11, Beta(2.5, 1) against a fair coin.
/// let bf = bayes_factor(
///     &LikelihoodSpec::binomial(8.0, 11.0),
///     &PriorSpec::beta(2.5, 1.0),
///     &PriorSpec::point(0.5),
/// )
/// .unwrap();
/// assert!((bf * 0.663_299_6 - 1.0).abs() < 1e-4);
/// ```
pub fn bayes_factor(
    likelihood: &LikelihoodSpec,
    alternative: &PriorSpec,
    null: &PriorSpec,
) -> Result<f64, BayesError> {
    compare(likelihood, alternative, null, &GaussKronrod::default()).map(|bf| bf.value())
}
