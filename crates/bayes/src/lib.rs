//! # Bayesfactor - Evidence Between Two Hypotheses
//!
//! This crate computes Bayes factors for a single unknown parameter: the
//! ratio of the marginal likelihoods of the observed data under an
//! alternative and a null hypothesis, each expressed as a prior over the
//! parameter.
//!
//! ## Core Concepts
//!
//! - **Likelihood**: the observed data as a function of the parameter
//!   ([`build_likelihood`]); normal, Student-t, noncentral t, noncentral d
//!   and binomial families
//! - **Prior**: a hypothesis about the parameter ([`build_prior`]); Cauchy,
//!   normal and Student-t priors may be truncated to an interval and are
//!   renormalised, beta and uniform priors live on their own support, and a
//!   point prior puts all its mass on one value
//! - **Predictive**: `∫ likelihood · prior` over the parameter
//!   ([`predictive`]); a point prior is read straight off the likelihood
//! - **Bayes factor**: the ratio of the two marginal likelihoods
//!   ([`bayes_factor`], [`compare`]); above one favours the alternative
//! - **Analysis**: the same comparison described in a TOML file
//!   ([`Analysis`])
//!
//! Specs are validated when the functions are built, so a bad family name,
//! parameter count or truncation interval is reported before any integral
//! is computed.
//!
//! ## Example: is the effect larger than zero?
//!
//! ```rust
//! use bayesfactor::{bayes_factor, LikelihoodSpec, PriorSpec};
//!
//! // Observed mean difference 5.5 with standard error 32.35.
//! let data = LikelihoodSpec::normal(5.5, 32.35);
//!
//! // Alternative: a positive effect, half-normal with scale 13.3.
//! let positive = PriorSpec::normal(0.0, 13.3, 0.0, f64::INFINITY);
//! // Null: no effect.
//! let none = PriorSpec::point(0.0);
//!
//! let bf = bayes_factor(&data, &positive, &none).unwrap();
//! assert!((bf - 0.974_593_4).abs() < 1e-4);
//! ```

mod analysis;
mod bayes_factor;
mod curve;
mod error;
mod family;
mod interval;
mod likelihood;
mod predictive;
mod prior;

pub use analysis::Analysis;
pub use bayes_factor::{bayes_factor, compare, BayesFactor};
pub use curve::{sample_curve, CurvePoint};
pub use error::BayesError;
pub use family::{LikelihoodFamily, PriorFamily};
pub use interval::Interval;
pub use likelihood::{build_likelihood, Likelihood, LikelihoodSpec};
pub use predictive::{predictive, Predictive};
pub use prior::{build_prior, Normalization, Prior, PriorSpec};

pub use bayesfactor_dist::{GaussKronrod, Integral, Integrator, QuadratureConfig};
