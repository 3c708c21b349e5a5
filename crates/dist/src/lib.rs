//! # Dist - Densities and Quadrature
//!
//! The numeric collaborators of the Bayes factor engine:
//!
//! - **Densities**: validated normal, location-scale Student-t, Cauchy, beta
//!   and uniform densities ([`Density`]), backed by `statrs`
//! - **Noncentral t**: the density of a t statistic under a shifted mean
//!   ([`NoncentralT`]), which `statrs` does not provide
//! - **Binomial mass**: the probability of an observed count as a function of
//!   the success probability ([`BinomialMass`])
//! - **Quadrature**: an adaptive Gauss–Kronrod integrator over finite and
//!   infinite ranges behind the [`Integrator`] trait
//!
//! Construction validates parameters and returns [`DistError`]; evaluation
//! never fails.
//!
//! ## Example: probability of a one-sided tail
//!
//! ```rust
//! use bayesfactor_dist::{Density, GaussKronrod, Integrator};
//!
//! let t = Density::student_t(0.0, 1.0, 3.0).unwrap();
//! let gk = GaussKronrod::default();
//!
//! // The t distribution is symmetric, so half its mass is above zero.
//! let upper = gk.integrate(&|x| t.pdf(x), 0.0, f64::INFINITY);
//! assert!((upper - 0.5).abs() < 1e-9);
//! ```

mod density;
mod error;
mod noncentral;
mod quadrature;

pub use density::{binomial_pmf, BinomialMass, Density};
pub use error::DistError;
pub use noncentral::NoncentralT;
pub use quadrature::{GaussKronrod, Integral, Integrator, QuadratureConfig};
