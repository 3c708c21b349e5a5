//! The noncentral Student-t density.
//!
//! `statrs` has no noncentral t. When `t` and the noncentrality share a sign
//! it is evaluated from the series
//!
//! ```text
//! f(t; ν, μ) = exp(-μ²/2) / (√(νπ) Γ(ν/2)) · (ν / (ν + t²))^((ν+1)/2)
//!              · Σⱼ Γ((ν+j+1)/2) / j! · zʲ,        z = μ t √2 / √(ν + t²)
//! ```
//!
//! The terms are unimodal in `j`, so the sum starts at the largest term and
//! walks outward in both directions until the terms are negligible. Even and
//! odd terms are stepped separately because
//! `term(j+2) / term(j) = z² (ν+j+1) / (2 (j+1)(j+2))` needs no gamma calls.
//!
//! For `z < 0` the series alternates and cancels catastrophically, so the
//! density is integrated from its mixture form instead:
//!
//! ```text
//! f(t; ν, μ) = ∫₀^∞ s φ(t s − μ) g_ν(s) ds,      g_ν = density of √(χ²_ν / ν)
//! ```
//!
//! The integrand is log-concave in `s`; it is scaled by its peak before
//! integrating so tiny densities keep their relative precision.

use std::f64::consts::{LN_2, PI, SQRT_2};

use statrs::function::gamma::ln_gamma;

use crate::error::DistError;
use crate::quadrature::{GaussKronrod, Integrator, QuadratureConfig};

/// Terms below this fraction of the largest term are dropped.
const TERM_CUTOFF: f64 = 1e-17;

/// Below this log-density the result underflows `f64` anyway.
const LN_UNDERFLOW: f64 = -760.0;

/// The mixture integral stops where its log-integrand has fallen this far
/// below the peak.
const MIXTURE_SPAN: f64 = 50.0;

/// Tolerances for the mixture integral, whose integrand peaks at one.
const MIXTURE_QUADRATURE: QuadratureConfig = QuadratureConfig {
    abs_tolerance: 1e-15,
    rel_tolerance: 1e-12,
    max_subdivisions: 200,
};

/// Noncentral t with a fixed number of degrees of freedom.
///
/// The noncentrality is an argument of [`NoncentralT::pdf`] rather than a
/// field, since likelihoods sweep it over the parameter space.
///
/// # Example
///
/// ```rust
/// use bayesfactor_dist::{Density, NoncentralT};
///
/// let nct = NoncentralT::new(5.0).unwrap();
/// let central = Density::student_t(0.0, 1.0, 5.0).unwrap();
///
/// // With zero noncentrality it is the ordinary t density.
/// assert!((nct.pdf(1.3, 0.0) - central.pdf(1.3)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoncentralT {
    df: f64,
    /// ln of `1 / (√(νπ) Γ(ν/2))`.
    ln_scale: f64,
}

impl NoncentralT {
    /// # Errors
    /// Returns an error unless `df` is finite and strictly positive.
    pub fn new(df: f64) -> Result<Self, DistError> {
        if !(df.is_finite() && df > 0.0) {
            return Err(DistError::InvalidParameter {
                name: "df".to_string(),
                reason: format!("degrees of freedom must be positive and finite, got {df}"),
            });
        }
        let ln_scale = -0.5 * (df * PI).ln() - ln_gamma(df / 2.0);
        Ok(Self { df, ln_scale })
    }

    /// Degrees of freedom.
    pub fn df(&self) -> f64 {
        self.df
    }

    /// Density of the statistic `t` under noncentrality `ncp`.
    ///
    /// Returns 0 for non-finite arguments and when the density underflows.
    pub fn pdf(&self, t: f64, ncp: f64) -> f64 {
        if !t.is_finite() || !ncp.is_finite() {
            return 0.0;
        }
        let nu = self.df;
        let spread = nu + t * t;
        let z = ncp * t * SQRT_2 / spread.sqrt();
        if z < 0.0 {
            return self.mixture(t, ncp);
        }

        let ln_prefix = -0.5 * ncp * ncp + self.ln_scale + 0.5 * (nu + 1.0) * (nu / spread).ln();
        if z == 0.0 {
            return (ln_prefix + ln_gamma(0.5 * (nu + 1.0))).exp();
        }
        self.series(ln_prefix, z)
    }

    /// The series for `z > 0`, where every term is positive.
    fn series(&self, ln_prefix: f64, z: f64) -> f64 {
        let nu = self.df;
        let ln_z = z.ln();
        let ln_term = |j: f64| ln_gamma(0.5 * (nu + j + 1.0)) - ln_gamma(j + 1.0) + j * ln_z;

        let peak = peak_index(z, nu);
        let ln_peak = ln_term(peak);
        if ln_prefix + ln_peak < LN_UNDERFLOW {
            return 0.0;
        }

        let z2 = z * z;
        // term(j+2) / term(j)
        let step = |j: f64| z2 * 0.5 * (nu + j + 1.0) / ((j + 1.0) * (j + 2.0));

        let mut sum = 0.0;
        for start in [peak, peak + 1.0] {
            let first = (ln_term(start) - ln_peak).exp();

            let (mut j, mut w) = (start, first);
            loop {
                sum += w;
                let ratio = step(j);
                w *= ratio;
                j += 2.0;
                if ratio < 1.0 && w < TERM_CUTOFF {
                    break;
                }
            }

            let (mut j, mut w) = (start, first);
            while j >= 2.0 {
                w /= step(j - 2.0);
                j -= 2.0;
                sum += w;
                if w < TERM_CUTOFF {
                    break;
                }
            }
        }

        (ln_prefix + ln_peak).exp() * sum
    }

    /// `∫ s φ(t s − μ) g_ν(s) ds` over the part of `(0, ∞)` that matters.
    fn mixture(&self, t: f64, ncp: f64) -> f64 {
        let nu = self.df;
        // ln of the integrand without its constant factor; concave in s.
        let h = |s: f64| nu * s.ln() - 0.5 * (t * s - ncp).powi(2) - 0.5 * nu * s * s;

        // h'(s) = 0  ⇔  (t² + ν) s² − tμ s − ν = 0, positive root.
        let tm = t * ncp;
        let q = t * t + nu;
        let root = (tm * tm + 4.0 * nu * q).sqrt();
        let mode = if tm >= 0.0 {
            (tm + root) / (2.0 * q)
        } else {
            2.0 * nu / (root - tm)
        };
        let h_max = h(mode);
        let width = 1.0 / (nu / (mode * mode) + q).sqrt();

        let mut reach = width;
        for _ in 0..64 {
            if h(mode + reach) - h_max < -MIXTURE_SPAN {
                break;
            }
            reach *= 2.0;
        }
        let upper = mode + reach;

        let mut lower = 0.0;
        let mut reach = width;
        for _ in 0..64 {
            if mode - reach <= 0.0 {
                break;
            }
            if h(mode - reach) - h_max < -MIXTURE_SPAN {
                lower = mode - reach;
                break;
            }
            reach *= 2.0;
        }

        let scaled = |s: f64| if s > 0.0 { (h(s) - h_max).exp() } else { 0.0 };
        let gk = GaussKronrod::new(MIXTURE_QUADRATURE);
        let area = gk.integrate(&scaled, lower, mode) + gk.integrate(&scaled, mode, upper);
        if !(area > 0.0) {
            return 0.0;
        }

        let ln_norm = LN_2 + 0.5 * nu * (0.5 * nu).ln() - ln_gamma(0.5 * nu) - 0.5 * (2.0 * PI).ln();
        (ln_norm + h_max + area.ln()).exp()
    }
}

/// Approximate index of the largest series term.
///
/// Solves `term(j+1) ≈ term(j)` with `Γ(a + ½)/Γ(a) ≈ √a`, i.e.
/// `(j+1)² = (z²/2)(ν + j + 1)`.
fn peak_index(z: f64, nu: f64) -> f64 {
    let a = 0.5 * z * z;
    let u = 0.5 * (a + (a * a + 4.0 * a * nu).sqrt());
    (u - 1.0).floor().max(0.0)
}
