//! Continuous densities and the binomial mass function.
//!
//! The continuous families are thin, validated wrappers over `statrs`. The
//! point of the wrapper is that parameter errors surface when the density is
//! built, so the closures handed to the integrator are infallible.

use statrs::distribution::{Beta, Binomial, Cauchy, Continuous, Discrete, Normal, StudentsT, Uniform};

use crate::error::DistError;

/// A validated univariate probability density.
///
/// # Example
///
/// ```rust
/// use bayesfactor_dist::Density;
///
/// let standard = Density::normal(0.0, 1.0).unwrap();
/// assert!((standard.pdf(0.0) - 0.398_942_280_4).abs() < 1e-9);
///
/// // Outside the support the density is zero.
/// let unit = Density::uniform(0.0, 1.0).unwrap();
/// assert_eq!(unit.pdf(2.0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub enum Density {
    /// Normal(mean, sd).
    Normal(Normal),
    /// Location-scale Student-t.
    StudentT(StudentsT),
    /// Cauchy(location, scale).
    Cauchy(Cauchy),
    /// Beta(alpha, beta) on `[0, 1]`.
    Beta(Beta),
    /// Uniform on `[lower, upper]`.
    Uniform(Uniform),
}

impl Density {
    /// Normal density with the given mean and standard deviation.
    ///
    /// # Errors
    /// Returns an error if `sd` is not strictly positive or `mean` is NaN.
    pub fn normal(mean: f64, sd: f64) -> Result<Self, DistError> {
        Normal::new(mean, sd)
            .map(Self::Normal)
            .map_err(|e| DistError::invalid("normal(mean, sd)", e))
    }

    /// Student-t with `df` degrees of freedom, shifted by `location` and
    /// scaled by `scale`.
    pub fn student_t(location: f64, scale: f64, df: f64) -> Result<Self, DistError> {
        StudentsT::new(location, scale, df)
            .map(Self::StudentT)
            .map_err(|e| DistError::invalid("student_t(location, scale, df)", e))
    }

    /// Cauchy density.
    pub fn cauchy(location: f64, scale: f64) -> Result<Self, DistError> {
        Cauchy::new(location, scale)
            .map(Self::Cauchy)
            .map_err(|e| DistError::invalid("cauchy(location, scale)", e))
    }

    /// Beta density.
    pub fn beta(alpha: f64, beta: f64) -> Result<Self, DistError> {
        Beta::new(alpha, beta)
            .map(Self::Beta)
            .map_err(|e| DistError::invalid("beta(alpha, beta)", e))
    }

    /// Uniform density on `[lower, upper]`.
    ///
    /// # Errors
    /// Returns an error unless `lower < upper` and both are finite.
    pub fn uniform(lower: f64, upper: f64) -> Result<Self, DistError> {
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err(DistError::invalid(
                "uniform(lower, upper)",
                format!("expected finite lower < upper, got [{lower}, {upper}]"),
            ));
        }
        Uniform::new(lower, upper)
            .map(Self::Uniform)
            .map_err(|e| DistError::invalid("uniform(lower, upper)", e))
    }

    /// Density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        match self {
            Self::Normal(d) => d.pdf(x),
            Self::StudentT(d) => d.pdf(x),
            Self::Cauchy(d) => d.pdf(x),
            Self::Beta(d) => d.pdf(x),
            Self::Uniform(d) => d.pdf(x),
        }
    }
}

/// Binomial mass of a fixed observation, viewed as a function of the
/// success probability.
///
/// # Example
///
/// ```rust
/// use bayesfactor_dist::BinomialMass;
///
/// let coin = BinomialMass::new(1.0, 2.0).unwrap();
/// assert!((coin.pmf(0.5) - 0.5).abs() < 1e-12);
/// assert_eq!(coin.pmf(1.5), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialMass {
    /// Observed number of successes.
    pub successes: u64,
    /// Number of trials.
    pub trials: u64,
}

impl BinomialMass {
    /// Build from counts given as floats.
    ///
    /// # Errors
    /// Returns an error if either count is negative, non-integral or
    /// non-finite, or if `successes > trials`.
    pub fn new(successes: f64, trials: f64) -> Result<Self, DistError> {
        let successes = count("successes", successes)?;
        let trials = count("trials", trials)?;
        if successes > trials {
            return Err(DistError::invalid(
                "successes",
                format!("{successes} successes exceed {trials} trials"),
            ));
        }
        Ok(Self { successes, trials })
    }

    /// Probability of the observation when each trial succeeds with
    /// probability `p`. Zero for `p` outside `[0, 1]`.
    pub fn pmf(&self, p: f64) -> f64 {
        binomial_pmf(self.successes, self.trials, p)
    }
}

/// `P(X = successes)` for `X ~ Binomial(trials, p)`; zero for `p` outside
/// `[0, 1]`.
pub fn binomial_pmf(successes: u64, trials: u64, p: f64) -> f64 {
    if !(0.0..=1.0).contains(&p) {
        return 0.0;
    }
    Binomial::new(p, trials)
        .map(|b| b.pmf(successes))
        .unwrap_or(0.0)
}

fn count(name: &str, value: f64) -> Result<u64, DistError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(DistError::invalid(
            name,
            format!("expected a non-negative integer count, got {value}"),
        ));
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_normal_pdf() {
        let d = Density::normal(1.0, 2.0).unwrap();
        let expected = 1.0 / (2.0 * (2.0 * PI).sqrt());
        assert!((d.pdf(1.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_normal_rejects_non_positive_sd() {
        assert!(matches!(
            Density::normal(0.0, 0.0),
            Err(DistError::InvalidParameter { .. })
        ));
        assert!(Density::normal(0.0, -1.0).is_err());
    }

    #[test]
    fn test_student_t_is_shifted_and_scaled() {
        // Scaling by s divides the density by s.
        let standard = Density::student_t(0.0, 1.0, 5.0).unwrap();
        let scaled = Density::student_t(3.0, 2.0, 5.0).unwrap();
        let x = 4.0;
        let expected = standard.pdf((x - 3.0) / 2.0) / 2.0;
        assert!((scaled.pdf(x) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_cauchy_pdf_at_location() {
        let d = Density::cauchy(0.0, 2.0).unwrap();
        assert!((d.pdf(0.0) - 1.0 / (2.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn test_beta_uniform_case() {
        let d = Density::beta(1.0, 1.0).unwrap();
        assert!((d.pdf(0.3) - 1.0).abs() < 1e-12);
        assert_eq!(d.pdf(1.5), 0.0);
    }

    #[test]
    fn test_uniform_pdf() {
        let d = Density::uniform(0.0, 20.0).unwrap();
        assert!((d.pdf(10.0) - 0.05).abs() < 1e-12);
        assert_eq!(d.pdf(-1.0), 0.0);
        assert!(Density::uniform(1.0, 1.0).is_err());
    }

    #[test]
    fn test_binomial_pmf() {
        // C(10, 2) * 0.5^10
        let expected = 45.0 / 1024.0;
        assert!((binomial_pmf(2, 10, 0.5) - expected).abs() < 1e-12);
        assert_eq!(binomial_pmf(2, 10, -0.1), 0.0);
        assert_eq!(binomial_pmf(0, 3, 0.0), 1.0);
    }

    #[test]
    fn test_binomial_mass_validates_counts() {
        assert!(BinomialMass::new(8.0, 11.0).is_ok());
        assert!(BinomialMass::new(12.0, 11.0).is_err());
        assert!(BinomialMass::new(2.5, 11.0).is_err());
        assert!(BinomialMass::new(-1.0, 11.0).is_err());
        assert!(BinomialMass::new(1.0, f64::INFINITY).is_err());
    }
}
