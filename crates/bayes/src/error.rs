//! Error types for building and comparing hypotheses.

use bayesfactor_dist::DistError;
use thiserror::Error;

/// Errors that can occur while building likelihoods and priors or running
/// an analysis.
///
/// Everything except [`BayesError::NonFiniteResult`] is detected while the
/// inputs are parsed and the functions are built, before any marginal
/// likelihood is integrated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BayesError {
    /// The family name is not one this crate knows how to build.
    #[error("Unknown {kind} family: `{name}`")]
    UnknownFamily { kind: &'static str, name: String },

    /// Wrong number of parameters for the family.
    #[error("Malformed parameters for `{family}`: expected {expected}, got {got}")]
    MalformedParams {
        family: String,
        expected: usize,
        got: usize,
    },

    /// Truncation bounds are NaN or not ordered.
    #[error("Invalid truncation interval [{min}, {max}]: expected min < max")]
    InvalidInterval { min: f64, max: f64 },

    /// The prior has no mass inside its truncation interval.
    #[error("Truncation interval [{min}, {max}] carries no prior mass")]
    ZeroMass { min: f64, max: f64 },

    /// A distribution parameter is outside its domain.
    #[error(transparent)]
    InvalidParameter(#[from] DistError),

    /// The ratio of marginal likelihoods is NaN or infinite.
    #[error("Bayes factor is not finite: {value}")]
    NonFiniteResult { value: f64 },

    /// An analysis file could not be parsed.
    #[error("Invalid analysis configuration: {message}")]
    Config { message: String },

    /// An analysis file could not be read.
    #[error("Cannot read `{path}`: {message}")]
    Io { path: String, message: String },
}

/// Split a parameter list into exactly `N` values.
pub(crate) fn take_params<const N: usize>(
    family: impl std::fmt::Display,
    params: &[f64],
) -> Result<[f64; N], BayesError> {
    <[f64; N]>::try_from(params).map_err(|_| BayesError::MalformedParams {
        family: family.to_string(),
        expected: N,
        got: params.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_params_exact() {
        let [a, b] = take_params::<2>("normal", &[1.0, 2.0]).unwrap();
        assert_eq!((a, b), (1.0, 2.0));
    }

    #[test]
    fn test_take_params_wrong_arity() {
        let err = take_params::<3>("student_t", &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            BayesError::MalformedParams {
                family: "student_t".to_string(),
                expected: 3,
                got: 2,
            }
        );

        assert!(take_params::<1>("point", &[0.0, 1.0]).is_err());
    }

    #[test]
    fn test_messages() {
        let err = BayesError::UnknownFamily {
            kind: "likelihood",
            name: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown likelihood family: `bogus`");
    }
}
