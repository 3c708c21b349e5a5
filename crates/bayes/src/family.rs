//! Likelihood and prior families.
//!
//! Families are closed enums. Names use `snake_case` both when parsed from
//! strings and in serialized specs, and an unrecognised name is rejected
//! when it is parsed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BayesError;

/// The statistical model of the observed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum LikelihoodFamily {
    /// Params: mean, sd.
    Normal,
    /// Params: mean, sd, df.
    StudentT,
    /// Params: t, df. The unknown parameter is the noncentrality.
    NoncentralT,
    /// Params: d, df. The unknown parameter is the standardized effect size.
    NoncentralD,
    /// Params: successes, trials. The unknown parameter is the success
    /// probability.
    Binomial,
}

impl LikelihoodFamily {
    pub const ALL: [Self; 5] = [
        Self::Normal,
        Self::StudentT,
        Self::NoncentralT,
        Self::NoncentralD,
        Self::Binomial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::StudentT => "student_t",
            Self::NoncentralT => "noncentral_t",
            Self::NoncentralD => "noncentral_d",
            Self::Binomial => "binomial",
        }
    }
}

/// The distribution of the unknown parameter under one hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PriorFamily {
    /// Params: location, scale, min, max.
    Cauchy,
    /// Params: mean, sd, min, max.
    Normal,
    /// Params: mean, sd, df, min, max.
    StudentT,
    /// Params: alpha, beta. Supported on `[0, 1]`.
    Beta,
    /// Params: lower, upper.
    Uniform,
    /// Params: value. All mass on a single point.
    Point,
}

impl PriorFamily {
    pub const ALL: [Self; 6] = [
        Self::Cauchy,
        Self::Normal,
        Self::StudentT,
        Self::Beta,
        Self::Uniform,
        Self::Point,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cauchy => "cauchy",
            Self::Normal => "normal",
            Self::StudentT => "student_t",
            Self::Beta => "beta",
            Self::Uniform => "uniform",
            Self::Point => "point",
        }
    }
}

macro_rules! family_conversions {
    ($family:ty, $kind:literal) => {
        impl FromStr for $family {
            type Err = BayesError;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|f| f.as_str() == name)
                    .ok_or_else(|| BayesError::UnknownFamily {
                        kind: $kind,
                        name: name.to_string(),
                    })
            }
        }

        impl TryFrom<String> for $family {
            type Error = BayesError;

            fn try_from(name: String) -> Result<Self, Self::Error> {
                name.parse()
            }
        }

        impl From<$family> for &'static str {
            fn from(family: $family) -> Self {
                family.as_str()
            }
        }

        impl fmt::Display for $family {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

family_conversions!(LikelihoodFamily, "likelihood");
family_conversions!(PriorFamily, "prior");
