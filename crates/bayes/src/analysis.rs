//! Analyses described in TOML files.
//!
//! ```toml
//! [likelihood]
//! family = "noncentral_t"
//! params = [2.03, 79.0]
//!
//! [alternative]
//! family = "cauchy"
//! params = [0.0, 8.944, -inf, inf]
//!
//! [null]
//! family = "point"
//! params = [0.0]
//!
//! # Optional; integrator defaults otherwise.
//! [quadrature]
//! rel_tolerance = 1e-8
//! ```

use std::path::Path;

use bayesfactor_dist::{GaussKronrod, QuadratureConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::bayes_factor::{compare, BayesFactor};
use crate::error::BayesError;
use crate::likelihood::LikelihoodSpec;
use crate::prior::PriorSpec;

/// Observed data, two hypotheses and integrator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub likelihood: LikelihoodSpec,
    pub alternative: PriorSpec,
    pub null: PriorSpec,
    #[serde(default)]
    pub quadrature: QuadratureConfig,
}

impl Analysis {
    pub fn new(likelihood: LikelihoodSpec, alternative: PriorSpec, null: PriorSpec) -> Self {
        Self {
            likelihood,
            alternative,
            null,
            quadrature: QuadratureConfig::default(),
        }
    }

    /// Parse an analysis from TOML.
    ///
    /// Family names are checked here; parameters are checked by [`Self::run`].
    ///
    /// # Errors
    /// Returns [`BayesError::Config`] if the text is not a valid analysis or
    /// a quadrature tolerance is negative or not finite.
    pub fn from_toml(content: &str) -> Result<Self, BayesError> {
        let analysis: Self = toml::from_str(content).map_err(|e| BayesError::Config {
            message: e.to_string(),
        })?;
        analysis
            .quadrature
            .validate()
            .map_err(|e| BayesError::Config {
                message: format!("[quadrature] {e}"),
            })?;
        Ok(analysis)
    }

    /// Read and parse an analysis file.
    ///
    /// # Errors
    /// Returns [`BayesError::Io`] if the file cannot be read and
    /// [`BayesError::Config`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BayesError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| BayesError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let analysis = Self::from_toml(&content)?;
        info!(path = %path.display(), "loaded analysis");
        Ok(analysis)
    }

    /// # Errors
    /// Returns [`BayesError::Config`] if the analysis cannot be serialized.
    pub fn to_toml(&self) -> Result<String, BayesError> {
        toml::to_string_pretty(self).map_err(|e| BayesError::Config {
            message: e.to_string(),
        })
    }

    /// Compute the Bayes factor with the configured integrator.
    ///
    /// # Errors
    /// Any error from building the likelihood or priors.
    pub fn run(&self) -> Result<BayesFactor, BayesError> {
        let integrator = GaussKronrod::new(self.quadrature);
        let bf = compare(&self.likelihood, &self.alternative, &self.null, &integrator)?;
        info!(
            likelihood = %self.likelihood.family,
            alternative = %self.alternative.family,
            null = %self.null.family,
            bayes_factor = bf.value(),
            "analysis complete"
        );
        Ok(bf)
    }
}
