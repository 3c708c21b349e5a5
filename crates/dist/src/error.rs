//! Error types for density construction.

use thiserror::Error;

/// Errors raised while building a density or mass function.
///
/// Densities are validated once, when they are built. Evaluating a built
/// density never fails: points outside the support simply have density 0.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistError {
    /// A shape or location parameter is outside the family's domain.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl DistError {
    pub(crate) fn invalid(name: &str, reason: impl ToString) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
