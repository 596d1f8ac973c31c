//! Errors surfaced by the analysis entry points.
//!
//! Geometry and sampling helpers never fail; they return empty collections.
//! Only the orchestration layer refuses to run.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// No polygon with at least three vertices exists in the plan.
    #[error("no qualifying polygon: draw at least one polygon with three or more vertices")]
    NoQualifyingPolygon,

    #[error("invalid spacing `{name}` = {value}: must be finite and positive")]
    InvalidSpacing { name: &'static str, value: f64 },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl AnalysisError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub(crate) fn check_spacing(name: &'static str, value: f64) -> Result<f64, AnalysisError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AnalysisError::InvalidSpacing { name, value })
    }
}
