use thiserror::Error;

use super::{ElementId, GlazingId, RoomId};

/// Errors raised by mutating operations on the envelope model.
///
/// Every variant is detected before the mutation takes effect, so a rejected
/// call leaves the project tree exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvelopeError {
    #[error("Invalid dimension: {field} must be > 0 (got {value})")]
    InvalidDimension { field: &'static str, value: f64 },
    #[error("Oversized glazing: {requested_m2:.2} m² requested, {available_m2:.2} m² of {gross_m2:.2} m² still free")]
    OversizedGlazing {
        requested_m2: f64,
        available_m2: f64,
        gross_m2: f64,
    },
    #[error("Unknown element category: {0}")]
    UnknownCategory(String),
    #[error("Element '{0}' faces a heated interior and carries no heat loss")]
    InteriorPartition(String),
    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),
    #[error("Element not found: {0}")]
    ElementNotFound(ElementId),
    #[error("Glazing unit not found: {0}")]
    GlazingNotFound(GlazingId),
}

impl EnvelopeError {
    /// Stable machine-readable kind, used by the presentation layer.
    pub fn kind(&self) -> &'static str {
        match self {
            EnvelopeError::InvalidDimension { .. } => "InvalidDimension",
            EnvelopeError::OversizedGlazing { .. } => "OversizedGlazing",
            EnvelopeError::UnknownCategory(_) => "UnknownCategory",
            EnvelopeError::InteriorPartition(_) => "InteriorPartition",
            EnvelopeError::RoomNotFound(_) => "RoomNotFound",
            EnvelopeError::ElementNotFound(_) => "ElementNotFound",
            EnvelopeError::GlazingNotFound(_) => "GlazingNotFound",
        }
    }
}

/// Rejects non-positive (and NaN) lengths.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, EnvelopeError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(EnvelopeError::InvalidDimension { field, value })
    }
}
