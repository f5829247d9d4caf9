//! Geometry engine errors.

use thiserror::Error;

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised by the geometry engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Shape code is not exactly four ASCII digits.
    #[error("Invalid shape code {code:?}: {reason}")]
    InvalidShapeCode { code: String, reason: &'static str },

    /// Too few sample points requested.
    #[error("Invalid sample count for {what}: {value} (minimum {min})")]
    InvalidSampleCount {
        what: &'static str,
        value: usize,
        min: usize,
    },
}
