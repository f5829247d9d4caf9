//! Aerodynamic estimate errors.

use thiserror::Error;

/// Result type for aerodynamic operations.
pub type AeroResult<T> = Result<T, AeroError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AeroError {
    /// Too few angles requested.
    #[error("Invalid sample count for {what}: {value} (minimum {min})")]
    InvalidSampleCount {
        what: &'static str,
        value: usize,
        min: usize,
    },
}
