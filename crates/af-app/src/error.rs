//! Error types for the af-app service layer.

use af_aero::AeroError;
use af_geometry::GeometryError;

/// Application error type wrapping the engine and backend crates.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Aerodynamics error: {0}")]
    Aero(#[from] AeroError),

    #[error("Project error: {0}")]
    Project(String),

    #[error("Project validation failed: {0}")]
    Validation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Report not found: {0}")]
    ReportNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for af-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<af_project::ProjectError> for AppError {
    fn from(err: af_project::ProjectError) -> Self {
        match err {
            af_project::ProjectError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<af_project::ValidationError> for AppError {
    fn from(err: af_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<af_results::ResultsError> for AppError {
    fn from(err: af_results::ResultsError) -> Self {
        match err {
            af_results::ResultsError::ReportNotFound { report_id } => {
                AppError::ReportNotFound(report_id)
            }
            other => AppError::Results(other.to_string()),
        }
    }
}
