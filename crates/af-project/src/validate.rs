//! Analysis file validation logic.

use crate::schema::{AnalysisParams, AnalysisProject};
use af_aero::AngleSweep;
use af_geometry::{SamplingGrid, ShapeCode};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &AnalysisProject) -> Result<(), ValidationError> {
    if project.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut ids = HashSet::new();
    for analysis in &project.analyses {
        if analysis.id.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "analyses.id".to_string(),
                value: analysis.id.clone(),
                reason: "must not be empty".to_string(),
            });
        }
        if !ids.insert(&analysis.id) {
            return Err(ValidationError::DuplicateId {
                id: analysis.id.clone(),
                context: "analyses".to_string(),
            });
        }
        validate_params(&analysis.params)?;
    }

    Ok(())
}

/// Check that the engine will accept these parameters.
pub fn validate_params(params: &AnalysisParams) -> Result<(), ValidationError> {
    if let Err(err) = ShapeCode::parse(&params.code) {
        return Err(ValidationError::InvalidValue {
            field: "code".to_string(),
            value: params.code.clone(),
            reason: err.to_string(),
        });
    }

    if params.n_points < SamplingGrid::MIN_POINTS {
        return Err(ValidationError::InvalidValue {
            field: "n_points".to_string(),
            value: params.n_points.to_string(),
            reason: format!("must be at least {}", SamplingGrid::MIN_POINTS),
        });
    }

    let sweep = &params.sweep;
    if sweep.n_alpha < AngleSweep::MIN_COUNT {
        return Err(ValidationError::InvalidValue {
            field: "sweep.n_alpha".to_string(),
            value: sweep.n_alpha.to_string(),
            reason: format!("must be at least {}", AngleSweep::MIN_COUNT),
        });
    }

    for (field, value) in [
        ("sweep.alpha_min_deg", sweep.alpha_min_deg),
        ("sweep.alpha_max_deg", sweep.alpha_max_deg),
    ] {
        if !value.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                value: value.to_string(),
                reason: "must be finite".to_string(),
            });
        }
    }

    Ok(())
}
