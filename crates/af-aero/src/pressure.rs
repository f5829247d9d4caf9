//! Illustrative pressure-like profile.
//!
//! `1 - (y_t / max(y_c))^2` along the chord. This mixes the thickness
//! envelope with the peak camber ordinate and is NOT a pressure coefficient;
//! it exists so reports can show the same shape-derived curve alongside the
//! geometry. Symmetric sections have `max(y_c) = 0`, which makes every value
//! non-finite.

use af_core::Real;
use af_geometry::AirfoilGeometry;

/// Illustrative estimate, positionally aligned with the geometry grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureEstimate {
    camber_max: Real,
    values: Vec<Real>,
}

impl PressureEstimate {
    /// The normalizing camber ordinate.
    pub fn camber_max(&self) -> Real {
        self.camber_max
    }

    pub fn values(&self) -> &[Real] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

pub fn estimate_pressure(geometry: &AirfoilGeometry) -> PressureEstimate {
    let camber_max = geometry.camber_max();
    let values = geometry
        .thickness()
        .y_t()
        .iter()
        .map(|&y_t| 1.0 - (y_t / camber_max).powi(2))
        .collect();

    PressureEstimate { camber_max, values }
}
