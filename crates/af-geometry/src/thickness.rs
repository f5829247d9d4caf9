//! Thickness envelope of the 4-digit family.

use crate::grid::SamplingGrid;
use af_core::Real;

// Empirical coefficients of the 4-digit thickness polynomial (open trailing edge).
const A0: Real = 0.2969;
const A1: Real = 0.1260;
const A2: Real = 0.3516;
const A3: Real = 0.2843;
const A4: Real = 0.1015;

/// Half-thickness at chordwise station `x` for maximum thickness `t`.
pub fn half_thickness(t: Real, x: Real) -> Real {
    5.0 * t * (A0 * x.sqrt() - A1 * x - A2 * x.powi(2) + A3 * x.powi(3) - A4 * x.powi(4))
}

/// Half-thickness envelope sampled on a grid. Depends only on `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThicknessProfile {
    y_t: Vec<Real>,
}

impl ThicknessProfile {
    pub fn compute(t: Real, grid: &SamplingGrid) -> Self {
        Self {
            y_t: grid.iter().map(|x| half_thickness(t, x)).collect(),
        }
    }

    pub fn y_t(&self) -> &[Real] {
        &self.y_t
    }

    pub fn len(&self) -> usize {
        self.y_t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y_t.is_empty()
    }
}
