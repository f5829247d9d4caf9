//! Upper and lower surface coordinates.

use crate::camber::CamberProfile;
use crate::grid::SamplingGrid;
use crate::thickness::ThicknessProfile;
use af_core::Real;
use nalgebra::{Rotation2, Vector2};

/// A point on the airfoil contour, in chord-normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub x: Real,
    pub y: Real,
}

/// Upper and lower contours as two open polylines, leading edge first.
///
/// The half-thickness is laid off perpendicular to the camber line, so the
/// x-coordinates of the two surfaces differ from the grid stations and the
/// end points of the two polylines need not coincide exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceCoordinates {
    upper: Vec<SurfacePoint>,
    lower: Vec<SurfacePoint>,
}

impl SurfaceCoordinates {
    pub fn from_profiles(
        grid: &SamplingGrid,
        camber: &CamberProfile,
        thickness: &ThicknessProfile,
    ) -> Self {
        let n = grid.len();
        let mut upper = Vec::with_capacity(n);
        let mut lower = Vec::with_capacity(n);

        for (((x, &y_c), &slope), &y_t) in grid
            .iter()
            .zip(camber.y_c())
            .zip(camber.slope())
            .zip(thickness.y_t())
        {
            let offset = normal_offset(slope.atan(), y_t);
            upper.push(SurfacePoint {
                x: x + offset.x,
                y: y_c + offset.y,
            });
            lower.push(SurfacePoint {
                x: x - offset.x,
                y: y_c - offset.y,
            });
        }

        Self { upper, lower }
    }

    pub fn upper(&self) -> &[SurfacePoint] {
        &self.upper
    }

    pub fn lower(&self) -> &[SurfacePoint] {
        &self.lower
    }

    pub fn upper_x(&self) -> Vec<Real> {
        self.upper.iter().map(|pt| pt.x).collect()
    }

    pub fn upper_y(&self) -> Vec<Real> {
        self.upper.iter().map(|pt| pt.y).collect()
    }

    pub fn lower_x(&self) -> Vec<Real> {
        self.lower.iter().map(|pt| pt.x).collect()
    }

    pub fn lower_y(&self) -> Vec<Real> {
        self.lower.iter().map(|pt| pt.y).collect()
    }
}

/// `(0, y_t)` rotated by `theta`: `(-y_t sin(theta), y_t cos(theta))`.
fn normal_offset(theta: Real, y_t: Real) -> Vector2<Real> {
    Rotation2::new(theta) * Vector2::new(0.0, y_t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_matches_closed_form() {
        let (theta, y_t) = (0.3_f64, 0.05_f64);
        let offset = normal_offset(theta, y_t);
        assert!((offset.x + y_t * theta.sin()).abs() < 1e-15);
        assert!((offset.y - y_t * theta.cos()).abs() < 1e-15);
    }

    #[test]
    fn zero_slope_offsets_vertically() {
        let offset = normal_offset(0.0, 0.06);
        assert_eq!(offset.x, 0.0);
        assert_eq!(offset.y, 0.06);
    }
}
