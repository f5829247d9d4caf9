//! Full geometry computation for one shape code.

use crate::camber::CamberProfile;
use crate::error::GeometryResult;
use crate::grid::SamplingGrid;
use crate::shape_code::ShapeCode;
use crate::surface::SurfaceCoordinates;
use crate::thickness::ThicknessProfile;
use af_core::{Real, max_value};

/// Default number of chordwise stations.
pub const DEFAULT_POINTS: usize = 100;

/// Grid plus every quantity derived from it. All sequences have the grid's
/// length and index `i` always refers to station `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilGeometry {
    shape: ShapeCode,
    grid: SamplingGrid,
    camber: CamberProfile,
    thickness: ThicknessProfile,
    surfaces: SurfaceCoordinates,
}

impl AirfoilGeometry {
    pub fn shape(&self) -> &ShapeCode {
        &self.shape
    }

    pub fn grid(&self) -> &SamplingGrid {
        &self.grid
    }

    pub fn camber(&self) -> &CamberProfile {
        &self.camber
    }

    pub fn thickness(&self) -> &ThicknessProfile {
        &self.thickness
    }

    pub fn surfaces(&self) -> &SurfaceCoordinates {
        &self.surfaces
    }

    pub fn n_points(&self) -> usize {
        self.grid.len()
    }

    /// Largest camber ordinate over the grid (not necessarily `m`, since
    /// `p` need not be a grid station).
    pub fn camber_max(&self) -> Real {
        max_value(self.camber.y_c())
    }
}

/// Sample the airfoil at `n_points` uniform stations (`n_points >= 2`).
pub fn compute_geometry(shape: &ShapeCode, n_points: usize) -> GeometryResult<AirfoilGeometry> {
    let grid = SamplingGrid::uniform(n_points)?;
    tracing::debug!(shape = %shape, n_points, "computing airfoil geometry");

    let thickness = ThicknessProfile::compute(shape.t(), &grid);
    let camber = CamberProfile::compute(shape, &grid);
    let surfaces = SurfaceCoordinates::from_profiles(&grid, &camber, &thickness);

    Ok(AirfoilGeometry {
        shape: *shape,
        grid,
        camber,
        thickness,
        surfaces,
    })
}
