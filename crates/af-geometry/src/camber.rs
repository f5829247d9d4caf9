//! Mean camber line of the 4-digit family.
//!
//! The line is two parabolas joined at the point of maximum camber `p`:
//! stations strictly ahead of `p` use the forward arc, everything at or aft
//! of `p` uses the aft arc.

use crate::grid::SamplingGrid;
use crate::shape_code::ShapeCode;
use af_core::Real;

/// Which arc of the camber line a station falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CamberBranch {
    /// `x < p`
    Forward,
    /// `x >= p`, and every station when `p == 0`
    Aft,
}

/// Camber ordinate and slope at one station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamberPoint {
    pub y_c: Real,
    pub slope: Real,
    pub branch: CamberBranch,
}

impl CamberPoint {
    /// Local inclination of the camber line, `atan(dyc/dx)`.
    pub fn theta(&self) -> Real {
        self.slope.atan()
    }
}

/// Camber ordinate and slope at station `x`.
pub fn camber_at(shape: &ShapeCode, x: Real) -> CamberPoint {
    let (m, p) = (shape.m(), shape.p());

    // The forward arc divides by p^2; with p = 0 only the aft arc is defined.
    if p == 0.0 {
        return aft_arc(m, p, x);
    }

    if x < p {
        forward_arc(m, p, x)
    } else {
        aft_arc(m, p, x)
    }
}

fn forward_arc(m: Real, p: Real, x: Real) -> CamberPoint {
    let k = m / p.powi(2);
    CamberPoint {
        y_c: k * (2.0 * p * x - x.powi(2)),
        slope: 2.0 * k * (p - x),
        branch: CamberBranch::Forward,
    }
}

fn aft_arc(m: Real, p: Real, x: Real) -> CamberPoint {
    let k = m / (1.0 - p).powi(2);
    CamberPoint {
        y_c: k * ((1.0 - 2.0 * p) + 2.0 * p * x - x.powi(2)),
        slope: 2.0 * k * (p - x),
        branch: CamberBranch::Aft,
    }
}

/// Camber ordinates and slopes, positionally aligned with a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CamberProfile {
    y_c: Vec<Real>,
    slope: Vec<Real>,
}

impl CamberProfile {
    pub fn compute(shape: &ShapeCode, grid: &SamplingGrid) -> Self {
        let (y_c, slope): (Vec<Real>, Vec<Real>) = grid
            .iter()
            .map(|x| {
                let point = camber_at(shape, x);
                (point.y_c, point.slope)
            })
            .unzip();
        Self { y_c, slope }
    }

    pub fn y_c(&self) -> &[Real] {
        &self.y_c
    }

    /// `dyc/dx` at each station.
    pub fn slope(&self) -> &[Real] {
        &self.slope
    }

    /// `atan(dyc/dx)` at each station.
    pub fn theta(&self) -> Vec<Real> {
        self.slope.iter().map(|s| s.atan()).collect()
    }

    pub fn len(&self) -> usize {
        self.y_c.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y_c.is_empty()
    }
}
