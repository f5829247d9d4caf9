//! Chordwise sampling grid.

use crate::error::{GeometryError, GeometryResult};
use af_core::{Real, linspace};

/// Ordered chordwise stations over `[0, 1]`, both edges included.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingGrid {
    stations: Vec<Real>,
}

impl SamplingGrid {
    /// Smallest usable grid: leading and trailing edge only.
    pub const MIN_POINTS: usize = 2;

    /// Uniformly spaced stations. The first is exactly `0.0`, the last exactly `1.0`.
    pub fn uniform(n_points: usize) -> GeometryResult<Self> {
        if n_points < Self::MIN_POINTS {
            return Err(GeometryError::InvalidSampleCount {
                what: "n_points",
                value: n_points,
                min: Self::MIN_POINTS,
            });
        }
        Ok(Self {
            stations: linspace(0.0, 1.0, n_points),
        })
    }

    pub fn stations(&self) -> &[Real] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Real> + '_ {
        self.stations.iter().copied()
    }
}
