//! af-geometry: NACA 4-digit airfoil geometry engine.
//!
//! Provides:
//! - Shape code parsing (`"2412"` -> maximum camber, its location, thickness)
//! - Uniform chordwise sampling grid
//! - Camber line and slope (two-branch piecewise form)
//! - Thickness envelope (standard 4-digit polynomial)
//! - Upper/lower surface coordinates
//!
//! Every operation is pure: the same inputs always produce the same bundle,
//! and nothing is cached between calls.
//!
//! # Example
//!
//! ```
//! use af_geometry::{compute_geometry, parse_shape_code};
//!
//! let shape = parse_shape_code("2412").unwrap();
//! let geometry = compute_geometry(&shape, 100).unwrap();
//! assert_eq!(geometry.surfaces().upper().len(), 100);
//! ```

pub mod camber;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod shape_code;
pub mod surface;
pub mod thickness;

// Re-exports for ergonomics
pub use camber::{CamberBranch, CamberPoint, CamberProfile, camber_at};
pub use error::{GeometryError, GeometryResult};
pub use geometry::{AirfoilGeometry, DEFAULT_POINTS, compute_geometry};
pub use grid::SamplingGrid;
pub use shape_code::{ShapeCode, parse_shape_code};
pub use surface::{SurfaceCoordinates, SurfacePoint};
pub use thickness::{ThicknessProfile, half_thickness};
