//! af-core: stable foundation for the airfoil workspace.
//!
//! Contains:
//! - units (uom angle type + degree/radian conversion)
//! - numeric (Real + linear spacing + NaN-aware maximum)

pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
pub use units::*;
