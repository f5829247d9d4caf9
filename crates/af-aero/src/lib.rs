//! af-aero: closed-form aerodynamic estimates for 4-digit airfoils.
//!
//! Provides:
//! - Angle-of-attack sweeps (degrees, uniformly spaced)
//! - Zero-incidence lift/drag coefficients and simplified polar curves
//! - An illustrative pressure-like profile derived from the geometry
//!
//! These are thin-airfoil style approximations, not a panel or viscous
//! solution. The drag baseline is a fixed placeholder.

pub mod coefficients;
pub mod error;
pub mod pressure;
pub mod sweep;

pub use coefficients::{
    AerodynamicEstimate, BASELINE_CD, compute_aerodynamics, drag_at, lift_at, lift_coefficient,
};
pub use error::{AeroError, AeroResult};
pub use pressure::{PressureEstimate, estimate_pressure};
pub use sweep::AngleSweep;
