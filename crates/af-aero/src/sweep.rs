//! Angle-of-attack sweep generation.

use crate::error::{AeroError, AeroResult};
use af_core::{Angle, Real, deg, linspace};
use std::fmt;

/// Uniformly spaced angles of attack, in degrees.
///
/// Stores the user-specified bounds alongside the generated angles so a
/// sweep can be echoed back in reports.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleSweep {
    start_deg: Real,
    end_deg: Real,
    angles_deg: Vec<Real>,
}

impl AngleSweep {
    pub const DEFAULT_MIN_DEG: Real = -10.0;
    pub const DEFAULT_MAX_DEG: Real = 10.0;
    pub const DEFAULT_COUNT: usize = 100;
    pub const MIN_COUNT: usize = 1;

    /// `n_alpha` angles from `alpha_min_deg` to `alpha_max_deg` inclusive.
    ///
    /// A single angle yields `[alpha_min_deg]`. Reversed bounds give a
    /// descending sweep.
    pub fn linear(alpha_min_deg: Real, alpha_max_deg: Real, n_alpha: usize) -> AeroResult<Self> {
        if n_alpha < Self::MIN_COUNT {
            return Err(AeroError::InvalidSampleCount {
                what: "n_alpha",
                value: n_alpha,
                min: Self::MIN_COUNT,
            });
        }

        Ok(Self {
            start_deg: alpha_min_deg,
            end_deg: alpha_max_deg,
            angles_deg: linspace(alpha_min_deg, alpha_max_deg, n_alpha),
        })
    }

    pub fn start_deg(&self) -> Real {
        self.start_deg
    }

    pub fn end_deg(&self) -> Real {
        self.end_deg
    }

    pub fn angles_deg(&self) -> &[Real] {
        &self.angles_deg
    }

    pub fn angles(&self) -> impl Iterator<Item = Angle> + '_ {
        self.angles_deg.iter().map(|&a| deg(a))
    }

    pub fn len(&self) -> usize {
        self.angles_deg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles_deg.is_empty()
    }
}

impl Default for AngleSweep {
    fn default() -> Self {
        Self {
            start_deg: Self::DEFAULT_MIN_DEG,
            end_deg: Self::DEFAULT_MAX_DEG,
            angles_deg: linspace(
                Self::DEFAULT_MIN_DEG,
                Self::DEFAULT_MAX_DEG,
                Self::DEFAULT_COUNT,
            ),
        }
    }
}

impl fmt::Display for AngleSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep alpha from {} deg to {} deg ({} points)",
            self.start_deg,
            self.end_deg,
            self.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use af_core::radians;

    #[test]
    fn default_sweep() {
        let sweep = AngleSweep::default();
        assert_eq!(sweep.len(), 100);
        assert_eq!(sweep.angles_deg()[0], -10.0);
        assert_eq!(sweep.angles_deg()[99], 10.0);
        assert_eq!(sweep, AngleSweep::linear(-10.0, 10.0, 100).unwrap());
    }

    #[test]
    fn linear_sweep_generation() {
        let sweep = AngleSweep::linear(0.0, 8.0, 5).unwrap();
        assert_eq!(sweep.angles_deg(), &[0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn single_angle_sweep() {
        let sweep = AngleSweep::linear(3.0, 12.0, 1).unwrap();
        assert_eq!(sweep.angles_deg(), &[3.0]);
    }

    #[test]
    fn reject_empty_sweep() {
        assert!(matches!(
            AngleSweep::linear(-10.0, 10.0, 0),
            Err(AeroError::InvalidSampleCount { value: 0, .. })
        ));
    }

    #[test]
    fn angles_convert_to_radians() {
        let sweep = AngleSweep::linear(0.0, 90.0, 2).unwrap();
        let rads: Vec<f64> = sweep.angles().map(radians).collect();
        assert_eq!(rads[0], 0.0);
        assert!((rads[1] - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn display_mentions_bounds() {
        let text = AngleSweep::default().to_string();
        assert!(text.contains("-10"));
        assert!(text.contains("100 points"));
    }
}
