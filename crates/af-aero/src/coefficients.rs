//! Lift and drag estimates.

use crate::sweep::AngleSweep;
use af_core::{Angle, Real, radians};
use af_geometry::ShapeCode;
use std::f64::consts::PI;

/// Fixed zero-incidence drag coefficient. A placeholder, not a solved value.
pub const BASELINE_CD: Real = 0.01;

/// Zero-incidence lift coefficient, `2*pi*m`.
pub fn lift_coefficient(m: Real) -> Real {
    2.0 * PI * m
}

/// Simplified polar lift, `2*pi*m*sin(alpha)`.
pub fn lift_at(m: Real, alpha: Angle) -> Real {
    lift_coefficient(m) * radians(alpha).sin()
}

/// Simplified polar drag, `cd*(1 + tan(alpha)^2)`. Unbounded as alpha -> +/-90 deg.
pub fn drag_at(cd: Real, alpha: Angle) -> Real {
    cd * (1.0 + radians(alpha).tan().powi(2))
}

/// Zero-incidence coefficients plus polar curves over a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct AerodynamicEstimate {
    cl: Real,
    cd: Real,
    sweep: AngleSweep,
    polar_cl: Vec<Real>,
    polar_cd: Vec<Real>,
}

impl AerodynamicEstimate {
    pub fn cl(&self) -> Real {
        self.cl
    }

    pub fn cd(&self) -> Real {
        self.cd
    }

    pub fn sweep(&self) -> &AngleSweep {
        &self.sweep
    }

    pub fn polar_cl(&self) -> &[Real] {
        &self.polar_cl
    }

    pub fn polar_cd(&self) -> &[Real] {
        &self.polar_cd
    }

    /// True when a polar value diverged (sweeps reaching +/-90 deg).
    pub fn has_non_finite(&self) -> bool {
        self.polar_cl
            .iter()
            .chain(&self.polar_cd)
            .any(|v| !v.is_finite())
    }
}

/// Estimate coefficients for `shape` over `sweep`. Depends on `m` only.
pub fn compute_aerodynamics(shape: &ShapeCode, sweep: &AngleSweep) -> AerodynamicEstimate {
    tracing::debug!(shape = %shape, n_alpha = sweep.len(), "computing aerodynamic estimate");

    let m = shape.m();
    let cd = BASELINE_CD;
    let (polar_cl, polar_cd): (Vec<Real>, Vec<Real>) = sweep
        .angles()
        .map(|alpha| (lift_at(m, alpha), drag_at(cd, alpha)))
        .unzip();

    AerodynamicEstimate {
        cl: lift_coefficient(m),
        cd,
        sweep: sweep.clone(),
        polar_cl,
        polar_cd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use af_core::deg;

    fn shape(code: &str) -> ShapeCode {
        ShapeCode::parse(code).unwrap()
    }

    #[test]
    fn zero_incidence_values() {
        let est = compute_aerodynamics(&shape("2412"), &AngleSweep::default());
        assert!((est.cl() - 2.0 * PI * 0.02).abs() < 1e-15);
        assert_eq!(est.cd(), 0.01);
        assert_eq!(est.polar_cl().len(), 100);
        assert_eq!(est.polar_cd().len(), 100);
    }

    #[test]
    fn symmetric_section_has_no_lift() {
        let est = compute_aerodynamics(&shape("0012"), &AngleSweep::default());
        assert_eq!(est.cl(), 0.0);
        assert!(est.polar_cl().iter().all(|&c| c == 0.0));
    }

    #[test]
    fn polar_drag_minimum_at_zero_incidence() {
        assert_eq!(drag_at(BASELINE_CD, deg(0.0)), BASELINE_CD);
        assert!(drag_at(BASELINE_CD, deg(5.0)) > BASELINE_CD);
        assert!((drag_at(BASELINE_CD, deg(45.0)) - 2.0 * BASELINE_CD).abs() < 1e-15);
    }

    #[test]
    fn polar_drag_diverges_near_ninety_degrees() {
        let sweep = AngleSweep::linear(80.0, 90.0, 11).unwrap();
        let est = compute_aerodynamics(&shape("2412"), &sweep);
        let last = *est.polar_cd().last().unwrap();
        assert!(last > 1e20 || !last.is_finite());
        assert!(est.polar_cd().windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn lift_at_matches_closed_form() {
        let m = 0.04;
        let value = lift_at(m, deg(10.0));
        let expected = 2.0 * PI * m * (10.0_f64).to_radians().sin();
        assert!((value - expected).abs() < 1e-15);
    }
}
