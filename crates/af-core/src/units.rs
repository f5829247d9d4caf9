// af-core/src/units.rs

use uom::si::f64::Angle as UomAngle;

// Public canonical unit types (SI, f64)
pub type Angle = UomAngle;

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

/// Angle value in radians.
#[inline]
pub fn radians(angle: Angle) -> f64 {
    use uom::si::angle::radian;
    angle.get::<radian>()
}

/// Angle value in degrees.
#[inline]
pub fn degrees(angle: Angle) -> f64 {
    use uom::si::angle::degree;
    angle.get::<degree>()
}
