//! Trigonometric shorthands and angle-unit conversion.

use std::f64::consts::TAU;

#[must_use]
pub fn sin(x: f64) -> f64 {
    x.sin()
}

#[must_use]
pub fn cos(x: f64) -> f64 {
    x.cos()
}

#[must_use]
pub fn tan(x: f64) -> f64 {
    x.tan()
}

/// Cotangent, `1 / tan(x)`
#[must_use]
pub fn cot(x: f64) -> f64 {
    x.tan().recip()
}

/// Secant, `1 / cos(x)`
#[must_use]
pub fn sec(x: f64) -> f64 {
    x.cos().recip()
}

/// Cosecant, `1 / sin(x)`
#[must_use]
pub fn csc(x: f64) -> f64 {
    x.sin().recip()
}

/// Units an angle can be measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Radians,
    Degrees,
    Gradians,
}

impl AngleUnit {
    /// Size of a full turn in this unit
    #[must_use]
    pub const fn full_turn(self) -> f64 {
        match self {
            Self::Radians => TAU,
            Self::Degrees => 360.0,
            Self::Gradians => 400.0,
        }
    }
}

/// Convert `angle` from one unit to another
#[must_use]
pub fn convert_angle(angle: f64, from: AngleUnit, to: AngleUnit) -> f64 {
    angle * (to.full_turn() / from.full_turn())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_reciprocals() {
        let x = 0.7;
        assert!((cot(x) * tan(x) - 1.0).abs() < EPS);
        assert!((sec(x) * cos(x) - 1.0).abs() < EPS);
        assert!((csc(x) * sin(x) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_convert_angle() {
        assert!((convert_angle(180.0, AngleUnit::Degrees, AngleUnit::Radians) - PI).abs() < EPS);
        let right = convert_angle(PI / 2.0, AngleUnit::Radians, AngleUnit::Gradians);
        assert!((right - 100.0).abs() < EPS);
        assert_eq!(convert_angle(90.0, AngleUnit::Degrees, AngleUnit::Degrees), 90.0);
    }
}
