//! Heading of a mobile body.

use std::fmt;

/// A direction on the surface, stored in radians.
///
/// Zero points along +x; positive rotation is counter-clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Facing {
    radians: f64,
}

impl Facing {
    /// A facing from degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    /// The heading in radians.
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// Rotate in place by the given number of degrees.
    pub fn rotate_degrees(&mut self, degrees: f64) {
        self.radians = (self.radians + degrees.to_radians()).rem_euclid(std::f64::consts::TAU);
    }

    /// Unit vector `(dx, dy)` of the heading.
    pub fn unit(&self) -> (f64, f64) {
        (self.radians.cos(), self.radians.sin())
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.radians.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_to_a_full_turn() {
        let mut facing = Facing::from_degrees(350.0);
        facing.rotate_degrees(20.0);
        assert!((facing.radians() - 10.0_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn unit_vector_points_along_heading() {
        let east = Facing::from_degrees(0.0);
        let (dx, dy) = east.unit();
        assert!((dx - 1.0).abs() < 1e-12);
        assert!(dy.abs() < 1e-12);

        let north = Facing::from_degrees(90.0);
        let (dx, dy) = north.unit();
        assert!(dx.abs() < 1e-12);
        assert!((dy - 1.0).abs() < 1e-12);
    }

    #[test]
    fn negative_rotation_stays_normalized() {
        let mut facing = Facing::from_degrees(0.0);
        facing.rotate_degrees(-5.0);
        assert!(facing.radians() >= 0.0 && facing.radians() < std::f64::consts::TAU);
    }
}
