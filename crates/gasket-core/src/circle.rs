//! Circles of the packing and the pairwise tangency test.

use crate::Complex;

/// One circle of the gasket.
///
/// Curvature is signed: the outer bounding circle, which encloses the
/// packing, carries a negative curvature while its radius stays positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// Center in the complex plane
    pub center: Complex,
    /// Radius, always stored positive
    pub radius: f64,
    /// Signed curvature
    pub curvature: f64,
}

impl Circle {
    /// Create a circle with an authored radius and curvature.
    pub const fn new(center: Complex, radius: f64, curvature: f64) -> Self {
        Self {
            center,
            radius,
            curvature,
        }
    }

    /// Create a circle from its curvature, deriving `radius = 1/|k|`.
    pub fn from_curvature(center: Complex, curvature: f64) -> Self {
        Self {
            center,
            radius: 1.0 / curvature.abs(),
            curvature,
        }
    }

    /// Whether this circle encloses the packing (negative curvature).
    #[inline]
    pub fn is_bounding(&self) -> bool {
        self.curvature < 0.0
    }

    /// Center, radius and curvature are all finite and the radius is positive.
    pub fn is_finite(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.curvature.is_finite()
            && self.radius > 0.0
    }

    /// Distance between the centers of two circles.
    #[inline]
    pub fn center_distance(&self, other: &Self) -> f64 {
        self.center.distance(&other.center)
    }

    /// Whether two circles touch, externally or internally, within `tolerance`.
    ///
    /// External tangency: `d ≈ rA + rB`. Internal tangency: `d ≈ |rA - rB|`.
    pub fn is_tangent_to(&self, other: &Self, tolerance: f64) -> bool {
        check_position_valid(self, other, tolerance)
    }
}

impl std::fmt::Display for Circle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "center ({:.6}, {:.6}) r={:.6} k={:.6}",
            self.center.re, self.center.im, self.radius, self.curvature
        )
    }
}

/// Tangency relation used by the validity filter.
///
/// The pair is valid when the center distance is within `tolerance` of the
/// sum of radii or of their absolute difference.
pub fn check_position_valid(a: &Circle, b: &Circle, tolerance: f64) -> bool {
    let d = a.center_distance(b);
    let external = (d - (a.radius + b.radius)).abs() < tolerance;
    let internal = (d - (a.radius - b.radius).abs()).abs() < tolerance;
    external || internal
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-4;

    #[test]
    fn radius_from_curvature() {
        let c = Circle::from_curvature(Complex::ZERO, 4.0);
        assert_eq!(c.radius, 0.25);

        let outer = Circle::from_curvature(Complex::ZERO, -2.0);
        assert_eq!(outer.radius, 0.5);
        assert!(outer.is_bounding());
        assert!(!c.is_bounding());
    }

    #[test]
    fn external_tangency() {
        let a = Circle::from_curvature(Complex::real(0.5), 2.0);
        let b = Circle::from_curvature(Complex::real(-0.5), 2.0);
        assert!(check_position_valid(&a, &b, TOL));
        assert!(a.is_tangent_to(&b, TOL));
        assert!(b.is_tangent_to(&a, TOL));
    }

    #[test]
    fn internal_tangency() {
        let outer = Circle::new(Complex::ZERO, 1.0, -1.0);
        let inner = Circle::from_curvature(Complex::real(0.5), 2.0);
        assert!(check_position_valid(&outer, &inner, TOL));
    }

    #[test]
    fn overlapping_circles_are_not_tangent() {
        let a = Circle::from_curvature(Complex::real(0.2), 2.0);
        let b = Circle::from_curvature(Complex::real(-0.2), 2.0);
        assert!(!check_position_valid(&a, &b, TOL));
    }

    #[test]
    fn separated_circles_are_not_tangent() {
        let a = Circle::from_curvature(Complex::real(2.0), 2.0);
        let b = Circle::from_curvature(Complex::real(-2.0), 2.0);
        assert!(!check_position_valid(&a, &b, TOL));
    }

    #[test]
    fn tolerance_is_respected() {
        let a = Circle::from_curvature(Complex::real(0.5), 2.0);
        let b = Circle::from_curvature(Complex::new(-0.5 - 5e-5, 0.0), 2.0);
        assert!(check_position_valid(&a, &b, TOL));

        let c = Circle::from_curvature(Complex::new(-0.5 - 5e-4, 0.0), 2.0);
        assert!(!check_position_valid(&a, &c, TOL));
    }

    #[test]
    fn finiteness() {
        assert!(Circle::from_curvature(Complex::ZERO, 3.0).is_finite());
        assert!(!Circle::from_curvature(Complex::ZERO, 0.0).is_finite());
        assert!(!Circle::from_curvature(Complex::new(f64::NAN, 0.0), 3.0).is_finite());
        assert!(!Circle::from_curvature(Complex::ZERO, f64::NAN).is_finite());
    }
}
