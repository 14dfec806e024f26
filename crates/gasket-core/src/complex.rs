//! Complex numbers as points in the plane.
//!
//! Circle centers live in the complex plane so that the center form of
//! Descartes' theorem reduces to a handful of products and one square root.
//! Only the arithmetic the gasket needs is provided.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A complex value `re + im·i`, also used as a 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    /// Real part (x coordinate)
    pub re: f64,
    /// Imaginary part (y coordinate)
    pub im: f64,
}

impl Complex {
    /// The origin.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Create a new complex value.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// A purely real value.
    pub const fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Multiply both components by a real scalar.
    #[inline]
    pub fn scale(self, t: f64) -> Self {
        Self {
            re: self.re * t,
            im: self.im * t,
        }
    }

    /// Magnitude `sqrt(re² + im²)`.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).norm()
    }

    /// Argument in `(-π, π]`.
    #[inline]
    pub fn arg(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Principal square root.
    ///
    /// Computed in polar form: `sqrt(|z|) · (cos(θ/2), sin(θ/2))` with
    /// `θ = atan2(im, re)`. A non-negative real input yields its
    /// non-negative real root.
    pub fn sqrt(self) -> Self {
        let root_magnitude = self.norm().sqrt();
        let half_angle = self.arg() / 2.0;
        Self {
            re: root_magnitude * half_angle.cos(),
            im: root_magnitude * half_angle.sin(),
        }
    }

    /// Both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.re += other.re;
        self.im += other.im;
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, t: f64) -> Self {
        self.scale(t)
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOL: f64 = 1e-12;

    fn close(a: Complex, b: Complex) -> bool {
        a.distance(&b) < TOL
    }

    #[test]
    fn addition_subtraction() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(4.0, -1.5);

        assert_eq!(a + b, Complex::new(5.0, 0.5));
        assert_eq!(a - b, Complex::new(-3.0, 3.5));
        assert_eq!(a + (-b), a - b);

        let mut acc = Complex::ZERO;
        acc += a;
        acc += b;
        assert_eq!(acc, a + b);
    }

    #[test]
    fn multiplication() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i - 8 = -5 + 10i
        let product = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(product, Complex::new(-5.0, 10.0));

        // i * i = -1
        let i = Complex::new(0.0, 1.0);
        assert_eq!(i * i, Complex::real(-1.0));
    }

    #[test]
    fn real_scaling() {
        let z = Complex::new(0.5, -2.0);
        assert_eq!(z.scale(2.0), Complex::new(1.0, -4.0));
        assert_eq!(z * 2.0, z.scale(2.0));
        assert_eq!(z * 0.0, Complex::ZERO);
    }

    #[test]
    fn sqrt_of_non_negative_real_is_real() {
        for x in [0.0, 0.25, 1.0, 2.0, 9.0, 1e6] {
            let root = Complex::real(x).sqrt();
            assert_eq!(root.im, 0.0, "sqrt({x}) should have no imaginary part");
            assert!((root.re - x.sqrt()).abs() < TOL);
        }
    }

    #[test]
    fn sqrt_of_negative_real_is_positive_imaginary() {
        // atan2(+0, -1) = π, so the principal root lies on the +i axis
        let root = Complex::real(-4.0).sqrt();
        assert!(close(root, Complex::new(0.0, 2.0)), "got {root}");
    }

    #[test]
    fn sqrt_of_i() {
        let root = Complex::new(0.0, 1.0).sqrt();
        let expected = std::f64::consts::FRAC_1_SQRT_2;
        assert!(close(root, Complex::new(expected, expected)));
    }

    #[test]
    fn norm_and_distance() {
        assert_eq!(Complex::new(3.0, 4.0).norm(), 5.0);
        assert_eq!(Complex::new(1.0, 1.0).distance(&Complex::new(4.0, 5.0)), 5.0);
        assert_eq!(Complex::ZERO.norm(), 0.0);
    }

    #[test]
    fn finiteness() {
        assert!(Complex::new(1.0, -1.0).is_finite());
        assert!(!Complex::new(f64::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn display_signs() {
        assert_eq!(Complex::new(1.0, 2.0).to_string(), "1 + 2i");
        assert_eq!(Complex::new(1.0, -2.0).to_string(), "1 - 2i");
    }

    proptest! {
        #[test]
        fn sqrt_squares_back(re in -1e3f64..1e3, im in -1e3f64..1e3) {
            let z = Complex::new(re, im);
            let root = z.sqrt();
            let back = root * root;
            prop_assert!(back.distance(&z) <= 1e-9 * (1.0 + z.norm()));
        }

        #[test]
        fn sqrt_is_principal(re in -1e3f64..1e3, im in -1e3f64..1e3) {
            let root = Complex::new(re, im).sqrt();
            // Principal branch: argument in (-π/2, π/2]
            prop_assert!(root.re >= -1e-12);
        }

        #[test]
        fn multiplication_commutes(a in -1e3f64..1e3, b in -1e3f64..1e3,
                                   c in -1e3f64..1e3, d in -1e3f64..1e3) {
            let x = Complex::new(a, b);
            let y = Complex::new(c, d);
            prop_assert_eq!(x * y, y * x);
        }

        #[test]
        fn norm_is_multiplicative(a in -1e2f64..1e2, b in -1e2f64..1e2,
                                  c in -1e2f64..1e2, d in -1e2f64..1e2) {
            let x = Complex::new(a, b);
            let y = Complex::new(c, d);
            let lhs = (x * y).norm();
            let rhs = x.norm() * y.norm();
            prop_assert!((lhs - rhs).abs() <= 1e-9 * (1.0 + rhs));
        }
    }
}
