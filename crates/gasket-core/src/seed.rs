//! Initial configurations of three mutually tangent circles.
//!
//! Every seed is a unit bounding circle (curvature -1) holding two inner
//! circles whose diameters together span the bounding circle's diameter.
//! Inner radii `r` and `1 - r` sit at `(1 - r, 0)` and `(-r, 0)`: each is
//! internally tangent to the boundary and the two touch at `(1 - 2r, 0)`.

use crate::{Circle, Complex, Error, Result};

/// Three mutually tangent circles that start the packing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seed {
    circles: [Circle; 3],
}

impl Seed {
    /// The symmetric seed: two circles of radius 0.5 at `(±0.5, 0)`.
    pub fn symmetric() -> Self {
        Self {
            circles: [
                Circle::new(Complex::ZERO, 1.0, -1.0),
                Circle::new(Complex::real(0.5), 0.5, 1.0 / 0.5),
                Circle::new(Complex::real(-0.5), 0.5, 1.0 / 0.5),
            ],
        }
    }

    /// Split the bounding diameter at `ratio`, giving inner radii `ratio`
    /// and `1 - ratio`.
    pub fn split(ratio: f64) -> Result<Self> {
        if !ratio.is_finite() || ratio <= 0.0 || ratio >= 1.0 {
            return Err(Error::InvalidSeed(ratio));
        }

        let first = ratio;
        let second = 1.0 - ratio;

        Ok(Self {
            circles: [
                Circle::new(Complex::ZERO, 1.0, -1.0),
                Circle::new(Complex::real(1.0 - first), first, 1.0 / first),
                Circle::new(Complex::real(-first), second, 1.0 / second),
            ],
        })
    }

    /// The bounding circle followed by the two inner circles.
    pub fn circles(&self) -> [Circle; 3] {
        self.circles
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::symmetric()
    }
}
