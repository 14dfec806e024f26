//! Descartes' Circle Theorem
//!
//! For four mutually tangent circles with curvatures `k1..k4`:
//!
//! ```text
//! k4 = k1 + k2 + k3 ± 2·sqrt(k1·k2 + k2·k3 + k1·k3)
//! ```
//!
//! and, treating centers as complex numbers `z = x + yi`:
//!
//! ```text
//! z4·k4 = z1·k1 + z2·k2 + z3·k3 ± 2·sqrt(z1·k1·z2·k2 + z2·k2·z3·k3 + z1·k1·z3·k3)
//! ```
//!
//! Both equations are two-valued. The solvers here return every root; which
//! combination is geometrically real is decided afterwards by the gasket's
//! validity filter, since picking a root up front is unreliable near
//! degenerate configurations.

use crate::{Circle, Complex};

/// Number of candidate circles computed per triangle.
pub const CANDIDATES_PER_TRIANGLE: usize = 4;

/// Relative slack under which a negative curvature discriminant is treated
/// as rounding noise and clamped to zero.
const DISCRIMINANT_SLACK: f64 = 1e-9;

/// The two curvature roots for a fourth circle tangent to `c1`, `c2`, `c3`.
///
/// The `+` root comes first. A discriminant that is negative beyond rounding
/// noise yields NaN roots, which the validity filter rejects.
pub fn next_curvatures(c1: &Circle, c2: &Circle, c3: &Circle) -> [f64; 2] {
    let (k1, k2, k3) = (c1.curvature, c2.curvature, c3.curvature);

    let sum = k1 + k2 + k3;
    let mut discriminant = k1 * k2 + k2 * k3 + k1 * k3;

    let scale = (k1 * k2).abs() + (k2 * k3).abs() + (k1 * k3).abs();
    if discriminant < 0.0 && discriminant >= -DISCRIMINANT_SLACK * scale {
        discriminant = 0.0;
    }

    let root = 2.0 * discriminant.sqrt();
    [sum + root, sum - root]
}

/// The two center roots `z1·k1 + z2·k2 + z3·k3 ± 2·sqrt(...)`, not yet
/// divided by the new curvature.
fn weighted_centers(c1: &Circle, c2: &Circle, c3: &Circle) -> [Complex; 2] {
    let zk1 = c1.center * c1.curvature;
    let zk2 = c2.center * c2.curvature;
    let zk3 = c3.center * c3.curvature;

    let sum = zk1 + zk2 + zk3;
    let root = (zk1 * zk2 + zk2 * zk3 + zk1 * zk3).sqrt() * 2.0;

    [sum + root, sum - root]
}

/// Center candidates for a fourth circle of curvature `k4`.
pub fn next_centers(c1: &Circle, c2: &Circle, c3: &Circle, k4: f64) -> [Complex; 2] {
    weighted_centers(c1, c2, c3).map(|w| w * (1.0 / k4))
}

/// All four candidate circles for the triangle `(c1, c2, c3)`.
///
/// Ordered `(k+, z+)`, `(k+, z-)`, `(k-, z+)`, `(k-, z-)`. Typically two of
/// them fill the gap and two are geometrically wrong.
pub fn next_circles(
    c1: &Circle,
    c2: &Circle,
    c3: &Circle,
    curvatures: [f64; 2],
) -> [Circle; CANDIDATES_PER_TRIANGLE] {
    let [plus, minus] = weighted_centers(c1, c2, c3);
    let [ka, kb] = curvatures;

    [
        Circle::from_curvature(plus * (1.0 / ka), ka),
        Circle::from_curvature(minus * (1.0 / ka), ka),
        Circle::from_curvature(plus * (1.0 / kb), kb),
        Circle::from_curvature(minus * (1.0 / kb), kb),
    ]
}
