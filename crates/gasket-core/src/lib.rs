//! Apollonian Gasket Generation
//!
//! Packs mutually tangent circles into the curvilinear gaps between three
//! mutually tangent seed circles, level by level, using Descartes' Circle
//! Theorem.
//!
//! # Mathematical Foundation
//!
//! Given three mutually tangent circles with signed curvatures `k1, k2, k3`
//! (the enclosing circle's curvature is negative), a fourth tangent circle has
//!
//! ```text
//! k4 = k1 + k2 + k3 ± 2·sqrt(k1·k2 + k2·k3 + k1·k3)
//! ```
//!
//! The complex form of the theorem gives the fourth center from the three
//! known centers, see [`descartes`].
//!
//! # Expansion
//!
//! The gasket starts from a bounding circle of curvature -1 and two inner
//! circles of curvature 2. Each level fills every open triangle with the
//! circles that pass the validity filter (finite, bounded radius, not a
//! duplicate, tangent to all three generators). Each accepted circle opens
//! three new triangles, so level `n` of the symmetric seed adds `2·3^(n-1)`
//! circles.
//!
//! ```
//! use gasket_core::Gasket;
//!
//! let mut gasket = Gasket::new();
//! gasket.generate(3).unwrap();
//! assert_eq!(gasket.circles_in_level(), &[3, 2, 6, 18]);
//! ```

mod circle;
mod complex;
mod config;
pub mod descartes;
mod error;
mod gasket;
pub mod palette;
mod seed;

pub use circle::{check_position_valid, Circle};
pub use complex::Complex;
pub use config::{GasketConfig, DEFAULT_MAX_RADIUS, DEFAULT_MIN_SEPARATION, DEFAULT_TANGENCY_TOLERANCE};
pub use descartes::{next_centers, next_circles, next_curvatures};
pub use error::{Error, Result};
pub use gasket::{Gasket, GenerateReport, LevelStats, Rejection, Triangle};
pub use palette::{color_for, Rgb, CIRCLE_COLORS};
pub use seed::Seed;
