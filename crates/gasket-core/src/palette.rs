//! Preset colors for consumers that tint circles by level or index.
//!
//! Cosmetic only: nothing in the geometry reads this table.

/// An RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Components as an array, e.g. for a vertex buffer.
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Number of distinct colors in the palette.
pub const PALETTE_SIZE: usize = 15;

/// The fixed palette.
pub const CIRCLE_COLORS: [Rgb; PALETTE_SIZE] = [
    Rgb::new(1.0, 0.0, 0.0), // Red
    Rgb::new(0.0, 1.0, 0.0), // Green
    Rgb::new(0.0, 0.0, 1.0), // Blue
    Rgb::new(1.0, 1.0, 0.0), // Yellow
    Rgb::new(0.0, 1.0, 1.0), // Cyan
    Rgb::new(1.0, 0.0, 1.0), // Magenta
    Rgb::new(1.0, 0.5, 0.0), // Orange
    Rgb::new(0.5, 0.0, 1.0), // Purple
    Rgb::new(0.0, 0.5, 0.5), // Teal
    Rgb::new(0.5, 0.5, 0.0), // Olive
    Rgb::new(0.8, 0.0, 0.4), // Deep pink
    Rgb::new(0.2, 0.8, 0.2), // Lime green
    Rgb::new(0.2, 0.2, 0.8), // Soft blue
    Rgb::new(0.9, 0.7, 0.3), // Gold
    Rgb::new(0.6, 0.3, 0.1), // Brown
];

/// Color for an arbitrary index, cycling through the palette.
#[inline]
pub const fn color_for(index: usize) -> Rgb {
    CIRCLE_COLORS[index % PALETTE_SIZE]
}
