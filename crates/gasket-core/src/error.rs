//! Error types for gasket-core.

use thiserror::Error;

/// Result type for gasket operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or expanding a gasket.
///
/// Geometric rejections of candidate circles are not errors; they are
/// reported through [`crate::Rejection`] and level statistics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// `generate` was asked for a negative number of levels.
    #[error("invalid level count: {0} (must be non-negative)")]
    InvalidLevelCount(i64),

    /// Seed split ratio outside the open interval (0, 1).
    #[error("invalid seed split ratio: {0} (must be strictly between 0 and 1)")]
    InvalidSeed(f64),

    /// A configuration value is out of range or unparsable.
    #[error("invalid config value for {field}: {value}")]
    InvalidConfig {
        field: &'static str,
        value: String,
    },
}
