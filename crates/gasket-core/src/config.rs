//! Numerical tolerances for the validity filter.

use crate::{Error, Result};

/// Default tolerance for the tangency test.
pub const DEFAULT_TANGENCY_TOLERANCE: f64 = 1e-4;

/// Default minimum distance between two accepted centers.
pub const DEFAULT_MIN_SEPARATION: f64 = 1e-3;

/// Default upper bound on a generated circle's radius.
pub const DEFAULT_MAX_RADIUS: f64 = 1.0;

/// Tolerances applied when deciding whether a candidate circle is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GasketConfig {
    /// Allowed slack in `d ≈ rA ± rB` for two circles to count as tangent
    pub tangency_tolerance: f64,
    /// Candidates closer than this to an existing center are duplicates
    pub min_separation: f64,
    /// Candidates with a larger radius are rejected
    pub max_radius: f64,
}

impl Default for GasketConfig {
    fn default() -> Self {
        Self {
            tangency_tolerance: DEFAULT_TANGENCY_TOLERANCE,
            min_separation: DEFAULT_MIN_SEPARATION,
            max_radius: DEFAULT_MAX_RADIUS,
        }
    }
}

impl GasketConfig {
    /// Create config from environment variables, falling back to defaults.
    ///
    /// Reads `GASKET_TANGENCY_TOLERANCE`, `GASKET_MIN_SEPARATION` and
    /// `GASKET_MAX_RADIUS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &'static str, default: f64| -> Result<f64> {
            match lookup(key) {
                Some(raw) => raw.trim().parse().map_err(|_| Error::InvalidConfig {
                    field: key,
                    value: raw,
                }),
                None => Ok(default),
            }
        };

        let config = Self {
            tangency_tolerance: read("GASKET_TANGENCY_TOLERANCE", defaults.tangency_tolerance)?,
            min_separation: read("GASKET_MIN_SEPARATION", defaults.min_separation)?,
            max_radius: read("GASKET_MAX_RADIUS", defaults.max_radius)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every tolerance is finite and positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("tangency_tolerance", self.tangency_tolerance),
            ("min_separation", self.min_separation),
            ("max_radius", self.max_radius),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = GasketConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tangency_tolerance, 1e-4);
        assert_eq!(config.min_separation, 1e-3);
        assert_eq!(config.max_radius, 1.0);
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = GasketConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GasketConfig::default());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = GasketConfig::from_lookup(lookup(&[
            ("GASKET_TANGENCY_TOLERANCE", "1e-6"),
            ("GASKET_MAX_RADIUS", " 0.5 "),
        ]))
        .unwrap();
        assert_eq!(config.tangency_tolerance, 1e-6);
        assert_eq!(config.min_separation, DEFAULT_MIN_SEPARATION);
        assert_eq!(config.max_radius, 0.5);
    }

    #[test]
    fn unparsable_value_is_rejected() {
        let err = GasketConfig::from_lookup(lookup(&[("GASKET_MIN_SEPARATION", "tiny")]))
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidConfig {
                field: "GASKET_MIN_SEPARATION",
                value: "tiny".to_string(),
            }
        );
    }

    #[test]
    fn non_positive_values_are_rejected() {
        let zero = GasketConfig {
            min_separation: 0.0,
            ..GasketConfig::default()
        };
        assert!(matches!(
            zero.validate(),
            Err(Error::InvalidConfig { field: "min_separation", .. })
        ));

        let nan = GasketConfig {
            tangency_tolerance: f64::NAN,
            ..GasketConfig::default()
        };
        assert!(nan.validate().is_err());

        let negative = GasketConfig::from_lookup(lookup(&[("GASKET_MAX_RADIUS", "-1")]));
        assert!(negative.is_err());
    }
}
