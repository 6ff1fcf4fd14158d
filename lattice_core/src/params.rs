//! # Lattice Parameters
//!
//! Validated scalar parameters. These are thin `f64` newtypes that serialize
//! as plain numbers but can only be built through a checking constructor, so
//! a frame builder holding an `AspectRatio` never has to re-validate it.
//! Deserialization goes through the same checks (`TryFrom<f64>`).
//!
//! ## Example
//!
//! ```rust
//! use lattice_core::lattice::LatticeFamily;
//! use lattice_core::params::{AspectRatio, LatticeParameter};
//!
//! let ca = AspectRatio::for_lattice(LatticeFamily::Hp, 1.633).unwrap();
//! assert_eq!(ca.value(), 1.633);
//! assert!(AspectRatio::for_lattice(LatticeFamily::Hp, 2.5).is_err());
//!
//! // Cubic families ignore c/a
//! assert_eq!(AspectRatio::for_lattice(LatticeFamily::Cf, 7.0).unwrap().value(), 1.0);
//!
//! let a = LatticeParameter::new("a_cF", 3.6e-10).unwrap();
//! assert!(a.value() > 0.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{LatticeError, LatticeResult};
use crate::lattice::LatticeFamily;

/// Upper bound on c/a for the non-cubic families
pub const MAX_C_OVER_A: f64 = 2.0;

// ============================================================================
// Aspect Ratio
// ============================================================================

/// Axial ratio c/a, validated for a particular lattice family
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AspectRatio(f64);

impl AspectRatio {
    /// Unit ratio, used for the cubic families
    pub const CUBIC: AspectRatio = AspectRatio(1.0);

    /// Validate `value` as the c/a ratio of `family`.
    ///
    /// - `cF`, `cI`: the value is ignored and 1 is returned
    /// - `hP`: must lie in (1, 2]
    /// - `tI`: must lie in (0, 2]
    pub fn for_lattice(family: LatticeFamily, value: f64) -> LatticeResult<Self> {
        match family {
            LatticeFamily::Cf | LatticeFamily::Ci => Ok(Self::CUBIC),
            LatticeFamily::Hp => {
                if !value.is_finite() || value <= 1.0 || value > MAX_C_OVER_A {
                    return Err(LatticeError::out_of_range(
                        "c/a",
                        value,
                        "hexagonal c/a must lie in (1, 2]",
                    ));
                }
                Ok(AspectRatio(value))
            }
            LatticeFamily::Ti => {
                if !value.is_finite() || value <= 0.0 || value > MAX_C_OVER_A {
                    return Err(LatticeError::out_of_range(
                        "c/a",
                        value,
                        "tetragonal c/a must lie in (0, 2]",
                    ));
                }
                if value == 1.0 {
                    warn!(lattice = "tI", "c/a = 1 degenerates the tetragonal cell to cubic");
                }
                Ok(AspectRatio(value))
            }
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::CUBIC
    }
}

/// Family-independent check used when loading a stored ratio: positive and
/// at most [`MAX_C_OVER_A`]
impl TryFrom<f64> for AspectRatio {
    type Error = LatticeError;

    fn try_from(value: f64) -> LatticeResult<Self> {
        if !value.is_finite() || value <= 0.0 || value > MAX_C_OVER_A {
            return Err(LatticeError::out_of_range("c/a", value, "c/a must lie in (0, 2]"));
        }
        Ok(AspectRatio(value))
    }
}

impl From<AspectRatio> for f64 {
    fn from(ratio: AspectRatio) -> f64 {
        ratio.0
    }
}

// ============================================================================
// Lattice Parameter
// ============================================================================

/// Lattice constant (any consistent length unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct LatticeParameter(f64);

impl LatticeParameter {
    /// Validate a positive, finite lattice constant. `name` is used in the
    /// error report.
    pub fn new(name: &str, value: f64) -> LatticeResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(LatticeError::out_of_range(
                name,
                value,
                "lattice parameter must be positive",
            ));
        }
        Ok(LatticeParameter(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for LatticeParameter {
    type Error = LatticeError;

    fn try_from(value: f64) -> LatticeResult<Self> {
        LatticeParameter::new("lattice parameter", value)
    }
}

impl From<LatticeParameter> for f64 {
    fn from(parameter: LatticeParameter) -> f64 {
        parameter.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexagonal_range() {
        assert!(AspectRatio::for_lattice(LatticeFamily::Hp, 1.0).is_err());
        assert!(AspectRatio::for_lattice(LatticeFamily::Hp, 2.0).is_ok());
        assert!(AspectRatio::for_lattice(LatticeFamily::Hp, 1.587).is_ok());
        assert!(AspectRatio::for_lattice(LatticeFamily::Hp, f64::NAN).is_err());

        let err = AspectRatio::for_lattice(LatticeFamily::Hp, 2.5).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_tetragonal_range() {
        assert!(AspectRatio::for_lattice(LatticeFamily::Ti, 0.0).is_err());
        assert!(AspectRatio::for_lattice(LatticeFamily::Ti, -0.5).is_err());
        assert!(AspectRatio::for_lattice(LatticeFamily::Ti, 2.1).is_err());
        assert!(AspectRatio::for_lattice(LatticeFamily::Ti, 0.5456).is_ok());
        assert!(AspectRatio::for_lattice(LatticeFamily::Ti, 1.0).is_ok());
    }

    #[test]
    fn test_cubic_ignores_value() {
        let ca = AspectRatio::for_lattice(LatticeFamily::Ci, -3.0).unwrap();
        assert_eq!(ca, AspectRatio::CUBIC);
    }

    #[test]
    fn test_lattice_parameter_positive() {
        assert!(LatticeParameter::new("a_cI", 2.87).is_ok());
        match LatticeParameter::new("a_cI", 0.0) {
            Err(LatticeError::OutOfRange { parameter, .. }) => assert_eq!(parameter, "a_cI"),
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_serialization_is_transparent() {
        let ca = AspectRatio::for_lattice(LatticeFamily::Hp, 1.5).unwrap();
        assert_eq!(serde_json::to_string(&ca).unwrap(), "1.5");
        let a = LatticeParameter::new("a_cF", 3.6).unwrap();
        assert_eq!(serde_json::to_string(&a).unwrap(), "3.6");
    }

    #[test]
    fn test_deserialization_validates() {
        assert!(serde_json::from_str::<AspectRatio>("-3.0").is_err());
        assert!(serde_json::from_str::<AspectRatio>("2.5").is_err());
        assert_eq!(serde_json::from_str::<AspectRatio>("1.633").unwrap().value(), 1.633);

        assert!(serde_json::from_str::<LatticeParameter>("-3.0").is_err());
        assert!(serde_json::from_str::<LatticeParameter>("0.0").is_err());
        assert_eq!(serde_json::from_str::<LatticeParameter>("2.87").unwrap().value(), 2.87);
    }
}
