//! # Error Types
//!
//! Structured error types for lattice_core. Every failure names the offending
//! lattice, system kind, or parameter so the caller can decide whether to
//! abort the run or report back to the user.
//!
//! Errors fall into two classes:
//!
//! - **Configuration errors**: unsupported lattice/kind combinations, invalid
//!   active-system selections, out-of-range parameters, too few interaction
//!   coefficients.
//! - **Internal-consistency errors**: a Schmid tensor that is not deviatoric,
//!   a singular stiffness matrix, an unknown averaging assumption, a failed
//!   self-test check.
//!
//! ## Example
//!
//! ```rust
//! use lattice_core::errors::{LatticeError, LatticeResult};
//!
//! fn validate_c_over_a(c_over_a: f64) -> LatticeResult<()> {
//!     if c_over_a <= 1.0 || c_over_a > 2.0 {
//!         return Err(LatticeError::out_of_range(
//!             "c/a",
//!             c_over_a,
//!             "hexagonal c/a must lie in (1, 2]",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_c_over_a(2.5).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for lattice_core operations
pub type LatticeResult<T> = Result<T, LatticeError>;

/// Structured error type for lattice operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum LatticeError {
    /// The lattice family has no catalog for this system kind
    #[error("Unsupported lattice: no {kind} systems for lattice '{lattice}'")]
    UnsupportedLattice { lattice: String, kind: String },

    /// Active system counts do not fit the family structure
    #[error("Invalid {kind} selection for lattice '{lattice}': {reason}")]
    InvalidSelection {
        lattice: String,
        kind: String,
        reason: String,
    },

    /// A scalar parameter lies outside its physically valid range
    #[error("Parameter '{parameter}' out of range: {value} - {reason}")]
    OutOfRange {
        parameter: String,
        value: f64,
        reason: String,
    },

    /// The coefficient vector is shorter than the largest interaction type used
    #[error("Insufficient interaction coefficients: type {required} requested, only {supplied} supplied")]
    InsufficientCoefficients { required: usize, supplied: usize },

    /// Sense of a unidirectional slip system must be -1 or +1
    #[error("Invalid sense {sense}: must be -1 or +1")]
    InvalidSense { sense: i32 },

    /// Any other invalid input
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Averaging assumption is neither Voigt nor Reuss
    #[error("Unknown averaging assumption: '{assumption}' (expected 'voigt' or 'reuss')")]
    UnknownAveraging { assumption: String },

    /// A constructed Schmid tensor has a non-vanishing trace
    #[error("Non-deviatoric {kind} Schmid tensor for system {system}: trace = {trace:e}")]
    NonDeviatoric {
        kind: String,
        system: usize,
        trace: f64,
    },

    /// Matrix inversion failed
    #[error("Singular matrix: {context}")]
    SingularMatrix { context: String },

    /// A self-test check did not hold
    #[error("Self-test failed: {check} - {detail}")]
    SelfTestFailed { check: String, detail: String },
}

impl LatticeError {
    /// Create an UnsupportedLattice error
    pub fn unsupported(lattice: impl Into<String>, kind: impl Into<String>) -> Self {
        LatticeError::UnsupportedLattice {
            lattice: lattice.into(),
            kind: kind.into(),
        }
    }

    /// Create an InvalidSelection error
    pub fn invalid_selection(
        lattice: impl Into<String>,
        kind: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        LatticeError::InvalidSelection {
            lattice: lattice.into(),
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(parameter: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        LatticeError::OutOfRange {
            parameter: parameter.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        LatticeError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SingularMatrix error
    pub fn singular(context: impl Into<String>) -> Self {
        LatticeError::SingularMatrix {
            context: context.into(),
        }
    }

    /// Create a SelfTestFailed error
    pub fn self_test(check: impl Into<String>, detail: impl Into<String>) -> Self {
        LatticeError::SelfTestFailed {
            check: check.into(),
            detail: detail.into(),
        }
    }

    /// Whether the error stems from caller-supplied configuration
    /// (as opposed to an internal-consistency failure)
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            LatticeError::UnsupportedLattice { .. }
                | LatticeError::InvalidSelection { .. }
                | LatticeError::OutOfRange { .. }
                | LatticeError::InsufficientCoefficients { .. }
                | LatticeError::InvalidSense { .. }
                | LatticeError::InvalidInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            LatticeError::UnsupportedLattice { .. } => "UNSUPPORTED_LATTICE",
            LatticeError::InvalidSelection { .. } => "INVALID_SELECTION",
            LatticeError::OutOfRange { .. } => "OUT_OF_RANGE",
            LatticeError::InsufficientCoefficients { .. } => "INSUFFICIENT_COEFFICIENTS",
            LatticeError::InvalidSense { .. } => "INVALID_SENSE",
            LatticeError::InvalidInput { .. } => "INVALID_INPUT",
            LatticeError::UnknownAveraging { .. } => "UNKNOWN_AVERAGING",
            LatticeError::NonDeviatoric { .. } => "NON_DEVIATORIC",
            LatticeError::SingularMatrix { .. } => "SINGULAR_MATRIX",
            LatticeError::SelfTestFailed { .. } => "SELF_TEST_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = LatticeError::out_of_range("c/a", 2.5, "hexagonal c/a must lie in (1, 2]");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"OutOfRange\""));
        let roundtrip: LatticeError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(LatticeError::unsupported("tI", "twin").error_code(), "UNSUPPORTED_LATTICE");
        assert_eq!(LatticeError::singular("compliance").error_code(), "SINGULAR_MATRIX");
        assert_eq!(
            LatticeError::InsufficientCoefficients { required: 8, supplied: 7 }.error_code(),
            "INSUFFICIENT_COEFFICIENTS"
        );
    }

    #[test]
    fn test_error_classes() {
        assert!(LatticeError::InvalidSense { sense: 0 }.is_configuration_error());
        assert!(!LatticeError::NonDeviatoric {
            kind: "slip".to_string(),
            system: 3,
            trace: 1e-3,
        }
        .is_configuration_error());
    }

    #[test]
    fn test_error_display_names_parameter() {
        let error = LatticeError::unsupported("hP", "cleavage");
        assert_eq!(
            error.to_string(),
            "Unsupported lattice: no cleavage systems for lattice 'hP'"
        );
    }
}
