//! # Equivalent Isotropic Moduli
//!
//! Voigt (uniform strain) and Reuss (uniform stress) estimates of the bulk
//! modulus, shear modulus and Poisson ratio of a single-crystal stiffness.
//!
//! ## Formulas
//!
//! Voigt:
//! - `K = (C11 + C22 + C33 + 2(C12 + C23 + C13)) / 9`
//! - `μ = (C11 + C22 + C33 - (C12 + C23 + C13) + 3(C44 + C55 + C66)) / 15`
//!
//! Reuss, with `S = C⁻¹`:
//! - `K = 1 / (S11 + S22 + S33 + 2(S12 + S23 + S13))`
//! - `μ = 15 / (4(S11 + S22 + S33) - 4(S12 + S23 + S13) + 3(S44 + S55 + S66))`
//!
//! Poisson ratio: `ν = (1.5K - μ) / (3K + μ)`
//!
//! ## Example
//!
//! ```rust
//! use lattice_core::lattice::LatticeFamily;
//! use lattice_core::moduli::{equivalent_shear_modulus, Averaging};
//! use lattice_core::symmetry::symmetrize_c66;
//! use lattice_core::types::Matrix6;
//!
//! let mut c = Matrix6::zeros();
//! c[(0, 0)] = 250.0;
//! c[(0, 1)] = 100.0;
//! c[(3, 3)] = 75.0;
//! let c = symmetrize_c66(&c, LatticeFamily::Ci);
//!
//! let mu = equivalent_shear_modulus(&c, Averaging::Voigt).unwrap();
//! assert!((mu - 75.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{LatticeError, LatticeResult};
use crate::types::Matrix6;

/// Averaging assumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Averaging {
    /// Uniform strain
    Voigt,
    /// Uniform stress
    Reuss,
}

impl Averaging {
    pub const ALL: [Averaging; 2] = [Averaging::Voigt, Averaging::Reuss];

    /// Parse case-insensitively
    pub fn from_str_flexible(s: &str) -> LatticeResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "voigt" => Ok(Averaging::Voigt),
            "reuss" => Ok(Averaging::Reuss),
            _ => Err(LatticeError::UnknownAveraging {
                assumption: s.to_string(),
            }),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Averaging::Voigt => "Voigt",
            Averaging::Reuss => "Reuss",
        }
    }
}

impl std::fmt::Display for Averaging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Bulk modulus, shear modulus and Poisson ratio under one assumption
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquivalentModuli {
    pub averaging: Averaging,
    pub bulk: f64,
    pub shear: f64,
    pub poisson: f64,
}

fn compliance(c66: &Matrix6) -> LatticeResult<Matrix6> {
    c66.try_inverse()
        .ok_or_else(|| LatticeError::singular("stiffness matrix has no inverse (Reuss compliance)"))
}

fn normal_sum(m: &Matrix6) -> f64 {
    m[(0, 0)] + m[(1, 1)] + m[(2, 2)]
}

fn normal_off_sum(m: &Matrix6) -> f64 {
    m[(0, 1)] + m[(1, 2)] + m[(0, 2)]
}

fn shear_sum(m: &Matrix6) -> f64 {
    m[(3, 3)] + m[(4, 4)] + m[(5, 5)]
}

/// Equivalent bulk modulus
pub fn equivalent_bulk_modulus(c66: &Matrix6, averaging: Averaging) -> LatticeResult<f64> {
    match averaging {
        Averaging::Voigt => Ok((normal_sum(c66) + 2.0 * normal_off_sum(c66)) / 9.0),
        Averaging::Reuss => {
            let s = compliance(c66)?;
            Ok(1.0 / (normal_sum(&s) + 2.0 * normal_off_sum(&s)))
        }
    }
}

/// Equivalent shear modulus
pub fn equivalent_shear_modulus(c66: &Matrix6, averaging: Averaging) -> LatticeResult<f64> {
    match averaging {
        Averaging::Voigt => Ok((normal_sum(c66) - normal_off_sum(c66) + 3.0 * shear_sum(c66)) / 15.0),
        Averaging::Reuss => {
            let s = compliance(c66)?;
            Ok(15.0 / (4.0 * normal_sum(&s) - 4.0 * normal_off_sum(&s) + 3.0 * shear_sum(&s)))
        }
    }
}

/// Equivalent Poisson ratio
pub fn equivalent_poisson_ratio(c66: &Matrix6, averaging: Averaging) -> LatticeResult<f64> {
    let k = equivalent_bulk_modulus(c66, averaging)?;
    let mu = equivalent_shear_modulus(c66, averaging)?;
    Ok((1.5 * k - mu) / (3.0 * k + mu))
}

/// All three moduli at once
pub fn equivalent_moduli(c66: &Matrix6, averaging: Averaging) -> LatticeResult<EquivalentModuli> {
    let bulk = equivalent_bulk_modulus(c66, averaging)?;
    let shear = equivalent_shear_modulus(c66, averaging)?;
    Ok(EquivalentModuli {
        averaging,
        bulk,
        shear,
        poisson: (1.5 * bulk - shear) / (3.0 * bulk + shear),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::LatticeFamily;
    use crate::symmetry::symmetrize_c66;

    fn assert_close(a: f64, b: f64, rel: f64) {
        assert!((a - b).abs() <= rel * a.abs().max(b.abs()), "{a} != {b}");
    }

    fn cubic(c11: f64, c12: f64, c44: f64) -> Matrix6 {
        let mut c = Matrix6::zeros();
        c[(0, 0)] = c11;
        c[(0, 1)] = c12;
        c[(3, 3)] = c44;
        symmetrize_c66(&c, LatticeFamily::Cf)
    }

    #[test]
    fn test_isotropic_moduli_agree() {
        let (lambda, mu) = (110.0, 45.0);
        let c = cubic(lambda + 2.0 * mu, lambda, mu);
        for averaging in Averaging::ALL {
            let m = equivalent_moduli(&c, averaging).unwrap();
            assert_close(m.shear, mu, 1e-12);
            assert_close(m.bulk, lambda + 2.0 * mu / 3.0, 1e-12);
            assert_close(m.poisson, lambda / (2.0 * (lambda + mu)), 1e-12);
        }
    }

    #[test]
    fn test_voigt_bounds_reuss() {
        let c = cubic(168.4, 121.4, 75.4);
        let voigt = equivalent_shear_modulus(&c, Averaging::Voigt).unwrap();
        let reuss = equivalent_shear_modulus(&c, Averaging::Reuss).unwrap();
        assert!(voigt > reuss);
        // cubic crystals share one bulk modulus under both assumptions
        assert_close(
            equivalent_bulk_modulus(&c, Averaging::Voigt).unwrap(),
            equivalent_bulk_modulus(&c, Averaging::Reuss).unwrap(),
            1e-12,
        );
    }

    #[test]
    fn test_poisson_ratio_function() {
        let c = cubic(168.4, 121.4, 75.4);
        let m = equivalent_moduli(&c, Averaging::Reuss).unwrap();
        assert_close(equivalent_poisson_ratio(&c, Averaging::Reuss).unwrap(), m.poisson, 1e-14);
    }

    #[test]
    fn test_singular_stiffness() {
        let err = equivalent_bulk_modulus(&Matrix6::zeros(), Averaging::Reuss).unwrap_err();
        assert_eq!(err.error_code(), "SINGULAR_MATRIX");
        assert!(equivalent_bulk_modulus(&Matrix6::zeros(), Averaging::Voigt).is_ok());
    }

    #[test]
    fn test_averaging_parsing() {
        assert_eq!(Averaging::from_str_flexible("VOIGT").unwrap(), Averaging::Voigt);
        assert_eq!(Averaging::from_str_flexible("reuss").unwrap(), Averaging::Reuss);
        assert_eq!(
            Averaging::from_str_flexible("hill").unwrap_err(),
            LatticeError::UnknownAveraging {
                assumption: "hill".to_string()
            }
        );
    }
}
