//! # Characteristic Twin Shear
//!
//! Magnitude of the shear carried by each active twin system.
//!
//! Cubic twins shear by `√2/2`. Hexagonal twin shears depend on the axial
//! ratio `r = c/a`:
//!
//! | type | twin family | shear |
//! |------|-------------|-------|
//! | 1 | `<-10.1>{10.2}` | `(3 - r²)/(√3·r)` |
//! | 2 | `<11.6>{-1-1.1}` | `1/r` |
//! | 3 | `<10.-2>{10.1}` | `(4r² - 9)/(4√3·r)` |
//! | 4 | `<11.-3>{11.2}` | `2(r² - 2)/(3r)` |
//!
//! ## Example
//!
//! ```rust
//! use lattice_core::lattice::LatticeFamily;
//! use lattice_core::selection::ActiveSelection;
//! use lattice_core::twinning::characteristic_shear_twin;
//!
//! let shear = characteristic_shear_twin(LatticeFamily::Hp, &ActiveSelection::new(vec![0, 1]), 1.633).unwrap();
//! assert!((shear[0] - 1.0 / 1.633).abs() < 1e-12);
//! ```

use crate::catalog::{catalog, hexagonal};
use crate::errors::{LatticeError, LatticeResult};
use crate::lattice::{LatticeFamily, SystemKind};
use crate::params::AspectRatio;
use crate::selection::ActiveSelection;

/// Shear of a hexagonal twin of formula `shear_type` for axial ratio `r`
fn hexagonal_shear(shear_type: u8, r: f64) -> LatticeResult<f64> {
    let s3 = 3.0_f64.sqrt();
    match shear_type {
        1 => Ok((3.0 - r * r) / (s3 * r)),
        2 => Ok(1.0 / r),
        3 => Ok((4.0 * r * r - 9.0) / (4.0 * s3 * r)),
        4 => Ok(2.0 * (r * r - 2.0) / (3.0 * r)),
        other => Err(LatticeError::invalid_input(
            "twin_shear_type",
            other.to_string(),
            "hexagonal twin shear types are 1 to 4",
        )),
    }
}

/// Characteristic shear of every active twin system
pub fn characteristic_shear_twin(
    lattice: LatticeFamily,
    active: &ActiveSelection,
    c_over_a: f64,
) -> LatticeResult<Vec<f64>> {
    let catalog = catalog(lattice, SystemKind::Twin)?;
    let ratio = AspectRatio::for_lattice(lattice, c_over_a)?;
    let indices = active.potential_indices(catalog)?;

    match lattice {
        LatticeFamily::Hp => indices
            .into_iter()
            .map(|p| hexagonal_shear(hexagonal::TWIN_SHEAR_TYPES[p], ratio.value()))
            .collect(),
        _ => Ok(vec![0.5_f64.sqrt(); indices.len()]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_cubic_shear() {
        for lattice in [LatticeFamily::Cf, LatticeFamily::Ci] {
            let shear = characteristic_shear_twin(lattice, &ActiveSelection::new(vec![12]), 0.0).unwrap();
            assert_eq!(shear.len(), 12);
            assert!(shear.iter().all(|&s| (s - 2.0_f64.sqrt() / 2.0).abs() < TOL));
        }
    }

    #[test]
    fn test_hexagonal_tensile_twin() {
        let r = 1.633;
        let shear = characteristic_shear_twin(LatticeFamily::Hp, &ActiveSelection::new(vec![1]), r).unwrap();
        let expected = (3.0 - r * r) / 3.0_f64.sqrt() / r;
        assert!((shear[0] - expected).abs() < TOL);
        assert!((shear[0] - 0.11784).abs() < 1e-4);
    }

    #[test]
    fn test_hexagonal_types_follow_families() {
        let r: f64 = 1.587;
        let s3 = 3.0_f64.sqrt();
        let shear = characteristic_shear_twin(LatticeFamily::Hp, &ActiveSelection::new(vec![6, 6, 6, 6]), r).unwrap();
        assert_eq!(shear.len(), 24);
        assert!((shear[5] - (3.0 - r * r) / (s3 * r)).abs() < TOL);
        assert!((shear[6] - 1.0 / r).abs() < TOL);
        assert!((shear[12] - (4.0 * r * r - 9.0) / (4.0 * s3 * r)).abs() < TOL);
        assert!((shear[23] - 2.0 * (r * r - 2.0) / (3.0 * r)).abs() < TOL);
    }

    #[test]
    fn test_hexagonal_ratio_validated() {
        let err = characteristic_shear_twin(LatticeFamily::Hp, &ActiveSelection::new(vec![1]), 2.5).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_unknown_shear_type_rejected() {
        assert!(hexagonal_shear(4, 1.587).is_ok());
        for bad in [0, 5, 255] {
            assert_eq!(hexagonal_shear(bad, 1.587).unwrap_err().error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_shear_type_table_in_range() {
        assert!(hexagonal::TWIN_SHEAR_TYPES.iter().all(|t| (1..=4).contains(t)));
    }

    #[test]
    fn test_tetragonal_unsupported() {
        let err = characteristic_shear_twin(LatticeFamily::Ti, &ActiveSelection::new(vec![1]), 1.2).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_LATTICE");
    }
}
