//! # Schmid Tensors
//!
//! Projection tensors that resolve a stress onto the active systems:
//!
//! - slip and twin: `P = d ⊗ n`, checked to be deviatoric
//! - cleavage: three tensors per system, `d ⊗ n`, `t ⊗ n`, `n ⊗ n`
//! - transformation: the eigenstrain of each transformation system
//! - non-Schmid (cI slip): `d ⊗ n` plus coefficient-weighted correction
//!   terms for the twinning/antitwinning asymmetry of screw dislocations
//!
//! ## Example
//!
//! ```rust
//! use lattice_core::lattice::LatticeFamily;
//! use lattice_core::schmid::schmid_slip;
//! use lattice_core::selection::ActiveSelection;
//!
//! let p = schmid_slip(LatticeFamily::Cf, &ActiveSelection::new(vec![12]), 0.0).unwrap();
//! assert_eq!(p.len(), 12);
//! assert!(p[0].trace().abs() < 1e-12);
//! ```

use crate::errors::{LatticeError, LatticeResult};
use crate::geometry::{build_frames, CoordinateFrame};
use crate::lattice::{LatticeFamily, SystemKind};
use crate::selection::ActiveSelection;
use crate::transformation::{transformation_systems, TransformationTarget};
use crate::types::{outer, rotation_matrix, Matrix3};

/// Largest |trace| accepted for a slip or twin Schmid tensor
pub const DEVIATORIC_TOLERANCE: f64 = 1e-9;

/// Maximum number of non-Schmid coefficients
pub const MAX_NON_SCHMID_COEFFICIENTS: usize = 6;

fn deviatoric_schmid(frames: &[CoordinateFrame], kind: SystemKind) -> LatticeResult<Vec<Matrix3>> {
    frames
        .iter()
        .enumerate()
        .map(|(i, frame)| {
            let p = outer(&frame.direction, &frame.normal);
            let trace = p.trace();
            if trace.abs() > DEVIATORIC_TOLERANCE {
                return Err(LatticeError::NonDeviatoric {
                    kind: kind.code().to_string(),
                    system: i + 1,
                    trace,
                });
            }
            Ok(p)
        })
        .collect()
}

/// Schmid tensor `d ⊗ n` of every active slip system
pub fn schmid_slip(lattice: LatticeFamily, active: &ActiveSelection, c_over_a: f64) -> LatticeResult<Vec<Matrix3>> {
    let frames = build_frames(lattice, SystemKind::Slip, active, c_over_a)?;
    deviatoric_schmid(&frames, SystemKind::Slip)
}

/// Schmid tensor `d ⊗ n` of every active twin system
pub fn schmid_twin(lattice: LatticeFamily, active: &ActiveSelection, c_over_a: f64) -> LatticeResult<Vec<Matrix3>> {
    let frames = build_frames(lattice, SystemKind::Twin, active, c_over_a)?;
    deviatoric_schmid(&frames, SystemKind::Twin)
}

/// Opening (`n ⊗ n`) and the two shear modes (`d ⊗ n`, `t ⊗ n`) of every
/// active cleavage system, ordered `[d⊗n, t⊗n, n⊗n]`
pub fn schmid_cleavage(lattice: LatticeFamily, active: &ActiveSelection, c_over_a: f64) -> LatticeResult<Vec<[Matrix3; 3]>> {
    let frames = build_frames(lattice, SystemKind::Cleavage, active, c_over_a)?;
    Ok(frames
        .iter()
        .map(|f| {
            [
                outer(&f.direction, &f.normal),
                outer(&f.transverse, &f.normal),
                outer(&f.normal, &f.normal),
            ]
        })
        .collect())
}

/// Eigenstrain of every active transformation system.
///
/// Transformation strains carry a volume change, so no deviatoric check is
/// applied.
pub fn schmid_transformation(
    parent: LatticeFamily,
    active: &ActiveSelection,
    target: &TransformationTarget,
) -> LatticeResult<Vec<Matrix3>> {
    Ok(transformation_systems(parent, active, target)?
        .into_iter()
        .map(|system| system.eigenstrain)
        .collect())
}

/// Non-Schmid projection of every active cI slip system for one slip sense.
///
/// `coefficients` holds up to six weights `c1..c6`; missing trailing
/// coefficients are zero. With `d = sense·direction`, `n = normal` and `n'`
/// the normal rotated by +60° about `d`:
///
/// `P = d⊗n + c1·d⊗n' + c2·(n×d)⊗n + c3·(n'×d)⊗n' + c4·n⊗n + c5·(n×d)⊗(n×d) + c6·d⊗d`
pub fn non_schmid(
    lattice: LatticeFamily,
    active: &ActiveSelection,
    sense: i32,
    coefficients: &[f64],
) -> LatticeResult<Vec<Matrix3>> {
    if lattice != LatticeFamily::Ci {
        return Err(LatticeError::unsupported(lattice.code(), "non-Schmid slip"));
    }
    if sense != 1 && sense != -1 {
        return Err(LatticeError::InvalidSense { sense });
    }
    if coefficients.len() > MAX_NON_SCHMID_COEFFICIENTS {
        return Err(LatticeError::invalid_input(
            "non_schmid_coefficients",
            coefficients.len().to_string(),
            "at most 6 non-Schmid coefficients are supported",
        ));
    }

    let frames = build_frames(lattice, SystemKind::Slip, active, 1.0)?;
    let base = deviatoric_schmid(&frames, SystemKind::Slip)?;
    let c = |k: usize| coefficients.get(k).copied().unwrap_or(0.0);

    Ok(frames
        .iter()
        .zip(base)
        .map(|(frame, schmid)| {
            let d = frame.direction * f64::from(sense);
            let n = frame.normal;
            let np = rotation_matrix(&d, 60f64.to_radians()) * n;
            let nxd = n.cross(&d);
            let npxd = np.cross(&d);

            schmid
                + c(0) * outer(&d, &np)
                + c(1) * outer(&nxd, &n)
                + c(2) * outer(&npxd, &np)
                + c(3) * outer(&n, &n)
                + c(4) * outer(&nxd, &nxd)
                + c(5) * outer(&d, &d)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_slip_and_twin_deviatoric_for_all_catalogs() {
        for (lattice, ca) in [
            (LatticeFamily::Cf, 1.0),
            (LatticeFamily::Ci, 1.0),
            (LatticeFamily::Hp, 1.633),
            (LatticeFamily::Ti, 0.5456),
        ] {
            let all = ActiveSelection::all(catalog(lattice, SystemKind::Slip).unwrap());
            for p in schmid_slip(lattice, &all, ca).unwrap() {
                assert!(p.trace().abs() < DEVIATORIC_TOLERANCE);
            }
        }
        for (lattice, ca) in [(LatticeFamily::Cf, 1.0), (LatticeFamily::Ci, 1.0), (LatticeFamily::Hp, 1.587)] {
            let all = ActiveSelection::all(catalog(lattice, SystemKind::Twin).unwrap());
            for p in schmid_twin(lattice, &all, ca).unwrap() {
                assert!(p.trace().abs() < DEVIATORIC_TOLERANCE);
            }
        }
    }

    #[test]
    fn test_fcc_first_slip_schmid_tensor() {
        let p = schmid_slip(LatticeFamily::Cf, &ActiveSelection::new(vec![1]), 0.0).unwrap();
        let k = 1.0 / 6.0_f64.sqrt();
        // [0 1 -1]/√2 ⊗ (1 1 1)/√3
        assert!((p[0][(1, 0)] - k).abs() < TOL);
        assert!((p[0][(2, 2)] + k).abs() < TOL);
        assert!(p[0][(0, 1)].abs() < TOL);
    }

    #[test]
    fn test_twin_unsupported_for_tetragonal() {
        let err = schmid_twin(LatticeFamily::Ti, &ActiveSelection::new(vec![1]), 1.2).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_LATTICE");
    }

    #[test]
    fn test_cleavage_modes() {
        let modes = schmid_cleavage(LatticeFamily::Ci, &ActiveSelection::new(vec![3]), 0.0).unwrap();
        assert_eq!(modes.len(), 3);
        // (100)[010]: opening mode is e1 ⊗ e1
        assert!((modes[0][2][(0, 0)] - 1.0).abs() < TOL);
        assert!((modes[0][0][(1, 0)] - 1.0).abs() < TOL);
        // transverse [010] × [100] = -[001]
        assert!((modes[0][1][(2, 0)] + 1.0).abs() < TOL);
        assert!(schmid_cleavage(LatticeFamily::Hp, &ActiveSelection::new(vec![1]), 1.6).is_err());
    }

    #[test]
    fn test_non_schmid_without_coefficients_is_schmid() {
        let active = ActiveSelection::new(vec![12]);
        let plain = schmid_slip(LatticeFamily::Ci, &active, 0.0).unwrap();
        for sense in [-1, 1] {
            let ns = non_schmid(LatticeFamily::Ci, &active, sense, &[]).unwrap();
            for (a, b) in plain.iter().zip(&ns) {
                assert!((a - b).abs().max() < TOL);
            }
        }
    }

    #[test]
    fn test_non_schmid_sense_enters_odd_terms() {
        let active = ActiveSelection::new(vec![1]);
        let pos = non_schmid(LatticeFamily::Ci, &active, 1, &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        let neg = non_schmid(LatticeFamily::Ci, &active, -1, &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        // d ⊗ d is even in the sense
        assert!((pos[0] - neg[0]).abs().max() < TOL);

        let pos = non_schmid(LatticeFamily::Ci, &active, 1, &[0.0, 1.0]).unwrap();
        let neg = non_schmid(LatticeFamily::Ci, &active, -1, &[0.0, 1.0]).unwrap();
        assert!((pos[0] - neg[0]).abs().max() > 0.1);
    }

    #[test]
    fn test_non_schmid_rejects_bad_input() {
        let active = ActiveSelection::new(vec![1]);
        assert_eq!(
            non_schmid(LatticeFamily::Ci, &active, 0, &[]).unwrap_err(),
            LatticeError::InvalidSense { sense: 0 }
        );
        assert_eq!(
            non_schmid(LatticeFamily::Ci, &active, 1, &[0.1; 7]).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            non_schmid(LatticeFamily::Cf, &active, 1, &[]).unwrap_err().error_code(),
            "UNSUPPORTED_LATTICE"
        );
    }

    #[test]
    fn test_transformation_eigenstrain_passthrough() {
        let target = TransformationTarget::Hexagonal { c_over_a: 1.633 };
        let active = ActiveSelection::new(vec![2]);
        let strains = schmid_transformation(LatticeFamily::Cf, &active, &target).unwrap();
        let systems = transformation_systems(LatticeFamily::Cf, &active, &target).unwrap();
        assert_eq!(strains.len(), 2);
        assert_eq!(strains[1], systems[1].eigenstrain);
    }
}
