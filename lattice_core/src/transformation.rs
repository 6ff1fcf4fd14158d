//! # Transformation Systems
//!
//! Lattice rotation `Q` and eigenstrain `S` of each martensitic
//! transformation system of a cF parent.
//!
//! ## Targets
//!
//! - **cF → hP**: shear on the {111} habit plane along `<112>` plus a
//!   dilatation normal to the plane that matches the product c/a.
//! - **cF → cI**: Bain strain of the variant followed by the Pitsch
//!   rotation that restores the habit plane.
//!
//! ## Example
//!
//! ```rust
//! use lattice_core::lattice::LatticeFamily;
//! use lattice_core::selection::ActiveSelection;
//! use lattice_core::transformation::{transformation_systems, TransformationTarget};
//!
//! let target = TransformationTarget::BodyCenteredCubic { a_cf: 3.5, a_ci: 2.85 };
//! let systems = transformation_systems(LatticeFamily::Cf, &ActiveSelection::new(vec![12]), &target).unwrap();
//! assert_eq!(systems.len(), 12);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{catalog, cubic_fcc};
use crate::errors::LatticeResult;
use crate::geometry::frames_from_catalog;
use crate::lattice::{LatticeFamily, SystemKind};
use crate::params::{AspectRatio, LatticeParameter};
use crate::selection::ActiveSelection;
use crate::types::{outer, rotation_matrix, Matrix3, Vector3};

/// Product phase of a transformation, with the parameters it needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum TransformationTarget {
    /// cF → hP with the product's c/a
    Hexagonal { c_over_a: f64 },
    /// cF → cI with the lattice constants of both phases
    BodyCenteredCubic { a_cf: f64, a_ci: f64 },
}

impl TransformationTarget {
    /// Lattice family of the product phase
    pub fn lattice(&self) -> LatticeFamily {
        match self {
            TransformationTarget::Hexagonal { .. } => LatticeFamily::Hp,
            TransformationTarget::BodyCenteredCubic { .. } => LatticeFamily::Ci,
        }
    }
}

/// Rotation `Q` and eigenstrain `S` of one transformation system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformationSystem {
    pub rotation: Matrix3,
    pub eigenstrain: Matrix3,
}

/// Build every active transformation system of `parent`.
///
/// Only cF parents carry transformation systems.
pub fn transformation_systems(
    parent: LatticeFamily,
    active: &ActiveSelection,
    target: &TransformationTarget,
) -> LatticeResult<Vec<TransformationSystem>> {
    let catalog = catalog(parent, SystemKind::Transformation)?;

    match *target {
        TransformationTarget::Hexagonal { c_over_a } => {
            let ratio = AspectRatio::for_lattice(LatticeFamily::Hp, c_over_a)?;
            let frames = frames_from_catalog(catalog, active, AspectRatio::CUBIC)?;

            let mut ss = Matrix3::identity();
            ss[(0, 2)] = 2.0_f64.sqrt() / 4.0;
            let mut sd = Matrix3::identity();
            sd[(2, 2)] = ratio.value() / (8.0_f64 / 3.0).sqrt();

            Ok(frames
                .iter()
                .map(|frame| {
                    let x = frame.direction;
                    let z = frame.normal;
                    let y = -x.cross(&z);
                    let q = Matrix3::from_columns(&[x, y, z]);
                    TransformationSystem {
                        rotation: q,
                        eigenstrain: q * sd * ss * q.transpose() - Matrix3::identity(),
                    }
                })
                .collect())
        }
        TransformationTarget::BodyCenteredCubic { a_cf, a_ci } => {
            let a_cf = LatticeParameter::new("a_cF", a_cf)?;
            let a_ci = LatticeParameter::new("a_cI", a_ci)?;
            let ratio = a_ci.value() / a_cf.value();
            let indices = active.potential_indices(catalog)?;

            Ok(indices
                .into_iter()
                .map(|p| {
                    let r = rotation_matrix(
                        &Vector3::from(cubic_fcc::PITSCH_AXES[p]),
                        cubic_fcc::PITSCH_ANGLE_DEG.to_radians(),
                    );
                    let b = rotation_matrix(
                        &Vector3::from(cubic_fcc::BAIN_AXES[p]),
                        cubic_fcc::BAIN_ANGLE_DEG.to_radians(),
                    );
                    let [x, y, z] = cubic_fcc::BAIN_VARIANTS[p].map(Vector3::from);
                    let u = ratio * (outer(&x, &x) + 2.0_f64.sqrt() * (outer(&y, &y) + outer(&z, &z)));
                    TransformationSystem {
                        rotation: r * b,
                        eigenstrain: r * u - Matrix3::identity(),
                    }
                })
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LatticeError;

    const TOL: f64 = 1e-10;

    fn is_rotation(q: &Matrix3) -> bool {
        (q.transpose() * q - Matrix3::identity()).abs().max() < TOL && (q.determinant() - 1.0).abs() < TOL
    }

    #[test]
    fn test_hexagonal_rotations_are_proper() {
        let target = TransformationTarget::Hexagonal { c_over_a: 1.633 };
        for system in transformation_systems(LatticeFamily::Cf, &ActiveSelection::new(vec![12]), &target).unwrap() {
            assert!(is_rotation(&system.rotation));
        }
    }

    #[test]
    fn test_hexagonal_ideal_ratio_is_pure_shear() {
        // c/a = √(8/3) leaves the interplanar spacing unchanged
        let ideal = (8.0_f64 / 3.0).sqrt();
        let target = TransformationTarget::Hexagonal { c_over_a: ideal };
        let systems = transformation_systems(LatticeFamily::Cf, &ActiveSelection::new(vec![3]), &target).unwrap();
        for system in systems {
            assert!(system.eigenstrain.trace().abs() < TOL);
            let shear = system.eigenstrain.norm();
            assert!((shear - 2.0_f64.sqrt() / 4.0).abs() < TOL);
        }
    }

    #[test]
    fn test_hexagonal_ratio_validated() {
        let target = TransformationTarget::Hexagonal { c_over_a: 2.5 };
        let err = transformation_systems(LatticeFamily::Cf, &ActiveSelection::new(vec![1]), &target).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_bcc_rotations_are_proper() {
        let target = TransformationTarget::BodyCenteredCubic { a_cf: 3.5, a_ci: 2.85 };
        for system in transformation_systems(LatticeFamily::Cf, &ActiveSelection::new(vec![12]), &target).unwrap() {
            assert!(is_rotation(&system.rotation));
        }
    }

    #[test]
    fn test_bcc_first_variant() {
        let (a_cf, a_ci) = (3.5, 2.85);
        let target = TransformationTarget::BodyCenteredCubic { a_cf, a_ci };
        let systems = transformation_systems(LatticeFamily::Cf, &ActiveSelection::new(vec![1]), &target).unwrap();
        // Pitsch rotation about [010] leaves the y row of R·U diagonal
        let r = a_ci / a_cf;
        let s = &systems[0].eigenstrain;
        assert!((s[(1, 1)] - (2.0_f64.sqrt() * r - 1.0)).abs() < TOL);
        assert!(s[(0, 1)].abs() < TOL);
    }

    #[test]
    fn test_bcc_lattice_parameters_positive() {
        let target = TransformationTarget::BodyCenteredCubic { a_cf: 3.5, a_ci: 0.0 };
        let err = transformation_systems(LatticeFamily::Cf, &ActiveSelection::new(vec![1]), &target).unwrap_err();
        match err {
            LatticeError::OutOfRange { parameter, .. } => assert_eq!(parameter, "a_cI"),
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_non_fcc_parent_rejected() {
        let target = TransformationTarget::Hexagonal { c_over_a: 1.6 };
        for parent in [LatticeFamily::Ci, LatticeFamily::Hp, LatticeFamily::Ti] {
            let err = transformation_systems(parent, &ActiveSelection::new(vec![1]), &target).unwrap_err();
            assert_eq!(err.error_code(), "UNSUPPORTED_LATTICE");
        }
    }

    #[test]
    fn test_target_serialization() {
        let target = TransformationTarget::BodyCenteredCubic { a_cf: 3.5, a_ci: 2.85 };
        let json = serde_json::to_string(&target).unwrap();
        assert!(json.contains("\"target\":\"body_centered_cubic\""));
        let back: TransformationTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, target);
        assert_eq!(back.lattice(), LatticeFamily::Ci);
    }
}
