//! # Rotated Stiffness
//!
//! Elastic stiffness of twinned and transformed volume, expressed in the
//! parent lattice frame.
//!
//! - **Twins**: the parent stiffness rotated by 180° about the twin-plane
//!   normal.
//! - **Transformations**: the (unrotated) product stiffness rotated by `Qᵀ`
//!   of each transformation system. For cF → hP the product stiffness is
//!   derived from the cubic parent constants; for cF → cI the parent
//!   stiffness is used as is.
//!
//! ## Example
//!
//! ```rust
//! use lattice_core::lattice::LatticeFamily;
//! use lattice_core::selection::ActiveSelection;
//! use lattice_core::stiffness::c66_twin;
//! use lattice_core::symmetry::symmetrize_c66;
//! use lattice_core::types::Matrix6;
//!
//! let mut c = Matrix6::zeros();
//! c[(0, 0)] = 106.75;
//! c[(0, 1)] = 60.41;
//! c[(3, 3)] = 28.34;
//! let c = symmetrize_c66(&c, LatticeFamily::Cf);
//!
//! let twinned = c66_twin(LatticeFamily::Cf, &ActiveSelection::new(vec![12]), &c, 0.0).unwrap();
//! assert_eq!(twinned.len(), 12);
//! ```

use std::f64::consts::PI;

use crate::errors::{LatticeError, LatticeResult};
use crate::geometry::build_frames;
use crate::lattice::{LatticeFamily, SystemKind};
use crate::selection::ActiveSelection;
use crate::symmetry::symmetrize_c66;
use crate::transformation::{transformation_systems, TransformationTarget};
use crate::types::{rotate_c66, rotation_matrix, Matrix6};

/// Parent stiffness rotated into every active twin system
pub fn c66_twin(
    lattice: LatticeFamily,
    active: &ActiveSelection,
    c66: &Matrix6,
    c_over_a: f64,
) -> LatticeResult<Vec<Matrix6>> {
    let frames = build_frames(lattice, SystemKind::Twin, active, c_over_a)?;
    Ok(frames
        .iter()
        .map(|frame| rotate_c66(&rotation_matrix(&frame.normal, PI), c66))
        .collect())
}

/// Unrotated stiffness of the product phase
pub fn target_stiffness(parent_c66: &Matrix6, target: &TransformationTarget) -> LatticeResult<Matrix6> {
    let target_c66 = match target {
        TransformationTarget::Hexagonal { .. } => {
            let (c11, c12, c44) = (parent_c66[(0, 0)], parent_c66[(0, 1)], parent_c66[(3, 3)]);

            let b11 = (c11 + c12 + 2.0 * c44) / 2.0;
            let b12 = (c11 + 5.0 * c12 - 2.0 * c44) / 6.0;
            let b33 = (c11 + 2.0 * c12 + 4.0 * c44) / 3.0;
            let b13 = (c11 + 2.0 * c12 - 2.0 * c44) / 3.0;
            let b44 = (c11 - c12 + c44) / 3.0;
            let b14 = (c11 - c12 - 2.0 * c44) / (3.0 * 2.0_f64.sqrt());

            if b44.abs() <= f64::EPSILON || (b11 - b12).abs() <= f64::EPSILON {
                return Err(LatticeError::invalid_input(
                    "parent_c66",
                    format!("C11={c11}, C12={c12}, C44={c44}"),
                    "degenerate cubic constants for the hexagonal product",
                ));
            }

            let mut c = Matrix6::zeros();
            c[(0, 0)] = b11 - b14 * b14 / b44;
            c[(0, 1)] = b12 + b14 * b14 / b44;
            c[(0, 2)] = b13;
            c[(2, 2)] = b33;
            c[(3, 3)] = b44 - b14 * b14 / (0.5 * (b11 - b12));
            symmetrize_c66(&c, LatticeFamily::Hp)
        }
        TransformationTarget::BodyCenteredCubic { .. } => *parent_c66,
    };

    let scale = target_c66.abs().max().max(1.0);
    for i in 0..6 {
        if target_c66[(i, i)].abs() <= 1e-12 * scale {
            return Err(LatticeError::invalid_input(
                "target_c66",
                format!("C{}{}={}", i + 1, i + 1, target_c66[(i, i)]),
                "product stiffness has a vanishing diagonal entry",
            ));
        }
    }
    Ok(target_c66)
}

/// Product stiffness rotated into every active transformation system
pub fn c66_trans(
    parent: LatticeFamily,
    active: &ActiveSelection,
    parent_c66: &Matrix6,
    target: &TransformationTarget,
) -> LatticeResult<Vec<Matrix6>> {
    let systems = transformation_systems(parent, active, target)?;
    let target_c66 = target_stiffness(parent_c66, target)?;
    Ok(systems
        .iter()
        .map(|system| rotate_c66(&system.rotation.transpose(), &target_c66))
        .collect())
}
