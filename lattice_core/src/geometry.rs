//! # Coordinate System Builder
//!
//! Turns catalog index vectors into orthonormal Cartesian frames
//! `(direction, normal, transverse)`, one per active system.
//!
//! ## Index Conversion
//!
//! | lattice | direction | normal |
//! |---------|-----------|--------|
//! | cF, cI  | `[u, v, w]` | `[h, k, l]` |
//! | tI      | `[u, v, w·c/a]` | `[h, k, l/(c/a)]` |
//! | hP      | `[3u/2, (u+2v)·√3/2, w·c/a]` | `[h, (h+2k)/√3, l/(c/a)]` |
//!
//! Both vectors are normalised afterwards; `transverse = direction × normal`.
//!
//! ## Example
//!
//! ```rust
//! use lattice_core::geometry::build_frames;
//! use lattice_core::lattice::{LatticeFamily, SystemKind};
//! use lattice_core::selection::ActiveSelection;
//!
//! let frames = build_frames(
//!     LatticeFamily::Hp,
//!     SystemKind::Slip,
//!     &ActiveSelection::new(vec![3]),
//!     1.587,
//! )
//! .unwrap();
//! assert_eq!(frames.len(), 3);
//! assert!(frames.iter().all(|f| f.is_orthonormal(1e-10)));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{catalog, SystemCatalog, SystemIndices};
use crate::errors::LatticeResult;
use crate::lattice::{LatticeFamily, SystemKind};
use crate::params::AspectRatio;
use crate::selection::ActiveSelection;
use crate::types::{Matrix3, Vector3};

/// Orthonormal frame of one system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateFrame {
    pub direction: Vector3,
    pub normal: Vector3,
    pub transverse: Vector3,
}

impl CoordinateFrame {
    /// Build from (not necessarily unit) direction and normal vectors
    pub fn from_vectors(direction: &Vector3, normal: &Vector3) -> Self {
        let direction = direction.normalize();
        let normal = normal.normalize();
        CoordinateFrame {
            direction,
            normal,
            transverse: direction.cross(&normal),
        }
    }

    /// Frame as a matrix with columns `[direction | normal | transverse]`
    pub fn to_matrix(&self) -> Matrix3 {
        Matrix3::from_columns(&[self.direction, self.normal, self.transverse])
    }

    /// Unit length and mutual orthogonality within `tolerance`
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let m = self.to_matrix();
        (m.transpose() * m - Matrix3::identity()).abs().max() <= tolerance
    }
}

// ============================================================================
// Index Conversion
// ============================================================================

/// Cartesian direction and normal of one system (unnormalised)
pub fn cartesian_vectors(indices: &SystemIndices, c_over_a: AspectRatio) -> (Vector3, Vector3) {
    let r = c_over_a.value();
    match indices {
        SystemIndices::Miller(d, n) => (
            Vector3::new(d[0] as f64, d[1] as f64, d[2] as f64 * r),
            Vector3::new(n[0] as f64, n[1] as f64, n[2] as f64 / r),
        ),
        SystemIndices::MillerBravais(d, n) => {
            let (u, v, w) = (d[0] as f64, d[1] as f64, d[3] as f64);
            let (h, k, l) = (n[0] as f64, n[1] as f64, n[3] as f64);
            (
                Vector3::new(1.5 * u, (u + 2.0 * v) * 0.75_f64.sqrt(), w * r),
                Vector3::new(h, (h + 2.0 * k) / 3.0_f64.sqrt(), l / r),
            )
        }
    }
}

/// Frames of the active systems of an already resolved catalog.
///
/// For cubic lattices the aspect ratio is 1, which reduces the conversion to
/// plain normalisation of the index vectors.
pub fn frames_from_catalog(
    catalog: &SystemCatalog,
    active: &ActiveSelection,
    c_over_a: AspectRatio,
) -> LatticeResult<Vec<CoordinateFrame>> {
    let indices = active.potential_indices(catalog)?;
    debug!(
        lattice = catalog.lattice.code(),
        kind = catalog.kind.code(),
        active = indices.len(),
        c_over_a = c_over_a.value(),
        "building coordinate frames"
    );
    Ok(indices
        .into_iter()
        .map(|p| {
            let (d, n) = cartesian_vectors(&catalog.systems[p], c_over_a);
            CoordinateFrame::from_vectors(&d, &n)
        })
        .collect())
}

/// Frames of the active `kind` systems of `lattice`.
///
/// `c_over_a` is ignored for cubic lattices.
pub fn build_frames(
    lattice: LatticeFamily,
    kind: SystemKind,
    active: &ActiveSelection,
    c_over_a: f64,
) -> LatticeResult<Vec<CoordinateFrame>> {
    let ratio = AspectRatio::for_lattice(lattice, c_over_a)?;
    let catalog = catalog(lattice, kind)?;
    frames_from_catalog(catalog, active, ratio)
}

// ============================================================================
// Slip Vectors
// ============================================================================

/// Unit slip direction of every active slip system
pub fn slip_direction(lattice: LatticeFamily, active: &ActiveSelection, c_over_a: f64) -> LatticeResult<Vec<Vector3>> {
    let frames = build_frames(lattice, SystemKind::Slip, active, c_over_a)?;
    Ok(frames.iter().map(|f| f.direction).collect())
}

/// Unit slip-plane normal of every active slip system
pub fn slip_normal(lattice: LatticeFamily, active: &ActiveSelection, c_over_a: f64) -> LatticeResult<Vec<Vector3>> {
    let frames = build_frames(lattice, SystemKind::Slip, active, c_over_a)?;
    Ok(frames.iter().map(|f| f.normal).collect())
}

/// `direction × normal` of every active slip system
pub fn slip_transverse(lattice: LatticeFamily, active: &ActiveSelection, c_over_a: f64) -> LatticeResult<Vec<Vector3>> {
    let frames = build_frames(lattice, SystemKind::Slip, active, c_over_a)?;
    Ok(frames.iter().map(|f| f.transverse).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn test_all_frames_orthonormal() {
        let cases = [
            (LatticeFamily::Cf, SystemKind::Slip, 1.0),
            (LatticeFamily::Cf, SystemKind::Twin, 1.0),
            (LatticeFamily::Cf, SystemKind::Transformation, 1.0),
            (LatticeFamily::Cf, SystemKind::Cleavage, 1.0),
            (LatticeFamily::Ci, SystemKind::Slip, 1.0),
            (LatticeFamily::Ci, SystemKind::Twin, 1.0),
            (LatticeFamily::Ci, SystemKind::Cleavage, 1.0),
            (LatticeFamily::Hp, SystemKind::Slip, 1.587),
            (LatticeFamily::Hp, SystemKind::Twin, 1.856),
            (LatticeFamily::Ti, SystemKind::Slip, 0.5456),
            (LatticeFamily::Ti, SystemKind::Slip, 1.0),
            (LatticeFamily::Ti, SystemKind::Slip, 2.0),
        ];
        for (lattice, kind, ca) in cases {
            let all = ActiveSelection::all(catalog(lattice, kind).unwrap());
            let frames = build_frames(lattice, kind, &all, ca).unwrap();
            assert_eq!(frames.len(), all.total());
            for (i, frame) in frames.iter().enumerate() {
                assert!(frame.is_orthonormal(TOL), "{lattice} {kind} system {i}");
            }
        }
    }

    #[test]
    fn test_cubic_frame_is_normalised_indices() {
        let frames = build_frames(
            LatticeFamily::Cf,
            SystemKind::Slip,
            &ActiveSelection::new(vec![1]),
            0.0,
        )
        .unwrap();
        let s2 = 2.0_f64.sqrt();
        let s3 = 3.0_f64.sqrt();
        assert!((frames[0].direction - Vector3::new(0.0, 1.0 / s2, -1.0 / s2)).norm() < TOL);
        assert!((frames[0].normal - Vector3::new(1.0 / s3, 1.0 / s3, 1.0 / s3)).norm() < TOL);
    }

    #[test]
    fn test_basal_plane_normal_is_c_axis() {
        let normals = slip_normal(LatticeFamily::Hp, &ActiveSelection::new(vec![3]), 1.633).unwrap();
        for n in normals {
            assert!((n - Vector3::new(0.0, 0.0, 1.0)).norm() < TOL);
        }
    }

    #[test]
    fn test_first_basal_direction_is_x_axis() {
        let directions = slip_direction(LatticeFamily::Hp, &ActiveSelection::new(vec![1]), 1.633).unwrap();
        assert!((directions[0] - Vector3::new(1.0, 0.0, 0.0)).norm() < TOL);
    }

    #[test]
    fn test_transverse_is_cross_product() {
        let active = ActiveSelection::new(vec![12, 12]);
        let d = slip_direction(LatticeFamily::Ci, &active, 1.0).unwrap();
        let n = slip_normal(LatticeFamily::Ci, &active, 1.0).unwrap();
        let t = slip_transverse(LatticeFamily::Ci, &active, 1.0).unwrap();
        for i in 0..d.len() {
            assert!((d[i].cross(&n[i]) - t[i]).norm() < TOL);
        }
    }

    #[test]
    fn test_hexagonal_ratio_validated() {
        let err = build_frames(
            LatticeFamily::Hp,
            SystemKind::Slip,
            &ActiveSelection::new(vec![3]),
            2.5,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_tetragonal_ratio_scales_c_component() {
        // [001] direction of family 1 stays along c for any c/a
        let frames = build_frames(
            LatticeFamily::Ti,
            SystemKind::Slip,
            &ActiveSelection::new(vec![1]),
            0.5456,
        )
        .unwrap();
        assert!((frames[0].direction - Vector3::new(0.0, 0.0, 1.0)).norm() < TOL);
        assert!((frames[0].normal - Vector3::new(1.0, 0.0, 0.0)).norm() < TOL);
    }

    #[test]
    fn test_diagonal_vectors_give_identity_frame() {
        let frame = CoordinateFrame::from_vectors(&Vector3::new(0.3, 0.0, 0.0), &Vector3::new(0.0, 7.0, 0.0));
        let expected = Matrix3::from_columns(&[
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ]);
        assert!((frame.to_matrix() - expected).abs().max() < TOL);
    }
}
