//! Forest projections for dislocation-density based slip models.
//!
//! Entry `(i, j)` measures how strongly dislocations of slip system `j`
//! pierce the slip plane of system `i`:
//!
//! - edge: `|n_i · t_j|` (edge line direction is the transverse vector)
//! - screw: `|n_i · d_j|` (screw line direction is the slip direction)

use crate::errors::LatticeResult;
use crate::geometry::build_frames;
use crate::lattice::{LatticeFamily, SystemKind};
use crate::selection::ActiveSelection;
use crate::types::{DMatrix, Vector3};

fn forest_projection(normals: &[Vector3], lines: &[Vector3]) -> DMatrix<f64> {
    DMatrix::from_fn(normals.len(), lines.len(), |i, j| normals[i].dot(&lines[j]).abs())
}

/// Projection of edge dislocation lines onto the slip-plane normals
pub fn forest_projection_edge(
    lattice: LatticeFamily,
    active: &ActiveSelection,
    c_over_a: f64,
) -> LatticeResult<DMatrix<f64>> {
    let frames = build_frames(lattice, SystemKind::Slip, active, c_over_a)?;
    let normals: Vec<Vector3> = frames.iter().map(|f| f.normal).collect();
    let lines: Vec<Vector3> = frames.iter().map(|f| f.transverse).collect();
    Ok(forest_projection(&normals, &lines))
}

/// Projection of screw dislocation lines onto the slip-plane normals
pub fn forest_projection_screw(
    lattice: LatticeFamily,
    active: &ActiveSelection,
    c_over_a: f64,
) -> LatticeResult<DMatrix<f64>> {
    let frames = build_frames(lattice, SystemKind::Slip, active, c_over_a)?;
    let normals: Vec<Vector3> = frames.iter().map(|f| f.normal).collect();
    let lines: Vec<Vector3> = frames.iter().map(|f| f.direction).collect();
    Ok(forest_projection(&normals, &lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_projection_vanishes() {
        let active = ActiveSelection::new(vec![12, 6]);
        let edge = forest_projection_edge(LatticeFamily::Cf, &active, 1.0).unwrap();
        let screw = forest_projection_screw(LatticeFamily::Cf, &active, 1.0).unwrap();
        for i in 0..18 {
            assert!(edge[(i, i)].abs() < 1e-12);
            assert!(screw[(i, i)].abs() < 1e-12);
        }
    }

    #[test]
    fn test_coplanar_systems_do_not_interact() {
        let screw = forest_projection_screw(LatticeFamily::Cf, &ActiveSelection::new(vec![3]), 1.0).unwrap();
        assert!(screw.iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_fcc_screw_projection_value() {
        // (111) against [0 -1 -1] of the second plane: 2/√6
        let screw = forest_projection_screw(LatticeFamily::Cf, &ActiveSelection::new(vec![4]), 1.0).unwrap();
        assert!((screw[(0, 3)] - 2.0 / 6.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_projection_entries_bounded() {
        let active = ActiveSelection::new(vec![3, 3, 3, 6, 12, 6]);
        let edge = forest_projection_edge(LatticeFamily::Hp, &active, 1.587).unwrap();
        assert_eq!(edge.shape(), (33, 33));
        assert!(edge.iter().all(|&v| (0.0..=1.0 + 1e-12).contains(&v)));
    }
}
