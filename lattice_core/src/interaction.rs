//! # Interaction Matrix Builder
//!
//! Expands a caller-supplied coefficient per interaction *type* into a full
//! active × active interaction matrix:
//!
//! ```text
//! M[i][k] = coefficients[table[p_i][p_k] - 1]
//! ```
//!
//! where `p_i` and `p_k` are the catalog indices of the i-th reacting and
//! k-th acting active system. The type tables and their meaning are listed
//! with each lattice in [`crate::catalog`].
//!
//! ## Example
//!
//! ```rust
//! use lattice_core::interaction::interaction_slip_by_slip;
//! use lattice_core::lattice::LatticeFamily;
//! use lattice_core::selection::ActiveSelection;
//!
//! let h = [1.0, 1.4, 1.4, 1.4, 1.4, 1.4, 1.4];
//! let m = interaction_slip_by_slip(LatticeFamily::Cf, &ActiveSelection::new(vec![12]), &h).unwrap();
//! assert_eq!(m.shape(), (12, 12));
//! assert_eq!(m[(0, 0)], 1.0);
//! ```

use tracing::debug;

use crate::catalog::{catalog, interaction_table, InteractionTypeTable, SystemCatalog};
use crate::errors::{LatticeError, LatticeResult};
use crate::lattice::{LatticeFamily, SystemKind};
use crate::selection::ActiveSelection;
use crate::types::DMatrix;

/// Expand `coefficients` over the active reacting × acting systems
pub fn build_interaction(
    reacting_active: &ActiveSelection,
    acting_active: &ActiveSelection,
    reacting: &SystemCatalog,
    acting: &SystemCatalog,
    coefficients: &[f64],
    table: InteractionTypeTable,
) -> LatticeResult<DMatrix<f64>> {
    check_table_shape(table, reacting, acting)?;
    let rows = reacting_active.potential_indices(reacting)?;
    let cols = acting_active.potential_indices(acting)?;

    let mut matrix = DMatrix::zeros(rows.len(), cols.len());
    for (i, &p_i) in rows.iter().enumerate() {
        for (k, &p_k) in cols.iter().enumerate() {
            let id = table[p_i][p_k] as usize;
            let slot = id.checked_sub(1).ok_or_else(|| {
                LatticeError::invalid_input(
                    "interaction_table",
                    format!("entry ({}, {}) = 0", p_i + 1, p_k + 1),
                    "interaction type ids start at 1",
                )
            })?;
            matrix[(i, k)] = *coefficients
                .get(slot)
                .ok_or(LatticeError::InsufficientCoefficients {
                    required: id,
                    supplied: coefficients.len(),
                })?;
        }
    }

    debug!(
        lattice = reacting.lattice.code(),
        reacting = reacting.kind.code(),
        acting = acting.kind.code(),
        rows = rows.len(),
        cols = cols.len(),
        "built interaction matrix"
    );
    Ok(matrix)
}

/// The table must cover every reacting (row) and acting (column) system
fn check_table_shape(table: InteractionTypeTable, reacting: &SystemCatalog, acting: &SystemCatalog) -> LatticeResult<()> {
    let (rows, cols) = (reacting.total_systems(), acting.total_systems());
    if table.len() < rows || table.iter().any(|row| row.len() < cols) {
        let narrowest = table.iter().map(|row| row.len()).min().unwrap_or(0);
        return Err(LatticeError::invalid_input(
            "interaction_table",
            format!("{} rows, narrowest row {narrowest}", table.len()),
            format!(
                "{} {} by {} {} needs at least {rows}x{cols} entries",
                reacting.lattice.code(),
                reacting.kind.code(),
                acting.lattice.code(),
                acting.kind.code(),
            ),
        ));
    }
    Ok(())
}

fn interaction(
    lattice: LatticeFamily,
    reacting_kind: SystemKind,
    acting_kind: SystemKind,
    reacting_active: &ActiveSelection,
    acting_active: &ActiveSelection,
    coefficients: &[f64],
) -> LatticeResult<DMatrix<f64>> {
    let table = interaction_table(lattice, reacting_kind, acting_kind)?;
    build_interaction(
        reacting_active,
        acting_active,
        catalog(lattice, reacting_kind)?,
        catalog(lattice, acting_kind)?,
        coefficients,
        table,
    )
}

/// Slip-slip interaction matrix (cF, cI, hP, tI)
pub fn interaction_slip_by_slip(
    lattice: LatticeFamily,
    active: &ActiveSelection,
    coefficients: &[f64],
) -> LatticeResult<DMatrix<f64>> {
    interaction(lattice, SystemKind::Slip, SystemKind::Slip, active, active, coefficients)
}

/// Twin-twin interaction matrix (cF, cI, hP)
pub fn interaction_twin_by_twin(
    lattice: LatticeFamily,
    active: &ActiveSelection,
    coefficients: &[f64],
) -> LatticeResult<DMatrix<f64>> {
    interaction(lattice, SystemKind::Twin, SystemKind::Twin, active, active, coefficients)
}

/// Transformation-transformation interaction matrix (cF)
pub fn interaction_trans_by_trans(
    lattice: LatticeFamily,
    active: &ActiveSelection,
    coefficients: &[f64],
) -> LatticeResult<DMatrix<f64>> {
    interaction(
        lattice,
        SystemKind::Transformation,
        SystemKind::Transformation,
        active,
        active,
        coefficients,
    )
}

/// Slip (rows) acted on by twins (columns)
pub fn interaction_slip_by_twin(
    lattice: LatticeFamily,
    slip_active: &ActiveSelection,
    twin_active: &ActiveSelection,
    coefficients: &[f64],
) -> LatticeResult<DMatrix<f64>> {
    interaction(lattice, SystemKind::Slip, SystemKind::Twin, slip_active, twin_active, coefficients)
}

/// Twins (rows) acted on by slip (columns)
pub fn interaction_twin_by_slip(
    lattice: LatticeFamily,
    twin_active: &ActiveSelection,
    slip_active: &ActiveSelection,
    coefficients: &[f64],
) -> LatticeResult<DMatrix<f64>> {
    interaction(lattice, SystemKind::Twin, SystemKind::Slip, twin_active, slip_active, coefficients)
}

/// Slip (rows) acted on by transformation systems (columns)
pub fn interaction_slip_by_trans(
    lattice: LatticeFamily,
    slip_active: &ActiveSelection,
    trans_active: &ActiveSelection,
    coefficients: &[f64],
) -> LatticeResult<DMatrix<f64>> {
    interaction(
        lattice,
        SystemKind::Slip,
        SystemKind::Transformation,
        slip_active,
        trans_active,
        coefficients,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Coefficient `k` is `k` itself, so matrix entries read back as type ids
    fn ids(n: usize) -> Vec<f64> {
        (1..=n).map(|k| k as f64).collect()
    }

    #[test]
    fn test_fcc_octahedral_uses_first_seven_types() {
        let m = interaction_slip_by_slip(LatticeFamily::Cf, &ActiveSelection::new(vec![12, 0]), &ids(7)).unwrap();
        assert_eq!(m.shape(), (12, 12));
        assert!(m.iter().all(|&v| (1.0..=7.0).contains(&v)));
        for i in 0..12 {
            assert_eq!(m[(i, i)], 1.0);
        }
    }

    #[test]
    fn test_fcc_full_slip_needs_thirteen_coefficients() {
        let active = ActiveSelection::new(vec![12, 6]);
        let err = interaction_slip_by_slip(LatticeFamily::Cf, &active, &ids(12)).unwrap_err();
        assert_eq!(
            err,
            LatticeError::InsufficientCoefficients {
                required: 13,
                supplied: 12
            }
        );
        assert!(interaction_slip_by_slip(LatticeFamily::Cf, &active, &ids(13)).is_ok());
    }

    #[test]
    fn test_partial_selection_picks_leading_systems() {
        let full = interaction_slip_by_slip(LatticeFamily::Ci, &ActiveSelection::new(vec![12, 12]), &ids(6)).unwrap();
        let part = interaction_slip_by_slip(LatticeFamily::Ci, &ActiveSelection::new(vec![2, 1]), &ids(6)).unwrap();
        let picked = [0, 1, 12];
        for (i, &pi) in picked.iter().enumerate() {
            for (k, &pk) in picked.iter().enumerate() {
                assert_eq!(part[(i, k)], full[(pi, pk)]);
            }
        }
    }

    #[test]
    fn test_mismatched_table_rejected() {
        let slip = catalog(LatticeFamily::Cf, SystemKind::Slip).unwrap();
        let table = interaction_table(LatticeFamily::Ci, SystemKind::Twin, SystemKind::Twin).unwrap();
        let all = ActiveSelection::all(slip);
        let err = build_interaction(&all, &all, slip, slip, &[1.0; 30], table).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        // a table with too few columns is rejected as well
        const NARROW: InteractionTypeTable = &[&[1], &[1]];
        let twin = catalog(LatticeFamily::Cf, SystemKind::Twin).unwrap();
        let one = ActiveSelection::new(vec![1]);
        assert!(build_interaction(&one, &one, twin, twin, &[1.0], NARROW).is_err());
    }

    #[test]
    fn test_zero_type_id_rejected() {
        const ZERO_ROW: &[u8] = &[0; 12];
        const ZEROS: InteractionTypeTable = &[ZERO_ROW; 12];
        let twin = catalog(LatticeFamily::Cf, SystemKind::Twin).unwrap();
        let one = ActiveSelection::new(vec![1]);
        let err = build_interaction(&one, &one, twin, twin, &[1.0], ZEROS).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_deterministic() {
        let active = ActiveSelection::new(vec![3, 3, 3, 6, 12, 6]);
        let h: Vec<f64> = (0..27).map(|k| 0.1 * k as f64 + 0.01).collect();
        let a = interaction_slip_by_slip(LatticeFamily::Hp, &active, &h).unwrap();
        let b = interaction_slip_by_slip(LatticeFamily::Hp, &active, &h).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_selection_above_maximum_rejected() {
        let err = interaction_twin_by_twin(LatticeFamily::Cf, &ActiveSelection::new(vec![13]), &ids(2)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SELECTION");
    }

    #[test]
    fn test_twin_twin_types() {
        let m = interaction_twin_by_twin(LatticeFamily::Ci, &ActiveSelection::new(vec![12]), &ids(3)).unwrap();
        for i in 0..12 {
            assert_eq!(m[(i, i)], 1.0);
        }
        let m = interaction_twin_by_twin(LatticeFamily::Cf, &ActiveSelection::new(vec![12]), &ids(2)).unwrap();
        assert_eq!(m[(0, 1)], 1.0);
        assert_eq!(m[(0, 3)], 2.0);
    }

    #[test]
    fn test_slip_by_twin_shapes_and_transpose() {
        let slip = ActiveSelection::new(vec![12, 12]);
        let twin = ActiveSelection::new(vec![12]);
        let st = interaction_slip_by_twin(LatticeFamily::Ci, &slip, &twin, &ids(3)).unwrap();
        let ts = interaction_twin_by_slip(LatticeFamily::Ci, &twin, &slip, &ids(3)).unwrap();
        assert_eq!(st.shape(), (24, 12));
        assert_eq!(ts.shape(), (12, 24));
        assert_eq!(st.transpose(), ts);
    }

    #[test]
    fn test_hexagonal_family_pair_types() {
        let slip = ActiveSelection::new(vec![3, 3]);
        let twin = ActiveSelection::new(vec![6, 6]);
        let st = interaction_slip_by_twin(LatticeFamily::Hp, &slip, &twin, &ids(24)).unwrap();
        // basal slip by first twin family, prismatic slip by second twin family
        assert_eq!(st[(0, 0)], 1.0);
        assert_eq!(st[(3, 6)], 6.0);
    }

    #[test]
    fn test_transformation_interactions() {
        let trans = ActiveSelection::new(vec![12]);
        let tt = interaction_trans_by_trans(LatticeFamily::Cf, &trans, &ids(2)).unwrap();
        assert_eq!(tt.shape(), (12, 12));
        let st = interaction_slip_by_trans(LatticeFamily::Cf, &ActiveSelection::new(vec![12]), &trans, &ids(4)).unwrap();
        let sw = interaction_slip_by_twin(LatticeFamily::Cf, &ActiveSelection::new(vec![12]), &trans, &ids(4)).unwrap();
        assert_eq!(st, sw);
        assert!(interaction_trans_by_trans(LatticeFamily::Ci, &trans, &ids(2)).is_err());
    }

    #[test]
    fn test_tetragonal_slip() {
        let active = ActiveSelection::new(vec![2, 2, 2, 4, 2, 4, 2, 2, 4, 8, 4, 8, 8]);
        let m = interaction_slip_by_slip(LatticeFamily::Ti, &active, &ids(5)).unwrap();
        assert_eq!(m.shape(), (52, 52));
        assert_eq!(m, m.transpose());
        assert!(interaction_twin_by_twin(LatticeFamily::Ti, &ActiveSelection::new(vec![1]), &ids(5)).is_err());
    }

    #[test]
    fn test_empty_selection_gives_empty_matrix() {
        let m = interaction_slip_by_slip(LatticeFamily::Cf, &ActiveSelection::default(), &[]).unwrap();
        assert_eq!(m.shape(), (0, 0));
    }
}
