use anyhow::{bail, Result};
use lattice_core::interaction::{
    interaction_slip_by_slip, interaction_slip_by_trans, interaction_slip_by_twin, interaction_trans_by_trans,
    interaction_twin_by_slip, interaction_twin_by_twin,
};
use lattice_core::{ActiveSelection, LatticeError, LatticeFamily, SystemKind};
use serde::Serialize;
use tracing::{info, warn};

use crate::report::{rows, Report};

#[derive(Debug, Serialize)]
struct InteractionReport {
    lattice: LatticeFamily,
    reacting: SystemKind,
    acting: SystemKind,
    rows: usize,
    columns: usize,
    matrix: Vec<Vec<f64>>,
}

pub fn run(
    lattice: LatticeFamily,
    reacting: SystemKind,
    acting: Option<SystemKind>,
    active: &ActiveSelection,
    acting_active: Option<&ActiveSelection>,
    coefficients: &[f64],
) -> Result<()> {
    let acting = acting.unwrap_or(reacting);
    let acting_active = acting_active.unwrap_or(active);
    if active.is_empty() || acting_active.is_empty() {
        warn!(lattice = lattice.code(), "interaction matrix has an empty dimension");
    }

    use SystemKind::{Slip, Transformation, Twin};
    let matrix = match (reacting, acting) {
        (Slip, Slip) => interaction_slip_by_slip(lattice, active, coefficients)?,
        (Twin, Twin) => interaction_twin_by_twin(lattice, active, coefficients)?,
        (Transformation, Transformation) => interaction_trans_by_trans(lattice, active, coefficients)?,
        (Slip, Twin) => interaction_slip_by_twin(lattice, active, acting_active, coefficients)?,
        (Twin, Slip) => interaction_twin_by_slip(lattice, active, acting_active, coefficients)?,
        (Slip, Transformation) => interaction_slip_by_trans(lattice, active, acting_active, coefficients)?,
        _ => bail!(LatticeError::unsupported(
            lattice.code(),
            format!("{} by {} interaction", reacting.code(), acting.code()),
        )),
    };
    info!(
        lattice = lattice.code(),
        reacting = reacting.code(),
        acting = acting.code(),
        rows = matrix.nrows(),
        columns = matrix.ncols(),
        "built interaction matrix"
    );

    Report::new(
        "interaction",
        InteractionReport {
            lattice,
            reacting,
            acting,
            rows: matrix.nrows(),
            columns: matrix.ncols(),
            matrix: rows(&matrix),
        },
    )
    .print()
}
