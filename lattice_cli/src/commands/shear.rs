use anyhow::Result;
use lattice_core::twinning::characteristic_shear_twin;
use lattice_core::{ActiveSelection, LatticeFamily};
use serde::Serialize;
use tracing::warn;

use crate::cli::LatticeArgs;
use crate::report::Report;

#[derive(Debug, Serialize)]
struct ShearReport {
    lattice: LatticeFamily,
    c_over_a: f64,
    shear: Vec<f64>,
}

pub fn run(args: &LatticeArgs, active: &ActiveSelection) -> Result<()> {
    let c_over_a = args.ratio()?;
    if active.is_empty() {
        warn!(lattice = args.lattice.code(), "no active twin systems selected");
    }
    let shear = characteristic_shear_twin(args.lattice, active, c_over_a)?;
    Report::new(
        "shear",
        ShearReport {
            lattice: args.lattice,
            c_over_a,
            shear,
        },
    )
    .print()
}
