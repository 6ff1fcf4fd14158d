use anyhow::{Context, Result};
use lattice_core::moduli::{equivalent_moduli, EquivalentModuli};
use lattice_core::symmetry::symmetrize_c66;
use lattice_core::types::Matrix6;
use lattice_core::{Averaging, LatticeFamily};
use serde::Serialize;

use crate::report::Report;

#[derive(Debug, Serialize)]
struct ModuliReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    symmetry: Option<LatticeFamily>,
    moduli: Vec<EquivalentModuli>,
}

/// Parse a JSON array of six rows of six numbers
pub fn parse_stiffness(json: &str) -> Result<Matrix6> {
    let rows: [[f64; 6]; 6] = serde_json::from_str(json).context("--stiffness must be a JSON 6x6 array of numbers")?;
    Ok(Matrix6::from_fn(|i, j| rows[i][j]))
}

pub fn run(stiffness: &str, averaging: Option<Averaging>, symmetry: Option<LatticeFamily>) -> Result<()> {
    let mut c66 = parse_stiffness(stiffness)?;
    if let Some(family) = symmetry {
        c66 = symmetrize_c66(&c66, family);
    }
    let assumptions: Vec<Averaging> = match averaging {
        Some(a) => vec![a],
        None => Averaging::ALL.to_vec(),
    };
    let moduli = assumptions
        .into_iter()
        .map(|a| equivalent_moduli(&c66, a))
        .collect::<Result<Vec<_>, _>>()?;

    Report::new("moduli", ModuliReport { symmetry, moduli }).print()
}
