use anyhow::{bail, Result};
use lattice_core::schmid::{non_schmid, schmid_cleavage, schmid_slip, schmid_twin};
use lattice_core::{ActiveSelection, LatticeError, LatticeFamily, SystemKind};
use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::LatticeArgs;
use crate::report::{rows3, Report};

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Tensors {
    Single(Vec<[[f64; 3]; 3]>),
    /// `[d⊗n, t⊗n, n⊗n]` per cleavage system
    Triple(Vec<[[[f64; 3]; 3]; 3]>),
}

#[derive(Debug, Serialize)]
struct SchmidReport {
    lattice: LatticeFamily,
    kind: SystemKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    sense: Option<i32>,
    tensors: Tensors,
}

pub fn run(
    args: &LatticeArgs,
    kind: SystemKind,
    active: &ActiveSelection,
    sense: Option<i32>,
    coefficients: &[f64],
) -> Result<()> {
    let lattice = args.lattice;
    if sense.is_none() && !coefficients.is_empty() {
        bail!(LatticeError::invalid_input(
            "coefficients",
            format!("{coefficients:?}"),
            "non-Schmid coefficients need --sense",
        ));
    }
    if active.is_empty() {
        warn!(lattice = lattice.code(), kind = kind.code(), "no active systems selected");
    }
    let tensors = match (kind, sense) {
        (SystemKind::Slip, Some(sense)) => {
            Tensors::Single(non_schmid(lattice, active, sense, coefficients)?.iter().map(rows3).collect())
        }
        (SystemKind::Slip, None) => Tensors::Single(schmid_slip(lattice, active, args.ratio()?)?.iter().map(rows3).collect()),
        (SystemKind::Twin, None) => Tensors::Single(schmid_twin(lattice, active, args.ratio()?)?.iter().map(rows3).collect()),
        (SystemKind::Cleavage, None) => Tensors::Triple(
            schmid_cleavage(lattice, active, args.ratio()?)?
                .iter()
                .map(|[a, b, c]| [rows3(a), rows3(b), rows3(c)])
                .collect(),
        ),
        (SystemKind::Transformation, _) => {
            bail!(LatticeError::invalid_input(
                "kind",
                kind.code(),
                "transformation Schmid tensors need a target lattice; use the library API",
            ))
        }
        (_, Some(sense)) => {
            bail!(LatticeError::invalid_input(
                "sense",
                sense.to_string(),
                "a slip sense applies to slip systems only",
            ))
        }
    };
    debug!(lattice = lattice.code(), kind = kind.code(), "computed projection tensors");

    Report::new(
        "schmid",
        SchmidReport {
            lattice,
            kind,
            sense,
            tensors,
        },
    )
    .print()
}
