use anyhow::Result;
use lattice_core::catalog::catalog;
use lattice_core::labels::label;
use lattice_core::{ActiveSelection, LatticeFamily, SystemKind};
use serde::Serialize;
use tracing::info;

use crate::cli::LatticeArgs;
use crate::report::Report;

#[derive(Debug, Serialize)]
struct FamilyEntry {
    name: &'static str,
    max_count: usize,
    active: usize,
}

#[derive(Debug, Serialize)]
struct SystemsReport {
    lattice: LatticeFamily,
    kind: SystemKind,
    description: String,
    families: Vec<FamilyEntry>,
    total: usize,
    labels: Vec<String>,
}

fn describe(lattice: LatticeFamily, kind: SystemKind) -> String {
    format!("{} {} systems", lattice.display_name(), kind.display_name().to_lowercase())
}

pub fn run(args: &LatticeArgs, kind: SystemKind, active: Option<ActiveSelection>) -> Result<()> {
    let catalog = catalog(args.lattice, kind)?;
    let active = active.unwrap_or_else(|| ActiveSelection::all(catalog));
    let indices = active.potential_indices(catalog)?;

    let families = catalog
        .families
        .iter()
        .enumerate()
        .map(|(i, f)| FamilyEntry {
            name: f.name,
            max_count: f.max_count,
            active: active.counts().get(i).copied().unwrap_or(0),
        })
        .collect();
    let labels = indices.iter().map(|&p| label(&catalog.systems[p])).collect();

    info!(lattice = args.lattice.code(), kind = kind.code(), active = indices.len(), "listed systems");
    Report::new(
        "systems",
        SystemsReport {
            lattice: args.lattice,
            kind,
            description: describe(args.lattice, kind),
            families,
            total: indices.len(),
            labels,
        },
    )
    .print()
}
