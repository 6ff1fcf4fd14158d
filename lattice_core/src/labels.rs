//! Human-readable labels for active systems, e.g. `[ 0  1 -1](  1  1  1)`.
//!
//! Direction components are right-aligned to width 2 and separated by one
//! space; normal components are right-aligned to width 3. Miller-Bravais
//! systems print all four components.

use crate::catalog::{catalog, SystemIndices};
use crate::errors::LatticeResult;
use crate::lattice::{LatticeFamily, SystemKind};
use crate::selection::ActiveSelection;

/// Label of one system
pub fn label(indices: &SystemIndices) -> String {
    let direction: Vec<String> = indices.direction().iter().map(|u| format!("{u:>2}")).collect();
    let normal: String = indices.normal().iter().map(|h| format!("{h:>3}")).collect();
    format!("[{}]({})", direction.join(" "), normal)
}

fn labels(lattice: LatticeFamily, kind: SystemKind, active: &ActiveSelection) -> LatticeResult<Vec<String>> {
    let catalog = catalog(lattice, kind)?;
    Ok(active
        .potential_indices(catalog)?
        .into_iter()
        .map(|p| label(&catalog.systems[p]))
        .collect())
}

/// Labels of the active slip systems
pub fn labels_slip(lattice: LatticeFamily, active: &ActiveSelection) -> LatticeResult<Vec<String>> {
    labels(lattice, SystemKind::Slip, active)
}

/// Labels of the active twin systems
pub fn labels_twin(lattice: LatticeFamily, active: &ActiveSelection) -> LatticeResult<Vec<String>> {
    labels(lattice, SystemKind::Twin, active)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcc_first_slip_label() {
        let labels = labels_slip(LatticeFamily::Cf, &ActiveSelection::new(vec![1])).unwrap();
        assert_eq!(labels, vec!["[ 0  1 -1](  1  1  1)".to_string()]);
    }

    #[test]
    fn test_hexagonal_four_index_label() {
        let labels = labels_slip(LatticeFamily::Hp, &ActiveSelection::new(vec![1])).unwrap();
        assert_eq!(labels[0], "[ 2 -1 -1  0](  0  0  0  1)");
    }

    #[test]
    fn test_twin_labels_follow_selection() {
        let labels = labels_twin(LatticeFamily::Ci, &ActiveSelection::new(vec![12])).unwrap();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[1], "[ 1  1  1]( -2  1  1)");
        assert!(labels_twin(LatticeFamily::Ti, &ActiveSelection::new(vec![1])).is_err());
    }
}
