//! # Active System Selection
//!
//! A caller activates a number of systems per family, e.g. `[12, 0]` for the
//! twelve octahedral slip systems of cF and none of the {110} ones. Only the
//! leading systems of each family are ever activated.
//!
//! [`ActiveSelection::potential_indices`] is the one place where
//! family-relative counts are turned into flat catalog ("potential")
//! indices; every generator and the interaction builder go through it.
//!
//! ## Example
//!
//! ```rust
//! use lattice_core::catalog::catalog;
//! use lattice_core::lattice::{LatticeFamily, SystemKind};
//! use lattice_core::selection::ActiveSelection;
//!
//! let slip = catalog(LatticeFamily::Cf, SystemKind::Slip).unwrap();
//! let active = ActiveSelection::new(vec![2, 1]);
//! assert_eq!(active.potential_indices(slip).unwrap(), vec![0, 1, 12]);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::SystemCatalog;
use crate::errors::{LatticeError, LatticeResult};

/// Number of active systems per family
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveSelection(Vec<usize>);

impl ActiveSelection {
    pub fn new(counts: Vec<usize>) -> Self {
        ActiveSelection(counts)
    }

    /// Activate every system of the catalog
    pub fn all(catalog: &SystemCatalog) -> Self {
        ActiveSelection(catalog.max_counts())
    }

    /// Parse a comma-separated list such as `"12,6"`
    pub fn from_str_flexible(s: &str) -> LatticeResult<Self> {
        let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']');
        if trimmed.trim().is_empty() {
            return Ok(ActiveSelection::default());
        }
        trimmed
            .split(',')
            .map(|part| {
                part.trim().parse::<usize>().map_err(|_| {
                    LatticeError::invalid_input(
                        "active",
                        s,
                        "expected a comma-separated list of non-negative counts",
                    )
                })
            })
            .collect::<LatticeResult<Vec<_>>>()
            .map(ActiveSelection)
    }

    pub fn counts(&self) -> &[usize] {
        &self.0
    }

    /// Total number of active systems
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Check the selection against the family structure of `catalog`
    pub fn validate(&self, catalog: &SystemCatalog) -> LatticeResult<()> {
        let max = catalog.max_counts();
        if self.0.len() > max.len() {
            return Err(LatticeError::invalid_selection(
                catalog.lattice.code(),
                catalog.kind.code(),
                format!(
                    "{} families selected, only {} available",
                    self.0.len(),
                    max.len()
                ),
            ));
        }
        for (family, (&count, &max_count)) in self.0.iter().zip(&max).enumerate() {
            if count > max_count {
                return Err(LatticeError::invalid_selection(
                    catalog.lattice.code(),
                    catalog.kind.code(),
                    format!(
                        "{count} systems requested in family {} ({}), maximum is {max_count}",
                        family + 1,
                        catalog.families[family].name
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Flat catalog index of every active system, in family order
    pub fn potential_indices(&self, catalog: &SystemCatalog) -> LatticeResult<Vec<usize>> {
        self.validate(catalog)?;
        let mut indices = Vec::with_capacity(self.total());
        let mut offset = 0;
        for (family, max_count) in catalog.max_counts().into_iter().enumerate() {
            let count = self.0.get(family).copied().unwrap_or(0);
            indices.extend(offset..offset + count);
            offset += max_count;
        }
        Ok(indices)
    }
}

impl From<Vec<usize>> for ActiveSelection {
    fn from(counts: Vec<usize>) -> Self {
        ActiveSelection(counts)
    }
}

impl From<&[usize]> for ActiveSelection {
    fn from(counts: &[usize]) -> Self {
        ActiveSelection(counts.to_vec())
    }
}
