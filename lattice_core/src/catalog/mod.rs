//! # Lattice System Catalog
//!
//! Static tables of slip, twin, transformation and cleavage systems for each
//! supported lattice family, grouped into families, plus the interaction-type
//! tables that classify how two systems interact.
//!
//! Catalogs are built once from the literal tables in the per-lattice
//! sub-modules and handed out as `&'static SystemCatalog`.
//!
//! | lattice | slip | twin | transformation | cleavage |
//! |---------|------|------|----------------|----------|
//! | cF      | 12 + 6 | 12 | 12 | 3 + 4 |
//! | cI      | 12 + 12 | 12 | - | 3 |
//! | hP      | 3 + 3 + 3 + 6 + 12 + 6 | 6 + 6 + 6 + 6 | - | - |
//! | tI      | 13 families, 52 systems | - | - | - |
//!
//! ## Example
//!
//! ```rust
//! use lattice_core::catalog::catalog;
//! use lattice_core::lattice::{LatticeFamily, SystemKind};
//!
//! let slip = catalog(LatticeFamily::Cf, SystemKind::Slip).unwrap();
//! assert_eq!(slip.max_counts(), vec![12, 6]);
//! assert_eq!(slip.total_systems(), 18);
//!
//! assert!(catalog(LatticeFamily::Ti, SystemKind::Twin).is_err());
//! ```

pub mod cubic_bcc;
pub mod cubic_fcc;
pub mod hexagonal;
pub mod tetragonal;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{LatticeError, LatticeResult};
use crate::lattice::{LatticeFamily, SystemKind};

/// Interaction-type ids, `[reacting][acting]`, ids start at 1
pub type InteractionTypeTable = &'static [&'static [u8]];

// ============================================================================
// Catalog Types
// ============================================================================

/// Index vectors of one system: `(direction, normal)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemIndices {
    /// 3-index Miller `[uvw](hkl)`
    Miller([i8; 3], [i8; 3]),
    /// 4-index Miller-Bravais `[uvtw](hkil)`
    MillerBravais([i8; 4], [i8; 4]),
}

impl SystemIndices {
    /// Direction components (3 or 4)
    pub fn direction(&self) -> &[i8] {
        match self {
            SystemIndices::Miller(d, _) => &d[..],
            SystemIndices::MillerBravais(d, _) => &d[..],
        }
    }

    /// Plane-normal components (3 or 4)
    pub fn normal(&self) -> &[i8] {
        match self {
            SystemIndices::Miller(_, n) => &n[..],
            SystemIndices::MillerBravais(_, n) => &n[..],
        }
    }
}

/// Ordered group of systems sharing physical character
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemFamily {
    pub name: &'static str,
    pub max_count: usize,
}

/// All systems of one kind for one lattice, in family order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemCatalog {
    pub lattice: LatticeFamily,
    pub kind: SystemKind,
    pub families: Vec<SystemFamily>,
    pub systems: Vec<SystemIndices>,
}

impl SystemCatalog {
    fn from_miller(
        lattice: LatticeFamily,
        kind: SystemKind,
        families: &[(&'static str, usize)],
        systems: &[([i8; 3], [i8; 3])],
    ) -> Self {
        let systems = systems
            .iter()
            .map(|&(d, n)| SystemIndices::Miller(d, n))
            .collect();
        Self::assemble(lattice, kind, families, systems)
    }

    fn from_miller_bravais(
        lattice: LatticeFamily,
        kind: SystemKind,
        families: &[(&'static str, usize)],
        systems: &[([i8; 4], [i8; 4])],
    ) -> Self {
        let systems = systems
            .iter()
            .map(|&(d, n)| SystemIndices::MillerBravais(d, n))
            .collect();
        Self::assemble(lattice, kind, families, systems)
    }

    fn assemble(
        lattice: LatticeFamily,
        kind: SystemKind,
        families: &[(&'static str, usize)],
        systems: Vec<SystemIndices>,
    ) -> Self {
        let families: Vec<SystemFamily> = families
            .iter()
            .map(|&(name, max_count)| SystemFamily { name, max_count })
            .collect();
        debug!(
            lattice = lattice.code(),
            kind = kind.code(),
            families = families.len(),
            systems = systems.len(),
            "built system catalog"
        );
        SystemCatalog {
            lattice,
            kind,
            families,
            systems,
        }
    }

    /// Maximum number of systems per family
    pub fn max_counts(&self) -> Vec<usize> {
        self.families.iter().map(|f| f.max_count).collect()
    }

    /// Number of systems over all families
    pub fn total_systems(&self) -> usize {
        self.systems.len()
    }

    pub fn family_names(&self) -> Vec<&'static str> {
        self.families.iter().map(|f| f.name).collect()
    }
}

// ============================================================================
// Static Catalogs
// ============================================================================

static CF_SLIP: Lazy<SystemCatalog> = Lazy::new(|| {
    SystemCatalog::from_miller(
        LatticeFamily::Cf,
        SystemKind::Slip,
        cubic_fcc::SLIP_FAMILIES,
        cubic_fcc::SLIP_SYSTEMS,
    )
});

static CF_TWIN: Lazy<SystemCatalog> = Lazy::new(|| {
    SystemCatalog::from_miller(
        LatticeFamily::Cf,
        SystemKind::Twin,
        cubic_fcc::TWIN_FAMILIES,
        cubic_fcc::TWIN_SYSTEMS,
    )
});

static CF_TRANSFORMATION: Lazy<SystemCatalog> = Lazy::new(|| {
    SystemCatalog::from_miller(
        LatticeFamily::Cf,
        SystemKind::Transformation,
        cubic_fcc::TRANSFORMATION_FAMILIES,
        cubic_fcc::TRANSFORMATION_SYSTEMS,
    )
});

static CF_CLEAVAGE: Lazy<SystemCatalog> = Lazy::new(|| {
    SystemCatalog::from_miller(
        LatticeFamily::Cf,
        SystemKind::Cleavage,
        cubic_fcc::CLEAVAGE_FAMILIES,
        cubic_fcc::CLEAVAGE_SYSTEMS,
    )
});

static CI_SLIP: Lazy<SystemCatalog> = Lazy::new(|| {
    SystemCatalog::from_miller(
        LatticeFamily::Ci,
        SystemKind::Slip,
        cubic_bcc::SLIP_FAMILIES,
        cubic_bcc::SLIP_SYSTEMS,
    )
});

static CI_TWIN: Lazy<SystemCatalog> = Lazy::new(|| {
    SystemCatalog::from_miller(
        LatticeFamily::Ci,
        SystemKind::Twin,
        cubic_bcc::TWIN_FAMILIES,
        cubic_bcc::TWIN_SYSTEMS,
    )
});

static CI_CLEAVAGE: Lazy<SystemCatalog> = Lazy::new(|| {
    SystemCatalog::from_miller(
        LatticeFamily::Ci,
        SystemKind::Cleavage,
        cubic_bcc::CLEAVAGE_FAMILIES,
        cubic_bcc::CLEAVAGE_SYSTEMS,
    )
});

static HP_SLIP: Lazy<SystemCatalog> = Lazy::new(|| {
    SystemCatalog::from_miller_bravais(
        LatticeFamily::Hp,
        SystemKind::Slip,
        hexagonal::SLIP_FAMILIES,
        hexagonal::SLIP_SYSTEMS,
    )
});

static HP_TWIN: Lazy<SystemCatalog> = Lazy::new(|| {
    SystemCatalog::from_miller_bravais(
        LatticeFamily::Hp,
        SystemKind::Twin,
        hexagonal::TWIN_FAMILIES,
        hexagonal::TWIN_SYSTEMS,
    )
});

static TI_SLIP: Lazy<SystemCatalog> = Lazy::new(|| {
    SystemCatalog::from_miller(
        LatticeFamily::Ti,
        SystemKind::Slip,
        tetragonal::SLIP_FAMILIES,
        tetragonal::SLIP_SYSTEMS,
    )
});

// ============================================================================
// Lookup
// ============================================================================

/// Catalog of `kind` systems for `lattice`
pub fn catalog(lattice: LatticeFamily, kind: SystemKind) -> LatticeResult<&'static SystemCatalog> {
    let catalog: &'static SystemCatalog = match (lattice, kind) {
        (LatticeFamily::Cf, SystemKind::Slip) => &*CF_SLIP,
        (LatticeFamily::Cf, SystemKind::Twin) => &*CF_TWIN,
        (LatticeFamily::Cf, SystemKind::Transformation) => &*CF_TRANSFORMATION,
        (LatticeFamily::Cf, SystemKind::Cleavage) => &*CF_CLEAVAGE,
        (LatticeFamily::Ci, SystemKind::Slip) => &*CI_SLIP,
        (LatticeFamily::Ci, SystemKind::Twin) => &*CI_TWIN,
        (LatticeFamily::Ci, SystemKind::Cleavage) => &*CI_CLEAVAGE,
        (LatticeFamily::Hp, SystemKind::Slip) => &*HP_SLIP,
        (LatticeFamily::Hp, SystemKind::Twin) => &*HP_TWIN,
        (LatticeFamily::Ti, SystemKind::Slip) => &*TI_SLIP,
        _ => return Err(LatticeError::unsupported(lattice.code(), kind.code())),
    };
    Ok(catalog)
}

/// Maximum number of systems per family
pub fn max_counts(lattice: LatticeFamily, kind: SystemKind) -> LatticeResult<Vec<usize>> {
    Ok(catalog(lattice, kind)?.max_counts())
}

/// Number of systems over all families
pub fn total_systems(lattice: LatticeFamily, kind: SystemKind) -> LatticeResult<usize> {
    Ok(catalog(lattice, kind)?.total_systems())
}

pub fn family_names(lattice: LatticeFamily, kind: SystemKind) -> LatticeResult<Vec<&'static str>> {
    Ok(catalog(lattice, kind)?.family_names())
}

/// Interaction-type table for `reacting` systems acted on by `acting` systems
pub fn interaction_table(
    lattice: LatticeFamily,
    reacting: SystemKind,
    acting: SystemKind,
) -> LatticeResult<InteractionTypeTable> {
    use SystemKind::{Slip, Transformation, Twin};

    let table = match (lattice, reacting, acting) {
        (LatticeFamily::Cf, Slip, Slip) => cubic_fcc::SLIP_SLIP,
        (LatticeFamily::Cf, Twin, Twin) => cubic_fcc::TWIN_TWIN,
        (LatticeFamily::Cf, Transformation, Transformation) => cubic_fcc::TRANS_TRANS,
        (LatticeFamily::Cf, Slip, Twin) => cubic_fcc::SLIP_TWIN,
        (LatticeFamily::Cf, Twin, Slip) => cubic_fcc::TWIN_SLIP,
        (LatticeFamily::Cf, Slip, Transformation) => cubic_fcc::SLIP_TRANS,
        (LatticeFamily::Ci, Slip, Slip) => cubic_bcc::SLIP_SLIP,
        (LatticeFamily::Ci, Twin, Twin) => cubic_bcc::TWIN_TWIN,
        (LatticeFamily::Ci, Slip, Twin) => cubic_bcc::SLIP_TWIN,
        (LatticeFamily::Ci, Twin, Slip) => cubic_bcc::TWIN_SLIP,
        (LatticeFamily::Hp, Slip, Slip) => hexagonal::SLIP_SLIP,
        (LatticeFamily::Hp, Twin, Twin) => hexagonal::TWIN_TWIN,
        (LatticeFamily::Hp, Slip, Twin) => hexagonal::SLIP_TWIN,
        (LatticeFamily::Hp, Twin, Slip) => hexagonal::TWIN_SLIP,
        (LatticeFamily::Ti, Slip, Slip) => tetragonal::SLIP_SLIP,
        _ => {
            return Err(LatticeError::unsupported(
                lattice.code(),
                format!("{}-{} interaction", reacting.code(), acting.code()),
            ))
        }
    };
    Ok(table)
}
