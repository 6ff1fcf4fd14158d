//! # lattice_core - Crystallographic Lattice Algebra Engine
//!
//! `lattice_core` provides the geometric and tensorial building blocks a
//! crystal-plasticity model needs at setup time: deformation-system
//! catalogs for cF, cI, hP and tI lattices, per-system coordinate frames,
//! Schmid and non-Schmid tensors, interaction matrices, twin shears,
//! transformation strains, rotated stiffness, symmetry projections and
//! equivalent isotropic moduli.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions of their inputs and the static catalogs
//! - **Closed Sets**: Lattice families and system kinds are enums, parsed once
//! - **Rich Errors**: Structured error types, not just strings
//! - **JSON-Friendly**: Inputs and results implement Serialize
//!
//! ## Quick Start
//!
//! ```rust
//! use lattice_core::interaction::interaction_slip_by_slip;
//! use lattice_core::lattice::LatticeFamily;
//! use lattice_core::schmid::schmid_slip;
//! use lattice_core::selection::ActiveSelection;
//!
//! // Twelve octahedral slip systems of a face-centered cubic crystal
//! let active = ActiveSelection::new(vec![12, 0]);
//! let schmid = schmid_slip(LatticeFamily::Cf, &active, 0.0).unwrap();
//! assert_eq!(schmid.len(), 12);
//!
//! let h = [1.0, 1.0, 1.4, 1.4, 1.4, 1.4, 1.4];
//! let matrix = interaction_slip_by_slip(LatticeFamily::Cf, &active, &h).unwrap();
//! assert_eq!(matrix.shape(), (12, 12));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Static system tables and interaction-type tables
//! - [`selection`] - Active system counts and catalog index translation
//! - [`geometry`] - Per-system orthonormal frames
//! - [`schmid`] - Schmid, cleavage and non-Schmid projection tensors
//! - [`interaction`] - Interaction matrices
//! - [`twinning`] - Characteristic twin shear
//! - [`transformation`] - Transformation rotations and eigenstrains
//! - [`stiffness`] - Stiffness of twinned and transformed volume
//! - [`symmetry`] - Symmetry projection of tensors and stiffness
//! - [`moduli`] - Voigt/Reuss equivalent moduli
//! - [`self_test`] - Seeded consistency checks
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod errors;
pub mod geometry;
pub mod interaction;
pub mod labels;
pub mod lattice;
pub mod moduli;
pub mod params;
pub mod projection;
pub mod schmid;
pub mod selection;
pub mod self_test;
pub mod stiffness;
pub mod symmetry;
pub mod transformation;
pub mod twinning;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use errors::{LatticeError, LatticeResult};
pub use geometry::CoordinateFrame;
pub use lattice::{LatticeFamily, SystemKind};
pub use moduli::Averaging;
pub use params::{AspectRatio, LatticeParameter};
pub use selection::ActiveSelection;
pub use transformation::{TransformationSystem, TransformationTarget};
