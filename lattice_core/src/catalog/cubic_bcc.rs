//! Body-centered cubic (cI) system tables.
//!
//! Systems are `(direction, normal)` pairs in 3-index Miller notation.
//! The {112} twins share their indices with the {112} slip systems.

use super::InteractionTypeTable;

// ============================================================================
// Slip
// ============================================================================

pub const SLIP_FAMILIES: &[(&str, usize)] = &[("<111>{110}", 12), ("<111>{112}", 12)];

pub const SLIP_SYSTEMS: &[([i8; 3], [i8; 3])] = &[
    // <111>{110}
    ([1, -1, 1], [0, 1, 1]),
    ([-1, -1, 1], [0, 1, 1]),
    ([1, 1, 1], [0, -1, 1]),
    ([-1, 1, 1], [0, -1, 1]),
    ([-1, 1, 1], [1, 0, 1]),
    ([-1, -1, 1], [1, 0, 1]),
    ([1, 1, 1], [-1, 0, 1]),
    ([1, -1, 1], [-1, 0, 1]),
    ([-1, 1, 1], [1, 1, 0]),
    ([-1, 1, -1], [1, 1, 0]),
    ([1, 1, 1], [-1, 1, 0]),
    ([1, 1, -1], [-1, 1, 0]),
    // <111>{112}
    ([-1, 1, 1], [2, 1, 1]),
    ([1, 1, 1], [-2, 1, 1]),
    ([1, 1, -1], [2, -1, 1]),
    ([1, -1, 1], [2, 1, -1]),
    ([1, -1, 1], [1, 2, 1]),
    ([1, 1, -1], [-1, 2, 1]),
    ([1, 1, 1], [1, -2, 1]),
    ([-1, 1, 1], [1, 2, -1]),
    ([1, 1, -1], [1, 1, 2]),
    ([1, -1, 1], [-1, 1, 2]),
    ([-1, 1, 1], [1, -1, 2]),
    ([1, 1, 1], [1, 1, -2]),
];

// ============================================================================
// Twin
// ============================================================================

pub const TWIN_FAMILIES: &[(&str, usize)] = &[("<111>{112}", 12)];

pub const TWIN_SYSTEMS: &[([i8; 3], [i8; 3])] = &[
    ([-1, 1, 1], [2, 1, 1]),
    ([1, 1, 1], [-2, 1, 1]),
    ([1, 1, -1], [2, -1, 1]),
    ([1, -1, 1], [2, 1, -1]),
    ([1, -1, 1], [1, 2, 1]),
    ([1, 1, -1], [-1, 2, 1]),
    ([1, 1, 1], [1, -2, 1]),
    ([-1, 1, 1], [1, 2, -1]),
    ([1, 1, -1], [1, 1, 2]),
    ([1, -1, 1], [-1, 1, 2]),
    ([-1, 1, 1], [1, -1, 2]),
    ([1, 1, 1], [1, 1, -2]),
];

// ============================================================================
// Cleavage
// ============================================================================

pub const CLEAVAGE_FAMILIES: &[(&str, usize)] = &[("<001>{001}", 3)];

pub const CLEAVAGE_SYSTEMS: &[([i8; 3], [i8; 3])] = &[
    ([0, 1, 0], [1, 0, 0]),
    ([0, 0, 1], [0, 1, 0]),
    ([1, 0, 0], [0, 0, 1]),
];

// ============================================================================
// Interaction types
// ============================================================================

/// Slip by slip: 1 self, 2 coplanar, 3 collinear,
/// 4 mixed-asymmetrical junction, 5 mixed-symmetrical junction,
/// 6 edge junction
pub const SLIP_SLIP: InteractionTypeTable = &[
    &[1, 2, 6, 6, 5, 4, 4, 3, 4, 3, 5, 4, 4, 4, 4, 3, 3, 4, 4, 4, 4, 3, 4, 4],
    &[2, 1, 6, 6, 4, 3, 5, 4, 5, 4, 4, 3, 4, 4, 3, 4, 4, 3, 4, 4, 3, 4, 4, 4],
    &[6, 6, 1, 2, 4, 5, 3, 4, 4, 5, 3, 4, 4, 3, 4, 4, 4, 4, 3, 4, 4, 4, 4, 3],
    &[6, 6, 2, 1, 3, 4, 4, 5, 3, 4, 4, 5, 3, 4, 4, 4, 4, 4, 4, 3, 4, 4, 3, 4],
    &[5, 4, 4, 3, 1, 2, 6, 6, 3, 4, 5, 4, 3, 4, 4, 4, 4, 4, 4, 3, 4, 4, 3, 4],
    &[4, 3, 5, 4, 2, 1, 6, 6, 4, 5, 4, 3, 4, 4, 3, 4, 4, 3, 4, 4, 3, 4, 4, 4],
    &[4, 5, 3, 4, 6, 6, 1, 2, 5, 4, 3, 4, 4, 3, 4, 4, 4, 4, 3, 4, 4, 4, 4, 3],
    &[3, 4, 4, 5, 6, 6, 2, 1, 4, 3, 4, 5, 4, 4, 4, 3, 3, 4, 4, 4, 4, 3, 4, 4],
    &[4, 5, 4, 3, 3, 4, 5, 4, 1, 2, 6, 6, 3, 4, 4, 4, 4, 4, 4, 3, 4, 4, 3, 4],
    &[3, 4, 5, 4, 4, 5, 4, 3, 2, 1, 6, 6, 4, 4, 4, 3, 3, 4, 4, 4, 4, 3, 4, 4],
    &[5, 4, 3, 4, 5, 4, 3, 4, 6, 6, 1, 2, 4, 3, 4, 4, 4, 4, 3, 4, 4, 4, 4, 3],
    &[4, 3, 4, 5, 4, 3, 4, 5, 6, 6, 2, 1, 4, 4, 3, 4, 4, 3, 4, 4, 3, 4, 4, 4],
    &[4, 4, 4, 3, 3, 4, 4, 4, 3, 4, 4, 4, 1, 6, 6, 6, 5, 4, 4, 3, 5, 4, 3, 4],
    &[4, 4, 3, 4, 4, 4, 3, 4, 4, 4, 3, 4, 6, 1, 6, 6, 4, 5, 3, 4, 4, 5, 4, 3],
    &[4, 3, 4, 4, 4, 3, 4, 4, 4, 4, 4, 3, 6, 6, 1, 6, 4, 3, 5, 4, 3, 4, 5, 4],
    &[3, 4, 4, 4, 4, 4, 4, 3, 4, 3, 4, 4, 6, 6, 6, 1, 3, 4, 4, 5, 4, 3, 4, 5],
    &[3, 4, 4, 4, 4, 4, 4, 3, 4, 3, 4, 4, 5, 4, 4, 3, 1, 6, 6, 6, 5, 3, 4, 4],
    &[4, 3, 4, 4, 4, 3, 4, 4, 4, 4, 4, 3, 4, 5, 3, 4, 6, 1, 6, 6, 3, 5, 4, 4],
    &[4, 4, 3, 4, 4, 4, 3, 4, 4, 4, 3, 4, 4, 3, 5, 4, 6, 6, 1, 6, 4, 4, 5, 3],
    &[4, 4, 4, 3, 3, 4, 4, 4, 3, 4, 4, 4, 3, 4, 4, 5, 6, 6, 6, 1, 4, 4, 3, 5],
    &[4, 3, 4, 4, 4, 3, 4, 4, 4, 4, 4, 3, 5, 4, 3, 4, 5, 3, 4, 4, 1, 6, 6, 6],
    &[3, 4, 4, 4, 4, 4, 4, 3, 4, 3, 4, 4, 4, 5, 4, 3, 3, 5, 4, 4, 6, 1, 6, 6],
    &[4, 4, 4, 3, 3, 4, 4, 4, 3, 4, 4, 4, 3, 4, 5, 4, 4, 4, 5, 3, 6, 6, 1, 6],
    &[4, 4, 3, 4, 4, 4, 3, 4, 4, 4, 3, 4, 4, 3, 4, 5, 4, 4, 3, 5, 6, 6, 6, 1],
];

/// Twin by twin: 1 self, 2 collinear, 3 other
pub const TWIN_TWIN: InteractionTypeTable = &[
    &[1, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3],
    &[3, 1, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2],
    &[3, 3, 1, 3, 3, 2, 3, 3, 2, 3, 3, 3],
    &[3, 3, 3, 1, 2, 3, 3, 3, 3, 2, 3, 3],
    &[3, 3, 3, 2, 1, 3, 3, 3, 3, 2, 3, 3],
    &[3, 3, 2, 3, 3, 1, 3, 3, 2, 3, 3, 3],
    &[3, 2, 3, 3, 3, 3, 1, 3, 3, 3, 3, 2],
    &[2, 3, 3, 3, 3, 3, 3, 1, 3, 3, 2, 3],
    &[3, 3, 2, 3, 3, 2, 3, 3, 1, 3, 3, 3],
    &[3, 3, 3, 2, 2, 3, 3, 3, 3, 1, 3, 3],
    &[2, 3, 3, 3, 3, 3, 3, 2, 3, 3, 1, 3],
    &[3, 2, 3, 3, 3, 3, 2, 3, 3, 3, 3, 1],
];

/// Slip by twin: 1 coplanar, 2 collinear, 3 other
pub const SLIP_TWIN: InteractionTypeTable = &[
    &[3, 3, 3, 2, 2, 3, 3, 3, 3, 2, 3, 3],
    &[3, 3, 2, 3, 3, 2, 3, 3, 2, 3, 3, 3],
    &[3, 2, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2],
    &[2, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3],
    &[2, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3],
    &[3, 3, 2, 3, 3, 2, 3, 3, 2, 3, 3, 3],
    &[3, 2, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2],
    &[3, 3, 3, 2, 2, 3, 3, 3, 3, 2, 3, 3],
    &[2, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3],
    &[3, 3, 3, 2, 2, 3, 3, 3, 3, 2, 3, 3],
    &[3, 2, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2],
    &[3, 3, 2, 3, 3, 2, 3, 3, 2, 3, 3, 3],
    &[1, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3],
    &[3, 1, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2],
    &[3, 3, 1, 3, 3, 2, 3, 3, 2, 3, 3, 3],
    &[3, 3, 3, 1, 2, 3, 3, 3, 3, 2, 3, 3],
    &[3, 3, 3, 2, 1, 3, 3, 3, 3, 2, 3, 3],
    &[3, 3, 2, 3, 3, 1, 3, 3, 2, 3, 3, 3],
    &[3, 2, 3, 3, 3, 3, 1, 3, 3, 3, 3, 2],
    &[2, 3, 3, 3, 3, 3, 3, 1, 3, 3, 2, 3],
    &[3, 3, 2, 3, 3, 2, 3, 3, 1, 3, 3, 3],
    &[3, 3, 3, 2, 2, 3, 3, 3, 3, 1, 3, 3],
    &[2, 3, 3, 3, 3, 3, 3, 2, 3, 3, 1, 3],
    &[3, 2, 3, 3, 3, 3, 2, 3, 3, 3, 3, 1],
];

/// Twin by slip: 1 coplanar, 2 collinear, 3 other
pub const TWIN_SLIP: InteractionTypeTable = &[
    &[3, 3, 3, 2, 2, 3, 3, 3, 2, 3, 3, 3, 1, 3, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3],
    &[3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 1, 3, 3, 3, 3, 2, 3, 3, 3, 3, 2],
    &[3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 1, 3, 3, 2, 3, 3, 2, 3, 3, 3],
    &[2, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 3, 3, 3, 1, 2, 3, 3, 3, 3, 2, 3, 3],
    &[2, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 3, 3, 3, 2, 1, 3, 3, 3, 3, 2, 3, 3],
    &[3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 1, 3, 3, 2, 3, 3, 3],
    &[3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 2, 3, 3, 3, 3, 1, 3, 3, 3, 3, 2],
    &[3, 3, 3, 2, 2, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 1, 3, 3, 2, 3],
    &[3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 3, 2, 3, 3, 2, 3, 3, 2, 3, 3, 1, 3, 3, 3],
    &[2, 3, 3, 3, 3, 3, 3, 2, 3, 2, 3, 3, 3, 3, 3, 2, 2, 3, 3, 3, 3, 1, 3, 3],
    &[3, 3, 3, 2, 2, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 3, 3, 3, 2, 3, 3, 1, 3],
    &[3, 3, 2, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 2, 3, 3, 3, 3, 2, 3, 3, 3, 3, 1],
];
