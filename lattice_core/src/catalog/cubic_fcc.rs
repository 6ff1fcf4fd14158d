//! Face-centered cubic (cF) system tables.
//!
//! Systems are `(direction, normal)` pairs in 3-index Miller notation.
//! Interaction tables are indexed `[reacting][acting]` over the full
//! (potential) system list of each kind.

use super::InteractionTypeTable;

// ============================================================================
// Slip
// ============================================================================

pub const SLIP_FAMILIES: &[(&str, usize)] = &[("<110>{111}", 12), ("<110>{110}", 6)];

pub const SLIP_SYSTEMS: &[([i8; 3], [i8; 3])] = &[
    // <110>{111}
    ([0, 1, -1], [1, 1, 1]),
    ([-1, 0, 1], [1, 1, 1]),
    ([1, -1, 0], [1, 1, 1]),
    ([0, -1, -1], [-1, -1, 1]),
    ([1, 0, 1], [-1, -1, 1]),
    ([-1, 1, 0], [-1, -1, 1]),
    ([0, -1, 1], [1, -1, -1]),
    ([-1, 0, -1], [1, -1, -1]),
    ([1, 1, 0], [1, -1, -1]),
    ([0, 1, 1], [-1, 1, -1]),
    ([1, 0, -1], [-1, 1, -1]),
    ([-1, -1, 0], [-1, 1, -1]),
    // <110>{110}
    ([1, 1, 0], [1, -1, 0]),
    ([1, -1, 0], [1, 1, 0]),
    ([1, 0, 1], [1, 0, -1]),
    ([1, 0, -1], [1, 0, 1]),
    ([0, 1, 1], [0, 1, -1]),
    ([0, 1, -1], [0, 1, 1]),
];

// ============================================================================
// Twin / Transformation
// ============================================================================

pub const TWIN_FAMILIES: &[(&str, usize)] = &[("<112>{111}", 12)];

pub const TWIN_SYSTEMS: &[([i8; 3], [i8; 3])] = &[
    ([-2, 1, 1], [1, 1, 1]),
    ([1, -2, 1], [1, 1, 1]),
    ([1, 1, -2], [1, 1, 1]),
    ([2, -1, 1], [-1, -1, 1]),
    ([-1, 2, 1], [-1, -1, 1]),
    ([-1, -1, -2], [-1, -1, 1]),
    ([-2, -1, -1], [1, -1, -1]),
    ([1, 2, -1], [1, -1, -1]),
    ([1, -1, 2], [1, -1, -1]),
    ([2, 1, -1], [-1, 1, -1]),
    ([-1, -2, -1], [-1, 1, -1]),
    ([-1, 1, 2], [-1, 1, -1]),
];

/// Shear direction and habit plane of the cF parent are those of the twins
pub const TRANSFORMATION_FAMILIES: &[(&str, usize)] = TWIN_FAMILIES;
pub const TRANSFORMATION_SYSTEMS: &[([i8; 3], [i8; 3])] = TWIN_SYSTEMS;

// ============================================================================
// Cleavage
// ============================================================================

pub const CLEAVAGE_FAMILIES: &[(&str, usize)] = &[("<001>{001}", 3), ("<1-10>{111}", 4)];

pub const CLEAVAGE_SYSTEMS: &[([i8; 3], [i8; 3])] = &[
    // <001>{001}
    ([0, 1, 0], [1, 0, 0]),
    ([0, 0, 1], [0, 1, 0]),
    ([1, 0, 0], [0, 0, 1]),
    // <1-10>{111}
    ([1, -1, 0], [1, 1, 1]),
    ([-1, 1, 0], [-1, -1, 1]),
    ([0, 1, -1], [1, -1, -1]),
    ([1, 1, 0], [-1, 1, -1]),
];

// ============================================================================
// cF -> cI (Bain/Pitsch)
// ============================================================================

/// Pitsch rotation angle in degrees
pub const PITSCH_ANGLE_DEG: f64 = 10.26;

/// Pitsch rotation axis per transformation system
pub const PITSCH_AXES: [[f64; 3]; 12] = [
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
];

/// Bain rotation angle in degrees
pub const BAIN_ANGLE_DEG: f64 = 45.0;

/// Bain rotation axis per transformation system
pub const BAIN_AXES: [[f64; 3]; 12] = [
    [1.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, 1.0],
];

/// Bain variant `(x, y, z)`: x is the compressed cube axis
pub const BAIN_VARIANTS: [[[f64; 3]; 3]; 12] = [
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    [[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]],
    [[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]],
    [[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]],
    [[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
];

// ============================================================================
// Interaction types
// ============================================================================

/// Slip by slip.
///
///  1. self
///  2. coplanar
///  3. collinear
///  4. Hirth lock
///  5. glissile junction, reacting Burgers vector in acting plane
///  6. glissile junction, acting Burgers vector in reacting plane
///  7. Lomer lock
///  8. crossing of two {110} systems
///  9. Lomer-like between two {110} systems
/// 10. Lomer-like between {110} and {111}
/// 11. glissile-like between {110} and {111}
/// 12. crossing between {110} and {111}
/// 13. collinear between {110} and {111}
pub const SLIP_SLIP: InteractionTypeTable = &[
    &[ 1,  2,  2,  4,  7,  6,  3,  5,  5,  4,  6,  7, 10, 11, 10, 11, 12, 13],
    &[ 2,  1,  2,  7,  4,  6,  6,  4,  7,  5,  3,  5, 10, 11, 12, 13, 10, 11],
    &[ 2,  2,  1,  5,  5,  3,  6,  7,  4,  7,  6,  4, 12, 13, 10, 11, 10, 11],
    &[ 4,  7,  6,  1,  2,  2,  4,  6,  7,  3,  5,  5, 10, 11, 11, 10, 13, 12],
    &[ 7,  4,  6,  2,  1,  2,  5,  3,  5,  6,  4,  7, 10, 11, 13, 12, 11, 10],
    &[ 5,  5,  3,  2,  2,  1,  7,  6,  4,  6,  7,  4, 12, 13, 11, 10, 11, 10],
    &[ 3,  5,  5,  4,  6,  7,  1,  2,  2,  4,  7,  6, 11, 10, 11, 10, 12, 13],
    &[ 6,  4,  7,  5,  3,  5,  2,  1,  2,  7,  4,  6, 11, 10, 13, 12, 10, 11],
    &[ 6,  7,  4,  7,  6,  4,  2,  2,  1,  5,  5,  3, 13, 12, 11, 10, 10, 11],
    &[ 4,  6,  7,  3,  5,  5,  4,  7,  6,  1,  2,  2, 11, 10, 10, 11, 13, 12],
    &[ 5,  3,  5,  6,  4,  7,  7,  4,  6,  2,  1,  2, 11, 10, 12, 13, 11, 10],
    &[ 7,  6,  4,  6,  7,  4,  5,  5,  3,  2,  2,  1, 13, 12, 10, 11, 11, 10],
    &[10, 10, 12, 10, 10, 12, 11, 11, 13, 11, 11, 13,  1,  8,  9,  9,  9,  9],
    &[11, 11, 13, 11, 11, 13, 10, 10, 12, 10, 10, 12,  8,  1,  9,  9,  9,  9],
    &[10, 12, 10, 11, 13, 11, 11, 13, 11, 10, 12, 10,  9,  9,  1,  8,  9,  9],
    &[11, 13, 11, 10, 12, 10, 10, 12, 10, 11, 13, 11,  9,  9,  8,  1,  9,  9],
    &[12, 10, 10, 13, 11, 11, 12, 10, 10, 13, 11, 11,  9,  9,  9,  9,  1,  8],
    &[13, 11, 11, 12, 10, 10, 13, 11, 11, 12, 10, 10,  9,  9,  9,  9,  8,  1],
];

/// Twin by twin: 1 coplanar, 2 non-coplanar
pub const TWIN_TWIN: InteractionTypeTable = &[
    &[1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    &[1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    &[1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    &[2, 2, 2, 1, 1, 1, 2, 2, 2, 2, 2, 2],
    &[2, 2, 2, 1, 1, 1, 2, 2, 2, 2, 2, 2],
    &[2, 2, 2, 1, 1, 1, 2, 2, 2, 2, 2, 2],
    &[2, 2, 2, 2, 2, 2, 1, 1, 1, 2, 2, 2],
    &[2, 2, 2, 2, 2, 2, 1, 1, 1, 2, 2, 2],
    &[2, 2, 2, 2, 2, 2, 1, 1, 1, 2, 2, 2],
    &[2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1],
    &[2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1],
    &[2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1],
];

/// Transformation by transformation: 1 coplanar, 2 non-coplanar
pub const TRANS_TRANS: InteractionTypeTable = &[
    &[1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    &[1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    &[1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    &[2, 2, 2, 1, 1, 1, 2, 2, 2, 2, 2, 2],
    &[2, 2, 2, 1, 1, 1, 2, 2, 2, 2, 2, 2],
    &[2, 2, 2, 1, 1, 1, 2, 2, 2, 2, 2, 2],
    &[2, 2, 2, 2, 2, 2, 1, 1, 1, 2, 2, 2],
    &[2, 2, 2, 2, 2, 2, 1, 1, 1, 2, 2, 2],
    &[2, 2, 2, 2, 2, 2, 1, 1, 1, 2, 2, 2],
    &[2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1],
    &[2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1],
    &[2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1],
];

/// Slip by twin: 1 coplanar, 2 slip direction in twin plane,
/// 3 other octahedral, 4 non-octahedral slip
pub const SLIP_TWIN: InteractionTypeTable = &[
    &[1, 1, 1, 3, 3, 3, 2, 2, 2, 3, 3, 3],
    &[1, 1, 1, 3, 3, 3, 3, 3, 3, 2, 2, 2],
    &[1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 3, 3],
    &[3, 3, 3, 1, 1, 1, 3, 3, 3, 2, 2, 2],
    &[3, 3, 3, 1, 1, 1, 2, 2, 2, 3, 3, 3],
    &[2, 2, 2, 1, 1, 1, 3, 3, 3, 3, 3, 3],
    &[2, 2, 2, 3, 3, 3, 1, 1, 1, 3, 3, 3],
    &[3, 3, 3, 2, 2, 2, 1, 1, 1, 3, 3, 3],
    &[3, 3, 3, 3, 3, 3, 1, 1, 1, 2, 2, 2],
    &[3, 3, 3, 2, 2, 2, 3, 3, 3, 1, 1, 1],
    &[2, 2, 2, 3, 3, 3, 3, 3, 3, 1, 1, 1],
    &[3, 3, 3, 3, 3, 3, 2, 2, 2, 1, 1, 1],
    &[4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4],
    &[4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4],
    &[4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4],
    &[4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4],
    &[4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4],
    &[4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4],
];

/// Twin by slip: 1 coplanar, 2 non-coplanar octahedral, 3 non-octahedral slip
pub const TWIN_SLIP: InteractionTypeTable = &[
    &[1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3],
    &[1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3],
    &[1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3],
    &[2, 2, 2, 1, 1, 1, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3],
    &[2, 2, 2, 1, 1, 1, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3],
    &[2, 2, 2, 1, 1, 1, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3],
    &[2, 2, 2, 2, 2, 2, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 3, 3],
    &[2, 2, 2, 2, 2, 2, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 3, 3],
    &[2, 2, 2, 2, 2, 2, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 3, 3],
    &[2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 3, 3, 3, 3, 3, 3],
    &[2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 3, 3, 3, 3, 3, 3],
    &[2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 3, 3, 3, 3, 3, 3],
];

/// Slip by transformation, same classification as slip by twin
pub const SLIP_TRANS: InteractionTypeTable = SLIP_TWIN;
