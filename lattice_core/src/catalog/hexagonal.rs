//! Hexagonal close-packed (hP) system tables.
//!
//! Systems are `(direction, normal)` pairs in 4-index Miller-Bravais
//! notation, `[u v t w](h k i l)` with `t = -(u + v)` and `i = -(h + k)`.
//!
//! Interaction types are assigned per family pair: inside one family, self
//! and non-self interactions get distinct ids; every pair of different
//! families shares one id.

use super::InteractionTypeTable;

// ============================================================================
// Slip
// ============================================================================

pub const SLIP_FAMILIES: &[(&str, usize)] = &[
    ("basal <a>", 3),
    ("prismatic <a>", 3),
    ("2nd order prismatic compound <a>", 3),
    ("pyramidal <a>", 6),
    ("1st order pyramidal <c+a>", 12),
    ("2nd order pyramidal <c+a>", 6),
];

pub const SLIP_SYSTEMS: &[([i8; 4], [i8; 4])] = &[
    // basal
    ([2, -1, -1, 0], [0, 0, 0, 1]),
    ([-1, 2, -1, 0], [0, 0, 0, 1]),
    ([-1, -1, 2, 0], [0, 0, 0, 1]),
    // prismatic
    ([2, -1, -1, 0], [0, 1, -1, 0]),
    ([-1, 2, -1, 0], [-1, 0, 1, 0]),
    ([-1, -1, 2, 0], [1, -1, 0, 0]),
    // 2nd order prismatic
    ([-1, 1, 0, 0], [1, 1, -2, 0]),
    ([0, -1, 1, 0], [-2, 1, 1, 0]),
    ([1, 0, -1, 0], [1, -2, 1, 0]),
    // pyramidal <a>
    ([-1, 2, -1, 0], [1, 0, -1, 1]),
    ([-2, 1, 1, 0], [0, 1, -1, 1]),
    ([-1, -1, 2, 0], [-1, 1, 0, 1]),
    ([1, -2, 1, 0], [-1, 0, 1, 1]),
    ([2, -1, -1, 0], [0, -1, 1, 1]),
    ([1, 1, -2, 0], [1, -1, 0, 1]),
    // 1st order pyramidal <c+a>
    ([-2, 1, 1, 3], [1, 0, -1, 1]),
    ([-1, -1, 2, 3], [1, 0, -1, 1]),
    ([-1, -1, 2, 3], [0, 1, -1, 1]),
    ([1, -2, 1, 3], [0, 1, -1, 1]),
    ([1, -2, 1, 3], [-1, 1, 0, 1]),
    ([2, -1, -1, 3], [-1, 1, 0, 1]),
    ([2, -1, -1, 3], [-1, 0, 1, 1]),
    ([1, 1, -2, 3], [-1, 0, 1, 1]),
    ([1, 1, -2, 3], [0, -1, 1, 1]),
    ([-1, 2, -1, 3], [0, -1, 1, 1]),
    ([-1, 2, -1, 3], [1, -1, 0, 1]),
    ([-2, 1, 1, 3], [1, -1, 0, 1]),
    // 2nd order pyramidal <c+a>
    ([-1, -1, 2, 3], [1, 1, -2, 2]),
    ([1, -2, 1, 3], [-1, 2, -1, 2]),
    ([2, -1, -1, 3], [-2, 1, 1, 2]),
    ([1, 1, -2, 3], [-1, -1, 2, 2]),
    ([-1, 2, -1, 3], [1, -2, 1, 2]),
    ([-2, 1, 1, 3], [2, -1, -1, 2]),
];

// ============================================================================
// Twin
// ============================================================================

pub const TWIN_FAMILIES: &[(&str, usize)] = &[
    ("<-10.1>{10.2}", 6),
    ("<11.6>{-1-1.1}", 6),
    ("<10.-2>{10.1}", 6),
    ("<11.-3>{11.2}", 6),
];

pub const TWIN_SYSTEMS: &[([i8; 4], [i8; 4])] = &[
    // <-10.1>{10.2}
    ([-1, 0, 1, 1], [1, 0, -1, 2]),
    ([0, -1, 1, 1], [0, 1, -1, 2]),
    ([1, -1, 0, 1], [-1, 1, 0, 2]),
    ([1, 0, -1, 1], [-1, 0, 1, 2]),
    ([0, 1, -1, 1], [0, -1, 1, 2]),
    ([-1, 1, 0, 1], [1, -1, 0, 2]),
    // <11.6>{-1-1.1}
    ([-1, -1, 2, 6], [1, 1, -2, 1]),
    ([1, -2, 1, 6], [-1, 2, -1, 1]),
    ([2, -1, -1, 6], [-2, 1, 1, 1]),
    ([1, 1, -2, 6], [-1, -1, 2, 1]),
    ([-1, 2, -1, 6], [1, -2, 1, 1]),
    ([-2, 1, 1, 6], [2, -1, -1, 1]),
    // <10.-2>{10.1}
    ([1, 0, -1, -2], [1, 0, -1, 1]),
    ([0, 1, -1, -2], [0, 1, -1, 1]),
    ([-1, 1, 0, -2], [-1, 1, 0, 1]),
    ([-1, 0, 1, -2], [-1, 0, 1, 1]),
    ([0, -1, 1, -2], [0, -1, 1, 1]),
    ([1, -1, 0, -2], [1, -1, 0, 1]),
    // <11.-3>{11.2}
    ([1, 1, -2, -3], [1, 1, -2, 2]),
    ([-1, 2, -1, -3], [-1, 2, -1, 2]),
    ([-2, 1, 1, -3], [-2, 1, 1, 2]),
    ([-1, -1, 2, -3], [-1, -1, 2, 2]),
    ([1, -2, 1, -3], [1, -2, 1, 2]),
    ([2, -1, -1, -3], [2, -1, -1, 2]),
];

/// Characteristic shear formula per twin system (see `twinning`)
pub const TWIN_SHEAR_TYPES: [u8; 24] = [
    1, 1, 1, 1, 1, 1,
    2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 3,
    4, 4, 4, 4, 4, 4,
];

// ============================================================================
// Interaction types
// ============================================================================

/// Slip by slip, 27 types. For families `b, p, p2, pa, pca1, pca2`:
/// `1/2` basal self/other, `3..7` basal with the other families,
/// `8/9` prismatic self/other, and so on down the family list.
pub const SLIP_SLIP: InteractionTypeTable = &[
    &[ 1,  2,  2,  3,  3,  3,  4,  4,  4,  5,  5,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  7,  7,  7,  7,  7,  7],
    &[ 2,  1,  2,  3,  3,  3,  4,  4,  4,  5,  5,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  7,  7,  7,  7,  7,  7],
    &[ 2,  2,  1,  3,  3,  3,  4,  4,  4,  5,  5,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  7,  7,  7,  7,  7,  7],
    &[ 3,  3,  3,  8,  9,  9, 10, 10, 10, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 13, 13, 13, 13, 13, 13],
    &[ 3,  3,  3,  9,  8,  9, 10, 10, 10, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 13, 13, 13, 13, 13, 13],
    &[ 3,  3,  3,  9,  9,  8, 10, 10, 10, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 13, 13, 13, 13, 13, 13],
    &[ 4,  4,  4, 10, 10, 10, 14, 15, 15, 16, 16, 16, 16, 16, 16, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18],
    &[ 4,  4,  4, 10, 10, 10, 15, 14, 15, 16, 16, 16, 16, 16, 16, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18],
    &[ 4,  4,  4, 10, 10, 10, 15, 15, 14, 16, 16, 16, 16, 16, 16, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18],
    &[ 5,  5,  5, 11, 11, 11, 16, 16, 16, 19, 20, 20, 20, 20, 20, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 22, 22, 22, 22, 22, 22],
    &[ 5,  5,  5, 11, 11, 11, 16, 16, 16, 20, 19, 20, 20, 20, 20, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 22, 22, 22, 22, 22, 22],
    &[ 5,  5,  5, 11, 11, 11, 16, 16, 16, 20, 20, 19, 20, 20, 20, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 22, 22, 22, 22, 22, 22],
    &[ 5,  5,  5, 11, 11, 11, 16, 16, 16, 20, 20, 20, 19, 20, 20, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 22, 22, 22, 22, 22, 22],
    &[ 5,  5,  5, 11, 11, 11, 16, 16, 16, 20, 20, 20, 20, 19, 20, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 22, 22, 22, 22, 22, 22],
    &[ 5,  5,  5, 11, 11, 11, 16, 16, 16, 20, 20, 20, 20, 20, 19, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 22, 22, 22, 22, 22, 22],
    &[ 6,  6,  6, 12, 12, 12, 17, 17, 17, 21, 21, 21, 21, 21, 21, 23, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 25, 25, 25, 25, 25, 25],
    &[ 6,  6,  6, 12, 12, 12, 17, 17, 17, 21, 21, 21, 21, 21, 21, 24, 23, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 25, 25, 25, 25, 25, 25],
    &[ 6,  6,  6, 12, 12, 12, 17, 17, 17, 21, 21, 21, 21, 21, 21, 24, 24, 23, 24, 24, 24, 24, 24, 24, 24, 24, 24, 25, 25, 25, 25, 25, 25],
    &[ 6,  6,  6, 12, 12, 12, 17, 17, 17, 21, 21, 21, 21, 21, 21, 24, 24, 24, 23, 24, 24, 24, 24, 24, 24, 24, 24, 25, 25, 25, 25, 25, 25],
    &[ 6,  6,  6, 12, 12, 12, 17, 17, 17, 21, 21, 21, 21, 21, 21, 24, 24, 24, 24, 23, 24, 24, 24, 24, 24, 24, 24, 25, 25, 25, 25, 25, 25],
    &[ 6,  6,  6, 12, 12, 12, 17, 17, 17, 21, 21, 21, 21, 21, 21, 24, 24, 24, 24, 24, 23, 24, 24, 24, 24, 24, 24, 25, 25, 25, 25, 25, 25],
    &[ 6,  6,  6, 12, 12, 12, 17, 17, 17, 21, 21, 21, 21, 21, 21, 24, 24, 24, 24, 24, 24, 23, 24, 24, 24, 24, 24, 25, 25, 25, 25, 25, 25],
    &[ 6,  6,  6, 12, 12, 12, 17, 17, 17, 21, 21, 21, 21, 21, 21, 24, 24, 24, 24, 24, 24, 24, 23, 24, 24, 24, 24, 25, 25, 25, 25, 25, 25],
    &[ 6,  6,  6, 12, 12, 12, 17, 17, 17, 21, 21, 21, 21, 21, 21, 24, 24, 24, 24, 24, 24, 24, 24, 23, 24, 24, 24, 25, 25, 25, 25, 25, 25],
    &[ 6,  6,  6, 12, 12, 12, 17, 17, 17, 21, 21, 21, 21, 21, 21, 24, 24, 24, 24, 24, 24, 24, 24, 24, 23, 24, 24, 25, 25, 25, 25, 25, 25],
    &[ 6,  6,  6, 12, 12, 12, 17, 17, 17, 21, 21, 21, 21, 21, 21, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 23, 24, 25, 25, 25, 25, 25, 25],
    &[ 6,  6,  6, 12, 12, 12, 17, 17, 17, 21, 21, 21, 21, 21, 21, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 23, 25, 25, 25, 25, 25, 25],
    &[ 7,  7,  7, 13, 13, 13, 18, 18, 18, 22, 22, 22, 22, 22, 22, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 26, 27, 27, 27, 27, 27],
    &[ 7,  7,  7, 13, 13, 13, 18, 18, 18, 22, 22, 22, 22, 22, 22, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 27, 26, 27, 27, 27, 27],
    &[ 7,  7,  7, 13, 13, 13, 18, 18, 18, 22, 22, 22, 22, 22, 22, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 27, 27, 26, 27, 27, 27],
    &[ 7,  7,  7, 13, 13, 13, 18, 18, 18, 22, 22, 22, 22, 22, 22, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 27, 27, 27, 26, 27, 27],
    &[ 7,  7,  7, 13, 13, 13, 18, 18, 18, 22, 22, 22, 22, 22, 22, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 27, 27, 27, 27, 26, 27],
    &[ 7,  7,  7, 13, 13, 13, 18, 18, 18, 22, 22, 22, 22, 22, 22, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 25, 27, 27, 27, 27, 27, 26],
];

/// Twin by twin, 14 types
pub const TWIN_TWIN: InteractionTypeTable = &[
    &[ 1,  2,  2,  2,  2,  2,  3,  3,  3,  3,  3,  3,  4,  4,  4,  4,  4,  4,  5,  5,  5,  5,  5,  5],
    &[ 2,  1,  2,  2,  2,  2,  3,  3,  3,  3,  3,  3,  4,  4,  4,  4,  4,  4,  5,  5,  5,  5,  5,  5],
    &[ 2,  2,  1,  2,  2,  2,  3,  3,  3,  3,  3,  3,  4,  4,  4,  4,  4,  4,  5,  5,  5,  5,  5,  5],
    &[ 2,  2,  2,  1,  2,  2,  3,  3,  3,  3,  3,  3,  4,  4,  4,  4,  4,  4,  5,  5,  5,  5,  5,  5],
    &[ 2,  2,  2,  2,  1,  2,  3,  3,  3,  3,  3,  3,  4,  4,  4,  4,  4,  4,  5,  5,  5,  5,  5,  5],
    &[ 2,  2,  2,  2,  2,  1,  3,  3,  3,  3,  3,  3,  4,  4,  4,  4,  4,  4,  5,  5,  5,  5,  5,  5],
    &[ 3,  3,  3,  3,  3,  3,  6,  7,  7,  7,  7,  7,  8,  8,  8,  8,  8,  8,  9,  9,  9,  9,  9,  9],
    &[ 3,  3,  3,  3,  3,  3,  7,  6,  7,  7,  7,  7,  8,  8,  8,  8,  8,  8,  9,  9,  9,  9,  9,  9],
    &[ 3,  3,  3,  3,  3,  3,  7,  7,  6,  7,  7,  7,  8,  8,  8,  8,  8,  8,  9,  9,  9,  9,  9,  9],
    &[ 3,  3,  3,  3,  3,  3,  7,  7,  7,  6,  7,  7,  8,  8,  8,  8,  8,  8,  9,  9,  9,  9,  9,  9],
    &[ 3,  3,  3,  3,  3,  3,  7,  7,  7,  7,  6,  7,  8,  8,  8,  8,  8,  8,  9,  9,  9,  9,  9,  9],
    &[ 3,  3,  3,  3,  3,  3,  7,  7,  7,  7,  7,  6,  8,  8,  8,  8,  8,  8,  9,  9,  9,  9,  9,  9],
    &[ 4,  4,  4,  4,  4,  4,  8,  8,  8,  8,  8,  8, 10, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12],
    &[ 4,  4,  4,  4,  4,  4,  8,  8,  8,  8,  8,  8, 11, 10, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12],
    &[ 4,  4,  4,  4,  4,  4,  8,  8,  8,  8,  8,  8, 11, 11, 10, 11, 11, 11, 12, 12, 12, 12, 12, 12],
    &[ 4,  4,  4,  4,  4,  4,  8,  8,  8,  8,  8,  8, 11, 11, 11, 10, 11, 11, 12, 12, 12, 12, 12, 12],
    &[ 4,  4,  4,  4,  4,  4,  8,  8,  8,  8,  8,  8, 11, 11, 11, 11, 10, 11, 12, 12, 12, 12, 12, 12],
    &[ 4,  4,  4,  4,  4,  4,  8,  8,  8,  8,  8,  8, 11, 11, 11, 11, 11, 10, 12, 12, 12, 12, 12, 12],
    &[ 5,  5,  5,  5,  5,  5,  9,  9,  9,  9,  9,  9, 12, 12, 12, 12, 12, 12, 13, 14, 14, 14, 14, 14],
    &[ 5,  5,  5,  5,  5,  5,  9,  9,  9,  9,  9,  9, 12, 12, 12, 12, 12, 12, 14, 13, 14, 14, 14, 14],
    &[ 5,  5,  5,  5,  5,  5,  9,  9,  9,  9,  9,  9, 12, 12, 12, 12, 12, 12, 14, 14, 13, 14, 14, 14],
    &[ 5,  5,  5,  5,  5,  5,  9,  9,  9,  9,  9,  9, 12, 12, 12, 12, 12, 12, 14, 14, 14, 13, 14, 14],
    &[ 5,  5,  5,  5,  5,  5,  9,  9,  9,  9,  9,  9, 12, 12, 12, 12, 12, 12, 14, 14, 14, 14, 13, 14],
    &[ 5,  5,  5,  5,  5,  5,  9,  9,  9,  9,  9,  9, 12, 12, 12, 12, 12, 12, 14, 14, 14, 14, 14, 13],
];

/// Slip by twin, 24 types: one per (slip family, twin family)
pub const SLIP_TWIN: InteractionTypeTable = &[
    &[ 1,  1,  1,  1,  1,  1,  2,  2,  2,  2,  2,  2,  3,  3,  3,  3,  3,  3,  4,  4,  4,  4,  4,  4],
    &[ 1,  1,  1,  1,  1,  1,  2,  2,  2,  2,  2,  2,  3,  3,  3,  3,  3,  3,  4,  4,  4,  4,  4,  4],
    &[ 1,  1,  1,  1,  1,  1,  2,  2,  2,  2,  2,  2,  3,  3,  3,  3,  3,  3,  4,  4,  4,  4,  4,  4],
    &[ 5,  5,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6,  7,  7,  7,  7,  7,  7,  8,  8,  8,  8,  8,  8],
    &[ 5,  5,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6,  7,  7,  7,  7,  7,  7,  8,  8,  8,  8,  8,  8],
    &[ 5,  5,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6,  7,  7,  7,  7,  7,  7,  8,  8,  8,  8,  8,  8],
    &[ 9,  9,  9,  9,  9,  9, 10, 10, 10, 10, 10, 10, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12],
    &[ 9,  9,  9,  9,  9,  9, 10, 10, 10, 10, 10, 10, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12],
    &[ 9,  9,  9,  9,  9,  9, 10, 10, 10, 10, 10, 10, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12],
    &[13, 13, 13, 13, 13, 13, 14, 14, 14, 14, 14, 14, 15, 15, 15, 15, 15, 15, 16, 16, 16, 16, 16, 16],
    &[13, 13, 13, 13, 13, 13, 14, 14, 14, 14, 14, 14, 15, 15, 15, 15, 15, 15, 16, 16, 16, 16, 16, 16],
    &[13, 13, 13, 13, 13, 13, 14, 14, 14, 14, 14, 14, 15, 15, 15, 15, 15, 15, 16, 16, 16, 16, 16, 16],
    &[13, 13, 13, 13, 13, 13, 14, 14, 14, 14, 14, 14, 15, 15, 15, 15, 15, 15, 16, 16, 16, 16, 16, 16],
    &[13, 13, 13, 13, 13, 13, 14, 14, 14, 14, 14, 14, 15, 15, 15, 15, 15, 15, 16, 16, 16, 16, 16, 16],
    &[13, 13, 13, 13, 13, 13, 14, 14, 14, 14, 14, 14, 15, 15, 15, 15, 15, 15, 16, 16, 16, 16, 16, 16],
    &[17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18, 19, 19, 19, 19, 19, 19, 20, 20, 20, 20, 20, 20],
    &[17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18, 19, 19, 19, 19, 19, 19, 20, 20, 20, 20, 20, 20],
    &[17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18, 19, 19, 19, 19, 19, 19, 20, 20, 20, 20, 20, 20],
    &[17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18, 19, 19, 19, 19, 19, 19, 20, 20, 20, 20, 20, 20],
    &[17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18, 19, 19, 19, 19, 19, 19, 20, 20, 20, 20, 20, 20],
    &[17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18, 19, 19, 19, 19, 19, 19, 20, 20, 20, 20, 20, 20],
    &[17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18, 19, 19, 19, 19, 19, 19, 20, 20, 20, 20, 20, 20],
    &[17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18, 19, 19, 19, 19, 19, 19, 20, 20, 20, 20, 20, 20],
    &[17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18, 19, 19, 19, 19, 19, 19, 20, 20, 20, 20, 20, 20],
    &[17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18, 19, 19, 19, 19, 19, 19, 20, 20, 20, 20, 20, 20],
    &[17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18, 19, 19, 19, 19, 19, 19, 20, 20, 20, 20, 20, 20],
    &[17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18, 19, 19, 19, 19, 19, 19, 20, 20, 20, 20, 20, 20],
    &[21, 21, 21, 21, 21, 21, 22, 22, 22, 22, 22, 22, 23, 23, 23, 23, 23, 23, 24, 24, 24, 24, 24, 24],
    &[21, 21, 21, 21, 21, 21, 22, 22, 22, 22, 22, 22, 23, 23, 23, 23, 23, 23, 24, 24, 24, 24, 24, 24],
    &[21, 21, 21, 21, 21, 21, 22, 22, 22, 22, 22, 22, 23, 23, 23, 23, 23, 23, 24, 24, 24, 24, 24, 24],
    &[21, 21, 21, 21, 21, 21, 22, 22, 22, 22, 22, 22, 23, 23, 23, 23, 23, 23, 24, 24, 24, 24, 24, 24],
    &[21, 21, 21, 21, 21, 21, 22, 22, 22, 22, 22, 22, 23, 23, 23, 23, 23, 23, 24, 24, 24, 24, 24, 24],
    &[21, 21, 21, 21, 21, 21, 22, 22, 22, 22, 22, 22, 23, 23, 23, 23, 23, 23, 24, 24, 24, 24, 24, 24],
];

/// Twin by slip, 24 types: one per (twin family, slip family)
pub const TWIN_SLIP: InteractionTypeTable = &[
    &[ 1,  1,  1,  2,  2,  2,  3,  3,  3,  4,  4,  4,  4,  4,  4,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6],
    &[ 1,  1,  1,  2,  2,  2,  3,  3,  3,  4,  4,  4,  4,  4,  4,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6],
    &[ 1,  1,  1,  2,  2,  2,  3,  3,  3,  4,  4,  4,  4,  4,  4,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6],
    &[ 1,  1,  1,  2,  2,  2,  3,  3,  3,  4,  4,  4,  4,  4,  4,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6],
    &[ 1,  1,  1,  2,  2,  2,  3,  3,  3,  4,  4,  4,  4,  4,  4,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6],
    &[ 1,  1,  1,  2,  2,  2,  3,  3,  3,  4,  4,  4,  4,  4,  4,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6],
    &[ 7,  7,  7,  8,  8,  8,  9,  9,  9, 10, 10, 10, 10, 10, 10, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12],
    &[ 7,  7,  7,  8,  8,  8,  9,  9,  9, 10, 10, 10, 10, 10, 10, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12],
    &[ 7,  7,  7,  8,  8,  8,  9,  9,  9, 10, 10, 10, 10, 10, 10, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12],
    &[ 7,  7,  7,  8,  8,  8,  9,  9,  9, 10, 10, 10, 10, 10, 10, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12],
    &[ 7,  7,  7,  8,  8,  8,  9,  9,  9, 10, 10, 10, 10, 10, 10, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12],
    &[ 7,  7,  7,  8,  8,  8,  9,  9,  9, 10, 10, 10, 10, 10, 10, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12],
    &[13, 13, 13, 14, 14, 14, 15, 15, 15, 16, 16, 16, 16, 16, 16, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18],
    &[13, 13, 13, 14, 14, 14, 15, 15, 15, 16, 16, 16, 16, 16, 16, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18],
    &[13, 13, 13, 14, 14, 14, 15, 15, 15, 16, 16, 16, 16, 16, 16, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18],
    &[13, 13, 13, 14, 14, 14, 15, 15, 15, 16, 16, 16, 16, 16, 16, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18],
    &[13, 13, 13, 14, 14, 14, 15, 15, 15, 16, 16, 16, 16, 16, 16, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18],
    &[13, 13, 13, 14, 14, 14, 15, 15, 15, 16, 16, 16, 16, 16, 16, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18],
    &[19, 19, 19, 20, 20, 20, 21, 21, 21, 22, 22, 22, 22, 22, 22, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 24, 24, 24, 24, 24, 24],
    &[19, 19, 19, 20, 20, 20, 21, 21, 21, 22, 22, 22, 22, 22, 22, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 24, 24, 24, 24, 24, 24],
    &[19, 19, 19, 20, 20, 20, 21, 21, 21, 22, 22, 22, 22, 22, 22, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 24, 24, 24, 24, 24, 24],
    &[19, 19, 19, 20, 20, 20, 21, 21, 21, 22, 22, 22, 22, 22, 22, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 24, 24, 24, 24, 24, 24],
    &[19, 19, 19, 20, 20, 20, 21, 21, 21, 22, 22, 22, 22, 22, 22, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 24, 24, 24, 24, 24, 24],
    &[19, 19, 19, 20, 20, 20, 21, 21, 21, 22, 22, 22, 22, 22, 22, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 24, 24, 24, 24, 24, 24],
];
