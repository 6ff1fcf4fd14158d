//! Body-centered tetragonal (tI) slip tables.
//!
//! 52 slip systems in 13 families, 3-index Miller notation in the
//! tetragonal cell. Family names follow the `{plane)<direction]` convention
//! for indices that are not permutable across the c axis.

use super::InteractionTypeTable;

pub const SLIP_FAMILIES: &[(&str, usize)] = &[
    ("{100)<001]", 2),
    ("{110)<001]", 2),
    ("{100)<010]", 2),
    ("{110)<1-11]/2", 4),
    ("{110)<1-10]", 2),
    ("{100)<011]", 4),
    ("{001)<010]", 2),
    ("{001)<110]", 2),
    ("{011)<01-1]", 4),
    ("{011)<1-11]/2", 8),
    ("{011)<100]", 4),
    ("{211)<01-1]", 8),
    ("{211)<-111]/2", 8),
];

pub const SLIP_SYSTEMS: &[([i8; 3], [i8; 3])] = &[
    // {100)<001]
    ([0, 0, 1], [1, 0, 0]),
    ([0, 0, 1], [0, 1, 0]),
    // {110)<001]
    ([0, 0, 1], [1, 1, 0]),
    ([0, 0, 1], [-1, 1, 0]),
    // {100)<010]
    ([0, 1, 0], [1, 0, 0]),
    ([1, 0, 0], [0, 1, 0]),
    // {110)<1-11]/2
    ([1, -1, 1], [1, 1, 0]),
    ([1, -1, -1], [1, 1, 0]),
    ([-1, -1, -1], [-1, 1, 0]),
    ([-1, -1, 1], [-1, 1, 0]),
    // {110)<1-10]
    ([1, -1, 0], [1, 1, 0]),
    ([1, 1, 0], [1, -1, 0]),
    // {100)<011]
    ([0, 1, 1], [1, 0, 0]),
    ([0, -1, 1], [1, 0, 0]),
    ([-1, 0, 1], [0, 1, 0]),
    ([1, 0, 1], [0, 1, 0]),
    // {001)<010]
    ([0, 1, 0], [0, 0, 1]),
    ([1, 0, 0], [0, 0, 1]),
    // {001)<110]
    ([1, 1, 0], [0, 0, 1]),
    ([-1, 1, 0], [0, 0, 1]),
    // {011)<01-1]
    ([0, 1, -1], [0, 1, 1]),
    ([0, -1, -1], [0, -1, 1]),
    ([-1, 0, -1], [-1, 0, 1]),
    ([1, 0, -1], [1, 0, 1]),
    // {011)<1-11]/2
    ([1, -1, 1], [0, 1, 1]),
    ([1, 1, -1], [0, 1, 1]),
    ([1, 1, 1], [0, 1, -1]),
    ([-1, 1, 1], [0, 1, -1]),
    ([1, -1, -1], [1, 0, 1]),
    ([-1, -1, 1], [1, 0, 1]),
    ([1, 1, 1], [1, 0, -1]),
    ([1, -1, 1], [1, 0, -1]),
    // {011)<100]
    ([1, 0, 0], [0, 1, 1]),
    ([1, 0, 0], [0, 1, -1]),
    ([0, 1, 0], [1, 0, 1]),
    ([0, 1, 0], [1, 0, -1]),
    // {211)<01-1]
    ([0, 1, -1], [2, 1, 1]),
    ([0, -1, -1], [2, -1, 1]),
    ([1, 0, -1], [1, 2, 1]),
    ([-1, 0, -1], [-1, 2, 1]),
    ([0, 1, -1], [-2, 1, 1]),
    ([0, -1, -1], [-2, -1, 1]),
    ([-1, 0, -1], [-1, -2, 1]),
    ([1, 0, -1], [1, -2, 1]),
    // {211)<-111]/2
    ([-1, 1, 1], [2, 1, 1]),
    ([-1, -1, 1], [2, -1, 1]),
    ([1, -1, 1], [1, 2, 1]),
    ([-1, -1, 1], [-1, 2, 1]),
    ([1, 1, 1], [-2, 1, 1]),
    ([1, -1, 1], [-2, -1, 1]),
    ([-1, 1, 1], [-1, -2, 1]),
    ([1, 1, 1], [1, -2, 1]),
];

/// Slip by slip: 1 self, 2 coplanar, 3 collinear, 4 other within the same
/// family, 5 other between families
pub const SLIP_SLIP: InteractionTypeTable = &[
    &[1, 3, 3, 3, 2, 5, 5, 5, 5, 5, 5, 5, 2, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[3, 1, 3, 3, 5, 2, 5, 5, 5, 5, 5, 5, 5, 5, 2, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[3, 3, 1, 3, 5, 5, 2, 2, 5, 5, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[3, 3, 3, 1, 5, 5, 5, 5, 2, 2, 5, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[2, 5, 5, 5, 1, 4, 5, 5, 5, 5, 5, 5, 2, 2, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 2, 5, 5, 4, 1, 5, 5, 5, 5, 5, 5, 5, 5, 2, 2, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 2, 5, 5, 5, 1, 2, 4, 4, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 3, 5, 5],
    &[5, 5, 2, 5, 5, 5, 2, 1, 4, 4, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 3, 5],
    &[5, 5, 5, 2, 5, 5, 4, 4, 1, 2, 5, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 3],
    &[5, 5, 5, 2, 5, 5, 4, 4, 2, 1, 5, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 3, 5, 5, 5, 5],
    &[5, 5, 2, 5, 5, 5, 2, 2, 5, 5, 1, 4, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 2, 5, 5, 5, 5, 2, 2, 4, 1, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[2, 5, 5, 5, 2, 5, 5, 5, 5, 5, 5, 5, 1, 2, 4, 4, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[2, 5, 5, 5, 2, 5, 5, 5, 5, 5, 5, 5, 2, 1, 4, 4, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 2, 5, 5, 5, 2, 5, 5, 5, 5, 5, 5, 4, 4, 1, 2, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 2, 5, 5, 5, 2, 5, 5, 5, 5, 5, 5, 4, 4, 2, 1, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 1, 2, 2, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 2, 1, 2, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 2, 2, 1, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 2, 2, 2, 1, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 1, 4, 4, 4, 2, 2, 5, 5, 5, 5, 5, 5, 2, 5, 5, 5, 3, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 4, 1, 4, 4, 5, 5, 2, 2, 5, 5, 5, 5, 5, 2, 5, 5, 5, 3, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 4, 4, 1, 4, 5, 5, 5, 5, 5, 5, 2, 2, 5, 5, 5, 2, 5, 5, 5, 3, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 4, 4, 4, 1, 5, 5, 5, 5, 2, 2, 5, 5, 5, 5, 2, 5, 5, 5, 3, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 2, 5, 5, 5, 1, 2, 4, 4, 4, 4, 4, 3, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 3, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 2, 5, 5, 5, 2, 1, 4, 4, 4, 3, 4, 4, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 3, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 2, 5, 5, 4, 4, 1, 2, 4, 4, 3, 4, 5, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 3],
    &[5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 2, 5, 5, 4, 4, 2, 1, 3, 4, 4, 4, 5, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 3, 5],
    &[5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 2, 4, 4, 4, 3, 1, 2, 4, 4, 5, 5, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 3, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 2, 4, 3, 4, 4, 2, 1, 4, 4, 5, 5, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 3, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 2, 5, 4, 4, 3, 4, 4, 4, 1, 2, 5, 5, 5, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 3],
    &[5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 2, 5, 3, 4, 4, 4, 4, 4, 2, 1, 5, 5, 5, 2, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 3, 5, 5],
    &[5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 2, 5, 5, 5, 2, 2, 5, 5, 5, 5, 5, 5, 1, 3, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 2, 5, 5, 5, 5, 2, 2, 5, 5, 5, 5, 3, 1, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 2, 5, 5, 5, 5, 2, 2, 5, 5, 4, 4, 1, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 2, 5, 5, 5, 5, 5, 5, 5, 2, 2, 4, 4, 3, 1, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 1, 4, 4, 4, 3, 4, 4, 4, 2, 5, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4, 1, 4, 4, 4, 3, 4, 4, 5, 2, 5, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 1, 4, 4, 4, 4, 3, 5, 5, 2, 5, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 1, 4, 4, 3, 4, 5, 5, 5, 2, 5, 5, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 4, 4, 4, 1, 4, 4, 4, 5, 5, 5, 5, 2, 5, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4, 3, 4, 4, 4, 1, 4, 4, 5, 5, 5, 5, 5, 2, 5, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 3, 4, 4, 1, 4, 5, 5, 5, 5, 5, 5, 2, 5],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 3, 4, 4, 4, 4, 1, 5, 5, 5, 5, 5, 5, 5, 2],
    &[5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 3, 5, 5, 5, 5, 5, 5, 5, 2, 5, 5, 5, 5, 5, 5, 5, 1, 4, 4, 4, 4, 4, 3, 4],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 2, 5, 5, 5, 5, 5, 5, 4, 1, 4, 3, 4, 4, 4, 4],
    &[5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 2, 5, 5, 5, 5, 5, 4, 4, 1, 4, 4, 3, 4, 4],
    &[5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 2, 5, 5, 5, 5, 4, 3, 4, 1, 4, 4, 4, 4],
    &[5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 2, 5, 5, 5, 4, 4, 4, 4, 1, 4, 4, 3],
    &[5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 2, 5, 5, 4, 4, 3, 4, 4, 1, 4, 4],
    &[5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 2, 5, 3, 4, 4, 4, 4, 4, 1, 4],
    &[5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3, 5, 5, 5, 3, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 2, 4, 4, 4, 4, 3, 4, 4, 1],
];
