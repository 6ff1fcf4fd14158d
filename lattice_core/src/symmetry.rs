//! # Symmetry Projection
//!
//! Project a second-order tensor or a 6×6 stiffness matrix onto the form
//! allowed by the point symmetry of a lattice family. Only the independent
//! components are read from the input; everything else is rebuilt from them.
//!
//! | family | independent stiffness components |
//! |--------|----------------------------------|
//! | cF, cI | C11, C12, C44 |
//! | hP     | C11, C12, C13, C33, C44 (C66 = (C11 - C12)/2) |
//! | tI     | C11, C12, C13, C33, C44, C66 |
//!
//! ## Example
//!
//! ```rust
//! use lattice_core::lattice::LatticeFamily;
//! use lattice_core::symmetry::symmetrize_33;
//! use lattice_core::types::{Matrix3, Vector3};
//!
//! let t = Matrix3::new(2.0, 0.1, 0.0, 0.3, 5.0, 0.0, 0.0, 0.0, 7.0);
//! let s = symmetrize_33(&t, LatticeFamily::Hp);
//! assert_eq!(s, Matrix3::from_diagonal(&Vector3::new(2.0, 2.0, 7.0)));
//! ```

use crate::lattice::LatticeFamily;
use crate::types::{Matrix3, Matrix6, Vector3};

/// Symmetry-adapted form of a second-order tensor
pub fn symmetrize_33(t: &Matrix3, family: LatticeFamily) -> Matrix3 {
    match family {
        LatticeFamily::Cf | LatticeFamily::Ci => Matrix3::identity() * t[(0, 0)],
        LatticeFamily::Hp | LatticeFamily::Ti => {
            Matrix3::from_diagonal(&Vector3::new(t[(0, 0)], t[(0, 0)], t[(2, 2)]))
        }
    }
}

/// Symmetry-adapted form of a 6×6 stiffness matrix
pub fn symmetrize_c66(c: &Matrix6, family: LatticeFamily) -> Matrix6 {
    let mut s = Matrix6::zeros();
    match family {
        LatticeFamily::Cf | LatticeFamily::Ci => {
            for i in 0..3 {
                for j in 0..3 {
                    s[(i, j)] = if i == j { c[(0, 0)] } else { c[(0, 1)] };
                }
                s[(i + 3, i + 3)] = c[(3, 3)];
            }
        }
        LatticeFamily::Hp | LatticeFamily::Ti => {
            s[(0, 0)] = c[(0, 0)];
            s[(1, 1)] = c[(0, 0)];
            s[(2, 2)] = c[(2, 2)];
            s[(0, 1)] = c[(0, 1)];
            s[(1, 0)] = c[(0, 1)];
            s[(0, 2)] = c[(0, 2)];
            s[(2, 0)] = c[(0, 2)];
            s[(1, 2)] = c[(0, 2)];
            s[(2, 1)] = c[(0, 2)];
            s[(3, 3)] = c[(3, 3)];
            s[(4, 4)] = c[(3, 3)];
            s[(5, 5)] = if family == LatticeFamily::Hp {
                0.5 * (c[(0, 0)] - c[(0, 1)])
            } else {
                c[(5, 5)]
            };
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_c66(seed: u64) -> Matrix6 {
        let mut rng = StdRng::seed_from_u64(seed);
        Matrix6::from_fn(|_, _| rng.gen_range(10.0..200.0))
    }

    #[test]
    fn test_cubic_equalities() {
        let s = symmetrize_c66(&random_c66(1), LatticeFamily::Cf);
        assert_eq!(s, s.transpose());
        assert_eq!(s[(0, 0)], s[(1, 1)]);
        assert_eq!(s[(1, 1)], s[(2, 2)]);
        assert_eq!(s[(0, 1)], s[(0, 2)]);
        assert_eq!(s[(0, 2)], s[(1, 2)]);
        assert_eq!(s[(3, 3)], s[(4, 4)]);
        assert_eq!(s[(4, 4)], s[(5, 5)]);
        assert_eq!(s[(0, 3)], 0.0);
    }

    #[test]
    fn test_hexagonal_equalities() {
        let s = symmetrize_c66(&random_c66(2), LatticeFamily::Hp);
        assert_eq!(s, s.transpose());
        assert_eq!(s[(0, 0)], s[(1, 1)]);
        assert_eq!(s[(0, 2)], s[(1, 2)]);
        assert_eq!(s[(3, 3)], s[(4, 4)]);
        assert!((s[(5, 5)] - 0.5 * (s[(0, 0)] - s[(0, 1)])).abs() < 1e-12);
    }

    #[test]
    fn test_tetragonal_keeps_c66() {
        let c = random_c66(3);
        let s = symmetrize_c66(&c, LatticeFamily::Ti);
        assert_eq!(s[(5, 5)], c[(5, 5)]);
        assert_eq!(s, s.transpose());
    }

    #[test]
    fn test_cubic_projection_idempotent_across_families() {
        let c = random_c66(4);
        let once = symmetrize_c66(&c, LatticeFamily::Cf);
        assert_eq!(symmetrize_c66(&once, LatticeFamily::Ci), once);
        let hex = symmetrize_c66(&c, LatticeFamily::Hp);
        assert_eq!(symmetrize_c66(&hex, LatticeFamily::Hp), hex);
    }

    #[test]
    fn test_symmetrize_33() {
        let t = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(symmetrize_33(&t, LatticeFamily::Ci), Matrix3::identity());
        let s = symmetrize_33(&t, LatticeFamily::Ti);
        assert_eq!(s[(1, 1)], 1.0);
        assert_eq!(s[(2, 2)], 9.0);
        assert_eq!(s[(0, 2)], 0.0);
    }
}
