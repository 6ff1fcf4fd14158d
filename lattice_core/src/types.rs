//! # Tensor Types
//!
//! Aliases for the `nalgebra` types used throughout the engine, plus the
//! handful of tensor helpers the generators share: outer products, active
//! axis-angle rotations, and the conversion between the 6×6 Voigt stiffness
//! matrix and the full 4th-order tensor.
//!
//! ## Voigt Convention
//!
//! Index order is `11, 22, 33, 23, 13, 12`. Conversions use the stiffness
//! convention (no factors of 2 on the shear entries), so a Voigt matrix
//! survives `c3333_to_c66(c66_to_c3333(c))` unchanged.
//!
//! ## Example
//!
//! ```rust
//! use lattice_core::types::{rotation_matrix, Vector3};
//!
//! let r = rotation_matrix(&Vector3::new(0.0, 0.0, 1.0), std::f64::consts::FRAC_PI_2);
//! let x = r * Vector3::new(1.0, 0.0, 0.0);
//! assert!((x - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
//! ```

use nalgebra::{Rotation3, Unit};

pub use nalgebra::DMatrix;

/// Column 3-vector
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3×3 second-order tensor
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// 6×6 stiffness matrix in Voigt notation
pub type Matrix6 = nalgebra::Matrix6<f64>;

/// Full 4th-order stiffness tensor `C_ijkl`
pub type Tensor3333 = [[[[f64; 3]; 3]; 3]; 3];

/// Voigt index → tensor index pair
pub const VOIGT_PAIRS: [(usize, usize); 6] = [(0, 0), (1, 1), (2, 2), (1, 2), (0, 2), (0, 1)];

/// Tensor index pair → Voigt index
pub fn voigt_index(i: usize, j: usize) -> usize {
    match (i.min(j), i.max(j)) {
        (0, 0) => 0,
        (1, 1) => 1,
        (2, 2) => 2,
        (1, 2) => 3,
        (0, 2) => 4,
        _ => 5,
    }
}

/// Dyadic product `a ⊗ b`
pub fn outer(a: &Vector3, b: &Vector3) -> Matrix3 {
    a * b.transpose()
}

/// Active rotation by `angle` (radians) about `axis`.
///
/// The axis need not be normalised. A zero axis yields the identity.
pub fn rotation_matrix(axis: &Vector3, angle: f64) -> Matrix3 {
    match Unit::try_new(*axis, 1e-12) {
        Some(unit) => Rotation3::from_axis_angle(&unit, angle).into_inner(),
        None => Matrix3::identity(),
    }
}

/// Expand a 6×6 Voigt stiffness matrix into the full 4th-order tensor
pub fn c66_to_c3333(c66: &Matrix6) -> Tensor3333 {
    let mut c = [[[[0.0; 3]; 3]; 3]; 3];
    for (i, ci) in c.iter_mut().enumerate() {
        for (j, cij) in ci.iter_mut().enumerate() {
            for (k, cijk) in cij.iter_mut().enumerate() {
                for (l, v) in cijk.iter_mut().enumerate() {
                    *v = c66[(voigt_index(i, j), voigt_index(k, l))];
                }
            }
        }
    }
    c
}

/// Contract a 4th-order stiffness tensor back to a 6×6 Voigt matrix
pub fn c3333_to_c66(c: &Tensor3333) -> Matrix6 {
    let mut c66 = Matrix6::zeros();
    for (a, &(i, j)) in VOIGT_PAIRS.iter().enumerate() {
        for (b, &(k, l)) in VOIGT_PAIRS.iter().enumerate() {
            c66[(a, b)] = c[i][j][k][l];
        }
    }
    c66
}

/// Transform a Voigt stiffness matrix with `C'_ijkl = M_im M_jn M_ko M_lp C_mnop`
pub fn rotate_c66(m: &Matrix3, c66: &Matrix6) -> Matrix6 {
    let c = c66_to_c3333(c66);
    let mut rotated = [[[[0.0; 3]; 3]; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                for l in 0..3 {
                    let mut sum = 0.0;
                    for (p, cp) in c.iter().enumerate() {
                        for (q, cq) in cp.iter().enumerate() {
                            let mpq = m[(i, p)] * m[(j, q)];
                            if mpq == 0.0 {
                                continue;
                            }
                            for (r, cr) in cq.iter().enumerate() {
                                for (s, value) in cr.iter().enumerate() {
                                    sum += mpq * m[(k, r)] * m[(l, s)] * value;
                                }
                            }
                        }
                    }
                    rotated[i][j][k][l] = sum;
                }
            }
        }
    }
    c3333_to_c66(&rotated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic_c66() -> Matrix6 {
        let mut c = Matrix6::zeros();
        for i in 0..3 {
            for j in 0..3 {
                c[(i, j)] = if i == j { 106.75 } else { 60.41 };
            }
            c[(i + 3, i + 3)] = 28.34;
        }
        c
    }

    #[test]
    fn test_voigt_index_symmetric() {
        for (a, &(i, j)) in VOIGT_PAIRS.iter().enumerate() {
            assert_eq!(voigt_index(i, j), a);
            assert_eq!(voigt_index(j, i), a);
        }
    }

    #[test]
    fn test_c66_conversion_preserves_entries() {
        let mut c = cubic_c66();
        c[(0, 3)] = 1.5;
        c[(3, 0)] = 1.5;
        let back = c3333_to_c66(&c66_to_c3333(&c));
        assert!((back - c).abs().max() < 1e-14);
    }

    #[test]
    fn test_outer_product() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.0, 1.0, 0.0);
        let m = outer(&a, &b);
        assert_eq!(m[(2, 1)], 3.0);
        assert_eq!(m[(0, 0)], 0.0);
    }

    #[test]
    fn test_rotation_zero_axis_is_identity() {
        let r = rotation_matrix(&Vector3::zeros(), 1.0);
        assert_eq!(r, Matrix3::identity());
    }

    #[test]
    fn test_cubic_stiffness_invariant_under_quarter_turn() {
        let r = rotation_matrix(&Vector3::new(0.0, 0.0, 1.0), std::f64::consts::FRAC_PI_2);
        let c = cubic_c66();
        let rotated = rotate_c66(&r, &c);
        assert!((rotated - c).abs().max() < 1e-10);
    }

    #[test]
    fn test_rotation_about_z_by_45_degrees_mixes_shear() {
        let r = rotation_matrix(&Vector3::new(0.0, 0.0, 1.0), std::f64::consts::FRAC_PI_4);
        let c = cubic_c66();
        let rotated = rotate_c66(&r, &c);
        // C'11 = (C11 + C12)/2 + C44
        let expected = (106.75 + 60.41) / 2.0 + 28.34;
        assert!((rotated[(0, 0)] - expected).abs() < 1e-10);
        assert!((rotated[(2, 2)] - 106.75).abs() < 1e-10);
    }
}
