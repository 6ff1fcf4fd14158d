//! # Self-Test
//!
//! Seeded consistency checks over the catalogs and the tensor algebra. Run
//! once at model setup (or from the CLI) to catch a corrupted table or a
//! broken conversion before any constitutive update sees it.
//!
//! Checks, in order:
//!
//! 1. a frame built from random diagonal vectors is the identity frame
//! 2. every frame of every catalog is orthonormal
//! 3. every slip and twin Schmid tensor is deviatoric
//! 4. symmetrised stiffness matrices meet the family equalities and are
//!    idempotent across the cubic families
//! 5. symmetrised second-order tensors meet the family equalities
//! 6. an isotropic stiffness gives `μ = C44` and `ν = λ / (2(λ + μ))` under
//!    both averaging assumptions
//!
//! ## Example
//!
//! ```rust
//! use lattice_core::self_test::self_test;
//!
//! let report = self_test(42).unwrap();
//! assert!(report.checks.len() >= 6);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::catalog;
use crate::errors::{LatticeError, LatticeResult};
use crate::geometry::{build_frames, CoordinateFrame};
use crate::lattice::{LatticeFamily, SystemKind};
use crate::moduli::{equivalent_moduli, Averaging};
use crate::schmid::{schmid_slip, schmid_twin, DEVIATORIC_TOLERANCE};
use crate::selection::ActiveSelection;
use crate::symmetry::{symmetrize_33, symmetrize_c66};
use crate::types::{Matrix3, Matrix6, Vector3};

const FRAME_TOLERANCE: f64 = 1e-10;
const MODULI_TOLERANCE: f64 = 1e-9;

/// Outcome of a successful self-test run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelfTestReport {
    pub seed: u64,
    pub checks: Vec<&'static str>,
}

/// Run every check with random inputs drawn from `seed`
pub fn self_test(seed: u64) -> LatticeResult<SelfTestReport> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut checks = Vec::new();

    check_diagonal_frame(&mut rng)?;
    checks.push("diagonal_frame");

    let hp_ratio = rng.gen_range(1.5..2.0);
    let ti_ratio = rng.gen_range(0.5..2.0);
    check_catalog_frames(hp_ratio, ti_ratio)?;
    checks.push("orthonormal_frames");

    check_deviatoric(hp_ratio, ti_ratio)?;
    checks.push("deviatoric_schmid");

    check_symmetrize_c66(&mut rng)?;
    checks.push("symmetrize_c66");

    check_symmetrize_33(&mut rng)?;
    checks.push("symmetrize_33");

    check_isotropic_moduli(&mut rng)?;
    checks.push("isotropic_moduli");

    info!(seed, checks = checks.len(), "lattice self-test passed");
    Ok(SelfTestReport { seed, checks })
}

fn check_diagonal_frame(rng: &mut StdRng) -> LatticeResult<()> {
    let d = Vector3::new(rng.gen_range(0.1..1.0), 0.0, 0.0);
    let n = Vector3::new(0.0, rng.gen_range(0.1..1.0), 0.0);
    let frame = CoordinateFrame::from_vectors(&d, &n);
    let deviation = (frame.to_matrix() - Matrix3::identity()).abs().max();
    if deviation > FRAME_TOLERANCE {
        return Err(LatticeError::self_test(
            "diagonal_frame",
            format!("frame deviates from identity by {deviation:e}"),
        ));
    }
    Ok(())
}

fn supported() -> Vec<(LatticeFamily, SystemKind)> {
    LatticeFamily::ALL
        .iter()
        .flat_map(|&lattice| SystemKind::ALL.iter().map(move |&kind| (lattice, kind)))
        .filter(|&(lattice, kind)| catalog(lattice, kind).is_ok())
        .collect()
}

fn ratio_for(lattice: LatticeFamily, hp_ratio: f64, ti_ratio: f64) -> f64 {
    match lattice {
        LatticeFamily::Hp => hp_ratio,
        LatticeFamily::Ti => ti_ratio,
        LatticeFamily::Cf | LatticeFamily::Ci => 1.0,
    }
}

fn check_catalog_frames(hp_ratio: f64, ti_ratio: f64) -> LatticeResult<()> {
    for (lattice, kind) in supported() {
        let all = ActiveSelection::all(catalog(lattice, kind)?);
        let frames = build_frames(lattice, kind, &all, ratio_for(lattice, hp_ratio, ti_ratio))?;
        if let Some(i) = frames.iter().position(|f| !f.is_orthonormal(FRAME_TOLERANCE)) {
            return Err(LatticeError::self_test(
                "orthonormal_frames",
                format!("{lattice} {kind} system {} is not orthonormal", i + 1),
            ));
        }
        debug!(lattice = lattice.code(), kind = kind.code(), systems = frames.len(), "frames orthonormal");
    }
    Ok(())
}

fn check_deviatoric(hp_ratio: f64, ti_ratio: f64) -> LatticeResult<()> {
    for lattice in LatticeFamily::ALL {
        let ratio = ratio_for(lattice, hp_ratio, ti_ratio);
        let slip = ActiveSelection::all(catalog(lattice, SystemKind::Slip)?);
        schmid_slip(lattice, &slip, ratio)?;
        if let Ok(twin_catalog) = catalog(lattice, SystemKind::Twin) {
            schmid_twin(lattice, &ActiveSelection::all(twin_catalog), ratio)?;
        }
    }
    Ok(())
}

fn random_c66(rng: &mut StdRng) -> Matrix6 {
    Matrix6::from_fn(|_, _| rng.gen_range(-100.0..100.0))
}

fn check_symmetrize_c66(rng: &mut StdRng) -> LatticeResult<()> {
    let c = random_c66(rng);
    let fail = |detail: &str| Err(LatticeError::self_test("symmetrize_c66", detail));

    for family in LatticeFamily::ALL {
        let s = symmetrize_c66(&c, family);
        if s != s.transpose() {
            return fail(&format!("{family} projection is not symmetric"));
        }
    }

    let cubic = symmetrize_c66(&c, LatticeFamily::Cf);
    let cubic_ok = cubic[(0, 0)] == cubic[(1, 1)]
        && cubic[(1, 1)] == cubic[(2, 2)]
        && cubic[(0, 1)] == cubic[(0, 2)]
        && cubic[(0, 2)] == cubic[(1, 2)]
        && cubic[(3, 3)] == cubic[(4, 4)]
        && cubic[(4, 4)] == cubic[(5, 5)];
    if !cubic_ok {
        return fail("cubic equalities violated");
    }
    if symmetrize_c66(&cubic, LatticeFamily::Ci) != cubic {
        return fail("cF projection is not idempotent under cI");
    }

    let hex = symmetrize_c66(&c, LatticeFamily::Hp);
    let hex_ok = hex[(0, 0)] == hex[(1, 1)]
        && (hex[(5, 5)] - 0.5 * (hex[(0, 0)] - hex[(0, 1)])).abs() <= f64::EPSILON * hex.abs().max();
    if !hex_ok {
        return fail("hexagonal equalities violated");
    }
    Ok(())
}

fn check_symmetrize_33(rng: &mut StdRng) -> LatticeResult<()> {
    let t = Matrix3::from_fn(|_, _| rng.gen_range(-10.0..10.0));
    for family in LatticeFamily::ALL {
        let s = symmetrize_33(&t, family);
        let ok = s[(0, 0)] == s[(1, 1)]
            && (!family.is_cubic() || s[(1, 1)] == s[(2, 2)])
            && s == Matrix3::from_diagonal(&s.diagonal());
        if !ok {
            return Err(LatticeError::self_test(
                "symmetrize_33",
                format!("{family} projection violates the family equalities"),
            ));
        }
    }
    Ok(())
}

fn check_isotropic_moduli(rng: &mut StdRng) -> LatticeResult<()> {
    // Lamé constants
    let lambda = rng.gen_range(10.0..200.0);
    let mu = rng.gen_range(10.0..150.0);

    let mut c = Matrix6::zeros();
    c[(0, 0)] = lambda + 2.0 * mu;
    c[(0, 1)] = lambda;
    c[(3, 3)] = mu;
    let c = symmetrize_c66(&c, LatticeFamily::Ci);

    let nu = lambda / (2.0 * (lambda + mu));

    for averaging in Averaging::ALL {
        let m = equivalent_moduli(&c, averaging)?;
        if (m.shear - mu).abs() > MODULI_TOLERANCE * mu || (m.poisson - nu).abs() > MODULI_TOLERANCE {
            return Err(LatticeError::self_test(
                "isotropic_moduli",
                format!(
                    "{averaging}: shear {} (expected {mu}), Poisson {} (expected {nu})",
                    m.shear, m.poisson
                ),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_test_passes_for_several_seeds() {
        for seed in [0, 1, 7, 42, 2024] {
            let report = self_test(seed).unwrap();
            assert_eq!(report.seed, seed);
            assert_eq!(report.checks.len(), 6);
        }
    }

    #[test]
    fn test_self_test_reproducible() {
        assert_eq!(self_test(11).unwrap(), self_test(11).unwrap());
    }

    #[test]
    fn test_supported_pairs() {
        assert_eq!(supported().len(), 10);
    }
}
