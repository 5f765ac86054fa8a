//! Bending Moment Estimates and Hull Girder Stresses
//!
//! Closed-form companions to the sampled diagram. All of them return `0.0`
//! for non-finite (or, where noted, non-positive) inputs instead of failing.

use super::criticals::find_criticals;
use super::sfbm::SfbmSample;
use crate::loads::PointLoad;
use crate::numeric::{finite, finite_or_zero, finite_positive};
use crate::units::{Kilopascals, MegaPascals};

/// Offset added to Cb in the wave bending moment proxy
pub const WAVE_BM_CB_OFFSET: f64 = 0.7;

/// Young's modulus of hull steel (GPa)
pub const STEEL_ELASTIC_MODULUS_GPA: f64 = 206.0;

/// kN/m² per GPa
const KN_PER_M2_PER_GPA: f64 = 1.0e6;

/// Still-water bending moment estimate (kN·m).
///
/// With `prefer_midship` the moment at the middle station (`floor(n/2)`) is
/// taken; otherwise the largest-magnitude moment from [`find_criticals`].
/// An empty diagram gives `0.0`.
pub fn still_water_bm_estimate(data: &[SfbmSample], prefer_midship: bool) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    if prefer_midship {
        return data[data.len() / 2].moment_knm;
    }
    find_criticals(data).max_abs_moment.value
}

/// Wave-induced bending moment proxy (kN·m): `C · L² · B · (Cb + 0.7)`.
///
/// `coefficient_kn_per_m3` is the empirical wave coefficient C.
///
/// ```rust
/// use hull_core::calculations::stress::wave_induced_bm;
///
/// let wibm = wave_induced_bm(100.0, 20.0, 0.8, 0.01);
/// assert!((wibm - 3000.0).abs() < 1e-9);
/// assert_eq!(wave_induced_bm(f64::NAN, 20.0, 0.8, 0.01), 0.0);
/// ```
pub fn wave_induced_bm(length_m: f64, breadth_m: f64, block_coefficient: f64, coefficient_kn_per_m3: f64) -> f64 {
    match (
        finite(length_m),
        finite(breadth_m),
        finite(block_coefficient),
        finite(coefficient_kn_per_m3),
    ) {
        (Some(l), Some(b), Some(cb), Some(c)) => c * (l * l) * b * (cb + WAVE_BM_CB_OFFSET),
        _ => 0.0,
    }
}

/// Bending stress σ = M/Z (MPa), M in kN·m and Z in m³.
///
/// ```rust
/// use hull_core::calculations::stress::bending_stress_mpa;
///
/// assert_eq!(bending_stress_mpa(1000.0, 1.0), 1.0);
/// assert_eq!(bending_stress_mpa(1000.0, 0.0), 0.0);
/// ```
pub fn bending_stress_mpa(moment_knm: f64, section_modulus_m3: f64) -> f64 {
    match (finite(moment_knm), finite_positive(section_modulus_m3)) {
        (Some(m), Some(z)) => MegaPascals::from(Kilopascals(m / z)).value(),
        _ => 0.0,
    }
}

/// Average shear stress τ = V/A (MPa), V in kN and A in m².
pub fn shear_stress_mpa(shear_kn: f64, shear_area_m2: f64) -> f64 {
    match (finite(shear_kn), finite_positive(shear_area_m2)) {
        (Some(v), Some(a)) => MegaPascals::from(Kilopascals(v / a)).value(),
        _ => 0.0,
    }
}

/// Midship deflection of the simply supported girder (mm, positive downward).
///
/// Superposes the uniform load, `5wL⁴/(384EI)`, and each point load at `a`
/// (with `b = L − a`), `P·b·x·(L² − b² − x²)/(6LEI)` evaluated at `x = L/2`
/// from the nearer support. Point loads that are ineffective or lie outside
/// `[0, L]` are skipped. Returns `0.0` unless L, E and I are finite and positive.
///
/// ```rust
/// use hull_core::calculations::stress::midship_deflection_mm;
/// use hull_core::loads::PointLoad;
///
/// // PL³/(48EI) = 1000 × 10³ / (48 × 200e6 × 1) m
/// let d = midship_deflection_mm(10.0, 0.0, &[PointLoad::new("p", 5.0, 1000.0)], 200.0, 1.0);
/// assert!((d - 0.104_166_67).abs() < 1e-6);
/// ```
pub fn midship_deflection_mm(
    length_m: f64,
    uniform_load_kn_per_m: f64,
    point_loads: &[PointLoad],
    elastic_modulus_gpa: f64,
    moment_of_inertia_m4: f64,
) -> f64 {
    let (l, e, i) = match (
        finite_positive(length_m),
        finite_positive(elastic_modulus_gpa),
        finite_positive(moment_of_inertia_m4),
    ) {
        (Some(l), Some(e), Some(i)) => (l, e, i),
        _ => return 0.0,
    };
    let ei = e * KN_PER_M2_PER_GPA * i;
    let x = l / 2.0;

    let w = finite_or_zero(uniform_load_kn_per_m);
    let mut deflection_m = 5.0 * w * l.powi(4) / (384.0 * ei);

    for load in point_loads
        .iter()
        .filter(|p| p.is_effective() && p.position_m >= 0.0 && p.position_m <= l)
    {
        // Mirror loads right of midship so the x ≤ a branch always applies
        let a = load.position_m.max(l - load.position_m);
        let b = l - a;
        deflection_m += load.magnitude_kn * b * x * (l * l - b * b - x * x) / (6.0 * l * ei);
    }

    deflection_m * 1000.0
}
