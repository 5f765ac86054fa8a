//! Critical Values
//!
//! Summarizes a sampled diagram into named extrema and the zero-shear
//! station (the candidate location of peak bending moment).
//!
//! Running extrema are seeded at `{x: 0, value: 0}`. A diagram that never
//! crosses zero therefore reports a zero-valued extremum at station 0 on the
//! side it never reaches (e.g. `min_shear` for an all-positive shear curve).
//! Chart axis scaling relies on this zero baseline.

use serde::{Deserialize, Serialize};

use super::sfbm::SfbmSample;

/// A value and the station where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CriticalPoint {
    /// Station (m from support A)
    pub x_m: f64,
    pub value: f64,
}

impl CriticalPoint {
    pub fn new(x_m: f64, value: f64) -> Self {
        CriticalPoint { x_m, value }
    }
}

/// Extrema of a sampled diagram
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Criticals {
    /// Largest shear (kN)
    pub max_shear: CriticalPoint,
    /// Smallest shear (kN)
    pub min_shear: CriticalPoint,
    /// Largest (sagging) moment (kN·m)
    pub max_moment: CriticalPoint,
    /// Smallest (hogging) moment (kN·m)
    pub min_moment: CriticalPoint,
    /// Whichever of max/min moment is larger in magnitude; ties go to max
    pub max_abs_moment: CriticalPoint,
    /// Whichever of max/min shear is larger in magnitude; ties go to max
    pub max_abs_shear: CriticalPoint,
    /// First interpolated station where shear changes sign or touches zero
    pub zero_shear_at_x_m: Option<f64>,
}

/// Scan a diagram once for extrema and the first zero-shear crossing.
///
/// ```rust
/// use hull_core::calculations::criticals::find_criticals;
/// use hull_core::calculations::sfbm::sample_sfbm;
/// use hull_core::loads::PointLoad;
///
/// let diagram = sample_sfbm(10.0, 0.0, &[PointLoad::new("p", 5.0, 100.0)], 201);
/// let c = find_criticals(&diagram.samples);
///
/// assert_eq!(c.max_moment.value, 250.0);
/// assert!((c.zero_shear_at_x_m.unwrap() - 5.0).abs() < 0.05);
/// ```
pub fn find_criticals(data: &[SfbmSample]) -> Criticals {
    let mut max_shear = CriticalPoint::default();
    let mut min_shear = CriticalPoint::default();
    let mut max_moment = CriticalPoint::default();
    let mut min_moment = CriticalPoint::default();

    for s in data {
        if s.shear_kn > max_shear.value {
            max_shear = CriticalPoint::new(s.x_m, s.shear_kn);
        }
        if s.shear_kn < min_shear.value {
            min_shear = CriticalPoint::new(s.x_m, s.shear_kn);
        }
        if s.moment_knm > max_moment.value {
            max_moment = CriticalPoint::new(s.x_m, s.moment_knm);
        }
        if s.moment_knm < min_moment.value {
            min_moment = CriticalPoint::new(s.x_m, s.moment_knm);
        }
    }

    let zero_shear_at_x_m = data
        .windows(2)
        .find_map(|pair| shear_crossing(&pair[0], &pair[1]));

    Criticals {
        max_shear,
        min_shear,
        max_moment,
        min_moment,
        max_abs_moment: larger_magnitude(max_moment, min_moment),
        max_abs_shear: larger_magnitude(max_shear, min_shear),
        zero_shear_at_x_m,
    }
}

/// Every zero-shear crossing, in ascending station order.
///
/// Uses the same sign test and interpolation as [`find_criticals`], so the
/// first element always equals `find_criticals(data).zero_shear_at_x_m`.
/// A crossing at the same station as the previous one is reported once; a
/// run of exactly-zero shear reports each station in the run.
pub fn zero_shear_crossings(data: &[SfbmSample]) -> Vec<f64> {
    let mut crossings: Vec<f64> = Vec::new();
    for pair in data.windows(2) {
        if let Some(x) = shear_crossing(&pair[0], &pair[1]) {
            if crossings.last() != Some(&x) {
                crossings.push(x);
            }
        }
    }
    crossings
}

/// Interpolated zero of shear between two consecutive stations, if the sign
/// changes or either end touches zero.
fn shear_crossing(a: &SfbmSample, b: &SfbmSample) -> Option<f64> {
    let (prev, curr) = (a.shear_kn, b.shear_kn);
    let crosses = (prev <= 0.0 && curr >= 0.0) || (prev >= 0.0 && curr <= 0.0);
    if !crosses {
        return None;
    }
    let t = if prev == curr { 0.0 } else { prev / (prev - curr) };
    Some(a.x_m + t * (b.x_m - a.x_m))
}

fn larger_magnitude(max: CriticalPoint, min: CriticalPoint) -> CriticalPoint {
    if max.value.abs() >= min.value.abs() {
        max
    } else {
        min
    }
}
