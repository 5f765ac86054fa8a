//! Shear Force and Bending Moment Sampler
//!
//! Walks the hull girder at evenly spaced stations and evaluates shear force
//! and bending moment at each one by superposition of the reactions, the
//! uniform load, and every point load already passed.
//!
//! ## Sign Convention
//! - Positive shear: left side up, right side down
//! - Positive moment: sagging
//!
//! At a station exactly on a point load the load counts as already applied,
//! so shear shows its downward step at that station. Moment never steps.
//!
//! ## Example
//! ```rust
//! use hull_core::calculations::sfbm::sample_sfbm;
//! use hull_core::loads::PointLoad;
//!
//! let diagram = sample_sfbm(10.0, 0.0, &[PointLoad::new("p", 5.0, 100.0)], 11);
//!
//! assert_eq!(diagram.samples.len(), 11);
//! assert_eq!(diagram.samples[5].x_m, 5.0);
//! assert_eq!(diagram.samples[5].moment_knm, 250.0);
//! ```

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::criticals::{find_criticals, Criticals};
use super::reactions::{compute_reactions, Reactions};
use crate::loads::{sorted_by_position, PointLoad};
use crate::numeric::{finite_or_zero, non_negative_length};

/// Default number of stations (every 0.5% of length)
pub const DEFAULT_SAMPLES: usize = 201;

/// Fewest stations that still span [0, L]
pub const MIN_SAMPLES: usize = 2;

/// One station of the diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SfbmSample {
    /// Station (m from support A)
    pub x_m: f64,
    /// Shear force (kN)
    pub shear_kn: f64,
    /// Bending moment (kN·m)
    pub moment_knm: f64,
}

/// A sampled shear force / bending moment diagram with the reactions it was
/// built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SfbmDiagram {
    /// Stations in ascending x, covering [0, L] inclusive
    pub samples: Vec<SfbmSample>,
    pub reactions: Reactions,
}

impl SfbmDiagram {
    /// Extrema and first zero-shear crossing
    pub fn criticals(&self) -> Criticals {
        find_criticals(&self.samples)
    }

    /// (x, V) pairs for plotting
    pub fn shear_diagram(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.x_m, s.shear_kn)).collect()
    }

    /// (x, M) pairs for plotting
    pub fn moment_diagram(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.x_m, s.moment_knm)).collect()
    }

    /// Whether every sampled value is a finite number
    pub fn is_finite(&self) -> bool {
        self.samples
            .iter()
            .all(|s| s.x_m.is_finite() && s.shear_kn.is_finite() && s.moment_knm.is_finite())
    }
}

/// Sample the diagram at `samples` evenly spaced stations.
///
/// Station `i` sits at `x = L·i/(n−1)`. `samples` below [`MIN_SAMPLES`] is
/// raised to it, so the result always holds at least the two end stations.
/// Output is a pure function of the inputs.
pub fn sample_sfbm(
    length_m: f64,
    uniform_load_kn_per_m: f64,
    point_loads: &[PointLoad],
    samples: usize,
) -> SfbmDiagram {
    let length = non_negative_length(length_m);
    let w = finite_or_zero(uniform_load_kn_per_m);
    let loads = sorted_by_position(point_loads);
    let reactions = compute_reactions(length, w, &loads);

    let stations = if samples < MIN_SAMPLES {
        debug!("Sample count {} below minimum; using {}", samples, MIN_SAMPLES);
        MIN_SAMPLES
    } else {
        samples
    };

    let last = (stations - 1) as f64;
    let samples: Vec<SfbmSample> = (0..stations)
        .map(|i| {
            let x = length * i as f64 / last;
            station_values(x, reactions.reaction_a_kn, w, &loads)
        })
        .collect();

    trace!(
        "Sampled {} stations over L={} m with {} point load(s)",
        samples.len(),
        length,
        loads.len()
    );

    SfbmDiagram { samples, reactions }
}

/// Shear and moment at one station.
///
/// `loads` must be sorted by [`sorted_by_position`]: the scan stops at the
/// first load beyond `x`, and non-finite positions sit at the tail.
fn station_values(x: f64, reaction_a_kn: f64, w: f64, loads: &[PointLoad]) -> SfbmSample {
    // V(x) = R_A − w·x − Σ P_i            for x_i ≤ x
    // M(x) = R_A·x − w·x²/2 − Σ P_i(x − x_i) for x_i ≤ x
    let mut shear = reaction_a_kn - w * x;
    let mut moment = reaction_a_kn * x - w * x * x / 2.0;

    for load in loads {
        if !load.position_m.is_finite() || load.position_m > x {
            break;
        }
        if !load.magnitude_kn.is_finite() {
            continue;
        }
        shear -= load.magnitude_kn;
        moment -= load.magnitude_kn * (x - load.position_m);
    }

    SfbmSample {
        x_m: x,
        shear_kn: shear,
        moment_knm: moment,
    }
}
