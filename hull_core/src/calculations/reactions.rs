//! Support Reactions
//!
//! End reactions of a simply supported hull girder (support A at x = 0,
//! support B at x = L) carrying a uniform load and a set of point loads.
//! Statically determinate: one moment balance about A, one force balance.
//!
//! ## Sign Convention
//! - Loads: positive downward
//! - Reactions: positive upward

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::loads::PointLoad;
use crate::numeric::{finite_or_zero, non_negative_length};

/// The two end reactions (kN, upward positive)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction at support A, x = 0
    pub reaction_a_kn: f64,
    /// Reaction at support B, x = L
    pub reaction_b_kn: f64,
}

impl Reactions {
    /// R_A + R_B
    pub fn total_kn(&self) -> f64 {
        self.reaction_a_kn + self.reaction_b_kn
    }
}

/// Compute both support reactions.
///
/// - ΣM_A = wL·(L/2) + Σ P·x
/// - R_B = ΣM_A / L (zero for a zero-length beam)
/// - R_A = wL + ΣP − R_B
///
/// A non-finite uniform load counts as zero. Point loads with a non-finite
/// position or magnitude are left out of both balances. No error is raised
/// for out-of-span positions; they are included as given.
///
/// ```rust
/// use hull_core::calculations::reactions::compute_reactions;
/// use hull_core::loads::PointLoad;
///
/// let r = compute_reactions(10.0, 0.0, &[PointLoad::new("p", 5.0, 100.0)]);
/// assert_eq!(r.reaction_a_kn, 50.0);
/// assert_eq!(r.reaction_b_kn, 50.0);
/// ```
pub fn compute_reactions(length_m: f64, uniform_load_kn_per_m: f64, point_loads: &[PointLoad]) -> Reactions {
    let length = non_negative_length(length_m);
    let w = finite_or_zero(uniform_load_kn_per_m);

    let total_uniform_kn = w * length;

    let mut total_point_kn = 0.0;
    let mut point_moment_knm = 0.0;
    let mut ignored = 0usize;
    for load in point_loads {
        if !load.is_effective() {
            ignored += 1;
            continue;
        }
        total_point_kn += load.magnitude_kn;
        point_moment_knm += load.magnitude_kn * load.position_m;
    }
    if ignored > 0 {
        debug!("Ignored {} point load(s) with non-finite position or magnitude", ignored);
    }

    let moment_about_a_knm = total_uniform_kn * (length / 2.0) + point_moment_knm;
    let reaction_b_kn = if length > 0.0 {
        moment_about_a_knm / length
    } else {
        0.0
    };
    let reaction_a_kn = total_uniform_kn + total_point_kn - reaction_b_kn;

    trace!(
        "Reactions for L={} m, w={} kN/m, {} point load(s): R_A={:.3} kN, R_B={:.3} kN",
        length,
        w,
        point_loads.len() - ignored,
        reaction_a_kn,
        reaction_b_kn
    );

    Reactions {
        reaction_a_kn,
        reaction_b_kn,
    }
}
