//! Distributed Load from Hull Geometry
//!
//! The buoyancy-equivalent uniform load is taken as proportional to the
//! submerged cross-section: w = γ_sw · B · T · Cb (kN/m).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::numeric::{finite, finite_or_zero, finite_positive};

/// Unit weight of seawater (kN/m³), ρ ≈ 1.025 t/m³ × g
pub const SEAWATER_UNIT_WEIGHT_KN_PER_M3: f64 = 10.05;

/// Uniform distributed load (kN/m) derived from hull geometry.
///
/// Malformed geometry yields `0.0` (no distributed load) rather than an
/// error, so the rest of the pipeline still produces a point-load-only diagram.
///
/// ```rust
/// use hull_core::loads::{uniform_load_from_geometry, SEAWATER_UNIT_WEIGHT_KN_PER_M3};
///
/// let w = uniform_load_from_geometry(20.0, 8.0, 0.75, SEAWATER_UNIT_WEIGHT_KN_PER_M3);
/// assert!((w - 1206.0).abs() < 1e-9);
///
/// assert_eq!(uniform_load_from_geometry(0.0, 8.0, 0.75, SEAWATER_UNIT_WEIGHT_KN_PER_M3), 0.0);
/// ```
pub fn uniform_load_from_geometry(
    breadth_m: f64,
    draft_m: f64,
    block_coefficient: f64,
    seawater_unit_weight_kn_per_m3: f64,
) -> f64 {
    let geometry = (
        finite_positive(breadth_m),
        finite_positive(draft_m),
        finite_positive(block_coefficient),
        finite(seawater_unit_weight_kn_per_m3),
    );
    match geometry {
        (Some(b), Some(t), Some(cb), Some(gamma)) => gamma * b * t * cb,
        _ => {
            debug!(
                "Degenerate hull geometry (B={}, T={}, Cb={}, γ={}); using zero distributed load",
                breadth_m, draft_m, block_coefficient, seawater_unit_weight_kn_per_m3
            );
            0.0
        }
    }
}

/// Principal hull dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HullGeometry {
    /// Length between supports (m)
    pub length_m: f64,
    /// Moulded breadth (m)
    pub breadth_m: f64,
    /// Mean draft (m)
    pub draft_m: f64,
    /// Block coefficient Cb (-)
    pub block_coefficient: f64,
}

impl HullGeometry {
    pub fn new(length_m: f64, breadth_m: f64, draft_m: f64, block_coefficient: f64) -> Self {
        HullGeometry {
            length_m,
            breadth_m,
            draft_m,
            block_coefficient,
        }
    }

    /// Buoyancy-equivalent uniform load (kN/m)
    pub fn uniform_load_kn_per_m(&self, seawater_unit_weight_kn_per_m3: f64) -> f64 {
        uniform_load_from_geometry(
            self.breadth_m,
            self.draft_m,
            self.block_coefficient,
            seawater_unit_weight_kn_per_m3,
        )
    }
}

impl Default for HullGeometry {
    fn default() -> Self {
        // Handysize bulk carrier
        HullGeometry::new(170.0, 27.0, 9.8, 0.80)
    }
}

/// Where the uniform load comes from
///
/// The kernel takes positive `w` as downward load. `Buoyancy` is the
/// geometry-derived load acting upward (`-γ·B·T·Cb`) and is the default;
/// `FromGeometry` applies the same magnitude downward.
///
/// ## JSON Examples
///
/// ```json
/// { "type": "Buoyancy" }
/// { "type": "FromGeometry", "seawater_unit_weight_kn_per_m3": 10.05 }
/// { "type": "Direct", "kn_per_m": 1850.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UniformLoadSource {
    /// Upward buoyancy from breadth, draft and block coefficient
    Buoyancy {
        #[serde(default = "default_seawater_unit_weight")]
        seawater_unit_weight_kn_per_m3: f64,
    },

    /// Downward load of the same magnitude as `Buoyancy`
    FromGeometry {
        #[serde(default = "default_seawater_unit_weight")]
        seawater_unit_weight_kn_per_m3: f64,
    },

    /// Use a supplied w (kN/m)
    Direct { kn_per_m: f64 },
}

fn default_seawater_unit_weight() -> f64 {
    SEAWATER_UNIT_WEIGHT_KN_PER_M3
}

impl Default for UniformLoadSource {
    fn default() -> Self {
        UniformLoadSource::Buoyancy {
            seawater_unit_weight_kn_per_m3: SEAWATER_UNIT_WEIGHT_KN_PER_M3,
        }
    }
}

impl UniformLoadSource {
    /// Resolve the signed uniform load (kN/m, positive downward) for the given hull
    pub fn resolve(&self, geometry: &HullGeometry) -> f64 {
        match *self {
            UniformLoadSource::Buoyancy {
                seawater_unit_weight_kn_per_m3,
            } => -geometry.uniform_load_kn_per_m(seawater_unit_weight_kn_per_m3),
            UniformLoadSource::FromGeometry {
                seawater_unit_weight_kn_per_m3,
            } => geometry.uniform_load_kn_per_m(seawater_unit_weight_kn_per_m3),
            UniformLoadSource::Direct { kn_per_m } => finite_or_zero(kn_per_m),
        }
    }

    /// Seawater unit weight, for the geometry-derived sources
    pub fn seawater_unit_weight(&self) -> Option<f64> {
        match *self {
            UniformLoadSource::Buoyancy {
                seawater_unit_weight_kn_per_m3,
            }
            | UniformLoadSource::FromGeometry {
                seawater_unit_weight_kn_per_m3,
            } => Some(seawater_unit_weight_kn_per_m3),
            UniformLoadSource::Direct { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_load_formula() {
        // 10.05 × 32.2 × 12.0 × 0.82
        let w = uniform_load_from_geometry(32.2, 12.0, 0.82, SEAWATER_UNIT_WEIGHT_KN_PER_M3);
        assert!((w - 3184.3224).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_geometry_is_exactly_zero() {
        let gamma = SEAWATER_UNIT_WEIGHT_KN_PER_M3;
        assert_eq!(uniform_load_from_geometry(0.0, 8.0, 0.7, gamma), 0.0);
        assert_eq!(uniform_load_from_geometry(20.0, -1.0, 0.7, gamma), 0.0);
        assert_eq!(uniform_load_from_geometry(20.0, 8.0, 0.0, gamma), 0.0);
        assert_eq!(uniform_load_from_geometry(f64::NAN, 8.0, 0.7, gamma), 0.0);
        assert_eq!(uniform_load_from_geometry(20.0, f64::INFINITY, 0.7, gamma), 0.0);
        assert_eq!(uniform_load_from_geometry(20.0, 8.0, 0.7, f64::NAN), 0.0);
    }

    #[test]
    fn test_seawater_weight_is_not_required_positive() {
        // Only finiteness is checked for the unit weight
        let w = uniform_load_from_geometry(10.0, 2.0, 0.5, 0.0);
        assert_eq!(w, 0.0);
        let w = uniform_load_from_geometry(10.0, 2.0, 0.5, -10.0);
        assert_eq!(w, -100.0);
    }

    #[test]
    fn test_source_resolution() {
        let hull = HullGeometry::new(100.0, 20.0, 8.0, 0.75);
        let downward = UniformLoadSource::FromGeometry {
            seawater_unit_weight_kn_per_m3: SEAWATER_UNIT_WEIGHT_KN_PER_M3,
        }
        .resolve(&hull);
        assert!((downward - 1206.0).abs() < 1e-9);

        let direct = UniformLoadSource::Direct { kn_per_m: 850.0 }.resolve(&hull);
        assert_eq!(direct, 850.0);

        let bad = UniformLoadSource::Direct { kn_per_m: f64::NAN }.resolve(&hull);
        assert_eq!(bad, 0.0);
    }

    #[test]
    fn test_default_source_is_upward_buoyancy() {
        let hull = HullGeometry::new(100.0, 20.0, 8.0, 0.75);
        let w = hull.uniform_load_kn_per_m(SEAWATER_UNIT_WEIGHT_KN_PER_M3);
        let buoyancy = UniformLoadSource::default().resolve(&hull);
        assert!((buoyancy + 1206.0).abs() < 1e-9);
        assert_eq!(buoyancy, UniformLoadSource::Direct { kn_per_m: -w }.resolve(&hull));
    }

    #[test]
    fn test_degenerate_buoyancy_is_zero() {
        let hull = HullGeometry::new(100.0, 0.0, 8.0, 0.75);
        assert_eq!(UniformLoadSource::default().resolve(&hull), 0.0);
    }

    #[test]
    fn test_source_json() {
        let source: UniformLoadSource = serde_json::from_str(r#"{ "type": "Buoyancy" }"#).unwrap();
        assert_eq!(source, UniformLoadSource::default());
        assert_eq!(source.seawater_unit_weight(), Some(SEAWATER_UNIT_WEIGHT_KN_PER_M3));

        let source: UniformLoadSource = serde_json::from_str(r#"{ "type": "FromGeometry" }"#).unwrap();
        assert_eq!(
            source,
            UniformLoadSource::FromGeometry {
                seawater_unit_weight_kn_per_m3: SEAWATER_UNIT_WEIGHT_KN_PER_M3
            }
        );

        let direct = UniformLoadSource::Direct { kn_per_m: 1.0 };
        assert_eq!(direct.seawater_unit_weight(), None);
    }
}
