//! # Hull Girder Calculations
//!
//! The SFBM pipeline runs one way, each stage a pure function of its inputs:
//!
//! ```text
//! geometry / point loads → reactions → sampled diagram → criticals → stresses
//! ```
//!
//! ## Available Calculations
//!
//! - [`reactions`] - Support reactions of the simply supported girder
//! - [`sfbm`] - Shear force / bending moment sampling at evenly spaced stations
//! - [`criticals`] - Extrema and zero-shear crossings of a sampled diagram
//! - [`stress`] - Still-water and wave bending moments, bending and shear stress
//! - [`strength`] - Full longitudinal strength check (`StrengthInput` → `StrengthResult`)

pub mod criticals;
pub mod reactions;
pub mod sfbm;
pub mod strength;
pub mod stress;

// Re-export commonly used types
pub use criticals::{find_criticals, zero_shear_crossings, CriticalPoint, Criticals};
pub use reactions::{compute_reactions, Reactions};
pub use sfbm::{sample_sfbm, SfbmDiagram, SfbmSample, DEFAULT_SAMPLES, MIN_SAMPLES};
pub use strength::{calculate, Advisory, SectionProperties, StrengthInput, StrengthResult, StrengthStatus};
pub use stress::{
    bending_stress_mpa, midship_deflection_mm, shear_stress_mpa, still_water_bm_estimate, wave_induced_bm,
    STEEL_ELASTIC_MODULUS_GPA,
};
