//! # Longitudinal Strength Assessment
//!
//! Runs the SFBM kernel for one loading condition and checks the resulting
//! hull girder stresses against the steel's yield strength.
//!
//! ## Assumptions
//!
//! - Hull girder idealized as a simply supported beam between AP and FP
//! - Upward buoyancy (by default) plus discrete point loads
//! - Design bending moment = |still-water BM| + |wave-induced BM|
//! - Bending stress σ = M/Z at the deck/keel, shear stress τ = V/A (average)
//! - Midship deflection by superposition when I is given, limited to L/300
//!
//! Unlike the kernel functions, [`calculate`] rejects malformed input with a
//! structured [`CalcError`] instead of degrading it to zero.
//!
//! ## Example
//!
//! ```rust
//! use hull_core::calculations::strength::{calculate, SectionProperties, StrengthInput};
//! use hull_core::loads::{HullGeometry, PointLoad, UniformLoadSource};
//!
//! let input = StrengthInput {
//!     label: "Full load departure".to_string(),
//!     geometry: HullGeometry::new(150.0, 24.0, 9.0, 0.78),
//!     uniform_load: UniformLoadSource::Direct { kn_per_m: 0.0 },
//!     point_loads: vec![
//!         PointLoad::from_tonnes("h1", 40.0, 3000.0),
//!         PointLoad::from_tonnes("h2", 110.0, 3000.0),
//!     ],
//!     section: SectionProperties::new(12.0, 1.8),
//!     ..Default::default()
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Design BM: {:.0} kN·m", result.design_bm_knm);
//! println!("Bending stress: {:.1} MPa", result.bending_stress_mpa);
//! println!("Status: {}", result.status);
//! assert!(result.passes());
//! ```

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::criticals::{zero_shear_crossings, Criticals};
use super::sfbm::{sample_sfbm, SfbmDiagram, DEFAULT_SAMPLES, MIN_SAMPLES};
use super::stress::{
    bending_stress_mpa, midship_deflection_mm, shear_stress_mpa, still_water_bm_estimate, wave_induced_bm,
    STEEL_ELASTIC_MODULUS_GPA,
};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{duplicate_ids, HullGeometry, PointLoad, UniformLoadSource};

/// Yield strength of normal-strength hull steel (MPa)
pub const DEFAULT_YIELD_STRENGTH_MPA: f64 = 235.0;

/// Safety factor below which a condition is unsafe
pub const UNSAFE_SAFETY_FACTOR: f64 = 1.5;

/// Safety factor below which a condition is marginal
pub const MARGINAL_SAFETY_FACTOR: f64 = 2.0;

/// Fraction of yield above which bending stress is flagged
pub const HIGH_BENDING_STRESS_RATIO: f64 = 0.8;

/// Average shear stress above which the web is flagged (MPa)
pub const HIGH_SHEAR_STRESS_MPA: f64 = 100.0;

/// Deflection limit as a fraction of length (L/300)
pub const DEFLECTION_LIMIT_SPAN_RATIO: f64 = 300.0;

// =============================================================================
// INPUT
// =============================================================================

/// Midship section properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Hull girder section modulus Z (m³)
    pub section_modulus_m3: f64,
    /// Effective shear area of side shell and longitudinal bulkheads (m²)
    pub shear_area_m2: f64,
    /// Hull girder moment of inertia I (m⁴); no deflection check when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moment_of_inertia_m4: Option<f64>,
    /// Young's modulus E (GPa)
    #[serde(default = "default_elastic_modulus")]
    pub elastic_modulus_gpa: f64,
}

fn default_elastic_modulus() -> f64 {
    STEEL_ELASTIC_MODULUS_GPA
}

impl SectionProperties {
    pub fn new(section_modulus_m3: f64, shear_area_m2: f64) -> Self {
        SectionProperties {
            section_modulus_m3,
            shear_area_m2,
            moment_of_inertia_m4: None,
            elastic_modulus_gpa: STEEL_ELASTIC_MODULUS_GPA,
        }
    }

    /// Enable the deflection check with the given I (m⁴)
    pub fn with_moment_of_inertia(mut self, moment_of_inertia_m4: f64) -> Self {
        self.moment_of_inertia_m4 = Some(moment_of_inertia_m4);
        self
    }
}

impl Default for SectionProperties {
    fn default() -> Self {
        SectionProperties::new(10.0, 1.5)
    }
}

/// Input parameters for a longitudinal strength check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Ballast arrival",
///   "geometry": { "length_m": 170.0, "breadth_m": 27.0, "draft_m": 6.2, "block_coefficient": 0.8 },
///   "uniform_load": { "type": "Buoyancy" },
///   "point_loads": [
///     { "id": "fpt", "position_m": 165.0, "magnitude_kn": 8000.0, "kind": "Ballast" }
///   ],
///   "section": { "section_modulus_m3": 14.5, "shear_area_m2": 2.1, "moment_of_inertia_m4": 95.0 },
///   "wave_coefficient_kn_per_m3": 0.0075
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthInput {
    /// User label for this condition (e.g., "Full load departure")
    pub label: String,

    /// Principal dimensions; `length_m` is the beam length
    pub geometry: HullGeometry,

    /// Source of the uniform distributed load; upward buoyancy when absent
    #[serde(default)]
    pub uniform_load: UniformLoadSource,

    /// Concentrated weights along the hull
    #[serde(default)]
    pub point_loads: Vec<PointLoad>,

    /// Number of diagram stations
    #[serde(default = "default_samples")]
    pub samples: usize,

    pub section: SectionProperties,

    /// Wave coefficient C (kN/m³); no wave moment when absent
    #[serde(default)]
    pub wave_coefficient_kn_per_m3: Option<f64>,

    /// Minimum yield strength of the hull steel (MPa)
    #[serde(default = "default_yield_strength")]
    pub yield_strength_mpa: f64,

    /// Take still-water BM at midship instead of the peak
    #[serde(default = "default_prefer_midship")]
    pub prefer_midship: bool,
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

fn default_yield_strength() -> f64 {
    DEFAULT_YIELD_STRENGTH_MPA
}

fn default_prefer_midship() -> bool {
    true
}

impl Default for StrengthInput {
    fn default() -> Self {
        StrengthInput {
            label: String::new(),
            geometry: HullGeometry::default(),
            uniform_load: UniformLoadSource::default(),
            point_loads: Vec::new(),
            samples: DEFAULT_SAMPLES,
            section: SectionProperties::default(),
            wave_coefficient_kn_per_m3: None,
            yield_strength_mpa: DEFAULT_YIELD_STRENGTH_MPA,
            prefer_midship: true,
        }
    }
}

impl StrengthInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let g = &self.geometry;
        require_positive("geometry.length_m", g.length_m, "Length must be positive")?;
        require_positive("geometry.breadth_m", g.breadth_m, "Breadth must be positive")?;
        require_positive("geometry.draft_m", g.draft_m, "Draft must be positive")?;
        if !(g.block_coefficient > 0.0 && g.block_coefficient <= 1.0) {
            return Err(CalcError::invalid_input(
                "geometry.block_coefficient",
                g.block_coefficient.to_string(),
                "Block coefficient must be in (0, 1]",
            ));
        }

        if let UniformLoadSource::Direct { kn_per_m } = self.uniform_load {
            if !kn_per_m.is_finite() {
                return Err(CalcError::invalid_input(
                    "uniform_load.kn_per_m",
                    kn_per_m.to_string(),
                    "Uniform load must be a finite number",
                ));
            }
        }
        if let Some(gamma) = self.uniform_load.seawater_unit_weight() {
            require_positive(
                "uniform_load.seawater_unit_weight_kn_per_m3",
                gamma,
                "Seawater unit weight must be positive",
            )?;
        }

        if self.samples < MIN_SAMPLES {
            return Err(CalcError::invalid_input(
                "samples",
                self.samples.to_string(),
                format!("At least {} stations are required", MIN_SAMPLES),
            ));
        }

        require_positive(
            "section.section_modulus_m3",
            self.section.section_modulus_m3,
            "Section modulus must be positive",
        )?;
        require_positive(
            "section.shear_area_m2",
            self.section.shear_area_m2,
            "Shear area must be positive",
        )?;
        if let Some(i) = self.section.moment_of_inertia_m4 {
            require_positive("section.moment_of_inertia_m4", i, "Moment of inertia must be positive")?;
            require_positive(
                "section.elastic_modulus_gpa",
                self.section.elastic_modulus_gpa,
                "Elastic modulus must be positive",
            )?;
        }
        require_positive(
            "yield_strength_mpa",
            self.yield_strength_mpa,
            "Yield strength must be positive",
        )?;

        if let Some(c) = self.wave_coefficient_kn_per_m3 {
            if !c.is_finite() || c < 0.0 {
                return Err(CalcError::invalid_input(
                    "wave_coefficient_kn_per_m3",
                    c.to_string(),
                    "Wave coefficient must be a non-negative number",
                ));
            }
        }

        for (i, load) in self.point_loads.iter().enumerate() {
            validate_point_load(i, load, g.length_m)?;
        }
        if let Some(id) = duplicate_ids(&self.point_loads).into_iter().next() {
            return Err(CalcError::invalid_input(
                "point_loads.id",
                id,
                "Point load ids must be unique",
            ));
        }

        Ok(())
    }
}

fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), reason))
    }
}

fn validate_point_load(index: usize, load: &PointLoad, length_m: f64) -> CalcResult<()> {
    if load.id.trim().is_empty() {
        return Err(CalcError::missing_field(format!("point_loads[{}].id", index)));
    }
    if !(load.position_m >= 0.0 && load.position_m <= length_m) {
        return Err(CalcError::invalid_input(
            format!("point_loads[{}].position_m", index),
            load.position_m.to_string(),
            format!("Position must lie within [0, {}] m", length_m),
        ));
    }
    if !load.magnitude_kn.is_finite() {
        return Err(CalcError::invalid_input(
            format!("point_loads[{}].magnitude_kn", index),
            load.magnitude_kn.to_string(),
            "Magnitude must be a finite number",
        ));
    }
    Ok(())
}

// =============================================================================
// RESULT
// =============================================================================

/// Overall verdict from the bending safety factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthStatus {
    Safe,
    Marginal,
    Unsafe,
}

impl StrengthStatus {
    /// Classify a safety factor; `None` (no bending stress) is safe.
    pub fn from_safety_factor(safety_factor: Option<f64>) -> Self {
        match safety_factor {
            Some(sf) if sf < UNSAFE_SAFETY_FACTOR => StrengthStatus::Unsafe,
            Some(sf) if sf < MARGINAL_SAFETY_FACTOR => StrengthStatus::Marginal,
            _ => StrengthStatus::Safe,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StrengthStatus::Safe => "SAFE",
            StrengthStatus::Marginal => "MARGINAL",
            StrengthStatus::Unsafe => "UNSAFE",
        }
    }
}

impl fmt::Display for StrengthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A finding that deserves the officer's attention
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Advisory {
    /// Safety factor below the marginal threshold
    LowSafetyFactor { safety_factor: f64 },
    /// Bending stress above 80% of yield
    HighBendingStress { stress_mpa: f64, limit_mpa: f64 },
    /// Average shear stress above the web limit
    HighShearStress { stress_mpa: f64, limit_mpa: f64 },
    /// Midship deflection magnitude above L/300
    ExcessiveDeflection { deflection_mm: f64, limit_mm: f64 },
}

impl Advisory {
    /// Recommendation text
    pub fn message(&self) -> String {
        match self {
            Advisory::LowSafetyFactor { safety_factor } => format!(
                "Safety factor {:.2} is low - redistribute cargo and ballast",
                safety_factor
            ),
            Advisory::HighBendingStress { stress_mpa, limit_mpa } => format!(
                "Bending stress {:.1} MPa exceeds {:.1} MPa - structural reinforcement required",
                stress_mpa, limit_mpa
            ),
            Advisory::HighShearStress { stress_mpa, limit_mpa } => format!(
                "Shear stress {:.1} MPa exceeds {:.1} MPa - increase web thickness",
                stress_mpa, limit_mpa
            ),
            Advisory::ExcessiveDeflection { deflection_mm, limit_mm } => format!(
                "Deflection {:.0} mm exceeds {:.0} mm - increase girder stiffness",
                deflection_mm, limit_mm
            ),
        }
    }
}

/// Results from a longitudinal strength check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthResult {
    // === Load Model ===
    /// Uniform load used (kN/m)
    pub uniform_load_kn_per_m: f64,

    /// Total downward load: wL + ΣP (kN)
    pub total_load_kn: f64,

    // === Diagram ===
    /// Sampled diagram and support reactions
    pub diagram: SfbmDiagram,

    pub criticals: Criticals,

    /// Every zero-shear station (peak moment candidates)
    pub zero_shear_crossings_m: Vec<f64>,

    // === Bending Moments ===
    /// Still-water bending moment estimate (kN·m)
    pub still_water_bm_knm: f64,

    /// Wave-induced bending moment (kN·m), zero without a wave coefficient
    pub wave_bm_knm: f64,

    /// |SWBM| + |WIBM| (kN·m)
    pub design_bm_knm: f64,

    /// Largest sagging moment (kN·m, ≥ 0)
    pub max_sagging_knm: f64,

    /// Largest hogging moment magnitude (kN·m, ≥ 0)
    pub max_hogging_knm: f64,

    // === Stress Checks ===
    /// σ = design BM / Z (MPa)
    pub bending_stress_mpa: f64,

    /// τ = max |V| / A (MPa)
    pub shear_stress_mpa: f64,

    /// Yield / bending stress; `None` when there is no bending stress
    pub safety_factor: Option<f64>,

    /// Midship deflection (mm, positive downward); `None` without I
    pub deflection_mm: Option<f64>,

    pub status: StrengthStatus,

    pub advisories: Vec<Advisory>,
}

impl StrengthResult {
    /// True unless the condition is unsafe
    pub fn passes(&self) -> bool {
        self.status != StrengthStatus::Unsafe
    }

    /// Bending stress as a fraction of yield
    pub fn bending_utilization(&self, yield_strength_mpa: f64) -> f64 {
        if yield_strength_mpa > 0.0 {
            self.bending_stress_mpa / yield_strength_mpa
        } else {
            0.0
        }
    }
}

// =============================================================================
// CALCULATION
// =============================================================================

/// Run the longitudinal strength check for one loading condition.
pub fn calculate(input: &StrengthInput) -> CalcResult<StrengthResult> {
    input.validate()?;

    let g = &input.geometry;
    let w = input.uniform_load.resolve(g);
    let diagram = sample_sfbm(g.length_m, w, &input.point_loads, input.samples);

    if !diagram.is_finite() {
        return Err(CalcError::calculation_failed(
            "Longitudinal strength",
            "Diagram contains non-finite values - check load magnitudes",
        ));
    }

    let criticals = diagram.criticals();
    let zero_shear_crossings_m = zero_shear_crossings(&diagram.samples);

    let still_water_bm_knm = still_water_bm_estimate(&diagram.samples, input.prefer_midship);
    let wave_bm_knm = input
        .wave_coefficient_kn_per_m3
        .map(|c| wave_induced_bm(g.length_m, g.breadth_m, g.block_coefficient, c))
        .unwrap_or(0.0);
    let design_bm_knm = still_water_bm_knm.abs() + wave_bm_knm.abs();

    let bending_stress = bending_stress_mpa(design_bm_knm, input.section.section_modulus_m3);
    let shear_stress = shear_stress_mpa(
        criticals.max_abs_shear.value.abs(),
        input.section.shear_area_m2,
    );

    let safety_factor = (bending_stress > 0.0).then(|| input.yield_strength_mpa / bending_stress);
    let deflection_mm = input.section.moment_of_inertia_m4.map(|i| {
        midship_deflection_mm(
            g.length_m,
            w,
            &input.point_loads,
            input.section.elastic_modulus_gpa,
            i,
        )
    });
    let status = StrengthStatus::from_safety_factor(safety_factor);

    let mut advisories = Vec::new();
    if let Some(sf) = safety_factor {
        if sf < MARGINAL_SAFETY_FACTOR {
            advisories.push(Advisory::LowSafetyFactor { safety_factor: sf });
        }
    }
    let bending_limit = input.yield_strength_mpa * HIGH_BENDING_STRESS_RATIO;
    if bending_stress > bending_limit {
        advisories.push(Advisory::HighBendingStress {
            stress_mpa: bending_stress,
            limit_mpa: bending_limit,
        });
    }
    if shear_stress > HIGH_SHEAR_STRESS_MPA {
        advisories.push(Advisory::HighShearStress {
            stress_mpa: shear_stress,
            limit_mpa: HIGH_SHEAR_STRESS_MPA,
        });
    }
    if let Some(d) = deflection_mm {
        let limit_mm = g.length_m * 1000.0 / DEFLECTION_LIMIT_SPAN_RATIO;
        if d.abs() > limit_mm {
            advisories.push(Advisory::ExcessiveDeflection {
                deflection_mm: d.abs(),
                limit_mm,
            });
        }
    }

    debug!(
        "'{}': design BM {:.0} kN·m, σ = {:.1} MPa, τ = {:.1} MPa, status {}",
        input.label, design_bm_knm, bending_stress, shear_stress, status
    );
    if status == StrengthStatus::Unsafe {
        warn!(
            "'{}' is UNSAFE: bending stress {:.1} MPa against yield {:.1} MPa",
            input.label, bending_stress, input.yield_strength_mpa
        );
    }

    Ok(StrengthResult {
        uniform_load_kn_per_m: w,
        total_load_kn: diagram.reactions.total_kn(),
        max_sagging_knm: criticals.max_moment.value,
        max_hogging_knm: -criticals.min_moment.value,
        diagram,
        criticals,
        zero_shear_crossings_m,
        still_water_bm_knm,
        wave_bm_knm,
        design_bm_knm,
        bending_stress_mpa: bending_stress,
        shear_stress_mpa: shear_stress,
        safety_factor,
        deflection_mm,
        status,
        advisories,
    })
}
