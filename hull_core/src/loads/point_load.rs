//! Point Loads
//!
//! Concentrated weights (cargo holds, ballast tanks, bunkers) placed along the
//! hull girder. Positions are measured from support A (x = 0, aft end).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::units::{KiloNewtons, Tonnes};

// ============================================================================
// Load Kind
// ============================================================================

/// What a point load represents on board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoadKind {
    Cargo,
    Ballast,
    Fuel,
    Structure,
    #[default]
    Other,
}

impl LoadKind {
    /// All kinds, in display order
    pub const ALL: [LoadKind; 5] = [
        LoadKind::Cargo,
        LoadKind::Ballast,
        LoadKind::Fuel,
        LoadKind::Structure,
        LoadKind::Other,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadKind::Cargo => "Cargo",
            LoadKind::Ballast => "Ballast",
            LoadKind::Fuel => "Fuel",
            LoadKind::Structure => "Structure",
            LoadKind::Other => "Other",
        }
    }
}

impl std::fmt::Display for LoadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Point Load
// ============================================================================

/// A concentrated force at a single station along the beam.
///
/// ## JSON Example
///
/// ```json
/// { "id": "hold-2", "position_m": 48.0, "magnitude_kn": 9810.0, "label": "No.2 Hold", "kind": "Cargo" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Identifier, unique within a request
    pub id: String,

    /// Distance from support A (m)
    pub position_m: f64,

    /// Force (kN), positive = downward
    pub magnitude_kn: f64,

    /// Optional user label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default)]
    pub kind: LoadKind,
}

impl PointLoad {
    /// Create a point load with an explicit id
    pub fn new(id: impl Into<String>, position_m: f64, magnitude_kn: f64) -> Self {
        PointLoad {
            id: id.into(),
            position_m,
            magnitude_kn,
            label: None,
            kind: LoadKind::Other,
        }
    }

    /// Create a point load with a random UUID id
    pub fn with_generated_id(position_m: f64, magnitude_kn: f64) -> Self {
        Self::new(Uuid::new_v4().to_string(), position_m, magnitude_kn)
    }

    /// Create a point load from a mass in tonnes (g = 9.81 m/s²)
    ///
    /// ```rust
    /// use hull_core::loads::PointLoad;
    ///
    /// let hold = PointLoad::from_tonnes("hold-1", 20.0, 1000.0);
    /// assert!((hold.magnitude_kn - 9810.0).abs() < 1e-9);
    /// ```
    pub fn from_tonnes(id: impl Into<String>, position_m: f64, mass_t: f64) -> Self {
        let force: KiloNewtons = Tonnes(mass_t).into();
        Self::new(id, position_m, force.value())
    }

    /// Set label and return self (builder pattern)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set kind and return self (builder pattern)
    pub fn with_kind(mut self, kind: LoadKind) -> Self {
        self.kind = kind;
        self
    }

    /// A load takes part in superposition only when both its position and
    /// magnitude are finite numbers.
    pub fn is_effective(&self) -> bool {
        self.position_m.is_finite() && self.magnitude_kn.is_finite()
    }

    /// Label if present, otherwise the id
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// Stable ascending sort by position.
///
/// Ties keep input order. Non-finite positions sort after every finite one,
/// so a scan that stops at the first load beyond `x` never reaches them.
pub fn sorted_by_position(loads: &[PointLoad]) -> Vec<PointLoad> {
    let mut sorted = loads.to_vec();
    sorted.sort_by(|a, b| position_key(a).total_cmp(&position_key(b)));
    sorted
}

fn position_key(load: &PointLoad) -> f64 {
    if load.position_m.is_finite() {
        load.position_m
    } else {
        f64::INFINITY
    }
}

/// Sum of effective point-load magnitudes (kN)
pub fn total_magnitude_kn(loads: &[PointLoad]) -> f64 {
    loads
        .iter()
        .filter(|p| p.is_effective())
        .map(|p| p.magnitude_kn)
        .sum()
}

/// Ids that occur more than once, in first-repeat order
pub fn duplicate_ids(loads: &[PointLoad]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for load in loads {
        if !seen.insert(load.id.as_str()) && !duplicates.contains(&load.id) {
            duplicates.push(load.id.clone());
        }
    }
    duplicates
}
