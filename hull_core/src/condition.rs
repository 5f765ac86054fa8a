//! # Loading Condition Documents
//!
//! A `LoadingCondition` pairs one strength input with who prepared it and
//! for which vessel. Conditions serialize to `.hlc` (hull loading condition)
//! files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! LoadingCondition
//! ├── meta: ConditionMetadata (version, vessel, condition name, timestamps)
//! └── input: StrengthInput (geometry, loads, section, limits)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use hull_core::calculations::StrengthInput;
//! use hull_core::condition::LoadingCondition;
//!
//! let condition = LoadingCondition::new("MV Example", "Ballast arrival", "C/O", StrengthInput::default());
//! let json = serde_json::to_string_pretty(&condition).unwrap();
//! assert!(json.contains("Ballast arrival"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{calculate, StrengthInput, StrengthResult};
use crate::errors::CalcResult;
use crate::loads::PointLoad;

/// Current schema version for .hlc files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// One loading condition of one vessel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadingCondition {
    pub meta: ConditionMetadata,
    pub input: StrengthInput,
}

impl LoadingCondition {
    /// Create a new condition.
    ///
    /// The input label is set to `condition_name` when it is empty.
    pub fn new(
        vessel: impl Into<String>,
        condition_name: impl Into<String>,
        prepared_by: impl Into<String>,
        mut input: StrengthInput,
    ) -> Self {
        let now = Utc::now();
        let condition_name = condition_name.into();
        if input.label.is_empty() {
            input.label = condition_name.clone();
        }
        LoadingCondition {
            meta: ConditionMetadata {
                version: SCHEMA_VERSION.to_string(),
                vessel: vessel.into(),
                condition_name,
                prepared_by: prepared_by.into(),
                created: now,
                modified: now,
            },
            input,
        }
    }

    /// Add a point load, returning its id.
    pub fn add_point_load(&mut self, load: PointLoad) -> String {
        let id = load.id.clone();
        self.input.point_loads.push(load);
        self.touch();
        id
    }

    /// Remove a point load by id.
    pub fn remove_point_load(&mut self, id: &str) -> Option<PointLoad> {
        let index = self.input.point_loads.iter().position(|p| p.id == id)?;
        self.touch();
        Some(self.input.point_loads.remove(index))
    }

    /// Run the strength check for this condition
    pub fn evaluate(&self) -> CalcResult<StrengthResult> {
        calculate(&self.input)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

/// Condition metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Vessel name
    pub vessel: String,

    /// Condition name (e.g., "Full load departure")
    pub condition_name: String,

    /// Officer or engineer who prepared the condition
    pub prepared_by: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}
