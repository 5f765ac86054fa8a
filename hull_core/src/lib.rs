//! # hull_core - Hull Girder Strength Engine
//!
//! `hull_core` is the computational heart of Hullstress. It idealizes the hull
//! as a simply supported beam, samples its shear force and bending moment
//! diagram, extracts the critical values and converts them to hull girder
//! stresses. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Permissive kernel**: Malformed numbers degrade to zero instead of failing
//! - **Strict boundary**: The strength check validates and returns structured errors
//! - **JSON-First**: All types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use hull_core::calculations::{find_criticals, sample_sfbm, DEFAULT_SAMPLES};
//! use hull_core::loads::{uniform_load_from_geometry, PointLoad, SEAWATER_UNIT_WEIGHT_KN_PER_M3};
//!
//! let w = uniform_load_from_geometry(20.0, 7.0, 0.7, SEAWATER_UNIT_WEIGHT_KN_PER_M3);
//! let holds = vec![
//!     PointLoad::from_tonnes("h1", 30.0, 3500.0),
//!     PointLoad::from_tonnes("h2", 70.0, 3500.0),
//! ];
//!
//! // Buoyancy acts upward, so it enters as a negative (upward) load
//! let diagram = sample_sfbm(100.0, -w, &holds, DEFAULT_SAMPLES);
//! let criticals = find_criticals(&diagram.samples);
//!
//! println!("Peak moment: {:.0} kN·m at x = {:.1} m",
//!     criticals.max_abs_moment.value, criticals.max_abs_moment.x_m);
//! ```
//!
//! ## Modules
//!
//! - [`loads`] - Point loads and the geometry-derived uniform load
//! - [`calculations`] - Reactions, SFBM sampling, criticals, stresses, strength check
//! - [`condition`] - Loading condition documents
//! - [`file_io`] - Atomic save/load of `.hlc` files
//! - [`numeric`] - Safe numeric guards shared by every formula
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod condition;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod numeric;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, StrengthInput, StrengthResult};
pub use condition::LoadingCondition;
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_condition, save_condition};
