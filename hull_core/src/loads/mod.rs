//! # Load Model
//!
//! Builds the load set a hull girder carries:
//!
//! - [`PointLoad`] - concentrated weights (cargo, ballast, fuel) at a position
//! - [`uniform_load_from_geometry`] - buoyancy-equivalent uniform load from B, T, Cb
//! - [`UniformLoadSource`] - upward buoyancy, geometry-derived or directly supplied uniform load
//!
//! # Example
//!
//! ```
//! use hull_core::loads::{HullGeometry, LoadKind, PointLoad, UniformLoadSource};
//!
//! let hull = HullGeometry::new(120.0, 20.0, 7.5, 0.78);
//! // Positive w is downward; the default buoyancy source resolves upward
//! let w = UniformLoadSource::default().resolve(&hull);
//!
//! let holds = vec![
//!     PointLoad::from_tonnes("h1", 30.0, 2500.0).with_kind(LoadKind::Cargo),
//!     PointLoad::from_tonnes("h2", 70.0, 2800.0).with_kind(LoadKind::Cargo),
//! ];
//! assert!(w < 0.0);
//! assert_eq!(holds.len(), 2);
//! ```

pub mod distributed;
pub mod point_load;

pub use distributed::{
    uniform_load_from_geometry,
    HullGeometry,
    UniformLoadSource,
    SEAWATER_UNIT_WEIGHT_KN_PER_M3,
};
pub use point_load::{
    duplicate_ids,
    sorted_by_position,
    total_magnitude_kn,
    LoadKind,
    PointLoad,
};
