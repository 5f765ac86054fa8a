//! # Unit Types
//!
//! Type-safe wrappers for the SI units used in hull girder calculations.
//! They are plain f64 newtypes so JSON stays clean (just numbers).
//!
//! ## SI Units
//!
//! - Mass: tonnes (t), converted to force with g = 9.81 m/s²
//! - Force: kilonewtons (kN)
//! - Stress: kilopascals (kPa = kN/m²), megapascals (MPa = N/mm²)
//! - Section modulus: cm³ (as tabulated by class societies), m³ (as used in σ = M/Z)
//!
//! ## Example
//!
//! ```rust
//! use hull_core::units::{KiloNewtons, Kilopascals, MegaPascals, Tonnes};
//!
//! let weight: KiloNewtons = Tonnes(100.0).into();
//! assert!((weight.0 - 981.0).abs() < 1e-9);
//!
//! let stress: MegaPascals = Kilopascals(1500.0).into();
//! assert_eq!(stress.0, 1.5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Standard gravitational acceleration (m/s²)
pub const GRAVITY_M_PER_S2: f64 = 9.81;

// ============================================================================
// Mass and Force Units
// ============================================================================

/// Mass in metric tonnes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tonnes(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<Tonnes> for KiloNewtons {
    fn from(t: Tonnes) -> Self {
        KiloNewtons(t.0 * GRAVITY_M_PER_S2)
    }
}

impl From<KiloNewtons> for Tonnes {
    fn from(kn: KiloNewtons) -> Self {
        Tonnes(kn.0 / GRAVITY_M_PER_S2)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in kilopascals (kN/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilopascals(pub f64);

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

impl From<Kilopascals> for MegaPascals {
    fn from(kpa: Kilopascals) -> Self {
        MegaPascals(kpa.0 / 1000.0)
    }
}

impl From<MegaPascals> for Kilopascals {
    fn from(mpa: MegaPascals) -> Self {
        Kilopascals(mpa.0 * 1000.0)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Section modulus in cm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicCentimeters(pub f64);

/// Section modulus in m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

impl From<CubicCentimeters> for CubicMeters {
    fn from(cm3: CubicCentimeters) -> Self {
        CubicMeters(cm3.0 / 1.0e6)
    }
}

impl From<CubicMeters> for CubicCentimeters {
    fn from(m3: CubicMeters) -> Self {
        CubicCentimeters(m3.0 * 1.0e6)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Tonnes);
impl_arithmetic!(KiloNewtons);
impl_arithmetic!(Kilopascals);
impl_arithmetic!(MegaPascals);
impl_arithmetic!(CubicCentimeters);
impl_arithmetic!(CubicMeters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tonnes_to_kilonewtons() {
        let kn: KiloNewtons = Tonnes(1000.0).into();
        assert!((kn.0 - 9810.0).abs() < 1e-9);

        let back: Tonnes = kn.into();
        assert!((back.0 - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_kpa_to_mpa() {
        let mpa: MegaPascals = Kilopascals(235_000.0).into();
        assert_eq!(mpa.0, 235.0);
    }

    #[test]
    fn test_section_modulus_conversion() {
        let z: CubicMeters = CubicCentimeters(2_500_000.0).into();
        assert!((z.0 - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = KiloNewtons(10.0);
        let b = KiloNewtons(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).value(), 20.0);
        assert_eq!((a / 2.0).value(), 5.0);
    }

    #[test]
    fn test_serialization() {
        let t = Tonnes(12.5);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Tonnes = serde_json::from_str(&json).unwrap();
        assert_eq!(t, roundtrip);
    }
}
