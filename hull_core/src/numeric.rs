//! # Safe Numeric Helpers
//!
//! Every input guard in the SFBM kernel goes through these combinators, so a
//! value is either accepted as a usable number or degraded the same way in
//! every formula.
//!
//! ```rust
//! use hull_core::numeric::{finite_or_zero, finite_positive};
//!
//! assert_eq!(finite_positive(12.5), Some(12.5));
//! assert_eq!(finite_positive(0.0), None);
//! assert_eq!(finite_or_zero(f64::NAN), 0.0);
//! ```

/// `Some(x)` when `x` is finite.
#[inline]
pub fn finite(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}

/// `Some(x)` when `x` is finite and strictly positive.
#[inline]
pub fn finite_positive(x: f64) -> Option<f64> {
    finite(x).filter(|v| *v > 0.0)
}

/// `x` when finite, otherwise `0.0`.
#[inline]
pub fn finite_or_zero(x: f64) -> f64 {
    finite(x).unwrap_or(0.0)
}

/// A length usable as a beam span: finite values below zero clamp to zero.
#[inline]
pub fn non_negative_length(x: f64) -> f64 {
    finite_or_zero(x).max(0.0)
}
