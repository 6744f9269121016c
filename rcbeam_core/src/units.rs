//! # Unit Types
//!
//! Type-safe wrappers for the fixed unit set used by the design chain. These
//! stay lightweight (just f64 wrappers) and serialize as bare numbers.
//!
//! ## SI Units
//!
//! rcbeam works in the units customary for reinforced concrete design:
//! - Length: millimetres (mm)
//! - Area: square millimetres (mm²)
//! - Stress: newtons per square millimetre (N/mm², numerically MPa)
//! - Moment: kilonewton-metres (kN·m) at the boundary, newton-millimetres
//!   (N·mm) inside the flexural formulas
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::units::{KnM, Millimeters, NMm};
//!
//! let moment = KnM(100.0);
//! let moment_nmm: NMm = moment.into();
//! assert_eq!(moment_nmm.0, 100.0e6);
//!
//! let bar = Millimeters(16.0);
//! assert!((bar.circle_area().0 - 201.06).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

// ============================================================================
// Length and Area Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

impl Millimeters {
    /// Area of a circle with this diameter (bar or stirrup leg): πd²/4
    pub fn circle_area(self) -> SqMm {
        SqMm(PI * self.0.powi(2) / 4.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NMm(pub f64);

impl From<KnM> for NMm {
    fn from(knm: KnM) -> Self {
        NMm(knm.0 * 1.0e6)
    }
}

impl From<NMm> for KnM {
    fn from(nmm: NMm) -> Self {
        KnM(nmm.0 / 1.0e6)
    }
}

macro_rules! impl_value {
    ($($type:ty),*) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )*
    };
}

impl_value!(Millimeters, SqMm, KnM, NMm);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knm_to_nmm() {
        let m = KnM(2.5);
        let nmm: NMm = m.into();
        assert_eq!(nmm.0, 2.5e6);

        let back: KnM = nmm.into();
        assert_eq!(back.0, 2.5);
    }

    #[test]
    fn test_circle_area() {
        // 8 mm stirrup leg: π·64/4 = 50.27 mm²
        let leg = Millimeters(8.0).circle_area();
        assert!((leg.value() - 50.265).abs() < 0.001);
    }

    #[test]
    fn test_value() {
        assert_eq!(KnM(175.2).value(), 175.2);
        assert_eq!(NMm::from(KnM(1.5)).value(), 1.5e6);
    }

    #[test]
    fn test_serialization() {
        let d = Millimeters(460.0);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "460.0");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(d, roundtrip);
    }
}
