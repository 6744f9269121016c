//! Design Shear Strength of Concrete
//!
//! Allowable shear stress τc (N/mm²) carried by the concrete alone, tabulated
//! against the percentage of tension steel 100·Ast/(b·d). The values are the
//! grade-independent column used for the design chain; intermediate
//! percentages interpolate linearly and percentages outside the table clamp
//! to the nearest edge.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::materials::concrete::design_shear_strength;
//!
//! assert_eq!(design_shear_strength(1.0), 0.62);
//! assert_eq!(design_shear_strength(5.0), 0.93); // clamped at 3 %
//! ```

use once_cell::sync::Lazy;

use crate::interpolation::{InterpolationTable, TablePoint};

/// Percent steel → τc (N/mm²)
pub const DESIGN_SHEAR_STRENGTH_POINTS: [TablePoint; 9] = [
    TablePoint::new(0.15, 0.28),
    TablePoint::new(0.25, 0.36),
    TablePoint::new(0.50, 0.46),
    TablePoint::new(0.75, 0.54),
    TablePoint::new(1.00, 0.62),
    TablePoint::new(1.25, 0.68),
    TablePoint::new(1.50, 0.74),
    TablePoint::new(2.00, 0.82),
    TablePoint::new(3.00, 0.93),
];

/// Built-in design shear strength table
pub static DESIGN_SHEAR_STRENGTH: Lazy<InterpolationTable> =
    Lazy::new(|| InterpolationTable::from_sorted(&DESIGN_SHEAR_STRENGTH_POINTS));

/// Allowable concrete shear stress τc (N/mm²) for a given percent steel
pub fn design_shear_strength(percent_steel: f64) -> f64 {
    DESIGN_SHEAR_STRENGTH.lookup(percent_steel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let checked = InterpolationTable::new(DESIGN_SHEAR_STRENGTH_POINTS.to_vec());
        assert!(checked.is_ok());
        assert_eq!(checked.unwrap(), *DESIGN_SHEAR_STRENGTH);
    }

    #[test]
    fn test_every_key_is_exact() {
        for p in DESIGN_SHEAR_STRENGTH_POINTS {
            assert_eq!(design_shear_strength(p.x), p.y);
        }
    }

    #[test]
    fn test_minimum_key() {
        assert_eq!(design_shear_strength(0.15), 0.28);
    }

    #[test]
    fn test_interpolates_between_quarter_and_half_percent() {
        // 0.36 + (0.46 - 0.36)(0.4 - 0.25)/(0.5 - 0.25) = 0.42
        let tc = design_shear_strength(0.4);
        assert!((tc - 0.42).abs() < 1e-12);
        assert!(tc > 0.36 && tc < 0.46);
    }

    #[test]
    fn test_clamps() {
        assert_eq!(design_shear_strength(0.0), 0.28);
        assert_eq!(design_shear_strength(0.1), 0.28);
        assert_eq!(design_shear_strength(3.5), 0.93);
        assert_eq!(design_shear_strength(100.0), 0.93);
    }

    proptest! {
        #[test]
        fn test_clamp_low(x in -10.0f64..=0.15) {
            prop_assert_eq!(design_shear_strength(x), design_shear_strength(0.15));
        }

        #[test]
        fn test_clamp_high(x in 3.0f64..1.0e6) {
            prop_assert_eq!(design_shear_strength(x), design_shear_strength(3.0));
        }

        #[test]
        fn test_interpolation_stays_between_neighbours(seg in 0usize..8, t in 0.0f64..1.0) {
            let lo = DESIGN_SHEAR_STRENGTH_POINTS[seg];
            let hi = DESIGN_SHEAR_STRENGTH_POINTS[seg + 1];
            let x = lo.x + t * (hi.x - lo.x);
            let y = design_shear_strength(x);
            prop_assert!(y >= lo.y.min(hi.y) - 1e-12);
            prop_assert!(y <= lo.y.max(hi.y) + 1e-12);
        }

        #[test]
        fn test_monotonic_non_decreasing(a in 0.0f64..4.0, b in 0.0f64..4.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(design_shear_strength(lo) <= design_shear_strength(hi) + 1e-12);
        }
    }
}
