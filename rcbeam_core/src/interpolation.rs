//! # Interpolation Tables
//!
//! Sorted (x, y) tables with linear interpolation between adjacent keys and
//! clamping outside the tabulated range. Design code tables (allowable shear
//! stress against percent steel, for example) are published this way.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::interpolation::{InterpolationTable, TablePoint};
//!
//! let table = InterpolationTable::new(vec![
//!     TablePoint::new(0.0, 10.0),
//!     TablePoint::new(1.0, 20.0),
//! ]).unwrap();
//!
//! assert_eq!(table.lookup(0.5), 15.0);
//! assert_eq!(table.lookup(-3.0), 10.0); // clamped low
//! assert_eq!(table.lookup(7.0), 20.0);  // clamped high
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A single tabulated (x, y) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TablePoint {
    pub x: f64,
    pub y: f64,
}

impl TablePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Lookup table with linear interpolation and boundary clamping.
///
/// Invariant: non-empty, every value finite, x strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpolationTable {
    points: Vec<TablePoint>,
}

impl InterpolationTable {
    /// Build a table from caller-supplied points, checking the invariant.
    pub fn new(points: Vec<TablePoint>) -> CalcResult<Self> {
        if points.is_empty() {
            return Err(CalcError::invalid_input(
                "table",
                "[]",
                "Interpolation table must have at least one point",
            ));
        }
        for (i, p) in points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(CalcError::invalid_input(
                    format!("table[{}]", i),
                    format!("({}, {})", p.x, p.y),
                    "Table values must be finite",
                ));
            }
        }
        for (i, pair) in points.windows(2).enumerate() {
            if pair[1].x <= pair[0].x {
                return Err(CalcError::invalid_input(
                    format!("table[{}]", i + 1),
                    pair[1].x.to_string(),
                    "Table keys must be strictly increasing",
                ));
            }
        }
        Ok(Self { points })
    }

    /// Wrap compile-time data that is already known to be sorted and finite.
    pub(crate) fn from_sorted(points: &[TablePoint]) -> Self {
        debug_assert!(!points.is_empty());
        debug_assert!(points.windows(2).all(|w| w[0].x < w[1].x));
        Self {
            points: points.to_vec(),
        }
    }

    /// Look up `x`, interpolating linearly between neighbours.
    ///
    /// - exact key: that key's value
    /// - between keys: `y1 + (y2 - y1)(x - x1)/(x2 - x1)`
    /// - below the first key or above the last: the edge value
    ///
    /// NaN compares below every key and therefore returns the first value.
    pub fn lookup(&self, x: f64) -> f64 {
        let points = &self.points;
        let last = points.len() - 1;

        // First index whose key is >= x
        let idx = points.partition_point(|p| p.x < x);
        if idx == 0 {
            return points[0].y;
        }
        if idx > last {
            return points[last].y;
        }

        let upper = points[idx];
        if upper.x == x {
            return upper.y;
        }
        let lower = points[idx - 1];
        lower.y + (upper.y - lower.y) * (x - lower.x) / (upper.x - lower.x)
    }

    /// Whether `x` lies outside the tabulated range (lookup clamps)
    pub fn is_clamped(&self, x: f64) -> bool {
        x < self.min_x() || x > self.max_x()
    }

    /// All tabulated points, sorted by key
    pub fn points(&self) -> &[TablePoint] {
        &self.points
    }

    /// Smallest tabulated key
    pub fn min_x(&self) -> f64 {
        self.points[0].x
    }

    /// Largest tabulated key
    pub fn max_x(&self) -> f64 {
        self.points[self.points.len() - 1].x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> InterpolationTable {
        InterpolationTable::new(vec![
            TablePoint::new(1.0, 10.0),
            TablePoint::new(2.0, 30.0),
            TablePoint::new(4.0, 20.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_exact_keys() {
        let t = table();
        assert_eq!(t.lookup(1.0), 10.0);
        assert_eq!(t.lookup(2.0), 30.0);
        assert_eq!(t.lookup(4.0), 20.0);
    }

    #[test]
    fn test_interpolation() {
        let t = table();
        assert!((t.lookup(1.5) - 20.0).abs() < 1e-12);
        // Decreasing segment
        assert!((t.lookup(3.0) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_clamping() {
        let t = table();
        assert_eq!(t.lookup(0.0), 10.0);
        assert_eq!(t.lookup(-100.0), 10.0);
        assert_eq!(t.lookup(4.0001), 20.0);
        assert_eq!(t.lookup(f64::INFINITY), 20.0);
        assert!(t.is_clamped(0.5));
        assert!(!t.is_clamped(4.0));
    }

    #[test]
    fn test_single_point_table() {
        let t = InterpolationTable::new(vec![TablePoint::new(5.0, 1.5)]).unwrap();
        assert_eq!(t.lookup(0.0), 1.5);
        assert_eq!(t.lookup(5.0), 1.5);
        assert_eq!(t.lookup(9.0), 1.5);
    }

    #[test]
    fn test_rejects_empty() {
        let err = InterpolationTable::new(vec![]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_rejects_unsorted_and_duplicate_keys() {
        let unsorted = InterpolationTable::new(vec![
            TablePoint::new(2.0, 1.0),
            TablePoint::new(1.0, 1.0),
        ]);
        assert!(unsorted.is_err());

        let duplicate = InterpolationTable::new(vec![
            TablePoint::new(1.0, 1.0),
            TablePoint::new(1.0, 2.0),
        ]);
        assert!(duplicate.is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        let result = InterpolationTable::new(vec![TablePoint::new(f64::NAN, 1.0)]);
        assert!(result.is_err());
    }
}
