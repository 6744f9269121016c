//! Reinforcing Steel Grades
//!
//! Known reinforcement grades and the limiting moment factor
//! R_lim = Mu,lim / (fck·b·d²) each one allows for a singly-reinforced
//! rectangular section.
//!
//! ## Supported Grades
//!
//! | Grade  | fy (N/mm²) | R_lim |
//! |--------|------------|-------|
//! | Fe 415 | 415        | 0.138 |
//! | Fe 500 | 500        | 0.149 |
//!
//! Any other yield strength falls back to
//! [`DEFAULT_LIMITING_MOMENT_FACTOR`] (0.138). New grades go in
//! [`SteelGrade::ALL`] together with their factor.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::materials::steel::{limiting_moment_factor, SteelGrade};
//!
//! assert_eq!(SteelGrade::from_yield_strength(500.0), Some(SteelGrade::Fe500));
//! assert_eq!(limiting_moment_factor(500.0), 0.149);
//! assert_eq!(limiting_moment_factor(600.0), 0.138); // unlisted, default
//! ```

use serde::{Deserialize, Serialize};

/// R_lim used when fy does not match a known grade
pub const DEFAULT_LIMITING_MOMENT_FACTOR: f64 = 0.138;

/// Reinforcing steel grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// High-yield deformed bars, fy = 415 N/mm²
    Fe415,
    /// High-yield deformed bars, fy = 500 N/mm²
    Fe500,
}

impl SteelGrade {
    /// All tabulated grades
    pub const ALL: [SteelGrade; 2] = [SteelGrade::Fe415, SteelGrade::Fe500];

    /// Characteristic yield strength fy (N/mm²)
    pub fn yield_strength_mpa(&self) -> f64 {
        match self {
            SteelGrade::Fe415 => 415.0,
            SteelGrade::Fe500 => 500.0,
        }
    }

    /// Limiting moment factor R_lim
    pub fn limiting_moment_factor(&self) -> f64 {
        match self {
            SteelGrade::Fe415 => 0.138,
            SteelGrade::Fe500 => 0.149,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::Fe415 => "Fe 415",
            SteelGrade::Fe500 => "Fe 500",
        }
    }

    /// Find the grade whose yield strength is exactly `fy_mpa`
    pub fn from_yield_strength(fy_mpa: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|grade| grade.yield_strength_mpa() == fy_mpa)
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// R_lim for a yield strength, falling back to the default for unlisted fy
pub fn limiting_moment_factor(fy_mpa: f64) -> f64 {
    SteelGrade::from_yield_strength(fy_mpa)
        .map(|grade| grade.limiting_moment_factor())
        .unwrap_or(DEFAULT_LIMITING_MOMENT_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_grades() {
        assert_eq!(limiting_moment_factor(415.0), 0.138);
        assert_eq!(limiting_moment_factor(500.0), 0.149);
    }

    #[test]
    fn test_unlisted_grade_falls_back() {
        assert_eq!(SteelGrade::from_yield_strength(600.0), None);
        assert_eq!(limiting_moment_factor(600.0), DEFAULT_LIMITING_MOMENT_FACTOR);
        assert_eq!(limiting_moment_factor(250.0), 0.138);
        // Near misses are not rounded onto a grade
        assert_eq!(SteelGrade::from_yield_strength(499.9), None);
    }

    #[test]
    fn test_grade_roundtrip_through_fy() {
        for grade in SteelGrade::ALL {
            assert_eq!(SteelGrade::from_yield_strength(grade.yield_strength_mpa()), Some(grade));
        }
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(SteelGrade::Fe500.to_string(), "Fe 500");
        assert_eq!(serde_json::to_string(&SteelGrade::Fe415).unwrap(), "\"Fe415\"");
    }
}
