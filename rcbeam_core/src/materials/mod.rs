//! # Materials Database
//!
//! Material data for reinforced concrete design.
//!
//! ## Material Tables
//!
//! - **Concrete**: design shear strength τc against percent tension steel
//! - **Steel**: reinforcement grades and their limiting moment factor R_lim
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::materials::{design_shear_strength, limiting_moment_factor};
//!
//! let tc = design_shear_strength(0.58);
//! assert!(tc > 0.46 && tc < 0.54);
//!
//! assert_eq!(limiting_moment_factor(415.0), 0.138);
//! ```

pub mod concrete;
pub mod steel;

// Re-export concrete table
pub use concrete::{design_shear_strength, DESIGN_SHEAR_STRENGTH};

// Re-export steel grade types
pub use steel::{limiting_moment_factor, SteelGrade, DEFAULT_LIMITING_MOMENT_FACTOR};
