//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Design` - Calculation results (JSON-serializable)
//! - `calculate(input, settings) -> Result<*Design, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`rc_beam`] - Singly-reinforced rectangular concrete beam (flexure and shear)

pub mod rc_beam;

// Re-export commonly used types
pub use rc_beam::{design, FlexureCheck, RcBeamDesign, RcBeamInput, ShearCheck};
