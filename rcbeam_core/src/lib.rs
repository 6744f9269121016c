//! # rcbeam_core - Reinforced Concrete Beam Design Engine
//!
//! `rcbeam_core` designs singly-reinforced rectangular concrete beams: it
//! sizes the tension steel, checks the section against its limiting moment,
//! and checks shear against the allowable concrete shear stress, reporting
//! stirrup spacing when the concrete alone is not enough. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit Inputs**: The calculator takes every design value; defaults
//!   live at the request boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use rcbeam_core::{design, RcBeamInput};
//!
//! let input = RcBeamInput::new(300.0, 500.0, 40.0, 20.0, 415.0, 100.0);
//! let result = design(&input).unwrap();
//!
//! println!("{} bars of {} mm", result.num_bars, result.bar_dia_mm);
//!
//! // Serialize to JSON for a web layer or an LLM
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The beam design calculation
//! - [`interpolation`] - Sorted lookup tables with linear interpolation
//! - [`materials`] - Concrete shear strength table and steel grades
//! - [`request`] - Loosely-typed JSON requests and the response envelope
//! - [`settings`] - Bar and stirrup detailing settings (TOML)
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod interpolation;
pub mod materials;
pub mod request;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::rc_beam::{calculate, design, RcBeamDesign, RcBeamInput};
pub use errors::{CalcError, CalcResult};
pub use request::{handle_request, DesignRequest, DesignResponse};
pub use settings::{load_settings, DesignSettings};
