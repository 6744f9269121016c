//! # Singly-Reinforced Concrete Beam Design
//!
//! Sizes the tension reinforcement of a rectangular reinforced concrete
//! section and checks it in shear, using limit state formulas.
//!
//! ## Assumptions
//!
//! - Rectangular section, tension steel only (singly reinforced)
//! - Lever arm approximated as z = 0.9·d
//! - Shear demand approximated from the moment: Vu = Mu / d × 1000
//! - One bar diameter for all tension bars, one stirrup diameter
//! - Allowable concrete shear stress τc from the design shear strength table
//!
//! ## Units
//!
//! Lengths in mm, stresses in N/mm², moments in kN·m at the boundary.
//! `Mu_lim` is reported in N·mm (and kN·m for display).
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::calculations::rc_beam::{design, RcBeamInput, FlexureCheck};
//!
//! // 300 x 500 beam, 40 mm cover, M20 concrete, Fe 415 steel, Mu = 100 kN·m
//! let input = RcBeamInput::new(300.0, 500.0, 40.0, 20.0, 415.0, 100.0);
//!
//! let result = design(&input).unwrap();
//!
//! assert_eq!(result.effective_depth_mm, 460.0);
//! assert_eq!(result.flexure_check, FlexureCheck::UnderReinforced);
//! assert_eq!(result.num_bars, 4);
//! assert!(result.spacing_required_mm.is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{
    design_shear_strength, limiting_moment_factor, SteelGrade, DESIGN_SHEAR_STRENGTH,
};
use crate::settings::DesignSettings;
use crate::units::{KnM, Millimeters, NMm};

/// Lever arm as a fraction of effective depth
const LEVER_ARM_FACTOR: f64 = 0.9;

/// Partial safety factor applied to steel yield (0.87 fy)
const STEEL_DESIGN_FACTOR: f64 = 0.87;

/// Minimum tension steel coefficient: Ast,min = 0.85·b·d / fy
const MIN_STEEL_COEFFICIENT: f64 = 0.85;

/// Maximum stirrup spacing as a fraction of effective depth
const MAX_SPACING_DEPTH_FACTOR: f64 = 0.75;

/// Largest bar count that converts to and from f64 exactly (2^53)
const MAX_BAR_COUNT: u64 = 1 << 53;

/// Input parameters for a singly-reinforced rectangular beam.
///
/// All six design values are required; defaults belong to the caller
/// (see [`crate::request`]).
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "width_mm": 300.0,
///   "depth_mm": 500.0,
///   "cover_mm": 40.0,
///   "fck_mpa": 20.0,
///   "fy_mpa": 415.0,
///   "moment_knm": 100.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcBeamInput {
    /// User label for this beam (e.g., "B-1")
    #[serde(default)]
    pub label: String,

    /// Section width b (mm)
    pub width_mm: f64,

    /// Overall section depth D (mm)
    pub depth_mm: f64,

    /// Effective cover to the centroid of tension steel (mm)
    pub cover_mm: f64,

    /// Characteristic compressive strength of concrete fck (N/mm²)
    pub fck_mpa: f64,

    /// Yield strength of reinforcing steel fy (N/mm²)
    pub fy_mpa: f64,

    /// Design (ultimate) bending moment Mu (kN·m)
    pub moment_knm: f64,
}

impl RcBeamInput {
    /// Create an unlabelled input from the six design values.
    pub fn new(
        width_mm: f64,
        depth_mm: f64,
        cover_mm: f64,
        fck_mpa: f64,
        fy_mpa: f64,
        moment_knm: f64,
    ) -> Self {
        Self {
            label: String::new(),
            width_mm,
            depth_mm,
            cover_mm,
            fck_mpa,
            fy_mpa,
            moment_knm,
        }
    }

    /// Attach a label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Validate input parameters.
    ///
    /// Every value must be finite and positive, and the cover must leave a
    /// positive effective depth.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("width_mm", self.width_mm),
            ("depth_mm", self.depth_mm),
            ("cover_mm", self.cover_mm),
            ("fck_mpa", self.fck_mpa),
            ("fy_mpa", self.fy_mpa),
            ("moment_knm", self.moment_knm),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be a finite number",
                ));
            }
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be positive",
                ));
            }
        }
        if self.cover_mm >= self.depth_mm {
            return Err(CalcError::invalid_input(
                "cover_mm",
                self.cover_mm.to_string(),
                format!(
                    "Cover must be less than overall depth ({} mm)",
                    self.depth_mm
                ),
            ));
        }
        Ok(())
    }

    /// Effective depth d = D - cover (mm)
    pub fn effective_depth_mm(&self) -> f64 {
        self.depth_mm - self.cover_mm
    }

    /// Steel grade matching fy, if it is a tabulated one
    pub fn steel_grade(&self) -> Option<SteelGrade> {
        SteelGrade::from_yield_strength(self.fy_mpa)
    }
}

/// Outcome of the limiting moment check.
///
/// Serializes to the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlexureCheck {
    /// Mu ≤ Mu,lim: steel yields before concrete crushes
    #[serde(rename = "OK - Under-reinforced")]
    UnderReinforced,
    /// Mu > Mu,lim: section needs resizing or compression steel
    #[serde(rename = "FAIL - Over-reinforced")]
    OverReinforced,
}

impl FlexureCheck {
    pub fn message(&self) -> &'static str {
        match self {
            FlexureCheck::UnderReinforced => "OK - Under-reinforced",
            FlexureCheck::OverReinforced => "FAIL - Over-reinforced",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, FlexureCheck::UnderReinforced)
    }
}

impl std::fmt::Display for FlexureCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Outcome of the nominal shear stress check.
///
/// Serializes to the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShearCheck {
    /// τv ≤ τc: concrete alone carries the shear
    #[serde(rename = "Shear OK (no additional shear design needed)")]
    ConcreteSufficient,
    /// τv > τc: stirrups must carry the excess
    #[serde(rename = "Additional shear reinforcement required")]
    ReinforcementRequired,
}

impl ShearCheck {
    pub fn message(&self) -> &'static str {
        match self {
            ShearCheck::ConcreteSufficient => "Shear OK (no additional shear design needed)",
            ShearCheck::ReinforcementRequired => "Additional shear reinforcement required",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ShearCheck::ConcreteSufficient)
    }
}

impl std::fmt::Display for ShearCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Results from a beam design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "effective_depth_mm": 460.0,
///   "moment_knm": 100.0,
///   "shear_vu_kn": 217.39,
///   "lever_arm_mm": 414.0,
///   "steel_grade": "Fe415",
///   "r_lim": 0.138,
///   "mu_lim_nmm": 175204800.0,
///   "mu_lim_knm": 175.2,
///   "flexure_check": "OK - Under-reinforced",
///   "ast_required_mm2": 669.01,
///   "ast_min_mm2": 282.65,
///   "ast_use_mm2": 669.01,
///   "bar_dia_mm": 16.0,
///   "bar_area_mm2": 201.06,
///   "num_bars": 4,
///   "ast_provided_mm2": 804.25,
///   "percent_steel": 0.583,
///   "tau_v_mpa": 0.0016,
///   "tc_mpa": 0.486,
///   "shear_check": "Shear OK (no additional shear design needed)",
///   "stirrup_dia_mm": 8.0,
///   "stirrup_legs": 2,
///   "stirrup_area_single_mm2": 50.27,
///   "stirrup_area_total_mm2": 100.53,
///   "spacing_required_mm": null,
///   "max_spacing_mm": 150.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcBeamDesign {
    // === Geometry ===
    /// Effective depth d = D - cover (mm)
    pub effective_depth_mm: f64,

    /// Design moment Mu as given (kN·m)
    pub moment_knm: f64,

    /// Approximate shear demand Vu = Mu / d × 1000 (kN)
    ///
    /// Mu in kN·m over d in metres. A simplification derived from the
    /// moment, not a shear analysis. τv divides this value by b·d as is.
    pub shear_vu_kn: f64,

    /// Lever arm z = 0.9·d (mm)
    pub lever_arm_mm: f64,

    // === Flexure ===
    /// Tabulated steel grade, `None` when fy is not a listed grade
    pub steel_grade: Option<SteelGrade>,

    /// Limiting moment factor R_lim
    pub r_lim: f64,

    /// Limiting moment of resistance Mu,lim = R_lim·fck·b·d² (N·mm)
    pub mu_lim_nmm: f64,

    /// Mu,lim in kN·m
    pub mu_lim_knm: f64,

    /// Under/over-reinforced status
    pub flexure_check: FlexureCheck,

    // === Tension Reinforcement ===
    /// Ast,req = Mu / (0.87·fy·z) (mm²)
    pub ast_required_mm2: f64,

    /// Ast,min = 0.85·b·d / fy (mm²)
    pub ast_min_mm2: f64,

    /// Governing area max(Ast,req, Ast,min) (mm²)
    pub ast_use_mm2: f64,

    /// Main bar diameter (mm)
    pub bar_dia_mm: f64,

    /// Area of one main bar (mm²)
    pub bar_area_mm2: f64,

    /// Number of bars, rounded up
    pub num_bars: u64,

    /// Area provided by `num_bars` bars (mm²)
    pub ast_provided_mm2: f64,

    /// 100·Ast,prov / (b·d)
    pub percent_steel: f64,

    // === Shear ===
    /// Nominal shear stress τv = Vu / (b·d)
    pub tau_v_mpa: f64,

    /// Allowable concrete shear stress τc at `percent_steel` (N/mm²)
    pub tc_mpa: f64,

    /// Whether stirrups beyond the minimum are needed
    pub shear_check: ShearCheck,

    /// Stirrup diameter (mm)
    pub stirrup_dia_mm: f64,

    /// Number of stirrup legs
    pub stirrup_legs: u32,

    /// Area of one stirrup leg (mm²)
    pub stirrup_area_single_mm2: f64,

    /// Area of all legs, Asv (mm²)
    pub stirrup_area_total_mm2: f64,

    /// Stirrup spacing sv = 0.87·fy·Asv·d / Vus (mm)
    ///
    /// `None` when τv ≤ τc (no shear reinforcement required), which is
    /// distinct from a zero spacing.
    pub spacing_required_mm: Option<f64>,

    /// Maximum stirrup spacing min(b/2, 0.75·d) (mm), always reported
    pub max_spacing_mm: f64,
}

impl RcBeamDesign {
    /// Under-reinforced and no shear reinforcement needed beyond detailing
    pub fn passes(&self) -> bool {
        self.flexure_check.is_ok() && self.shear_check.is_ok()
    }

    /// Whether stirrups must be designed for the excess shear
    pub fn needs_shear_reinforcement(&self) -> bool {
        self.spacing_required_mm.is_some()
    }

    /// Spacing to detail: the smaller of required and maximum spacing
    pub fn governing_spacing_mm(&self) -> f64 {
        match self.spacing_required_mm {
            Some(required) => required.min(self.max_spacing_mm),
            None => self.max_spacing_mm,
        }
    }
}

/// Design a beam with the default reinforcement settings
/// (16 mm bars, 2-legged 8 mm stirrups).
pub fn design(input: &RcBeamInput) -> CalcResult<RcBeamDesign> {
    calculate(input, &DesignSettings::default())
}

/// Design a singly-reinforced beam.
///
/// This is a pure function: the same input and settings always give the
/// same result.
///
/// # Arguments
///
/// * `input` - Section, materials and design moment
/// * `settings` - Bar and stirrup detailing
///
/// # Returns
///
/// * `Ok(RcBeamDesign)` - Flexure and shear results
/// * `Err(CalcError)` - Invalid input or settings, or a degenerate shear step
///
/// # Example
///
/// ```rust
/// use rcbeam_core::calculations::rc_beam::{calculate, RcBeamInput};
/// use rcbeam_core::settings::DesignSettings;
///
/// let settings = DesignSettings { main_bar_dia_mm: 20.0, ..Default::default() };
/// let input = RcBeamInput::new(300.0, 500.0, 40.0, 20.0, 415.0, 100.0);
///
/// let result = calculate(&input, &settings).expect("Design should succeed");
/// assert_eq!(result.bar_dia_mm, 20.0);
/// assert!(result.ast_provided_mm2 >= result.ast_use_mm2);
/// ```
pub fn calculate(input: &RcBeamInput, settings: &DesignSettings) -> CalcResult<RcBeamDesign> {
    input.validate()?;
    settings.validate()?;

    let b = input.width_mm;
    let fck = input.fck_mpa;
    let fy = input.fy_mpa;
    let mu = input.moment_knm;

    // === Geometry and Demand ===
    let d_eff = input.effective_depth_mm();
    let shear_vu_kn = mu / d_eff * 1000.0;
    let lever_arm_mm = LEVER_ARM_FACTOR * d_eff;

    // === Limiting Moment ===
    let steel_grade = input.steel_grade();
    let r_lim = limiting_moment_factor(fy);
    if steel_grade.is_none() {
        tracing::debug!(fy_mpa = fy, r_lim, "fy is not a tabulated grade, using default R_lim");
    }

    let mu_lim = NMm(r_lim * fck * b * d_eff.powi(2));
    let mu_nmm: NMm = KnM(mu).into();
    let flexure_check = if mu_nmm <= mu_lim {
        FlexureCheck::UnderReinforced
    } else {
        FlexureCheck::OverReinforced
    };

    // === Tension Steel ===
    let ast_required_mm2 = mu_nmm.value() / (STEEL_DESIGN_FACTOR * fy * lever_arm_mm);
    let ast_min_mm2 = MIN_STEEL_COEFFICIENT * b * d_eff / fy;
    let ast_use_mm2 = ast_required_mm2.max(ast_min_mm2);

    let bar_area_mm2 = Millimeters(settings.main_bar_dia_mm).circle_area().value();
    let num_bars = bar_count(ast_use_mm2, bar_area_mm2)?;
    let ast_provided_mm2 = num_bars as f64 * bar_area_mm2;
    let percent_steel = ast_provided_mm2 / (b * d_eff) * 100.0;

    // === Shear ===
    let tau_v_mpa = shear_vu_kn / (b * d_eff);
    let tc_mpa = design_shear_strength(percent_steel);
    if DESIGN_SHEAR_STRENGTH.is_clamped(percent_steel) {
        tracing::debug!(
            percent_steel,
            tc_mpa,
            "percent steel outside shear strength table, τc clamped"
        );
    }
    let shear_check = if tau_v_mpa <= tc_mpa {
        ShearCheck::ConcreteSufficient
    } else {
        ShearCheck::ReinforcementRequired
    };

    let stirrup_area_single_mm2 = Millimeters(settings.stirrup_dia_mm).circle_area().value();
    let stirrup_area_total_mm2 = f64::from(settings.stirrup_legs) * stirrup_area_single_mm2;

    let spacing_required_mm = match shear_check {
        ShearCheck::ConcreteSufficient => None,
        ShearCheck::ReinforcementRequired => {
            let vus = (tau_v_mpa - tc_mpa) * b * d_eff;
            if !(vus > 0.0 && vus.is_finite()) {
                return Err(CalcError::calculation_failed(
                    "Stirrup spacing",
                    format!("Shear carried by stirrups is {}; cannot compute spacing", vus),
                ));
            }
            let spacing = STEEL_DESIGN_FACTOR * fy * stirrup_area_total_mm2 * d_eff / vus;
            if !spacing.is_finite() {
                return Err(CalcError::calculation_failed(
                    "Stirrup spacing",
                    format!("Spacing evaluated to {}", spacing),
                ));
            }
            Some(spacing)
        }
    };

    let max_spacing_mm = (b / 2.0).min(MAX_SPACING_DEPTH_FACTOR * d_eff);

    tracing::debug!(
        label = %input.label,
        d_eff,
        num_bars,
        percent_steel,
        tau_v_mpa,
        tc_mpa,
        flexure = %flexure_check,
        shear = %shear_check,
        "beam design complete"
    );

    Ok(RcBeamDesign {
        effective_depth_mm: d_eff,
        moment_knm: mu,
        shear_vu_kn,
        lever_arm_mm,
        steel_grade,
        r_lim,
        mu_lim_nmm: mu_lim.value(),
        mu_lim_knm: KnM::from(mu_lim).value(),
        flexure_check,
        ast_required_mm2,
        ast_min_mm2,
        ast_use_mm2,
        bar_dia_mm: settings.main_bar_dia_mm,
        bar_area_mm2,
        num_bars,
        ast_provided_mm2,
        percent_steel,
        tau_v_mpa,
        tc_mpa,
        shear_check,
        stirrup_dia_mm: settings.stirrup_dia_mm,
        stirrup_legs: settings.stirrup_legs,
        stirrup_area_single_mm2,
        stirrup_area_total_mm2,
        spacing_required_mm,
        max_spacing_mm,
    })
}

/// Bars needed so that `count × bar_area >= area`.
///
/// Fails when the count is beyond [`MAX_BAR_COUNT`].
fn bar_count(area_mm2: f64, bar_area_mm2: f64) -> CalcResult<u64> {
    let quotient = (area_mm2 / bar_area_mm2).ceil();
    if !(quotient.is_finite() && quotient < MAX_BAR_COUNT as f64) {
        return Err(CalcError::calculation_failed(
            "Bar count",
            format!(
                "{} mm² needs {} bars of {} mm², more than can be counted",
                area_mm2, quotient, bar_area_mm2
            ),
        ));
    }

    let count = quotient as u64;
    // The quotient can round down onto an integer
    if (count as f64) * bar_area_mm2 < area_mm2 {
        return count.checked_add(1).ok_or_else(|| {
            CalcError::calculation_failed("Bar count", "Bar count overflowed")
        });
    }
    Ok(count)
}
