//! # Design Requests
//!
//! The boundary between a loosely-typed caller (a web form posting JSON, a
//! script, the CLI) and the strictly-typed calculator. A request may omit any
//! of the six design values, in which case the documented default is used,
//! and may send numbers as strings. A value sent as `null` is rejected.
//!
//! ## Request JSON
//!
//! ```json
//! { "width": 300, "depth": "500", "cover": 40, "fck": 20, "fy": 415, "moment": 100 }
//! ```
//!
//! ## Response JSON
//!
//! ```json
//! { "success": true, "results": { "effective_depth_mm": 460.0, "...": "..." } }
//! { "success": false, "error": "Invalid input for 'width': abc - ...",
//!   "error_code": "INVALID_INPUT" }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::request::handle_request;
//! use rcbeam_core::settings::DesignSettings;
//!
//! let response = handle_request(r#"{"moment": "120"}"#, &DesignSettings::default());
//! assert!(response.success);
//! assert_eq!(response.results.unwrap().moment_knm, 120.0);
//!
//! let response = handle_request(r#"{"width": "wide"}"#, &DesignSettings::default());
//! assert!(!response.success);
//! assert_eq!(response.error_code.as_deref(), Some("INVALID_INPUT"));
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::calculations::rc_beam::{calculate, RcBeamDesign, RcBeamInput};
use crate::errors::{CalcError, CalcResult};
use crate::settings::DesignSettings;

/// Default section width b (mm)
pub const DEFAULT_WIDTH_MM: f64 = 300.0;

/// Default overall depth D (mm)
pub const DEFAULT_DEPTH_MM: f64 = 500.0;

/// Default cover (mm)
pub const DEFAULT_COVER_MM: f64 = 40.0;

/// Default concrete grade fck (N/mm²)
pub const DEFAULT_FCK_MPA: f64 = 20.0;

/// Default steel yield strength fy (N/mm²)
pub const DEFAULT_FY_MPA: f64 = 415.0;

/// Default design moment Mu (kN·m)
pub const DEFAULT_MOMENT_KNM: f64 = 100.0;

/// A request value as sent: a JSON number, a string holding one, or `null`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Number(f64),
    Text(String),
    Null,
}

impl NumericValue {
    /// Convert to f64, naming `field` in the error if the value is not numeric
    pub fn to_f64(&self, field: &str) -> CalcResult<f64> {
        match self {
            NumericValue::Number(n) => Ok(*n),
            NumericValue::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                CalcError::invalid_input(field, s.as_str(), "Value is not a number")
            }),
            NumericValue::Null => Err(CalcError::invalid_input(
                field,
                "null",
                "Value is required; omit the key to use the default",
            )),
        }
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        NumericValue::Number(value)
    }
}

/// Loosely-typed design request.
///
/// `None` means the key was absent and takes its default. A key present with
/// `null` is `Some(NumericValue::Null)` and fails in [`DesignRequest::to_input`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignRequest {
    /// Section width (mm), default 300
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub width: Option<NumericValue>,
    /// Overall depth (mm), default 500
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub depth: Option<NumericValue>,
    /// Cover (mm), default 40
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub cover: Option<NumericValue>,
    /// Concrete grade fck (N/mm²), default 20
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub fck: Option<NumericValue>,
    /// Steel yield strength fy (N/mm²), default 415
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub fy: Option<NumericValue>,
    /// Design moment (kN·m), default 100
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub moment: Option<NumericValue>,
}

/// A key that is present, even as `null`, deserializes to `Some`
fn present<'de, D>(deserializer: D) -> Result<Option<NumericValue>, D::Error>
where
    D: Deserializer<'de>,
{
    NumericValue::deserialize(deserializer).map(Some)
}

fn value_or_default(value: &Option<NumericValue>, field: &str, default: f64) -> CalcResult<f64> {
    match value {
        Some(v) => v.to_f64(field),
        None => Ok(default),
    }
}

impl DesignRequest {
    /// Resolve defaults and numeric strings into a calculator input.
    ///
    /// Range checks are left to [`RcBeamInput::validate`].
    pub fn to_input(&self) -> CalcResult<RcBeamInput> {
        Ok(RcBeamInput::new(
            value_or_default(&self.width, "width", DEFAULT_WIDTH_MM)?,
            value_or_default(&self.depth, "depth", DEFAULT_DEPTH_MM)?,
            value_or_default(&self.cover, "cover", DEFAULT_COVER_MM)?,
            value_or_default(&self.fck, "fck", DEFAULT_FCK_MPA)?,
            value_or_default(&self.fy, "fy", DEFAULT_FY_MPA)?,
            value_or_default(&self.moment, "moment", DEFAULT_MOMENT_KNM)?,
        ))
    }

    /// Resolve the request and run the design
    pub fn run(&self, settings: &DesignSettings) -> CalcResult<RcBeamDesign> {
        let input = self.to_input()?;
        calculate(&input, settings)
    }
}

/// Success/failure envelope returned to the caller.
///
/// Failures carry a message and error code, never partial results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<RcBeamDesign>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl DesignResponse {
    pub fn ok(results: RcBeamDesign) -> Self {
        Self {
            success: true,
            results: Some(results),
            error: None,
            error_code: None,
        }
    }

    pub fn failure(error: &CalcError) -> Self {
        Self {
            success: false,
            results: None,
            error: Some(error.to_string()),
            error_code: Some(error.error_code().to_string()),
        }
    }
}

impl From<CalcResult<RcBeamDesign>> for DesignResponse {
    fn from(result: CalcResult<RcBeamDesign>) -> Self {
        match result {
            Ok(design) => DesignResponse::ok(design),
            Err(e) => DesignResponse::failure(&e),
        }
    }
}

/// Parse a JSON request body
pub fn parse_request(json: &str) -> CalcResult<DesignRequest> {
    serde_json::from_str(json).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid design request: {}", e),
    })
}

/// Parse, resolve and design in one step, always producing a response
pub fn handle_request(json: &str, settings: &DesignSettings) -> DesignResponse {
    let result = parse_request(json).and_then(|request| request.run(settings));
    if let Err(e) = &result {
        tracing::warn!(code = e.error_code(), error = %e, "design request failed");
    }
    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::rc_beam::design;

    #[test]
    fn test_empty_request_uses_defaults() {
        let request = parse_request("{}").unwrap();
        let input = request.to_input().unwrap();
        assert_eq!(input, RcBeamInput::new(300.0, 500.0, 40.0, 20.0, 415.0, 100.0));
    }

    #[test]
    fn test_null_field_rejected() {
        let request = parse_request(r#"{"width": 250, "fy": null}"#).unwrap();
        assert_eq!(request.fy, Some(NumericValue::Null));
        assert_eq!(request.depth, None);

        let err = request.to_input().unwrap_err();
        match err {
            CalcError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "fy");
                assert_eq!(value, "null");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_handle_request_null_field() {
        let response = handle_request(r#"{"width": null}"#, &DesignSettings::default());
        assert!(!response.success);
        assert!(response.results.is_none());
        assert_eq!(response.error_code.as_deref(), Some("INVALID_INPUT"));
        assert!(response.error.unwrap().contains("'width'"));
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        let request = parse_request(
            r#"{"width": 230, "depth": " 450 ", "cover": "25.5",
                "fck": 25, "fy": "500", "moment": 1e2}"#,
        )
        .unwrap();
        let input = request.to_input().unwrap();
        assert_eq!(input.width_mm, 230.0);
        assert_eq!(input.depth_mm, 450.0);
        assert_eq!(input.cover_mm, 25.5);
        assert_eq!(input.fck_mpa, 25.0);
        assert_eq!(input.fy_mpa, 500.0);
        assert_eq!(input.moment_knm, 100.0);
    }

    #[test]
    fn test_non_numeric_string_rejected() {
        let request = parse_request(r#"{"fck": "M20"}"#).unwrap();
        let err = request.to_input().unwrap_err();
        match err {
            CalcError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "fck");
                assert_eq!(value, "M20");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_request("{width: 300").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        // Booleans are neither numbers nor strings
        assert!(parse_request(r#"{"width": true}"#).is_err());
    }

    #[test]
    fn test_handle_request_success_matches_direct_design() {
        let response = handle_request("{}", &DesignSettings::default());
        assert!(response.success);
        assert!(response.error.is_none());

        let direct = design(&RcBeamInput::new(300.0, 500.0, 40.0, 20.0, 415.0, 100.0)).unwrap();
        assert_eq!(response.results, Some(direct));
    }

    #[test]
    fn test_handle_request_degenerate_geometry() {
        let response = handle_request(r#"{"depth": 40, "cover": 40}"#, &DesignSettings::default());
        assert!(!response.success);
        assert!(response.results.is_none());
        assert_eq!(response.error_code.as_deref(), Some("INVALID_INPUT"));
        assert!(response.error.unwrap().contains("cover_mm"));
    }

    #[test]
    fn test_response_envelope_json() {
        let ok = handle_request("{}", &DesignSettings::default());
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["results"]["effective_depth_mm"], 460.0);
        assert!(json["results"]["spacing_required_mm"].is_null());
        assert!(json.get("error").is_none());

        let failed = handle_request(r#"{"moment": "lots"}"#, &DesignSettings::default());
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("results").is_none());
        assert_eq!(json["error_code"], "INVALID_INPUT");
    }

    #[test]
    fn test_request_serializes_back() {
        let request = DesignRequest {
            width: Some(250.0.into()),
            moment: Some(NumericValue::Text("80".to_string())),
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("depth"));
        let parsed = parse_request(&json).unwrap();
        assert_eq!(parsed.to_input().unwrap().width_mm, 250.0);
        assert_eq!(parsed.to_input().unwrap().moment_knm, 80.0);
    }
}
