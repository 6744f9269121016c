//! # Design Settings
//!
//! Reinforcement detailing choices that the formula chain treats as fixed
//! per design: the main tension bar diameter, the stirrup diameter and the
//! number of stirrup legs. Defaults are 16 mm bars with 2-legged 8 mm
//! stirrups.
//!
//! Settings can be loaded from a TOML file. Every key is optional:
//!
//! ```toml
//! main_bar_dia_mm = 20.0
//! stirrup_dia_mm = 10.0
//! stirrup_legs = 4
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::settings::DesignSettings;
//!
//! let settings: DesignSettings = toml::from_str("main_bar_dia_mm = 20.0").unwrap();
//! assert_eq!(settings.main_bar_dia_mm, 20.0);
//! assert_eq!(settings.stirrup_dia_mm, 8.0);
//! assert_eq!(settings.stirrup_legs, 2);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default main tension bar diameter (mm)
pub const DEFAULT_MAIN_BAR_DIA_MM: f64 = 16.0;

/// Default stirrup diameter (mm)
pub const DEFAULT_STIRRUP_DIA_MM: f64 = 8.0;

/// Default number of stirrup legs
pub const DEFAULT_STIRRUP_LEGS: u32 = 2;

/// Reinforcement detailing settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Diameter of the main tension bars (mm)
    pub main_bar_dia_mm: f64,

    /// Diameter of the shear stirrups (mm)
    pub stirrup_dia_mm: f64,

    /// Number of stirrup legs crossing the shear plane
    pub stirrup_legs: u32,
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            main_bar_dia_mm: DEFAULT_MAIN_BAR_DIA_MM,
            stirrup_dia_mm: DEFAULT_STIRRUP_DIA_MM,
            stirrup_legs: DEFAULT_STIRRUP_LEGS,
        }
    }
}

impl DesignSettings {
    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.main_bar_dia_mm.is_finite() || self.main_bar_dia_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "main_bar_dia_mm",
                self.main_bar_dia_mm.to_string(),
                "Bar diameter must be a positive number",
            ));
        }
        if !self.stirrup_dia_mm.is_finite() || self.stirrup_dia_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "stirrup_dia_mm",
                self.stirrup_dia_mm.to_string(),
                "Stirrup diameter must be a positive number",
            ));
        }
        if self.stirrup_legs == 0 {
            return Err(CalcError::invalid_input(
                "stirrup_legs",
                "0",
                "Stirrups need at least one leg",
            ));
        }
        Ok(())
    }
}

/// Load settings from a TOML file.
///
/// Missing keys take their defaults. The loaded settings are validated.
pub fn load_settings(path: &Path) -> CalcResult<DesignSettings> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings: DesignSettings =
        toml::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid TOML in {}: {}", path.display(), e),
        })?;

    settings.validate()?;
    tracing::debug!(path = %path.display(), ?settings, "loaded design settings");

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_settings_path(name: &str) -> PathBuf {
        temp_dir().join(format!("rcbeam_test_{}_{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let settings = DesignSettings::default();
        assert_eq!(settings.main_bar_dia_mm, 16.0);
        assert_eq!(settings.stirrup_dia_mm, 8.0);
        assert_eq!(settings.stirrup_legs, 2);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let settings: DesignSettings = toml::from_str("").unwrap();
        assert_eq!(settings, DesignSettings::default());
    }

    #[test]
    fn test_validation() {
        let zero_bar = DesignSettings {
            main_bar_dia_mm: 0.0,
            ..Default::default()
        };
        assert!(zero_bar.validate().is_err());

        let no_legs = DesignSettings {
            stirrup_legs: 0,
            ..Default::default()
        };
        assert!(no_legs.validate().is_err());

        let nan_stirrup = DesignSettings {
            stirrup_dia_mm: f64::NAN,
            ..Default::default()
        };
        assert!(nan_stirrup.validate().is_err());
    }

    #[test]
    fn test_load_settings_file() {
        let path = temp_settings_path("load");
        fs::write(&path, "stirrup_dia_mm = 10.0\nstirrup_legs = 4\n").unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.main_bar_dia_mm, 16.0);
        assert_eq!(settings.stirrup_dia_mm, 10.0);
        assert_eq!(settings.stirrup_legs, 4);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_settings(&temp_settings_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_toml() {
        let path = temp_settings_path("invalid");
        fs::write(&path, "main_bar_dia_mm = \"sixteen\"").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let path = temp_settings_path("zero_legs");
        fs::write(&path, "stirrup_legs = 0").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let _ = fs::remove_file(&path);
    }
}
