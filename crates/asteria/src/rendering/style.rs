use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a wheel style
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Invalid TOML: {0}")]
    InvalidToml(String),
    #[error("Invalid field value: {0}")]
    InvalidFieldValue(String),
}

/// Visual styling for the chart wheel. Colors are hex strings so styles
/// can travel as plain JSON or TOML documents; unset fields fall back to
/// the Constellaria theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WheelStyle {
    pub background_color: String,
    pub wheel_stroke_color: String,
    pub wheel_stroke_width: f32,
    pub glyph_color: String,
    pub axis_color: String,
    /// One color per sign, zodiac order
    pub sign_colors: Vec<String>,
    /// Inner edge of the sign band, as a fraction of the main radius
    pub sign_band_inner_ratio: f32,
    /// Outer edge of the sign band, as a fraction of the main radius
    pub sign_band_outer_ratio: f32,
    /// Orbit the body glyphs sit on, as a fraction of the main radius
    pub orbit_radius_ratio: f32,
    pub axis_tick_length: f32,
    pub glyph_size: f32,
    pub glyph_scale: f32,
    pub version: Option<String>,
}

impl Default for WheelStyle {
    fn default() -> Self {
        // Elemental coloring: fire, earth, air, water repeating through
        // the zodiac, earth on the brand's deep gold.
        let fire = "#FF6347".to_string();
        let earth = "#B8860B".to_string();
        let air = "#87CEEB".to_string();
        let water = "#4169E1".to_string();
        let sign_colors = vec![
            fire.clone(),  // Aries
            earth.clone(), // Taurus
            air.clone(),   // Gemini
            water.clone(), // Cancer
            fire.clone(),  // Leo
            earth.clone(), // Virgo
            air.clone(),   // Libra
            water.clone(), // Scorpio
            fire,          // Sagittarius
            earth,         // Capricorn
            air,           // Aquarius
            water,         // Pisces
        ];

        Self {
            background_color: "#111827".to_string(),
            wheel_stroke_color: "#A78BFA".to_string(),
            wheel_stroke_width: 1.0,
            glyph_color: "#FFECB3".to_string(),
            axis_color: "#FFD700".to_string(),
            sign_colors,
            sign_band_inner_ratio: 0.85,
            sign_band_outer_ratio: 1.0,
            orbit_radius_ratio: 0.62,
            axis_tick_length: 12.0,
            glyph_size: 12.0,
            glyph_scale: 1.0,
            version: None,
        }
    }
}

impl WheelStyle {
    /// Load a style from JSON, filling unset fields from the defaults
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let style: WheelStyle =
            serde_json::from_str(json).map_err(|e| StyleError::InvalidJson(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Load a style from TOML, filling unset fields from the defaults
    pub fn from_toml(text: &str) -> Result<Self, StyleError> {
        let style: WheelStyle =
            toml::from_str(text).map_err(|e| StyleError::InvalidToml(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if self.sign_colors.len() != 12 {
            return Err(StyleError::InvalidFieldValue(format!(
                "signColors must have 12 entries, got {}",
                self.sign_colors.len()
            )));
        }

        for (name, ratio) in [
            ("signBandInnerRatio", self.sign_band_inner_ratio),
            ("signBandOuterRatio", self.sign_band_outer_ratio),
            ("orbitRadiusRatio", self.orbit_radius_ratio),
        ] {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(StyleError::InvalidFieldValue(format!(
                    "{} must be between 0 and 1, got {}",
                    name, ratio
                )));
            }
        }

        if self.sign_band_inner_ratio >= self.sign_band_outer_ratio {
            return Err(StyleError::InvalidFieldValue(
                "signBandInnerRatio must be less than signBandOuterRatio".to_string(),
            ));
        }

        if self.orbit_radius_ratio >= self.sign_band_inner_ratio {
            return Err(StyleError::InvalidFieldValue(
                "orbitRadiusRatio must sit inside the sign band".to_string(),
            ));
        }

        if self.glyph_size <= 0.0 || self.glyph_scale <= 0.0 {
            return Err(StyleError::InvalidFieldValue(
                "glyph size and scale must be positive".to_string(),
            ));
        }

        if let Some(version) = &self.version {
            let version_regex = Regex::new(r"^\d+\.\d+\.\d+$")
                .map_err(|_| StyleError::InvalidFieldValue("Regex error".to_string()))?;
            if !version_regex.is_match(version) {
                return Err(StyleError::InvalidFieldValue(format!(
                    "version must be in format major.minor.patch (e.g., \"1.0.0\"), got: {}",
                    version
                )));
            }
        }

        Ok(())
    }
}
