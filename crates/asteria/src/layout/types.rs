use crate::chart::CelestialPoint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Declutter tuning for the planet ring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Bodies closer than this (shortest arc) share a conjunction group
    #[serde(rename = "conjunctionToleranceDegrees")]
    pub conjunction_tolerance_degrees: f64,
    /// Radial spacing between glyphs within a group, in pixels
    #[serde(rename = "radialOffsetStepPixels")]
    pub radial_offset_step: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            conjunction_tolerance_degrees: 10.0,
            radial_offset_step: 40.0,
        }
    }
}

/// A celestial point with its computed wheel placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedPoint {
    #[serde(flatten)]
    pub point: CelestialPoint,
    /// Ecliptic longitude, 0-360
    #[serde(rename = "absoluteLongitude")]
    pub absolute_longitude: f64,
    /// Drawing angle, 0-360, 0 at east and increasing counter-clockwise
    #[serde(rename = "placementAngle")]
    pub placement_angle: f64,
    /// Signed radial pixel delta, 0 for points outside any group
    #[serde(rename = "radialOffset")]
    pub radial_offset: f64,
}

/// Non-fatal problems found while laying out a chart
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutWarning {
    #[error("unrecognized sign code {code:?} on {point}; treated degree in sign as absolute longitude")]
    UnknownSignCode { point: String, code: String },
}

/// Result of one layout pass; points ascend by absolute longitude
#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub points: Vec<PlacedPoint>,
    pub warnings: Vec<LayoutWarning>,
}
