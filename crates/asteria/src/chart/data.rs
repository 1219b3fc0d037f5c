use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named point on the ecliptic as reported by the calculation service.
///
/// `sign` is kept as the raw 3-letter code string from the wire; it is
/// validated when the layout resolves it, not at deserialization time, so
/// one malformed point never rejects a whole payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelestialPoint {
    pub name: String,
    pub sign: String,
    #[serde(rename = "degreeInSign")]
    pub degree_in_sign: f64,
    #[serde(rename = "isRetrograde", default)]
    pub is_retrograde: bool,
    #[serde(default)]
    pub house: Option<String>,
    #[serde(rename = "formattedPosition", default)]
    pub formatted_position: Option<String>,
}

impl CelestialPoint {
    pub fn new(name: impl Into<String>, sign: impl Into<String>, degree_in_sign: f64) -> Self {
        Self {
            name: name.into(),
            sign: sign.into(),
            degree_in_sign,
            is_retrograde: false,
            house: None,
            formatted_position: None,
        }
    }

    pub fn retrograde(mut self) -> Self {
        self.is_retrograde = true;
        self
    }
}

/// Full chart payload from the calculation service (natal chart or the
/// daily ephemeris snapshot; both use the same record shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSnapshot {
    #[serde(rename = "birthDateTimeUTC")]
    pub birth_date_time_utc: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub ascendant: CelestialPoint,
    pub midheaven: CelestialPoint,
    #[serde(rename = "houseCusps", default)]
    pub house_cusps: Vec<CelestialPoint>,
    pub planets: Vec<CelestialPoint>,
}

impl ChartSnapshot {
    /// Drawable bodies in service order: the planets plus the two chart
    /// angles. House cusps are boundaries, not glyph-bearing points.
    pub fn points(&self) -> Vec<CelestialPoint> {
        let mut points = self.planets.clone();
        points.push(self.ascendant.clone());
        points.push(self.midheaven.clone());
        points
    }
}
