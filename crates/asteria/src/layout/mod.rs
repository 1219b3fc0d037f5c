//! Chart-wheel placement: longitude normalization, the drawing-angle
//! mapping and conjunction decluttering.
//!
//! Everything here is a pure function of its inputs; a layout request
//! holds no state and shares nothing between calls.

pub mod declutter;
pub mod types;

pub use types::{ChartLayout, LayoutSettings, LayoutWarning, PlacedPoint};

use crate::chart::CelestialPoint;
use crate::zodiac::Sign;

/// Absolute ecliptic longitude of a degree within a sign
pub fn absolute_longitude(sign: Sign, degree_in_sign: f64) -> f64 {
    sign.start_longitude() + degree_in_sign
}

/// Map an absolute ecliptic longitude to the wheel's drawing angle.
///
/// 0 of the ecliptic lands at the chart's left edge and motion is drawn
/// counter-clockwise, which is the (270 - longitude) convention. The
/// longitude is taken mod 360 first so the function is total.
pub fn placement_angle(longitude: f64) -> f64 {
    (270.0 - longitude.rem_euclid(360.0)).rem_euclid(360.0)
}

/// Lay out a set of points: resolve each longitude, map it to a drawing
/// angle and spread conjunct glyphs across radial offsets.
///
/// An unrecognized sign code degrades to treating the in-sign degree as
/// the absolute longitude; the point still gets placed and the problem is
/// reported in the returned warnings.
pub fn compute_layout(points: &[CelestialPoint], settings: &LayoutSettings) -> ChartLayout {
    let mut warnings = Vec::new();
    let mut resolved = Vec::with_capacity(points.len());

    for point in points {
        let longitude = match Sign::from_code(&point.sign) {
            Ok(sign) => absolute_longitude(sign, point.degree_in_sign),
            Err(err) => {
                log::warn!(
                    "{} on point {}; treating degree in sign as absolute longitude",
                    err,
                    point.name
                );
                warnings.push(LayoutWarning::UnknownSignCode {
                    point: point.name.clone(),
                    code: point.sign.clone(),
                });
                point.degree_in_sign
            }
        };
        resolved.push((point.clone(), longitude));
    }

    ChartLayout {
        points: declutter::assign_offsets(resolved, settings),
        warnings,
    }
}
