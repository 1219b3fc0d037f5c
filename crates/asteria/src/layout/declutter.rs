//! Conjunction grouping and radial offset assignment.
//!
//! Bodies within the tolerance band would draw on top of each other, so
//! each group spreads its glyphs across a ladder of radial offsets
//! centered on the orbit radius.

use super::placement_angle;
use super::types::{LayoutSettings, PlacedPoint};
use crate::chart::CelestialPoint;

/// Shortest angular distance between two longitudes, seam included
pub fn arc_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Group resolved points by conjunction and assign each a radial offset.
/// Output ascends by absolute longitude.
pub(super) fn assign_offsets(
    resolved: Vec<(CelestialPoint, f64)>,
    settings: &LayoutSettings,
) -> Vec<PlacedPoint> {
    let mut placed: Vec<PlacedPoint> = resolved
        .into_iter()
        .map(|(point, longitude)| PlacedPoint {
            absolute_longitude: longitude,
            placement_angle: placement_angle(longitude),
            radial_offset: 0.0,
            point,
        })
        .collect();

    placed.sort_by(|a, b| a.absolute_longitude.total_cmp(&b.absolute_longitude));

    if placed.is_empty() {
        return placed;
    }

    let tolerance = settings.conjunction_tolerance_degrees;

    // Single sweep over the sorted points: a gap wider than the tolerance
    // closes the current group.
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for i in 0..placed.len() {
        let same_group = groups
            .last()
            .and_then(|group| group.last())
            .map_or(false, |&prev| {
                arc_distance(
                    placed[i].absolute_longitude,
                    placed[prev].absolute_longitude,
                ) <= tolerance
            });
        match groups.last_mut() {
            Some(group) if same_group => group.push(i),
            _ => groups.push(vec![i]),
        }
    }

    // The sweep cannot see a conjunction straddling the 0/360 seam: its
    // members sit at opposite ends of the sorted order. Only the first
    // and last groups are compared, matching the wheel's long-standing
    // behavior; chains of three or more seam groups stay separate.
    if groups.len() > 1 {
        let first_lon = placed[groups[0][0]].absolute_longitude;
        let last_group = &groups[groups.len() - 1];
        let last_lon = placed[last_group[last_group.len() - 1]].absolute_longitude;
        if arc_distance(first_lon, last_lon) <= tolerance {
            let mut merged = groups.pop().unwrap_or_default();
            merged.extend(groups[0].iter().copied());
            groups[0] = merged;
        }
    }

    // Symmetric ladder centered on zero, assigned in group order. For a
    // merged seam group that order is the wrapped tail first, then the
    // original front.
    for group in &groups {
        if group.len() < 2 {
            continue;
        }
        let step = settings.radial_offset_step;
        let base = -((group.len() - 1) as f64) * step / 2.0;
        for (k, &index) in group.iter().enumerate() {
            placed[index].radial_offset = base + k as f64 * step;
        }
    }

    // Offsets were written through indices, so the ascending longitude
    // order from the initial sort still holds.
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_distance_seam() {
        assert_eq!(arc_distance(358.0, 2.0), 4.0);
        assert_eq!(arc_distance(2.0, 358.0), 4.0);
        assert_eq!(arc_distance(0.0, 180.0), 180.0);
        assert_eq!(arc_distance(10.0, 10.0), 0.0);
        assert_eq!(arc_distance(350.0, 10.0), 20.0);
    }

    #[test]
    fn test_seam_merge_assigns_ladder_from_wrapped_tail() {
        let settings = LayoutSettings::default();
        let resolved = vec![
            (CelestialPoint::new("a", "Ari", 1.0), 1.0),
            (CelestialPoint::new("b", "Ari", 5.0), 5.0),
            (CelestialPoint::new("c", "Lib", 20.0), 200.0),
            (CelestialPoint::new("d", "Pis", 26.0), 356.0),
        ];

        let placed = assign_offsets(resolved, &settings);
        let by_name: Vec<(&str, f64)> = placed
            .iter()
            .map(|p| (p.point.name.as_str(), p.radial_offset))
            .collect();

        // Merged group order is [d, a, b]: d takes the low rung.
        assert_eq!(
            by_name,
            vec![("a", 0.0), ("b", 40.0), ("c", 0.0), ("d", -40.0)]
        );
    }
}
