pub mod chart;
pub mod layout;
pub mod rendering;
pub mod zodiac;

pub use chart::{CelestialPoint, ChartSnapshot};
pub use layout::{compute_layout, ChartLayout, LayoutSettings, LayoutWarning, PlacedPoint};
pub use rendering::{WheelSpec, WheelSpecGenerator, WheelStyle};
pub use zodiac::{Sign, UnknownSignCode};

/// One-call convenience: lay out a snapshot's drawable points with the
/// default settings and describe the wheel at the given diameter.
/// Layout warnings are emitted through `log`; callers that need them as
/// values should run [`compute_layout`] themselves.
pub fn render_snapshot(snapshot: &ChartSnapshot, size: f32) -> WheelSpec {
    let layout = compute_layout(&snapshot.points(), &LayoutSettings::default());
    WheelSpecGenerator::new().generate(&layout, size)
}
