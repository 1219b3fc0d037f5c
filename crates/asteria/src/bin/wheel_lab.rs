use anyhow::Result;
use asteria::chart::CelestialPoint;
use asteria::layout::{compute_layout, LayoutSettings};
use asteria::rendering::WheelSpecGenerator;

fn main() -> Result<()> {
    env_logger::init();

    let points = vec![
        CelestialPoint::new("Sun", "Can", 10.0),
        CelestialPoint::new("Moon", "Can", 12.0),
        CelestialPoint::new("Mercury", "Leo", 5.0).retrograde(),
        CelestialPoint::new("Venus", "Gem", 22.4),
        CelestialPoint::new("Mars", "Vir", 3.1),
        CelestialPoint::new("Jupiter", "Tau", 14.8),
        CelestialPoint::new("Saturn", "Pis", 19.2).retrograde(),
        CelestialPoint::new("Uranus", "Tau", 27.6),
        CelestialPoint::new("Neptune", "Ari", 1.9),
        CelestialPoint::new("Pluto", "Aqu", 1.4).retrograde(),
        CelestialPoint::new("Ascendant", "Lib", 8.7),
        CelestialPoint::new("Medium_Coeli", "Can", 9.3),
    ];

    let layout = compute_layout(&points, &LayoutSettings::default());
    let spec = WheelSpecGenerator::new().generate(&layout, 400.0);

    println!("{}", serde_json::to_string_pretty(&spec)?);
    Ok(())
}
