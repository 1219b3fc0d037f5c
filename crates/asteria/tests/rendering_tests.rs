use asteria::chart::CelestialPoint;
use asteria::layout::{compute_layout, LayoutSettings};
use asteria::rendering::primitives::{Color, Point, Shape};
use asteria::rendering::{WheelSpecGenerator, WheelStyle};

fn sample_layout() -> asteria::layout::ChartLayout {
    let points = vec![
        CelestialPoint::new("Sun", "Can", 10.0),
        CelestialPoint::new("Moon", "Can", 12.0),
        CelestialPoint::new("Mercury", "Leo", 5.0).retrograde(),
        CelestialPoint::new("Ascendant", "Lib", 8.7),
        CelestialPoint::new("Medium_Coeli", "Cap", 15.0),
    ];
    compute_layout(&points, &LayoutSettings::default())
}

fn distance(a: Point, b: Point) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

#[test]
fn test_generate_shape_counts() {
    let spec = WheelSpecGenerator::new().generate(&sample_layout(), 400.0);

    let circles = spec
        .shapes
        .iter()
        .filter(|s| matches!(s, Shape::Circle { .. }))
        .count();
    let segments = spec
        .shapes
        .iter()
        .filter(|s| matches!(s, Shape::SignSegment { .. }))
        .count();
    let texts = spec
        .shapes
        .iter()
        .filter(|s| matches!(s, Shape::Text { .. }))
        .count();
    let glyphs = spec
        .shapes
        .iter()
        .filter(|s| matches!(s, Shape::PointGlyph { .. }))
        .count();
    let lines = spec
        .shapes
        .iter()
        .filter(|s| matches!(s, Shape::Line { .. }))
        .count();

    assert_eq!(circles, 1);
    assert_eq!(segments, 12);
    assert_eq!(texts, 12);
    assert_eq!(glyphs, 5);
    // One axis tick per chart angle
    assert_eq!(lines, 2);

    assert_eq!(spec.width, 400.0);
    assert_eq!(spec.center.x, 200.0);
    assert_eq!(spec.center.y, 200.0);
    assert!(!spec.id.is_empty());
}

#[test]
fn test_radial_offsets_spread_conjunct_glyphs() {
    let spec = WheelSpecGenerator::new().generate(&sample_layout(), 400.0);
    let style = WheelStyle::default();

    let main_radius = 200.0 - style.wheel_stroke_width;
    let orbit = main_radius * style.orbit_radius_ratio;

    let mut sun_radius = None;
    let mut moon_radius = None;
    for shape in &spec.shapes {
        if let Shape::PointGlyph { center, name, .. } = shape {
            let r = distance(*center, spec.center);
            match name.as_str() {
                "Sun" => sun_radius = Some(r),
                "Moon" => moon_radius = Some(r),
                _ => {}
            }
        }
    }

    let sun_radius = sun_radius.expect("Sun glyph missing");
    let moon_radius = moon_radius.expect("Moon glyph missing");

    // Sun and Moon are conjunct: one sits 20px inside the orbit, the
    // other 20px outside
    assert!((sun_radius - (orbit - 20.0)).abs() < 0.01);
    assert!((moon_radius - (orbit + 20.0)).abs() < 0.01);
}

#[test]
fn test_retrograde_flag_reaches_glyph() {
    let spec = WheelSpecGenerator::new().generate(&sample_layout(), 400.0);

    for shape in &spec.shapes {
        if let Shape::PointGlyph {
            name, retrograde, ..
        } = shape
        {
            assert_eq!(*retrograde, name == "Mercury");
        }
    }
}

#[test]
fn test_chart_angles_resolve_symbols() {
    let spec = WheelSpecGenerator::new().generate(&sample_layout(), 400.0);

    let symbols: Vec<(String, String)> = spec
        .shapes
        .iter()
        .filter_map(|s| match s {
            Shape::PointGlyph { name, symbol, .. } => Some((name.clone(), symbol.clone())),
            _ => None,
        })
        .collect();

    assert!(symbols.contains(&("Sun".to_string(), "\u{2609}".to_string())));
    assert!(symbols.contains(&("Ascendant".to_string(), "AC".to_string())));
    assert!(symbols.contains(&("Medium_Coeli".to_string(), "MC".to_string())));
}

#[test]
fn test_spec_serializes() {
    let spec = WheelSpecGenerator::new().generate(&sample_layout(), 400.0);
    let json = serde_json::to_string(&spec).unwrap();

    assert!(json.contains("\"backgroundColor\""));
    assert!(json.contains("\"SignSegment\""));
    assert!(json.contains("\"PointGlyph\""));
}

#[test]
fn test_color_from_hex() {
    let violet = Color::from_hex("#A78BFA").unwrap();
    assert_eq!((violet.r, violet.g, violet.b, violet.a), (167, 139, 250, 255));

    let translucent = Color::from_hex("#FF000080").unwrap();
    assert_eq!(translucent.a, 128);

    assert!(Color::from_hex("not a color").is_none());
    assert!(Color::from_hex("#FF00").is_none());
}

#[test]
fn test_color_to_css_string() {
    assert_eq!(Color::WHITE.to_css_string(), "rgb(255, 255, 255)");
    let translucent = Color {
        r: 255,
        g: 0,
        b: 0,
        a: 128,
    };
    assert!(translucent.to_css_string().starts_with("rgba"));
}

#[test]
fn test_style_default_is_valid() {
    assert!(WheelStyle::default().validate().is_ok());
}

#[test]
fn test_style_from_json_partial() {
    let style = WheelStyle::from_json(r#"{"orbitRadiusRatio": 0.5, "version": "1.2.0"}"#).unwrap();
    assert_eq!(style.orbit_radius_ratio, 0.5);
    assert_eq!(style.version.as_deref(), Some("1.2.0"));
    // Unset fields keep the theme defaults
    assert_eq!(style.wheel_stroke_color, "#A78BFA");
}

#[test]
fn test_style_rejects_bad_version() {
    let result = WheelStyle::from_json(r#"{"version": "v2"}"#);
    assert!(result.is_err());
}

#[test]
fn test_style_rejects_inverted_band() {
    let result =
        WheelStyle::from_json(r#"{"signBandInnerRatio": 0.9, "signBandOuterRatio": 0.8}"#);
    assert!(result.is_err());
}

#[test]
fn test_style_from_toml() {
    let style = WheelStyle::from_toml("glyphScale = 1.5\nbackgroundColor = \"#000000\"\n").unwrap();
    assert_eq!(style.glyph_scale, 1.5);
    assert_eq!(style.background_color, "#000000");
}

#[test]
fn test_style_from_json_invalid_json() {
    assert!(WheelStyle::from_json("{").is_err());
}
