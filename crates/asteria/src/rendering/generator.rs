use std::str::FromStr;

use crate::layout::{placement_angle, ChartLayout};
use crate::rendering::glyphs::Glyph;
use crate::rendering::primitives::{Color, Point, Shape, Stroke};
use crate::rendering::spec::WheelSpec;
use crate::rendering::style::WheelStyle;
use crate::zodiac::Sign;

/// WheelSpec generator - converts a computed layout to renderer shapes
pub struct WheelSpecGenerator {
    style: WheelStyle,
}

impl WheelSpecGenerator {
    /// Create a generator with the default style
    pub fn new() -> Self {
        Self {
            style: WheelStyle::default(),
        }
    }

    pub fn with_style(style: WheelStyle) -> Self {
        Self { style }
    }

    /// Describe a whole wheel of the given pixel diameter. The layout
    /// stays pixel-agnostic; radius selection happens here.
    pub fn generate(&self, layout: &ChartLayout, size: f32) -> WheelSpec {
        let center = Point {
            x: size / 2.0,
            y: size / 2.0,
        };
        let main_radius = size / 2.0 - self.style.wheel_stroke_width;

        let mut shapes = Vec::new();

        shapes.push(Shape::Circle {
            center,
            radius: main_radius,
            fill: None,
            stroke: Some(Stroke {
                color: self.color(&self.style.wheel_stroke_color),
                width: self.style.wheel_stroke_width,
            }),
        });

        shapes.extend(self.sign_band_shapes(center, main_radius));
        shapes.extend(self.point_shapes(layout, center, main_radius));

        WheelSpec {
            id: uuid::Uuid::new_v4().to_string(),
            width: size,
            height: size,
            center,
            background_color: self.color(&self.style.background_color),
            shapes,
        }
    }

    /// Twelve wedges plus a sign glyph at each wedge's midpoint
    fn sign_band_shapes(&self, center: Point, main_radius: f32) -> Vec<Shape> {
        let radius_inner = main_radius * self.style.sign_band_inner_ratio;
        let radius_outer = main_radius * self.style.sign_band_outer_ratio;
        let glyph_radius = (radius_inner + radius_outer) / 2.0;
        let glyph_color = self.color(&self.style.glyph_color);

        let mut shapes = Vec::new();
        for sign in Sign::ALL {
            let start_lon = sign.start_longitude();
            let fill = self
                .style
                .sign_colors
                .get(sign.index())
                .map(|hex| self.color(hex))
                .unwrap_or(Color::WHITE);

            shapes.push(Shape::SignSegment {
                center,
                sign_index: sign.index() as u8,
                start_angle: placement_angle(start_lon) as f32,
                end_angle: placement_angle(start_lon + 30.0) as f32,
                radius_inner,
                radius_outer,
                fill,
                stroke: Some(Stroke {
                    color: self.color(&self.style.wheel_stroke_color),
                    width: self.style.wheel_stroke_width,
                }),
            });

            let mid_angle = placement_angle(start_lon + 15.0);
            shapes.push(Shape::Text {
                position: polar_to_cartesian(center, glyph_radius, mid_angle),
                content: sign.symbol().to_string(),
                size: self.style.glyph_size * self.style.glyph_scale,
                color: glyph_color,
            });
        }
        shapes
    }

    /// One glyph per placed body on the orbit, spread by its radial
    /// offset; chart angles also get an axis tick
    fn point_shapes(&self, layout: &ChartLayout, center: Point, main_radius: f32) -> Vec<Shape> {
        let orbit_radius = main_radius * self.style.orbit_radius_ratio;
        let band_inner = main_radius * self.style.sign_band_inner_ratio;
        let glyph_color = self.color(&self.style.glyph_color);
        let axis_color = self.color(&self.style.axis_color);

        let mut shapes = Vec::new();
        for placed in &layout.points {
            let glyph = Glyph::from_str(&placed.point.name).unwrap_or(Glyph::Unknown);
            let radius = orbit_radius + placed.radial_offset as f32;
            let position = polar_to_cartesian(center, radius, placed.placement_angle);

            if glyph.is_chart_angle() {
                shapes.push(Shape::Line {
                    from: polar_to_cartesian(center, band_inner, placed.placement_angle),
                    to: polar_to_cartesian(
                        center,
                        band_inner - self.style.axis_tick_length,
                        placed.placement_angle,
                    ),
                    stroke: Stroke {
                        color: axis_color,
                        width: self.style.wheel_stroke_width,
                    },
                });
            }

            shapes.push(Shape::PointGlyph {
                center: position,
                name: placed.point.name.clone(),
                symbol: glyph.symbol().to_string(),
                size: self.style.glyph_size * self.style.glyph_scale,
                color: if glyph.is_chart_angle() {
                    axis_color
                } else {
                    glyph_color
                },
                retrograde: placed.point.is_retrograde,
            });
        }
        shapes
    }

    fn color(&self, hex: &str) -> Color {
        Color::from_hex(hex).unwrap_or(Color::WHITE)
    }
}

impl Default for WheelSpecGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert polar coordinates to screen space. Pixel y grows downward,
/// so the counter-clockwise placement convention flips the sine.
fn polar_to_cartesian(center: Point, radius: f32, angle_degrees: f64) -> Point {
    let rad = angle_degrees.to_radians();
    Point {
        x: center.x + radius * rad.cos() as f32,
        y: center.y - radius * rad.sin() as f32,
    }
}
