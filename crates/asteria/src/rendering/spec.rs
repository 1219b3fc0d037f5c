use crate::rendering::primitives::{Color, Point, Shape};
use serde::{Deserialize, Serialize};

/// Declarative description of one chart wheel, ready for a renderer.
/// The renderer decides nothing about geometry; it draws these shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WheelSpec {
    pub id: String,
    pub width: f32,
    pub height: f32,
    pub center: Point,
    #[serde(rename = "backgroundColor")]
    pub background_color: Color,
    pub shapes: Vec<Shape>,
}
