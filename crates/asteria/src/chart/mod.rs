pub mod data;

pub use data::{CelestialPoint, ChartSnapshot};
