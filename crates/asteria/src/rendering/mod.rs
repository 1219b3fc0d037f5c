pub mod generator;
pub mod glyphs;
pub mod primitives;
pub mod spec;
pub mod style;

pub use generator::WheelSpecGenerator;
pub use spec::WheelSpec;
pub use style::{StyleError, WheelStyle};
