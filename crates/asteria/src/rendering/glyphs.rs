//! Glyph registry for drawable chart points.
//!
//! Sign glyphs live on [`crate::zodiac::Sign`]; this table covers the
//! bodies and chart angles, keyed by the names the calculation service
//! emits.

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Ascendant,
    Midheaven,
    Unknown,
}

/// Marker drawn beside a retrograde body's glyph
pub const RETROGRADE_SYMBOL: &str = "\u{211e}";

lazy_static! {
    static ref POINT_GLYPHS: HashMap<&'static str, Glyph> = {
        let mut map = HashMap::new();
        map.insert("Sun", Glyph::Sun);
        map.insert("Moon", Glyph::Moon);
        map.insert("Mercury", Glyph::Mercury);
        map.insert("Venus", Glyph::Venus);
        map.insert("Mars", Glyph::Mars);
        map.insert("Jupiter", Glyph::Jupiter);
        map.insert("Saturn", Glyph::Saturn);
        map.insert("Uranus", Glyph::Uranus);
        map.insert("Neptune", Glyph::Neptune);
        map.insert("Pluto", Glyph::Pluto);
        map.insert("Ascendant", Glyph::Ascendant);
        map.insert("Medium_Coeli", Glyph::Midheaven);
        map
    };
}

impl FromStr for Glyph {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(POINT_GLYPHS.get(s).copied().unwrap_or(Glyph::Unknown))
    }
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Sun => "\u{2609}",
            Glyph::Moon => "\u{263d}",
            Glyph::Mercury => "\u{263f}",
            Glyph::Venus => "\u{2640}",
            Glyph::Mars => "\u{2642}",
            Glyph::Jupiter => "\u{2643}",
            Glyph::Saturn => "\u{2644}",
            Glyph::Uranus => "\u{2645}",
            Glyph::Neptune => "\u{2646}",
            Glyph::Pluto => "\u{2647}",
            Glyph::Ascendant => "AC",
            Glyph::Midheaven => "MC",
            Glyph::Unknown => "?",
        }
    }

    /// Chart angles get an axis tick in addition to their glyph
    pub fn is_chart_angle(self) -> bool {
        matches!(self, Glyph::Ascendant | Glyph::Midheaven)
    }
}
