//! Zodiac sign table and longitude helpers.
//!
//! The twelve signs partition the ecliptic into fixed 30 degree spans,
//! Aries starting at 0. The table is defined once and never mutated.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sign codes, full names and glyphs in zodiac order
const SIGNS: &[(&str, &str, &str)] = &[
    ("Ari", "Aries", "\u{2648}"),
    ("Tau", "Taurus", "\u{2649}"),
    ("Gem", "Gemini", "\u{264a}"),
    ("Can", "Cancer", "\u{264b}"),
    ("Leo", "Leo", "\u{264c}"),
    ("Vir", "Virgo", "\u{264d}"),
    ("Lib", "Libra", "\u{264e}"),
    ("Sco", "Scorpio", "\u{264f}"),
    ("Sag", "Sagittarius", "\u{2650}"),
    ("Cap", "Capricorn", "\u{2651}"),
    ("Aqu", "Aquarius", "\u{2652}"),
    ("Pis", "Pisces", "\u{2653}"),
];

/// A zodiac sign, declared in ecliptic order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// A sign code outside the twelve recognized 3-letter codes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized sign code: {0}")]
pub struct UnknownSignCode(pub String);

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Parse one of the twelve 3-letter codes (Ari, Tau, ..., Pis)
    pub fn from_code(code: &str) -> Result<Sign, UnknownSignCode> {
        Sign::ALL
            .iter()
            .copied()
            .find(|sign| sign.code() == code)
            .ok_or_else(|| UnknownSignCode(code.to_string()))
    }

    /// Index 0-11 in zodiac order
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        SIGNS[self as usize].0
    }

    pub fn name(self) -> &'static str {
        SIGNS[self as usize].1
    }

    pub fn symbol(self) -> &'static str {
        SIGNS[self as usize].2
    }

    /// Start of this sign's 30 degree span on the ecliptic
    pub fn start_longitude(self) -> f64 {
        self as usize as f64 * 30.0
    }

    /// Sign containing an absolute longitude (taken mod 360)
    pub fn from_longitude(longitude: f64) -> Sign {
        let normalized = longitude.rem_euclid(360.0);
        let index = (normalized / 30.0).floor() as usize;
        Sign::ALL[index.min(11)]
    }
}

impl FromStr for Sign {
    type Err = UnknownSignCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sign::from_code(s)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position within a sign (0-30) for an absolute longitude
pub fn degree_in_sign(longitude: f64) -> f64 {
    longitude.rem_euclid(360.0) % 30.0
}

/// Display form used by the calculation service, e.g. "10.00° Can"
pub fn format_position(sign: Sign, degree: f64) -> String {
    format!("{:.2}\u{b0} {}", degree, sign.code())
}
