// src/color.rs

//! Translucent color values for overlay painting.
//!
//! Colors are 8-bit RGBA and (de)serialize as the 8-hex-digit `"rrggbbaa"`
//! string form, so a config file can say `"00ff008f"` for a translucent
//! green. The alpha channel matters here: the overlay is painted on top of
//! whatever the user is looking at, and must not fully obscure it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Returned when a color string is not exactly eight hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {0:?}: expected 8 hex digits (\"rrggbbaa\")")]
pub struct ParseColorError(pub String);

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 8 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        let component =
            |at: usize| u8::from_str_radix(&s[at..at + 2], 16).map_err(|_| ParseColorError(s.to_string()));
        Ok(Rgba {
            r: component(0)?,
            g: component(2)?,
            b: component(4)?,
            a: component(6)?,
        })
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl TryFrom<String> for Rgba {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}
