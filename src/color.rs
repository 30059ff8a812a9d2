//! RGB colors and their `#rrggbb` text form.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{FormatError, ParseError};

/// Color models exposing 16-bit channels with alpha.
pub trait Rgba {
    /// Returns `(r, g, b, a)` scaled to `0..=0xFFFF`.
    fn rgba(&self) -> (u16, u16, u16, u16);
}

/// An opaque color stored as 8-bit RGB values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The html hex form, e.g. `#ff0080`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses `#rrggbb`. Hex digits may be upper or lower case.
    pub fn from_hex(scol: &str) -> Result<Self, FormatError> {
        let digits = scol
            .strip_prefix('#')
            .ok_or_else(|| FormatError::MissingHash(scol.to_string()))?;
        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(FormatError::InvalidDigit(scol.to_string()));
        }
        if digits.len() != 6 {
            return Err(FormatError::WrongLength {
                input: scol.to_string(),
                digits: digits.len(),
            });
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| FormatError::InvalidDigit(scol.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn from_value(value: &Value) -> Result<Self, ParseError> {
        let Value::String(s) = value else {
            return Err(ParseError::ColorNotString {
                raw: value.to_string(),
            });
        };
        Self::from_hex(s).map_err(|source| ParseError::Color {
            raw: value.to_string(),
            source,
        })
    }
}

impl Rgba for Color {
    fn rgba(&self) -> (u16, u16, u16, u16) {
        let scale = |c: u8| u16::from(c) * 0x101;
        (scale(self.r), scale(self.g), scale(self.b), 0xFFFF)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(de::Error::custom)
    }
}
