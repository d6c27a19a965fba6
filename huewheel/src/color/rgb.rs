use std::{
    fmt::{self, Display},
    str::FromStr,
};

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An 8-bit per channel sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` string. The leading `#` and all six digits are
    /// required, upper or lower case. No alpha channel.
    pub fn from_hex(hex: &str) -> Result<Self> {
        ensure!(
            hex.len() == 7
                && hex.starts_with('#')
                && hex.bytes().skip(1).all(|b| b.is_ascii_hexdigit()),
            "expected a color of the form `#RRGGBB`, got `{hex}`"
        );

        let channel = |range| {
            u8::from_str_radix(&hex[range], 16)
                .with_context(|| format!("invalid hex digits in `{hex}`"))
        };

        Ok(Self {
            r: channel(1..3)?,
            g: channel(3..5)?,
            b: channel(5..7)?,
        })
    }

    /// Formats as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

// Serialized as the hex string, not as a struct of three ints.
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_either_case() {
        let blue = Rgb::from_hex("#3B82F6").unwrap();
        assert_eq!(blue, Rgb::new(0x3b, 0x82, 0xf6));
        assert_eq!(blue, Rgb::from_hex("#3b82f6").unwrap());
    }

    #[test]
    fn formats_lowercase_zero_padded() {
        assert_eq!(Rgb::new(0x00, 0x0a, 0x0b).to_hex(), "#000a0b");
        assert_eq!(Rgb::new(0xff, 0xff, 0xff).to_string(), "#ffffff");
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "#", "3b82f6", "#3b82f", "#3b82f6a", "#3b82zz", "#3b82fé"] {
            assert!(Rgb::from_hex(bad).is_err(), "accepted `{bad}`");
        }
    }

    #[test]
    fn rejects_sign_characters() {
        // `from_str_radix` alone would accept these as signed digit pairs
        for bad in ["#+1+2+3", "#-0-0-0", "#+3b2f6"] {
            assert!(Rgb::from_hex(bad).is_err(), "accepted `{bad}`");
        }
    }

    #[test]
    fn serde_uses_hex_form() {
        let color = Rgb::new(0x3b, 0x82, 0xf6);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#3b82f6\"");
        assert_eq!(serde_json::from_str::<Rgb>(&json).unwrap(), color);
        assert!(serde_json::from_str::<Rgb>("\"3b82f6\"").is_err());
    }
}
