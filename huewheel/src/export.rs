use anyhow::Result;
use clap::ValueEnum;
use itertools::Itertools;
use serde::Serialize;

use crate::{color::Rgb, palette::Scheme};

/// A generated palette together with the inputs that produced it.
#[derive(Serialize, Debug, Clone)]
pub struct Palette {
    pub scheme: Scheme,
    pub base: Rgb,
    pub colors: Vec<Rgb>,
}

/// Text renderings of a palette.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Hex values separated by commas.
    List,
    /// CSS custom property declarations.
    Css,
    /// A JSON object with the scheme, base color, and colors.
    Json,
}

impl ExportFormat {
    pub fn render(self, palette: &Palette) -> Result<String> {
        Ok(match self {
            ExportFormat::List => palette.colors.iter().join(", "),
            ExportFormat::Css => palette
                .colors
                .iter()
                .enumerate()
                .map(|(i, color)| format!("--color-{}: {color};", i + 1))
                .join("\n"),
            ExportFormat::Json => serde_json::to_string_pretty(palette)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Palette {
        Palette {
            scheme: Scheme::SplitComplementary,
            base: Rgb::new(0x3b, 0x82, 0xf6),
            colors: vec![Rgb::new(0x3b, 0x82, 0xf6), Rgb::new(0xf6, 0xaf, 0x3b)],
        }
    }

    #[test]
    fn list_is_comma_separated() {
        let out = ExportFormat::List.render(&sample()).unwrap();
        assert_eq!(out, "#3b82f6, #f6af3b");
    }

    #[test]
    fn css_numbers_custom_properties_from_one() {
        let out = ExportFormat::Css.render(&sample()).unwrap();
        assert_eq!(out, "--color-1: #3b82f6;\n--color-2: #f6af3b;");
    }

    #[test]
    fn json_keeps_kebab_case_scheme_and_hex_colors() {
        let out = ExportFormat::Json.render(&sample()).unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&out).unwrap();
        assert_eq!(value["scheme"], "split-complementary");
        assert_eq!(value["base"], "#3b82f6");
        assert_eq!(value["colors"][1], "#f6af3b");
    }
}
