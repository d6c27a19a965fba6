use anyhow::{ensure, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{Hsl, Rgb};

/// Smallest palette worth calling a palette.
pub const MIN_COLORS: usize = 3;
/// Largest supported palette.
pub const MAX_COLORS: usize = 8;

/// The harmony rule used to pick related colors around a base color on the
/// HSL hue wheel.
#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    /// The base color and its opposite on the wheel.
    Complementary,
    /// Colors next to each other on the wheel, 30° apart.
    Analogous,
    /// Three colors evenly spaced on the wheel.
    Triadic,
    /// Shades of one hue, spread across the lightness range.
    Monochromatic,
    /// The base color plus the two hues adjacent to its complement.
    SplitComplementary,
}

impl Scheme {
    /// Derives an ordered palette of `count` colors from `base`.
    ///
    /// The first entry is the base color verbatim for every scheme except
    /// [`Scheme::Analogous`] and [`Scheme::Monochromatic`], which re-derive
    /// all entries from the hue wheel. Each scheme applies its own lightness
    /// and saturation bounds.
    pub fn generate(self, base: Rgb, count: usize) -> Result<Vec<Rgb>> {
        ensure!(
            (MIN_COLORS..=MAX_COLORS).contains(&count),
            "palette size must be between {MIN_COLORS} and {MAX_COLORS}, got {count}"
        );

        let hsl = Hsl::from_rgb(base);
        let mut colors = Vec::with_capacity(count);

        match self {
            Scheme::Complementary => {
                colors.push(base);
                colors.push(hsl.rotate(180.0).to_rgb());
                for i in 2..count {
                    let lightness = (hsl.l + (i as f32 - 2.0) * 20.0 - 20.0).clamp(10.0, 90.0);
                    colors.push(hsl.with_lightness(lightness).to_rgb());
                }
            }
            Scheme::Analogous => {
                for i in 0..count {
                    colors.push(hsl.rotate(i as f32 * 30.0).to_rgb());
                }
            }
            Scheme::Triadic => {
                colors.push(base);
                colors.push(hsl.rotate(120.0).to_rgb());
                colors.push(hsl.rotate(240.0).to_rgb());
                for i in 3..count {
                    let muted = hsl
                        .rotate((i as f32 - 3.0) * 60.0)
                        .with_saturation(hsl.s * 0.8);
                    colors.push(muted.to_rgb());
                }
            }
            Scheme::Monochromatic => {
                let step = 70.0 / (count as f32 - 1.0);
                for i in 0..count {
                    let lightness = (20.0 + i as f32 * step).clamp(10.0, 90.0);
                    colors.push(hsl.with_lightness(lightness).to_rgb());
                }
            }
            Scheme::SplitComplementary => {
                colors.push(base);
                colors.push(hsl.rotate(150.0).to_rgb());
                colors.push(hsl.rotate(210.0).to_rgb());
                for i in 3..count {
                    let saturation = (hsl.s - (i as f32 - 3.0) * 15.0).max(20.0);
                    colors.push(hsl.with_saturation(saturation).to_rgb());
                }
            }
        }

        colors.truncate(count);
        debug!("generated {count} {self:?} colors from {base}");
        Ok(colors)
    }
}

pub const ALL_SCHEMES: [Scheme; 5] = [
    Scheme::Complementary,
    Scheme::Analogous,
    Scheme::Triadic,
    Scheme::Monochromatic,
    Scheme::SplitComplementary,
];
