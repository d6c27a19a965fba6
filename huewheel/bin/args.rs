use std::path::PathBuf;

use clap::Parser;

use huewheel::{color::Rgb, export::ExportFormat, palette::Scheme};

#[derive(Debug, Parser)]
/// Generates color palettes from a base color using hue wheel harmony rules.
pub struct Args {
    /// Base color as a `#RRGGBB` hex string. A random base color is picked
    /// when omitted.
    #[arg(value_parser = Rgb::from_hex)]
    pub base: Option<Rgb>,

    #[arg(long, short, value_enum, default_value = "complementary")]
    /// Harmony scheme used to derive the palette.
    pub scheme: Scheme,

    #[arg(long, short, default_value_t = 5)]
    /// Number of colors to generate, 3 to 8.
    pub count: usize,

    #[arg(long, short, value_enum, default_value = "list")]
    /// How to render the palette.
    pub format: ExportFormat,

    #[arg(long, short)]
    /// File to write the palette to instead of stdout.
    pub output: Option<PathBuf>,
}
