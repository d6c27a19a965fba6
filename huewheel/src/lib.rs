//! Palette generation on the HSL hue wheel. Derives an ordered set of
//! related colors from one base color using classic harmony rules.

pub mod color;
pub mod export;
pub mod palette;
