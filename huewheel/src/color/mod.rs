mod hsl;
mod rgb;

pub use self::{hsl::Hsl, rgb::Rgb};
