//! Paint model shared between widgets and the renderer.
//!
//! Scope:
//! - packed 32-bit ARGB colors (alpha carried, never blended)
//! - the HSV view used to derive a hue from an arbitrary color

mod color;
mod hsv;

pub use color::{Color, ColorParseError};
pub use hsv::{Hsv, hue_of};
