//! Geometry shared by the widgets and the renderer.
//!
//! Canonical space:
//! - logical pixels
//! - origin top-left, +X right, +Y down
//!
//! Rasters live in their own integer index space; [`ScaleFactor`] converts
//! between the two in both directions.

mod rect;
mod scale;
mod vec2;

pub use rect::Rect;
pub use scale::{ScaleFactor, clamp_to_bounds};
pub use vec2::Vec2;
