//! Tinct engine crate.
//!
//! Owns the renderer-agnostic pieces the picker widgets are built from:
//! geometry and scale mapping, packed ARGB colors, cached rasters, the draw
//! command stream and a CPU renderer that turns that stream into pixels.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod render;
pub mod scene;
