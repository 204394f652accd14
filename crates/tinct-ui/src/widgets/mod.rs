pub mod color_area;
pub mod hue_bar;
pub mod swatch;

pub use color_area::ColorAreaPicker;
pub use hue_bar::HueBar;
pub use swatch::Swatch;
