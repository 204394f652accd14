mod image;
mod line;
mod rect;
mod ring;

pub use image::ImageCmd;
pub use line::LineCmd;
pub use rect::FillRectCmd;
pub use ring::RingCmd;
