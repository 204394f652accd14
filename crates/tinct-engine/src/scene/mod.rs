//! Draw stream types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic paint order (z-index, then insertion order)
//! - keep each shape's payload and push helper in its own file under `shapes`

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
