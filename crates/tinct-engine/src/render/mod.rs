//! Rasterization of a recorded [`DrawList`](crate::scene::DrawList).
//!
//! Only a CPU path exists: it is what the demo uses to write PNGs and what
//! tests use to check that painted pixels agree with picked colors.

mod software;

pub use software::SoftwareRenderer;
