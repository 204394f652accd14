use crate::scene::shapes::{FillRectCmd, ImageCmd, LineCmd, RingCmd};

/// One recorded draw operation.
///
/// Adding a shape: create `scene::shapes::<shape>.rs` with the payload and a
/// `DrawList::push_*` helper, add a variant here, then teach the software
/// renderer to rasterize it.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect(FillRectCmd),
    Line(LineCmd),
    Ring(RingCmd),
    Image(ImageCmd),
}
