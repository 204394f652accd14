use std::sync::Arc;

use crate::coords::Rect;
use crate::raster::Raster;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// A cached raster stretched over `rect` without filtering.
///
/// The raster is shared, so recording a frame never copies pixel data.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub rect: Rect,
    pub raster: Arc<Raster>,
}

impl DrawList {
    #[inline]
    pub fn push_image(&mut self, z: ZIndex, rect: Rect, raster: Arc<Raster>) {
        self.push(z, DrawCmd::Image(ImageCmd { rect, raster }));
    }
}
